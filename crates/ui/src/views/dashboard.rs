use dioxus::prelude::*;

use crate::views::layout::Page;
use crate::vm::{QuizRowVm, StudentRowVm};

#[derive(Props, Clone, PartialEq)]
pub struct DashboardProps {
    students: Vec<StudentRowVm>,
    quizzes: Vec<QuizRowVm>,
}

#[component]
fn DashboardPage(props: DashboardProps) -> Element {
    rsx! {
        Page { heading: String::from("Dashboard"), show_nav: true,
            h2 { "Students" }
            if props.students.is_empty() {
                p { class: "empty", "No students yet." }
            } else {
                table {
                    thead {
                        tr {
                            th { "ID" }
                            th { "First name" }
                            th { "Last name" }
                            th { "" }
                        }
                    }
                    tbody {
                        for row in props.students.iter() {
                            tr { key: "{row.id}",
                                td { "{row.id}" }
                                td { "{row.first_name}" }
                                td { "{row.last_name}" }
                                td { a { href: "{row.results_href}", "Results" } }
                            }
                        }
                    }
                }
            }

            h2 { "Quizzes" }
            if props.quizzes.is_empty() {
                p { class: "empty", "No quizzes yet." }
            } else {
                table {
                    thead {
                        tr {
                            th { "ID" }
                            th { "Subject" }
                            th { "Questions" }
                            th { "Date" }
                        }
                    }
                    tbody {
                        for row in props.quizzes.iter() {
                            tr { key: "{row.id}",
                                td { "{row.id}" }
                                td { "{row.subject}" }
                                td { "{row.num_questions}" }
                                td { "{row.date_str}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_dashboard(students: Vec<StudentRowVm>, quizzes: Vec<QuizRowVm>) -> String {
    super::finish(VirtualDom::new_with_props(
        DashboardPage,
        DashboardProps { students, quizzes },
    ))
}
