use dioxus::prelude::*;

use crate::views::layout::Page;
use crate::vm::ScoreRowVm;

#[derive(Props, Clone, PartialEq)]
pub struct StudentResultsProps {
    student_id: u64,
    rows: Vec<ScoreRowVm>,
}

#[component]
fn StudentResultsPage(props: StudentResultsProps) -> Element {
    rsx! {
        Page { heading: format!("Results for student #{}", props.student_id), show_nav: true,
            if props.rows.is_empty() {
                p { class: "empty", "No results recorded." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Quiz ID" }
                            th { "Subject" }
                            th { "Score" }
                        }
                    }
                    tbody {
                        for row in props.rows.iter() {
                            tr { class: "result-row",
                                td { "{row.quiz_id}" }
                                td { "{row.subject}" }
                                td { "{row.score}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Results page for one student. Unknown students and students without
/// results both get the empty table.
#[must_use]
pub fn render_student_results(student_id: u64, rows: Vec<ScoreRowVm>) -> String {
    super::finish(VirtualDom::new_with_props(
        StudentResultsPage,
        StudentResultsProps { student_id, rows },
    ))
}
