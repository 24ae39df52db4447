use dioxus::prelude::*;

use crate::forms::ResultForm;
use crate::views::layout::{ErrorBanner, Page};
use crate::vm::ChoiceVm;

#[derive(Props, Clone, PartialEq)]
pub struct ResultFormProps {
    students: Vec<ChoiceVm>,
    quizzes: Vec<ChoiceVm>,
    score: String,
    error: Option<String>,
}

#[component]
fn ResultFormPage(props: ResultFormProps) -> Element {
    rsx! {
        Page { heading: String::from("Record result"), show_nav: true,
            ErrorBanner { message: props.error.clone().unwrap_or_default() }
            form { method: "post", action: "/results/add",
                label { "Student "
                    ChoiceSelect { name: String::from("student_id"), choices: props.students.clone() }
                }
                label { "Quiz "
                    ChoiceSelect { name: String::from("quiz_id"), choices: props.quizzes.clone() }
                }
                label { "Score "
                    input { r#type: "number", name: "score", min: "0", value: "{props.score}" }
                }
                button { r#type: "submit", "Record result" }
            }
        }
    }
}

#[component]
fn ChoiceSelect(name: String, choices: Vec<ChoiceVm>) -> Element {
    rsx! {
        select { name: "{name}",
            option { value: "", "-- choose --" }
            for choice in choices.iter() {
                option { key: "{choice.value}", value: "{choice.value}", selected: choice.selected, "{choice.label}" }
            }
        }
    }
}

/// The result form. Selectors list every current student and quiz;
/// `values` restores the previous submission after a rejected attempt.
#[must_use]
pub fn render_result_form(
    students: Vec<ChoiceVm>,
    quizzes: Vec<ChoiceVm>,
    values: &ResultForm,
    error: Option<String>,
) -> String {
    super::finish(VirtualDom::new_with_props(
        ResultFormPage,
        ResultFormProps {
            students,
            quizzes,
            score: values.score.clone(),
            error,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_option_per_choice() {
        let students = vec![ChoiceVm {
            value: "1".into(),
            label: "Ada Lovelace".into(),
            selected: false,
        }];
        let quizzes = vec![ChoiceVm {
            value: "7".into(),
            label: "Math (2024-01-01, 10 questions)".into(),
            selected: true,
        }];
        let html = render_result_form(students, quizzes, &ResultForm::default(), None);
        assert!(html.contains("name=\"student_id\""));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("value=\"7\""));
        assert!(!html.contains("class=\"error\""));
    }
}
