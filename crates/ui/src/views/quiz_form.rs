use dioxus::prelude::*;

use crate::forms::QuizForm;
use crate::views::layout::{ErrorBanner, Page};

#[derive(Props, Clone, PartialEq)]
pub struct QuizFormProps {
    values: QuizForm,
    error: Option<String>,
}

#[component]
fn QuizFormPage(props: QuizFormProps) -> Element {
    rsx! {
        Page { heading: String::from("Add quiz"), show_nav: true,
            ErrorBanner { message: props.error.clone().unwrap_or_default() }
            form { method: "post", action: "/quiz/add",
                label { "Subject "
                    input { r#type: "text", name: "subject", value: "{props.values.subject}" }
                }
                label { "Number of questions "
                    input { r#type: "number", name: "num_questions", min: "1", value: "{props.values.num_questions}" }
                }
                label { "Date "
                    input { r#type: "date", name: "quiz_date", value: "{props.values.quiz_date}" }
                }
                button { r#type: "submit", "Add quiz" }
            }
        }
    }
}

#[must_use]
pub fn render_quiz_form(values: QuizForm, error: Option<String>) -> String {
    super::finish(VirtualDom::new_with_props(
        QuizFormPage,
        QuizFormProps { values, error },
    ))
}
