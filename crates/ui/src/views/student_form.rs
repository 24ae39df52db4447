use dioxus::prelude::*;

use crate::forms::StudentForm;
use crate::views::layout::{ErrorBanner, Page};

#[derive(Props, Clone, PartialEq)]
pub struct StudentFormProps {
    values: StudentForm,
    error: Option<String>,
}

#[component]
fn StudentFormPage(props: StudentFormProps) -> Element {
    rsx! {
        Page { heading: String::from("Add student"), show_nav: true,
            ErrorBanner { message: props.error.clone().unwrap_or_default() }
            form { method: "post", action: "/student/add",
                label { "First name "
                    input { r#type: "text", name: "first_name", value: "{props.values.first_name}" }
                }
                label { "Last name "
                    input { r#type: "text", name: "last_name", value: "{props.values.last_name}" }
                }
                button { r#type: "submit", "Add student" }
            }
        }
    }
}

#[must_use]
pub fn render_student_form(values: StudentForm, error: Option<String>) -> String {
    super::finish(VirtualDom::new_with_props(
        StudentFormPage,
        StudentFormProps { values, error },
    ))
}
