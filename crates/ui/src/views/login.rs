use dioxus::prelude::*;

use crate::views::layout::{ErrorBanner, Page};

#[derive(Props, Clone, PartialEq)]
pub struct LoginProps {
    username: String,
    error: Option<String>,
}

#[component]
fn LoginPage(props: LoginProps) -> Element {
    rsx! {
        Page { heading: String::from("Log in"), show_nav: false,
            ErrorBanner { message: props.error.clone().unwrap_or_default() }
            form { method: "post", action: "/login",
                label { "Username "
                    input { r#type: "text", name: "username", value: "{props.username}" }
                }
                label { "Password "
                    input { r#type: "password", name: "password" }
                }
                button { r#type: "submit", "Log in" }
            }
        }
    }
}

/// The login form. `username` is echoed back after a failed attempt; the
/// password never is.
#[must_use]
pub fn render_login(username: &str, error: Option<String>) -> String {
    super::finish(VirtualDom::new_with_props(
        LoginPage,
        LoginProps {
            username: username.to_string(),
            error,
        },
    ))
}
