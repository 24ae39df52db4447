use dioxus::prelude::*;

const STYLE: &str = "body { font-family: sans-serif; margin: 0; color: #222; }
nav { background: #2d3e50; padding: 0.6rem 1rem; }
nav a { color: #fff; margin-right: 1rem; text-decoration: none; }
main { padding: 1rem 2rem; max-width: 60rem; }
table { border-collapse: collapse; margin-bottom: 1.5rem; }
th, td { border: 1px solid #ccc; padding: 0.3rem 0.7rem; text-align: left; }
form label { display: block; margin: 0.5rem 0; }
.error { color: #a00; font-weight: bold; }
.empty { color: #666; font-style: italic; }";

/// Shared page chrome. The navigation bar is hidden on the login page.
#[component]
pub fn Page(heading: String, show_nav: bool, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{heading} - Quizbook" }
            style { "{STYLE}" }
        }
        body {
            if show_nav {
                NavBar {}
            }
            main {
                h1 { "{heading}" }
                {children}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav {
            a { href: "/dashboard", "Dashboard" }
            a { href: "/student/add", "Add student" }
            a { href: "/quiz/add", "Add quiz" }
            a { href: "/results/add", "Record result" }
            a { href: "/logout", "Log out" }
        }
    }
}

/// Validation message above a form. Renders nothing for an empty message.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        p { class: "error", "{message}" }
    }
}

#[component]
fn ServerErrorPage() -> Element {
    rsx! {
        Page { heading: String::from("Something went wrong"), show_nav: false,
            p { "The server could not complete the request. Please try again." }
            a { href: "/dashboard", "Back to the dashboard" }
        }
    }
}

#[must_use]
pub fn render_server_error() -> String {
    super::finish(VirtualDom::new(ServerErrorPage))
}
