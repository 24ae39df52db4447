//! Server-rendered pages.
//!
//! Each page is a dioxus component rendered once into a string with
//! `dioxus_ssr`. No client-side code is shipped.

use dioxus::prelude::*;

mod dashboard;
mod layout;
mod login;
mod quiz_form;
mod result_form;
mod student_form;
mod student_results;

pub use dashboard::render_dashboard;
pub use layout::render_server_error;
pub use login::render_login;
pub use quiz_form::render_quiz_form;
pub use result_form::render_result_form;
pub use student_form::render_student_form;
pub use student_results::render_student_results;

/// Run the initial render and serialize the page inside the document root.
fn finish(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    )
}
