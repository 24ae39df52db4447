use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::context::AppContext;
use crate::error::UiError;
use crate::forms::LoginForm;
use crate::session::{self, LOGIN_PATH};
use crate::views;

const LOGIN_FAILED: &str = "Invalid username or password";

pub(crate) async fn index() -> Redirect {
    Redirect::to(LOGIN_PATH)
}

pub(crate) async fn login_form() -> Html<String> {
    Html(views::render_login("", None))
}

pub(crate) async fn login(
    State(ctx): State<AppContext>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, UiError> {
    if ctx.auth().login(&form.username, &form.password) {
        session::mark_logged_in(&session).await?;
        return Ok(Redirect::to("/dashboard").into_response());
    }
    Ok(Html(views::render_login(&form.username, Some(LOGIN_FAILED.to_string()))).into_response())
}

pub(crate) async fn logout(session: Session) -> Result<Redirect, UiError> {
    session::clear(&session).await?;
    tracing::info!("admin logged out");
    Ok(Redirect::to(LOGIN_PATH))
}
