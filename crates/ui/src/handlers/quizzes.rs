use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use services::QuizServiceError;

use crate::context::AppContext;
use crate::error::{UiError, unprocessable};
use crate::forms::QuizForm;
use crate::session::AdminSession;
use crate::views;

pub(crate) async fn quiz_form(_admin: AdminSession) -> Html<String> {
    Html(views::render_quiz_form(QuizForm::default(), None))
}

pub(crate) async fn add_quiz(
    _admin: AdminSession,
    State(ctx): State<AppContext>,
    Form(form): Form<QuizForm>,
) -> Result<Response, UiError> {
    let parsed = match form.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            return Ok(unprocessable(views::render_quiz_form(
                form,
                Some(err.to_string()),
            )));
        }
    };

    match ctx
        .quizzes()
        .create_quiz(&form.subject, parsed.num_questions, parsed.quiz_date)
        .await
    {
        Ok(_) => Ok(Redirect::to("/dashboard").into_response()),
        Err(QuizServiceError::Quiz(err)) => Ok(unprocessable(views::render_quiz_form(
            form,
            Some(err.to_string()),
        ))),
        Err(err) => Err(err.into()),
    }
}
