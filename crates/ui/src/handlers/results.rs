use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::context::AppContext;
use crate::error::{UiError, unprocessable};
use crate::forms::ResultForm;
use crate::session::AdminSession;
use crate::views;
use crate::vm::{quiz_choices, student_choices};

/// Render the result form with fresh selector contents.
async fn render_with_choices(
    ctx: &AppContext,
    values: &ResultForm,
    error: Option<String>,
) -> Result<String, UiError> {
    let students = ctx.students().list_students().await?;
    let quizzes = ctx.quizzes().list_quizzes().await?;
    Ok(views::render_result_form(
        student_choices(&students, &values.student_id),
        quiz_choices(&quizzes, &values.quiz_id),
        values,
        error,
    ))
}

pub(crate) async fn result_form(
    _admin: AdminSession,
    State(ctx): State<AppContext>,
) -> Result<Html<String>, UiError> {
    let html = render_with_choices(&ctx, &ResultForm::default(), None).await?;
    Ok(Html(html))
}

pub(crate) async fn add_result(
    _admin: AdminSession,
    State(ctx): State<AppContext>,
    Form(form): Form<ResultForm>,
) -> Result<Response, UiError> {
    let parsed = match form.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            let html = render_with_choices(&ctx, &form, Some(err.to_string())).await?;
            return Ok(unprocessable(html));
        }
    };

    match ctx
        .results()
        .record_result(parsed.student_id, parsed.quiz_id, parsed.score)
        .await
    {
        Ok(_) => Ok(Redirect::to("/dashboard").into_response()),
        Err(err) if err.is_rejection() => {
            let html = render_with_choices(&ctx, &form, Some(err.to_string())).await?;
            Ok(unprocessable(html))
        }
        Err(err) => Err(err.into()),
    }
}
