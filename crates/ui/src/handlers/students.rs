use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use quizbook_core::model::StudentId;
use services::StudentServiceError;

use crate::context::AppContext;
use crate::error::{UiError, unprocessable};
use crate::forms::StudentForm;
use crate::session::AdminSession;
use crate::views;
use crate::vm::{map_quiz_rows, map_score_rows, map_student_rows};

pub(crate) async fn dashboard(
    _admin: AdminSession,
    State(ctx): State<AppContext>,
) -> Result<Html<String>, UiError> {
    let students = ctx.students().list_students().await?;
    let quizzes = ctx.quizzes().list_quizzes().await?;
    Ok(Html(views::render_dashboard(
        map_student_rows(&students),
        map_quiz_rows(&quizzes),
    )))
}

pub(crate) async fn student_form(_admin: AdminSession) -> Html<String> {
    Html(views::render_student_form(StudentForm::default(), None))
}

pub(crate) async fn add_student(
    _admin: AdminSession,
    State(ctx): State<AppContext>,
    Form(form): Form<StudentForm>,
) -> Result<Response, UiError> {
    match ctx
        .students()
        .create_student(&form.first_name, &form.last_name)
        .await
    {
        Ok(_) => Ok(Redirect::to("/dashboard").into_response()),
        Err(StudentServiceError::Student(err)) => {
            tracing::debug!(error = %err, "student rejected");
            Ok(unprocessable(views::render_student_form(
                form,
                Some(err.to_string()),
            )))
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) async fn student_results(
    _admin: AdminSession,
    State(ctx): State<AppContext>,
    Path(id): Path<u64>,
) -> Result<Html<String>, UiError> {
    let rows = ctx
        .results()
        .results_for_student(StudentId::new(id))
        .await?;
    Ok(Html(views::render_student_results(id, map_score_rows(&rows))))
}
