use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use services::{QuizServiceError, ResultServiceError, StudentServiceError};

use crate::views;

/// Failures a handler cannot recover from. The client only sees a generic 500.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UiError {
    #[error(transparent)]
    Students(#[from] StudentServiceError),
    #[error(transparent)]
    Quizzes(#[from] QuizServiceError),
    #[error(transparent)]
    Results(#[from] ResultServiceError),
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::render_server_error()),
        )
            .into_response()
    }
}

/// A form page re-rendered with a validation message.
pub(crate) fn unprocessable(html: String) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
}
