use axum::Router;
use axum::routing::get;

use crate::context::AppContext;
use crate::handlers::{auth, quizzes, results, students};
use crate::session::SessionConfig;

/// The whole site. Every route except `/`, `/login` and `/logout` sits
/// behind the admin gate.
pub fn router(ctx: AppContext, sessions: &SessionConfig) -> Router {
    Router::new()
        .route("/", get(auth::index))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(students::dashboard))
        .route(
            "/student/add",
            get(students::student_form).post(students::add_student),
        )
        .route("/student/{id}", get(students::student_results))
        .route("/quiz/add", get(quizzes::quiz_form).post(quizzes::add_quiz))
        .route(
            "/results/add",
            get(results::result_form).post(results::add_result),
        )
        .layer(sessions.layer())
        .with_state(ctx)
}
