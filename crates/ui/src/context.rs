use std::sync::Arc;

use services::{AdminAuth, AppServices, QuizService, ResultService, StudentService};

/// What the web layer needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn students(&self) -> Arc<StudentService>;
    fn quizzes(&self) -> Arc<QuizService>;
    fn results(&self) -> Arc<ResultService>;
    fn auth(&self) -> Arc<AdminAuth>;
}

impl UiApp for AppServices {
    fn students(&self) -> Arc<StudentService> {
        AppServices::students(self)
    }

    fn quizzes(&self) -> Arc<QuizService> {
        AppServices::quizzes(self)
    }

    fn results(&self) -> Arc<ResultService> {
        AppServices::results(self)
    }

    fn auth(&self) -> Arc<AdminAuth> {
        AppServices::auth(self)
    }
}

/// Shared handler state. Cheap to clone; every field is an `Arc`.
#[derive(Clone)]
pub struct AppContext {
    students: Arc<StudentService>,
    quizzes: Arc<QuizService>,
    results: Arc<ResultService>,
    auth: Arc<AdminAuth>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            students: app.students(),
            quizzes: app.quizzes(),
            results: app.results(),
            auth: app.auth(),
        }
    }

    #[must_use]
    pub fn students(&self) -> Arc<StudentService> {
        Arc::clone(&self.students)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AdminAuth> {
        Arc::clone(&self.auth)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
