use std::sync::Arc;

use quizbook_core::model::AdminCredentials;
use storage::Storage;

use crate::auth_service::AdminAuth;
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;
use crate::result_service::ResultService;
use crate::student_service::StudentService;

/// Assembles the app-facing services over one `Storage`.
#[derive(Clone)]
pub struct AppServices {
    students: Arc<StudentService>,
    quizzes: Arc<QuizService>,
    results: Arc<ResultService>,
    auth: Arc<AdminAuth>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, credentials: AdminCredentials) -> Self {
        let students = Arc::new(StudentService::new(Arc::clone(&storage.students)));
        let quizzes = Arc::new(QuizService::new(Arc::clone(&storage.quizzes)));
        let results = Arc::new(ResultService::new(
            Arc::clone(&storage.students),
            Arc::clone(&storage.quizzes),
            Arc::clone(&storage.results),
        ));
        let auth = Arc::new(AdminAuth::new(credentials));

        Self {
            students,
            quizzes,
            results,
            auth,
        }
    }

    /// Build services backed by `SQLite` storage with the embedded schema applied.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        credentials: AdminCredentials,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage, credentials))
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
