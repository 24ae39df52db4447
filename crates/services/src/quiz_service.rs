use std::sync::Arc;

use chrono::NaiveDate;
use quizbook_core::model::{NewQuiz, Quiz, QuizId};
use storage::repository::QuizRepository;

use crate::error::QuizServiceError;

/// Orchestrates quiz creation and listing.
#[derive(Clone)]
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { quizzes }
    }

    /// Create a new quiz and persist it.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` for validation failures.
    /// Returns `QuizServiceError::Storage` if persistence fails.
    pub async fn create_quiz(
        &self,
        subject: &str,
        num_questions: u32,
        quiz_date: NaiveDate,
    ) -> Result<QuizId, QuizServiceError> {
        let draft = NewQuiz::new(subject, num_questions, quiz_date)?;
        let id = self.quizzes.insert_quiz(&draft).await?;
        tracing::info!(quiz_id = %id, subject = draft.subject(), "quiz created");
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` if repository access fails.
    pub async fn list_quizzes(&self) -> Result<Vec<Quiz>, QuizServiceError> {
        Ok(self.quizzes.list_quizzes().await?)
    }
}
