use std::sync::Arc;

use quizbook_core::model::{NewResult, QuizId, ResultId, StudentId, StudentQuizScore};
use storage::repository::{QuizRepository, ResultRepository, StudentRepository};

use crate::error::ResultServiceError;

/// Records quiz scores and reads them back per student.
#[derive(Clone)]
pub struct ResultService {
    students: Arc<dyn StudentRepository>,
    quizzes: Arc<dyn QuizRepository>,
    results: Arc<dyn ResultRepository>,
}

impl ResultService {
    #[must_use]
    pub fn new(
        students: Arc<dyn StudentRepository>,
        quizzes: Arc<dyn QuizRepository>,
        results: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            students,
            quizzes,
            results,
        }
    }

    /// Record `score` for a student on a quiz.
    ///
    /// Both references are resolved first, so a dangling id is reported as
    /// such instead of surfacing as a store constraint failure.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStudent` / `UnknownQuiz` for missing references,
    /// `Result` when the score exceeds the quiz's question count, and
    /// `Storage` if repository access fails.
    pub async fn record_result(
        &self,
        student_id: StudentId,
        quiz_id: QuizId,
        score: u32,
    ) -> Result<ResultId, ResultServiceError> {
        let student = self
            .students
            .get_student(student_id)
            .await?
            .ok_or(ResultServiceError::UnknownStudent(student_id))?;
        let quiz = self
            .quizzes
            .get_quiz(quiz_id)
            .await?
            .ok_or(ResultServiceError::UnknownQuiz(quiz_id))?;

        let draft = NewResult::new(&student, &quiz, score)?;
        let id = self.results.insert_result(&draft).await?;
        tracing::info!(
            result_id = %id,
            student_id = %student_id,
            quiz_id = %quiz_id,
            score,
            "result recorded"
        );
        Ok(id)
    }

    /// Quiz subject and score for every result the student has.
    ///
    /// # Errors
    ///
    /// Returns `ResultServiceError::Storage` if repository access fails.
    pub async fn results_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<StudentQuizScore>, ResultServiceError> {
        Ok(self.results.results_for_student(student_id).await?)
    }
}
