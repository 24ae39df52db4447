use quizbook_core::model::{NewQuiz, Quiz, QuizId};

use super::SqliteRepository;
use super::mapping::{db_err, lookup_key, map_quiz_row, quiz_id_from_i64};
use crate::repository::{QuizRepository, StorageError};

#[async_trait::async_trait]
impl QuizRepository for SqliteRepository {
    async fn insert_quiz(&self, quiz: &NewQuiz) -> Result<QuizId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO quiz (subject, num_questions, quiz_date)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(quiz.subject())
        .bind(i64::from(quiz.num_questions()))
        .bind(quiz.quiz_date())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        quiz_id_from_i64(res.last_insert_rowid())
    }

    async fn list_quizzes(&self) -> Result<Vec<Quiz>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, subject, num_questions, quiz_date
            FROM quiz
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(map_quiz_row).collect()
    }

    async fn get_quiz(&self, id: QuizId) -> Result<Option<Quiz>, StorageError> {
        let Some(key) = lookup_key(id.value()) else {
            return Ok(None);
        };
        let row = sqlx::query(
            r"
            SELECT id, subject, num_questions, quiz_date
            FROM quiz WHERE id = ?1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(map_quiz_row).transpose()
    }
}
