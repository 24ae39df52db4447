use quizbook_core::model::{NewResult, ResultId, StudentId, StudentQuizScore};

use super::SqliteRepository;
use super::mapping::{db_err, id_i64, lookup_key, map_score_row, result_id_from_i64};
use crate::repository::{ResultRepository, StorageError};

#[async_trait::async_trait]
impl ResultRepository for SqliteRepository {
    async fn insert_result(&self, result: &NewResult) -> Result<ResultId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO result (student_id, quiz_id, score)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(id_i64("student_id", result.student_id().value())?)
        .bind(id_i64("quiz_id", result.quiz_id().value())?)
        .bind(i64::from(result.score()))
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        result_id_from_i64(res.last_insert_rowid())
    }

    async fn results_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<StudentQuizScore>, StorageError> {
        let Some(key) = lookup_key(student_id.value()) else {
            return Ok(Vec::new());
        };
        let rows = sqlx::query(
            r"
            SELECT quiz.id AS quiz_id, quiz.subject AS subject, result.score AS score
            FROM result
            JOIN quiz ON result.quiz_id = quiz.id
            WHERE result.student_id = ?1
            ORDER BY result.id ASC
            ",
        )
        .bind(key)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(map_score_row).collect()
    }
}
