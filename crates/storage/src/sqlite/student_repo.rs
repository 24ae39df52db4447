use quizbook_core::model::{NewStudent, Student, StudentId};

use super::SqliteRepository;
use super::mapping::{db_err, lookup_key, map_student_row, student_id_from_i64};
use crate::repository::{StorageError, StudentRepository};

#[async_trait::async_trait]
impl StudentRepository for SqliteRepository {
    async fn insert_student(&self, student: &NewStudent) -> Result<StudentId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO student (first_name, last_name)
            VALUES (?1, ?2)
            ",
        )
        .bind(student.first_name())
        .bind(student.last_name())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        student_id_from_i64(res.last_insert_rowid())
    }

    async fn list_students(&self) -> Result<Vec<Student>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, first_name, last_name
            FROM student
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(map_student_row).collect()
    }

    async fn get_student(&self, id: StudentId) -> Result<Option<Student>, StorageError> {
        let Some(key) = lookup_key(id.value()) else {
            return Ok(None);
        };
        let row = sqlx::query(
            r"
            SELECT id, first_name, last_name
            FROM student WHERE id = ?1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(map_student_row).transpose()
    }
}
