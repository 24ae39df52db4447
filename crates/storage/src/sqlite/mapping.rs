use chrono::NaiveDate;
use quizbook_core::model::{Quiz, QuizId, ResultId, Student, StudentId, StudentQuizScore};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Constraint violations become `Conflict`; anything else is a connection-level failure.
pub(crate) fn db_err(e: sqlx::Error) -> StorageError {
    if let Some(db) = e.as_database_error() {
        if db.is_foreign_key_violation() || db.is_check_violation() || db.is_unique_violation() {
            return StorageError::Conflict(db.message().to_string());
        }
    }
    StorageError::Connection(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn id_i64(field: &'static str, v: u64) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} overflow")))
}

/// Key for a lookup by id. Ids past `i64::MAX` cannot be rowids, so they
/// match nothing.
pub(crate) fn lookup_key(v: u64) -> Option<i64> {
    i64::try_from(v).ok()
}

pub(crate) fn student_id_from_i64(v: i64) -> Result<StudentId, StorageError> {
    Ok(StudentId::new(i64_to_u64("student_id", v)?))
}

pub(crate) fn quiz_id_from_i64(v: i64) -> Result<QuizId, StorageError> {
    Ok(QuizId::new(i64_to_u64("quiz_id", v)?))
}

pub(crate) fn result_id_from_i64(v: i64) -> Result<ResultId, StorageError> {
    Ok(ResultId::new(i64_to_u64("result_id", v)?))
}

pub(crate) fn map_student_row(row: &SqliteRow) -> Result<Student, StorageError> {
    Ok(Student::from_persisted(
        student_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        row.try_get::<String, _>("first_name").map_err(ser)?,
        row.try_get::<String, _>("last_name").map_err(ser)?,
    ))
}

pub(crate) fn map_quiz_row(row: &SqliteRow) -> Result<Quiz, StorageError> {
    let num_questions = u32_from_i64(
        "num_questions",
        row.try_get::<i64, _>("num_questions").map_err(ser)?,
    )?;
    let quiz_date: NaiveDate = row.try_get("quiz_date").map_err(ser)?;

    Ok(Quiz::from_persisted(
        quiz_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        row.try_get::<String, _>("subject").map_err(ser)?,
        num_questions,
        quiz_date,
    ))
}

pub(crate) fn map_score_row(row: &SqliteRow) -> Result<StudentQuizScore, StorageError> {
    Ok(StudentQuizScore {
        quiz_id: quiz_id_from_i64(row.try_get::<i64, _>("quiz_id").map_err(ser)?)?,
        subject: row.try_get::<String, _>("subject").map_err(ser)?,
        score: u32_from_i64("score", row.try_get::<i64, _>("score").map_err(ser)?)?,
    })
}
