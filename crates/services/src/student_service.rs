use std::sync::Arc;

use quizbook_core::model::{NewStudent, Student, StudentId};
use storage::repository::StudentRepository;

use crate::error::StudentServiceError;

/// Orchestrates student registration and listing.
#[derive(Clone)]
pub struct StudentService {
    students: Arc<dyn StudentRepository>,
}

impl StudentService {
    #[must_use]
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    /// Validate and persist a new student.
    ///
    /// # Errors
    ///
    /// Returns `StudentServiceError::Student` for validation failures.
    /// Returns `StudentServiceError::Storage` if persistence fails.
    pub async fn create_student(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<StudentId, StudentServiceError> {
        let draft = NewStudent::new(first_name, last_name)?;
        let id = self.students.insert_student(&draft).await?;
        tracing::info!(student_id = %id, "student created");
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns `StudentServiceError::Storage` if repository access fails.
    pub async fn list_students(&self) -> Result<Vec<Student>, StudentServiceError> {
        Ok(self.students.list_students().await?)
    }

    /// Returns `Ok(None)` when the student does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StudentServiceError::Storage` if repository access fails.
    pub async fn get_student(&self, id: StudentId) -> Result<Option<Student>, StudentServiceError> {
        Ok(self.students.get_student(id).await?)
    }
}
