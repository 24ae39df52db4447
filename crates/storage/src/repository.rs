use async_trait::async_trait;
use quizbook_core::model::{
    NewQuiz, NewResult, NewStudent, Quiz, QuizId, QuizResult, ResultId, Student, StudentId,
    StudentQuizScore,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a student and return the id the store assigned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be written.
    async fn insert_student(&self, student: &NewStudent) -> Result<StudentId, StorageError>;

    /// All students in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on query or mapping failures.
    async fn list_students(&self) -> Result<Vec<Student>, StorageError>;

    /// Fetch a student by ID. `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on query or mapping failures.
    async fn get_student(&self, id: StudentId) -> Result<Option<Student>, StorageError>;
}

#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Insert a quiz and return the id the store assigned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be written.
    async fn insert_quiz(&self, quiz: &NewQuiz) -> Result<QuizId, StorageError>;

    /// All quizzes in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on query or mapping failures.
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, StorageError>;

    /// Fetch a quiz by ID. `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on query or mapping failures.
    async fn get_quiz(&self, id: QuizId) -> Result<Option<Quiz>, StorageError>;
}

#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Record a score.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if a reference is dangling, or other
    /// storage errors.
    async fn insert_result(&self, result: &NewResult) -> Result<ResultId, StorageError>;

    /// Subject and score for every quiz the student has a result for.
    ///
    /// An unknown student yields an empty list, same as a student without
    /// results.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on query or mapping failures.
    async fn results_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<StudentQuizScore>, StorageError>;
}

#[derive(Default)]
struct Tables {
    students: Vec<Student>,
    quizzes: Vec<Quiz>,
    results: Vec<QuizResult>,
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Ids start at 1 and grow per table, like `SQLite` rowids.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T, StorageError> {
        let mut guard = self
            .tables
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(f(&mut guard))
    }
}

fn next_id(len: usize) -> u64 {
    len as u64 + 1
}

#[async_trait]
impl StudentRepository for InMemoryRepository {
    async fn insert_student(&self, student: &NewStudent) -> Result<StudentId, StorageError> {
        self.with_tables(|t| {
            let id = StudentId::new(next_id(t.students.len()));
            t.students.push(student.clone().assign_id(id));
            id
        })
    }

    async fn list_students(&self) -> Result<Vec<Student>, StorageError> {
        self.with_tables(|t| t.students.clone())
    }

    async fn get_student(&self, id: StudentId) -> Result<Option<Student>, StorageError> {
        self.with_tables(|t| t.students.iter().find(|s| s.id() == id).cloned())
    }
}

#[async_trait]
impl QuizRepository for InMemoryRepository {
    async fn insert_quiz(&self, quiz: &NewQuiz) -> Result<QuizId, StorageError> {
        self.with_tables(|t| {
            let id = QuizId::new(next_id(t.quizzes.len()));
            t.quizzes.push(quiz.clone().assign_id(id));
            id
        })
    }

    async fn list_quizzes(&self) -> Result<Vec<Quiz>, StorageError> {
        self.with_tables(|t| t.quizzes.clone())
    }

    async fn get_quiz(&self, id: QuizId) -> Result<Option<Quiz>, StorageError> {
        self.with_tables(|t| t.quizzes.iter().find(|q| q.id() == id).cloned())
    }
}

#[async_trait]
impl ResultRepository for InMemoryRepository {
    async fn insert_result(&self, result: &NewResult) -> Result<ResultId, StorageError> {
        self.with_tables(|t| {
            let student_known = t.students.iter().any(|s| s.id() == result.student_id());
            let quiz_known = t.quizzes.iter().any(|q| q.id() == result.quiz_id());
            if !(student_known && quiz_known) {
                return Err(StorageError::Conflict(
                    "result references a missing student or quiz".into(),
                ));
            }
            let id = ResultId::new(next_id(t.results.len()));
            t.results.push(result.clone().assign_id(id));
            Ok(id)
        })?
    }

    async fn results_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<StudentQuizScore>, StorageError> {
        self.with_tables(|t| {
            t.results
                .iter()
                .filter(|r| r.student_id == student_id)
                .filter_map(|r| {
                    t.quizzes
                        .iter()
                        .find(|q| q.id() == r.quiz_id)
                        .map(|q| StudentQuizScore {
                            quiz_id: q.id(),
                            subject: q.subject().to_string(),
                            score: r.score,
                        })
                })
                .collect()
        })
    }
}

/// Aggregates the three repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub students: Arc<dyn StudentRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
    pub results: Arc<dyn ResultRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let students: Arc<dyn StudentRepository> = Arc::new(repo.clone());
        let quizzes: Arc<dyn QuizRepository> = Arc::new(repo.clone());
        let results: Arc<dyn ResultRepository> = Arc::new(repo);
        Self {
            students,
            quizzes,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn math() -> NewQuiz {
        NewQuiz::new("Math", 10, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn assigns_sequential_ids_per_table() {
        let repo = InMemoryRepository::new();
        let a = repo
            .insert_student(&NewStudent::new("Ada", "Lovelace").unwrap())
            .await
            .unwrap();
        let b = repo
            .insert_student(&NewStudent::new("Alan", "Turing").unwrap())
            .await
            .unwrap();
        let q = repo.insert_quiz(&math()).await.unwrap();

        assert_eq!(a, StudentId::new(1));
        assert_eq!(b, StudentId::new(2));
        assert_eq!(q, QuizId::new(1));

        let names: Vec<String> = repo
            .list_students()
            .await
            .unwrap()
            .iter()
            .map(Student::full_name)
            .collect();
        assert_eq!(names, vec!["Ada Lovelace", "Alan Turing"]);
    }

    #[tokio::test]
    async fn joins_results_with_quiz_subject() {
        let repo = InMemoryRepository::new();
        let sid = repo
            .insert_student(&NewStudent::new("Ada", "Lovelace").unwrap())
            .await
            .unwrap();
        let qid = repo.insert_quiz(&math()).await.unwrap();
        let student = repo.get_student(sid).await.unwrap().unwrap();
        let quiz = repo.get_quiz(qid).await.unwrap().unwrap();

        repo.insert_result(&NewResult::new(&student, &quiz, 9).unwrap())
            .await
            .unwrap();

        let rows = repo.results_for_student(sid).await.unwrap();
        assert_eq!(
            rows,
            vec![StudentQuizScore {
                quiz_id: qid,
                subject: "Math".into(),
                score: 9,
            }]
        );
        assert!(
            repo.results_for_student(StudentId::new(99))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn rejects_dangling_references() {
        let repo = InMemoryRepository::new();
        let ghost = NewStudent::new("No", "Body")
            .unwrap()
            .assign_id(StudentId::new(5));
        let quiz = math().assign_id(QuizId::new(5));
        let err = repo
            .insert_result(&NewResult::new(&ghost, &quiz, 1).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }
}
