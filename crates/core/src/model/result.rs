use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuizId, ResultId, StudentId};
use crate::model::{Quiz, Student};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResultError {
    #[error("score {score} is out of range for a quiz with {num_questions} questions")]
    ScoreOutOfRange { score: u32, num_questions: u32 },
}

/// A score ready to be stored.
///
/// It can only be built from a loaded `Student` and `Quiz`, so both references
/// point at rows that existed when the result was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResult {
    student_id: StudentId,
    quiz_id: QuizId,
    score: u32,
}

impl NewResult {
    /// # Errors
    ///
    /// Returns `ResultError::ScoreOutOfRange` if `score` exceeds the quiz's
    /// question count.
    pub fn new(student: &Student, quiz: &Quiz, score: u32) -> Result<Self, ResultError> {
        if score > quiz.num_questions() {
            return Err(ResultError::ScoreOutOfRange {
                score,
                num_questions: quiz.num_questions(),
            });
        }
        Ok(Self {
            student_id: student.id(),
            quiz_id: quiz.id(),
            score,
        })
    }

    #[must_use]
    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz_id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn assign_id(self, id: ResultId) -> QuizResult {
        QuizResult {
            id,
            student_id: self.student_id,
            quiz_id: self.quiz_id,
            score: self.score,
        }
    }
}

/// A stored score for one student on one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: ResultId,
    pub student_id: StudentId,
    pub quiz_id: QuizId,
    pub score: u32,
}

/// One line of a student's results: the quiz taken and the score obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentQuizScore {
    pub quiz_id: QuizId,
    pub subject: String,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewQuiz, NewStudent};
    use chrono::NaiveDate;

    fn fixtures() -> (Student, Quiz) {
        let student = NewStudent::new("Ada", "Lovelace")
            .unwrap()
            .assign_id(StudentId::new(1));
        let quiz = NewQuiz::new("Math", 10, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap()
            .assign_id(QuizId::new(3));
        (student, quiz)
    }

    #[test]
    fn links_student_and_quiz() {
        let (student, quiz) = fixtures();
        let result = NewResult::new(&student, &quiz, 9).unwrap();
        assert_eq!(result.student_id(), StudentId::new(1));
        assert_eq!(result.quiz_id(), QuizId::new(3));
        assert_eq!(result.score(), 9);
    }

    #[test]
    fn full_and_zero_marks_are_valid() {
        let (student, quiz) = fixtures();
        assert!(NewResult::new(&student, &quiz, 0).is_ok());
        assert!(NewResult::new(&student, &quiz, 10).is_ok());
    }

    #[test]
    fn score_above_question_count_is_rejected() {
        let (student, quiz) = fixtures();
        assert_eq!(
            NewResult::new(&student, &quiz, 11),
            Err(ResultError::ScoreOutOfRange {
                score: 11,
                num_questions: 10
            })
        );
    }
}
