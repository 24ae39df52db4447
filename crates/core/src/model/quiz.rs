use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::MAX_TEXT_LEN;
use crate::model::ids::QuizId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("subject cannot be empty")]
    EmptySubject,

    #[error("subject must be at most 100 characters")]
    SubjectTooLong,

    #[error("a quiz needs at least one question")]
    NoQuestions,
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// A validated quiz awaiting an id from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuiz {
    subject: String,
    num_questions: u32,
    quiz_date: NaiveDate,
}

impl NewQuiz {
    /// # Errors
    ///
    /// Returns `QuizError` if the subject is blank or too long, or if
    /// `num_questions` is zero.
    pub fn new(
        subject: impl Into<String>,
        num_questions: u32,
        quiz_date: NaiveDate,
    ) -> Result<Self, QuizError> {
        let subject = subject.into().trim().to_string();
        if subject.is_empty() {
            return Err(QuizError::EmptySubject);
        }
        if subject.chars().count() > MAX_TEXT_LEN {
            return Err(QuizError::SubjectTooLong);
        }
        if num_questions == 0 {
            return Err(QuizError::NoQuestions);
        }

        Ok(Self {
            subject,
            num_questions,
            quiz_date,
        })
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn num_questions(&self) -> u32 {
        self.num_questions
    }

    #[must_use]
    pub fn quiz_date(&self) -> NaiveDate {
        self.quiz_date
    }

    #[must_use]
    pub fn assign_id(self, id: QuizId) -> Quiz {
        Quiz {
            id,
            subject: self.subject,
            num_questions: self.num_questions,
            quiz_date: self.quiz_date,
        }
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    id: QuizId,
    subject: String,
    num_questions: u32,
    quiz_date: NaiveDate,
}

impl Quiz {
    #[must_use]
    pub fn from_persisted(
        id: QuizId,
        subject: String,
        num_questions: u32,
        quiz_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            subject,
            num_questions,
            quiz_date,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn num_questions(&self) -> u32 {
        self.num_questions
    }

    #[must_use]
    pub fn quiz_date(&self) -> NaiveDate {
        self.quiz_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn accepts_a_regular_quiz() {
        let quiz = NewQuiz::new(" Math ", 10, date()).unwrap();
        assert_eq!(quiz.subject(), "Math");
        assert_eq!(quiz.num_questions(), 10);
        assert_eq!(quiz.quiz_date(), date());
    }

    #[test]
    fn rejects_zero_questions() {
        assert_eq!(NewQuiz::new("Math", 0, date()), Err(QuizError::NoQuestions));
    }

    #[test]
    fn rejects_blank_subject() {
        assert_eq!(NewQuiz::new(" \t", 5, date()), Err(QuizError::EmptySubject));
    }
}
