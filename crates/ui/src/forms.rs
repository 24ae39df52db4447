//! Raw form bodies and their parsing into typed values.
//!
//! Every field deserializes as a string (missing fields become empty) so a
//! bad submission always gets the form back with a message instead of an
//! extractor rejection.

use chrono::NaiveDate;
use quizbook_core::model::{QuizId, StudentId};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    #[error("{field} must be a whole number of at least 0")]
    NotANumber { field: &'static str },

    #[error("{field} must be a date in YYYY-MM-DD format")]
    InvalidDate { field: &'static str },

    #[error("please choose a {field}")]
    MissingChoice { field: &'static str },

    #[error("the selected {field} is not valid")]
    InvalidChoice { field: &'static str },
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, FormError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| FormError::NotANumber { field })
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate { field })
}

fn parse_choice<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, FormError> {
    if raw.trim().is_empty() {
        return Err(FormError::MissingChoice { field });
    }
    raw.parse::<T>()
        .map_err(|_| FormError::InvalidChoice { field })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuizForm {
    pub subject: String,
    pub num_questions: String,
    pub quiz_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedQuiz {
    pub num_questions: u32,
    pub quiz_date: NaiveDate,
}

impl QuizForm {
    /// Parse the numeric and date fields. The subject is checked by the domain.
    ///
    /// # Errors
    ///
    /// Returns the first `FormError` found, in field order.
    pub fn parse(&self) -> Result<ParsedQuiz, FormError> {
        Ok(ParsedQuiz {
            num_questions: parse_count("number of questions", &self.num_questions)?,
            quiz_date: parse_date("quiz date", &self.quiz_date)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResultForm {
    pub student_id: String,
    pub quiz_id: String,
    pub score: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedResult {
    pub student_id: StudentId,
    pub quiz_id: QuizId,
    pub score: u32,
}

impl ResultForm {
    /// # Errors
    ///
    /// Returns the first `FormError` found, in field order.
    pub fn parse(&self) -> Result<ParsedResult, FormError> {
        Ok(ParsedResult {
            student_id: parse_choice("student", &self.student_id)?,
            quiz_id: parse_choice("quiz", &self.quiz_id)?,
            score: parse_count("score", &self.score)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_form(num_questions: &str, quiz_date: &str) -> QuizForm {
        QuizForm {
            subject: "Math".into(),
            num_questions: num_questions.into(),
            quiz_date: quiz_date.into(),
        }
    }

    #[test]
    fn parses_quiz_fields() {
        let parsed = quiz_form(" 10 ", "2024-01-01").parse().unwrap();
        assert_eq!(parsed.num_questions, 10);
        assert_eq!(parsed.quiz_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn rejects_non_numeric_question_count() {
        assert_eq!(
            quiz_form("ten", "2024-01-01").parse(),
            Err(FormError::NotANumber {
                field: "number of questions"
            })
        );
        assert!(quiz_form("-3", "2024-01-01").parse().is_err());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            quiz_form("10", "2024-02-30").parse(),
            Err(FormError::InvalidDate { field: "quiz date" })
        );
        assert!(quiz_form("10", "01/01/2024").parse().is_err());
    }

    #[test]
    fn parses_result_fields() {
        let form = ResultForm {
            student_id: "1".into(),
            quiz_id: "2".into(),
            score: "9".into(),
        };
        assert_eq!(
            form.parse(),
            Ok(ParsedResult {
                student_id: StudentId::new(1),
                quiz_id: QuizId::new(2),
                score: 9,
            })
        );
    }

    #[test]
    fn empty_selection_asks_for_a_choice() {
        let form = ResultForm {
            student_id: String::new(),
            quiz_id: "2".into(),
            score: "9".into(),
        };
        let err = form.parse().unwrap_err();
        assert_eq!(err.to_string(), "please choose a student");
    }

    #[test]
    fn garbage_selection_is_invalid() {
        let form = ResultForm {
            student_id: "1".into(),
            quiz_id: "abc".into(),
            score: "9".into(),
        };
        assert_eq!(
            form.parse(),
            Err(FormError::InvalidChoice { field: "quiz" })
        );
    }
}
