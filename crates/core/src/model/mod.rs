mod admin;
mod ids;
mod quiz;
mod result;
mod student;

pub use admin::AdminCredentials;
pub use ids::{ParseIdError, QuizId, ResultId, StudentId};

pub use quiz::{NewQuiz, Quiz, QuizError};
pub use result::{NewResult, QuizResult, ResultError, StudentQuizScore};
pub use student::{NewStudent, Student, StudentError};

/// Upper bound for free-text fields (names, subjects), counted in characters.
pub const MAX_TEXT_LEN: usize = 100;
