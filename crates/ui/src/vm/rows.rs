use quizbook_core::model::{Quiz, Student, StudentQuizScore};

use crate::vm::date_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRowVm {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub results_href: String,
}

impl From<&Student> for StudentRowVm {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().value(),
            first_name: student.first_name().to_string(),
            last_name: student.last_name().to_string(),
            results_href: format!("/student/{}", student.id()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRowVm {
    pub id: u64,
    pub subject: String,
    pub num_questions: u32,
    pub date_str: String,
}

impl From<&Quiz> for QuizRowVm {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id().value(),
            subject: quiz.subject().to_string(),
            num_questions: quiz.num_questions(),
            date_str: format_date(quiz.quiz_date()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRowVm {
    pub quiz_id: u64,
    pub subject: String,
    pub score: u32,
}

impl From<&StudentQuizScore> for ScoreRowVm {
    fn from(row: &StudentQuizScore) -> Self {
        Self {
            quiz_id: row.quiz_id.value(),
            subject: row.subject.clone(),
            score: row.score,
        }
    }
}

#[must_use]
pub fn map_student_rows(items: &[Student]) -> Vec<StudentRowVm> {
    items.iter().map(StudentRowVm::from).collect()
}

#[must_use]
pub fn map_quiz_rows(items: &[Quiz]) -> Vec<QuizRowVm> {
    items.iter().map(QuizRowVm::from).collect()
}

#[must_use]
pub fn map_score_rows(items: &[StudentQuizScore]) -> Vec<ScoreRowVm> {
    items.iter().map(ScoreRowVm::from).collect()
}
