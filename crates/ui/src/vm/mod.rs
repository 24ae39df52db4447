mod choices;
mod date_fmt;
mod rows;

pub use choices::{ChoiceVm, quiz_choices, student_choices};
pub use date_fmt::format_date;
pub use rows::{
    QuizRowVm, ScoreRowVm, StudentRowVm, map_quiz_rows, map_score_rows, map_student_rows,
};
