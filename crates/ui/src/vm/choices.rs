use quizbook_core::model::{Quiz, Student};

use crate::vm::date_fmt::format_date;

/// One `<option>` of a selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Student options; `selected` is the raw form value to keep selected on re-render.
#[must_use]
pub fn student_choices(students: &[Student], selected: &str) -> Vec<ChoiceVm> {
    students
        .iter()
        .map(|s| {
            let value = s.id().to_string();
            ChoiceVm {
                selected: value == selected.trim(),
                label: s.full_name(),
                value,
            }
        })
        .collect()
}

#[must_use]
pub fn quiz_choices(quizzes: &[Quiz], selected: &str) -> Vec<ChoiceVm> {
    quizzes
        .iter()
        .map(|q| {
            let value = q.id().to_string();
            ChoiceVm {
                selected: value == selected.trim(),
                label: format!(
                    "{} ({}, {} questions)",
                    q.subject(),
                    format_date(q.quiz_date()),
                    q.num_questions()
                ),
                value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbook_core::model::{NewStudent, StudentId};

    #[test]
    fn marks_previous_selection() {
        let students = vec![
            NewStudent::new("Ada", "Lovelace")
                .unwrap()
                .assign_id(StudentId::new(1)),
            NewStudent::new("Alan", "Turing")
                .unwrap()
                .assign_id(StudentId::new(2)),
        ];
        let choices = student_choices(&students, "2");
        assert!(!choices[0].selected);
        assert!(choices[1].selected);
        assert_eq!(choices[1].label, "Alan Turing");
    }
}
