use chrono::NaiveDate;
use quizbook_core::model::{
    NewQuiz, NewResult, NewStudent, QuizId, StudentId, StudentQuizScore,
};
use storage::StorageError;
use storage::repository::{QuizRepository, ResultRepository, StudentRepository};
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let repo = SqliteRepository::connect(&format!(
        "sqlite:file:{name}?mode=memory&cache=shared"
    ))
    .await
    .expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

fn jan_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[tokio::test]
async fn sqlite_roundtrips_students_and_quizzes_in_insertion_order() {
    let repo = connect("memdb_roundtrip").await;

    let ada = repo
        .insert_student(&NewStudent::new("Ada", "Lovelace").unwrap())
        .await
        .unwrap();
    let grace = repo
        .insert_student(&NewStudent::new("Grace", "Hopper").unwrap())
        .await
        .unwrap();
    assert!(ada < grace);

    let students = repo.list_students().await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].first_name(), "Ada");
    assert_eq!(students[1].last_name(), "Hopper");

    let quiz_id = repo
        .insert_quiz(&NewQuiz::new("Math", 10, jan_first()).unwrap())
        .await
        .unwrap();
    let quiz = repo.get_quiz(quiz_id).await.unwrap().expect("quiz");
    assert_eq!(quiz.subject(), "Math");
    assert_eq!(quiz.num_questions(), 10);
    assert_eq!(quiz.quiz_date(), jan_first());

    assert!(repo.get_student(StudentId::new(999)).await.unwrap().is_none());
    assert!(repo.get_quiz(QuizId::new(999)).await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_joins_results_per_student() {
    let repo = connect("memdb_results").await;

    let sid = repo
        .insert_student(&NewStudent::new("Ada", "Lovelace").unwrap())
        .await
        .unwrap();
    let other = repo
        .insert_student(&NewStudent::new("Alan", "Turing").unwrap())
        .await
        .unwrap();
    let math = repo
        .insert_quiz(&NewQuiz::new("Math", 10, jan_first()).unwrap())
        .await
        .unwrap();
    let physics = repo
        .insert_quiz(&NewQuiz::new("Physics", 5, jan_first()).unwrap())
        .await
        .unwrap();

    let student = repo.get_student(sid).await.unwrap().unwrap();
    let turing = repo.get_student(other).await.unwrap().unwrap();
    let math_quiz = repo.get_quiz(math).await.unwrap().unwrap();
    let physics_quiz = repo.get_quiz(physics).await.unwrap().unwrap();

    repo.insert_result(&NewResult::new(&student, &math_quiz, 9).unwrap())
        .await
        .unwrap();
    repo.insert_result(&NewResult::new(&turing, &physics_quiz, 5).unwrap())
        .await
        .unwrap();

    let rows = repo.results_for_student(sid).await.unwrap();
    assert_eq!(
        rows,
        vec![StudentQuizScore {
            quiz_id: math,
            subject: "Math".to_string(),
            score: 9,
        }]
    );

    // Unknown student and student without results look the same.
    assert!(
        repo.results_for_student(StudentId::new(4242))
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn sqlite_enforces_result_foreign_keys() {
    let repo = connect("memdb_foreign_keys").await;

    let quiz_id = repo
        .insert_quiz(&NewQuiz::new("Math", 10, jan_first()).unwrap())
        .await
        .unwrap();
    let quiz = repo.get_quiz(quiz_id).await.unwrap().unwrap();
    let ghost = NewStudent::new("No", "Body")
        .unwrap()
        .assign_id(StudentId::new(77));

    let err = repo
        .insert_result(&NewResult::new(&ghost, &quiz, 3).unwrap())
        .await
        .expect_err("dangling student must be rejected");
    assert!(matches!(err, StorageError::Conflict(_)), "{err:?}");
}

#[tokio::test]
async fn schema_script_is_idempotent_and_reports_errors() {
    let repo = connect("memdb_schema_script").await;

    repo.apply_schema_script(storage::sqlite::EMBEDDED_SCHEMA)
        .await
        .expect("re-applying the schema is a no-op");

    let broken = repo.apply_schema_script("CREATE TABLE (;").await;
    assert!(broken.is_err());

    // The store stays usable after a failed script.
    repo.insert_student(&NewStudent::new("Ada", "Lovelace").unwrap())
        .await
        .unwrap();
    assert_eq!(repo.list_students().await.unwrap().len(), 1);
}

#[tokio::test]
async fn lookups_past_the_rowid_range_find_nothing() {
    let repo = connect("memdb_large_ids").await;
    let huge = u64::MAX;

    assert!(repo.get_student(StudentId::new(huge)).await.unwrap().is_none());
    assert!(repo.get_quiz(QuizId::new(huge)).await.unwrap().is_none());
    assert!(
        repo.results_for_student(StudentId::new(1 << 63))
            .await
            .unwrap()
            .is_empty()
    );
}
