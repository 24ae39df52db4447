use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use quizbook_core::model::AdminCredentials;
use services::AppServices;
use storage::Storage;
use tower::ServiceExt;
use ui::{AppContext, SessionConfig, UiApp};

fn app_on(storage: &Storage) -> Router {
    let services: Arc<dyn UiApp> = Arc::new(AppServices::new(storage, AdminCredentials::default()));
    ui::router(AppContext::new(&services), &SessionConfig::default())
}

fn test_app() -> Router {
    app_on(&Storage::in_memory())
}

async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response {
    let mut req = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post(app: &Router, path: &str, body: &str, cookie: Option<&str>) -> Response {
    let mut req = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(req.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

fn location(res: &Response) -> &str {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

async fn body_text(res: Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Log in as the default admin and return the `Cookie` header value.
async fn login(app: &Router) -> String {
    let res = post(app, "/login", "username=admin&password=password", None).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/dashboard");
    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

#[tokio::test]
async fn root_redirects_to_login() {
    let app = test_app();
    let res = get(&app, "/", None).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
}

#[tokio::test]
async fn wrong_password_rerenders_login_with_message() {
    let app = test_app();
    let res = post(&app, "/login", "username=admin&password=nope", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(header::SET_COOKIE).is_none());
    let html = body_text(res).await;
    assert!(html.contains("Invalid username or password"));
    assert!(!html.contains("nope"));
}

#[tokio::test]
async fn protected_routes_redirect_without_session() {
    let app = test_app();
    for path in [
        "/dashboard",
        "/student/add",
        "/quiz/add",
        "/results/add",
        "/student/1",
    ] {
        let res = get(&app, path, None).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "GET {path}");
        assert_eq!(location(&res), "/login", "GET {path}");
    }
}

#[tokio::test]
async fn anonymous_post_does_not_create_anything() {
    let app = test_app();
    for (path, body) in [
        ("/student/add", "first_name=Eve&last_name=Intruder"),
        (
            "/quiz/add",
            "subject=Forgery&num_questions=5&quiz_date=2024-03-01",
        ),
        ("/results/add", "student_id=1&quiz_id=1&score=5"),
    ] {
        let res = post(&app, path, body, None).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "POST {path}");
        assert_eq!(location(&res), "/login", "POST {path}");
    }

    let cookie = login(&app).await;
    let html = body_text(get(&app, "/dashboard", Some(&cookie)).await).await;
    assert!(!html.contains("Intruder"));
    assert!(!html.contains("Forgery"));
    assert!(html.contains("No students yet."));
    assert!(html.contains("No quizzes yet."));

    let html = body_text(get(&app, "/student/1", Some(&cookie)).await).await;
    assert!(html.contains("No results recorded."));
}

#[tokio::test]
async fn full_gradebook_flow() {
    let app = test_app();
    let cookie = login(&app).await;

    let res = post(
        &app,
        "/student/add",
        "first_name=Ada&last_name=Lovelace",
        Some(&cookie),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/dashboard");

    let res = post(
        &app,
        "/quiz/add",
        "subject=Math&num_questions=10&quiz_date=2024-01-01",
        Some(&cookie),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let html = body_text(get(&app, "/dashboard", Some(&cookie)).await).await;
    assert!(html.contains("Ada"));
    assert!(html.contains("Lovelace"));
    assert!(html.contains("href=\"/student/1\""));
    assert!(html.contains("Math"));
    assert!(html.contains("2024-01-01"));

    let html = body_text(get(&app, "/results/add", Some(&cookie)).await).await;
    assert!(html.contains("Ada Lovelace"));

    let res = post(
        &app,
        "/results/add",
        "student_id=1&quiz_id=1&score=9",
        Some(&cookie),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/dashboard");

    let html = body_text(get(&app, "/student/1", Some(&cookie)).await).await;
    assert_eq!(html.matches("class=\"result-row\"").count(), 1);
    assert!(html.contains("Math"));
    assert!(html.contains(">9<"));
}

#[tokio::test]
async fn invalid_submissions_are_unprocessable() {
    let app = test_app();
    let cookie = login(&app).await;

    let res = post(&app, "/student/add", "first_name=+&last_name=Lovelace", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(res).await.contains("value=\"Lovelace\""));

    let res = post(
        &app,
        "/quiz/add",
        "subject=Math&num_questions=ten&quiz_date=2024-01-01",
        Some(&cookie),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = post(
        &app,
        "/quiz/add",
        "subject=Math&num_questions=0&quiz_date=2024-01-01",
        Some(&cookie),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Neither reference exists yet.
    let res = post(
        &app,
        "/results/add",
        "student_id=42&quiz_id=7&score=1",
        Some(&cookie),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(res).await.contains("does not exist"));

    post(&app, "/student/add", "first_name=Ada&last_name=Lovelace", Some(&cookie)).await;
    post(
        &app,
        "/quiz/add",
        "subject=Math&num_questions=10&quiz_date=2024-01-01",
        Some(&cookie),
    )
    .await;
    let res = post(
        &app,
        "/results/add",
        "student_id=1&quiz_id=1&score=11",
        Some(&cookie),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(get(&app, "/student/1", Some(&cookie)).await).await;
    assert!(html.contains("No results recorded."));

    let html = body_text(get(&app, "/dashboard", Some(&cookie)).await).await;
    assert_eq!(html.matches("href=\"/student/1\"").count(), 1);
}

#[tokio::test]
async fn logout_ends_the_session_and_is_repeatable() {
    let app = test_app();
    let cookie = login(&app).await;
    assert_eq!(
        get(&app, "/dashboard", Some(&cookie)).await.status(),
        StatusCode::OK
    );

    for _ in 0..2 {
        let res = get(&app, "/logout", Some(&cookie)).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/login");
    }

    let res = get(&app, "/dashboard", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
}

#[tokio::test]
async fn unknown_student_shows_empty_results() {
    let app = test_app();
    let cookie = login(&app).await;
    let res = get(&app, "/student/99", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("No results recorded."));
}

#[tokio::test]
async fn ids_beyond_the_rowid_range_are_unknown_on_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_http_large_ids?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");
    let app = app_on(&storage);
    let cookie = login(&app).await;

    let res = get(&app, "/student/18446744073709551615", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("No results recorded."));

    let res = post(
        &app,
        "/results/add",
        "student_id=9223372036854775808&quiz_id=1&score=1",
        Some(&cookie),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(res).await.contains("does not exist"));

    post(&app, "/student/add", "first_name=Ada&last_name=Lovelace", Some(&cookie)).await;
    let res = post(
        &app,
        "/results/add",
        "student_id=1&quiz_id=18446744073709551615&score=1",
        Some(&cookie),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
