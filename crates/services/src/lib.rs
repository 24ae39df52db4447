#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod quiz_service;
pub mod result_service;
pub mod student_service;

pub use app_services::AppServices;
pub use auth_service::AdminAuth;
pub use error::{AppServicesError, QuizServiceError, ResultServiceError, StudentServiceError};
pub use quiz_service::QuizService;
pub use result_service::ResultService;
pub use student_service::StudentService;
