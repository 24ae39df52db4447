#![allow(non_snake_case)]

pub mod context;
pub mod error;
pub mod forms;
mod handlers;
pub mod routes;
pub mod session;
pub mod views;
pub mod vm;

pub use context::{AppContext, UiApp, build_app_context};
pub use error::UiError;
pub use routes::router;
pub use session::{AdminSession, SessionConfig};
