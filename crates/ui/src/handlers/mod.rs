//! Request handlers, one module per area of the site.
//!
//! Protected handlers take `AdminSession` as their first argument so the
//! gate runs before any form body is read.

pub(crate) mod auth;
pub(crate) mod quizzes;
pub(crate) mod results;
pub(crate) mod students;
