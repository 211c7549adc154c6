//! Quiz subdomain.
//!
//! - [`entities::Quiz`]: a persisted, named list of question ids
//! - [`spec::QuizSpec`]: a validated request to assemble a new quiz

pub mod entities;
pub mod spec;
