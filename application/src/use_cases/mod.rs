//! Use cases
//!
//! Application-level operations that orchestrate domain logic.
//!
//! Question service: [`manage_questions`], [`question_bank`].
//! Quiz service: [`create_quiz`], [`get_quiz_questions`], [`submit_quiz`].

pub mod create_quiz;
pub mod get_quiz_questions;
pub mod manage_questions;
pub mod question_bank;
pub mod quiz_error;
pub(crate) mod shared;
pub mod submit_quiz;

#[cfg(test)]
pub(crate) mod test_support;
