//! Question bank subdomain.
//!
//! - [`entities::Question`]: a stored question, including its right answer
//! - [`entities::QuestionDraft`]: the writable part of a question
//! - [`wrapper::QuestionWrapper`]: the answer-redacted view handed to quiz takers
//! - [`response::QuizResponse`]: one submitted answer
//! - [`scoring::AnswerKey`]: exact-match scoring of submitted answers

pub mod entities;
pub mod response;
pub mod scoring;
pub mod wrapper;
