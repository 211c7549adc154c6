//! Remote access to the question service.
//!
//! - [`http_gateway::HttpQuestionGateway`]: the [`QuestionGateway`](quizhive_application::QuestionGateway)
//!   adapter over HTTP
//! - [`fallback`]: what to answer when the question service cannot be reached
//! - [`retry`]: per-attempt timeout and bounded exponential backoff

pub mod fallback;
pub mod http_gateway;
pub(crate) mod retry;
