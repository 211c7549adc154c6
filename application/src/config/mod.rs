//! Application-level configuration.
//!
//! - [`CallPolicy`]: per-attempt timeout and retry policy for calls to the
//!   question service

pub mod call_policy;

pub use call_policy::{CallPolicy, RetryPolicy};
