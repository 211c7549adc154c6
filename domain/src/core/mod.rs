//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`upstream::Upstream`]: live/degraded marker for remote data

pub mod error;
pub mod upstream;
