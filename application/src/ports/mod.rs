//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod question_gateway;
pub mod question_repository;
pub mod quiz_repository;
pub mod repository_error;
