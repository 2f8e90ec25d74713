//! Service implementations.
//!
//! Handlers in [`crate::routes`] only translate HTTP to calls on these.

pub mod health_service;
pub mod receipt_service;
