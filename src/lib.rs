//! DialDesk - AI sales-call session management built with Rust
//!
//! A Domain-Driven Design (DDD) implementation of the call-session backbone
//! behind a CRM "AI calling" feature: concurrent call tracking, focus
//! arbitration, and per-call duration ticking.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;

// Re-export commonly used types
pub use domain::call_registry::{CallRegistry, RegistrySnapshot, StartCallRejection};
pub use domain::shared::error::DomainError;
pub use domain::shared::result::Result;
