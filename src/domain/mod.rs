//! Domain layer - Core business logic and rules
//!
//! This layer contains:
//! - Entities: Objects with identity (the live call, the contact)
//! - Value Objects: Immutable objects without identity
//! - The call registry: the consistency boundary for all call sessions
//! - Domain Events: Things that happened in the domain

pub mod call;
pub mod call_registry;
pub mod contact;
pub mod shared;

// Re-export commonly used types
pub use call_registry::{CallRegistry, RegistrySnapshot, StartCallRejection};
pub use contact::Contact;
pub use shared::{DomainError, Result};
