//! Domain Layer - Core Entity Trait
//!
//! Basic contract for locally-tracked entities plus the shared error type.

use serde::{Deserialize, Serialize};

/// Core trait for locally-tracked entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            DomainError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
