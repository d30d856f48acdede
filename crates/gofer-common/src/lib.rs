//! gofer-common — Shared types and errors used across all Gofer crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{AgentType, GoTermAssociation, KnowledgeLevel};
pub use error::{GoferError, Result};
