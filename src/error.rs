//! Error types
//!
//! Construction never fails. The only runtime errors come from the guard
//! rejecting a write and from reading configuration out of the environment.

use crate::guards::{Property, WriteKind};
use thiserror::Error;

/// Raised by a guard running under [`crate::guards::GuardPolicy::Reject`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// A define, overwrite or delete was attempted on a guarded value
    #[error("cannot {kind} property '{property}' on a guarded value")]
    WriteRejected { kind: WriteKind, property: Property },
}

impl GuardError {
    /// The property the rejected write targeted.
    pub fn property(&self) -> &Property {
        match self {
            GuardError::WriteRejected { property, .. } => property,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment variable holds a value that cannot be parsed
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}
