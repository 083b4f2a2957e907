//! Guard wrapper - write protection for values
//!
//! A [`Guarded`] value forwards every read to the wrapped value through
//! `Deref` and never hands out a mutable reference. Writes are expressed as
//! [`WriteAttempt`]s and judged by the guard's [`GuardPolicy`]:
//!
//! - **Reject**: the attempt fails with [`GuardError::WriteRejected`]
//! - **Ignore**: the attempt succeeds as a no-op
//!
//! Either way the wrapped value is left untouched.
//!
//! ## Usage
//! ```rust,ignore
//! use circular_enum::guards::{guard, GuardPolicy, WriteAttempt, WriteGuard};
//!
//! let value = guard(CircularEnum::new("RED", 0), GuardPolicy::Reject);
//! assert!(value.attempt(WriteAttempt::overwrite("name")).is_err());
//! assert_eq!(*value.name(), "RED");
//! ```

pub mod write;

use crate::error::GuardError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

pub use write::{Property, WriteAttempt, WriteKind};

// =============================================================================
// Guard Trait
// =============================================================================

/// Anything that judges write attempts against a value it protects.
pub trait WriteGuard {
    /// Judge a write attempt. The protected value never changes.
    fn attempt(&self, attempt: WriteAttempt) -> Result<(), GuardError>;
}

// =============================================================================
// Guard Policy
// =============================================================================

/// How a guard answers a write attempt.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GuardPolicy {
    /// Fail the write with an error
    #[default]
    Reject,
    /// Accept the write and drop it
    Ignore,
}

impl GuardPolicy {
    /// Applies this policy to one attempt.
    pub fn judge(self, attempt: WriteAttempt) -> Result<(), GuardError> {
        match self {
            GuardPolicy::Reject => {
                tracing::warn!(
                    kind = %attempt.kind,
                    property = %attempt.property,
                    "write rejected by guard"
                );
                Err(GuardError::WriteRejected {
                    kind: attempt.kind,
                    property: attempt.property,
                })
            }
            GuardPolicy::Ignore => {
                tracing::debug!(
                    kind = %attempt.kind,
                    property = %attempt.property,
                    "write ignored by guard"
                );
                Ok(())
            }
        }
    }
}

// =============================================================================
// Guarded Wrapper
// =============================================================================

/// Read-transparent, write-blocked view of a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guarded<T> {
    inner: T,
    policy: GuardPolicy,
}

/// Wraps `value` so that writes are judged by `policy`.
pub fn guard<T>(value: T, policy: GuardPolicy) -> Guarded<T> {
    Guarded {
        inner: value,
        policy,
    }
}

impl<T> Guarded<T> {
    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    /// Borrow the protected value.
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Offers a replacement for the whole value.
    ///
    /// Under `Reject` this fails. Under `Ignore` the replacement is handed
    /// back unused and the protected value stays as it was.
    pub fn offer(&self, replacement: T) -> Result<T, GuardError> {
        self.policy
            .judge(WriteAttempt::overwrite(Property::Value))
            .map(|()| replacement)
    }
}

impl<T> Deref for Guarded<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> AsRef<T> for Guarded<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T> WriteGuard for Guarded<T> {
    fn attempt(&self, attempt: WriteAttempt) -> Result<(), GuardError> {
        self.policy.judge(attempt)
    }
}

impl<T: fmt::Display> fmt::Display for Guarded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<T: Serialize> Serialize for Guarded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

// =============================================================================
// Tests
// =============================================================================
