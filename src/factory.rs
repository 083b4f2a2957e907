//! Circular enum factory
//!
//! [`new_circular_enum`] builds one value and, when asked to be safe, routes
//! it through the guard before handing it back. Each call produces an
//! independent value; nothing is registered anywhere.

use crate::config::EnumConfig;
use crate::domain::CircularEnum;
use crate::error::{ConfigError, GuardError};
use crate::guards::{GuardPolicy, Guarded, guard};
use serde::{Serialize, Serializer};
use std::fmt;
use std::mem;
use std::ops::Deref;

/// What the factory returns: a bare value, or one behind a guard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumHandle<N = String, O = i64> {
    Plain(CircularEnum<N, O>),
    Guarded(Guarded<CircularEnum<N, O>>),
}

impl<N, O> EnumHandle<N, O> {
    pub fn is_guarded(&self) -> bool {
        matches!(self, EnumHandle::Guarded(_))
    }

    /// The guard's policy, or `None` for a plain handle.
    pub fn policy(&self) -> Option<GuardPolicy> {
        match self {
            EnumHandle::Plain(_) => None,
            EnumHandle::Guarded(guarded) => Some(guarded.policy()),
        }
    }

    /// The guard, for property-level write attempts. `None` for a plain
    /// handle, which is changed through [`EnumHandle::replace`] instead.
    pub fn guarded(&self) -> Option<&Guarded<CircularEnum<N, O>>> {
        match self {
            EnumHandle::Plain(_) => None,
            EnumHandle::Guarded(guarded) => Some(guarded),
        }
    }

    pub fn value(&self) -> &CircularEnum<N, O> {
        match self {
            EnumHandle::Plain(value) => value,
            EnumHandle::Guarded(guarded) => guarded.get(),
        }
    }

    /// Mutable access to the value. Only plain handles give one out.
    pub fn value_mut(&mut self) -> Option<&mut CircularEnum<N, O>> {
        match self {
            EnumHandle::Plain(value) => Some(value),
            EnumHandle::Guarded(_) => None,
        }
    }

    /// Replaces the whole value and returns the previous one.
    ///
    /// A guarded handle never changes: under `Reject` this fails, under
    /// `Ignore` the offered value is returned unused.
    pub fn replace(
        &mut self,
        value: CircularEnum<N, O>,
    ) -> Result<CircularEnum<N, O>, GuardError> {
        match self {
            EnumHandle::Plain(current) => Ok(mem::replace(current, value)),
            EnumHandle::Guarded(guarded) => guarded.offer(value),
        }
    }
}

impl<N, O> Deref for EnumHandle<N, O> {
    type Target = CircularEnum<N, O>;

    fn deref(&self) -> &Self::Target {
        self.value()
    }
}

impl<N: fmt::Display, O> fmt::Display for EnumHandle<N, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}

impl<N: Serialize, O> Serialize for EnumHandle<N, O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Factory carrying an [`EnumConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumFactory {
    config: EnumConfig,
}

impl EnumFactory {
    pub fn new(config: EnumConfig) -> Self {
        Self { config }
    }

    /// Builds a factory from `CIRCULAR_ENUM_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        EnumConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &EnumConfig {
        &self.config
    }

    /// Creates one value, guarded if the factory is configured as safe.
    pub fn create<N, O>(&self, name: N, ordinal: O) -> EnumHandle<N, O> {
        let value = CircularEnum::new(name, ordinal);
        if self.config.safe {
            tracing::debug!(policy = %self.config.policy, "created guarded circular enum");
            EnumHandle::Guarded(guard(value, self.config.policy))
        } else {
            tracing::debug!("created plain circular enum");
            EnumHandle::Plain(value)
        }
    }
}

/// Creates a circular enum named `name` at position `ordinal`.
///
/// With `safe` set, the value comes back behind a guard that rejects writes.
pub fn new_circular_enum<N, O>(safe: bool, name: N, ordinal: O) -> EnumHandle<N, O> {
    EnumFactory::new(EnumConfig::default().with_safe(safe)).create(name, ordinal)
}
