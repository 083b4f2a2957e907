//! Circular enum value object
//!
//! A `CircularEnum` is one named, ordered constant. Name and ordinal are
//! fixed at construction and only reachable through accessors, so a value is
//! immutable by construction.
//!
//! ```rust,ignore
//! let low = CircularEnum::new("LOW", 1_i64);
//! let high = CircularEnum::new("HIGH", 5_i64);
//! assert_eq!(low.compare_to(&high), -4);
//! assert_eq!(low.to_string(), "LOW");
//! ```

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// CircularEnum - One named, ordered constant
// ============================================================================

/// A single enumerated constant with a name and an ordinal.
///
/// Neither field is validated. Names are non-empty by convention only, and
/// any [`Ordinal`] type can be compared.
///
/// Equality covers both fields. The derived ordering compares the ordinal
/// first and falls back to the name, so sorting siblings follows ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CircularEnum<N = String, O = i64> {
    // Field order drives the derived `Ord`.
    ordinal: O,
    name: N,
}

impl<N, O> CircularEnum<N, O> {
    /// Creates a new value. Never fails.
    pub fn new(name: N, ordinal: O) -> Self {
        Self { ordinal, name }
    }

    /// Returns the name given at construction.
    pub fn name(&self) -> &N {
        &self.name
    }

    /// Returns a reference to the ordinal, for ordinal types that are not `Copy`.
    pub fn ordinal_ref(&self) -> &O {
        &self.ordinal
    }

    /// Consumes self and returns `(name, ordinal)`.
    pub fn into_parts(self) -> (N, O) {
        (self.name, self.ordinal)
    }

    /// Orders two values by ordinal alone.
    ///
    /// Returns `None` only when the ordinals are incomparable (e.g. `NaN`).
    pub fn ordering<M>(&self, other: &CircularEnum<M, O>) -> Option<Ordering>
    where
        O: PartialOrd,
    {
        self.ordinal.partial_cmp(&other.ordinal)
    }
}

impl<N, O: Copy> CircularEnum<N, O> {
    /// Returns the ordinal given at construction.
    pub fn ordinal(&self) -> O {
        self.ordinal
    }
}

impl<N, O: Ordinal> CircularEnum<N, O> {
    /// Returns `self.ordinal() - other.ordinal()`.
    ///
    /// The result is the raw difference, not clamped to -1/0/1. Integer
    /// ordinals are subtracted as `i128`, so the difference is exact for
    /// every pair and never overflows.
    pub fn compare_to<M>(&self, other: &CircularEnum<M, O>) -> O::Difference {
        self.ordinal.difference(other.ordinal)
    }
}

// ============================================================================
// Ordinal - Types usable as an enum position
// ============================================================================

/// An ordinal type and the type its differences are computed in.
pub trait Ordinal: Copy {
    type Difference: Copy + PartialOrd + fmt::Debug;

    /// Exact `self - other`.
    fn difference(self, other: Self) -> Self::Difference;
}

macro_rules! integer_ordinal {
    ($($ty:ty),*) => {
        $(
            impl Ordinal for $ty {
                type Difference = i128;

                fn difference(self, other: Self) -> i128 {
                    // Every listed type fits in i128 with room for the difference.
                    self as i128 - other as i128
                }
            }
        )*
    };
}

integer_ordinal!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Ordinal for f32 {
    type Difference = f32;

    fn difference(self, other: Self) -> f32 {
        self - other
    }
}

impl Ordinal for f64 {
    type Difference = f64;

    fn difference(self, other: Self) -> f64 {
        self - other
    }
}

impl<N: fmt::Display, O> fmt::Display for CircularEnum<N, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Serializes as the bare name, never as a struct.
impl<N: Serialize, O> Serialize for CircularEnum<N, O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.name.serialize(serializer)
    }
}

impl<N, O> From<(N, O)> for CircularEnum<N, O> {
    fn from((name, ordinal): (N, O)) -> Self {
        Self::new(name, ordinal)
    }
}

// ============================================================================
// Tests
// ============================================================================
