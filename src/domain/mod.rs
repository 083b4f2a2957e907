//! Domain types
//!
//! The only domain entity is the circular enum value object. It knows nothing
//! about write protection; that lives in [`crate::guards`] and is applied by
//! [`crate::factory`].

pub mod value_objects;

pub use value_objects::{CircularEnum, Ordinal};
