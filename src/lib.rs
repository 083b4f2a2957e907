//! Named, ordered constants with optional write protection.
//!
//! ```rust
//! use circular_enum::new_circular_enum;
//!
//! let low = new_circular_enum(false, "LOW", 1_i64);
//! let high = new_circular_enum(true, "HIGH", 5_i64);
//!
//! assert_eq!(low.compare_to(high.value()), -4);
//! assert_eq!(high.to_string(), "HIGH");
//! assert!(high.is_guarded());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod guards;
pub mod logging;

pub use config::EnumConfig;
pub use domain::{CircularEnum, Ordinal};
pub use error::{ConfigError, GuardError};
pub use factory::{EnumFactory, EnumHandle, new_circular_enum};
pub use guards::{GuardPolicy, Guarded, Property, WriteAttempt, WriteGuard, WriteKind, guard};
pub use logging::{LogFormat, LoggingConfig, init_logging};
