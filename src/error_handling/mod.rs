//! Error types and propagation policy.
//!
//! Only usage errors and fetch errors terminate the process; resolution and
//! save failures degrade into part of the normal result set.

mod types;

pub use types::{FetchError, InitializationError};
