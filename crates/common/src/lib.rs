//! Shared error type for the wabridge crates.

mod error;

pub use error::{Error, Result};
