//! rotalog core - Shared constants and error handling

pub mod constants;
pub mod error;

pub use constants::*;
pub use error::{Error, Result};
