//! Platform-independent domain code for the Rand lottery results frontend.
//!
//! Everything in here compiles and tests on the host; the `frontend` crate
//! layers Leptos signals and browser I/O on top.

pub mod assets;
pub mod autocomplete;
pub mod balls;
pub mod cache;
pub mod error;
pub mod format;
pub mod types;

pub use error::{ClientError, NumbersParseError};
pub use types::*;
