//! Shared primitives and traits for the Cyanea bioinformatics ecosystem.
//!
//! `cyanea-core` provides the foundation the other Cyanea crates build on:
//!
//! - **Error types** — [`CyaneaError`] and [`Result`] for structured error handling
//! - **Traits** — Small cross-crate abstractions like [`Scored`] and [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{CyaneaError, Result};
pub use traits::*;
