//! Validation types for parallel error accumulation.
//!
//! This module provides the `Validated` type which allows accumulating
//! multiple field errors instead of stopping at the first one.

mod validated;

pub use validated::{Validated, ValidationError, ValidationErrors};
