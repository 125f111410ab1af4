//! Field-level validation errors
//!
//! - [`FieldError`] - what went wrong with a single value
//! - [`FieldViolation`] - a [`FieldError`] bound to a field path and value
//! - [`ValidationErrors`] - accumulates violations so every invalid field of
//!   an object is reported at once

mod error;
mod errors;

pub use error::FieldError;
pub use errors::{FieldViolation, ValidationErrors};
