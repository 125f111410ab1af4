//! Business logic built on the domain models
//!
//! - [`prepare_create`] - the defaulting-then-validation step every create
//!   request goes through

mod prepare;

pub use prepare::{prepare_create, validate_all};
