//! Core domain logic
//!
//! Pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types, string enums and the defaulting capability
//! - `services/` - The create-preparation workflow

pub mod models;
pub mod services;
