//! gitprovider - Validate and default git hosting resource manifests
//!
//! Loads a manifest of repositories, deploy keys and team access grants,
//! fills unset optional fields with their defaults, and reports every invalid
//! field at once.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the gitprovider CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
