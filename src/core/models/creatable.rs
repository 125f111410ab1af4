//! Capabilities shared by configuration objects submitted to a provider

use crate::validation::ValidationErrors;

/// An object that fills its unset optional fields before creation
///
/// Implementations only ever write to fields that are `None`. A field
/// explicitly set to any value, including the default itself, is left alone,
/// so applying defaults twice is the same as applying them once.
pub trait Creatable {
    /// Fill every unset optional field with its canonical default
    fn apply_defaults(&mut self);
}

/// An object that can check its own fields
pub trait Validate {
    /// Report every invalid field at once. Never mutates.
    fn validate(&self) -> Result<(), ValidationErrors>;
}
