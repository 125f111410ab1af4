//! Preparing configuration objects for a create request

use crate::core::models::{Creatable, Validate};
use crate::validation::ValidationErrors;

/// Apply defaults to `object`, then validate it.
///
/// Returns every violation found on the object. A caller must not submit the
/// object to a provider unless this returns `Ok`.
pub fn prepare_create<T>(object: &mut T) -> Result<(), ValidationErrors>
where
    T: Creatable + Validate + std::fmt::Debug,
{
    object.apply_defaults();
    log::debug!("defaults applied: {object:?}");

    let result = object.validate();
    match &result {
        Ok(()) => log::debug!("object is valid"),
        Err(errs) => log::debug!("{} violation(s) found", errs.len()),
    }
    result
}

/// Validate a list of objects, prefixing each object's field paths with
/// `<label>[<index>]`
pub fn validate_all<T: Validate>(label: &str, objects: &[T]) -> ValidationErrors {
    let mut errs = ValidationErrors::new();
    for (i, object) in objects.iter().enumerate() {
        if let Err(inner) = object.validate() {
            errs.extend_prefixed(&format!("{label}[{i}]"), inner);
        }
    }
    errs
}
