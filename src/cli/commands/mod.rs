//! Command implementations

mod check;
mod clone_url;
mod defaults;
mod values;

pub use check::check;
pub use clone_url::clone_url;
pub use defaults::defaults;
pub use values::values;
