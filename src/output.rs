//! Output formatting for human and JSON modes
//!
//! Results can be rendered either as human-readable text or machine-parseable
//! JSON.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;

use crate::validation::ValidationErrors;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of checking a manifest
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether every resource passed validation
    pub valid: bool,
    /// Number of resources checked
    pub resources: usize,
    /// Field path → message
    pub errors: BTreeMap<String, String>,
}

impl CheckReport {
    /// Build a report from the outcome of validation
    #[must_use]
    pub fn new(resources: usize, result: &Result<(), ValidationErrors>) -> Self {
        let errors = result.as_ref().err().map(ValidationErrors::to_map).unwrap_or_default();
        Self {
            valid: errors.is_empty(),
            resources,
            errors,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("{} {} resource(s) valid", "OK".green().bold(), self.resources);
            return;
        }

        println!("{} {} invalid field(s):\n", "INVALID".red().bold(), self.errors.len());
        for (field, message) in &self.errors {
            println!("  {}  {message}", field.bold());
        }
    }
}

/// Legal values for each enum kind
#[derive(Debug, Serialize)]
pub struct ValuesReport {
    /// Kind → values, in declaration order
    pub kinds: BTreeMap<String, Vec<String>>,
}

impl ValuesReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for (kind, values) in &self.kinds {
                    println!("{}: {}", kind.bold(), values.join(", "));
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// A computed clone URL
#[derive(Debug, Serialize)]
pub struct CloneUrlResult {
    /// Transport used
    pub transport: String,
    /// The URL
    pub url: String,
}

impl CloneUrlResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.url),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
