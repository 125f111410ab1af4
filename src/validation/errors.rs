//! Accumulation of field violations

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::FieldError;

/// A [`FieldError`] tied to the field it was raised for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Dotted path of the field, e.g. `visibility` or `repositories[0].visibility`
    pub field: String,
    /// The offending value, rendered for display
    pub value: String,
    /// What went wrong
    #[serde(serialize_with = "serialize_kind")]
    pub kind: FieldError,
}

fn serialize_kind<S: serde::Serializer>(kind: &FieldError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.as_str())
}

impl FieldViolation {
    /// Human-readable message used in the field-indexed map
    #[must_use]
    pub fn message(&self) -> String {
        match self.kind {
            FieldError::Required => self.kind.to_string(),
            FieldError::Invalid | FieldError::EnumInvalid => {
                format!("{}: {:?}", self.kind, self.value)
            }
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Collects every violation found on one or more objects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` against `field` if it is an error; `Ok` is ignored
    pub fn append(
        &mut self,
        result: Result<(), FieldError>,
        value: impl fmt::Display,
        field: impl Into<String>,
    ) {
        if let Err(kind) = result {
            self.violations.push(FieldViolation {
                field: field.into(),
                value: value.to_string(),
                kind,
            });
        }
    }

    /// Record a required-field check
    pub fn require(&mut self, present: bool, field: impl Into<String>) {
        let result = if present { Ok(()) } else { Err(FieldError::Required) };
        self.append(result, "", field);
    }

    /// Merge another collection, prefixing each of its field paths
    pub fn extend_prefixed(&mut self, prefix: &str, other: Self) {
        self.violations.extend(other.violations.into_iter().map(|mut v| {
            v.field = format!("{prefix}.{}", v.field);
            v
        }));
    }

    /// Whether no violations were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of recorded violations
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// All violations in the order they were recorded
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether any violation of the given kind was recorded
    #[must_use]
    pub fn contains(&self, kind: FieldError) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    /// The field-indexed view: field path → message
    ///
    /// If a field was reported more than once, the messages are joined with `; `.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map: BTreeMap<String, String> = BTreeMap::new();
        for v in &self.violations {
            map.entry(v.field.clone())
                .and_modify(|m| {
                    m.push_str("; ");
                    m.push_str(&v.message());
                })
                .or_insert_with(|| v.message());
        }
        map
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl Extend<FieldViolation> for ValidationErrors {
    fn extend<I: IntoIterator<Item = FieldViolation>>(&mut self, iter: I) {
        self.violations.extend(iter);
    }
}
