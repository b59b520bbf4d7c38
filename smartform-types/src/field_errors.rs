use std::collections::BTreeMap;

/// A single validation failure for one field.
///
/// The `Display` output is the message shown beneath the field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: String },

    #[error("Invalid {label}")]
    PatternMismatch { label: String },

    #[error("{label} must be at least {min_length} characters")]
    TooShort { label: String, min_length: usize },

    #[error("{label} must be under {max_length} characters")]
    TooLong { label: String, max_length: usize },

    #[error("{label} must be >= {min}")]
    BelowMin { label: String, min: f64 },

    #[error("{label} must be <= {max}")]
    AboveMax { label: String, max: f64 },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Validation errors of a form, keyed by field name. At most one per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<String, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Set the error for a field, replacing any earlier one.
    pub fn insert(&mut self, name: impl Into<String>, error: ValidationError) {
        self.errors.insert(name.into(), error);
    }

    pub fn get(&self, name: &str) -> Option<&ValidationError> {
        self.errors.get(name)
    }

    /// The rendered message for a field, if it has an error.
    pub fn message(&self, name: &str) -> Option<String> {
        self.errors.get(name).map(ToString::to_string)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names that have errors.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
