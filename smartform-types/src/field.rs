use regex::Regex;

use crate::{FieldKind, RegistryError};

/// A compiled regular expression a field's raw value must match.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile a pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self)
    }

    /// Check whether the value matches.
    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// The static declaration of one form field.
///
/// Built once with the chained `with_*` methods and never mutated afterwards.
///
/// # Example
/// ```
/// use smartform_types::{FieldDescriptor, FieldKind};
///
/// let age = FieldDescriptor::new("age", "Age", FieldKind::Number)
///     .required()
///     .with_min(18.0)
///     .with_max(100.0);
/// assert!(age.is_required());
/// assert_eq!(age.min(), Some(18.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Unique key of the field in values and errors.
    name: String,

    /// Display label, also used in error messages.
    label: String,

    kind: FieldKind,

    required: bool,

    /// Minimum length in characters.
    min_length: Option<usize>,

    /// Maximum length in characters.
    max_length: Option<usize>,

    min: Option<f64>,

    max: Option<f64>,

    pattern: Option<Pattern>,
}

impl FieldDescriptor {
    /// Create an optional field without constraints.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            pattern: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the minimum length in characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Set the maximum length in characters.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the lower numeric bound.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper numeric bound.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the pattern the raw value must match.
    ///
    /// Fails if the pattern does not compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, RegistryError> {
        let compiled = Pattern::new(pattern).map_err(|source| RegistryError::InvalidPattern {
            field: self.name.clone(),
            source,
        })?;
        self.pattern = Some(compiled);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Placeholder text shown in an empty input.
    pub fn placeholder(&self) -> String {
        format!("Enter {}", self.label)
    }
}
