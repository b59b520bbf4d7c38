use std::collections::HashSet;

use crate::FieldDescriptor;

/// Error type for building a field registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    #[error("Field name must not be empty")]
    EmptyName,

    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}

/// The default key of the field that is checked for equality with its confirmation.
pub const PASSWORD_KEY: &str = "password";

/// The default key of the confirmation field. Errors for a mismatch are stored here.
pub const CONFIRM_PASSWORD_KEY: &str = "confirmPassword";

/// A pair of fields whose values must be equal.
///
/// A mismatch is reported on the `confirm` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub field: String,
    pub confirm: String,
}

impl Confirmation {
    pub fn new(field: impl Into<String>, confirm: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            confirm: confirm.into(),
        }
    }
}

impl Default for Confirmation {
    fn default() -> Self {
        Self::new(PASSWORD_KEY, CONFIRM_PASSWORD_KEY)
    }
}

/// An ordered, read-only collection of field descriptors.
///
/// Declaration order is the display order. Names are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRegistry {
    fields: Vec<FieldDescriptor>,
    confirmation: Confirmation,
}

impl FieldRegistry {
    /// Create a registry from descriptors, checking that names are non-empty and unique.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if field.name().is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if !seen.insert(field.name()) {
                return Err(RegistryError::DuplicateField(field.name().to_string()));
            }
        }
        Ok(Self {
            fields,
            confirmation: Confirmation::default(),
        })
    }

    /// Replace the confirmation pair (default: `password` / `confirmPassword`).
    pub fn with_confirmation(mut self, confirmation: Confirmation) -> Self {
        self.confirmation = confirmation;
        self
    }

    pub fn confirmation(&self) -> &Confirmation {
        &self.confirmation
    }

    /// Get the descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDescriptor::name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldRegistry {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
