//! The form controller: values, errors and the submit state machine.

use crate::{FieldErrors, FieldRegistry, FormEvent, ValidationError, Values, validate};

/// The acknowledgment shown to the user after an accepted submission.
pub const SUCCESS_MESSAGE: &str = "✅ Form submitted successfully!";

/// Result of a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed. Holds the values captured before the form was reset.
    Accepted(Values),

    /// Validation failed. Values are kept; these errors are now displayed.
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Holds the current state of one form.
///
/// The controller is always editable. A successful submit is a transient
/// state: it logs the captured values and immediately returns to an empty
/// form.
#[derive(Debug, Clone)]
pub struct FormController {
    registry: FieldRegistry,
    values: Values,
    errors: FieldErrors,
}

impl FormController {
    /// Create a controller with empty values and no errors.
    pub fn new(registry: FieldRegistry) -> Self {
        Self {
            registry,
            values: Values::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current raw value of a field (`""` if untouched).
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name)
    }

    /// Current error of a field, if any.
    pub fn error_for(&self, name: &str) -> Option<&ValidationError> {
        self.errors.get(name)
    }

    /// Record a new value for a field.
    ///
    /// Errors are left untouched until the next validation pass.
    pub fn on_change(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        log::trace!("field '{name}' changed");
        self.values.insert(name, value);
    }

    /// Run validation, store the errors and report success.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.values, &self.registry);
        self.errors.is_empty()
    }

    /// Validate and, if the form is valid, accept and reset it.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.validate() {
            log::debug!(
                "Submission rejected with {} invalid field(s)",
                self.errors.len()
            );
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let captured = std::mem::take(&mut self.values);
        log::info!("Form data: {captured}");
        self.errors.clear();
        SubmitOutcome::Accepted(captured)
    }

    /// Apply an input event. Returns the outcome for submit events.
    pub fn handle(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Change { name, value } => {
                self.on_change(name, value);
                None
            }
            FormEvent::Submit => Some(self.submit()),
        }
    }
}
