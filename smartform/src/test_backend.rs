//! Test backend for driving forms without user interaction.
//!
//! `TestBackend` replays a pre-defined sequence of change and submit events
//! against a controller. This is useful for testing registries and the
//! controller's submit behaviour.
//!
//! # Example
//!
//! ```rust
//! use smartform::{FieldDescriptor, FieldKind, FieldRegistry, FormBackend, FormController, TestBackend};
//!
//! let registry = FieldRegistry::new(vec![
//!     FieldDescriptor::new("city", "City", FieldKind::Text).required(),
//! ])?;
//! let mut form = FormController::new(registry);
//!
//! let submissions = TestBackend::new()
//!     .submit()
//!     .with_change("city", "Lisbon")
//!     .submit()
//!     .run(&mut form)?;
//!
//! assert_eq!(submissions.len(), 1);
//! assert_eq!(submissions[0].get("city"), "Lisbon");
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{FormBackend, FormController, FormEvent, SubmitOutcome, Values};

/// A test backend that replays pre-configured events.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    events: Vec<FormEvent>,
    strict: bool,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl TestBackend {
    /// Create a new backend with no events.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            strict: false,
        }
    }

    /// Reject changes to fields that are not in the registry.
    ///
    /// By default such changes are stored like any other value.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Append an event.
    pub fn with_event(mut self, event: FormEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Append a change event.
    pub fn with_change(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_event(FormEvent::change(name, value))
    }

    /// Append several change events.
    pub fn with_values<K, V>(mut self, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.events.extend(
            values
                .into_iter()
                .map(|(name, value)| FormEvent::change(name, value)),
        );
        self
    }

    /// Append a submit event.
    pub fn submit(self) -> Self {
        self.with_event(FormEvent::Submit)
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn run(&self, controller: &mut FormController) -> Result<Vec<Values>, Self::Error> {
        let mut submissions = Vec::new();

        for event in &self.events {
            if self.strict
                && let FormEvent::Change { name, .. } = event
                && !controller.registry().contains(name)
            {
                return Err(TestBackendError::UnknownField(name.clone()));
            }

            if let Some(SubmitOutcome::Accepted(values)) = controller.handle(event.clone()) {
                submissions.push(values);
            }
        }

        Ok(submissions)
    }
}
