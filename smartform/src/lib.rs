//! # smartform
//!
//! Declarative forms with per-field and cross-field validation. Backend-agnostic.
//!
//! A form is an ordered [`FieldRegistry`] of [`FieldDescriptor`]s. A
//! [`FormController`] holds the current values and errors, applies change
//! events and validates on submit. Backends render the form and feed events
//! into the controller.
//!
//! ## Usage
//!
//! ```rust
//! use smartform::{FormController, SubmitOutcome, smart_form};
//!
//! let mut form = FormController::new(smart_form()?);
//! form.on_change("email", "not-an-email");
//!
//! match form.submit() {
//!     SubmitOutcome::Rejected(errors) => {
//!         assert_eq!(errors.message("email").as_deref(), Some("Invalid Email"));
//!     }
//!     SubmitOutcome::Accepted(_) => unreachable!(),
//! }
//! # Ok::<(), smartform::RegistryError>(())
//! ```
//!
//! ## Field rules
//!
//! - `required()` - Blank (or whitespace-only) values are rejected; no further rule runs
//! - `with_pattern(..)` - Non-empty values must match the regular expression
//! - `with_min_length(n)` / `with_max_length(n)` - Length bounds in characters
//! - `with_min(x)` / `with_max(x)` - Numeric bounds, inclusive
//!
//! When several rules fail, the last one in the order above is reported.
//!
//! ## Backends
//!
//! Backends implement [`FormBackend`]:
//! - `smartform-ratatui` - Interactive terminal form
//! - [`TestBackend`] - Scripted events, for tests
//!
//! `smartform-html` renders the form state as an HTML document.

// Re-export all types from smartform-types
pub use smartform_types::*;

mod controller;
pub use controller::{FormController, SUCCESS_MESSAGE, SubmitOutcome};

mod backend;
pub use backend::FormBackend;

mod smart_form;
pub use smart_form::smart_form;

// Test backend for driving forms without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
