//! Core types for the smartform crate.
//!
//! This crate provides the presentation-agnostic pieces of a form:
//! - `FieldDescriptor`, `FieldKind` and `FieldRegistry` - The declared fields
//! - `Values` and `FieldErrors` - Current input and validation results
//! - `validate` - The validation routine
//! - `FormEvent` - Input events fed to a form

mod field_kind;
pub use field_kind::FieldKind;

mod field;
pub use field::{FieldDescriptor, Pattern};

mod registry;
pub use registry::{
    CONFIRM_PASSWORD_KEY, Confirmation, FieldRegistry, PASSWORD_KEY, RegistryError,
};

mod values;
pub use values::Values;

mod field_errors;
pub use field_errors::{FieldErrors, ValidationError};

mod validate;
pub use validate::{parse_number, validate, validate_field};

mod event;
pub use event::FormEvent;
