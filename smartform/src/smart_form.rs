//! The built-in "Dynamic Smart Form" registry.

use crate::{FieldDescriptor, FieldKind, FieldRegistry, RegistryError};

/// Build the smart form: a personal profile with contact details, a password
/// confirmation and optional professional links.
pub fn smart_form() -> Result<FieldRegistry, RegistryError> {
    use FieldKind::*;

    FieldRegistry::new(vec![
        FieldDescriptor::new("name", "Full Name", Text)
            .required()
            .with_min_length(3),
        FieldDescriptor::new("email", "Email", Email)
            .required()
            .with_pattern(r"^\S+@\S+\.\S+$")?,
        FieldDescriptor::new("phone", "Phone", Tel)
            .required()
            .with_pattern(r"^[0-9]{10,15}$")?,
        FieldDescriptor::new("age", "Age", Number)
            .required()
            .with_min(18.0)
            .with_max(100.0),
        FieldDescriptor::new("password", "Password", Password)
            .required()
            .with_min_length(6),
        FieldDescriptor::new("confirmPassword", "Confirm Password", Password).required(),
        FieldDescriptor::new("address", "Address", Text).required(),
        FieldDescriptor::new("city", "City", Text).required(),
        FieldDescriptor::new("country", "Country", Text).required(),
        FieldDescriptor::new("zip", "ZIP Code", Text).with_pattern(r"^[0-9]{5,6}$")?,
        FieldDescriptor::new("username", "Username", Text)
            .required()
            .with_min_length(4),
        FieldDescriptor::new("occupation", "Occupation", Text),
        FieldDescriptor::new("gender", "Gender", Text),
        FieldDescriptor::new("bio", "Short Bio", Text).with_max_length(200),
        FieldDescriptor::new("website", "Website", Url).with_pattern(r"^https?://.+")?,
        FieldDescriptor::new("linkedin", "LinkedIn Profile", Url),
        FieldDescriptor::new("twitter", "Twitter Handle", Text),
        FieldDescriptor::new("skills", "Skills", Text),
        FieldDescriptor::new("experience", "Years of Experience", Number)
            .with_min(0.0)
            .with_max(50.0),
        FieldDescriptor::new("portfolio", "Portfolio URL", Url),
    ])
}
