//! The validation routine.
//!
//! Each rule that fails overwrites the field's previous error, so the last
//! failing rule is the one reported. The only exception is the required
//! check, which skips every later rule for that field.

use crate::{FieldDescriptor, FieldErrors, FieldRegistry, ValidationError, Values};

/// Validate all values against the registry.
///
/// Pure: the same values always produce the same errors. An empty result
/// means the form may be submitted.
pub fn validate(values: &Values, registry: &FieldRegistry) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in registry {
        let value = values.get(field.name());
        if let Some(error) = validate_field(field, value) {
            errors.insert(field.name(), error);
        }
    }

    let confirmation = registry.confirmation();
    if values.get(&confirmation.field) != values.get(&confirmation.confirm) {
        errors.insert(
            confirmation.confirm.clone(),
            ValidationError::PasswordMismatch,
        );
    }

    errors
}

/// Validate a single raw value against its descriptor.
pub fn validate_field(field: &FieldDescriptor, value: &str) -> Option<ValidationError> {
    let label = || field.label().to_string();

    if field.is_required() && value.trim().is_empty() {
        return Some(ValidationError::Required { label: label() });
    }

    let mut error = None;

    if let Some(pattern) = field.pattern()
        && !value.is_empty()
        && !pattern.is_match(value)
    {
        error = Some(ValidationError::PatternMismatch { label: label() });
    }

    let length = value.chars().count();
    if let Some(min_length) = field.min_length()
        && length < min_length
    {
        error = Some(ValidationError::TooShort {
            label: label(),
            min_length,
        });
    }
    if let Some(max_length) = field.max_length()
        && length > max_length
    {
        error = Some(ValidationError::TooLong {
            label: label(),
            max_length,
        });
    }

    let number = parse_number(value);
    if let Some(min) = field.min()
        && number < min
    {
        error = Some(ValidationError::BelowMin {
            label: label(),
            min,
        });
    }
    if let Some(max) = field.max()
        && number > max
    {
        error = Some(ValidationError::AboveMax {
            label: label(),
            max,
        });
    }

    error
}

/// Parse a raw value as a number for bound checks.
///
/// Follows browser number parsing: blank text counts as zero, `0x`/`0o`/`0b`
/// prefixes select a radix, and the only spelled-out value is `Infinity`.
/// Anything unparsable is NaN, which never compares below or above a bound.
pub fn parse_number(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(number) = parse_prefixed(trimmed) {
        return number;
    }

    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Unsigned integer literal with a radix prefix, e.g. `0x1F`.
fn parse_prefixed(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let number = digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(number.unwrap_or(f64::NAN))
}
