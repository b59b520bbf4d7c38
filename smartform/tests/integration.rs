//! Integration tests for smartform, driven through the smart form registry.

use smartform::{
    FieldDescriptor, FieldKind, FieldRegistry, FormBackend, FormController, TestBackend,
    ValidationError, Values, smart_form, validate,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn valid_values() -> Values {
    Values::new()
        .with("name", "Ada Lovelace")
        .with("email", "ada@example.org")
        .with("phone", "4915112345678")
        .with("age", "36")
        .with("password", "analytical")
        .with("confirmPassword", "analytical")
        .with("address", "12 St James's Square")
        .with("city", "London")
        .with("country", "United Kingdom")
        .with("username", "adal")
}

fn error_message(values: &Values, name: &str) -> Option<String> {
    let registry = smart_form().unwrap();
    validate(values, &registry).message(name)
}

#[test]
fn test_every_required_field_reports_blank() {
    let registry = smart_form().unwrap();
    let values = Values::new()
        .with("name", "   ")
        .with("age", "")
        .with("city", "\t");
    let errors = validate(&values, &registry);

    for field in registry.iter().filter(|f| f.is_required()) {
        let expected = format!("{} is required", field.label());
        assert_eq!(errors.message(field.name()), Some(expected), "{}", field.name());
    }
    for field in registry.iter().filter(|f| !f.is_required()) {
        assert!(!errors.contains(field.name()), "{}", field.name());
    }
}

#[test]
fn test_required_short_circuits_min_length() {
    // Whitespace would fail minLength 3, but only the required message shows.
    assert_eq!(
        error_message(&Values::new().with("name", "  "), "name").as_deref(),
        Some("Full Name is required")
    );
}

#[test]
fn test_email_pattern() {
    let invalid = valid_values().with("email", "not-an-email");
    assert_eq!(
        error_message(&invalid, "email").as_deref(),
        Some("Invalid Email")
    );

    let valid = valid_values().with("email", "a@b.co");
    assert_eq!(error_message(&valid, "email"), None);
}

#[test]
fn test_age_bounds() {
    let cases = [
        ("17", Some("Age must be >= 18")),
        ("101", Some("Age must be <= 100")),
        ("18", None),
        ("100", None),
    ];
    for (age, expected) in cases {
        let values = valid_values().with("age", age);
        assert_eq!(error_message(&values, "age").as_deref(), expected, "age {age}");
    }
}

#[test]
fn test_password_mismatch_overrides_confirm_validity() {
    let values = valid_values()
        .with("password", "abc123")
        .with("confirmPassword", "abc124");
    assert_eq!(
        error_message(&values, "confirmPassword").as_deref(),
        Some("Passwords do not match")
    );

    // Even a blank confirmation reports the mismatch, not the required message.
    let blank = valid_values().with("confirmPassword", "");
    assert_eq!(
        error_message(&blank, "confirmPassword").as_deref(),
        Some("Passwords do not match")
    );
}

#[test]
fn test_validation_is_idempotent() {
    let registry = smart_form().unwrap();
    let values = valid_values()
        .with("zip", "12")
        .with("website", "ftp://example.org");
    let first = validate(&values, &registry);
    let second = validate(&values, &registry);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_min_length_overwrites_pattern_message() {
    let registry = FieldRegistry::new(vec![
        FieldDescriptor::new("pin", "PIN", FieldKind::Password)
            .with_min_length(6)
            .with_pattern(r"^[0-9]+$")
            .unwrap(),
    ])
    .unwrap();
    let errors = validate(&Values::new().with("pin", "ab"), &registry);
    assert_eq!(
        errors.get("pin"),
        Some(&ValidationError::TooShort {
            label: "PIN".into(),
            min_length: 6
        })
    );
}

#[test]
fn test_error_keys_are_registry_names_or_confirmation() {
    let registry = smart_form().unwrap();
    let values = Values::new()
        .with("unknown", "value")
        .with("password", "x");
    let errors = validate(&values, &registry);
    for name in errors.names() {
        assert!(
            registry.contains(name) || name == registry.confirmation().confirm,
            "unexpected key {name}"
        );
    }
}

#[test]
fn test_end_to_end_submit() {
    init_logger();
    let mut form = FormController::new(smart_form().unwrap());

    let submissions = TestBackend::new()
        .submit()
        .with_values(valid_values())
        .submit()
        .run(&mut form)
        .unwrap();

    assert_eq!(submissions, vec![valid_values()]);
    assert!(form.values().is_empty());
    assert!(form.errors().is_empty());
}

#[test]
fn test_rejected_submit_keeps_values_and_errors() {
    init_logger();
    let mut form = FormController::new(smart_form().unwrap());

    let submissions = TestBackend::new()
        .with_values(valid_values().with("phone", "12-34"))
        .submit()
        .run(&mut form)
        .unwrap();

    assert!(submissions.is_empty());
    assert_eq!(form.value("phone"), "12-34");
    assert_eq!(
        form.error_for("phone").map(ToString::to_string).as_deref(),
        Some("Invalid Phone")
    );
    assert_eq!(form.errors().len(), 1);
}

#[test]
fn test_optional_fields_validate_when_filled() {
    let values = valid_values()
        .with("bio", "x".repeat(201))
        .with("experience", "51")
        .with("website", "https://example.org");
    assert_eq!(
        error_message(&values, "bio").as_deref(),
        Some("Short Bio must be under 200 characters")
    );
    assert_eq!(
        error_message(&values, "experience").as_deref(),
        Some("Years of Experience must be <= 50")
    );
    assert_eq!(error_message(&values, "website"), None);
}

#[test]
fn test_experience_zero_is_a_real_lower_bound() {
    let negative = valid_values().with("experience", "-1");
    assert_eq!(
        error_message(&negative, "experience").as_deref(),
        Some("Years of Experience must be >= 0")
    );
    let zero = valid_values().with("experience", "0");
    assert_eq!(error_message(&zero, "experience"), None);
}
