use std::fmt;

/// The input kind of a field, mirroring the HTML input types it renders as.
///
/// Every kind stores its value as a raw string; the kind only affects
/// presentation (masking, keyboard hints, the `type` attribute).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Plain single-line text.
    #[default]
    Text,

    /// An email address.
    Email,

    /// A telephone number.
    Tel,

    /// A number. Still stored as text; bounds parse it on validation.
    Number,

    /// A masked input for secrets.
    Password,

    /// A web address.
    Url,
}

impl FieldKind {
    /// The HTML `type` attribute value for this kind.
    pub fn as_html_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Password => "password",
            Self::Url => "url",
        }
    }

    /// Whether the input should hide what the user types.
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Password)
    }

    /// Whether the input is expected to hold a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_html_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_password_is_masked() {
        let kinds = [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Tel,
            FieldKind::Number,
            FieldKind::Password,
            FieldKind::Url,
        ];
        let masked: Vec<_> = kinds.iter().filter(|k| k.is_masked()).collect();
        assert_eq!(masked, vec![&FieldKind::Password]);
    }

    #[test]
    fn display_matches_html_type() {
        assert_eq!(FieldKind::Tel.to_string(), "tel");
        assert_eq!(FieldKind::Url.as_html_type(), "url");
    }
}
