/// An input event delivered to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of a field changed.
    Change { name: String, value: String },

    /// The user asked to submit the form.
    Submit,
}

impl FormEvent {
    pub fn change(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Change {
            name: name.into(),
            value: value.into(),
        }
    }
}
