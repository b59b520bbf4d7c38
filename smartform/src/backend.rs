use crate::{FormController, Values};

/// Trait for backend implementations that present a form to a user.
///
/// Backends render the controller's registry, values and errors, and forward
/// user input as change and submit events. Validation, acknowledgment logging
/// and resetting happen inside the controller.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run the form until the user leaves it.
    ///
    /// # Returns
    /// * `Ok(submissions)` - the values of every accepted submission, in order
    /// * `Err` on backend failure
    fn run(&self, controller: &mut FormController) -> Result<Vec<Values>, Self::Error>;
}
