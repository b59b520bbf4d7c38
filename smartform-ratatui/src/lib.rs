//! # smartform-ratatui
//!
//! Ratatui form backend for smartform.
//!
//! This backend displays every field of a registry at once in a scrollable
//! TUI form. Users navigate with Tab/Shift+Tab or the arrow keys, type into
//! the focused input, and submit with Enter on the submit button (or F10).
//! Invalid inputs get a red border with the message beneath. An accepted
//! submission shows an acknowledgment and clears the form, so several
//! submissions can happen in one session. Esc leaves the form.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use smartform::{FormBackend, FormController, smart_form};
//! use smartform_ratatui::RatatuiFormBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut form = FormController::new(smart_form()?);
//!     let submissions = RatatuiFormBackend::new().run(&mut form)?;
//!     println!("{} submission(s)", submissions.len());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{RatatuiFormBackend, RatatuiFormError, Theme};
