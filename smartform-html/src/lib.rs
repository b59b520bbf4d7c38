//! # smartform-html
//!
//! Renders a smartform as an HTML document.
//!
//! The output contains one labelled input per field in registry order, with
//! the input `type` mirroring the field kind. The current values are filled
//! in (except for password inputs), and every field with a validation error
//! gets an invalid class and its message in a paragraph beneath the input.
//!
//! ## Usage
//!
//! ```rust
//! use smartform::{FormController, smart_form};
//! use smartform_html::to_html;
//!
//! let mut form = FormController::new(smart_form()?);
//! form.on_change("age", "17");
//! form.submit();
//!
//! let html = to_html(&form, Some("Sign up"));
//! assert!(html.contains("Age must be &gt;= 18"));
//! # Ok::<(), smartform::RegistryError>(())
//! ```

mod generator;

pub use generator::{HtmlOptions, render, to_html, to_html_with_options};
