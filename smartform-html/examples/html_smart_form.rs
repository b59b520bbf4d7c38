//! Render the smart form, after one rejected submission, as an HTML file.
//!
//! Run with: cargo run -p smartform-html --example html_smart_form

use smartform::{FormController, smart_form};
use smartform_html::to_html;

fn main() -> anyhow::Result<()> {
    let mut form = FormController::new(smart_form()?);
    form.on_change("name", "Al");
    form.on_change("email", "not-an-email");
    form.on_change("age", "17");
    form.submit();

    let html = to_html(&form, Some("Dynamic Smart Form 🚀"));
    std::fs::write("smart_form.html", &html)?;

    println!("Generated smart_form.html");
    Ok(())
}
