//! Dynamic Smart Form in the terminal.
//!
//! Submitted values are logged at info level. Logs go to stderr, so redirect
//! them while the form owns the screen:
//!
//! ```sh
//! RUST_LOG=info cargo run -p smartform-ratatui --example smart_form 2> form.log
//! ```

use smartform::{FormBackend, FormController, smart_form};
use smartform_ratatui::RatatuiFormBackend;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut form = FormController::new(smart_form()?);
    let submissions = RatatuiFormBackend::new().run(&mut form)?;

    println!("{} submission(s) accepted", submissions.len());
    Ok(())
}
