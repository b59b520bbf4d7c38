//! HTML form generator implementation.

use smartform::{FieldDescriptor, FieldErrors, FieldRegistry, FormController, Values};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Text of the submit button.
    pub submit_label: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "smartform".to_string(),
            submit_label: "Submit Form".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the text of the submit button.
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }
}

/// Render the current state of a form.
///
/// This is a convenience function that uses default options with the given title.
pub fn to_html(controller: &FormController, title: Option<&str>) -> String {
    let mut options = HtmlOptions::new();
    if let Some(t) = title {
        options.title = Some(t.to_string());
    }
    to_html_with_options(controller, &options)
}

/// Render the current state of a form with custom options.
pub fn to_html_with_options(controller: &FormController, options: &HtmlOptions) -> String {
    render(
        controller.registry(),
        controller.values(),
        controller.errors(),
        options,
    )
}

/// Render a registry with the given values and errors.
pub fn render(
    registry: &FieldRegistry,
    values: &Values,
    errors: &FieldErrors,
    options: &HtmlOptions,
) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    // Validation is done by the controller, not the browser
    html.push_str(&format!("<form class=\"{prefix}-form\" novalidate>\n"));

    if let Some(title) = &options.title {
        html.push_str(&format!(
            "  <h2 class=\"{prefix}-title\">{}</h2>\n",
            escape_html(title)
        ));
    }

    html.push_str(&format!("  <div class=\"{prefix}-fields\">\n"));
    for field in registry {
        html.push_str(&generate_field(field, values, errors, prefix, 2));
    }
    html.push_str("  </div>\n");

    html.push_str(&format!(
        "  <button type=\"submit\" class=\"{prefix}-submit\">{}</button>\n",
        escape_html(&options.submit_label)
    ));

    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for a single field.
fn generate_field(
    field: &FieldDescriptor,
    values: &Values,
    errors: &FieldErrors,
    prefix: &str,
    indent: usize,
) -> String {
    let ind = "  ".repeat(indent);
    let name = escape_html(field.name());
    let field_id = format!("{prefix}-{name}");
    let error = errors.message(field.name());

    let mut html = String::new();
    html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));
    html.push_str(&format!(
        "{ind}  <label for=\"{field_id}\">{}</label>\n",
        escape_html(field.label())
    ));

    let mut attrs = format!(
        "type=\"{}\" id=\"{field_id}\" name=\"{name}\"",
        field.kind().as_html_type()
    );
    let value = values.get(field.name());
    // Don't echo secrets back into the page
    if !value.is_empty() && !field.kind().is_masked() {
        attrs.push_str(&format!(" value=\"{}\"", escape_html(value)));
    }
    attrs.push_str(&format!(
        " placeholder=\"{}\"",
        escape_html(&field.placeholder())
    ));
    if error.is_some() {
        attrs.push_str(&format!(
            " class=\"{prefix}-input {prefix}-invalid\" aria-invalid=\"true\""
        ));
    } else {
        attrs.push_str(&format!(" class=\"{prefix}-input\""));
    }
    html.push_str(&format!("{ind}  <input {attrs}>\n"));

    if let Some(message) = error {
        html.push_str(&format!(
            "{ind}  <p class=\"{prefix}-error\">{}</p>\n",
            escape_html(&message)
        ));
    }

    html.push_str(&format!("{ind}</div>\n"));
    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form {{
      max-width: 960px;
      margin: 2rem auto;
      padding: 2.5rem;
      font-family: sans-serif;
      border-radius: 1.5rem;
      box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
    }}
    .{prefix}-title {{
      text-align: center;
      color: #4338ca;
    }}
    .{prefix}-fields {{
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 1.5rem;
    }}
    .{prefix}-field {{
      display: flex;
      flex-direction: column;
    }}
    .{prefix}-field label {{
      font-weight: 600;
      margin-bottom: 0.5rem;
    }}
    .{prefix}-input {{
      padding: 0.75rem;
      border: 1px solid #d1d5db;
      border-radius: 0.75rem;
      background: #f9fafb;
    }}
    .{prefix}-invalid {{
      border-color: #ef4444;
    }}
    .{prefix}-error {{
      color: #ef4444;
      font-size: 0.875rem;
      margin: 0.25rem 0 0;
    }}
    .{prefix}-submit {{
      width: 100%;
      margin-top: 1.5rem;
      padding: 1rem;
      border: none;
      border-radius: 0.75rem;
      color: white;
      background: #4f46e5;
      font-size: 1.125rem;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartform::{FieldKind, smart_form};

    fn fragment() -> HtmlOptions {
        HtmlOptions::new().full_document(false)
    }

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .with_title("Test Form")
            .with_styles(false)
            .full_document(true)
            .with_class_prefix("my-form")
            .with_submit_label("Send");

        assert_eq!(options.title, Some("Test Form".to_string()));
        assert!(!options.include_styles);
        assert!(options.full_document);
        assert_eq!(options.class_prefix, "my-form");
        assert_eq!(options.submit_label, "Send");
    }

    #[test]
    fn renders_fields_in_registry_order() {
        let form = FormController::new(smart_form().unwrap());
        let html = to_html_with_options(&form, &fragment());

        let positions: Vec<usize> = form
            .registry()
            .names()
            .map(|name| html.find(&format!("name=\"{name}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<input ").count(), 20);
        assert!(html.contains("<button type=\"submit\" class=\"smartform-submit\">Submit Form</button>"));
        assert!(!html.contains("<html"));
    }

    #[test]
    fn input_type_mirrors_kind() {
        let form = FormController::new(smart_form().unwrap());
        let html = to_html_with_options(&form, &fragment());
        for field in form.registry() {
            let expected = format!(
                "type=\"{}\" id=\"smartform-{}\"",
                field.kind().as_html_type(),
                field.name()
            );
            assert!(html.contains(&expected), "{expected}");
        }
        assert!(html.contains("placeholder=\"Enter Years of Experience\""));
    }

    #[test]
    fn errors_render_beneath_input() {
        let mut form = FormController::new(smart_form().unwrap());
        form.on_change("email", "not-an-email");
        form.submit();
        let html = to_html_with_options(&form, &fragment());

        assert!(html.contains(
            "value=\"not-an-email\" placeholder=\"Enter Email\" class=\"smartform-input smartform-invalid\" aria-invalid=\"true\">\n      <p class=\"smartform-error\">Invalid Email</p>"
        ));
        assert!(html.contains("<p class=\"smartform-error\">Full Name is required</p>"));
        // Optional fields stay unmarked
        assert!(html.contains(
            "name=\"zip\" placeholder=\"Enter ZIP Code\" class=\"smartform-input\">"
        ));
    }

    #[test]
    fn password_values_are_not_rendered() {
        let mut form = FormController::new(smart_form().unwrap());
        form.on_change("password", "hunter22");
        let html = to_html(&form, None);
        assert!(!html.contains("hunter22"));
    }

    #[test]
    fn text_is_escaped() {
        let registry = FieldRegistry::new(vec![FieldDescriptor::new(
            "q",
            "Q & <A>",
            FieldKind::Text,
        )])
        .unwrap();
        let values = Values::new().with("q", "\"quoted\"");
        let html = render(&registry, &values, &FieldErrors::new(), &fragment());
        assert!(html.contains("<label for=\"smartform-q\">Q &amp; &lt;A&gt;</label>"));
        assert!(html.contains("value=\"&quot;quoted&quot;\""));
    }

    #[test]
    fn full_document_has_title_and_styles() {
        let form = FormController::new(smart_form().unwrap());
        let html = to_html(&form, Some("Dynamic Smart Form"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dynamic Smart Form</title>"));
        assert!(html.contains(".smartform-invalid {"));
        assert!(html.ends_with("</html>\n"));
    }
}
