//! HTML report rendering.
//!
//! The report is a static page; the only dynamic part is the name of
//! the JSON timeline it loads.

use crate::utils::config::{DEFAULT_TEMPLATE, TEMPLATE_PLACEHOLDER};
use crate::utils::error::OutputError;
use log::{debug, warn};
use std::borrow::Cow;
use std::path::Path;

/// Load the report template
///
/// **Public** - `None` selects the built-in template
///
/// # Errors
/// * `OutputError::TemplateRead` - Custom template cannot be read
pub fn load_template(path: Option<&Path>) -> Result<Cow<'static, str>, OutputError> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(DEFAULT_TEMPLATE));
    };

    debug!("Loading template from: {}", path.display());

    let template = std::fs::read_to_string(path).map_err(|source| OutputError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;

    if !template.contains(TEMPLATE_PLACEHOLDER) {
        warn!(
            "Template {} has no {} placeholder; the report will not find its data",
            path.display(),
            TEMPLATE_PLACEHOLDER
        );
    }

    Ok(Cow::Owned(template))
}

/// Substitute the JSON file reference into the template
///
/// The path is inserted as a quoted JavaScript string literal.
pub fn render_html(template: &str, json_path: &Path) -> String {
    let literal = serde_json::Value::String(json_path.display().to_string()).to_string();
    template.replace(TEMPLATE_PLACEHOLDER, &literal)
}

/// Write the rendered report
///
/// **Public** - HTML half of the report
pub fn write_html(html: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing HTML to: {}", output_path.display());
    super::write_atomic(output_path, html.as_bytes())
}
