use serde_json::Value;

use crate::domain::AppError;

/// Port for rendering named templates.
///
/// Keeps the template engine out of the writers. The context is a plain JSON
/// object so any engine accepting serde values can back it.
pub trait TemplateRenderer {
    /// Render the template registered under `name`.
    fn render(&self, name: &str, context: &Value) -> Result<String, AppError>;
}
