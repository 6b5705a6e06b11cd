//! Offline page writer.

use std::path::Path;

use serde_json::json;

use crate::app::AppContext;
use crate::app::commands::{GeneratedFile, write_artifact};
use crate::domain::{AppError, OfflinePageConfig};
use crate::ports::{ProjectStore, TemplateRenderer};

const OFFLINE_TEMPLATE: &str = "offline.html";

/// Render the offline page document.
pub fn render(
    templates: &impl TemplateRenderer,
    page: &OfflinePageConfig,
) -> Result<String, AppError> {
    let context = json!({
        "title": page.title,
        "message": page.message,
        "escape_message": page.escape_message,
    });
    templates.render(OFFLINE_TEMPLATE, &context)
}

/// Write the offline page as `output_dir/file_name`.
pub fn execute<S: ProjectStore, R: TemplateRenderer>(
    ctx: &AppContext<S, R>,
    output_dir: &Path,
    file_name: &str,
    page: &OfflinePageConfig,
) -> Result<GeneratedFile, AppError> {
    let html = render(ctx.templates(), page)?;
    write_artifact(ctx.store(), output_dir, file_name, &html)
}
