//! Service worker writer - renders `service-worker.js`.
//!
//! The script is assembled from four embedded fragments: the constant header,
//! the `install` handler (precache `ASSETS` plus `OFFLINE_PAGE`), the
//! `activate` handler (evict every cache except `CACHE_NAME`) and the `fetch`
//! handler selected by the caching strategy.

use std::path::Path;

use serde_json::json;

use crate::app::AppContext;
use crate::app::commands::{GeneratedFile, write_artifact};
use crate::domain::paths::SERVICE_WORKER_FILE;
use crate::domain::{AppError, ServiceWorkerConfig};
use crate::ports::{ProjectStore, TemplateRenderer};

const HEADER_TEMPLATE: &str = "service-worker/header.js";
const INSTALL_TEMPLATE: &str = "service-worker/install.js";
const ACTIVATE_TEMPLATE: &str = "service-worker/activate.js";

/// Render the complete service worker script.
pub fn render(
    templates: &impl TemplateRenderer,
    config: &ServiceWorkerConfig,
) -> Result<String, AppError> {
    let literals = config.header_literals()?;
    let header_context = json!({
        "cache_name": literals.cache_name,
        "offline_page": literals.offline_page,
        "assets": literals.assets,
    });
    let empty = json!({});

    log::debug!(
        "Rendering service worker with {} strategy and {} precached path(s)",
        config.caching_strategy,
        config.precache_list().len()
    );

    let sections = [
        templates.render(HEADER_TEMPLATE, &header_context)?,
        templates.render(INSTALL_TEMPLATE, &empty)?,
        templates.render(ACTIVATE_TEMPLATE, &empty)?,
        templates.render(config.caching_strategy.fetch_template(), &empty)?,
    ];
    Ok(sections.join("\n"))
}

/// Write `service-worker.js` into `output_dir`.
pub fn execute<S: ProjectStore, R: TemplateRenderer>(
    ctx: &AppContext<S, R>,
    output_dir: &Path,
    config: &ServiceWorkerConfig,
) -> Result<GeneratedFile, AppError> {
    let script = render(ctx.templates(), config)?;
    write_artifact(ctx.store(), output_dir, SERVICE_WORKER_FILE, &script)
}
