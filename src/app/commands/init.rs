//! Init command - writes a default `pwa.toml`.

use std::path::PathBuf;

use serde_json::{Value, json};

use crate::app::AppContext;
use crate::domain::paths::CONFIG_FILE;
use crate::domain::{AppError, PwaConfig};
use crate::ports::{ProjectStore, TemplateRenderer};

const CONFIG_TEMPLATE: &str = "pwa.toml";

/// Write the default configuration to `pwa.toml` in the project root.
///
/// Returns the absolute path of the written file.
pub fn execute<S: ProjectStore, R: TemplateRenderer>(
    ctx: &AppContext<S, R>,
) -> Result<PathBuf, AppError> {
    let target = PathBuf::from(CONFIG_FILE);
    let resolved = ctx.store().resolve_path(&target);
    if ctx.store().file_exists(&target) {
        return Err(AppError::ConfigExists(resolved.display().to_string()));
    }

    let content = render_default_config(ctx.templates())?;
    if let Some(dir) = target.parent() {
        ctx.store().create_dir_all(dir)?;
    }
    ctx.store().write_file(&target, &content)?;
    log::info!("Wrote {}", resolved.display());
    Ok(resolved)
}

/// Render the commented default configuration.
pub fn render_default_config(templates: &impl TemplateRenderer) -> Result<String, AppError> {
    templates.render(CONFIG_TEMPLATE, &config_context(&PwaConfig::default()))
}

// Every value is pre-encoded as a TOML literal.
fn config_context(config: &PwaConfig) -> Value {
    let manifest = &config.manifest;
    let icons: Vec<Value> = manifest
        .icons
        .iter()
        .map(|icon| {
            json!({
                "src": toml_string(&icon.src),
                "sizes": toml_string(&icon.sizes),
                "type": toml_string(&icon.mime_type),
            })
        })
        .collect();
    let assets = toml::Value::Array(
        config.service_worker.assets.iter().cloned().map(toml::Value::String).collect(),
    );

    json!({
        "output_dir": toml_string(&config.output_dir.to_string_lossy()),
        "offline_page_name": toml_string(&config.offline_page_name),
        "manifest": {
            "name": toml_string(&manifest.name),
            "short_name": toml_string(&manifest.short_name),
            "start_url": toml_string(&manifest.start_url),
            "display": toml_string(&manifest.display),
            "orientation": toml_string(&manifest.orientation),
            "background_color": toml_string(&manifest.background_color),
            "theme_color": toml_string(&manifest.theme_color),
            "icons": icons,
        },
        "offline": {
            "title": toml_string(&config.offline.title),
            "message": toml_string(&config.offline.message),
            "escape_message": toml::Value::Boolean(config.offline.escape_message).to_string(),
        },
        "service_worker": {
            "cache_name": toml_string(&config.service_worker.cache_name),
            "caching_strategy": toml_string(config.service_worker.caching_strategy.label()),
            "assets": assets.to_string(),
        },
    })
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedTemplateRenderer;
    use crate::app::config::parse_pwa_config;
    use crate::testing::MemoryProjectStore;

    fn context() -> AppContext<MemoryProjectStore, EmbeddedTemplateRenderer> {
        AppContext::new(MemoryProjectStore::new(), EmbeddedTemplateRenderer::new().unwrap())
    }

    #[test]
    fn default_config_parses_back_to_defaults() {
        let content = render_default_config(&EmbeddedTemplateRenderer::new().unwrap()).unwrap();
        assert_eq!(parse_pwa_config(&content).unwrap(), PwaConfig::default());
    }

    #[test]
    fn writes_config_to_project_root() {
        let ctx = context();

        let path = execute(&ctx).unwrap();

        assert_eq!(path, PathBuf::from("/memory/pwa.toml"));
        let content = ctx.store().get("pwa.toml").unwrap();
        assert!(content.contains("caching_strategy = \"cache-first\""));
    }

    #[test]
    fn refuses_to_overwrite_existing_config() {
        let ctx = context();
        ctx.store().insert("pwa.toml", "output_dir = \"site\"\n");

        let err = execute(&ctx).unwrap_err();

        assert!(matches!(err, AppError::ConfigExists(_)));
        assert_eq!(ctx.store().get("pwa.toml").unwrap(), "output_dir = \"site\"\n");
    }
}
