//! Setup command - runs the manifest, offline page and service worker writers.

use crate::app::AppContext;
use crate::app::commands::{GeneratedFile, manifest, offline_page, service_worker};
use crate::domain::{AppError, PwaConfig};
use crate::ports::{ProjectStore, TemplateRenderer};

/// Files written by a setup run, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    pub files: Vec<GeneratedFile>,
}

/// Execute the full generation pipeline.
///
/// Writers run in order: manifest, offline page, service worker. A failure
/// stops the pipeline; files already written are left in place.
pub fn execute<S: ProjectStore, R: TemplateRenderer>(
    ctx: &AppContext<S, R>,
    config: &PwaConfig,
) -> Result<SetupOutcome, AppError> {
    let output_dir = config.output_dir.as_path();

    let manifest = manifest::execute(ctx.store(), output_dir, &config.manifest)?;
    let offline =
        offline_page::execute(ctx, output_dir, &config.offline_page_name, &config.offline)?;
    let worker = service_worker::execute(ctx, output_dir, &config.service_worker_config())?;

    Ok(SetupOutcome { files: vec![manifest, offline, worker] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    use serde_json::Value;

    use crate::adapters::EmbeddedTemplateRenderer;
    use crate::domain::CachingStrategy;
    use crate::testing::MemoryProjectStore;

    fn context() -> AppContext<MemoryProjectStore, EmbeddedTemplateRenderer> {
        AppContext::new(MemoryProjectStore::new(), EmbeddedTemplateRenderer::new().unwrap())
    }

    /// Renders normally except for the service worker fragments.
    struct BrokenWorkerTemplates(EmbeddedTemplateRenderer);

    impl TemplateRenderer for BrokenWorkerTemplates {
        fn render(&self, name: &str, context: &Value) -> Result<String, AppError> {
            if name.starts_with("service-worker/") {
                return Err(AppError::TemplateMissing(name.to_string()));
            }
            self.0.render(name, context)
        }
    }

    #[test]
    fn writes_three_files_in_order() {
        let ctx = context();

        let outcome = execute(&ctx, &PwaConfig::default()).unwrap();

        let names: Vec<&str> = outcome.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["manifest.json", "offline.html", "service-worker.js"]);
        assert!(ctx.store().get("public/manifest.json").is_some());
        assert!(ctx.store().get("public/offline.html").is_some());
        assert!(ctx.store().get("public/service-worker.js").is_some());
    }

    #[test]
    fn offline_page_name_is_shared_with_service_worker() {
        let ctx = context();
        let config = PwaConfig {
            output_dir: PathBuf::from("dist"),
            offline_page_name: "fallback.html".into(),
            ..Default::default()
        };

        execute(&ctx, &config).unwrap();

        assert!(ctx.store().get("dist/fallback.html").is_some());
        assert!(ctx.store().get("dist/offline.html").is_none());
        let script = ctx.store().get("dist/service-worker.js").unwrap();
        assert!(script.contains("const OFFLINE_PAGE = \"fallback.html\";"));
    }

    #[test]
    fn strategy_from_config_selects_fetch_handler() {
        let ctx = context();
        let mut config = PwaConfig::default();
        config.service_worker.caching_strategy = CachingStrategy::StaleWhileRevalidate;

        execute(&ctx, &config).unwrap();

        let script = ctx.store().get("public/service-worker.js").unwrap();
        assert!(script.contains("cachedResponse || fetchPromise"));
    }

    #[test]
    fn reported_paths_are_absolute() {
        let ctx = context();

        let outcome = execute(&ctx, &PwaConfig::default()).unwrap();

        assert!(outcome.files.iter().all(|f| f.path.is_absolute()));
        assert_eq!(outcome.files[0].path, Path::new("/memory/public/manifest.json"));
    }

    #[test]
    fn offline_page_name_may_name_a_subdirectory() {
        let ctx = context();
        let config =
            PwaConfig { offline_page_name: "pages/offline.html".into(), ..Default::default() };

        let outcome = execute(&ctx, &config).unwrap();

        assert_eq!(outcome.files[1].path, Path::new("/memory/public/pages/offline.html"));
        assert!(ctx.store().get("public/pages/offline.html").is_some());
        let script = ctx.store().get("public/service-worker.js").unwrap();
        assert!(script.contains("const OFFLINE_PAGE = \"pages/offline.html\";"));
    }

    #[test]
    fn failed_later_writer_leaves_earlier_files() {
        let ctx = AppContext::new(
            MemoryProjectStore::new(),
            BrokenWorkerTemplates(EmbeddedTemplateRenderer::new().unwrap()),
        );

        let err = execute(&ctx, &PwaConfig::default()).unwrap_err();

        assert!(matches!(err, AppError::TemplateMissing(_)));
        assert!(ctx.store().get("public/manifest.json").is_some());
        assert!(ctx.store().get("public/offline.html").is_some());
        assert!(ctx.store().get("public/service-worker.js").is_none());
    }
}
