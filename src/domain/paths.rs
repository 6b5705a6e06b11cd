use std::path::{Path, PathBuf};

/// Project configuration file read by `setup` and written by `init`.
pub const CONFIG_FILE: &str = "pwa.toml";

/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// `manifest.json`
pub const MANIFEST_FILE: &str = "manifest.json";

/// `offline.html`
pub const DEFAULT_OFFLINE_PAGE_FILE: &str = "offline.html";

/// `service-worker.js`
pub const SERVICE_WORKER_FILE: &str = "service-worker.js";

/// `<root>/pwa.toml`
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
