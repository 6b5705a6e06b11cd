//! Web app manifest model (`manifest.json`).

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Icon entry of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    pub fn png(src: impl Into<String>, sizes: impl Into<String>) -> Self {
        Self { src: src.into(), sizes: sizes.into(), mime_type: "image/png".to_string() }
    }
}

/// Application descriptor rendered to `manifest.json`.
///
/// Field order is the serialized key order. No field is validated: colors,
/// `display` and `orientation` values are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestDescriptor {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub display: String,
    pub orientation: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl Default for ManifestDescriptor {
    fn default() -> Self {
        Self {
            name: "My Progressive Web App".to_string(),
            short_name: "MyPWA".to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            orientation: "any".to_string(),
            background_color: "#ffffff".to_string(),
            theme_color: "#000000".to_string(),
            icons: vec![
                ManifestIcon::png("/icons/icon-192x192.png", "192x192"),
                ManifestIcon::png("/icons/icon-512x512.png", "512x512"),
            ],
        }
    }
}

impl ManifestDescriptor {
    /// Render as pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, AppError> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| AppError::Serialization {
            what: "manifest.json".into(),
            details: e.to_string(),
        })?;
        json.push('\n');
        Ok(json)
    }
}
