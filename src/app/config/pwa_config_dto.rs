use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{
    AppError, CachingStrategy, ManifestDescriptor, ManifestIcon, OfflinePageConfig, PwaConfig,
    ServiceWorkerSettings,
};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PwaConfigDto {
    pub output_dir: Option<PathBuf>,
    pub offline_page_name: Option<String>,
    pub manifest: Option<ManifestDto>,
    pub offline: Option<OfflinePageDto>,
    pub service_worker: Option<ServiceWorkerDto>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestDto {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub start_url: Option<String>,
    pub display: Option<String>,
    pub orientation: Option<String>,
    pub background_color: Option<String>,
    pub theme_color: Option<String>,
    pub icons: Option<Vec<ManifestIcon>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfflinePageDto {
    pub title: Option<String>,
    pub message: Option<String>,
    pub escape_message: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceWorkerDto {
    pub cache_name: Option<String>,
    pub assets: Option<Vec<String>>,
    pub caching_strategy: Option<String>,
}

impl TryFrom<PwaConfigDto> for PwaConfig {
    type Error = AppError;

    fn try_from(dto: PwaConfigDto) -> Result<Self, Self::Error> {
        let defaults = PwaConfig::default();

        let manifest = match dto.manifest {
            Some(d) => {
                let m = defaults.manifest;
                ManifestDescriptor {
                    name: d.name.unwrap_or(m.name),
                    short_name: d.short_name.unwrap_or(m.short_name),
                    start_url: d.start_url.unwrap_or(m.start_url),
                    display: d.display.unwrap_or(m.display),
                    orientation: d.orientation.unwrap_or(m.orientation),
                    background_color: d.background_color.unwrap_or(m.background_color),
                    theme_color: d.theme_color.unwrap_or(m.theme_color),
                    icons: d.icons.unwrap_or(m.icons),
                }
            }
            None => defaults.manifest,
        };

        let offline = match dto.offline {
            Some(d) => {
                let o = defaults.offline;
                OfflinePageConfig {
                    title: d.title.unwrap_or(o.title),
                    message: d.message.unwrap_or(o.message),
                    escape_message: d.escape_message.unwrap_or(o.escape_message),
                }
            }
            None => defaults.offline,
        };

        let service_worker = match dto.service_worker {
            Some(d) => {
                let s = defaults.service_worker;
                let caching_strategy = match d.caching_strategy {
                    Some(value) => value.parse::<CachingStrategy>()?,
                    None => s.caching_strategy,
                };
                ServiceWorkerSettings {
                    cache_name: d.cache_name.unwrap_or(s.cache_name),
                    assets: d.assets.unwrap_or(s.assets),
                    caching_strategy,
                }
            }
            None => defaults.service_worker,
        };

        Ok(PwaConfig {
            output_dir: dto.output_dir.unwrap_or(defaults.output_dir),
            offline_page_name: dto.offline_page_name.unwrap_or(defaults.offline_page_name),
            manifest,
            offline,
            service_worker,
        })
    }
}
