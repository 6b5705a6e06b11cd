//! Project-backed configuration loading and DTOs.
//!
//! File schemas live here as DTOs; conversion produces the validated
//! `domain::PwaConfig`. Command-line overrides are applied on top.

mod load_pwa_config;
mod overrides;
mod pwa_config_dto;

pub use load_pwa_config::{load_pwa_config, parse_pwa_config};
pub use overrides::ConfigOverrides;
