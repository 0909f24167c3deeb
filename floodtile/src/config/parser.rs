//! INI parsing logic for converting `Ini` → `Config`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use image::Rgba;
use ini::Ini;

use super::defaults::{valid_tile_size, MAX_TILE_SIZE, MIN_TILE_SIZE};
use super::file::ConfigFileError;
use super::settings::Config;
use crate::coord::MAX_ZOOM;

/// Parse an `Ini` object into a `Config`.
///
/// Starts from `Config::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<Config, ConfigFileError> {
    let mut config = Config::default();

    // [server] section
    if let Some(section) = ini.section(Some("server")) {
        if let Some(v) = section.get("bind") {
            let v = v.trim();
            if !v.is_empty() {
                config.server.bind = v.to_string();
            }
        }
        if let Some(v) = section.get("port") {
            config.server.port = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "server".to_string(),
                key: "port".to_string(),
                value: v.to_string(),
                reason: "must be a port number (1-65535)".to_string(),
            })?;
        }
    }

    // [data] section
    if let Some(section) = ini.section(Some("data")) {
        if let Some(v) = section.get("source") {
            let v = v.trim();
            if !v.is_empty() {
                config.data.source = v.to_string();
            }
        }
    }

    // [tile] section
    if let Some(section) = ini.section(Some("tile")) {
        if let Some(v) = section.get("size") {
            let parsed: u32 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "tile".to_string(),
                key: "size".to_string(),
                value: v.to_string(),
                reason: "must be a positive integer (pixels)".to_string(),
            })?;
            if !valid_tile_size(parsed) {
                return Err(ConfigFileError::InvalidValue {
                    section: "tile".to_string(),
                    key: "size".to_string(),
                    value: v.to_string(),
                    reason: format!(
                        "must be between {} and {} pixels",
                        MIN_TILE_SIZE, MAX_TILE_SIZE
                    ),
                });
            }
            config.tile.size = parsed;
        }
        if let Some(v) = section.get("max_zoom") {
            let parsed: u8 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "tile".to_string(),
                key: "max_zoom".to_string(),
                value: v.to_string(),
                reason: "must be an integer zoom level".to_string(),
            })?;
            if parsed > MAX_ZOOM {
                return Err(ConfigFileError::InvalidValue {
                    section: "tile".to_string(),
                    key: "max_zoom".to_string(),
                    value: v.to_string(),
                    reason: format!("must not exceed {}", MAX_ZOOM),
                });
            }
            config.tile.max_zoom = parsed;
        }
    }

    // [style] section
    if let Some(section) = ini.section(Some("style")) {
        let entries: [(&str, &mut Rgba<u8>); 5] = [
            ("critical", &mut config.style.palette.critical),
            ("high", &mut config.style.palette.high),
            ("medium", &mut config.style.palette.medium),
            ("low", &mut config.style.palette.low),
            ("unknown", &mut config.style.palette.unknown),
        ];
        for (key, slot) in entries {
            if let Some(v) = section.get(key) {
                *slot = parse_color(v).ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "style".to_string(),
                    key: key.to_string(),
                    value: v.to_string(),
                    reason: "expected 'r,g,b,a' with components 0-255".to_string(),
                })?;
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = v.to_string();
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

/// Parse a "r,g,b,a" string into an RGBA color.
fn parse_color(value: &str) -> Option<Rgba<u8>> {
    let mut components = [0u8; 4];
    let mut count = 0;
    for part in value.split(',') {
        if count >= 4 {
            return None;
        }
        components[count] = part.trim().parse().ok()?;
        count += 1;
    }
    if count != 4 {
        return None;
    }
    Some(Rgba(components))
}
