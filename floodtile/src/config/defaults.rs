//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants, validation helpers, and the
//! `Config::default()` implementation.

use super::settings::*;
use crate::coord::MAX_ZOOM;
use crate::raster::SeverityPalette;

// =============================================================================
// Server defaults
// =============================================================================

/// Default bind address. Binds all interfaces so tiles are reachable from
/// browsers on other hosts.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Default TCP port for the tile server.
pub const DEFAULT_PORT: u16 = 3002;

// =============================================================================
// Data defaults
// =============================================================================

/// Default dataset path, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "data/flood_zones.geojson";

// =============================================================================
// Tile defaults
// =============================================================================

/// Default tile edge length in pixels. 256 is the standard slippy-map size.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Minimum accepted tile size.
pub const MIN_TILE_SIZE: u32 = 64;

/// Maximum accepted tile size.
pub const MAX_TILE_SIZE: u32 = 1024;

/// Default maximum zoom level served.
pub const DEFAULT_MAX_ZOOM: u8 = MAX_ZOOM;

/// True when `size` is within the accepted tile size range.
pub fn valid_tile_size(size: u32) -> bool {
    (MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&size)
}

// =============================================================================
// Logging defaults
// =============================================================================

/// Default log directory, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "floodtile.log";

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            data: DataSettings::default(),
            tile: TileSettings::default(),
            style: StyleSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_TILE_SIZE,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            palette: SeverityPalette::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: DEFAULT_LOG_DIR.to_string(),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 3002);
        assert_eq!(config.data.source, "data/flood_zones.geojson");
        assert_eq!(config.tile.size, 256);
        assert_eq!(config.tile.max_zoom, MAX_ZOOM);
        assert_eq!(config.logging.directory, "logs");
        assert_eq!(config.logging.file, "floodtile.log");
    }

    #[test]
    fn test_valid_tile_size_range() {
        assert!(valid_tile_size(64));
        assert!(valid_tile_size(256));
        assert!(valid_tile_size(512));
        assert!(valid_tile_size(1024));
        assert!(!valid_tile_size(32));
        assert!(!valid_tile_size(2048));
        assert!(!valid_tile_size(0));
    }
}
