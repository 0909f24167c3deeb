//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing logic; defaults live in
//! [`super::defaults`] and parsing in [`super::parser`].

use crate::raster::SeverityPalette;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerSettings,
    /// Dataset source settings
    pub data: DataSettings,
    /// Tile geometry settings
    pub tile: TileSettings,
    /// Severity color settings
    pub style: StyleSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Bind address, e.g. "0.0.0.0" or "127.0.0.1"
    pub bind: String,
    /// TCP port to listen on
    pub port: u16,
}

/// Dataset source configuration.
#[derive(Debug, Clone)]
pub struct DataSettings {
    /// Source identifier, interpreted by the provider factory.
    /// For the GeoJSON file provider this is a filesystem path.
    pub source: String,
}

/// Tile geometry configuration.
#[derive(Debug, Clone)]
pub struct TileSettings {
    /// Tile edge length in pixels
    pub size: u32,
    /// Maximum zoom level accepted by the tile endpoint
    pub max_zoom: u8,
}

/// Severity color configuration.
#[derive(Debug, Clone)]
pub struct StyleSettings {
    /// RGBA color per severity class
    pub palette: SeverityPalette,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Directory for log files
    pub directory: String,
    /// Log file name
    pub file: String,
}
