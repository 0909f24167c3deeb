//! Configuration for the tile server.
//!
//! Configuration is read from an INI file and overlaid on compiled-in
//! defaults, so an absent or partial file always yields a runnable
//! configuration. Command-line flags are applied on top by the binary.
//!
//! # Example
//!
//! ```
//! use floodtile::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load_from(Path::new("floodtile.ini")).unwrap();
//! assert!(!config.server.bind.is_empty());
//! ```

mod defaults;
mod file;
mod parser;
mod settings;

pub use defaults::{
    valid_tile_size, DEFAULT_BIND, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE, DEFAULT_MAX_ZOOM,
    DEFAULT_PORT, DEFAULT_SOURCE, DEFAULT_TILE_SIZE, MAX_TILE_SIZE, MIN_TILE_SIZE,
};
pub use file::{config_file_path, ConfigFileError};
pub use settings::{
    Config, DataSettings, LoggingSettings, ServerSettings, StyleSettings, TileSettings,
};
