//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the server binary, providing consistent
//! formatting and appropriate exit codes.

use floodtile::provider::ProviderError;
use floodtile::service::ServiceError;
use std::fmt;
use std::io;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to create service
    ServiceCreation(ServiceError),
    /// Server error while serving tiles
    Serve(ServiceError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::ServiceCreation(ServiceError::ProviderError(
                ProviderError::Unsupported(_),
            )) => {
                eprintln!();
                eprintln!("Supported dataset formats:");
                eprintln!("  - GeoJSON files (.geojson or .json extension)");
            }
            CliError::Serve(ServiceError::IoError(e)) if e.kind() == io::ErrorKind::AddrInUse => {
                eprintln!();
                eprintln!("The configured address is already in use.");
                eprintln!("Try a different port with --port or in floodtile.ini");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ServiceCreation(e) => write!(f, "Failed to create service: {}", e),
            CliError::Serve(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ServiceCreation(e) => Some(e),
            CliError::Serve(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        CliError::Serve(e)
    }
}
