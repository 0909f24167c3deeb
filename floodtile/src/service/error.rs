//! Service error types.

use crate::provider::ProviderError;
use crate::tile::PipelineError;
use std::fmt;
use std::io;

/// Errors that can occur while assembling or running the service.
#[derive(Debug)]
pub enum ServiceError {
    /// Invalid configuration
    ConfigError(String),
    /// Failed to create or use the feature provider
    ProviderError(ProviderError),
    /// Failed to assemble the render pipeline
    PipelineError(PipelineError),
    /// I/O error (socket bind, file operations)
    IoError(io::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::ProviderError(e) => write!(f, "Provider error: {}", e),
            Self::PipelineError(e) => write!(f, "Pipeline error: {}", e),
            Self::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ProviderError(e) => Some(e),
            Self::PipelineError(e) => Some(e),
            Self::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProviderError> for ServiceError {
    fn from(e: ProviderError) -> Self {
        Self::ProviderError(e)
    }
}

impl From<PipelineError> for ServiceError {
    fn from(e: PipelineError) -> Self {
        Self::PipelineError(e)
    }
}

impl From<io::Error> for ServiceError {
    fn from(e: io::Error) -> Self {
        Self::IoError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config_error() {
        let err = ServiceError::ConfigError("bad bind address".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad bind address"));
    }

    #[test]
    fn test_from_provider_error() {
        let provider_err = ProviderError::Unsupported("zones.csv".to_string());
        let service_err: ServiceError = provider_err.into();
        assert!(matches!(service_err, ServiceError::ProviderError(_)));
        assert!(service_err.to_string().contains("Provider error"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::AddrInUse, "address in use");
        let service_err: ServiceError = io_err.into();
        assert!(matches!(service_err, ServiceError::IoError(_)));
        assert!(service_err.to_string().contains("address in use"));
    }

    #[test]
    fn test_error_trait_with_source() {
        let err: ServiceError = io::Error::new(io::ErrorKind::PermissionDenied, "x").into();
        let dyn_err: &dyn std::error::Error = &err;
        assert!(dyn_err.source().is_some());
    }
}
