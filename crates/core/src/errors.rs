//! Error types for the permcmp core library.
//!
//! Each subsystem has its own error type derived with `thiserror`, and a
//! top-level [`CoreError`] enum unifies them for callers that want a single
//! error type.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Unified error type for the entire core library.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors from loading a permission export file.
///
/// Parsing itself never fails -- unrecognized lines are ignored -- so the
/// only failures here are file-level.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export file does not exist.
    #[error("export file not found: {0}")]
    FileNotFound(String),

    /// The export file exists but could not be read (permissions, encoding).
    #[error("export I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from configuration loading.
///
/// Bad values inside the file (an unknown color mode, a wrong value type)
/// come back as [`ConfigError::ParseError`] with serde's message attached.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parse error.
    #[error("configuration parse error: {0}")]
    ParseError(String),

    /// Generic I/O error reading the config file.
    #[error("configuration I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = ExportError::FileNotFound("/tmp/export.txt".into());
        assert_eq!(err.to_string(), "export file not found: /tmp/export.txt");

        let err = ConfigError::ParseError("unknown variant `sometimes`".into());
        assert!(err.to_string().contains("configuration parse error"));
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn test_core_error_from_subsystem() {
        let export_err = ExportError::FileNotFound("x.txt".into());
        let core_err: CoreError = export_err.into();
        assert!(matches!(core_err, CoreError::Export(_)));

        let config_err = ConfigError::ParseError("bad toml".into());
        let core_err: CoreError = config_err.into();
        assert!(matches!(core_err, CoreError::Config(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::IoError(_)));
        assert!(err.to_string().contains("denied"));
    }
}
