//! Error types
//!
//! Startup failures (config, font, settings, window) end the program with a
//! nonzero exit code. Config line errors are only reported and skipped.

use std::path::PathBuf;

/// Errors reading the scene config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directive ended before a required field
    #[error("line {line}: `{directive}` is missing `{field}`")]
    MissingField {
        line: usize,
        directive: &'static str,
        field: &'static str,
    },

    /// A field did not parse as the expected number
    #[error("line {line}: `{field}` is not a valid {expected}: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// A shape size was zero or negative
    #[error("line {line}: `{field}` must be positive, got {value}")]
    InvalidSize {
        line: usize,
        field: &'static str,
        value: f32,
    },
}

impl ConfigError {
    /// Whether the rest of the file can still be used
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ConfigError::Open { .. })
    }
}

/// Errors loading the label font
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("could not load font file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse font file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Errors reading presentation settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read settings {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors setting up the GPU renderer
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    UnsupportedSurface,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_errors_are_recoverable() {
        let err = ConfigError::MissingField {
            line: 3,
            directive: "circle",
            field: "radius",
        };
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "line 3: `circle` is missing `radius`");
    }

    #[test]
    fn test_open_error_is_fatal() {
        let err = ConfigError::Open {
            path: PathBuf::from("config.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().starts_with("could not open config.txt"));
    }
}
