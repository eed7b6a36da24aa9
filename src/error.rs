//! Error types for drop receiver configuration and setup.
//!
//! Everything that can go wrong while wiring a receiver is a configuration or
//! setup fault and is reported through [`Error`] when the receiver is created.
//! Faults on the sample path (a batch whose length is not a multiple of the
//! decimation factor) are programming errors and abort via `assert!` instead.

use thiserror::Error;

/// Result type for drop receiver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported while creating or configuring a digital drop receiver.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration variable is absent from the receiver section.
    #[error("configuration variable {section}/{key} not set")]
    MissingConfig {
        /// Receiver section the variable belongs to.
        section: String,
        /// Name of the missing variable.
        key: &'static str,
    },

    /// The tuner runs at a rate the channelizer has no cascade menu for.
    #[error("unsupported tuner sampling rate {0}; legal values are 960000 and 2400000")]
    UnsupportedSampleRate(u32),

    /// The `MODULATION` value is not one of `FM`, `WBFM`, `AM`.
    #[error("unknown modulation {0:?}")]
    UnknownModulation(String),

    /// A receiver with this name already exists in the registry.
    #[error("the name of a digital drop receiver must be unique; there already is a receiver named {0:?}")]
    DuplicateName(String),

    /// The configuration file failed to parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error (configuration file, I/Q input).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_display() {
        let err = Error::MissingConfig {
            section: "RX1".to_string(),
            key: "FQ",
        };
        assert_eq!(err.to_string(), "configuration variable RX1/FQ not set");
    }

    #[test]
    fn test_unsupported_rate_display() {
        let err = Error::UnsupportedSampleRate(1_024_000);
        assert!(err.to_string().contains("1024000"));
        assert!(err.to_string().contains("960000"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
