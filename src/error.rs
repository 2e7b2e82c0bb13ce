// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    I18n(String),
    /// A language code outside the supported set reached a lookup.
    /// Startup validation makes this unreachable in normal operation.
    UnsupportedLanguage(String),
    /// The windowing runtime failed to start or exited with an error.
    Gui(String),
}

/// Reasons a changelog document could not be loaded.
/// Every variant collapses to `LoadState::Failed` with its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request never produced a response (DNS, TLS, timeout, refused).
    Network(String),

    /// The server answered with a non-success status.
    Status(u16),

    /// The payload was not a JSON array of changelog entries.
    Parse(String),

    /// Reading a changelog from a local directory failed.
    Io(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Status(code) => write!(f, "Failed to fetch changelogs (HTTP {})", code),
            LoadError::Parse(msg) => write!(f, "Malformed changelog: {}", msg),
            LoadError::Io(msg) => write!(f, "Failed to read changelogs: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::I18n(e) => write!(f, "I18n Error: {}", e),
            Error::UnsupportedLanguage(code) => write!(f, "Unsupported language: {}", code),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn status_error_mentions_code() {
        let err = LoadError::Status(404);
        assert!(format!("{}", err).contains("404"));
    }

    #[test]
    fn parse_error_keeps_detail() {
        let err = LoadError::Parse("expected array".into());
        assert_eq!(format!("{}", err), "Malformed changelog: expected array");
    }

    #[test]
    fn unsupported_language_names_code() {
        let err = Error::UnsupportedLanguage("xx".into());
        assert_eq!(format!("{}", err), "Unsupported language: xx");
    }
}
