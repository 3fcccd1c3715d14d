// ShowBill - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every error keeps its causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ShowBill operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ShowBillError {
    /// Show definition loading or validation failed.
    Show(ShowError),

    /// Poster download or decoding failed.
    Poster(PosterError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ShowBillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show(e) => write!(f, "Show definition error: {e}"),
            Self::Poster(e) => write!(f, "Poster error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ShowBillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Show(e) => Some(e),
            Self::Poster(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Show definition errors
// ---------------------------------------------------------------------------

/// Errors related to show definition loading and validation.
#[derive(Debug)]
pub enum ShowError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Show file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// A required field is missing or empty.
    EmptyField { field: &'static str },

    /// The definition contains no episodes.
    NoEpisodes,

    /// The definition contains no theme variants.
    NoThemes,

    /// Two episodes share the same id.
    DuplicateEpisodeId { id: u32 },

    /// Two theme variants share the same key.
    DuplicateThemeKey { key: String },

    /// default_theme names a theme that does not exist.
    UnknownDefaultTheme { key: String },

    /// The poster URL is not an http(s) URL.
    InvalidPosterUrl { url: String },

    /// A list exceeds its named bound.
    TooMany {
        what: &'static str,
        count: usize,
        max: usize,
    },

    /// I/O error reading a show file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ShowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Show file '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::EmptyField { field } => {
                write!(f, "Required field '{field}' is missing or empty")
            }
            Self::NoEpisodes => write!(f, "Show definition has no episodes"),
            Self::NoThemes => write!(f, "Show definition has no theme variants"),
            Self::DuplicateEpisodeId { id } => {
                write!(f, "Duplicate episode id {id}")
            }
            Self::DuplicateThemeKey { key } => {
                write!(f, "Duplicate theme key '{key}'")
            }
            Self::UnknownDefaultTheme { key } => {
                write!(f, "default_theme = '{key}' does not name a configured theme")
            }
            Self::InvalidPosterUrl { url } => {
                write!(f, "Poster URL '{url}' is not an http(s) URL")
            }
            Self::TooMany { what, count, max } => {
                write!(f, "Too many {what} ({count}), maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading show file '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ShowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ShowError> for ShowBillError {
    fn from(e: ShowError) -> Self {
        Self::Show(e)
    }
}

// ---------------------------------------------------------------------------
// Poster errors
// ---------------------------------------------------------------------------

/// Errors related to poster download and decoding.
#[derive(Debug)]
pub enum PosterError {
    /// The HTTP request failed (connection, TLS, timeout).
    Request {
        url: String,
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    HttpStatus { url: String, status: u16 },

    /// The response body exceeds the maximum accepted size.
    TooLarge {
        url: String,
        size: usize,
        max: usize,
    },

    /// The payload could not be decoded as a raster image.
    Decode {
        url: String,
        source: image::ImageError,
    },

    /// Reading or writing the poster cache failed.
    Cache { path: PathBuf, source: io::Error },
}

impl fmt::Display for PosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { url, source } => {
                write!(f, "Request to '{url}' failed: {source}")
            }
            Self::HttpStatus { url, status } => {
                write!(f, "'{url}' answered HTTP {status}")
            }
            Self::TooLarge { url, size, max } => write!(
                f,
                "Poster at '{url}' is {size} bytes, exceeds maximum of {max} bytes"
            ),
            Self::Decode { url, source } => {
                write!(f, "Cannot decode poster from '{url}': {source}")
            }
            Self::Cache { path, source } => {
                write!(f, "Poster cache error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Cache { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PosterError> for ShowBillError {
    fn from(e: PosterError) -> Self {
        Self::Poster(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ShowBillError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for ShowBill results.
pub type Result<T> = std::result::Result<T, ShowBillError>;
