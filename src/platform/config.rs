// ShowBill - platform/config.rs
//
// Platform-specific path resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ShowBill data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (config.toml, show.toml live here).
    pub config_dir: PathBuf,

    /// Data directory (poster cache lives here).
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[poster]` section.
    pub poster: PosterSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[poster]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PosterSection {
    /// Whether to fetch the poster at all (offline mode when false).
    pub enabled: Option<bool>,
    /// HTTP timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Body font size in points.
    pub font_size: f32,

    /// Whether the poster fetch is enabled.
    pub poster_enabled: bool,

    /// Poster HTTP timeout in seconds.
    pub poster_timeout_secs: u64,

    /// Logging level string (read before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font_size: constants::DEFAULT_FONT_SIZE,
            poster_enabled: true,
            poster_timeout_secs: constants::DEFAULT_POSTER_TIMEOUT_SECS,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. A missing file yields defaults with no warnings (first
/// run); an unparseable file yields defaults with a warning -- the
/// application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    // Validate each field against named constants, accumulating all errors.
    let mut config = AppConfig::default();

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    // -- Poster: enabled --
    if let Some(enabled) = raw.poster.enabled {
        config.poster_enabled = enabled;
    }

    // -- Poster: timeout_seconds --
    if let Some(secs) = raw.poster.timeout_seconds {
        if (constants::MIN_POSTER_TIMEOUT_SECS..=constants::MAX_POSTER_TIMEOUT_SECS).contains(&secs)
        {
            config.poster_timeout_secs = secs;
        } else {
            warnings.push(format!(
                "[poster] timeout_seconds = {secs} is out of range ({}-{}). Using default ({}).",
                constants::MIN_POSTER_TIMEOUT_SECS,
                constants::MAX_POSTER_TIMEOUT_SECS,
                constants::DEFAULT_POSTER_TIMEOUT_SECS,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert!(config.poster_enabled);
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[ui]\nfont_size = 16.0\n\n[poster]\nenabled = false\ntimeout_seconds = 30\n",
        )
        .unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.font_size, 16.0);
        assert!(!config.poster_enabled);
        assert_eq!(config.poster_timeout_secs, 30);
    }

    #[test]
    fn test_out_of_range_values_warn_and_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[ui]\nfont_size = 99.0\n\n[poster]\ntimeout_seconds = 0\n",
        )
        .unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 2, "warnings: {warnings:?}");
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert_eq!(
            config.poster_timeout_secs,
            constants::DEFAULT_POSTER_TIMEOUT_SECS
        );
    }

    #[test]
    fn test_unparseable_config_warns_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "not [ toml").unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
    }
}
