// ShowBill - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ShowBill";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ShowBill";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Show definition limits
// =============================================================================

/// Maximum size of a show definition TOML file in bytes.
pub const MAX_SHOW_FILE_SIZE: u64 = 256 * 1024; // 256 KB

/// Maximum number of episodes in a show definition.
pub const MAX_EPISODES: usize = 24;

/// Maximum number of theme variants in a show definition.
pub const MAX_THEMES: usize = 12;

/// Maximum number of tags attached to a single theme variant.
pub const MAX_THEME_TAGS: usize = 16;

/// Maximum number of badge chips shown above the title.
pub const MAX_BADGES: usize = 8;

// =============================================================================
// Poster fetch limits
// =============================================================================

/// HTTP timeout for the poster download, in seconds.
pub const DEFAULT_POSTER_TIMEOUT_SECS: u64 = 15;

/// Minimum user-configurable poster timeout (seconds).
pub const MIN_POSTER_TIMEOUT_SECS: u64 = 1;

/// Maximum user-configurable poster timeout (seconds).
pub const MAX_POSTER_TIMEOUT_SECS: u64 = 120;

/// Maximum accepted poster payload in bytes. Larger responses are
/// rejected before decoding to bound memory use.
pub const MAX_POSTER_BYTES: usize = 20 * 1024 * 1024; // 20 MiB

/// Repaint cadence while a poster fetch is in flight (ms).
pub const POSTER_POLL_INTERVAL_MS: u64 = 150;

/// Cached poster image file name (platform data directory).
pub const POSTER_CACHE_FILE: &str = "poster.img";

/// Sidecar file recording the URL the cached poster came from.
/// A URL change invalidates the cache.
pub const POSTER_CACHE_URL_FILE: &str = "poster.url";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Initial window size.
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];

/// Minimum window size.
pub const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 560.0];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// User show-definition override file name (platform config directory).
pub const SHOW_FILE_NAME: &str = "show.toml";
