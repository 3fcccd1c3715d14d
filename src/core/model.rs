// ShowBill - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (core depends on std + serde only).
//
// These types are the shared vocabulary across all layers. Everything
// here is immutable configuration: constructed once by the showcase
// loader and read for the lifetime of the process.

use serde::Serialize;

// =============================================================================
// Episode
// =============================================================================

/// One entry in the episode grid.
///
/// Ids are unique within a show and stable across re-renders; the grid
/// always shows episodes in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    /// Unique episode id within the show.
    pub id: u32,

    /// Display title (e.g. "Ep. 01 — Green Polo").
    pub title: String,

    /// Short teaser description shown on the card.
    pub description: String,

    /// Display length (e.g. "47m"). Free text, never parsed.
    pub length: String,
}

// =============================================================================
// Theme variant
// =============================================================================

/// A named variant of logline + descriptive tags the viewer can switch
/// between. Unrelated to UI colour theming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeVariant {
    /// Selector key (e.g. "Seductive", "Yearner"). Unique within a show.
    pub key: String,

    /// One-line pitch shown beside the selector.
    pub logline: String,

    /// Descriptive tag chips. Fully replace the previous theme's tags
    /// on switch; the fixed genres are displayed in front of them.
    pub tags: Vec<String>,
}

// =============================================================================
// Show metadata
// =============================================================================

/// Static presentation data for the show itself.
#[derive(Debug, Clone, Serialize)]
pub struct ShowMetadata {
    /// Show title, the hero headline.
    pub title: String,

    /// Italicised tagline under the title.
    pub tagline: String,

    /// Maturity rating display text (e.g. "13+").
    pub maturity: String,

    /// Release year display text.
    pub year: String,

    /// Duration display text (e.g. "1h 47m").
    pub duration: String,

    /// Fixed genre tags, always shown before the active theme's tags.
    pub genres: Vec<String>,

    /// Cast credit line, joined with ", " for display.
    pub cast: Vec<String>,

    /// Creator credit line, joined with ", " for display.
    pub creators: Vec<String>,

    /// Badge chips shown above the title (e.g. "Top 10 in PH").
    pub badges: Vec<String>,

    /// Episode cards, in display order.
    pub episodes: Vec<Episode>,
}

// =============================================================================
// Showcase (validated root)
// =============================================================================

/// A fully validated show definition, ready for rendering.
///
/// Built from `ShowDefinition` (the raw TOML structure) via validation
/// in `core::showcase`, which guarantees:
///   - episode ids are unique,
///   - at least one theme exists, keys unique and non-empty,
///   - `default_theme` names an existing theme.
#[derive(Debug, Clone, Serialize)]
pub struct Showcase {
    /// Show presentation data.
    pub show: ShowMetadata,

    /// Externally hosted poster image URL. Backs the hero backdrop,
    /// the poster card, and every episode thumbnail. `None` renders
    /// placeholder fills throughout.
    pub poster_url: Option<String>,

    /// Theme variants in definition order (selector order).
    pub themes: Vec<ThemeVariant>,

    /// Key of the theme selected on first render.
    pub default_theme: String,
}

impl Showcase {
    /// Look up a theme variant by key.
    pub fn theme(&self, key: &str) -> Option<&ThemeVariant> {
        self.themes.iter().find(|t| t.key == key)
    }

    /// Theme keys in selector order.
    pub fn theme_keys(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.key.as_str())
    }
}
