// ShowBill - core/showcase.rs
//
// Show definition parsing and validation: raw TOML structures in,
// validated `Showcase` out. The built-in show is embedded in the
// binary at compile time; user files go through the same pipeline.

use crate::core::model::{Episode, ShowMetadata, Showcase, ThemeVariant};
use crate::util::constants;
use crate::util::error::ShowError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Raw TOML structures
// =============================================================================

/// Raw deserialisable shape of a show definition file.
///
/// All fields are optional or defaulted here; validation decides which
/// are required. Unknown keys are ignored for forward compatibility.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShowDefinition {
    /// `[show]` section.
    pub show: ShowSection,
    /// `[poster]` section.
    pub poster: PosterSection,
    /// `[[episodes]]` array of tables.
    pub episodes: Vec<EpisodeDef>,
    /// `[[themes]]` array of tables.
    pub themes: Vec<ThemeDef>,
}

/// `[show]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShowSection {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub maturity: Option<String>,
    pub year: Option<String>,
    pub duration: Option<String>,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    pub creators: Vec<String>,
    pub badges: Vec<String>,
    /// Key of the theme selected on first render. Defaults to the
    /// first defined theme when omitted.
    pub default_theme: Option<String>,
}

/// `[poster]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PosterSection {
    pub url: Option<String>,
}

/// One `[[episodes]]` entry.
#[derive(Debug, Deserialize)]
pub struct EpisodeDef {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub length: String,
}

/// One `[[themes]]` entry.
#[derive(Debug, Deserialize)]
pub struct ThemeDef {
    pub key: String,
    pub logline: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// =============================================================================
// Parsing and validation
// =============================================================================

/// Parse show definition TOML. `path` is used for error context only.
pub fn parse_show_toml(content: &str, path: &Path) -> Result<ShowDefinition, ShowError> {
    toml::from_str(content).map_err(|e| ShowError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Validate a raw definition and build the runtime `Showcase`.
///
/// Enforces the model invariants (unique episode ids, at least one
/// theme, unique non-empty theme keys, resolvable default theme) and
/// the named resource bounds from `util::constants`.
pub fn validate(def: ShowDefinition) -> Result<Showcase, ShowError> {
    let title = require_text(def.show.title, "show.title")?;

    if def.episodes.is_empty() {
        return Err(ShowError::NoEpisodes);
    }
    if def.episodes.len() > constants::MAX_EPISODES {
        return Err(ShowError::TooMany {
            what: "episodes",
            count: def.episodes.len(),
            max: constants::MAX_EPISODES,
        });
    }
    if def.themes.is_empty() {
        return Err(ShowError::NoThemes);
    }
    if def.themes.len() > constants::MAX_THEMES {
        return Err(ShowError::TooMany {
            what: "themes",
            count: def.themes.len(),
            max: constants::MAX_THEMES,
        });
    }
    if def.show.badges.len() > constants::MAX_BADGES {
        return Err(ShowError::TooMany {
            what: "badges",
            count: def.show.badges.len(),
            max: constants::MAX_BADGES,
        });
    }

    // Episode ids must be unique. O(n^2) is fine at MAX_EPISODES scale.
    for (i, ep) in def.episodes.iter().enumerate() {
        if def.episodes[..i].iter().any(|other| other.id == ep.id) {
            return Err(ShowError::DuplicateEpisodeId { id: ep.id });
        }
    }

    let mut themes = Vec::with_capacity(def.themes.len());
    for theme in def.themes {
        if theme.key.trim().is_empty() {
            return Err(ShowError::EmptyField { field: "themes.key" });
        }
        if themes.iter().any(|t: &ThemeVariant| t.key == theme.key) {
            return Err(ShowError::DuplicateThemeKey { key: theme.key });
        }
        if theme.tags.len() > constants::MAX_THEME_TAGS {
            return Err(ShowError::TooMany {
                what: "theme tags",
                count: theme.tags.len(),
                max: constants::MAX_THEME_TAGS,
            });
        }
        themes.push(ThemeVariant {
            key: theme.key,
            logline: theme.logline,
            tags: theme.tags,
        });
    }

    // Default theme: explicit key must resolve; omitted falls back to
    // the first definition (themes is non-empty here).
    let default_theme = match def.show.default_theme {
        Some(key) => {
            if !themes.iter().any(|t| t.key == key) {
                return Err(ShowError::UnknownDefaultTheme { key });
            }
            key
        }
        None => themes[0].key.clone(),
    };

    let poster_url = match def.poster.url {
        Some(url) if !url.trim().is_empty() => {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ShowError::InvalidPosterUrl { url });
            }
            Some(url)
        }
        _ => None,
    };

    let episodes = def
        .episodes
        .into_iter()
        .map(|ep| Episode {
            id: ep.id,
            title: ep.title,
            description: ep.description,
            length: ep.length,
        })
        .collect();

    Ok(Showcase {
        show: ShowMetadata {
            title,
            tagline: def.show.tagline.unwrap_or_default(),
            maturity: def.show.maturity.unwrap_or_default(),
            year: def.show.year.unwrap_or_default(),
            duration: def.show.duration.unwrap_or_default(),
            genres: def.show.genres,
            cast: def.show.cast,
            creators: def.show.creators,
            badges: def.show.badges,
            episodes,
        },
        poster_url,
        themes,
        default_theme,
    })
}

fn require_text(value: Option<String>, field: &'static str) -> Result<String, ShowError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ShowError::EmptyField { field }),
    }
}

// =============================================================================
// Built-in show (embedded at compile time)
// =============================================================================

/// Embedded TOML content for the built-in show.
pub fn builtin_show_source() -> (&'static str, &'static str) {
    (
        "jarvis_danao.toml",
        include_str!("../../shows/jarvis_danao.toml"),
    )
}

/// Parse and validate the built-in show.
///
/// The embedded definition is covered by tests, so a failure here is a
/// packaging bug; it is reported to the caller rather than panicking so
/// the binary can still refuse to start with a real error message.
pub fn load_builtin_show() -> Result<Showcase, ShowError> {
    let (filename, content) = builtin_show_source();
    let path = PathBuf::from(format!("<builtin>/{filename}"));
    let showcase = parse_show_toml(content, &path).and_then(validate)?;
    tracing::debug!(title = %showcase.show.title, "Loaded built-in show");
    Ok(showcase)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SHOW_TOML: &str = r#"
[show]
title = "Test Show"
tagline = "A test tagline"
maturity = "13+"
year = "2025"
duration = "1h"
genres = ["Romance", "Drama"]
cast = ["A", "B"]
creators = ["C"]
badges = ["New"]
default_theme = "Alpha"

[poster]
url = "https://example.com/poster.png"

[[episodes]]
id = 1
title = "Ep. 01"
description = "First."
length = "40m"

[[episodes]]
id = 2
title = "Ep. 02"
description = "Second."
length = "42m"

[[themes]]
key = "Alpha"
logline = "Alpha logline."
tags = ["One", "Two"]

[[themes]]
key = "Beta"
logline = "Beta logline."
tags = ["Three"]
"#;

    fn parse(content: &str) -> Result<Showcase, ShowError> {
        parse_show_toml(content, &PathBuf::from("test.toml")).and_then(validate)
    }

    #[test]
    fn test_valid_show_parses_and_validates() {
        let showcase = parse(VALID_SHOW_TOML).unwrap();
        assert_eq!(showcase.show.title, "Test Show");
        assert_eq!(showcase.show.episodes.len(), 2);
        assert_eq!(showcase.default_theme, "Alpha");
        assert_eq!(
            showcase.theme_keys().collect::<Vec<_>>(),
            vec!["Alpha", "Beta"]
        );
        assert_eq!(
            showcase.poster_url.as_deref(),
            Some("https://example.com/poster.png")
        );
    }

    #[test]
    fn test_theme_lookup() {
        let showcase = parse(VALID_SHOW_TOML).unwrap();
        let beta = showcase.theme("Beta").unwrap();
        assert_eq!(beta.logline, "Beta logline.");
        assert_eq!(beta.tags, vec!["Three"]);
        assert!(showcase.theme("Gamma").is_none());
    }

    #[test]
    fn test_missing_title_rejected() {
        let toml = VALID_SHOW_TOML.replace("title = \"Test Show\"\n", "");
        let err = parse(&toml).unwrap_err();
        assert!(
            matches!(err, ShowError::EmptyField { field: "show.title" }),
            "expected EmptyField(show.title), got {err:?}"
        );
    }

    #[test]
    fn test_duplicate_episode_id_rejected() {
        let toml = VALID_SHOW_TOML.replace("id = 2", "id = 1");
        let err = parse(&toml).unwrap_err();
        assert!(
            matches!(err, ShowError::DuplicateEpisodeId { id: 1 }),
            "expected DuplicateEpisodeId, got {err:?}"
        );
    }

    #[test]
    fn test_duplicate_theme_key_rejected() {
        let toml = VALID_SHOW_TOML.replace("key = \"Beta\"", "key = \"Alpha\"");
        let err = parse(&toml).unwrap_err();
        assert!(
            matches!(err, ShowError::DuplicateThemeKey { .. }),
            "expected DuplicateThemeKey, got {err:?}"
        );
    }

    #[test]
    fn test_unknown_default_theme_rejected() {
        let toml = VALID_SHOW_TOML.replace(
            "default_theme = \"Alpha\"",
            "default_theme = \"Missing\"",
        );
        let err = parse(&toml).unwrap_err();
        assert!(
            matches!(err, ShowError::UnknownDefaultTheme { .. }),
            "expected UnknownDefaultTheme, got {err:?}"
        );
    }

    #[test]
    fn test_omitted_default_theme_falls_back_to_first() {
        let toml = VALID_SHOW_TOML.replace("default_theme = \"Alpha\"\n", "");
        let showcase = parse(&toml).unwrap();
        assert_eq!(showcase.default_theme, "Alpha");
    }

    #[test]
    fn test_no_themes_rejected() {
        let toml: String = VALID_SHOW_TOML
            .split("[[themes]]")
            .next()
            .unwrap()
            .to_string();
        let err = parse(&toml).unwrap_err();
        assert!(matches!(err, ShowError::NoThemes), "got {err:?}");
    }

    #[test]
    fn test_non_http_poster_url_rejected() {
        let toml = VALID_SHOW_TOML.replace(
            "url = \"https://example.com/poster.png\"",
            "url = \"ftp://example.com/poster.png\"",
        );
        let err = parse(&toml).unwrap_err();
        assert!(matches!(err, ShowError::InvalidPosterUrl { .. }), "got {err:?}");
    }

    #[test]
    fn test_builtin_show_loads() {
        let showcase = load_builtin_show().expect("built-in show must validate");
        assert_eq!(showcase.show.title, "Jarvis Danao");
        assert_eq!(showcase.show.episodes.len(), 3);
        assert_eq!(showcase.default_theme, "Seductive");
        assert!(showcase.theme("Yearner").is_some());
        assert!(showcase.poster_url.is_some());
    }
}
