// ShowBill - tests/e2e_showcase.rs
//
// End-to-end tests for the show loading pipeline and the page state it
// drives: built-in show, user override files, fallback behaviour, and
// the theme/mute/tag transitions.

use showbill::app::showfile;
use showbill::app::state::AppState;
use showbill::core::showcase;
use showbill::util::constants;
use showbill::util::error::ShowError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn builtin_state() -> AppState {
    AppState::new(
        showcase::load_builtin_show().expect("built-in show must load"),
        Vec::new(),
    )
}

fn write_show(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

const CUSTOM_SHOW: &str = r#"
[show]
title = "Custom Show"
tagline = "Override tagline"
genres = ["Thriller"]
default_theme = "Noir"

[[episodes]]
id = 10
title = "Pilot"
description = "It begins."
length = "50m"

[[themes]]
key = "Noir"
logline = "Shadows everywhere."
tags = ["Moody"]
"#;

// -----------------------------------------------------------------------------
// Built-in show page defaults
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_page_defaults() {
    let state = builtin_state();

    assert!(state.muted, "page starts muted");
    assert_eq!(state.audio_label(), "Muted");
    assert_eq!(state.selected_theme, "Seductive");
    assert_eq!(
        state.active_theme().logline,
        "Say \u{2018}action\u{2019}\u{2014}the rest follows."
    );

    // Episode cards render in definition order.
    let titles: Vec<&str> = state
        .showcase
        .show
        .episodes
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles.len(), 3);
    assert!(titles[0].starts_with("Ep. 01"));
    assert!(titles[1].starts_with("Ep. 02"));
    assert!(titles[2].starts_with("Ep. 03"));
}

#[test]
fn test_theme_switch_swaps_logline_and_tags() {
    let mut state = builtin_state();

    state.select_theme("Yearner");
    assert_eq!(
        state.active_theme().logline,
        "Someday, same bouquet, right girl."
    );
    let tags = state.display_tags();
    assert!(tags.ends_with(&["Slow Burn", "Wholesome", "Hopeful"]));
    // Genres stay in front regardless of the selected theme.
    assert!(tags.starts_with(&["Romance", "Drama", "Mockumentary"]));

    // And back again: the original projection is restored exactly.
    state.select_theme("Seductive");
    assert!(state
        .display_tags()
        .ends_with(&["Rated Kilig", "Cinematic", "Crisp Bokeh"]));
}

#[test]
fn test_mute_toggle_round_trip() {
    let mut state = builtin_state();
    state.toggle_mute();
    assert_eq!(state.audio_label(), "Sound On");
    state.toggle_mute();
    assert_eq!(state.audio_label(), "Muted");
}

// -----------------------------------------------------------------------------
// Show file loading
// -----------------------------------------------------------------------------

#[test]
fn test_load_custom_show_file() {
    let dir = TempDir::new().unwrap();
    let path = write_show(dir.path(), "custom.toml", CUSTOM_SHOW);

    let showcase = showfile::load_show_file(&path).unwrap();
    assert_eq!(showcase.show.title, "Custom Show");
    assert_eq!(showcase.default_theme, "Noir");
    assert_eq!(showcase.show.episodes[0].id, 10);
    assert!(showcase.poster_url.is_none());
}

#[test]
fn test_missing_show_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = showfile::load_show_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ShowError::Io { .. }), "got {err:?}");
}

#[test]
fn test_oversized_show_file_rejected_before_parse() {
    let dir = TempDir::new().unwrap();
    let big = "# filler\n".repeat((constants::MAX_SHOW_FILE_SIZE as usize / 9) + 2);
    let path = write_show(dir.path(), "big.toml", &big);

    let err = showfile::load_show_file(&path).unwrap_err();
    assert!(matches!(err, ShowError::FileTooLarge { .. }), "got {err:?}");
}

#[test]
fn test_invalid_cli_file_falls_back_to_builtin() {
    let dir = TempDir::new().unwrap();
    let bad = write_show(dir.path(), "bad.toml", "not valid toml [[[");

    let (result, errors) = showfile::load_showcase(Some(&bad), dir.path());
    let showcase = result.unwrap();
    assert_eq!(showcase.show.title, "Jarvis Danao");
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ShowError::TomlParse { .. }));
}

#[test]
fn test_config_dir_show_file_overrides_builtin() {
    let dir = TempDir::new().unwrap();
    write_show(dir.path(), constants::SHOW_FILE_NAME, CUSTOM_SHOW);

    let (result, errors) = showfile::load_showcase(None, dir.path());
    assert_eq!(result.unwrap().show.title, "Custom Show");
    assert!(errors.is_empty());
}

#[test]
fn test_cli_file_wins_over_config_dir() {
    let dir = TempDir::new().unwrap();
    write_show(dir.path(), constants::SHOW_FILE_NAME, CUSTOM_SHOW);
    let cli_show = CUSTOM_SHOW.replace("Custom Show", "CLI Show");
    let cli_path = write_show(dir.path(), "cli.toml", &cli_show);

    let (result, _) = showfile::load_showcase(Some(&cli_path), dir.path());
    assert_eq!(result.unwrap().show.title, "CLI Show");
}

// -----------------------------------------------------------------------------
// Replacing the presented show
// -----------------------------------------------------------------------------

#[test]
fn test_replace_showcase_resets_page_state() {
    let dir = TempDir::new().unwrap();
    let path = write_show(dir.path(), "custom.toml", CUSTOM_SHOW);

    let mut state = builtin_state();
    state.toggle_in_list();
    state.select_theme("Yearner");

    state.replace_showcase(showfile::load_show_file(&path).unwrap());
    assert_eq!(state.selected_theme, "Noir");
    assert!(!state.in_list);
    assert_eq!(state.display_tags(), vec!["Thriller", "Moody"]);
}

// -----------------------------------------------------------------------------
// JSON export
// -----------------------------------------------------------------------------

#[test]
fn test_showcase_serialises_to_json() {
    let showcase = showcase::load_builtin_show().unwrap();
    let json = serde_json::to_string_pretty(&showcase).unwrap();
    assert!(json.contains("\"Jarvis Danao\""));
    assert!(json.contains("\"Seductive\""));
    assert!(json.contains("\"episodes\""));
}
