// ShowBill - app/state.rs
//
// Application state: the loaded showcase plus the view's local state
// cells (mute flag, active theme, My List toggle, Details window).
// Owned by the eframe::App implementation.
//
// The showcase itself is immutable; every state transition here is a
// pure, infallible update of a selection cell.

use crate::core::model::{Showcase, ThemeVariant};
use std::path::PathBuf;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The validated show definition being presented.
    pub showcase: Showcase,

    /// Sound toggle. Starts muted; no audio is ever produced, only the
    /// icon/label pairing changes.
    pub muted: bool,

    /// Key of the active theme variant. Always names a theme in
    /// `showcase.themes`.
    pub selected_theme: String,

    /// "My List" toggle (add / added affordance on the hero button).
    pub in_list: bool,

    /// Whether the Show Details window is open.
    pub show_details: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings from config/show loading, shown in Details.
    pub warnings: Vec<String>,

    /// A panel or menu requested loading this show file; handled by the
    /// update loop on the next frame.
    pub pending_show_file: Option<PathBuf>,
}

impl AppState {
    /// Create initial state for a loaded showcase.
    pub fn new(showcase: Showcase, warnings: Vec<String>) -> Self {
        let selected_theme = showcase.default_theme.clone();
        Self {
            showcase,
            muted: true,
            selected_theme,
            in_list: false,
            show_details: false,
            status_message: "Ready.".to_string(),
            warnings,
            pending_show_file: None,
        }
    }

    /// Flip the mute flag. Involutive: two toggles restore the flag.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Label paired with the current mute state.
    pub fn audio_label(&self) -> &'static str {
        if self.muted {
            "Muted"
        } else {
            "Sound On"
        }
    }

    /// Flip the My List flag.
    pub fn toggle_in_list(&mut self) {
        self.in_list = !self.in_list;
    }

    /// Select a theme by key.
    ///
    /// Keys outside the configured set leave the selection unchanged;
    /// the selector only ever offers valid keys, so this path is
    /// defensive (reachable via --theme on the CLI).
    pub fn select_theme(&mut self, key: &str) {
        if self.showcase.theme(key).is_some() {
            self.selected_theme = key.to_string();
        } else {
            tracing::debug!(key, "Ignoring unknown theme key");
        }
    }

    /// The active theme variant.
    ///
    /// Validation guarantees the selected key resolves; the fallback to
    /// the first theme covers the window between replacing a showcase
    /// and resetting the selection.
    pub fn active_theme(&self) -> &ThemeVariant {
        self.showcase
            .theme(&self.selected_theme)
            .unwrap_or(&self.showcase.themes[0])
    }

    /// Tag chips for the current selection: fixed genres first, then
    /// the active theme's tags. Recomputed on read; a theme switch
    /// replaces the variant part entirely.
    pub fn display_tags(&self) -> Vec<&str> {
        self.showcase
            .show
            .genres
            .iter()
            .map(String::as_str)
            .chain(self.active_theme().tags.iter().map(String::as_str))
            .collect()
    }

    /// Replace the showcase (Open Show File). Resets the theme
    /// selection to the new default and drops the My List flag; the
    /// mute flag carries over.
    pub fn replace_showcase(&mut self, showcase: Showcase) {
        self.selected_theme = showcase.default_theme.clone();
        self.in_list = false;
        self.showcase = showcase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::showcase;

    fn state() -> AppState {
        AppState::new(showcase::load_builtin_show().unwrap(), Vec::new())
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert!(s.muted, "initial render starts muted");
        assert_eq!(s.audio_label(), "Muted");
        assert_eq!(s.selected_theme, "Seductive");
        assert_eq!(s.showcase.show.episodes.len(), 3);
        assert!(!s.in_list);
    }

    #[test]
    fn test_toggle_mute_is_involutive() {
        let mut s = state();
        let before = s.muted;
        s.toggle_mute();
        assert_ne!(s.muted, before);
        assert_eq!(s.audio_label(), "Sound On");
        s.toggle_mute();
        assert_eq!(s.muted, before);
        assert_eq!(s.audio_label(), "Muted");
    }

    #[test]
    fn test_select_theme_swaps_projection() {
        let mut s = state();
        s.select_theme("Yearner");
        assert_eq!(s.selected_theme, "Yearner");
        assert_eq!(
            s.active_theme().logline,
            "Someday, same bouquet, right girl."
        );
        assert_eq!(s.active_theme().tags, vec!["Slow Burn", "Wholesome", "Hopeful"]);
    }

    #[test]
    fn test_select_unknown_theme_is_ignored() {
        let mut s = state();
        s.select_theme("Brooding");
        assert_eq!(s.selected_theme, "Seductive");
    }

    #[test]
    fn test_display_tags_are_genres_then_theme_tags() {
        let mut s = state();
        assert_eq!(
            s.display_tags(),
            vec![
                "Romance",
                "Drama",
                "Mockumentary",
                "Rated Kilig",
                "Cinematic",
                "Crisp Bokeh"
            ]
        );

        // Switching replaces the variant part entirely; nothing from the
        // previous theme leaks through.
        s.select_theme("Yearner");
        assert_eq!(
            s.display_tags(),
            vec![
                "Romance",
                "Drama",
                "Mockumentary",
                "Slow Burn",
                "Wholesome",
                "Hopeful"
            ]
        );
    }

    #[test]
    fn test_replace_showcase_resets_selection() {
        let mut s = state();
        s.select_theme("Yearner");
        s.toggle_mute();
        s.toggle_in_list();

        s.replace_showcase(showcase::load_builtin_show().unwrap());
        assert_eq!(s.selected_theme, "Seductive");
        assert!(!s.in_list);
        assert!(!s.muted, "mute flag carries over a show reload");
    }
}
