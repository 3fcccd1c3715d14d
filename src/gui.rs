// ShowBill - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the page panels and manages the poster fetch lifecycle.

use crate::app::poster::{PosterManager, PosterProgress};
use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;
use std::path::PathBuf;

/// The ShowBill application.
pub struct ShowBillApp {
    pub state: AppState,
    pub poster_manager: PosterManager,

    /// Decoded poster texture, shared by the backdrop, the poster card,
    /// and every episode thumbnail.
    poster_texture: Option<egui::TextureHandle>,

    /// Terminal fetch error, surfaced in the status bar.
    poster_error: Option<String>,

    /// Set once the initial fetch has been kicked off.
    poster_requested: bool,

    /// Poster byte cache location (platform data directory).
    cache_dir: PathBuf,

    poster_enabled: bool,
    poster_timeout_secs: u64,
}

impl ShowBillApp {
    /// Create a new application instance with the given state.
    pub fn new(
        state: AppState,
        cache_dir: PathBuf,
        poster_enabled: bool,
        poster_timeout_secs: u64,
    ) -> Self {
        Self {
            state,
            poster_manager: PosterManager::new(),
            poster_texture: None,
            poster_error: None,
            poster_requested: false,
            cache_dir,
            poster_enabled,
            poster_timeout_secs,
        }
    }

    /// Kick off (or skip) the poster fetch for the current showcase.
    fn request_poster(&mut self) {
        self.poster_requested = true;
        self.poster_texture = None;
        self.poster_error = None;

        if !self.poster_enabled {
            tracing::info!("Poster fetch disabled by config");
            return;
        }
        match self.state.showcase.poster_url.clone() {
            Some(url) => {
                self.state.status_message = "Fetching poster…".to_string();
                self.poster_manager
                    .start_fetch(url, self.cache_dir.clone(), self.poster_timeout_secs);
            }
            None => {
                tracing::info!("Show has no poster URL; using placeholder fills");
            }
        }
    }
}

impl eframe::App for ShowBillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // First frame: start the poster fetch for the initial showcase.
        if !self.poster_requested {
            self.request_poster();
        }

        // Poll for poster progress.
        for msg in self.poster_manager.poll_progress() {
            match msg {
                PosterProgress::Started { url } => {
                    tracing::debug!(%url, "Poster fetch in progress");
                }
                PosterProgress::Loaded {
                    width,
                    height,
                    rgba,
                    from_cache,
                } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba);
                    self.poster_texture =
                        Some(ctx.load_texture("poster", image, egui::TextureOptions::LINEAR));
                    self.state.status_message = if from_cache {
                        "Poster loaded from cache.".to_string()
                    } else {
                        "Poster loaded.".to_string()
                    };
                }
                PosterProgress::Failed { error } => {
                    self.poster_error = Some(error);
                    self.state.status_message =
                        "Poster unavailable — showing placeholder.".to_string();
                }
            }
        }
        // Repaint while the fetch is active so the frame lands promptly.
        if self.poster_manager.in_flight {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                constants::POSTER_POLL_INTERVAL_MS,
            ));
        }

        // pending_show_file: a menu action requested a new show file.
        if let Some(path) = self.state.pending_show_file.take() {
            match crate::app::showfile::load_show_file(&path) {
                Ok(showcase) => {
                    let title = showcase.show.title.clone();
                    self.state.replace_showcase(showcase);
                    self.poster_manager.cancel();
                    self.request_poster();
                    self.state.status_message = format!("Loaded show '{title}'.");
                }
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "Show file rejected");
                    self.state.status_message = format!("Could not load show file: {e}");
                    self.state.warnings.push(e.to_string());
                }
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Show File\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Show definition", &["toml"])
                            .pick_file()
                        {
                            self.state.pending_show_file = Some(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Show Details").clicked() {
                        self.state.show_details = true;
                        ui.close_menu();
                    }
                    if ui.button("Copy Show JSON").clicked() {
                        match serde_json::to_string_pretty(&self.state.showcase) {
                            Ok(json) => {
                                ctx.copy_text(json);
                                self.state.status_message =
                                    "Copied show definition JSON to clipboard.".to_string();
                            }
                            Err(e) => {
                                self.state.status_message =
                                    format!("Could not serialise show: {e}");
                            }
                        }
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(&self.state.status_message);
                    if let Some(ref err) = self.poster_error {
                        ui.separator();
                        ui.label(egui::RichText::new(err).weak());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!(
                            "{} episodes • {}",
                            self.state.showcase.show.episodes.len(),
                            self.state.selected_theme
                        ));
                    });
                });
            });

        // The page itself: hero, episode grid, footer in one scroll.
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(ui::theme::PAGE_BG))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.y = 0.0;
                        ui::panels::hero::render(ui, &mut self.state, self.poster_texture.as_ref());
                        ui::panels::episodes::render(
                            ui,
                            &self.state,
                            self.poster_texture.as_ref(),
                        );
                        ui::panels::footer::render(ui, &self.state);
                    });
            });

        // Details window (modal-ish)
        ui::panels::details::render(ctx, &mut self.state);
    }
}
