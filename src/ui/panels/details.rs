// ShowBill - ui/panels/details.rs
//
// "Show Details" window: the full metadata grid plus any non-fatal
// loading warnings.

use crate::app::state::AppState;
use egui::RichText;

/// Render the details window (no-op while closed).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_details {
        return;
    }

    let mut open = state.show_details;
    egui::Window::new("Show Details")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("details_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    let show = &state.showcase.show;

                    ui.label("Title:");
                    ui.label(RichText::new(&show.title).strong());
                    ui.end_row();

                    ui.label("Tagline:");
                    ui.label(&show.tagline);
                    ui.end_row();

                    ui.label("Rating:");
                    ui.label(&show.maturity);
                    ui.end_row();

                    ui.label("Year:");
                    ui.label(&show.year);
                    ui.end_row();

                    ui.label("Duration:");
                    ui.label(&show.duration);
                    ui.end_row();

                    ui.label("Genres:");
                    ui.label(show.genres.join(", "));
                    ui.end_row();

                    ui.label("Cast:");
                    ui.label(show.cast.join(", "));
                    ui.end_row();

                    ui.label("Creators:");
                    ui.label(show.creators.join(", "));
                    ui.end_row();

                    ui.label("Episodes:");
                    ui.label(show.episodes.len().to_string());
                    ui.end_row();

                    ui.label("Themes:");
                    ui.label(
                        state
                            .showcase
                            .theme_keys()
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                    ui.end_row();

                    if let Some(ref url) = state.showcase.poster_url {
                        ui.label("Poster:");
                        ui.label(url);
                        ui.end_row();
                    }
                });

            if !state.warnings.is_empty() {
                ui.separator();
                ui.label(RichText::new("Warnings").strong());
                for warning in &state.warnings {
                    ui.label(RichText::new(warning).weak());
                }
            }
        });
    state.show_details = open;
}
