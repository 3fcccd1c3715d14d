// ShowBill - ui/panels/footer.rs
//
// Page footer: copyright line for the current year plus the fan-made
// disclaimer.

use crate::app::state::AppState;
use crate::ui::theme;
use chrono::Datelike;
use egui::{Margin, RichText};

/// Render the footer.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    egui::Frame::new()
        .inner_margin(Margin::symmetric(theme::SECTION_PADDING as i8, 16))
        .show(ui, |ui| {
            ui.separator();
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                let brand = if state.showcase.show.creators.is_empty() {
                    state.showcase.show.title.clone()
                } else {
                    state.showcase.show.creators.join(", ")
                };
                ui.label(
                    RichText::new(format!("© {} {brand}", chrono::Local::now().year()))
                        .size(12.5)
                        .color(theme::TEXT_FAINT),
                );
                ui.add_space(16.0);
                ui.label(
                    RichText::new("This is a fan-made, streaming-style mock page for internal fun.")
                        .size(12.5)
                        .color(theme::TEXT_FAINT),
                );
            });
            ui.add_space(24.0);
        });
}
