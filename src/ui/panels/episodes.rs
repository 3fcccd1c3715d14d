// ShowBill - ui/panels/episodes.rs
//
// Episode grid: one card per configured episode, in definition order.
// Each card shows the poster thumbnail with a length overlay, the
// episode title, description, and availability line.

use crate::app::state::AppState;
use crate::core::model::Episode;
use crate::ui::theme;
use egui::{
    Align2, Color32, CornerRadius, FontId, Margin, Rect, RichText, Sense, Stroke, StrokeKind,
    TextureHandle, Vec2,
};

/// Render the episode section (heading plus card grid).
pub fn render(ui: &mut egui::Ui, state: &AppState, poster: Option<&TextureHandle>) {
    egui::Frame::new()
        .inner_margin(Margin::symmetric(theme::SECTION_PADDING as i8, 20))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Episodes")
                        .size(24.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "View all ({}) ›",
                            state.showcase.show.episodes.len()
                        ))
                        .size(13.0)
                        .color(theme::TEXT_DIM),
                    );
                });
            });

            ui.add_space(12.0);

            // Responsive column count from the available width.
            let available = ui.available_width();
            let columns = ((available + theme::GRID_GAP)
                / (theme::EPISODE_CARD_WIDTH + theme::GRID_GAP))
                .floor()
                .max(1.0) as usize;

            ui.spacing_mut().item_spacing = Vec2::splat(theme::GRID_GAP);
            for row in state.showcase.show.episodes.chunks(columns) {
                ui.horizontal(|ui| {
                    for episode in row {
                        episode_card(ui, episode, poster);
                    }
                });
            }
        });
}

/// One episode card: thumbnail with fade and length overlay, then the
/// text block.
fn episode_card(ui: &mut egui::Ui, episode: &Episode, poster: Option<&TextureHandle>) {
    egui::Frame::new()
        .fill(theme::CARD_BG)
        .stroke(Stroke::new(1.0, theme::CHIP_STROKE))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(theme::EPISODE_CARD_WIDTH);
            ui.spacing_mut().item_spacing.y = 0.0;

            let (thumb_rect, _) = ui.allocate_exact_size(
                Vec2::new(theme::EPISODE_CARD_WIDTH, theme::EPISODE_THUMB_HEIGHT),
                Sense::hover(),
            );
            paint_thumbnail(ui, thumb_rect, episode, poster);

            egui::Frame::new()
                .inner_margin(Margin::same(12))
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 6.0;
                    ui.label(
                        RichText::new(&episode.title)
                            .size(15.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new(&episode.description)
                            .size(12.5)
                            .color(theme::TEXT_DIM),
                    );
                    ui.label(
                        RichText::new("✔ Available to watch")
                            .size(11.5)
                            .color(theme::AVAILABLE_GREEN),
                    );
                });
        });
}

fn paint_thumbnail(
    ui: &egui::Ui,
    rect: Rect,
    episode: &Episode,
    poster: Option<&TextureHandle>,
) {
    let painter = ui.painter();

    match poster {
        Some(texture) => {
            let uv = theme::cover_uv(texture.size_vec2(), rect);
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
        None => {
            theme::vertical_fade(
                painter,
                rect,
                theme::HERO_FALLBACK_TOP,
                theme::HERO_FALLBACK_BOTTOM,
            );
        }
    }

    // Bottom fade so the length overlay stays readable.
    let fade_rect = Rect::from_min_max(
        egui::pos2(rect.left(), rect.bottom() - rect.height() / 2.5),
        rect.max,
    );
    theme::vertical_fade(painter, fade_rect, theme::OVERLAY_CLEAR, theme::OVERLAY_FULL);

    painter.text(
        rect.left_bottom() + Vec2::new(12.0, -10.0),
        Align2::LEFT_BOTTOM,
        &episode.length,
        FontId::proportional(12.5),
        theme::TEXT_PRIMARY,
    );

    painter.rect_stroke(
        rect,
        CornerRadius::ZERO,
        Stroke::new(1.0, theme::CHIP_STROKE),
        StrokeKind::Inside,
    );
}
