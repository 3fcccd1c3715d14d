// ShowBill - ui/panels/hero.rs
//
// Hero section: poster backdrop with darkening gradients, badges,
// title, tagline, metadata line, theme selector, action buttons, tag
// chips, credits, and the framed poster card on wide layouts.

use crate::app::state::AppState;
use crate::ui::theme;
use egui::{
    Align, Align2, Color32, CornerRadius, FontId, Layout, Margin, Rect, RichText, Sense, Stroke,
    StrokeKind, TextureHandle, UiBuilder, Vec2,
};

/// Render the hero section.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, poster: Option<&TextureHandle>) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, theme::HERO_HEIGHT), Sense::hover());

    paint_backdrop(ui, rect, poster);

    let show_poster_card = width >= theme::POSTER_CARD_BREAKPOINT;
    let content_width = if show_poster_card {
        width - theme::POSTER_CARD_WIDTH - 3.0 * theme::HERO_PADDING
    } else {
        width - 2.0 * theme::HERO_PADDING
    };

    let content_rect = Rect::from_min_size(
        rect.min + Vec2::new(theme::HERO_PADDING, theme::HERO_PADDING),
        Vec2::new(content_width, theme::HERO_HEIGHT - 2.0 * theme::HERO_PADDING),
    );
    let mut content_ui = ui.new_child(
        UiBuilder::new()
            .max_rect(content_rect)
            .layout(Layout::top_down(Align::Min)),
    );
    render_content(&mut content_ui, state);

    if show_poster_card {
        paint_poster_card(ui, rect, state, poster);
    }
}

/// Backdrop: cover-cropped poster (or a fallback gradient) darkened by
/// the same two overlays the original page uses -- top-to-bottom into
/// the page background and left-to-right behind the text column.
fn paint_backdrop(ui: &egui::Ui, rect: Rect, poster: Option<&TextureHandle>) {
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

    theme::vertical_fade(painter, rect, theme::OVERLAY_DARK, theme::OVERLAY_FULL);
    theme::horizontal_fade(painter, rect, theme::OVERLAY_DARK, theme::OVERLAY_CLEAR);
}

fn render_content(ui: &mut egui::Ui, state: &mut AppState) {
    ui.spacing_mut().item_spacing.y = 8.0;

    // Badge chips
    if !state.showcase.show.badges.is_empty() {
        ui.horizontal(|ui| {
            for badge in &state.showcase.show.badges {
                chip(ui, badge, theme::TEXT_PRIMARY);
            }
        });
        ui.add_space(4.0);
    }

    // Title + tagline + metadata line
    ui.label(
        RichText::new(&state.showcase.show.title)
            .size(42.0)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.label(
        RichText::new(&state.showcase.show.tagline)
            .size(18.0)
            .italics()
            .color(theme::TEXT_DIM),
    );
    ui.label(
        RichText::new(format!(
            "{} • {} • {}",
            state.showcase.show.year, state.showcase.show.duration, state.showcase.show.maturity
        ))
        .size(13.0)
        .color(theme::TEXT_DIM),
    );

    ui.add_space(6.0);

    // Theme selector + active logline
    let keys: Vec<String> = state.showcase.theme_keys().map(str::to_string).collect();
    let mut selected = state.selected_theme.clone();
    ui.horizontal(|ui| {
        ui.label(RichText::new("Theme").size(13.0).color(theme::TEXT_DIM));
        egui::ComboBox::from_id_salt("theme_selector")
            .selected_text(selected.clone())
            .show_ui(ui, |ui| {
                for key in &keys {
                    ui.selectable_value(&mut selected, key.clone(), key);
                }
            });
        ui.label(
            RichText::new(&state.active_theme().logline)
                .size(13.0)
                .color(theme::TEXT_DIM),
        );
    });
    if selected != state.selected_theme {
        state.select_theme(&selected);
    }

    ui.add_space(10.0);

    // Action buttons
    ui.horizontal(|ui| {
        if ui
            .button(RichText::new("▶ Play").strong().size(15.0))
            .clicked()
        {
            state.status_message = "This is a promo page — there is nothing to play.".to_string();
        }

        let list_label = if state.in_list {
            "✔ In My List"
        } else {
            "+ My List"
        };
        if ui.button(RichText::new(list_label).size(15.0)).clicked() {
            state.toggle_in_list();
        }

        if ui.button(RichText::new("ℹ Details").size(15.0)).clicked() {
            state.show_details = true;
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let audio_icon = if state.muted { "🔇" } else { "🔊" };
            let label = format!("{audio_icon} {}", state.audio_label());
            if ui.button(RichText::new(label).size(15.0)).clicked() {
                state.toggle_mute();
            }
        });
    });

    ui.add_space(10.0);

    // Tag chips: fixed genres first, then the active theme's tags.
    ui.horizontal_wrapped(|ui| {
        for tag in state.display_tags() {
            chip(ui, tag, theme::TEXT_DIM);
        }
    });

    ui.add_space(8.0);

    // Credits
    credit_line(ui, "Cast:", &state.showcase.show.cast);
    credit_line(ui, "Creators:", &state.showcase.show.creators);
}

fn chip(ui: &mut egui::Ui, text: &str, text_color: Color32) {
    egui::Frame::new()
        .fill(theme::CHIP_BG)
        .stroke(Stroke::new(1.0, theme::CHIP_STROKE))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).color(text_color));
        });
}

fn credit_line(ui: &mut egui::Ui, label: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).size(13.0).color(theme::TEXT_FAINT));
        ui.label(
            RichText::new(names.join(", "))
                .size(13.0)
                .color(theme::TEXT_DIM),
        );
    });
}

/// The framed 3:4 poster card on the right of the hero, with a bottom
/// fade carrying the title and tagline.
fn paint_poster_card(
    ui: &egui::Ui,
    hero_rect: Rect,
    state: &AppState,
    poster: Option<&TextureHandle>,
) {
    let card_height = theme::POSTER_CARD_WIDTH * 4.0 / 3.0;
    let card_rect = Rect::from_min_size(
        egui::pos2(
            hero_rect.right() - theme::HERO_PADDING - theme::POSTER_CARD_WIDTH,
            hero_rect.center().y - card_height / 2.0,
        ),
        Vec2::new(theme::POSTER_CARD_WIDTH, card_height),
    );

    let painter = ui.painter();

    match poster {
        Some(texture) => {
            let uv = theme::cover_uv(texture.size_vec2(), card_rect);
            painter.image(texture.id(), card_rect, uv, Color32::WHITE);
        }
        None => {
            theme::vertical_fade(
                painter,
                card_rect,
                theme::HERO_FALLBACK_TOP,
                theme::HERO_FALLBACK_BOTTOM,
            );
        }
    }

    let fade_rect = Rect::from_min_max(
        egui::pos2(card_rect.left(), card_rect.bottom() - card_height / 3.0),
        card_rect.max,
    );
    theme::vertical_fade(painter, fade_rect, theme::OVERLAY_CLEAR, theme::OVERLAY_FULL);

    painter.rect_stroke(
        card_rect,
        CornerRadius::same(2),
        Stroke::new(1.0, theme::CHIP_STROKE),
        StrokeKind::Inside,
    );

    painter.text(
        card_rect.left_bottom() + Vec2::new(14.0, -30.0),
        Align2::LEFT_BOTTOM,
        &state.showcase.show.title,
        FontId::proportional(17.0),
        theme::TEXT_PRIMARY,
    );
    painter.text(
        card_rect.left_bottom() + Vec2::new(14.0, -12.0),
        Align2::LEFT_BOTTOM,
        &state.showcase.show.tagline,
        FontId::proportional(12.0),
        theme::TEXT_DIM,
    );
}
