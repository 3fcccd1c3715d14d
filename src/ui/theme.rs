// ShowBill - ui/theme.rs
//
// Colour scheme, layout constants, and small paint helpers.
// No dependencies on app state or business logic.

use egui::{Color32, Mesh, Painter, Rect, Shape, Vec2};

// =============================================================================
// Palette
// =============================================================================

/// Page background, near-black.
pub const PAGE_BG: Color32 = Color32::from_rgb(10, 10, 10);

/// Brand accent red (play icon, highlights).
pub const ACCENT: Color32 = Color32::from_rgb(229, 9, 20);

/// Primary text, near-white.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(237, 237, 237);

/// Secondary text (white/70 on the original page).
pub const TEXT_DIM: Color32 = Color32::from_rgb(178, 178, 178);

/// Faint text (footer, overlays).
pub const TEXT_FAINT: Color32 = Color32::from_rgb(128, 128, 128);

/// Episode card background (white/5 on black).
pub const CARD_BG: Color32 = Color32::from_rgb(22, 22, 22);

/// Tag/badge chip background (white/10 on black).
pub const CHIP_BG: Color32 = Color32::from_rgb(36, 36, 36);

/// Chip and card border (white/15 on black).
pub const CHIP_STROKE: Color32 = Color32::from_rgb(58, 58, 58);

/// "Available to watch" line (Emerald 300).
pub const AVAILABLE_GREEN: Color32 = Color32::from_rgb(110, 231, 183);

/// Hero placeholder gradient endpoints when no poster is available.
pub const HERO_FALLBACK_TOP: Color32 = Color32::from_rgb(64, 16, 20);
pub const HERO_FALLBACK_BOTTOM: Color32 = Color32::from_rgb(10, 10, 10);

/// Backdrop darkening overlays (premultiplied).
pub const OVERLAY_DARK: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 140);
pub const OVERLAY_CLEAR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 0);
pub const OVERLAY_FULL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 235);

// =============================================================================
// Layout constants
// =============================================================================

pub const HERO_HEIGHT: f32 = 460.0;
pub const HERO_PADDING: f32 = 32.0;

/// Width of the framed poster card on the right of the hero.
pub const POSTER_CARD_WIDTH: f32 = 280.0;

/// Minimum hero width before the poster card is shown (the original
/// hides it below its large breakpoint).
pub const POSTER_CARD_BREAKPOINT: f32 = 1000.0;

pub const EPISODE_CARD_WIDTH: f32 = 320.0;
pub const EPISODE_THUMB_HEIGHT: f32 = 176.0;
pub const GRID_GAP: f32 = 24.0;

pub const SECTION_PADDING: f32 = 32.0;
pub const STATUS_BAR_HEIGHT: f32 = 26.0;

// =============================================================================
// Paint helpers
// =============================================================================

/// Fill `rect` with a vertical gradient from `top` to `bottom`.
pub fn vertical_fade(painter: &Painter, rect: Rect, top: Color32, bottom: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    painter.add(Shape::mesh(mesh));
}

/// Fill `rect` with a horizontal gradient from `left` to `right`.
pub fn horizontal_fade(painter: &Painter, rect: Rect, left: Color32, right: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    painter.add(Shape::mesh(mesh));
}

/// UV sub-rectangle that crops a texture of `tex_size` to cover `rect`
/// while preserving aspect ratio (CSS object-fit: cover).
pub fn cover_uv(tex_size: Vec2, rect: Rect) -> Rect {
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    }

    let tex_aspect = tex_size.x / tex_size.y;
    let rect_aspect = rect.width() / rect.height();

    if tex_aspect > rect_aspect {
        // Texture is wider than the target: crop left/right.
        let u = rect_aspect / tex_aspect;
        let margin = (1.0 - u) / 2.0;
        Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        // Texture is taller than the target: crop top/bottom.
        let v = tex_aspect / rect_aspect;
        let margin = (1.0 - v) / 2.0;
        Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_cover_uv_square_texture_into_wide_rect_crops_vertically() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(200.0, 100.0));
        let uv = cover_uv(egui::vec2(100.0, 100.0), rect);
        assert_eq!(uv.min.x, 0.0);
        assert_eq!(uv.max.x, 1.0);
        assert!(uv.min.y > 0.0 && uv.max.y < 1.0);
        assert!((uv.height() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_cover_uv_matching_aspect_is_identity() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(300.0, 400.0));
        let uv = cover_uv(egui::vec2(3.0, 4.0), rect);
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }

    #[test]
    fn test_cover_uv_degenerate_inputs_fall_back_to_full() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(0.0, 100.0));
        let uv = cover_uv(egui::vec2(10.0, 10.0), rect);
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }
}
