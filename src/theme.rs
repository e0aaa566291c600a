//! Centralized theme constants for the demos
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// COLORS - Filter/Toggle Selection
// =============================================================================
pub const FILTER_ACTIVE: Color32 = Color32::from_rgb(0x69, 0x69, 0x69); // dimgray
pub const TOGGLE_SELECTED: Color32 = Color32::from_rgb(0x11, 0x5e, 0x59); // teal-800
pub const TOGGLE_UNSELECTED: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const TOGGLE_GLOW: Color32 = Color32::from_rgb(0x0f, 0x76, 0x6e); // teal glow for segmented toggles

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const TAB_BAR_HEIGHT: f32 = 44.0;
pub const TAB_HEIGHT: f32 = 29.0;
pub const TAB_PADDING: f32 = 12.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const TASK_ROW_MARGIN: i8 = 8;
pub const FILTER_PADDING: f32 = 10.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Fonts
// =============================================================================
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    // Phosphor provides the lock and task-state glyphs
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e),
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: Color32::from_rgb(0x30, 0x30, 0x35),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                weak_bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn tab_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .inner_margin(egui::Margin::symmetric(SPACING_XL as i8, SPACING_MD as i8))
}

pub fn content_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

// =============================================================================
// HELPER - Segmented toggle (pill-style)
// =============================================================================

/// Renders a segmented toggle with two options. Returns true if selection changed.
/// `left_active` indicates if the left option is currently selected.
/// Container (2px) -> Glow (1px) -> Active fill
pub fn segmented_toggle(
    ui: &mut egui::Ui,
    left_label: &str,
    right_label: &str,
    left_active: &mut bool,
) -> bool {
    let mut changed = false;
    let rounding = RADIUS_DEFAULT;

    // Segment width = text + padding on both sides + 3px outer / 2px inner border
    let left_width = label_width(ui, left_label, FONT_SMALL) + TAB_PADDING * 2.0 + 5.0;
    let right_width = label_width(ui, right_label, FONT_SMALL) + TAB_PADDING * 2.0 + 5.0;

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(left_width + right_width, TAB_HEIGHT),
        egui::Sense::click(),
    );
    let painter = ui.painter();

    // Layer 1: Container background
    painter.rect_filled(rect, rounding + 2.0, TOGGLE_UNSELECTED);

    let left_rect =
        egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + left_width, rect.max.y));
    let right_rect =
        egui::Rect::from_min_max(egui::pos2(rect.min.x + left_width, rect.min.y), rect.max);

    // 2px on outer edges, 1px on the inner edge between segments
    let left_glow_rect = egui::Rect::from_min_max(
        egui::pos2(left_rect.min.x + 2.0, left_rect.min.y + 2.0),
        egui::pos2(left_rect.max.x - 1.0, left_rect.max.y - 2.0),
    );
    let right_glow_rect = egui::Rect::from_min_max(
        egui::pos2(right_rect.min.x + 1.0, right_rect.min.y + 2.0),
        egui::pos2(right_rect.max.x - 2.0, right_rect.max.y - 2.0),
    );

    // Layer 2: Glow, Layer 3: Active fill (inset 1px from glow)
    let glow_rect = if *left_active { left_glow_rect } else { right_glow_rect };
    painter.rect_filled(glow_rect, rounding, TOGGLE_GLOW);
    painter.rect_filled(glow_rect.shrink(1.0), rounding - 1.0, TOGGLE_SELECTED);

    let (left_color, right_color) = if *left_active {
        (TEXT_PRIMARY, TEXT_MUTED)
    } else {
        (TEXT_MUTED, TEXT_PRIMARY)
    };
    painter.text(
        left_glow_rect.shrink(1.0).center(),
        egui::Align2::CENTER_CENTER,
        left_label,
        egui::FontId::proportional(FONT_SMALL),
        left_color,
    );
    painter.text(
        right_glow_rect.shrink(1.0).center(),
        egui::Align2::CENTER_CENTER,
        right_label,
        egui::FontId::proportional(FONT_SMALL),
        right_color,
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let clicked_left = pos.x < rect.min.x + left_width;
            if clicked_left != *left_active {
                *left_active = clicked_left;
                changed = true;
            }
        }
    }
    changed
}

fn label_width(ui: &egui::Ui, label: &str, size: f32) -> f32 {
    ui.fonts(|f| {
        f.layout_no_wrap(label.to_string(), egui::FontId::proportional(size), TEXT_PRIMARY)
            .rect
            .width()
    })
}

/// Fill and rect for a custom-painted button in its current interaction state
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.0))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

/// Lightens a color toward white by `amount` (0.0 - 1.0)
pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_toward_white() {
        assert_eq!(lighten(Color32::BLACK, 0.0), Color32::BLACK);
        assert_eq!(lighten(Color32::BLACK, 1.0), Color32::WHITE);
        let mid = lighten(Color32::from_rgb(100, 100, 100), 0.5);
        assert_eq!(mid, Color32::from_rgb(177, 177, 177));
    }
}
