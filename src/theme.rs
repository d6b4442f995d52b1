//! Night-sky theme for the constellation scene

use egui::Color32;

/// Dark palette with light-blue constellation accents
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(4, 6, 16); // #040610 - near-black night sky
    pub const BG_HOVER: Color32 = Color32::from_rgb(20, 24, 40); // hover states

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 240, 255);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(90, 100, 130);

    // === Constellation ===

    /// Point fill: light blue at 90% opacity (0.9 * 255 ~= 230).
    pub fn point_fill() -> Color32 {
        Color32::from_rgba_unmultiplied(180, 220, 255, 230)
    }

    /// Link stroke color at the given opacity (0..=1); alpha fades with
    /// distance between the linked points.
    pub fn link_stroke(opacity: f64) -> Color32 {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
        Color32::from_rgba_unmultiplied(120, 180, 255, alpha)
    }
}

/// Create the night-sky egui Visuals
pub fn night_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);

    visuals.widgets.inactive.bg_fill = BG_PRIMARY;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.inactive.weak_bg_fill = BG_PRIMARY;

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;

    visuals.widgets.active.bg_fill = BG_HOVER;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.weak_bg_fill = BG_HOVER;

    // Flat design - no shadows
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
