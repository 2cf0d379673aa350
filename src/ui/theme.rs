use eframe::egui;

use crate::common::{ColorPalette, ThemeMode};

pub fn accent_color(palette: ColorPalette) -> egui::Color32 {
    let [r, g, b] = palette.primary_rgb();
    egui::Color32::from_rgb(r, g, b)
}

/// Builds the visuals for a mode, tinted with the palette accent.
pub fn visuals_for(palette: ColorPalette, mode: ThemeMode) -> egui::Visuals {
    let accent = accent_color(palette);
    let mut visuals = if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.selection.bg_fill = accent;
    visuals.selection.stroke.color = egui::Color32::WHITE;
    visuals.hyperlink_color = accent;
    visuals
}

pub fn apply(ctx: &egui::Context, palette: ColorPalette, mode: ThemeMode) {
    ctx.set_visuals(visuals_for(palette, mode));
}
