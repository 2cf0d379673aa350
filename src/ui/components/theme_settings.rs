use eframe::egui;

use crate::common::{ColorPalette, ThemeMode};
use crate::ui::theme::accent_color;

#[derive(Default)]
pub struct ThemeActions {
    pub mode: Option<ThemeMode>,
    pub palette: Option<ColorPalette>,
}

pub fn render(
    ctx: &egui::Context,
    open: &mut bool,
    current_palette: ColorPalette,
    current_mode: ThemeMode,
) -> ThemeActions {
    let mut actions = ThemeActions::default();

    egui::Window::new("Theme settings")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("Mode").strong());
            ui.horizontal(|ui| {
                for (mode, label) in [(ThemeMode::Light, "☀ Light"), (ThemeMode::Dark, "🌙 Dark")] {
                    if ui.selectable_label(current_mode == mode, label).clicked() {
                        actions.mode = Some(mode);
                    }
                }
            });

            ui.separator();
            ui.label(egui::RichText::new("Color palette").strong());
            for palette in ColorPalette::ALL {
                ui.horizontal(|ui| {
                    ui.colored_label(accent_color(palette), "⬤");
                    if ui
                        .selectable_label(current_palette == palette, palette.label())
                        .clicked()
                    {
                        actions.palette = Some(palette);
                    }
                    if current_palette == palette {
                        ui.label(egui::RichText::new("Active").small().weak());
                    }
                });
            }
        });

    actions
}
