use eframe::egui;

use crate::format;
use crate::ui::state::UiState;

#[derive(Default)]
pub struct ComposerActions {
    /// New draft text when the user edited it this frame.
    pub draft: Option<String>,
    pub send: bool,
    pub start_recording: bool,
    pub stop_recording: bool,
    pub attach_image: Option<String>,
}

pub fn render(
    ui: &mut egui::Ui,
    draft: &str,
    recording_secs: Option<u64>,
    ui_state: &mut UiState,
) -> ComposerActions {
    let mut actions = ComposerActions::default();

    if let Some(seconds) = recording_secs {
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::RED, "●");
            ui.label(format!(
                "Recording voice message: {}",
                format::recording_time(seconds)
            ));
            if ui.button("Stop").clicked() {
                actions.stop_recording = true;
            }
        });
    }

    if ui_state.show_image_input {
        ui.horizontal(|ui| {
            ui.label("Image path:");
            ui.text_edit_singleline(&mut ui_state.image_path_input);
            if ui.button("Attach").clicked() && !ui_state.image_path_input.trim().is_empty() {
                actions.attach_image = Some(ui_state.image_path_input.trim().to_string());
                ui_state.image_path_input.clear();
                ui_state.show_image_input = false;
            }
        });
    }

    let editor_id = ui.make_persistent_id("composer_text");
    // Enter sends, Shift+Enter keeps the newline. consume_key also matches
    // Enter with extra modifiers, so Shift is checked first.
    let focused = ui.memory(|memory| memory.has_focus(editor_id));
    if focused
        && ui.input_mut(|input| {
            !input.modifiers.shift && input.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
        })
    {
        actions.send = true;
    }

    ui.horizontal(|ui| {
        if ui.button("🖼").on_hover_text("Attach image").clicked() {
            ui_state.show_image_input = !ui_state.show_image_input;
        }

        let mut text = draft.to_string();
        let width = ui.available_width() - 48.0;
        let response = ui.add(
            egui::TextEdit::multiline(&mut text)
                .id(editor_id)
                .desired_rows(1)
                .hint_text("Write a message...")
                .desired_width(width),
        );
        if response.changed() {
            actions.draft = Some(text.clone());
        }

        if !text.trim().is_empty() {
            if ui.button("➤").on_hover_text("Send").clicked() {
                actions.send = true;
            }
        } else if recording_secs.is_some() {
            if ui.button("■").on_hover_text("Stop recording").clicked() {
                actions.stop_recording = true;
            }
        } else if ui.button("🎤").on_hover_text("Record voice message").clicked() {
            actions.start_recording = true;
        }
    });

    actions
}
