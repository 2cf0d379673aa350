use std::rc::Rc;

use eframe::egui;

use crate::common::StoreChange;
use crate::config;
use crate::session::MessengerSession;

use super::components::{chat_area, input_bar, sidebar, theme_settings};
use super::state::UiState;
use super::theme;

pub struct ChatApp {
    session: MessengerSession,
    ui: UiState,
    config_path: String,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        mut session: MessengerSession,
        config_path: String,
    ) -> Self {
        let ui = UiState::new();

        let theme_dirty = Rc::clone(&ui.theme_dirty);
        session.store_mut().subscribe(move |change, _state| {
            if matches!(
                change,
                StoreChange::ColorPaletteChanged(_) | StoreChange::ThemeModeChanged(_)
            ) {
                theme_dirty.set(true);
            }
        });

        Self {
            session,
            ui,
            config_path,
        }
    }

    fn apply_theme_if_changed(&mut self, ctx: &egui::Context, persist: bool) {
        if !self.ui.take_theme_dirty() {
            return;
        }
        let state = self.session.store().state();
        theme::apply(ctx, state.color_palette(), state.theme_mode());
        if persist {
            config::persist_theme(&self.config_path, state.color_palette(), state.theme_mode());
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|input| input.raw.dropped_files.clone());
        for file in dropped {
            let reference = file
                .path
                .map(|path| path.display().to_string())
                .unwrap_or(file.name);
            if self.session.send_image(reference).is_none() {
                log::debug!("dropped file ignored: no active chat");
            }
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The first frame only applies the configured theme.
        let first_frame = ctx.cumulative_frame_nr() == 0;
        self.apply_theme_if_changed(ctx, !first_frame);
        self.handle_dropped_files(ctx);

        egui::SidePanel::left("chat_sidebar")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                let actions = sidebar::render(ui, self.session.store().state());
                if actions.open_settings {
                    self.ui.settings_open = true;
                }
                if let Some(chat_id) = actions.selected_chat {
                    self.session.select_chat(Some(chat_id));
                }
            });

        if self.session.store().state().active_chat().is_some() {
            egui::TopBottomPanel::bottom("composer").show(ctx, |ui| {
                let recording = self
                    .session
                    .recorder()
                    .is_recording()
                    .then(|| self.session.recorder().elapsed_secs());
                let draft = self.session.store().state().message_draft().to_string();

                let actions = input_bar::render(ui, &draft, recording, &mut self.ui);
                if let Some(text) = actions.draft {
                    self.session.edit_draft(text);
                }
                if actions.send {
                    self.session.send_text();
                }
                if let Some(reference) = actions.attach_image {
                    self.session.send_image(reference);
                }
                if actions.start_recording {
                    self.session.start_recording();
                }
                if actions.stop_recording {
                    self.session.stop_recording();
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let can_moderate = self.session.can_moderate();
            let state = self.session.store().state();
            let Some(chat) = state.active_chat() else {
                chat_area::render_empty(ui);
                return;
            };

            chat_area::render_header(ui, chat);
            ui.separator();
            let actions = chat_area::render(ui, state, chat, can_moderate);

            if let Some(message_id) = actions.toggle_pin {
                self.session.store_mut().pin_message(&message_id);
            }
            if let Some(message_id) = actions.delete {
                self.session.store_mut().delete_message(&message_id);
            }
        });

        let (palette, mode) = {
            let state = self.session.store().state();
            (state.color_palette(), state.theme_mode())
        };
        let mut open = self.ui.settings_open;
        let actions = theme_settings::render(ctx, &mut open, palette, mode);
        self.ui.settings_open = open;
        if let Some(mode) = actions.mode {
            self.session.store_mut().set_theme_mode(mode);
        }
        if let Some(palette) = actions.palette {
            self.session.store_mut().set_color_palette(palette);
        }

        ctx.request_repaint();
    }
}
