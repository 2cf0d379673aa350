use chrono::Utc;
use eframe::egui;

use crate::common::ChatId;
use crate::format;
use crate::store::MessengerState;

#[derive(Default)]
pub struct SidebarActions {
    pub selected_chat: Option<ChatId>,
    pub open_settings: bool,
}

pub fn render(ui: &mut egui::Ui, state: &MessengerState) -> SidebarActions {
    let mut actions = SidebarActions::default();

    ui.horizontal(|ui| {
        ui.heading("VibrantChats");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⚙").on_hover_text("Theme settings").clicked() {
                actions.open_settings = true;
            }
        });
    });
    ui.separator();

    ui.label(egui::RichText::new("Chats").strong());

    if state.chats().is_empty() {
        ui.label("No chats yet");
        return actions;
    }

    let now = Utc::now();
    let active_id = state.active_chat_id();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for chat in state.chats() {
                let is_active = active_id == Some(&chat.id);
                let frame = egui::Frame::new()
                    .inner_margin(egui::Margin::symmetric(8, 6))
                    .corner_radius(10)
                    .fill(if is_active {
                        ui.visuals().selection.bg_fill.gamma_multiply(0.15)
                    } else {
                        egui::Color32::TRANSPARENT
                    });

                let response = frame
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let mut avatar = format::initials(&chat.name);
                            if chat.is_group {
                                avatar.push_str(" 👥");
                            }
                            ui.label(egui::RichText::new(avatar).strong());

                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    ui.label(egui::RichText::new(&chat.name).strong());
                                    if let Some(last) = &chat.last_message {
                                        ui.label(
                                            egui::RichText::new(format::relative_time(
                                                last.timestamp,
                                                now,
                                            ))
                                            .weak()
                                            .small(),
                                        );
                                    }
                                });
                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new(format::last_message_preview(chat))
                                            .weak(),
                                    );
                                    if let Some(badge) = format::unread_badge(chat.unread_count) {
                                        ui.colored_label(
                                            ui.visuals().selection.bg_fill,
                                            egui::RichText::new(badge).strong(),
                                        );
                                    }
                                });
                            });
                        });
                    })
                    .response
                    .interact(egui::Sense::click());

                if response.clicked() {
                    actions.selected_chat = Some(chat.id.clone());
                }
            }
        });

    actions
}
