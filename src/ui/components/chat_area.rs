use eframe::egui;

use crate::common::{Chat, Message, MessageId, MessageKind};
use crate::format;
use crate::store::MessengerState;

#[derive(Default)]
pub struct ThreadActions {
    pub toggle_pin: Option<MessageId>,
    pub delete: Option<MessageId>,
}

pub fn render_empty(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new("Select a chat to start messaging").weak());
    });
}

pub fn render_header(ui: &mut egui::Ui, chat: &Chat) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format::initials(&chat.name)).strong());
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&chat.name).strong());
            ui.label(egui::RichText::new(format::chat_subtitle(chat)).weak().small());
        });
    });
}

pub fn render(
    ui: &mut egui::Ui,
    state: &MessengerState,
    chat: &Chat,
    can_moderate: bool,
) -> ThreadActions {
    let mut actions = ThreadActions::default();
    let own_id = state.current_user().map(|user| &user.id);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let mut previous_sender = None;
            for message in state.chat_messages(&chat.id) {
                let is_own = own_id == Some(&message.sender_id);
                let show_avatar = !is_own && previous_sender != Some(&message.sender_id);
                previous_sender = Some(&message.sender_id);

                ui.horizontal(|ui| {
                    if show_avatar {
                        ui.label(egui::RichText::new(format::initials(&chat.name)).strong());
                    } else {
                        ui.add_space(24.0);
                    }
                    render_bubble(ui, message, is_own, can_moderate, &mut actions);
                });
                ui.add_space(6.0);
            }
        });

    actions
}

fn render_bubble(
    ui: &mut egui::Ui,
    message: &Message,
    is_own: bool,
    can_moderate: bool,
    actions: &mut ThreadActions,
) {
    let fill = if is_own {
        ui.visuals().selection.bg_fill.gamma_multiply(0.35)
    } else {
        ui.visuals().faint_bg_color
    };

    egui::Frame::new()
        .fill(fill)
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(12, 6))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                if message.pinned() {
                    ui.label(egui::RichText::new("📌 Pinned").small().weak());
                }

                match message.kind {
                    MessageKind::Text => {
                        ui.label(&message.content);
                    }
                    MessageKind::Image => {
                        if let Some(url) = &message.image_url {
                            ui.label(egui::RichText::new(format!("🖼 {url}")).italics());
                        }
                        if !message.content.is_empty() {
                            ui.label(&message.content);
                        }
                    }
                    MessageKind::Voice => {
                        ui.horizontal(|ui| {
                            ui.label("▶");
                            ui.label(format::voice_duration(message.duration));
                        });
                    }
                }

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format::clock_time(message.timestamp))
                            .weak()
                            .small(),
                    );
                    if can_moderate {
                        if ui.small_button("📌").on_hover_text("Pin").clicked() {
                            actions.toggle_pin = Some(message.id.clone());
                        }
                        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                            actions.delete = Some(message.id.clone());
                        }
                    }
                });
            });
        });
}
