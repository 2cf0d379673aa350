use chrono::{Duration, Utc};

use crate::common::{Chat, ColorPalette, Message, MessageKind, Role, ThemeMode, User};

use super::MessengerState;

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

fn seed_message(id: &str, content: &str, sender: &str, chat: &str, minutes_ago: i64) -> Message {
    Message {
        id: id.into(),
        content: content.to_string(),
        sender_id: sender.into(),
        chat_id: chat.into(),
        timestamp: Utc::now() - Duration::minutes(minutes_ago),
        kind: MessageKind::Text,
        image_url: None,
        voice_url: None,
        duration: None,
        is_pinned: None,
    }
}

fn seed_chat(id: &str, name: &str, unread_count: u32, is_group: bool, last: Message) -> Chat {
    Chat {
        id: id.into(),
        name: name.to_string(),
        avatar: PLACEHOLDER_AVATAR.to_string(),
        participants: Vec::new(),
        last_message: Some(last),
        unread_count,
        is_group,
    }
}

pub fn default_user() -> User {
    User {
        id: "user-1".into(),
        name: "You".to_string(),
        avatar: PLACEHOLDER_AVATAR.to_string(),
        role: Role::User,
        is_online: true,
        last_seen: None,
    }
}

/// Demo conversations loaded at startup.
pub fn seed_state() -> MessengerState {
    let chats = vec![
        seed_chat(
            "chat-1",
            "Alice Petrova",
            2,
            false,
            seed_message("msg-1", "Hi! How are you?", "user-2", "chat-1", 5),
        ),
        seed_chat(
            "chat-2",
            "Dev Team",
            5,
            true,
            seed_message("msg-2", "Great work!", "user-3", "chat-2", 15),
        ),
        seed_chat(
            "chat-3",
            "Mikhail Ivanov",
            0,
            false,
            seed_message("msg-3", "See you tomorrow", "user-1", "chat-3", 120),
        ),
    ];

    let messages = vec![
        seed_message("msg-demo-1", "Hi! How are you?", "user-2", "chat-1", 10),
        seed_message(
            "msg-demo-2",
            "All good! Working on a new project",
            "user-1",
            "chat-1",
            8,
        ),
        seed_message(
            "msg-demo-3",
            "Sounds interesting! Tell me more?",
            "user-2",
            "chat-1",
            5,
        ),
    ];

    MessengerState {
        color_palette: ColorPalette::default(),
        theme_mode: ThemeMode::default(),
        current_user: Some(default_user()),
        chats,
        active_chat: None,
        messages,
        message_draft: String::new(),
    }
}
