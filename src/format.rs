//! Display strings shared by the sidebar, thread and composer.

use chrono::{DateTime, Local, Utc};

use crate::common::Chat;

/// Chat list timestamp: "just now", "12 min", "3 h", or `dd.mm` for older.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let hours = elapsed.num_hours();

    if hours < 1 {
        let minutes = elapsed.num_minutes();
        return if minutes < 1 {
            "just now".to_string()
        } else {
            format!("{minutes} min")
        };
    }

    if hours < 24 {
        return format!("{hours} h");
    }

    timestamp.with_timezone(&Local).format("%d.%m").to_string()
}

pub fn clock_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

/// Recording banner timer, `m:ss`.
pub fn recording_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn unread_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        100.. => Some("99+".to_string()),
        n => Some(n.to_string()),
    }
}

/// Up to two initials taken from the words of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

pub fn chat_subtitle(chat: &Chat) -> String {
    if chat.is_group {
        format!("{} participants", chat.participants.len())
    } else {
        "online".to_string()
    }
}

pub fn voice_duration(duration: Option<u64>) -> String {
    match duration {
        Some(seconds) if seconds > 0 => format!("{seconds}s"),
        _ => "0:15".to_string(),
    }
}

pub fn last_message_preview(chat: &Chat) -> &str {
    match &chat.last_message {
        Some(message) if !message.content.is_empty() => &message.content,
        _ => "No messages",
    }
}
