use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declares a string-backed identifier newtype.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(UserId);
define_id!(ChatId);
define_id!(MessageId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// A participant. Only the current user is ever replaced at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
    pub role: Role,
    pub is_online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Voice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender_id: UserId,
    pub chat_id: ChatId,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_url: Option<String>,
    /// Recording length in seconds, voice messages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
}

impl Message {
    pub fn pinned(&self) -> bool {
        self.is_pinned.unwrap_or(false)
    }
}

/// A message as composed by the user, before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub content: String,
    pub sender_id: UserId,
    pub chat_id: ChatId,
    pub kind: MessageKind,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub voice_url: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub is_pinned: Option<bool>,
}

impl NewMessage {
    fn base(
        kind: MessageKind,
        content: impl Into<String>,
        sender_id: UserId,
        chat_id: ChatId,
    ) -> Self {
        Self {
            content: content.into(),
            sender_id,
            chat_id,
            kind,
            image_url: None,
            voice_url: None,
            duration: None,
            is_pinned: None,
        }
    }

    pub fn text(content: impl Into<String>, sender_id: UserId, chat_id: ChatId) -> Self {
        Self::base(MessageKind::Text, content, sender_id, chat_id)
    }

    pub fn image(
        content: impl Into<String>,
        image_url: impl Into<String>,
        sender_id: UserId,
        chat_id: ChatId,
    ) -> Self {
        Self {
            image_url: Some(image_url.into()),
            ..Self::base(MessageKind::Image, content, sender_id, chat_id)
        }
    }

    pub fn voice(
        content: impl Into<String>,
        duration: u64,
        sender_id: UserId,
        chat_id: ChatId,
    ) -> Self {
        Self {
            duration: Some(duration),
            ..Self::base(MessageKind::Voice, content, sender_id, chat_id)
        }
    }

    pub(crate) fn into_message(self, id: MessageId, timestamp: DateTime<Utc>) -> Message {
        Message {
            id,
            content: self.content,
            sender_id: self.sender_id,
            chat_id: self.chat_id,
            timestamp,
            kind: self.kind,
            image_url: self.image_url,
            voice_url: self.voice_url,
            duration: self.duration,
            is_pinned: self.is_pinned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub name: String,
    pub avatar: String,
    pub participants: Vec<User>,
    /// Denormalized copy of the newest message appended to this chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
    pub unread_count: u32,
    pub is_group: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPalette {
    #[default]
    Blue,
    Orange,
    Purple,
}

impl ColorPalette {
    pub const ALL: [ColorPalette; 3] = [Self::Blue, Self::Orange, Self::Purple];

    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
        }
    }

    /// Primary accent colour as RGB.
    pub fn primary_rgb(self) -> [u8; 3] {
        match self {
            Self::Blue => [0x1D, 0x4E, 0xD8],
            Self::Orange => [0xF9, 0x73, 0x16],
            Self::Purple => [0x8B, 0x5C, 0xF6],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
