use super::types::{ChatId, ColorPalette, MessageId, ThemeMode, UserId};

/// Notification published to store listeners after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChange {
    ColorPaletteChanged(ColorPalette),
    ThemeModeChanged(ThemeMode),
    CurrentUserChanged(UserId),
    ActiveChatChanged(Option<ChatId>),
    MessageAdded {
        chat_id: ChatId,
        message_id: MessageId,
    },
    DraftChanged,
    MessageDeleted(MessageId),
    MessagePinToggled {
        message_id: MessageId,
        pinned: bool,
    },
    UnreadCountChanged {
        chat_id: ChatId,
        count: u32,
    },
}
