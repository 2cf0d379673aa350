pub mod events;
pub mod types;

pub use events::StoreChange;
pub use types::{
    Chat, ChatId, ColorPalette, Message, MessageId, MessageKind, NewMessage, Role, ThemeMode,
    User, UserId,
};
