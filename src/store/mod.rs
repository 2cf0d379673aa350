//! In-process conversation store.
//!
//! Holds chats, messages, the active selection, the current user, the theme
//! choice and the composer draft. Every mutator runs to completion on the
//! caller's thread and then notifies registered listeners in registration
//! order.

pub mod seed;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{
    Chat, ChatId, ColorPalette, Message, MessageId, NewMessage, StoreChange, ThemeMode, User,
};

/// Plain data held by [`ConversationStore`], readable by listeners and the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessengerState {
    pub color_palette: ColorPalette,
    pub theme_mode: ThemeMode,
    pub current_user: Option<User>,
    pub chats: Vec<Chat>,
    pub active_chat: Option<ChatId>,
    pub messages: Vec<Message>,
    pub message_draft: String,
}

impl MessengerState {
    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn chat(&self, chat_id: &ChatId) -> Option<&Chat> {
        self.chats.iter().find(|chat| &chat.id == chat_id)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, message_id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|message| &message.id == message_id)
    }

    /// Messages of one chat in insertion order.
    pub fn chat_messages<'a>(
        &'a self,
        chat_id: &ChatId,
    ) -> impl Iterator<Item = &'a Message> + use<'a> {
        let chat_id = chat_id.clone();
        self.messages
            .iter()
            .filter(move |message| message.chat_id == chat_id)
    }

    pub fn pinned_messages<'a>(
        &'a self,
        chat_id: &ChatId,
    ) -> impl Iterator<Item = &'a Message> + use<'a> {
        self.chat_messages(chat_id).filter(|message| message.pinned())
    }

    pub fn active_chat_id(&self) -> Option<&ChatId> {
        self.active_chat.as_ref()
    }

    pub fn active_chat(&self) -> Option<&Chat> {
        self.active_chat.as_ref().and_then(|chat_id| self.chat(chat_id))
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn message_draft(&self) -> &str {
        &self.message_draft
    }

    pub fn color_palette(&self) -> ColorPalette {
        self.color_palette
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn total_unread(&self) -> u32 {
        self.chats.iter().map(|chat| chat.unread_count).sum()
    }
}

type Listener = Box<dyn FnMut(&StoreChange, &MessengerState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owned, injectable conversation store.
pub struct ConversationStore {
    state: MessengerState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(MessengerState::default())
    }
}

impl ConversationStore {
    pub fn new(state: MessengerState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store preloaded with the demo conversations.
    pub fn seeded() -> Self {
        Self::new(seed::seed_state())
    }

    pub fn state(&self) -> &MessengerState {
        &self.state
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange, &MessengerState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn publish(&mut self, change: StoreChange) {
        log::debug!("store change: {change:?}");
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change, &self.state);
        }
    }

    pub fn set_color_palette(&mut self, palette: ColorPalette) {
        self.state.color_palette = palette;
        self.publish(StoreChange::ColorPaletteChanged(palette));
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.state.theme_mode = mode;
        self.publish(StoreChange::ThemeModeChanged(mode));
    }

    pub fn set_current_user(&mut self, user: User) {
        let user_id = user.id.clone();
        self.state.current_user = Some(user);
        self.publish(StoreChange::CurrentUserChanged(user_id));
    }

    /// Selects a chat, or deselects with `None`. Unread counts are left alone.
    pub fn set_active_chat(&mut self, chat_id: Option<ChatId>) {
        if let Some(id) = &chat_id {
            if self.state.chat(id).is_none() {
                log::debug!("ignoring selection of unknown chat {id}");
                return;
            }
        }
        self.state.active_chat = chat_id.clone();
        self.publish(StoreChange::ActiveChatChanged(chat_id));
    }

    /// Appends a message and makes it the owning chat's last message.
    ///
    /// Returns the assigned id, or `None` when the chat does not exist.
    pub fn add_message(&mut self, draft: NewMessage) -> Option<MessageId> {
        let Some(chat_index) = self
            .state
            .chats
            .iter()
            .position(|chat| chat.id == draft.chat_id)
        else {
            log::debug!("dropping message for unknown chat {}", draft.chat_id);
            return None;
        };

        let id = MessageId::new(format!("msg-{}", Uuid::now_v7()));
        let message = draft.into_message(id.clone(), Utc::now());
        let chat_id = message.chat_id.clone();

        self.state.chats[chat_index].last_message = Some(message.clone());
        self.state.messages.push(message);

        self.publish(StoreChange::MessageAdded {
            chat_id,
            message_id: id.clone(),
        });
        Some(id)
    }

    /// Replaces the in-memory draft. Persistence is the caller's job.
    pub fn set_message_draft(&mut self, draft: impl Into<String>) {
        self.state.message_draft = draft.into();
        self.publish(StoreChange::DraftChanged);
    }

    /// Removes one message. The owning chat's cached last message is not
    /// recomputed and may keep pointing at the deleted message.
    pub fn delete_message(&mut self, message_id: &MessageId) -> bool {
        let Some(index) = self
            .state
            .messages
            .iter()
            .position(|message| &message.id == message_id)
        else {
            log::debug!("delete: no message {message_id}");
            return false;
        };

        self.state.messages.remove(index);
        self.publish(StoreChange::MessageDeleted(message_id.clone()));
        true
    }

    pub fn pin_message(&mut self, message_id: &MessageId) -> bool {
        let Some(message) = self
            .state
            .messages
            .iter_mut()
            .find(|message| &message.id == message_id)
        else {
            log::debug!("pin: no message {message_id}");
            return false;
        };

        let pinned = !message.pinned();
        message.is_pinned = Some(pinned);
        self.publish(StoreChange::MessagePinToggled {
            message_id: message_id.clone(),
            pinned,
        });
        true
    }

    pub fn update_unread_count(&mut self, chat_id: &ChatId, count: u32) {
        let Some(chat) = self.state.chats.iter_mut().find(|chat| &chat.id == chat_id) else {
            log::debug!("unread: no chat {chat_id}");
            return;
        };

        chat.unread_count = count;
        self.publish(StoreChange::UnreadCountChanged {
            chat_id: chat_id.clone(),
            count,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use super::*;
    use crate::common::{MessageKind, Role};

    fn chat_id(raw: &str) -> ChatId {
        ChatId::from(raw)
    }

    fn text(content: &str, chat: &str) -> NewMessage {
        NewMessage::text(content, "user-1".into(), chat.into())
    }

    #[test]
    fn seed_starts_without_selection() {
        let store = ConversationStore::seeded();
        let state = store.state();
        assert_eq!(state.chats().len(), 3);
        assert_eq!(state.messages().len(), 3);
        assert!(state.active_chat().is_none());
        assert_eq!(state.message_draft(), "");
        assert_eq!(state.color_palette(), ColorPalette::Blue);
        assert_eq!(state.theme_mode(), ThemeMode::Light);
        assert_eq!(state.total_unread(), 7);
    }

    #[test]
    fn add_message_updates_last_message() {
        let mut store = ConversationStore::seeded();
        let before = store.state().messages().len();

        let id = store.add_message(text("hi", "chat-1")).unwrap();

        let state = store.state();
        assert_eq!(state.messages().len(), before + 1);
        let added = state.message(&id).unwrap();
        assert_eq!(added.chat_id, "chat-1");
        assert_eq!(added.kind, MessageKind::Text);
        let chat = state.chat(&chat_id("chat-1")).unwrap();
        assert_eq!(chat.last_message.as_ref().unwrap().content, "hi");
    }

    #[test]
    fn last_message_tracks_every_append() {
        let mut store = ConversationStore::seeded();
        for (index, chat) in ["chat-2", "chat-1", "chat-2", "chat-3", "chat-2"]
            .into_iter()
            .enumerate()
        {
            let id = store.add_message(text(&format!("m{index}"), chat)).unwrap();
            let state = store.state();
            let last = state.chat(&chat_id(chat)).unwrap().last_message.as_ref();
            assert_eq!(last, state.message(&id));
            assert_eq!(state.chat_messages(&chat_id(chat)).last().map(|m| &m.id), Some(&id));
        }
    }

    #[test]
    fn message_ids_never_collide() {
        let mut store = ConversationStore::seeded();
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let id = store.add_message(text("burst", "chat-1")).unwrap();
            assert!(seen.insert(id));
        }
        let all: HashSet<_> = store.state().messages().iter().map(|m| &m.id).collect();
        assert_eq!(all.len(), store.state().messages().len());
    }

    #[test]
    fn add_message_to_unknown_chat_is_ignored() {
        let mut store = ConversationStore::seeded();
        let before = store.state().clone();
        assert!(store.add_message(text("lost", "chat-404")).is_none());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_stale_last_message() {
        let mut store = ConversationStore::seeded();
        let id = store.add_message(text("to delete", "chat-1")).unwrap();
        let before = store.state().clone();

        assert!(store.delete_message(&id));

        let state = store.state();
        assert_eq!(state.messages().len(), before.messages().len() - 1);
        assert!(state.message(&id).is_none());
        let expected: Vec<_> = before.messages().iter().filter(|m| m.id != id).collect();
        let actual: Vec<_> = state.messages().iter().collect();
        assert_eq!(actual, expected);
        // Known gap: the cached last message still refers to the deleted one.
        assert_eq!(state.chats(), before.chats());
        assert_eq!(
            state.chat(&chat_id("chat-1")).unwrap().last_message.as_ref().unwrap().id,
            id
        );
    }

    #[test]
    fn delete_unknown_message_is_noop() {
        let mut store = ConversationStore::seeded();
        let before = store.state().clone();
        assert!(!store.delete_message(&MessageId::from("msg-missing")));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn pin_twice_restores_flag() {
        let mut store = ConversationStore::seeded();
        let id = MessageId::from("msg-demo-2");
        assert!(!store.state().message(&id).unwrap().pinned());

        assert!(store.pin_message(&id));
        assert!(store.state().message(&id).unwrap().pinned());
        assert_eq!(store.state().pinned_messages(&chat_id("chat-1")).count(), 1);

        assert!(store.pin_message(&id));
        assert!(!store.state().message(&id).unwrap().pinned());
        assert!(!store.pin_message(&MessageId::from("msg-missing")));
    }

    #[test]
    fn unread_count_touches_only_target_chat() {
        let mut store = ConversationStore::seeded();
        store.update_unread_count(&chat_id("chat-2"), 0);

        let counts: Vec<_> = store
            .state()
            .chats()
            .iter()
            .map(|chat| (chat.id.to_string(), chat.unread_count))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("chat-1".to_string(), 2),
                ("chat-2".to_string(), 0),
                ("chat-3".to_string(), 0)
            ]
        );
    }

    #[test]
    fn selecting_chat_keeps_unread_count() {
        let mut store = ConversationStore::seeded();
        store.set_active_chat(Some(chat_id("chat-2")));
        let active = store.state().active_chat().unwrap();
        assert_eq!(active.id, "chat-2");
        assert_eq!(active.unread_count, 5);

        store.set_active_chat(None);
        assert!(store.state().active_chat_id().is_none());
    }

    #[test]
    fn selecting_unknown_chat_keeps_previous_selection() {
        let mut store = ConversationStore::seeded();
        store.set_active_chat(Some(chat_id("chat-1")));
        store.set_active_chat(Some(chat_id("chat-9")));
        assert_eq!(store.state().active_chat_id(), Some(&chat_id("chat-1")));
    }

    #[test]
    fn plain_setters_store_last_value() {
        let mut store = ConversationStore::default();
        store.set_color_palette(ColorPalette::Orange);
        store.set_color_palette(ColorPalette::Purple);
        store.set_theme_mode(ThemeMode::Dark);
        store.set_message_draft("draft");

        let mut admin = seed::default_user();
        admin.role = Role::Admin;
        store.set_current_user(admin.clone());

        let state = store.state();
        assert_eq!(state.color_palette(), ColorPalette::Purple);
        assert_eq!(state.theme_mode(), ThemeMode::Dark);
        assert_eq!(state.message_draft(), "draft");
        assert_eq!(state.current_user(), Some(&admin));
    }

    #[test]
    fn listeners_see_changes_until_unsubscribed() {
        let mut store = ConversationStore::seeded();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = store.subscribe(move |change, state| {
            sink.borrow_mut().push((change.clone(), state.messages().len()));
        });

        let id = store.add_message(text("hi", "chat-3")).unwrap();
        store.update_unread_count(&chat_id("chat-3"), 1);
        assert!(store.unsubscribe(subscription));
        store.set_theme_mode(ThemeMode::Dark);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0],
            (
                StoreChange::MessageAdded {
                    chat_id: chat_id("chat-3"),
                    message_id: id
                },
                4
            )
        );
        assert!(!store.unsubscribe(subscription));
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let mut store = ConversationStore::seeded();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let mut subscriptions = Vec::new();
        for name in ["first", "second", "third"] {
            let sink = Rc::clone(&calls);
            subscriptions.push(store.subscribe(move |change, _state| {
                sink.borrow_mut().push((name, change.clone()));
            }));
        }

        store.update_unread_count(&chat_id("chat-1"), 9);
        let unread = StoreChange::UnreadCountChanged {
            chat_id: chat_id("chat-1"),
            count: 9,
        };
        assert_eq!(
            calls.borrow_mut().drain(..).collect::<Vec<_>>(),
            vec![
                ("first", unread.clone()),
                ("second", unread.clone()),
                ("third", unread)
            ]
        );

        assert!(store.unsubscribe(subscriptions[1]));
        store.set_theme_mode(ThemeMode::Dark);
        let dark = StoreChange::ThemeModeChanged(ThemeMode::Dark);
        assert_eq!(
            *calls.borrow(),
            vec![("first", dark.clone()), ("third", dark)]
        );
    }
}
