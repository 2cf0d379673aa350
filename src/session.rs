//! Controller between the UI and the conversation store.
//!
//! Owns the store together with draft persistence and the voice recorder, and
//! implements the composer flows: draft restore on chat switch, draft save on
//! every edit, and sending text, images and voice notes.

use tokio::runtime::Handle;

use crate::common::{ChatId, MessageId, NewMessage, Role, UserId};
use crate::recording::VoiceRecorder;
use crate::storage::DraftStore;
use crate::store::ConversationStore;

pub const IMAGE_CONTENT: &str = "Image";
pub const VOICE_CONTENT: &str = "Voice message";

pub struct MessengerSession {
    store: ConversationStore,
    drafts: Box<dyn DraftStore>,
    recorder: VoiceRecorder,
}

impl MessengerSession {
    pub fn new(store: ConversationStore, drafts: Box<dyn DraftStore>) -> Self {
        Self {
            store,
            drafts,
            recorder: VoiceRecorder::new(),
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConversationStore {
        &mut self.store
    }

    pub fn recorder(&self) -> &VoiceRecorder {
        &self.recorder
    }

    /// Pin/delete actions are reserved for admins.
    pub fn can_moderate(&self) -> bool {
        self.store
            .state()
            .current_user()
            .is_some_and(|user| user.role == Role::Admin)
    }

    /// Switches the active chat and restores its saved draft.
    pub fn select_chat(&mut self, chat_id: Option<ChatId>) {
        if let Some(id) = &chat_id {
            if self.store.state().chat(id).is_none() {
                log::debug!("select: no chat {id}");
                return;
            }
        }

        self.store.set_active_chat(chat_id.clone());

        if let Some(id) = chat_id {
            let saved = match self.drafts.load(&id) {
                Ok(saved) => saved.unwrap_or_default(),
                Err(err) => {
                    log::warn!("Failed to load draft for {id}: {err}");
                    String::new()
                }
            };
            self.store.set_message_draft(saved);
        }
    }

    /// Replaces the draft and persists it for the active chat.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(id) = self.store.state().active_chat_id().cloned() {
            if let Err(err) = self.drafts.save(&id, &text) {
                log::warn!("Failed to save draft for {id}: {err}");
            }
        }
        self.store.set_message_draft(text);
    }

    fn sender_and_chat(&self) -> Option<(UserId, ChatId)> {
        let state = self.store.state();
        let chat_id = state.active_chat_id()?.clone();
        let user_id = state.current_user()?.id.clone();
        Some((user_id, chat_id))
    }

    /// Sends the trimmed draft as a text message, then clears it.
    pub fn send_text(&mut self) -> Option<MessageId> {
        let content = self.store.state().message_draft().trim().to_string();
        if content.is_empty() {
            return None;
        }
        let (sender_id, chat_id) = self.sender_and_chat()?;

        let id = self
            .store
            .add_message(NewMessage::text(content, sender_id, chat_id.clone()))?;

        self.store.set_message_draft(String::new());
        if let Err(err) = self.drafts.remove(&chat_id) {
            log::warn!("Failed to clear draft for {chat_id}: {err}");
        }
        Some(id)
    }

    /// Sends an image attachment referenced by a local path or object URL.
    pub fn send_image(&mut self, reference: impl Into<String>) -> Option<MessageId> {
        let (sender_id, chat_id) = self.sender_and_chat()?;
        self.store.add_message(NewMessage::image(
            IMAGE_CONTENT,
            reference,
            sender_id,
            chat_id,
        ))
    }

    pub fn start_recording(&mut self) -> bool {
        if self.recorder.is_recording() {
            return false;
        }
        match Handle::try_current() {
            Ok(runtime) => self.recorder.start(&runtime),
            Err(err) => {
                log::warn!("Cannot start recording without a runtime: {err}");
                false
            }
        }
    }

    /// Stops recording and sends a voice note with the elapsed duration.
    pub fn stop_recording(&mut self) -> Option<MessageId> {
        let seconds = self.recorder.stop()?;
        let (sender_id, chat_id) = self.sender_and_chat()?;
        self.store.add_message(NewMessage::voice(
            VOICE_CONTENT,
            seconds,
            sender_id,
            chat_id,
        ))
    }
}
