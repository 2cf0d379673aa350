use vibrant_chat::common::{ChatId, MessageKind, NewMessage};
use vibrant_chat::session::MessengerSession;
use vibrant_chat::storage::{DraftStore, SqliteDraftStore, draft_key};
use vibrant_chat::store::ConversationStore;

fn chat(raw: &str) -> ChatId {
    ChatId::from(raw)
}

#[test]
fn sending_hi_to_seeded_chat() {
    let mut store = ConversationStore::seeded();
    let before = store.state().messages().len();

    store.add_message(NewMessage::text("hi", "user-1".into(), chat("chat-1")));

    let state = store.state();
    assert_eq!(state.messages().len(), before + 1);
    let added = state.messages().last().unwrap();
    assert_eq!(added.chat_id, "chat-1");
    assert_eq!(added.kind, MessageKind::Text);
    let last = state.chat(&chat("chat-1")).unwrap().last_message.as_ref().unwrap();
    assert_eq!(last.content, "hi");
    assert_eq!(last, added);
}

#[test]
fn clearing_unread_on_one_chat() {
    let mut store = ConversationStore::seeded();
    let before: Vec<_> = store.state().chats().to_vec();

    store.update_unread_count(&chat("chat-2"), 0);

    for (old, new) in before.iter().zip(store.state().chats()) {
        if new.id == "chat-2" {
            assert_eq!(new.unread_count, 0);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn drafts_survive_switching_and_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("drafts.db");

    {
        let drafts = SqliteDraftStore::with_path(&db_path).unwrap();
        let mut session = MessengerSession::new(ConversationStore::seeded(), Box::new(drafts));

        session.select_chat(Some(chat("chat-1")));
        session.edit_draft("see you at");
        session.select_chat(Some(chat("chat-3")));
        session.edit_draft("thanks!");
        session.send_text().unwrap();

        session.select_chat(Some(chat("chat-1")));
        assert_eq!(session.store().state().message_draft(), "see you at");
    }

    let drafts = SqliteDraftStore::with_path(&db_path).unwrap();
    assert_eq!(
        drafts.load(&chat("chat-1")).unwrap().as_deref(),
        Some("see you at")
    );
    assert_eq!(drafts.load(&chat("chat-3")).unwrap(), None);
    assert_eq!(drafts.count().unwrap(), 1);
    assert_eq!(draft_key(&chat("chat-1")), "draft-chat-1");
}

#[test]
fn deleting_latest_message_leaves_cached_preview() {
    let mut store = ConversationStore::seeded();
    let first = store
        .add_message(NewMessage::text("first", "user-1".into(), chat("chat-2")))
        .unwrap();
    let second = store
        .add_message(NewMessage::text("second", "user-1".into(), chat("chat-2")))
        .unwrap();

    store.delete_message(&second);

    let state = store.state();
    let remaining: Vec<_> = state.chat_messages(&chat("chat-2")).map(|m| &m.id).collect();
    assert_eq!(remaining, vec![&first]);
    // The cached preview is not repaired on delete.
    let cached = state.chat(&chat("chat-2")).unwrap().last_message.as_ref().unwrap();
    assert_eq!(cached.id, second);
}
