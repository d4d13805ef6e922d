//! End-to-end chat console flows against the scripted backend.

use application::chat_service::ChatService;
use domain::models::{Message, Role, CHAT_FALLBACK, GREETING};
use tests::{Call, ScriptedBackend};

#[tokio::test]
async fn install_question_scenario() {
    let backend = ScriptedBackend::replying("Run `pip install ecomet`.");
    let mut chat = ChatService::new(backend);

    chat.send_message("How do I install eCOMET?").await;

    assert_eq!(
        chat.session().messages(),
        &[
            Message::bot(GREETING),
            Message::user("How do I install eCOMET?"),
            Message::bot("Run `pip install ecomet`."),
        ]
    );
    assert_eq!(
        chat.backend().calls(),
        vec![Call::Chat("How do I install eCOMET?".to_string())]
    );
}

#[tokio::test]
async fn unreachable_backend_ends_with_fallback_turn() {
    let mut chat = ChatService::new(ScriptedBackend::unreachable());

    chat.send_message("anyone there?").await;

    let last = chat.session().messages().last().cloned();
    assert_eq!(last, Some(Message::bot(CHAT_FALLBACK)));
    assert!(!chat.session().is_loading());
}

#[tokio::test]
async fn server_error_is_treated_like_transport_failure() {
    // No canned reply: the backend answers 500.
    let mut chat = ChatService::new(ScriptedBackend::new());

    chat.send_message("q").await;

    assert_eq!(chat.session().messages().len(), 3);
    assert_eq!(chat.session().messages()[2].content, CHAT_FALLBACK);
}

#[tokio::test]
async fn blank_input_never_reaches_backend() {
    let mut chat = ChatService::new(ScriptedBackend::replying("unused"));

    assert!(chat.send_message("").await.is_none());
    assert!(chat.send_message("   ").await.is_none());

    assert_eq!(chat.session().messages().len(), 1);
    assert!(chat.backend().calls().is_empty());
}

#[tokio::test]
async fn each_message_adds_exactly_one_user_and_one_bot_turn() {
    let mut chat = ChatService::new(ScriptedBackend::replying("answer"));

    for question in ["a", "b", "c"] {
        let before = chat.session().messages().len();
        chat.send_message(question).await;
        let added = &chat.session().messages()[before..];
        assert_eq!(added.len(), 2);
        assert_eq!(added[0], Message::user(question));
        assert_eq!(added[1].role, Role::Bot);
    }
    assert_eq!(chat.backend().count(|c| matches!(c, Call::Chat(_))), 3);
}

#[tokio::test]
async fn failure_does_not_poison_later_requests() {
    let mut chat = ChatService::new(ScriptedBackend::new());
    chat.send_message("first").await;

    let mut chat = ChatService::with_session(
        ScriptedBackend::replying("recovered"),
        chat.session().clone(),
    );
    chat.send_message("second").await;

    let contents: Vec<_> = chat
        .session()
        .messages()
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(
        contents,
        vec![GREETING, "first", CHAT_FALLBACK, "second", "recovered"]
    );
}

#[tokio::test]
async fn health_check_passes_through() {
    let chat = ChatService::new(ScriptedBackend::new());
    assert!(chat.check_health().await.is_ok());

    let chat = ChatService::new(ScriptedBackend::unreachable());
    assert!(chat.check_health().await.is_err());
}
