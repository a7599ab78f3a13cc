// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the suggest -> send -> report pipeline.
//!
//! Each test loads settings, lets the suggester pick a model, sends the
//! conversation through the adapter over a mock stream and checks the
//! reported spend. Tests are independent and order-insensitive.

use selfhost_config::{load_and_validate_path, load_and_validate_str, save_config_to_path};
use selfhost_core::{ChatMessage, ChatStatus, ModelId, TokenUsage};
use selfhost_cost::{calculate_cost, lookup_max_tokens};
use selfhost_openai::OpenAiAdapter;
use selfhost_router::suggest_model_from_message;
use selfhost_test_utils::{MockChatStream, MockOutcome};

fn conversation(system: &str, user: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

// ---- Suggested model flows through the adapter ----

#[tokio::test]
async fn suggested_model_is_sent_and_priced() {
    let config = load_and_validate_str(
        r#"
[settings]
api_key = "sk-e2e"
"#,
    )
    .unwrap();

    let prompt = "Summarize the meeting notes";
    let model = suggest_model_from_message(prompt, true);
    assert_eq!(model, ModelId::Gpt35Turbo);

    let usage = TokenUsage {
        input_tokens: 2_000,
        output_tokens: 300,
    };
    let mock = MockChatStream::with_outcomes(vec![MockOutcome::Reply {
        chunks: vec!["Notes: ".into(), "ship it.".into()],
        usage: Some(usage),
    }]);
    let adapter = OpenAiAdapter::from_config(&config, mock.clone());

    let report = adapter
        .send_chat_request_with_report(
            model.as_str(),
            &conversation(&config.settings.system_message, prompt),
            None,
        )
        .await;

    assert_eq!(report.response.status, ChatStatus::Ok);
    assert_eq!(report.response.data, "Notes: ship it.");
    assert_eq!(report.usage, Some(usage));
    assert_eq!(report.cost_usd, calculate_cost(model.as_str(), 2_000, 300));
    assert!(!report.over_context_limit);

    let calls = mock.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].api_key, "sk-e2e");
    assert_eq!(calls[0].request.model, "gpt-3.5-turbo");
    assert_eq!(calls[0].request.messages[0].content, config.settings.system_message);
}

// ---- Failures surface as displayable responses ----

#[tokio::test]
async fn missing_key_request_fails_gracefully() {
    let config = load_and_validate_str("").unwrap();
    assert!(config.settings.api_key.is_none());

    let mock = MockChatStream::with_outcomes(vec![MockOutcome::Fail(
        "Incorrect API key provided".into(),
    )]);
    let adapter = OpenAiAdapter::from_config(&config, mock.clone());
    assert!(!adapter.has_api_key());

    let response = adapter
        .send_chat_request("gpt-4o", &conversation("Be brief.", "hi"), None)
        .await;

    assert_eq!(response.status, ChatStatus::Error);
    assert_eq!(response.data, "Incorrect API key provided");
    assert_eq!(mock.calls().await[0].api_key, "");
}

// ---- Context overflow across a multi-turn conversation ----

#[tokio::test]
async fn long_conversation_overflows_small_window() {
    let mock = MockChatStream::with_outcomes(vec![MockOutcome::words("ok")]);
    let adapter = OpenAiAdapter::new(Some("sk".into()), mock);

    let filler = "lorem ipsum dolor sit amet ".repeat(1_000);
    let mut messages = vec![ChatMessage::system("Be brief.")];
    for _ in 0..3 {
        messages.push(ChatMessage::user(filler.clone()));
        messages.push(ChatMessage::assistant("noted"));
    }

    let report = adapter
        .send_chat_request_with_report("gpt-4", &messages, None)
        .await;

    let max = lookup_max_tokens("gpt-4").unwrap();
    let total = report.usage.unwrap().total();
    assert!(report.estimated);
    assert!(total > max, "{total} tokens should exceed {max}");
    assert!(report.over_context_limit);
}

// ---- Settings round trip feeds the adapter ----

#[tokio::test]
async fn saved_settings_drive_next_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selfhost.toml");

    let mut config = load_and_validate_str("").unwrap();
    config.settings.set_api_key("sk-saved");
    config.settings.set_model(ModelId::Gpt41Nano);
    config.settings.set_system_message("Reply in one sentence.");
    save_config_to_path(&config, &path).unwrap();

    let reloaded = load_and_validate_path(&path).unwrap();
    let mock = MockChatStream::new();
    let adapter = OpenAiAdapter::from_config(&reloaded, mock.clone());

    let response = adapter
        .send_chat_request(
            reloaded.settings.model.as_str(),
            &conversation(&reloaded.settings.system_message, "hello"),
            None,
        )
        .await;

    assert!(response.is_ok());
    let calls = mock.calls().await;
    assert_eq!(calls[0].api_key, "sk-saved");
    assert_eq!(calls[0].request.model, "gpt-4.1-nano");
    assert_eq!(calls[0].request.messages[0].content, "Reply in one sentence.");
}
