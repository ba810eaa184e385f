use chrono_chat::{
    telemetry::init_tracing, ChatError, ConversationStore, MessageMetadata, StoreConfig,
};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(tracing::Level::INFO);

    let mut config = StoreConfig::from_env()?;
    if config.system_message.is_none() {
        config.system_message = Some("You are a helpful assistant.".to_string());
    }
    let config = config.with_span(tracing::info_span!("chat_session", session = "demo"));

    info!(max_history_size = config.max_history_size, "Starting chat demo");

    let store = ConversationStore::with_config(config);
    store.register_role("tool")?;

    store.add_user_message("What's the weather in Tokyo?", MessageMetadata::default())?;
    store.add_assistant_message(
        "Let me check the forecast.",
        MessageMetadata::new()
            .with_agent("weather-agent", "Forecaster")
            .with_model("llama3.2")
            .with_vendor("ollama"),
    )?;
    store.add_custom_message("tool", r#"{"city":"Tokyo","temp_c":18}"#, MessageMetadata::default())?;
    store.add_assistant_message("It is 18°C in Tokyo right now.", MessageMetadata::default())?;

    if let Err(e) = store.add_custom_message("narrator", "Meanwhile...", MessageMetadata::default()) {
        match e {
            ChatError::RoleNotRegistered(_) => warn!("{}", e),
            other => return Err(other.into()),
        }
    }

    let body = store.get_messages_for_api_json(None)?;

    println!("\n=== REQUEST MESSAGES ===");
    println!("{}", serde_json::to_string_pretty(&body)?);

    if let Some(last) = store.get_last_message() {
        println!("\nLast message at {}: {}", last.timestamp_rfc3339(), last.content());
    }

    Ok(())
}
