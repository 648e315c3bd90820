use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::ai::intent::detect_booking_intent;
use crate::services::ai::{ChatOptions, Message};
use crate::services::knowledge;
use crate::state::AppState;

const GENERAL_PROMPT: &str = "You are the friendly website assistant for Techbook ICT Services. \
Answer visitor questions using only the business context below. Keep replies short and helpful. \
If you don't know something, say so and point the visitor to our contact details.";

/// The eight fields a booking cannot be created without. The chat reply
/// always lists all of them, whatever extraction already picked up.
pub const REQUIRED_BOOKING_FIELDS: [&str; 8] = [
    "your name",
    "email",
    "phone number",
    "the service you need",
    "preferred date",
    "preferred time",
    "location type (home, office, or building)",
    "your address",
];

pub struct ChatOutcome {
    pub response: String,
    pub booking_created: Option<bool>,
}

/// Routes one chat turn: a recognized booking intent gets the guided-form
/// follow-up and never writes a record; anything else goes to the general
/// knowledge-grounded completion, whose reply is returned verbatim. Errors
/// from the general path propagate; the handler owns the user-safe fallback.
pub async fn process_chat(
    state: &Arc<AppState>,
    message: &str,
    history: &[Message],
) -> anyhow::Result<ChatOutcome> {
    let context = knowledge::company_context(&state.config);

    if let Some(intent) = detect_booking_intent(state.llm.as_ref(), history, message, &context).await
    {
        tracing::info!(
            service = ?intent.service,
            date = ?intent.date,
            time = ?intent.time,
            "booking intent detected in chat"
        );
        return Ok(ChatOutcome {
            response: booking_followup(),
            booking_created: Some(false),
        });
    }

    let mut messages: Vec<Message> = history.to_vec();
    messages.push(Message {
        role: "user".to_string(),
        content: message.to_string(),
    });
    let system = format!("{GENERAL_PROMPT}\n\nBusiness context:\n{context}");
    let response = state
        .llm
        .chat(&system, &messages, &ChatOptions::default())
        .await?;

    Ok(ChatOutcome {
        response,
        booking_created: None,
    })
}

fn booking_followup() -> String {
    let fields = REQUIRED_BOOKING_FIELDS
        .iter()
        .map(|f| format!("- {f}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Great, I'd love to help you book an appointment! To get you scheduled I'll need:\n{fields}\n\n\
         The quickest way is our booking form on the Book Appointment page, which walks you \
         through each step and shows the open time slots."
    )
}

/// Shown whenever the chat pipeline fails outright. The visitor never sees
/// a raw error.
pub fn fallback_message(config: &AppConfig) -> String {
    format!(
        "Sorry, I'm having trouble answering right now. Please reach us directly at {} or {} and we'll be glad to help.",
        config.contact_phone, config.contact_email
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_followup_lists_every_required_field() {
        let followup = booking_followup();
        for field in REQUIRED_BOOKING_FIELDS {
            assert!(followup.contains(field), "missing field: {field}");
        }
        assert!(followup.contains("booking form"));
    }
}
