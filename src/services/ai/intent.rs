use crate::models::{BookingIntent, ExtractedBooking};
use crate::services::ai::{ChatOptions, LlmProvider, Message};

const SYSTEM_PROMPT: &str = r#"You are a booking-intent classifier for an ICT services company's website chat. Analyze the visitor's latest message in context of the conversation history.

Return ONLY valid JSON (no markdown, no explanation) with this exact structure:
{
  "isBooking": true or false,
  "service": "cctv-installation|structured-cabling|network-setup|server-installation|it-support|cybersecurity|other or null",
  "date": "requested date like 2025-03-10 (ISO format) or null",
  "time": "requested time like 09:00 (24-hour) or null",
  "location": "home|office|building|other or null",
  "notes": "any special requests or null"
}

Rules:
- "isBooking" is true only when the visitor wants to schedule an appointment or site visit.
- Questions about services, pricing, or hours are NOT bookings.
- Leave any field you cannot extract as null. Never invent values.
"#;

/// Outcome of scraping the raw completion text for a JSON object.
#[derive(Debug)]
pub enum IntentParse {
    Parsed(ExtractedBooking),
    Unparsed,
}

/// Classifies a chat message as a booking request. Every failure mode —
/// provider error, unparseable reply, `isBooking: false` — collapses to
/// `None`; the caller falls through to general chat.
pub async fn detect_booking_intent(
    llm: &dyn LlmProvider,
    history: &[Message],
    latest_message: &str,
    business_context: &str,
) -> Option<BookingIntent> {
    let mut messages: Vec<Message> = history.to_vec();
    messages.push(Message {
        role: "user".to_string(),
        content: latest_message.to_string(),
    });

    let system = format!("{SYSTEM_PROMPT}\nBusiness context:\n{business_context}");

    let response = match llm.chat(&system, &messages, &ChatOptions::extraction()).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "intent extraction call failed, treating as not a booking");
            return None;
        }
    };

    match parse_intent_response(&response) {
        IntentParse::Parsed(raw) if raw.is_booking => Some(BookingIntent::from_extracted(raw)),
        IntentParse::Parsed(_) => None,
        IntentParse::Unparsed => {
            tracing::debug!("no JSON intent found in model reply");
            None
        }
    }
}

fn parse_intent_response(response: &str) -> IntentParse {
    // Try direct parse first
    if let Ok(raw) = serde_json::from_str::<ExtractedBooking>(response) {
        return IntentParse::Parsed(raw);
    }

    // Strip markdown code fences
    let cleaned = response
        .trim()
        .strip_prefix("```json")
        .or_else(|| response.trim().strip_prefix("```"))
        .unwrap_or(response.trim());
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Ok(raw) = serde_json::from_str::<ExtractedBooking>(cleaned) {
        return IntentParse::Parsed(raw);
    }

    // Scrape the first brace-delimited object out of surrounding prose
    if let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) {
        if start < end {
            if let Ok(raw) = serde_json::from_str::<ExtractedBooking>(&cleaned[start..=end]) {
                return IntentParse::Parsed(raw);
            }
        }
    }

    IntentParse::Unparsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationKind;

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{"isBooking":true,"service":"cctv-installation","date":"2025-03-10","time":"09:00","location":"office","notes":null}"#;
        let IntentParse::Parsed(raw) = parse_intent_response(json) else {
            panic!("expected parse");
        };
        assert!(raw.is_booking);
        assert_eq!(raw.service.as_deref(), Some("cctv-installation"));
        assert_eq!(raw.time.as_deref(), Some("09:00"));
    }

    #[test]
    fn test_parse_markdown_fenced_json() {
        let json = "```json\n{\"isBooking\":false}\n```";
        let IntentParse::Parsed(raw) = parse_intent_response(json) else {
            panic!("expected parse");
        };
        assert!(!raw.is_booking);
    }

    #[test]
    fn test_parse_json_embedded_in_prose() {
        let reply = "Sure! Here is the classification: {\"isBooking\":true,\"date\":\"2025-03-10\"} Hope that helps.";
        let IntentParse::Parsed(raw) = parse_intent_response(reply) else {
            panic!("expected parse");
        };
        assert!(raw.is_booking);
        assert_eq!(raw.date.as_deref(), Some("2025-03-10"));
    }

    #[test]
    fn test_parse_no_json() {
        assert!(matches!(
            parse_intent_response("I'm not sure what you mean."),
            IntentParse::Unparsed
        ));
    }

    #[test]
    fn test_intent_conversion_keeps_missing_fields_empty() {
        let json = r#"{"isBooking":true,"service":"it-support","location":"home"}"#;
        let IntentParse::Parsed(raw) = parse_intent_response(json) else {
            panic!("expected parse");
        };
        let intent = crate::models::BookingIntent::from_extracted(raw);
        assert_eq!(intent.location, Some(LocationKind::Home));
        assert!(intent.missing_fields.is_empty());
        assert!(intent.date.is_none());
    }

    #[test]
    fn test_unknown_location_becomes_none() {
        let json = r#"{"isBooking":true,"location":"rooftop"}"#;
        let IntentParse::Parsed(raw) = parse_intent_response(json) else {
            panic!("expected parse");
        };
        let intent = crate::models::BookingIntent::from_extracted(raw);
        assert!(intent.location.is_none());
    }
}
