//! Fixed replies and parsing of the model's JSON answer into an [`AgentReply`].

use hub_core::{AgentReply, ModelOutputError};

/// Reserved command answered with the welcome reply; matched exactly and case-sensitively.
pub const START_COMMAND: &str = "/start";

/// Upper bound on rendered quick-reply buttons.
pub const MAX_OPTIONS: usize = 6;

const WELCOME_TEXT: &str = "🧬 <b>Welcome to the AI Study Hub!</b>\n\n\
I am your tutor for Class 8-10. I can explain science, solve math, or create quizzes.\n\n\
<i>What are we learning today?</i>";
const WELCOME_OPTIONS: [&str; 3] = ["Class 10 Math 📐", "Physics Lab 🧪", "Quick Quiz 🧠"];

const PROSE_PREFIX: &str = "<b>Response:</b>\n\n";
const PROSE_OPTIONS: [&str; 2] = ["Next Topic", "Main Menu"];

const UPSTREAM_TEXT: &str =
    "I'm having trouble connecting to my AI core, but I'm still here! Let's try something simpler.";
const UPSTREAM_OPTIONS: [&str; 3] = ["Math", "Science", "History"];

const ERROR_OPTIONS: [&str; 2] = ["Retry 🔄", "Main Menu 🏠"];

pub fn welcome_reply() -> AgentReply {
    AgentReply::new(WELCOME_TEXT, WELCOME_OPTIONS)
}

/// Reply for model text that is not reply JSON: the raw text verbatim under a fixed heading.
pub fn prose_fallback(raw: &str) -> AgentReply {
    AgentReply::new(format!("{PROSE_PREFIX}{raw}"), PROSE_OPTIONS)
}

/// Reply used when the model could not be reached or returned nothing usable.
pub fn upstream_fallback() -> AgentReply {
    AgentReply::new(UPSTREAM_TEXT, UPSTREAM_OPTIONS)
}

/// Notice sent to the chat after a failed delivery. `error` is HTML-escaped.
pub fn error_notice(error: &str) -> AgentReply {
    AgentReply::new(
        format!(
            "⚠️ <b>System Error</b>\n<code>{}</code>",
            html_escape::encode_text(error)
        ),
        ERROR_OPTIONS,
    )
}

/// Parses model output as `{"text": ..., "options": [...]}` after stripping code fences.
///
/// Blank labels are dropped and at most [`MAX_OPTIONS`] are kept. Empty `text` is an error.
pub fn parse_agent_reply(raw: &str) -> Result<AgentReply, ModelOutputError> {
    let cleaned = prompt::strip_fences(raw);
    let mut reply: AgentReply = serde_json::from_str(cleaned)
        .map_err(|e| ModelOutputError::InvalidJson(e.to_string()))?;
    if reply.text.trim().is_empty() {
        return Err(ModelOutputError::EmptyText);
    }
    reply.options.retain(|o| !o.trim().is_empty());
    reply.options.truncate(MAX_OPTIONS);
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"text\":\"A\",\"options\":[\"B\",\"C\"]}\n```";
        assert_eq!(parse_agent_reply(raw).unwrap(), AgentReply::new("A", ["B", "C"]));
    }

    #[test]
    fn test_parse_bare_json_without_options() {
        let reply = parse_agent_reply(r#"{"text":"<b>Newton</b>"}"#).unwrap();
        assert_eq!(reply.text, "<b>Newton</b>");
        assert!(reply.options.is_empty());
    }

    #[test]
    fn test_parse_filters_blank_and_caps_options() {
        let raw = r#"{"text":"T","options":["1"," ","2","3","","4","5","6","7"]}"#;
        let reply = parse_agent_reply(raw).unwrap();
        assert_eq!(reply.options, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_agent_reply("Photosynthesis converts light to energy."),
            Err(ModelOutputError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_agent_reply(r#"{"options":["A"]}"#),
            Err(ModelOutputError::InvalidJson(_))
        ));
        assert_eq!(
            parse_agent_reply(r#"{"text":"  ","options":["A"]}"#),
            Err(ModelOutputError::EmptyText)
        );
    }

    #[test]
    fn test_prose_fallback_keeps_raw_text() {
        let reply = prose_fallback("Plain <i>prose</i> answer");
        assert_eq!(reply.text, "<b>Response:</b>\n\nPlain <i>prose</i> answer");
        assert_eq!(reply.options, vec!["Next Topic", "Main Menu"]);
    }

    #[test]
    fn test_error_notice_escapes_message() {
        let reply = error_notice("Bad Request: can't parse <b> entity & more");
        assert_eq!(
            reply.text,
            "⚠️ <b>System Error</b>\n<code>Bad Request: can't parse &lt;b&gt; entity &amp; more</code>"
        );
        assert_eq!(reply.options, vec!["Retry 🔄", "Main Menu 🏠"]);
    }

    #[test]
    fn test_fixed_replies_are_non_empty() {
        for reply in [welcome_reply(), upstream_fallback(), prose_fallback("")] {
            assert!(!reply.text.is_empty());
            assert!(!reply.options.is_empty());
        }
    }
}
