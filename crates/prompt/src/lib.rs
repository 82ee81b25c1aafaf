//! # Prompt
//!
//! Builds the single instruction string sent to the language model for one student query,
//! and cleans the model's answer before it is parsed.
//!
//! ## Format
//!
//! - **Role**: class 8-10 expert tutor
//! - **User Query**: the literal student text, quoted
//! - **Rules**: HTML tags allowed in the answer, step-by-step `<code>` blocks for math,
//!   and the reply JSON contract `{"text": ..., "options": [...]}`
//!
//! ## External interactions
//!
//! - **AI models**: Output is sent as the only text part of a Gemini `generateContent` request.

/// Role line at the top of every instruction.
pub const TUTOR_ROLE: &str = "Class 8-10 Expert Tutor.";

/// HTML tags the answer may use; they match what Telegram renders with `parse_mode = HTML`.
pub const ALLOWED_TAGS: &[&str] = &["<b>", "<i>", "<code>"];

/// Example of the only output shape the model may return.
pub const REPLY_JSON_EXAMPLE: &str =
    r#"{"text": "your response", "options": ["Option 1", "Option 2", "Option 3"]}"#;

/// Code-block delimiter models wrap structured output in.
pub const FENCE: &str = "```";

/// Builds the full instruction for one student query.
///
/// The query is embedded verbatim; no escaping is applied.
pub fn tutor_instruction(query: &str) -> String {
    let tags = ALLOWED_TAGS.join(", ");
    format!(
        "Role: {TUTOR_ROLE}\n\
         User Query: \"{query}\"\n\
         Rules:\n\
         1. Answer clearly using HTML ({tags}). Do not use Markdown.\n\
         2. If it's a math problem, provide step-by-step logic in <code> blocks.\n\
         3. Suggest up to 3 short follow-up topics as options.\n\
         4. ALWAYS return only valid JSON in this format, with no other text:\n\
         {REPLY_JSON_EXAMPLE}\n"
    )
}

/// Removes a leading and a trailing triple-backtick fence (the leading one with or without a
/// `json` language tag) and surrounding whitespace. Text without fences is only trimmed.
///
/// Backticks inside the body are left alone.
pub fn strip_fences(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix(FENCE) {
        s = strip_json_tag(rest);
    }
    if let Some(rest) = s.strip_suffix(FENCE) {
        s = rest;
    }
    s.trim()
}

fn strip_json_tag(s: &str) -> &str {
    match s.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &s[4..],
        _ => s,
    }
}
