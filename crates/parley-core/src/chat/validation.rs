//! Input rules shared by the HTTP handlers and the chat service.

use parley_types::chat::{ChatId, MAX_TEXT_CHARS, MAX_TITLE_CHARS};
use parley_types::error::ChatError;

/// Page size used when `limit` is absent or unusable.
pub const DEFAULT_MESSAGE_LIMIT: u32 = 20;

/// Largest page a caller may ask for.
pub const MAX_MESSAGE_LIMIT: u32 = 100;

/// Parse a chat id path segment. Only positive integers are accepted.
pub fn parse_chat_id(raw: &str) -> Result<ChatId, ChatError> {
    match raw.parse::<ChatId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ChatError::InvalidChatId),
    }
}

/// Resolve the `limit` query parameter.
///
/// Positive values are clamped to [`MAX_MESSAGE_LIMIT`]; anything else,
/// including garbage and non-positive numbers, falls back to
/// [`DEFAULT_MESSAGE_LIMIT`] without an error.
pub fn resolve_limit(raw: Option<&str>) -> u32 {
    match raw.map(str::parse::<i64>) {
        Some(Ok(limit)) if limit > 0 => limit.min(i64::from(MAX_MESSAGE_LIMIT)) as u32,
        _ => DEFAULT_MESSAGE_LIMIT,
    }
}

/// Trim a chat title and check it is 1..=200 characters.
pub fn normalize_title(raw: &str) -> Result<String, ChatError> {
    trimmed_within(raw, MAX_TITLE_CHARS).ok_or(ChatError::InvalidTitleLength)
}

/// Trim message text and check it is 1..=5000 characters.
pub fn normalize_text(raw: &str) -> Result<String, ChatError> {
    trimmed_within(raw, MAX_TEXT_CHARS).ok_or(ChatError::InvalidTextLength)
}

fn trimmed_within(raw: &str, max_chars: usize) -> Option<String> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    (1..=max_chars).contains(&len).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_id_accepts_positive() {
        assert_eq!(parse_chat_id("1").unwrap(), 1);
        assert_eq!(parse_chat_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_chat_id_rejects_invalid() {
        for raw in ["0", "-3", "abc", "", "1.5", "99999999999999999999"] {
            assert!(
                matches!(parse_chat_id(raw), Err(ChatError::InvalidChatId)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_limit_defaults() {
        assert_eq!(resolve_limit(None), 20);
        assert_eq!(resolve_limit(Some("")), 20);
        assert_eq!(resolve_limit(Some("ten")), 20);
        assert_eq!(resolve_limit(Some("0")), 20);
        assert_eq!(resolve_limit(Some("-5")), 20);
    }

    #[test]
    fn test_resolve_limit_uses_and_clamps() {
        assert_eq!(resolve_limit(Some("1")), 1);
        assert_eq!(resolve_limit(Some("5")), 5);
        assert_eq!(resolve_limit(Some("100")), 100);
        assert_eq!(resolve_limit(Some("101")), 100);
        assert_eq!(resolve_limit(Some("100000000000")), 100);
    }

    #[test]
    fn test_normalize_title_trims() {
        assert_eq!(normalize_title("  Weekly sync  ").unwrap(), "Weekly sync");
        assert_eq!(normalize_title("\tx\n").unwrap(), "x");
    }

    #[test]
    fn test_normalize_title_bounds() {
        assert!(matches!(normalize_title(""), Err(ChatError::InvalidTitleLength)));
        assert!(matches!(normalize_title("   "), Err(ChatError::InvalidTitleLength)));
        assert_eq!(normalize_title(&"a".repeat(200)).unwrap().len(), 200);
        assert!(matches!(
            normalize_title(&"a".repeat(201)),
            Err(ChatError::InvalidTitleLength)
        ));
        // Padding does not count towards the limit.
        let padded = format!("  {}  ", "a".repeat(200));
        assert!(normalize_title(&padded).is_ok());
    }

    #[test]
    fn test_normalize_title_counts_characters() {
        // 200 Cyrillic characters are 400 bytes.
        let title = "я".repeat(200);
        assert_eq!(normalize_title(&title).unwrap(), title);
        assert!(normalize_title(&"я".repeat(201)).is_err());
    }

    #[test]
    fn test_normalize_text_bounds() {
        assert!(matches!(normalize_text(" \n "), Err(ChatError::InvalidTextLength)));
        assert!(normalize_text(&"b".repeat(5000)).is_ok());
        assert!(matches!(
            normalize_text(&"b".repeat(5001)),
            Err(ChatError::InvalidTextLength)
        ));
        assert_eq!(normalize_text("  hi there ").unwrap(), "hi there");
    }
}
