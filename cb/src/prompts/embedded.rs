//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Conversation prompt: transcript plus the latest question
pub const CHAT: &str = include_str!("../../prompts/chat.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "chat" => Some(CHAT),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_chat() {
        let chat = get_embedded("chat").unwrap();
        assert!(chat.contains("{{context}}"));
        assert!(chat.contains("{{question}}"));
        assert!(chat.contains("대화 기록"));
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("plan").is_none());
    }
}
