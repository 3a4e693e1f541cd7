//! Path construction helpers for the open-chat API.
//!
//! The API surface splits into two namespaces: `profile/` for user, post and
//! reaction operations scoped to a link identity, and `c/` for channel-level
//! operations (search, recommendations, presets). Every endpoint method
//! builds its path through exactly one of the two builders below.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped when embedding a value into a path or query segment.
///
/// Matches the `encodeURIComponent` set the platform's web clients use:
/// everything except alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single path or query value.
///
/// Values are encoded individually before concatenation; already-built paths
/// and query separators are never re-encoded.
pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds a path in the `profile/` namespace.
pub(crate) fn profile_api_path(suffix: &str) -> String {
    format!("profile/{suffix}")
}

/// Builds a path in the `c/` (channel) namespace.
pub(crate) fn channel_api_path(suffix: &str) -> String {
    format!("c/{suffix}")
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;

    use super::*;

    #[test]
    fn namespaces_are_disjoint() {
        assert_ne!(profile_api_path("x"), channel_api_path("x"));
    }

    #[test]
    fn suffix_is_preserved_verbatim() {
        assert_eq!(profile_api_path("7/posts/all"), "profile/7/posts/all");
        assert_eq!(channel_api_path("search/unified?q=a"), "c/search/unified?q=a");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a&b?c/d"), "a%26b%3Fc%2Fd");
        assert_eq!(encode_component("1234567890"), "1234567890");
    }

    #[test]
    fn encoding_round_trips() {
        for value in ["a b", "q&r?s/t", "100% sure", "한국어 채팅", "plain"] {
            let encoded = encode_component(value);
            let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
            assert_eq!(decoded, value);
        }
    }
}
