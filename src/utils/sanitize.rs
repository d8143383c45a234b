// Text shaping for card display

/// Truncate text to a maximum number of characters, appending an ellipsis
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept.trim_end())
    }
}

/// Collapse runs of whitespace (including newlines) into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // Hungarian accents are multi-byte
        assert_eq!(truncate("sajtos-sonkás", 8), "sajtos-…");
        assert_eq!(truncate("árvíztűrő", 20), "árvíztűrő");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  paradicsom,\n\tsajt  "), "paradicsom, sajt");
    }
}
