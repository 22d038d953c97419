mod answer;
mod question;

pub use self::answer::*;
pub use self::question::*;

pub(crate) use self::answer::answer_not_found;
pub(crate) use self::question::question_not_found;

/// Shortens `text` to `max` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate("Short question", 50), "Short question");
    }

    #[test]
    fn test_truncate_long_text() {
        let text = format!("{}l{}", "s".repeat(49), "S".repeat(30));
        let truncated = truncate(&text, 50);
        assert!(truncated.ends_with("l..."));
        assert!(!truncated.contains('S'));
    }

    #[test]
    fn test_truncate_counts_characters() {
        let text = "вопрос".repeat(10);
        assert_eq!(truncate(&text, 6), "вопрос...");
    }
}
