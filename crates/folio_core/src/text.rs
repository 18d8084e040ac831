//! Split-text intro: words and characters with staggered fade-in.

/// Per-character stagger (milliseconds).
pub const CHAR_STAGGER_MS: u32 = 8;

/// Splits trimmed text on single spaces into words of characters.
///
/// Runs of spaces yield empty words, which render as extra gaps.
#[must_use]
pub fn split_words(text: &str) -> Vec<Vec<char>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(' ').map(|w| w.chars().collect()).collect()
}

/// CSS transition for the `index`-th character of a node.
#[must_use]
pub fn char_transition(index: usize) -> String {
    let delay = index.saturating_mul(CHAR_STAGGER_MS as usize);
    format!(
        "opacity .6s {delay}ms cubic-bezier(.22,1,.36,1), transform .6s {delay}ms cubic-bezier(.22,1,.36,1)"
    )
}

/// Transitions for every char of one node, in document order.
///
/// The stagger restarts at 0 ms for each node.
#[must_use]
pub fn node_transitions(words: &[Vec<char>]) -> Vec<String> {
    (0..words.iter().map(Vec::len).sum()).map(char_transition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        let words = split_words("  Hi there ");
        assert_eq!(words, vec![vec!['H', 'i'], vec!['t', 'h', 'e', 'r', 'e']]);
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn test_char_transition_staggers() {
        assert!(char_transition(0).starts_with("opacity .6s 0ms"));
        assert!(char_transition(3).contains("transform .6s 24ms"));
    }

    #[test]
    fn test_stagger_restarts_for_each_node() {
        let first = node_transitions(&split_words("Hello world"));
        let second = node_transitions(&split_words("Again"));
        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 5);
        assert!(first[9].starts_with("opacity .6s 72ms"));
        assert!(second[0].starts_with("opacity .6s 0ms"));
        assert_eq!(second[4], first[4]);
    }
}
