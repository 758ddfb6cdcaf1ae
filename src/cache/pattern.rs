//! Glob matching for cache keys.
//!
//! Supports the subset of Redis `KEYS` syntax the service relies on:
//! `*` matches any run of characters (including none), every other
//! character matches itself.

/// Returns true when `key` matches the glob `pattern`.
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let pattern = pattern.as_bytes();
    let key = key.as_bytes();

    let (mut p, mut k) = (0, 0);
    // Position of the last `*` seen and the key index it was tried against
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        if p < pattern.len() && pattern[p] == b'*' {
            backtrack = Some((p, k));
            p += 1;
        } else if p < pattern.len() && pattern[p] == key[k] {
            p += 1;
            k += 1;
        } else if let Some((star, matched)) = backtrack {
            // Let the last star swallow one more character
            p = star + 1;
            k = matched + 1;
            backtrack = Some((star, k));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == b'*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(pattern_matches("todo:1", "todo:1"));
        assert!(!pattern_matches("todo:1", "todo:12"));
        assert!(!pattern_matches("todo:12", "todo:1"));
    }

    #[test]
    fn test_trailing_wildcard() {
        assert!(pattern_matches("todos:all:*", "todos:all:0:10"));
        assert!(pattern_matches("todos:all:*", "todos:all:"));
        assert!(!pattern_matches("todos:all:*", "todos:al"));
        assert!(!pattern_matches("todos:all:*", "todo:1"));
    }

    #[test]
    fn test_leading_and_inner_wildcards() {
        assert!(pattern_matches("*:10", "todos:all:0:10"));
        assert!(pattern_matches("todos:*:10", "todos:all:4:10"));
        assert!(!pattern_matches("todos:*:10", "todos:all:4:100"));
        assert!(pattern_matches("todos:*:*", "todos:all:4:100"));
    }

    #[test]
    fn test_star_needs_backtracking() {
        assert!(pattern_matches("a*b*c", "aXbYbZc"));
        assert!(pattern_matches("*ab", "aab"));
        assert!(!pattern_matches("a*b*c", "aXbYbZ"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(pattern_matches("", ""));
        assert!(pattern_matches("*", ""));
        assert!(pattern_matches("**", "anything"));
        assert!(!pattern_matches("", "x"));
    }
}
