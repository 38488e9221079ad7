//! Filesystem-safe output names from suggested titles.

/// Maximum slug length in characters.
const MAX_SLUG_LEN: usize = 100;

/// Convert a title into a filesystem-safe slug.
///
/// Keeps alphanumerics, spaces, hyphens and underscores; everything else
/// is stripped. Spaces become underscores and the result is truncated to
/// 100 characters.
pub fn slugify_title(title: &str) -> String {
    let safe: String = title
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-' || *c == '_')
        .collect();

    safe.trim()
        .replace(' ', "_")
        .chars()
        .take(MAX_SLUG_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify_title("Why Rust Is Fast"), "Why_Rust_Is_Fast");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            slugify_title("Q&A: async/await, explained!"),
            "QA_asyncawait_explained"
        );
    }

    #[test]
    fn test_path_separators_become_underscores() {
        assert_eq!(slugify_title("a/b\\c"), "a_b_c");
    }

    #[test]
    fn test_keeps_hyphens_and_underscores() {
        assert_eq!(slugify_title("left-pad_redux"), "left-pad_redux");
    }

    #[test]
    fn test_truncates_to_100_chars() {
        let long = "x".repeat(250);
        assert_eq!(slugify_title(&long).chars().count(), 100);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(slugify_title("  hello world  "), "hello_world");
    }
}
