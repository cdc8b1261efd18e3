/// Merge class lists into one `class` attribute value.
///
/// `None` and blank parts are skipped and repeated tokens are kept only at
/// their first position, so conditional classes can be passed as
/// `flag.then_some("...")` next to a caller-supplied override.
pub fn cn<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in parts.into_iter().flatten().flat_map(str::split_whitespace) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_joins_present_parts() {
        assert_eq!(cn([Some("a b"), None, Some("c")]), "a b c");
    }

    #[test]
    fn test_cn_normalizes_whitespace() {
        assert_eq!(cn([Some("  a\n  b "), Some(""), Some("   ")]), "a b");
    }

    #[test]
    fn test_cn_drops_duplicate_tokens() {
        assert_eq!(cn([Some("mb-4 text-lg"), Some("text-lg mb-4 italic")]), "mb-4 text-lg italic");
    }

    #[test]
    fn test_cn_conditional_parts() {
        let inverse = false;
        assert_eq!(cn([Some("base"), inverse.then_some("bg-primary/5")]), "base");
        assert_eq!(cn(std::iter::empty()), "");
    }
}
