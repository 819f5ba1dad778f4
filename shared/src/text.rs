/// Derive a URL slug from a display name.
///
/// Lowercases, turns each space into `-` and drops every character that is
/// not an ASCII word character or `-`. Runs of separators are kept, so
/// `"Science & Tech"` becomes `"science--tech"`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter_map(|ch| match ch {
            ' ' => Some('-'),
            '-' | '_' => Some(ch),
            ch if ch.is_ascii_alphanumeric() => Some(ch),
            _ => None,
        })
        .collect()
}

/// Use `slug` when it is non-blank, otherwise derive one from `name`.
pub fn slug_or_derive(slug: &str, name: &str) -> String {
    let trimmed = slug.trim();
    if trimmed.is_empty() {
        slugify(name)
    } else {
        trimmed.to_string()
    }
}

/// Split a comma-separated tag list, dropping blanks.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

/// Millisecond-timestamp id that `is_taken` does not reject. Bumps the
/// number until a free one turns up.
pub fn next_id(now_ms: i64, is_taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = now_ms.max(0);
    loop {
        let id = candidate.to_string();
        if !is_taken(&id) {
            return id;
        }
        candidate = candidate.saturating_add(1);
    }
}

/// Case-insensitive substring test. An empty needle matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_matches_form_behaviour() {
        assert_eq!(slugify("Technology"), "technology");
        assert_eq!(slugify("Real Estate"), "real-estate");
        assert_eq!(slugify("Science & Tech"), "science--tech");
        assert_eq!(slugify("Café Culture!"), "caf-culture");
        assert_eq!(slugify("snake_case-ok"), "snake_case-ok");
    }

    #[test]
    fn slug_or_derive_keeps_explicit_slug() {
        assert_eq!(slug_or_derive(" world ", "World News"), "world");
        assert_eq!(slug_or_derive("  ", "World News"), "world-news");
    }

    #[test]
    fn parse_tags_trims_and_filters_empty() {
        let tags = parse_tags(" AI, Health, ,Future ,,");
        assert_eq!(tags, vec!["AI".to_string(), "Health".to_string(), "Future".to_string()]);
    }

    #[test]
    fn next_id_skips_taken_values() {
        let taken = ["1700000000000", "1700000000001"];
        let id = next_id(1_700_000_000_000, |candidate| taken.contains(&candidate));
        assert_eq!(id, "1700000000002");
        assert_eq!(next_id(5, |_| false), "5");
    }

    #[test]
    fn contains_ignore_case_handles_empty_needle() {
        assert!(contains_ignore_case("Market Rally", "rally"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Market", "crash"));
    }
}
