// Path parameter parsing module
// Pure helpers shared by the route dispatcher and handlers.

/// Split a request path into its non-empty segments.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Parse a month/day address segment. A segment that is not a plain
/// integer addresses nothing, so callers treat None as NotFound.
pub fn parse_index(segment: &str) -> Option<u32> {
    segment.parse().ok()
}

/// Parse a non-negative value parameter (`:nbr`). Rejecting instead of
/// coercing: `-1` and non-numerics are InvalidInput.
pub fn parse_count(segment: &str) -> Option<u64> {
    if segment.starts_with('+') {
        return None;
    }
    segment.parse().ok()
}

/// Parse the `:year` value parameter.
pub fn parse_year(segment: &str) -> Option<u32> {
    if segment.starts_with('+') {
        return None;
    }
    segment.parse().ok()
}

/// Strict boolean token parse. Only the literal `true`/`false` are
/// accepted; anything else is InvalidInput rather than silently false.
pub fn parse_flag(segment: &str) -> Option<bool> {
    match segment {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("/api/quiz/1/5"), vec!["api", "quiz", "1", "5"]);
        assert_eq!(split_segments("/api/quiz/"), vec!["api", "quiz"]);
        assert!(split_segments("/").is_empty());
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("12"), Some(12));
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("1.5"), None);
    }

    #[test]
    fn test_parse_count_rejects_negatives_and_garbage() {
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("+3"), None);
        assert_eq!(parse_count("many"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2024"), Some(2024));
        assert_eq!(parse_year("year"), None);
        assert_eq!(parse_year("-2024"), None);
    }

    #[test]
    fn test_parse_flag_is_strict() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("True"), None);
        assert_eq!(parse_flag("1"), None);
        assert_eq!(parse_flag("yes"), None);
    }
}
