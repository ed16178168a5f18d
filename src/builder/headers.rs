pub const CONTENT_TYPE: &str = "content-type";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Looks up a header value, preferring an exact-case key match and falling
/// back to the first key that matches case-insensitively.
pub fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    if let Some((_, value)) = headers.iter().find(|(key, _)| key == name) {
        return Some(value);
    }

    let lower = name.to_lowercase();
    headers
        .iter()
        .find(|(key, _)| key.to_lowercase() == lower)
        .map(|(_, value)| value.as_str())
}

pub(crate) fn is_form_urlencoded(headers: Option<&[(String, String)]>) -> bool {
    headers
        .and_then(|headers| find_header(headers, CONTENT_TYPE))
        .map(|value| value.to_lowercase() == FORM_URLENCODED)
        .unwrap_or(false)
}

/// Splits a `Name: value` header line.
pub fn parse_header_line(value: &str) -> Option<(String, String)> {
    let (name, val) = value.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), val.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn exact_match_wins_over_earlier_case_insensitive_match() {
        let headers = headers(&[
            ("Content-Type", "application/json"),
            ("content-type", "application/x-www-form-urlencoded"),
        ]);
        assert_eq!(
            find_header(&headers, "content-type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn first_case_insensitive_match_wins() {
        let headers = headers(&[
            ("Accept", "*/*"),
            ("CONTENT-TYPE", "text/plain"),
            ("Content-Type", "application/json"),
        ]);
        assert_eq!(find_header(&headers, "content-type"), Some("text/plain"));
        assert_eq!(find_header(&headers, "x-missing"), None);
    }

    #[test]
    fn form_detection_ignores_value_case() {
        let upper = headers(&[("Content-Type", "APPLICATION/X-WWW-FORM-URLENCODED")]);
        assert!(is_form_urlencoded(Some(&upper)));

        let with_charset = headers(&[(
            "content-type",
            "application/x-www-form-urlencoded; charset=utf-8",
        )]);
        assert!(!is_form_urlencoded(Some(&with_charset)));
        assert!(!is_form_urlencoded(None));
    }

    #[test]
    fn parse_header_line_trims_both_sides() {
        assert_eq!(
            parse_header_line("X-Trace :  abc:def "),
            Some(("X-Trace".to_string(), "abc:def".to_string()))
        );
        assert_eq!(parse_header_line("no separator"), None);
        assert_eq!(parse_header_line(": value"), None);
    }
}
