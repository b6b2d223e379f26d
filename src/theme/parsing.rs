/// What: Remove trailing inline comments from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - Trimmed value without `//` or `#` comment tails.
///
/// Details:
/// - A leading `#` is kept so values like `#RRGGBB` survive; only a later `#` starts a comment.
/// - `//` starts a comment only at the beginning or after whitespace, so URLs are kept whole.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    let line = s;
    let comment = line
        .match_indices("//")
        .map(|(i, _)| i)
        .find(|&i| i == 0 || line[..i].ends_with(char::is_whitespace));
    if let Some(i) = comment {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// What: Normalize a config key so `Page-Size`, `page.size` and `page_size` match.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// Parse positive integers, rejecting zero.
pub(crate) fn parse_positive<T>(val: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    val.parse::<T>().ok().filter(|v| *v > T::default())
}
