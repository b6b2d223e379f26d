//! Small utility helpers for URL encoding and display formatting.
//!
//! The functions in this module are lightweight and used by the catalog transport and the UI.

use std::fmt::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Turn a catalog slug into a display name (`mr-mime` becomes `Mr Mime`).
#[must_use]
pub fn display_name(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Catalog id zero-padded to three digits with a `#` prefix (`#025`).
#[must_use]
pub fn pad_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Height in decimetres rendered in metres (`7` becomes `0.7 m`).
#[must_use]
pub fn format_height(decimetres: u32) -> String {
    format!("{}.{} m", decimetres / 10, decimetres % 10)
}

/// Weight in hectograms rendered in kilograms (`69` becomes `6.9 kg`).
#[must_use]
pub fn format_weight(hectograms: u32) -> String {
    format!("{}.{} kg", hectograms / 10, hectograms % 10)
}

/// What: Truncate text to a terminal column width, appending `…` when cut.
///
/// Inputs:
/// - `text`: Text to fit
/// - `max_width`: Available columns
///
/// Output:
/// - The text unchanged when it fits; otherwise a prefix plus `…` no wider than `max_width`.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
