//! Locating the documentation-set name inside a page URL.

/// Where `name` sits in the URL, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameMatch {
    Found { start: usize, end: usize },
    NotFound,
}

impl NameMatch {
    /// First occurrence of `name` in `url`.
    pub(crate) fn locate(url: &str, name: &str) -> Self {
        match url.find(name) {
            Some(start) => NameMatch::Found {
                start,
                end: start + name.len(),
            },
            None => NameMatch::NotFound,
        }
    }
}

/// URL prefix through the end of the name.
///
/// When the name is missing, the prefix is the first `len(name) - 1` characters
/// of the URL (clamped to its length). That is what a not-found offset of -1
/// plus the name length gives, and pages built against such URLs have always
/// seen exactly this value.
pub(crate) fn through_name<'a>(url: &'a str, name: &str, m: NameMatch) -> &'a str {
    match m {
        NameMatch::Found { end, .. } => &url[..end],
        NameMatch::NotFound => {
            let keep = name.chars().count().saturating_sub(1);
            char_prefix(url, keep)
        }
    }
}

/// URL prefix up to the separator preceding the name (separator excluded).
///
/// Empty when the name is missing or sits at offset 0.
pub(crate) fn before_name(url: &str, m: NameMatch) -> &str {
    match m {
        NameMatch::Found { start, .. } => {
            let mut chars = url[..start].chars();
            chars.next_back();
            chars.as_str()
        }
        NameMatch::NotFound => "",
    }
}

fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
