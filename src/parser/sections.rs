//! Brace-balanced section location.
//!
//! Devicetree nodes nest arbitrarily, so sections are located by explicit
//! brace-depth counting rather than regex balancing. Used for the
//! top-level `keymap`, `behaviors`, and `macros` blocks.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn is_ident_byte(b: u8) -> bool {
    b == b'_' || b == b'-' || b.is_ascii_alphanumeric()
}

/// Length of the comment span starting at `i`, or 0 when `i` does not
/// start a comment.
///
/// Alias annotations survive comment stripping and may contain arbitrary
/// text, braces included, so structure scanning must step over comment
/// spans instead of counting the braces inside them.
fn comment_span(bytes: &[u8], i: usize) -> usize {
    if i + 1 >= bytes.len() || bytes[i] != b'/' {
        return 0;
    }
    match bytes[i + 1] {
        b'/' => {
            let mut j = i + 2;
            while j < bytes.len() && bytes[j] != b'\n' {
                j += 1;
            }
            j - i
        }
        b'*' => {
            let mut j = i + 2;
            while j + 1 < bytes.len() && !(bytes[j] == b'*' && bytes[j + 1] == b'/') {
                j += 1;
            }
            if j + 1 < bytes.len() {
                j + 2 - i
            } else {
                bytes.len() - i
            }
        }
        _ => 0,
    }
}

/// Finds the first `name { ... }` block and returns its inner text
/// (outer braces excluded).
///
/// The match requires `name` at an identifier boundary, followed by
/// optional whitespace and `{`. Depth counting starts at 1 after the
/// opening brace; the section ends at the `}` that returns depth to 0.
/// Returns `None` when no such block exists or braces never balance.
#[must_use]
pub fn find_section<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let bytes = text.as_bytes();
    let mut from = 0;

    while let Some(rel) = text[from..].find(name) {
        let at = from + rel;
        let name_end = at + name.len();
        let boundary_before = at == 0 || !is_ident_byte(bytes[at - 1]);

        let mut i = name_end;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        if boundary_before && i < bytes.len() && bytes[i] == b'{' {
            let body_start = i + 1;
            let mut depth = 1usize;
            let mut j = body_start;
            while j < bytes.len() {
                let skip = comment_span(bytes, j);
                if skip > 0 {
                    j += skip;
                    continue;
                }
                match bytes[j] {
                    b'{' => depth += 1,
                    b'}' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(&text[body_start..j]);
                        }
                    }
                    _ => {}
                }
                j += 1;
            }
            return None;
        }

        from = name_end;
    }

    None
}

/// Iterates the immediate `ident { ... }` child blocks of a section body.
///
/// Returns `(identifier, block_body, resume_offset)` for the next block at
/// or after `from`, skipping property assignments like `compatible = "...";`.
pub(crate) fn next_block(text: &str, from: usize) -> Option<(&str, &str, usize)> {
    let bytes = text.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        let skip = comment_span(bytes, i);
        if skip > 0 {
            i += skip;
            continue;
        }
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }

        // Walk back over whitespace to the identifier before the brace.
        let mut name_end = i;
        while name_end > from && bytes[name_end - 1].is_ascii_whitespace() {
            name_end -= 1;
        }
        let mut name_start = name_end;
        while name_start > from && is_ident_byte(bytes[name_start - 1]) {
            name_start -= 1;
        }

        let body_start = i + 1;
        let mut depth = 1usize;
        let mut j = body_start;
        while j < bytes.len() {
            let skip = comment_span(bytes, j);
            if skip > 0 {
                j += skip;
                continue;
            }
            match bytes[j] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            j += 1;
        }
        if j >= bytes.len() {
            return None; // unbalanced
        }

        if name_start == name_end {
            // Anonymous brace; scan inside it next.
            i = body_start;
            continue;
        }

        return Some((&text[name_start..name_end], &text[body_start..j], j + 1));
    }

    None
}

fn label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"label\s*=\s*"([^"]*)""#).unwrap())
}

/// Parses `name: node_type { label = "..."; ... };` entries from a
/// `behaviors {}` or `macros {}` section body.
///
/// Maps each entry identifier to its `label` string; entries without a
/// label fall back to the uppercased identifier.
#[must_use]
pub fn parse_labeled_entries(body: &str) -> BTreeMap<String, String> {
    static ENTRY_RE: OnceLock<Regex> = OnceLock::new();
    let entry_re = ENTRY_RE.get_or_init(|| {
        Regex::new(r"(?s)([A-Za-z_][A-Za-z0-9_]*)\s*:\s*[A-Za-z_][A-Za-z0-9_]*\s*\{(.*?)\}\s*;")
            .unwrap()
    });

    let mut entries = BTreeMap::new();
    for caps in entry_re.captures_iter(body) {
        let name = caps[1].to_string();
        let label = label_regex()
            .captures(&caps[2])
            .map_or_else(|| name.to_uppercase(), |l| l[1].to_string());
        entries.insert(name, label);
    }
    entries
}

/// Extracts an explicit layer label from a block body:
/// `label = "..."` takes priority over `display-name = "..."`.
#[must_use]
pub fn block_label(body: &str) -> Option<String> {
    static DISPLAY_NAME_RE: OnceLock<Regex> = OnceLock::new();
    let display_name_re = DISPLAY_NAME_RE
        .get_or_init(|| Regex::new(r#"display-name\s*=\s*"([^"]*)""#).unwrap());

    label_regex()
        .captures(body)
        .or_else(|| display_name_re.captures(body))
        .map(|caps| caps[1].to_string())
}
