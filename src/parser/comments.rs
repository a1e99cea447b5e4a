//! Comment stripping for keymap source text.
//!
//! Keymap files are comment-heavy devicetree text. This module removes
//! line (`//`) and block (`/* */`) comments ahead of structure discovery
//! while keeping two things intact:
//!
//! - newlines inside removed spans, so downstream row counting by source
//!   line stays correct, and
//! - alias annotations (`/* =label */` blocks and trailing `// =label`
//!   line comments), which the binding tokenizer consumes later.

/// Removes comments from keymap source text.
///
/// Line comments are removed up to (not including) the terminating
/// newline. Block comments are replaced by the newlines they contained.
/// A comment whose trimmed content starts with `=` is an alias annotation
/// and is emitted verbatim.
///
/// Block comments do not nest: the first `*/` closes the comment and
/// anything after it is treated as new content. An unterminated block
/// comment runs to the end of the input.
#[must_use]
pub fn strip_comments(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            let end = chars[i..]
                .iter()
                .position(|&c| c == '\n')
                .map_or(chars.len(), |p| i + p);
            let body: String = chars[i + 2..end].iter().collect();
            if body.trim_start().starts_with('=') {
                out.extend(&chars[i..end]);
            }
            i = end;
            continue;
        }

        if chars[i] == '/' && i + 1 < chars.len() && chars[i + 1] == '*' {
            // First "*/" closes the comment; no nesting.
            let mut j = i + 2;
            while j + 1 < chars.len() && !(chars[j] == '*' && chars[j + 1] == '/') {
                j += 1;
            }
            let closed = j + 1 < chars.len();
            let body_end = if closed { j } else { chars.len() };
            let body: String = chars[i + 2..body_end].iter().collect();
            let after = if closed { j + 2 } else { chars.len() };

            if closed && body.trim().starts_with('=') {
                out.extend(&chars[i..after]);
            } else {
                out.extend(body.chars().filter(|&c| c == '\n'));
            }
            i = after;
            continue;
        }

        out.push(chars[i]);
        i += 1;
    }

    out
}
