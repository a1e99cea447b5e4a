//! Binding tokenization and row/column assignment.
//!
//! A bindings payload is processed line by line. Each line that yields at
//! least one token becomes one grid row; blank and comment-only lines do
//! not consume a row index. Tokens start at `&`; parenthesis depth is
//! tracked so modifier-combinator arguments like `LC(LS(A))` never split
//! a token.
//!
//! Two alias forms coexist:
//!
//! - `/* =text */` immediately after a token labels that token, and
//! - a trailing `// =text` labels the last token on its line.
//!
//! When both could apply to the same final token, the inline block form
//! wins. Empty alias text after `=` counts as no alias.

/// One tokenized binding before display formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBinding {
    /// Source token, whitespace-normalized, alias comments excluded
    pub raw_code: String,
    /// Alias text from either annotation form
    pub alias: Option<String>,
    /// Zero-based row (one per binding-bearing line)
    pub row: usize,
    /// Zero-based column within the row
    pub column: usize,
}

/// Tokenizes a bindings payload into positioned raw bindings.
#[must_use]
pub fn tokenize(payload: &str) -> Vec<RawBinding> {
    let mut out = Vec::new();
    let mut row = 0;

    for line in payload.lines() {
        // Capture the end-of-line alias from the line as written, then
        // drop the line comment. Ordering matters: the alias lives inside
        // the comment being removed.
        let (content, eol_alias) = split_line_comment(line);
        if content.trim().is_empty() {
            continue;
        }

        let mut tokens = tokenize_line(content);
        if tokens.is_empty() {
            continue;
        }

        let last = tokens.len() - 1;
        if tokens[last].1.is_none() {
            tokens[last].1 = eol_alias;
        }

        for (column, (raw_code, alias)) in tokens.into_iter().enumerate() {
            out.push(RawBinding {
                raw_code,
                alias,
                row,
                column,
            });
        }
        row += 1;
    }

    out
}

/// Splits a line at its `//` comment (ignoring `//` inside a block
/// comment) and extracts an `=`-prefixed alias from the comment text.
fn split_line_comment(line: &str) -> (&str, Option<String>) {
    let bytes = line.as_bytes();
    let mut in_block = false;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if in_block {
            if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                in_block = false;
                i += 2;
                continue;
            }
        } else if bytes[i] == b'/' && bytes[i + 1] == b'*' {
            in_block = true;
            i += 2;
            continue;
        } else if bytes[i] == b'/' && bytes[i + 1] == b'/' {
            let alias = extract_alias(&line[i + 2..]);
            return (&line[..i], alias);
        }
        i += 1;
    }

    (line, None)
}

/// Returns the alias text if `comment_body` is an `=`-prefixed annotation
/// with non-empty content.
fn extract_alias(comment_body: &str) -> Option<String> {
    let text = comment_body.trim().strip_prefix('=')?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Scans one line into `(raw_code, inline_alias)` tokens.
fn tokenize_line(content: &str) -> Vec<(String, Option<String>)> {
    let chars: Vec<char> = content.chars().collect();
    let mut tokens: Vec<(String, Option<String>)> = Vec::new();
    let mut current = String::new();
    let mut alias: Option<String> = None;
    let mut depth = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '*' {
            let mut j = i + 2;
            while j + 1 < chars.len() && !(chars[j] == '*' && chars[j + 1] == '/') {
                j += 1;
            }
            let closed = j + 1 < chars.len();
            let body: String = chars[i + 2..if closed { j } else { chars.len() }]
                .iter()
                .collect();

            // An annotation binds to the token it follows; a comment with
            // no preceding token on the line is dropped.
            if !current.trim().is_empty() && alias.is_none() {
                alias = extract_alias(&body);
            }
            i = if closed { j + 2 } else { chars.len() };
            continue;
        }

        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '&' if depth == 0 && !current.trim().is_empty() => {
                tokens.push((normalize(&current), alias.take()));
                current.clear();
            }
            _ => {}
        }

        current.push(c);
        i += 1;
    }

    if !current.trim().is_empty() {
        tokens.push((normalize(&current), alias.take()));
    }

    tokens
}

/// Collapses runs of whitespace inside a token to single spaces.
fn normalize(token: &str) -> String {
    token.split_whitespace().collect::<Vec<_>>().join(" ")
}
