//! Binding display formatting.
//!
//! Maps a binding's behavior keyword and arguments to a short
//! human-readable label. This is a total function: unrecognized input
//! always degrades to a best-effort fallback instead of failing.

use tracing::debug;

/// Named-key glyph table. Keys are matched after `NUMBER_`/`KP_`/`K_`
/// prefix stripping.
const KEY_GLYPHS: &[(&str, &str)] = &[
    ("SPACE", "␣"),
    ("TAB", "⇥"),
    ("BACKSPACE", "⌫"),
    ("BSPC", "⌫"),
    ("DELETE", "⌦"),
    ("DEL", "⌦"),
    ("RETURN", "⏎"),
    ("RET", "⏎"),
    ("ENTER", "⏎"),
    ("ESCAPE", "⎋"),
    ("ESC", "⎋"),
    ("LEFT", "←"),
    ("RIGHT", "→"),
    ("UP", "↑"),
    ("DOWN", "↓"),
    ("HOME", "↖"),
    ("END", "↘"),
    ("PAGE_UP", "⇞"),
    ("PG_UP", "⇞"),
    ("PAGE_DOWN", "⇟"),
    ("PG_DN", "⇟"),
    ("CAPSLOCK", "⇪"),
    ("CAPS", "⇪"),
    ("LSHFT", "⇧"),
    ("RSHFT", "⇧"),
    ("LSHIFT", "⇧"),
    ("RSHIFT", "⇧"),
    ("LEFT_SHIFT", "⇧"),
    ("RIGHT_SHIFT", "⇧"),
    ("LCTRL", "⌃"),
    ("RCTRL", "⌃"),
    ("LEFT_CONTROL", "⌃"),
    ("RIGHT_CONTROL", "⌃"),
    ("LALT", "⌥"),
    ("RALT", "⌥"),
    ("LEFT_ALT", "⌥"),
    ("RIGHT_ALT", "⌥"),
    ("LGUI", "⌘"),
    ("RGUI", "⌘"),
    ("LEFT_GUI", "⌘"),
    ("RIGHT_GUI", "⌘"),
    ("LCMD", "⌘"),
    ("RCMD", "⌘"),
    ("SEMICOLON", ";"),
    ("SEMI", ";"),
    ("COMMA", ","),
    ("PERIOD", "."),
    ("DOT", "."),
    ("SLASH", "/"),
    ("FSLH", "/"),
    ("BACKSLASH", "\\"),
    ("BSLH", "\\"),
    ("APOSTROPHE", "'"),
    ("APOS", "'"),
    ("SQT", "'"),
    ("DQT", "\""),
    ("GRAVE", "`"),
    ("MINUS", "-"),
    ("EQUAL", "="),
    ("PLUS", "+"),
    ("UNDERSCORE", "_"),
    ("UNDER", "_"),
    ("LBKT", "["),
    ("RBKT", "]"),
    ("LBRC", "{"),
    ("RBRC", "}"),
    ("LPAR", "("),
    ("RPAR", ")"),
    ("EXCLAMATION", "!"),
    ("EXCL", "!"),
    ("AT", "@"),
    ("HASH", "#"),
    ("DOLLAR", "$"),
    ("DLLR", "$"),
    ("PERCENT", "%"),
    ("PRCNT", "%"),
    ("CARET", "^"),
    ("AMPERSAND", "&"),
    ("AMPS", "&"),
    ("ASTERISK", "*"),
    ("ASTRK", "*"),
    ("STAR", "*"),
    ("PIPE", "|"),
    ("TILDE", "~"),
    ("COLON", ":"),
    ("N0", "0"),
    ("N1", "1"),
    ("N2", "2"),
    ("N3", "3"),
    ("N4", "4"),
    ("N5", "5"),
    ("N6", "6"),
    ("N7", "7"),
    ("N8", "8"),
    ("N9", "9"),
    ("C_VOL_UP", "🔊"),
    ("C_VOL_DN", "🔉"),
    ("C_MUTE", "🔇"),
    ("C_PP", "⏯"),
    ("C_PLAY_PAUSE", "⏯"),
    ("C_NEXT", "⏭"),
    ("C_PREV", "⏮"),
    ("PSCRN", "⎙"),
];

/// Returns the modifier glyph for a short or long modifier code.
fn modifier_glyph(code: &str) -> Option<&'static str> {
    match code {
        "LS" | "RS" | "LSHFT" | "RSHFT" | "LSHIFT" | "RSHIFT" | "LEFT_SHIFT" | "RIGHT_SHIFT" => {
            Some("⇧")
        }
        "LC" | "RC" | "LCTRL" | "RCTRL" | "LEFT_CONTROL" | "RIGHT_CONTROL" => Some("⌃"),
        "LA" | "RA" | "LALT" | "RALT" | "LEFT_ALT" | "RIGHT_ALT" => Some("⌥"),
        "LG" | "RG" | "LGUI" | "RGUI" | "LCMD" | "RCMD" | "LEFT_GUI" | "RIGHT_GUI"
        | "LEFT_COMMAND" | "RIGHT_COMMAND" => Some("⌘"),
        "LMETA" | "RMETA" | "LEFT_META" | "RIGHT_META" | "LWIN" | "RWIN" => Some("◆"),
        _ => None,
    }
}

fn key_glyph(code: &str) -> Option<&'static str> {
    KEY_GLYPHS
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, glyph)| *glyph)
}

/// Formats a raw binding token into its short display label.
///
/// Dispatches on the behavior keyword (the first word after the leading
/// `&`). Unknown behaviors fall back to the uppercased keyword when they
/// take no arguments (macro-style) or to the formatted last argument
/// otherwise.
#[must_use]
pub fn format_binding(raw_code: &str) -> String {
    let trimmed = raw_code.trim();
    let stripped = trimmed.strip_prefix('&').unwrap_or(trimmed);
    let words: Vec<&str> = stripped.split_whitespace().collect();

    let Some((&keyword, args)) = words.split_first() else {
        return trimmed.to_string();
    };

    match keyword {
        "kp" if args.len() == 1 => format_key(args[0]),
        "mt" if args.len() >= 2 => format_mod_tap(args[0], args[1]),
        "lt" if args.len() >= 2 => format!("L{}\n{}", args[0], format_key(args[1])),
        "mo" if args.len() == 1 => format!("MO{}", args[0]),
        "tog" if args.len() == 1 => format!("TG{}", args[0]),
        "to" if args.len() == 1 => format!("TO{}", args[0]),
        "trans" => "▽".to_string(),
        "none" => "✕".to_string(),
        "bt" => format_bluetooth(args),
        "sys_reset" => "RESET".to_string(),
        "bootloader" => "BOOT".to_string(),
        "studio_unlock" => "STUDIO".to_string(),
        _ => format_custom(keyword, args),
    }
}

/// Custom behaviors and the unrecognized-input fallbacks.
fn format_custom(keyword: &str, args: &[&str]) -> String {
    let lowered = keyword.to_lowercase();
    if args.len() >= 2 {
        if lowered.contains("mt") {
            return format_mod_tap(args[0], args[1]);
        }
        if lowered.contains("lt") {
            return format!("L{}\n{}", args[0], format_key(args[1]));
        }
    }

    debug!(behavior = keyword, "unrecognized behavior, using fallback label");
    match args.last() {
        None => keyword.to_uppercase(),
        Some(last) => format_key(last),
    }
}

fn format_mod_tap(modifier: &str, key: &str) -> String {
    let mod_label = modifier_glyph(modifier)
        .map_or_else(|| format_key(modifier), str::to_string);
    format!("{}\n{}", mod_label, format_key(key))
}

/// `BT_SEL n` → `BTn`; `BT_CLR` → `BT CLR`; other subcommands keep their
/// name without the `BT_` prefix.
fn format_bluetooth(args: &[&str]) -> String {
    match args {
        [] => "BT".to_string(),
        ["BT_SEL", n, ..] => format!("BT{n}"),
        ["BT_CLR", ..] => "BT CLR".to_string(),
        [cmd, rest @ ..] => {
            let name = cmd.strip_prefix("BT_").unwrap_or(cmd);
            match rest {
                [] => name.to_string(),
                _ => format!("{} {}", name, rest.join(" ")),
            }
        }
    }
}

/// Formats a single key code into its display glyph.
///
/// Strips `NUMBER_`/`KP_`/`K_` prefixes, consults the glyph table,
/// unwraps modifier-combinator expressions, and upper-cases anything
/// left over.
#[must_use]
pub fn format_key(code: &str) -> String {
    let code = code.trim();
    let stripped = code
        .strip_prefix("NUMBER_")
        .or_else(|| code.strip_prefix("KP_"))
        .or_else(|| code.strip_prefix("K_"))
        .unwrap_or(code);

    if let Some(glyph) = key_glyph(stripped) {
        return glyph.to_string();
    }
    if stripped.contains('(') {
        return unwrap_modifiers(stripped);
    }
    stripped.to_uppercase()
}

/// Peels nested modifier wrappers (`LS(LA(LG(K)))`), accumulating one
/// glyph per layer, and joins them with the formatted base key.
fn unwrap_modifiers(expr: &str) -> String {
    let mut glyphs: Vec<&str> = Vec::new();
    let mut rest = expr.trim();

    loop {
        let Some(open) = rest.find('(') else { break };
        let Some(glyph) = modifier_glyph(rest[..open].trim()) else {
            break;
        };
        if !rest.ends_with(')') {
            break;
        }
        glyphs.push(glyph);
        rest = rest[open + 1..rest.len() - 1].trim();
    }

    if glyphs.is_empty() {
        // Malformed combinator; degrade to the raw text.
        return expr.to_uppercase();
    }
    format!("{}+{}", glyphs.join("+"), format_key(rest))
}
