//! End-to-end parser tests over realistic keymap sources.

mod fixtures;

use fixtures::*;
use std::path::Path;
use zmklens::parser::{self, strip_comments};

#[test]
fn test_corne_keymap_yields_layers_in_source_order() {
    let keymap = parser::parse(CORNE_KEYMAP, None).unwrap();
    let names: Vec<&str> = keymap.layers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Base", "Lower", "Raise"]);
}

#[test]
fn test_corne_layer_geometry() {
    let keymap = parser::parse(CORNE_KEYMAP, None).unwrap();
    let base = &keymap.layers[0];
    assert_eq!(base.key_count(), 42);
    assert_eq!(base.row_count, 4);
    assert_eq!(base.column_count, 12);

    assert_eq!(keymap.layout.name, "Corne");
    assert!(keymap.layout.is_split);
    assert_eq!(keymap.layout.keys_per_row, vec![12, 12, 12, 6]);
    assert!(keymap.layout.has_thumb_cluster);
    assert_eq!(keymap.layout.thumb_keys_count, 6);
}

#[test]
fn test_corne_behaviors_and_macros_labels() {
    let keymap = parser::parse(CORNE_KEYMAP, None).unwrap();
    assert_eq!(keymap.behaviors["hm"], "HOMEROW_MOD");
    assert_eq!(keymap.macros["email"], "EMAIL");
}

#[test]
fn test_inline_block_alias_excluded_from_raw_code() {
    let keymap = parser::parse(CORNE_KEYMAP, None).unwrap();
    let raise = keymap.layer("Raise").unwrap();
    let magnet = raise
        .bindings
        .iter()
        .find(|b| b.alias.is_some() && b.raw_code.contains("LS("))
        .expect("aliased combinator binding");
    assert_eq!(magnet.alias.as_deref(), Some("Magnet Right"));
    assert_eq!(magnet.raw_code, "&kp LS(LA(LG(K)))");
    assert_eq!(magnet.display_text, "⇧+⌥+⌘+K");
    assert_eq!(magnet.effective_display_text(), "Magnet Right");
}

#[test]
fn test_end_of_line_alias_applies_to_last_token_only() {
    let keymap = parser::parse(CORNE_KEYMAP, None).unwrap();
    let raise = keymap.layer("Raise").unwrap();
    let thumb_row: Vec<_> = raise.bindings.iter().filter(|b| b.row == 3).collect();
    assert_eq!(thumb_row.len(), 6);
    assert_eq!(thumb_row[5].alias.as_deref(), Some("AltGr"));
    assert!(thumb_row[..5].iter().all(|b| b.alias.is_none()));
}

#[test]
fn test_positions_unique_within_each_layer() {
    let keymap = parser::parse(CORNE_KEYMAP, None).unwrap();
    for layer in &keymap.layers {
        let mut positions: Vec<_> = layer.bindings.iter().map(|b| (b.row, b.column)).collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), layer.key_count(), "layer {}", layer.name);
    }
}

#[test]
fn test_parse_is_deterministic() {
    let first = parser::parse(CORNE_KEYMAP, None).unwrap();
    let second = parser::parse(CORNE_KEYMAP, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_stripping_preserves_binding_token_count() {
    // Comments never hide or fabricate bindings.
    let count = |text: &str| text.matches('&').count();
    assert_eq!(count(&strip_comments(CORNE_KEYMAP)), count(CORNE_KEYMAP));
    assert_eq!(
        count(&strip_comments(SWEEP_SHAPED_KEYMAP)),
        count(SWEEP_SHAPED_KEYMAP)
    );
}

#[test]
fn test_sweep_shaped_keymap_inference() {
    let keymap = parser::parse(SWEEP_SHAPED_KEYMAP, None).unwrap();
    assert_eq!(keymap.layout.total_keys, 34);
    assert_eq!(keymap.layout.keys_per_row, vec![10, 10, 10, 4]);
    assert_eq!(keymap.layout.name, "Sweep/Cradio");
    assert!(keymap.layout.has_thumb_cluster);
    assert_eq!(keymap.layout.thumb_keys_count, 4);
    assert!(keymap.layout.is_split, "gap analysis should classify split");
}

#[test]
fn test_empty_keymap_section_fails() {
    assert!(parser::parse(EMPTY_KEYMAP, None).is_err());
}

#[test]
fn test_no_keymap_section_fails() {
    assert!(parser::parse("/ { behaviors { }; };", None).is_err());
}

#[test]
fn test_malformed_input_does_not_panic() {
    for garbage in [
        "",
        "keymap",
        "keymap {",
        "keymap { layer { bindings = < &kp",
        "}}}}{{{{",
        "/* unterminated",
        "keymap { x { bindings = < \u{1F600} &kp A >; }; };",
    ] {
        let _ = parser::parse(garbage, None);
    }
}

#[test]
fn test_brace_in_alias_text_does_not_break_structure() {
    // Alias text is arbitrary; a stray brace in it must not unbalance
    // section or block scanning.
    let src = r"
        / {
            keymap {
                base {
                    bindings = <
                        &kp A &kp B // =}weird
                        &kp C /* ={open */ &kp D
                    >;
                };
            };
        };
    ";
    let keymap = parser::parse(src, None).unwrap();
    assert_eq!(keymap.layers.len(), 1);
    let base = &keymap.layers[0];
    assert_eq!(base.key_count(), 4);
    assert_eq!(base.bindings[1].alias.as_deref(), Some("}weird"));
    assert_eq!(base.bindings[2].alias.as_deref(), Some("{open"));
    assert_eq!(base.bindings[3].alias, None);
}

#[test]
fn test_path_hint_drives_board_detection() {
    let keymap = parser::parse(
        SWEEP_SHAPED_KEYMAP,
        Some(Path::new("/cfg/boards/ferris.keymap")),
    )
    .unwrap();
    assert_eq!(keymap.layout.name, "Ferris");
    assert!(keymap.layout.is_split);
}

#[test]
fn test_mod_tap_display_contains_both_glyphs() {
    let bindings = parser::parse_bindings("&mt LEFT_SHIFT A");
    assert_eq!(bindings.len(), 1);
    let text = &bindings[0].display_text;
    assert!(text.contains('⇧'));
    assert!(text.contains('A'));
    assert!(text.contains('\n'));
}

#[test]
fn test_arrow_and_whitespace_glyph_row() {
    let bindings = parser::parse_bindings(
        "&kp SPACE &kp TAB &kp BACKSPACE &kp RETURN &kp LEFT &kp RIGHT &kp UP &kp DOWN",
    );
    let labels: Vec<&str> = bindings.iter().map(|b| b.display_text.as_str()).collect();
    assert_eq!(labels, ["␣", "⇥", "⌫", "⏎", "←", "→", "↑", "↓"]);
}
