//! Shared test fixtures for E2E CLI and parser tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A realistic Corne (42-key, split) keymap with three layers, an
/// editor-generated signature comment, both alias forms, and a nested
/// modifier combinator.
pub const CORNE_KEYMAP: &str = r#"/*
 * Copyright (c) 2024 The ZMK Contributors
 * SPDX-License-Identifier: MIT
 */

// Generated with the nickcoutsos keymap-editor for corne (crkbd)

#include <behaviors.dtsi>
#include <dt-bindings/zmk/keys.h>
#include <dt-bindings/zmk/bt.h>

/ {
    behaviors {
        hm: behavior_mod_tap {
            label = "HOMEROW_MOD";
            compatible = "zmk,behavior-hold-tap";
        };
    };

    macros {
        email: email {
            label = "EMAIL";
            compatible = "zmk,behavior-macro";
        };
    };

    keymap {
        compatible = "zmk,keymap";

        default_layer {
            label = "Base";
            bindings = <
&kp TAB    &kp Q  &kp W  &kp E     &kp R  &kp T      &kp Y  &kp U  &kp I      &kp O    &kp P     &kp BSPC
&kp LCTRL  &kp A  &kp S  &kp D     &kp F  &kp G      &kp H  &kp J  &kp K      &kp L    &kp SEMI  &kp SQT
&kp LSHFT  &kp Z  &kp X  &kp C     &kp V  &kp B      &kp N  &kp M  &kp COMMA  &kp DOT  &kp FSLH  &kp RSHFT
                         &kp LGUI  &mo 1  &kp SPACE  &kp RET  &mo 2  &kp RALT
            >;
        };

        lower_layer {
            label = "Lower";
            bindings = <
&kp TAB    &kp N1        &kp N2        &kp N3        &kp N4  &kp N5     &kp N6    &kp N7    &kp N8  &kp N9     &kp N0  &kp BSPC
&bt BT_CLR &bt BT_SEL 0  &bt BT_SEL 1  &bt BT_SEL 2  &trans  &trans     &kp LEFT  &kp DOWN  &kp UP  &kp RIGHT  &trans  &trans
&kp LSHFT  &trans        &trans        &trans        &trans  &trans     &trans    &trans    &trans  &trans     &trans  &trans
                                       &kp LGUI      &trans  &kp SPACE  &kp RET   &trans    &kp RALT
            >;
        };

        raise_layer {
            display-name = "Raise";
            bindings = <
&kp TAB    &kp EXCL  &kp AT  &kp HASH  &kp DLLR  &kp PRCNT   &kp CARET  &kp AMPS  &kp ASTRK          &kp LPAR  &kp RPAR  &kp BSPC
&kp LCTRL  &trans    &trans  &trans    &trans    &trans      &kp MINUS  &kp EQUAL &kp LBKT           &kp RBKT  &kp BSLH  &kp GRAVE
&kp LSHFT  &trans    &trans  &trans    &trans    &email      &kp UNDER  &kp PLUS  &kp LS(LA(LG(K))) /* =Magnet Right */  &kp LBRC  &kp RBRC  &kp TILDE
                             &kp LGUI  &trans    &kp SPACE   &kp RET    &trans    &kp RALT // =AltGr
            >;
        };
    };
};
"#;

/// A 34-key Sweep-shaped keymap (10/10/10/4 rows) with no board keyword
/// anywhere, exercising total-key-count naming and gap analysis.
pub const SWEEP_SHAPED_KEYMAP: &str = r#"
/ {
    keymap {
        compatible = "zmk,keymap";

        base {
            bindings = <
&kp Q  &kp W  &kp E  &kp R  &kp T      &kp Y  &kp U  &kp I      &kp O    &kp P
&kp A  &kp S  &kp D  &kp F  &kp G      &kp H  &kp J  &kp K      &kp L    &kp SEMI
&kp Z  &kp X  &kp C  &kp V  &kp B      &kp N  &kp M  &kp COMMA  &kp DOT  &kp FSLH
                     &mo 1  &kp SPACE  &kp RET  &mo 2
            >;
        };

        num {
            bindings = <
&kp N1  &kp N2  &kp N3  &kp N4  &kp N5     &kp N6  &kp N7  &kp N8  &kp N9  &kp N0
&trans  &trans  &trans  &trans  &trans     &kp LEFT  &kp DOWN  &kp UP  &kp RIGHT  &trans
&trans  &trans  &trans  &trans  &trans     &trans  &trans  &trans  &trans  &trans
                        &trans  &trans     &trans  &trans
            >;
        };
    };
};
"#;

/// A keymap section with metadata but no layer blocks; parsing must fail.
pub const EMPTY_KEYMAP: &str = r#"
/ {
    keymap {
        compatible = "zmk,keymap";
    };
};
"#;

/// Writes keymap source to a `.keymap` file in a fresh temp directory.
pub fn write_keymap_file(source: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("test.keymap");
    fs::write(&path, source).expect("Failed to write keymap file");
    (path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corne_fixture_has_three_layers() {
        assert_eq!(CORNE_KEYMAP.matches("bindings = <").count(), 3);
    }

    #[test]
    fn test_write_keymap_file() {
        let (path, _temp) = write_keymap_file(EMPTY_KEYMAP);
        assert!(path.exists());
    }
}
