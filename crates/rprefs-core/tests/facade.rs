// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Accessor contract over borrowed and shared bundles.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use rprefs_core::{PrefsBundle, PrefsError, PrefsView};
use serde_json::{json, Value};

#[test]
fn scenario_dark_theme_and_fifty_items() {
    let root = json!({
        "general_prefs": { "theme": "dark" },
        "history_prefs": { "maxItems": 50 }
    });
    let view = PrefsView::new(&root);
    assert_eq!(view.general_prefs().unwrap(), json!({ "theme": "dark" }));
    assert_eq!(view.history_prefs().unwrap(), json!({ "maxItems": 50 }));
}

#[test]
fn scenario_empty_bundle() {
    let root = json!({});
    let view = PrefsView::new(&root);
    assert!(view.general_prefs().is_none());
    assert!(view.history_prefs().is_none());
}

#[test]
fn handles_alias_the_bound_fields() {
    let root = json!({
        "general_prefs": { "theme": "dark", "fontSize": 12 },
        "history_prefs": { "maxItems": 50 }
    });
    let view = PrefsView::new(&root);
    let general = view.general_prefs().unwrap();
    let history = view.history_prefs().unwrap();
    assert!(std::ptr::eq(general.as_value(), &root["general_prefs"]));
    assert!(std::ptr::eq(history.as_value(), &root["history_prefs"]));
    assert!(std::ptr::eq(view.raw(), &root));
}

#[test]
fn repeated_calls_are_idempotent() {
    let bundle = PrefsBundle::new(json!({
        "general_prefs": { "theme": "light" },
        "history_prefs": { "maxItems": 5 }
    }));
    let first = bundle.general_prefs().unwrap();
    for _ in 0..4 {
        let again = bundle.general_prefs().unwrap();
        assert_eq!(first, again);
        assert!(std::ptr::eq(first.as_value(), again.as_value()));
        assert_eq!(bundle.history_prefs(), bundle.history_prefs());
    }
    assert_eq!(bundle.raw()["general_prefs"]["theme"], "light");
}

#[test]
fn one_section_missing() {
    let bundle = PrefsBundle::new(json!({ "history_prefs": { "maxItems": 50 } }));
    assert!(bundle.general_prefs().is_none());
    assert!(bundle.try_general_prefs().unwrap().is_none());
    assert_eq!(bundle.history_prefs().unwrap().get("maxItems"), Some(&json!(50)));
}

#[test]
fn wrong_shape_is_lenient_unless_checked() {
    let bundle = PrefsBundle::new(json!({
        "general_prefs": "dark",
        "history_prefs": 50
    }));
    assert!(bundle.general_prefs().is_none());
    assert!(bundle.history_prefs().is_none());

    let err = bundle.try_general_prefs().unwrap_err();
    assert_eq!(
        err.to_string(),
        "field `general_prefs` has type string, expected object"
    );
    assert!(matches!(
        bundle.try_history_prefs(),
        Err(PrefsError::TypeMismatch {
            field: "history_prefs",
            found: "number",
            ..
        })
    ));
}

#[test]
fn concurrent_reads_see_the_same_tree() {
    let bundle = PrefsBundle::new(json!({ "general_prefs": { "theme": "dark" } }));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let bundle = bundle.clone();
            std::thread::spawn(move || {
                bundle
                    .general_prefs()
                    .and_then(|g| g.get("theme").cloned())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(Value::from("dark")));
    }
}
