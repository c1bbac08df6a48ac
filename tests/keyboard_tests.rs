// Host-side tests for the pure keyboard shortcut mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

// Re-implement the pure mapping for testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyAction {
    ResetCamera,
    ToggleTheme,
    ToggleHint,
    DismissHint,
}

#[inline]
fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::ResetCamera),
        "t" | "T" => Some(KeyAction::ToggleTheme),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "Escape" => Some(KeyAction::DismissHint),
        _ => None,
    }
}

#[test]
fn action_for_key_valid_keys() {
    assert_eq!(action_for_key("r"), Some(KeyAction::ResetCamera));
    assert_eq!(action_for_key("R"), Some(KeyAction::ResetCamera));
    assert_eq!(action_for_key("t"), Some(KeyAction::ToggleTheme));
    assert_eq!(action_for_key("T"), Some(KeyAction::ToggleTheme));
    assert_eq!(action_for_key("h"), Some(KeyAction::ToggleHint));
    assert_eq!(action_for_key("H"), Some(KeyAction::ToggleHint));
    assert_eq!(action_for_key("Escape"), Some(KeyAction::DismissHint));
}

#[test]
fn action_for_key_invalid_keys() {
    assert_eq!(action_for_key("a"), None);
    assert_eq!(action_for_key("q"), None);
    assert_eq!(action_for_key("Enter"), None);
    assert_eq!(action_for_key("Tab"), None);
    assert_eq!(action_for_key("ArrowUp"), None);
    assert_eq!(action_for_key("1"), None);
    assert_eq!(action_for_key(" "), None);
}

#[test]
fn action_for_key_edge_cases() {
    assert_eq!(action_for_key(""), None);
    // Modifier names and full words never match single-letter shortcuts.
    assert_eq!(action_for_key("Shift"), None);
    assert_eq!(action_for_key("reset"), None);
    assert_eq!(action_for_key("escape"), None);
}
