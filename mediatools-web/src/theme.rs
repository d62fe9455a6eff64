//! Persisted light/dark theme store.
//!
//! The preference lives under one `localStorage` key; applying a theme
//! sets `data-theme` on the document root and swaps the toggle icon when
//! one is present. All functions degrade to no-ops outside a browser.

use mediatools_core::Theme;

pub const THEME_KEY: &str = "theme";
pub const THEME_ICON_ID: &str = "theme-icon";

/// Read the saved preference; missing or unrecognized values are light.
#[must_use]
pub fn persisted_theme() -> Theme {
    let stored = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// Reflect `theme` onto the document root and the toggle icon.
/// Idempotent; the icon update is skipped when no icon node exists.
pub fn apply_theme(theme: Theme) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let Some(doc) = win.document() else {
        return;
    };
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(icon) = doc.get_element_by_id(THEME_ICON_ID) {
        icon.set_class_name(theme.icon_class());
    }
}

/// Flip the preference, persist it, and re-apply. Returns the new theme.
pub fn toggle_theme() -> Theme {
    let next = persisted_theme().toggled();
    if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_KEY, next.as_str());
    }
    apply_theme(next);
    next
}
