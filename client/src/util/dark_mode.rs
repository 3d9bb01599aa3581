//! Theme initialization and toggle.
//!
//! The initial theme follows the system `prefers-color-scheme` query. The
//! choice is applied as a `.dark-mode` class on `<html>`, mirrored into the
//! `<meta name="theme-color">` tag, and is not stored.
//! Requires a browser environment; other builds are no-ops.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const DARK_MODE_CLASS: &str = "dark-mode";

pub const LIGHT_THEME_COLOR: &str = "hsl(0 0% 100%)";
pub const DARK_THEME_COLOR: &str = "hsl(240deg 10% 3.92%)";

/// Browser chrome color for the given theme.
pub fn theme_color(dark: bool) -> &'static str {
    if dark { DARK_THEME_COLOR } else { LIGHT_THEME_COLOR }
}

/// Whether the system prefers a dark color scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element and sync
/// the `theme-color` meta tag.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = doc.document_element() {
            let class_list = el.class_list();
            let outcome =
                if enabled { class_list.add_1(DARK_MODE_CLASS) } else { class_list.remove_1(DARK_MODE_CLASS) };
            if outcome.is_err() {
                log::warn!("failed to update theme class");
            }
        }
        if let Ok(Some(meta)) = doc.query_selector("meta[name=\"theme-color\"]") {
            if meta.set_attribute("content", theme_color(enabled)).is_err() {
                log::warn!("failed to update theme-color meta");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
