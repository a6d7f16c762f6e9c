//! Styling for the profile card.

mod styles;

use profilecard_core::Theme;

pub use styles::GLOBAL_STYLES;

/// Class on `<html>` that switches the stylesheet to dark colors
pub const DARK_CLASS: &str = "dark";

/// Script that sets or clears the dark marker on the document element.
pub fn theme_script(theme: Theme) -> String {
    format!(
        "document.documentElement.classList.toggle('{}', {});",
        DARK_CLASS,
        theme.is_dark()
    )
}
