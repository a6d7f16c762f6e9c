//! Reusable UI components
//!
//! All components read their colors from the CSS custom properties set by
//! the host stylesheet, so the same markup works in light and dark themes.

mod badge_chip;
mod button;
mod input;
mod pill;

pub use badge_chip::*;
pub use button::*;
pub use input::*;
pub use pill::*;
