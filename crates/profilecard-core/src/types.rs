//! Core types for the profile card

pub mod badge;
pub mod profile;
pub mod social;
pub mod theme;

pub use badge::Badge;
pub use profile::{Gpa, Profile};
pub use social::SocialPlatform;
pub use theme::Theme;
