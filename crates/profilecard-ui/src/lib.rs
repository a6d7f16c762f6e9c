//! Profile Card UI Components
//!
//! Dioxus widgets the profile card is assembled from.
//!
//! ## Design Philosophy
//!
//! - **Pink (#f78fb3)**: Titles, primary actions, favorites
//! - **Gold / Silver**: Achievement badges
//! - **Paper (#fff7fb)** / **Ink (#1e1b24)**: Light and dark backgrounds
//!
//! Widgets stay stateless: they render props and report activations through
//! event handlers. Card state lives in `profilecard-core`.

pub mod components;

pub use components::*;
