//! Profile Card Core Library
//!
//! State, derived values and preference storage for the student profile card.
//!
//! ## Overview
//!
//! A [`ProfileCard`] owns one read-only [`Profile`] and the mutable
//! [`InteractionState`] around it: theme choice, view counter, favorite
//! hobbies and the contact modal. Every user event is a synchronous method
//! call; everything the card displays comes out of [`ProfileCard::view`] as a
//! [`CardView`], recomputed from scratch each time.
//!
//! Side effects the card cannot perform itself (applying the document-level
//! dark mode marker, showing a toast) are queued as [`CardEvent`]s for the
//! host to drain.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use profilecard_core::{MemoryStore, Profile, ProfileCard};
//!
//! let profile = Profile::from_json(r#"{ "name": "Ada Lovelace", "gpa": 3.9 }"#)?;
//! let mut card = ProfileCard::new(profile, Arc::new(MemoryStore::new()));
//!
//! card.toggle_theme();
//! card.register_click(&[]);
//!
//! let view = card.view();
//! assert_eq!(view.avatar.initials, "AL");
//! assert_eq!(view.view_count, 1);
//! ```

pub mod card;
pub mod derive;
pub mod error;
pub mod state;
pub mod storage;
pub mod types;
pub mod view;

// Re-exports
pub use card::{CardEvent, ProfileCard, SkillNotice};
pub use error::{CardError, CardResult};
pub use state::{
    ContactDraft, ContactField, ContactModal, ElementKind, InteractionState, ModalPhase,
};
pub use storage::{KeyValueStore, MemoryStore, SharedStore, Storage, THEME_KEY};
pub use types::*;
pub use view::{CardView, ModalView};
