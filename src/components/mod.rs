//! UI Components for the profile card.

mod contact_modal;
mod profile_view;
mod toast;

pub use contact_modal::ContactModal;
pub use profile_view::ProfileView;
pub use toast::{Toast, TOAST_DURATION};
