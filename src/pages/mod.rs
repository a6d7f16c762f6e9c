//! Page components for the profile card.

mod profile;

pub use profile::ProfilePage;
