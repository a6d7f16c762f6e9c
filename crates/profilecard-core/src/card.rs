//! Profile card controller.
//!
//! [`ProfileCard`] pairs an immutable [`Profile`] with its
//! [`InteractionState`] and applies user events to it. Effects that reach
//! outside the card are queued as [`CardEvent`]s.

use std::fmt;

use crate::derive;
use crate::state::{ContactField, ContactModal, ElementKind, InteractionState};
use crate::storage::{SharedStore, THEME_KEY};
use crate::types::{Badge, Profile, SocialPlatform, Theme};
use crate::view::CardView;

/// Effects the host application must carry out
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    /// Apply or remove the document-wide dark mode marker
    ThemeChanged(Theme),
    /// Show a transient notification
    SkillNoticed(SkillNotice),
}

/// "<owner> is skilled in <skill>!"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillNotice {
    pub owner: String,
    pub skill: String,
}

impl fmt::Display for SkillNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is skilled in {}!", self.owner, self.skill)
    }
}

/// One mounted profile card
pub struct ProfileCard {
    profile: Profile,
    state: InteractionState,
    store: SharedStore,
    outbox: Vec<CardEvent>,
}

impl ProfileCard {
    /// Create a card, reading the theme preference once.
    ///
    /// A store that fails to answer leaves the card in the light theme.
    pub fn new(profile: Profile, store: SharedStore) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());

        for key in derive::unsupported_social_keys(&profile) {
            tracing::debug!(key, "ignoring link for unsupported social platform");
        }
        tracing::debug!(%theme, name = %profile.name, "profile card mounted");

        Self {
            profile,
            state: InteractionState::new(theme),
            store,
            outbox: Vec::new(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn view_count(&self) -> u64 {
        self.state.view_count
    }

    pub fn contact(&self) -> &ContactModal {
        &self.state.contact
    }

    pub fn is_favorite(&self, hobby: &str) -> bool {
        self.state.favorite_hobbies.contains(hobby)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Derived values
    // ═══════════════════════════════════════════════════════════════════════

    pub fn initials(&self) -> String {
        derive::initials(&self.profile.name)
    }

    pub fn gpa_label(&self) -> String {
        derive::gpa_label(self.profile.gpa)
    }

    pub fn is_honors(&self) -> bool {
        derive::is_honors(self.profile.gpa)
    }

    pub fn is_multi_skilled(&self) -> bool {
        derive::is_multi_skilled(&self.profile.skills)
    }

    pub fn badges(&self) -> Vec<Badge> {
        derive::badge_list(&self.profile)
    }

    pub fn social_links(&self) -> Vec<(SocialPlatform, String)> {
        derive::visible_social_links(&self.profile)
    }

    /// Render description for the current state
    pub fn view(&self) -> CardView {
        CardView::build(&self.profile, &self.state)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Events
    // ═══════════════════════════════════════════════════════════════════════

    /// Flip the theme and persist it.
    ///
    /// A failed write is logged; the in-memory theme still changes.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.theme.toggled();
        self.state.theme = theme;

        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }

        tracing::debug!(%theme, "theme toggled");
        self.outbox.push(CardEvent::ThemeChanged(theme));
        theme
    }

    /// Count a card view unless the click came through an interactive
    /// control. `path` lists the elements from the click origin outwards.
    pub fn register_click(&mut self, path: &[ElementKind]) -> bool {
        if !ElementKind::qualifies(path) {
            return false;
        }
        self.state.view_count += 1;
        tracing::trace!(views = self.state.view_count, "card viewed");
        true
    }

    /// Flip a hobby's favorite flag. Returns whether it is now a favorite.
    ///
    /// Names that are not among the profile's hobbies are ignored.
    pub fn toggle_hobby(&mut self, hobby: &str) -> bool {
        if !self.profile.has_hobby(hobby) {
            tracing::debug!(hobby, "ignoring toggle for unknown hobby");
            return false;
        }

        let favorites = &mut self.state.favorite_hobbies;
        if favorites.remove(hobby) {
            false
        } else {
            favorites.insert(hobby.to_string());
            true
        }
    }

    /// Announce a skill. Does not change state.
    pub fn skill_click(&mut self, skill: &str) -> Option<SkillNotice> {
        if !self.profile.has_skill(skill) {
            tracing::debug!(skill, "ignoring click on unknown skill");
            return None;
        }

        let notice = SkillNotice {
            owner: derive::display_owner(&self.profile).to_string(),
            skill: skill.to_string(),
        };
        self.outbox.push(CardEvent::SkillNoticed(notice.clone()));
        Some(notice)
    }

    pub fn open_contact(&mut self) -> bool {
        let opened = self.state.contact.open();
        if opened {
            tracing::debug!("contact form opened");
        }
        opened
    }

    pub fn edit_contact(&mut self, field: ContactField, value: String) -> bool {
        self.state.contact.edit(field, value)
    }

    /// Simulated send. Silently refuses an incomplete draft.
    pub fn submit_contact(&mut self) -> bool {
        let sent = self.state.contact.submit();
        if sent {
            tracing::info!(to = %self.profile.name, "contact message sent");
        }
        sent
    }

    /// Cancel, close button or backdrop dismissal.
    pub fn close_contact(&mut self) -> bool {
        self.state.contact.close()
    }

    /// Drain queued effects, oldest first.
    pub fn take_events(&mut self) -> Vec<CardEvent> {
        std::mem::take(&mut self.outbox)
    }
}

impl fmt::Debug for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileCard")
            .field("profile", &self.profile)
            .field("state", &self.state)
            .field("pending_events", &self.outbox.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::error::CardError;
    use crate::state::ModalPhase;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::types::Gpa;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, CardError> {
            Err(CardError::Io(std::io::Error::other("disk gone")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), CardError> {
            Err(CardError::Io(std::io::Error::other("disk gone")))
        }
    }

    fn profile() -> Profile {
        Profile {
            name: "Ada Lovelace".into(),
            gpa: Gpa::new(3.25),
            hobbies: vec!["music".into(), "chess".into()],
            skills: vec!["Rust".into(), "Git".into()],
            ..Default::default()
        }
    }

    fn card_with(store: Arc<MemoryStore>) -> ProfileCard {
        ProfileCard::new(profile(), store)
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let card = card_with(Arc::new(MemoryStore::new()));
        assert_eq!(card.theme(), Theme::Light);
    }

    #[test]
    fn test_theme_read_from_store() {
        let card = card_with(Arc::new(MemoryStore::with_value(THEME_KEY, "dark")));
        assert_eq!(card.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_theme_persists_each_change() {
        let store = Arc::new(MemoryStore::new());
        let mut card = card_with(store.clone());

        assert_eq!(card.toggle_theme(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(card.toggle_theme(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_theme_emits_events() {
        let mut card = card_with(Arc::new(MemoryStore::new()));
        card.toggle_theme();
        card.toggle_theme();

        assert_eq!(
            card.take_events(),
            vec![CardEvent::ThemeChanged(Theme::Dark), CardEvent::ThemeChanged(Theme::Light)]
        );
        assert!(card.take_events().is_empty());
    }

    #[test]
    fn test_broken_store_never_faults() {
        let mut card = ProfileCard::new(profile(), Arc::new(BrokenStore));
        assert_eq!(card.theme(), Theme::Light);
        assert_eq!(card.toggle_theme(), Theme::Dark);
        assert_eq!(card.theme(), Theme::Dark);
    }

    #[test]
    fn test_view_count() {
        let mut card = card_with(Arc::new(MemoryStore::new()));

        assert!(card.register_click(&[]));
        assert!(card.register_click(&[ElementKind::ListItem]));
        assert!(!card.register_click(&[ElementKind::Button]));
        assert!(!card.register_click(&[ElementKind::Surface, ElementKind::Link]));

        assert_eq!(card.view_count(), 2);
    }

    #[test]
    fn test_hobby_toggle_round_trip() {
        let mut card = card_with(Arc::new(MemoryStore::new()));
        let before = card.state().favorite_hobbies.clone();

        assert!(card.toggle_hobby("chess"));
        assert!(card.is_favorite("chess"));
        assert!(!card.toggle_hobby("chess"));

        assert_eq!(card.state().favorite_hobbies, before);
    }

    #[test]
    fn test_unknown_hobby_ignored() {
        let mut card = card_with(Arc::new(MemoryStore::new()));
        assert!(!card.toggle_hobby("skydiving"));
        assert!(card.state().favorite_hobbies.is_empty());
    }

    #[test]
    fn test_skill_click_notifies_without_state_change() {
        let mut card = card_with(Arc::new(MemoryStore::new()));
        let before = card.state().clone();

        let notice = card.skill_click("Rust").unwrap();
        assert_eq!(notice.to_string(), "Ada Lovelace is skilled in Rust!");
        assert_eq!(card.state(), &before);
        assert_eq!(card.take_events(), vec![CardEvent::SkillNoticed(notice)]);
    }

    #[test]
    fn test_skill_notice_for_nameless_profile() {
        let profile = Profile {
            skills: vec!["Git".into()],
            ..Default::default()
        };
        let mut card = ProfileCard::new(profile, Arc::new(MemoryStore::new()));
        let notice = card.skill_click("Git").unwrap();
        assert_eq!(notice.to_string(), "Student is skilled in Git!");
    }

    #[test]
    fn test_contact_flow() {
        let mut card = card_with(Arc::new(MemoryStore::new()));

        assert!(!card.submit_contact());
        assert!(card.open_contact());
        card.edit_contact(ContactField::Name, "Bob".into());
        card.edit_contact(ContactField::Email, "bob@example.com".into());
        assert!(!card.submit_contact());
        assert_eq!(card.contact().phase(), ModalPhase::Editing);

        card.edit_contact(ContactField::Message, "Hi Ada".into());
        assert!(card.submit_contact());
        assert_eq!(card.contact().phase(), ModalPhase::Sent);

        assert!(card.close_contact());
        assert_eq!(card.contact().phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_derived_values_follow_profile() {
        let card = card_with(Arc::new(MemoryStore::new()));
        assert_eq!(card.initials(), "AL");
        assert_eq!(card.gpa_label(), "3.25");
        assert!(!card.is_honors());
        assert!(!card.is_multi_skilled());
        assert!(card.badges().is_empty());
        assert!(card.social_links().is_empty());
    }
}
