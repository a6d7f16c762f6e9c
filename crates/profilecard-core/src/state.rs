//! Component-local interaction state.
//!
//! Everything the user can change while the card is mounted lives here:
//! theme, view counter, favorite hobbies and the contact modal. The profile
//! itself is never part of this state.

use std::collections::BTreeSet;

use crate::types::Theme;

/// Mutable state owned by one card
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pub theme: Theme,
    pub view_count: u64,
    /// Always a subset of the profile's hobbies
    pub favorite_hobbies: BTreeSet<String>,
    pub contact: ContactModal,
}

impl InteractionState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Click origin
// ═══════════════════════════════════════════════════════════════════════════════

/// Kind of element a click passed through on its way to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Button,
    Link,
    Input,
    TextArea,
    Select,
    Label,
    Form,
    ListItem,
    Tag,
    Surface,
}

impl ElementKind {
    /// Controls whose clicks must not count as card views.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            ElementKind::Button
                | ElementKind::Link
                | ElementKind::Input
                | ElementKind::TextArea
                | ElementKind::Select
                | ElementKind::Label
                | ElementKind::Form
        )
    }

    /// A click qualifies as a view when nothing between its origin and the
    /// card is interactive. `path` runs from the origin outwards.
    pub fn qualifies(path: &[ElementKind]) -> bool {
        !path.iter().any(ElementKind::is_interactive)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Contact modal
// ═══════════════════════════════════════════════════════════════════════════════

/// One of the three contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Unsent contact message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// All three fields contain something other than whitespace
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// Coarse modal state, without the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Editing,
    Sent,
}

/// Contact modal state machine.
///
/// ```text
/// Closed --open--> Editing --submit (complete draft)--> Sent
///   ^                 |                                   |
///   +-----close-------+----------------close--------------+
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactModal {
    #[default]
    Closed,
    Editing(ContactDraft),
    Sent,
}

impl ContactModal {
    pub fn phase(&self) -> ModalPhase {
        match self {
            ContactModal::Closed => ModalPhase::Closed,
            ContactModal::Editing(_) => ModalPhase::Editing,
            ContactModal::Sent => ModalPhase::Sent,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ContactModal::Closed)
    }

    pub fn draft(&self) -> Option<&ContactDraft> {
        match self {
            ContactModal::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Closed -> Editing with an empty draft. No-op when already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        *self = ContactModal::Editing(ContactDraft::default());
        true
    }

    /// Store the raw value. Only meaningful while editing.
    pub fn edit(&mut self, field: ContactField, value: String) -> bool {
        match self {
            ContactModal::Editing(draft) => {
                draft.set(field, value);
                true
            }
            _ => false,
        }
    }

    /// Editing -> Sent when the draft is complete; otherwise unchanged.
    pub fn submit(&mut self) -> bool {
        match self {
            ContactModal::Editing(draft) if draft.is_complete() => {
                *self = ContactModal::Sent;
                true
            }
            _ => false,
        }
    }

    /// Cancel, close button and backdrop all land here. Drops any draft.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        *self = ContactModal::Closed;
        true
    }
}
