//! Declarative description of a rendered card.
//!
//! [`CardView`] is what the UI layer draws: every string and flag is already
//! decided here, so markup code only maps fields to elements.

use crate::derive;
use crate::state::{ContactDraft, ContactModal, InteractionState};
use crate::types::{Badge, Profile, SocialPlatform, Theme};

/// Full render description of one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub theme: Theme,
    pub theme_toggle: ThemeToggleView,
    pub avatar: AvatarView,
    pub name: String,
    pub student_id: String,
    pub view_count: u64,
    pub social_links: Vec<SocialLinkView>,
    pub info: Vec<InfoItem>,
    pub hobbies: Vec<HobbyView>,
    pub skills: Vec<String>,
    /// Achievements shelf; hidden when empty
    pub badges: Vec<Badge>,
    pub contact_label: String,
    pub modal: ModalView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggleView {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarView {
    pub initials: String,
    /// Pulsing honors treatment
    pub highlighted: bool,
}

impl AvatarView {
    pub fn class(&self) -> &'static str {
        if self.highlighted {
            "profile-avatar pulse"
        } else {
            "profile-avatar"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinkView {
    pub platform: SocialPlatform,
    pub url: String,
}

/// One cell of the info grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HobbyView {
    pub name: String,
    pub favorite: bool,
}

impl HobbyView {
    pub fn text(&self) -> String {
        if self.favorite {
            format!("⭐ {}", self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn hint(&self) -> &'static str {
        if self.favorite {
            "Click to remove from favorites"
        } else {
            "Click to mark as favorite"
        }
    }
}

/// What the contact overlay shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView {
    Hidden,
    Form { title: String, draft: ContactDraft },
    Sent { title: String },
}

impl CardView {
    /// Build the view from scratch.
    pub fn build(profile: &Profile, state: &InteractionState) -> Self {
        let honors = derive::is_honors(profile.gpa);

        let mut gpa = derive::gpa_label(profile.gpa);
        if honors {
            gpa.push_str(" 🌟");
        }

        let info = vec![
            InfoItem {
                label: "Major",
                value: profile.major.clone(),
            },
            InfoItem {
                label: "Year",
                value: profile.year.to_string(),
            },
            InfoItem {
                label: "Age",
                value: profile.age.to_string(),
            },
            InfoItem {
                label: "GPA",
                value: gpa,
            },
        ];

        let hobbies = profile
            .hobbies
            .iter()
            .map(|name| HobbyView {
                name: name.clone(),
                favorite: state.favorite_hobbies.contains(name),
            })
            .collect();

        let social_links = derive::visible_social_links(profile)
            .into_iter()
            .map(|(platform, url)| SocialLinkView { platform, url })
            .collect();

        let title = format!("Contact {}", profile.name);
        let modal = match &state.contact {
            ContactModal::Closed => ModalView::Hidden,
            ContactModal::Editing(draft) => ModalView::Form {
                title,
                draft: draft.clone(),
            },
            ContactModal::Sent => ModalView::Sent { title },
        };

        Self {
            theme: state.theme,
            theme_toggle: ThemeToggleView {
                icon: state.theme.toggle_icon(),
                label: state.theme.toggle_label(),
            },
            avatar: AvatarView {
                initials: derive::initials(&profile.name),
                highlighted: honors,
            },
            name: profile.name.clone(),
            student_id: profile.student_id.clone(),
            view_count: state.view_count,
            social_links,
            info,
            hobbies,
            skills: profile.skills.clone(),
            badges: derive::badge_list(profile),
            contact_label: format!("📧 Contact {}", profile.name),
            modal,
        }
    }
}
