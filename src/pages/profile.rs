//! Profile page: title banner above a single profile card.

use dioxus::prelude::*;
use profilecard_core::{CardEvent, Profile};

use crate::components::ProfileView;

#[component]
pub fn ProfilePage(profile: Profile, on_event: EventHandler<CardEvent>) -> Element {
    rsx! {
        div { class: "profile-page",
            header { class: "page-header",
                h1 { class: "page-title", "🎓 Personal Profile Card 🌸" }
                p { class: "page-subtitle",
                    "Tap the card to count a view, pick favorite hobbies, or get in touch."
                }
            }

            ProfileView { profile: profile, on_event: on_event }
        }
    }
}
