//! Badge Components
//!
//! The achievements shelf. Renders nothing at all when there are no badges.

use dioxus::prelude::*;
use profilecard_core::Badge;

/// A single medal chip
#[component]
pub fn BadgeChip(badge: Badge) -> Element {
    rsx! {
        span { class: "{badge.class()}",
            span { class: "medal", "★" }
            " {badge.text}"
        }
    }
}

/// Titled section listing all badges, omitted when empty
#[component]
pub fn BadgeShelf(badges: Vec<Badge>) -> Element {
    if badges.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "profile-section",
            h3 { "🏆 Achievements" }
            div { class: "badges",
                for badge in badges {
                    BadgeChip { badge: badge }
                }
            }
        }
    }
}
