//! Profile View component.
//!
//! Maps a [`CardView`] to markup and forwards user events to the
//! [`ProfileCard`] that owns the interaction state.
//!
//! ## Click counting
//!
//! Every interactive control pushes its [`ElementKind`] onto `click_path`
//! before the click bubbles up to the card. The card's own handler then takes
//! the collected path and lets the core decide whether it was a view.

use dioxus::prelude::*;
use profilecard_core::{CardEvent, CardView, ContactField, ElementKind, Profile, ProfileCard};
use profilecard_ui::{Activation, BadgeShelf, Button, ButtonVariant, Pill, Tag};

use super::ContactModal;
use crate::context::use_store;

/// Hand queued card effects to the host, oldest first.
fn flush_events(mut card: Signal<ProfileCard>, on_event: EventHandler<CardEvent>) {
    let events = card.write().take_events();
    for event in events {
        on_event.call(event);
    }
}

/// Student profile card with theme toggle, favorites and contact form
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProfileView {
///         profile: profile.clone(),
///         on_event: move |event| match event {
///             CardEvent::ThemeChanged(theme) => apply_theme(theme),
///             CardEvent::SkillNoticed(notice) => show_toast(notice),
///         },
///     }
/// }
/// ```
#[component]
pub fn ProfileView(
    /// Profile to display; fixed for the lifetime of the card
    profile: Profile,
    /// Receives theme changes and skill notices
    on_event: EventHandler<CardEvent>,
) -> Element {
    let store = use_store();
    let mut card = use_signal(move || ProfileCard::new(profile, store));
    let mut click_path: Signal<Vec<ElementKind>> = use_signal(Vec::new);

    // Let the host apply the stored theme once on mount
    use_effect(move || {
        let theme = card.peek().theme();
        on_event.call(CardEvent::ThemeChanged(theme));
    });

    let view: CardView = card.read().view();

    rsx! {
        div {
            class: "profile-card",
            onclick: move |_| {
                let path = std::mem::take(&mut *click_path.write());
                card.write().register_click(&path);
            },

            // Theme toggle
            Button {
                variant: ButtonVariant::Toggle,
                aria_label: "Toggle theme".to_string(),
                onclick: move |_| {
                    click_path.write().push(ElementKind::Button);
                    card.write().toggle_theme();
                    flush_events(card, on_event);
                },
                span { class: "icon", "{view.theme_toggle.icon}" }
                " {view.theme_toggle.label}"
            }

            // Header
            div { class: "profile-header",
                div { class: view.avatar.class(), "{view.avatar.initials}" }
                h1 { class: "profile-name", "{view.name}" }
                div { class: "student-id", "{view.student_id}" }
                div { class: "view-count", title: "Card views", "👁️ {view.view_count}" }

                if !view.social_links.is_empty() {
                    div { class: "social-links",
                        for link in view.social_links.iter() {
                            a {
                                key: "{link.platform.key()}",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noreferrer",
                                title: link.platform.label(),
                                onclick: move |_| click_path.write().push(ElementKind::Link),
                                "{link.platform.icon()}"
                            }
                        }
                    }
                }
            }

            // Basic info
            div { class: "profile-info",
                for item in view.info.iter() {
                    div { key: "{item.label}", class: "info-item",
                        div { class: "info-label", "{item.label}" }
                        div { class: "info-value", "{item.value}" }
                    }
                }
            }

            // Hobbies
            div { class: "profile-section",
                h3 { "🎯 Hobbies" }
                ul { class: "hobbies-list",
                    for (index, hobby) in view.hobbies.iter().enumerate() {
                        {
                            let name = hobby.name.clone();
                            rsx! {
                                Pill {
                                    key: "{index}",
                                    label: hobby.text(),
                                    selected: hobby.favorite,
                                    title: hobby.hint().to_string(),
                                    on_activate: move |activation| {
                                        if activation == Activation::Click {
                                            click_path.write().push(ElementKind::ListItem);
                                        }
                                        card.write().toggle_hobby(&name);
                                    },
                                }
                            }
                        }
                    }
                }
            }

            // Skills
            div { class: "profile-section",
                h3 { "💻 Skills" }
                div { class: "skills",
                    for (index, skill) in view.skills.iter().enumerate() {
                        {
                            let label = skill.clone();
                            let skill = skill.clone();
                            rsx! {
                                Tag {
                                    key: "{index}",
                                    label: label,
                                    on_activate: move |activation| {
                                        if activation == Activation::Click {
                                            click_path.write().push(ElementKind::Tag);
                                        }
                                        card.write().skill_click(&skill);
                                        flush_events(card, on_event);
                                    },
                                }
                            }
                        }
                    }
                }
            }

            // Achievements
            BadgeShelf { badges: view.badges.clone() }

            // Contact button
            Button {
                variant: ButtonVariant::Contact,
                onclick: move |_| {
                    click_path.write().push(ElementKind::Button);
                    card.write().open_contact();
                },
                "{view.contact_label}"
            }
        }

        // The overlay sits outside the card so modal clicks never count as views
        ContactModal {
            view: view.modal.clone(),
            on_edit: move |(field, value): (ContactField, String)| {
                card.write().edit_contact(field, value);
            },
            on_submit: move |_| {
                card.write().submit_contact();
            },
            on_close: move |_| {
                card.write().close_contact();
            },
        }
    }
}
