//! Contact Modal Component
//!
//! Overlay with the contact form or the "sent" confirmation. Sending is
//! simulated; nothing leaves the machine.

use dioxus::prelude::*;
use profilecard_core::{ContactField, ModalView};
use profilecard_ui::{Button, ButtonVariant, CloseButton, Input, TextArea};

/// Contact Modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ContactModal {
///         view: card_view.modal.clone(),
///         on_edit: move |(field, value)| card.write().edit_contact(field, value),
///         on_submit: move |_| card.write().submit_contact(),
///         on_close: move |_| card.write().close_contact(),
///     }
/// }
/// ```
#[component]
pub fn ContactModal(
    /// What the overlay shows
    view: ModalView,
    /// Raw value typed into one of the fields
    on_edit: EventHandler<(ContactField, String)>,
    /// Send button / form submission
    on_submit: EventHandler<()>,
    /// Cancel, close button or backdrop
    on_close: EventHandler<()>,
) -> Element {
    let title = match &view {
        ModalView::Hidden => return rsx! {},
        ModalView::Form { title, .. } | ModalView::Sent { title } => title.clone(),
    };

    let body = match view {
        ModalView::Form { draft, .. } => rsx! {
            form {
                class: "contact-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    on_submit.call(());
                },
                Input {
                    label: "Your Name".to_string(),
                    name: "name".to_string(),
                    value: draft.get(ContactField::Name).to_string(),
                    oninput: move |v| on_edit.call((ContactField::Name, v)),
                    required: true,
                }
                Input {
                    label: "Your Email".to_string(),
                    name: "email".to_string(),
                    input_type: "email".to_string(),
                    value: draft.get(ContactField::Email).to_string(),
                    oninput: move |v| on_edit.call((ContactField::Email, v)),
                    required: true,
                }
                TextArea {
                    label: "Message".to_string(),
                    name: "message".to_string(),
                    class: "full".to_string(),
                    value: draft.get(ContactField::Message).to_string(),
                    oninput: move |v| on_edit.call((ContactField::Message, v)),
                    required: true,
                }
                div { class: "modal-actions full",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        "Send Message"
                    }
                }
            }
        },
        _ => rsx! {
            div { class: "contact-sent",
                "✅ Message sent successfully. Thank you!"
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
        }
        div {
            class: "contact-modal",
            role: "dialog",
            "aria-modal": "true",
            div { class: "contact-card",
                CloseButton { onclick: move |_| on_close.call(()) }
                h3 { class: "modal-title", "{title}" }
                {body}
            }
        }
    }
}
