//! Pill and Tag Components
//!
//! Activatable list entries: hobby pills and skill tags. Both react to a
//! pointer click and to Enter/Space while focused, and report which one it
//! was so the host can tell card clicks from keyboard use.

use dioxus::prelude::*;

/// How an item was activated
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Activation {
    Click,
    Keyboard,
}

/// Enter and Space activate a focused item
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// Properties for the Pill component
#[derive(Clone, PartialEq, Props)]
pub struct PillProps {
    /// Text shown in the pill
    pub label: String,
    /// Highlighted state
    #[props(default = false)]
    pub selected: bool,
    /// Tooltip text
    #[props(default)]
    pub title: Option<String>,
    /// Handler called on click or Enter/Space
    pub on_activate: EventHandler<Activation>,
}

/// A selectable list entry
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ul { class: "hobbies-list",
///         Pill {
///             label: "⭐ chess".to_string(),
///             selected: true,
///             on_activate: move |_| card.write().toggle_hobby("chess"),
///         }
///     }
/// }
/// ```
#[component]
pub fn Pill(props: PillProps) -> Element {
    let on_activate = props.on_activate;

    rsx! {
        li {
            class: if props.selected { "hobby-item favorite" } else { "hobby-item" },
            role: "button",
            tabindex: "0",
            "aria-pressed": if props.selected { "true" } else { "false" },
            title: props.title.clone(),
            onclick: move |_| on_activate.call(Activation::Click),
            onkeydown: move |e| {
                if is_activation_key(&e.key()) {
                    on_activate.call(Activation::Keyboard);
                }
            },
            "{props.label}"
        }
    }
}

/// Properties for the Tag component
#[derive(Clone, PartialEq, Props)]
pub struct TagProps {
    /// Text shown in the tag
    pub label: String,
    /// Handler called on click or Enter/Space
    pub on_activate: EventHandler<Activation>,
}

#[component]
pub fn Tag(props: TagProps) -> Element {
    let on_activate = props.on_activate;

    rsx! {
        div {
            class: "skill-tag",
            role: "button",
            tabindex: "0",
            onclick: move |_| on_activate.call(Activation::Click),
            onkeydown: move |e| {
                if is_activation_key(&e.key()) {
                    on_activate.call(Activation::Keyboard);
                }
            },
            "{props.label}"
        }
    }
}
