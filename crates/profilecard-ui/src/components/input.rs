//! Input Field Components
//!
//! Labelled text inputs and textareas for the contact form. The label wraps
//! its control so the whole row is clickable.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called with the raw value on every keystroke
    pub oninput: EventHandler<String>,
    /// Label text shown above the control
    pub label: String,
    /// Form field name
    pub name: String,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Optional additional CSS classes for the label row
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         label: "Your Email".to_string(),
///         name: "email".to_string(),
///         input_type: "email".to_string(),
///         value: draft.email.clone(),
///         oninput: move |v| card.write().edit_contact(ContactField::Email, v),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label { class: props.class.clone().unwrap_or_default(),
            "{props.label}"
            input {
                class: "input-field",
                name: "{props.name}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called with the raw value on every keystroke
    pub oninput: EventHandler<String>,
    /// Label text shown above the control
    pub label: String,
    /// Form field name
    pub name: String,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Optional additional CSS classes for the label row
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled multi-line input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        label { class: props.class.clone().unwrap_or_default(),
            "{props.label}"
            textarea {
                class: "input-field textarea",
                name: "{props.name}",
                rows: "{props.rows}",
                required: props.required,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
