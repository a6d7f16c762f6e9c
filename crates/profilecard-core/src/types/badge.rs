//! Achievement badges

use serde::Deserialize;

use super::profile::null_as_default;

/// A badge on the achievements shelf
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Badge {
    /// Display text, may include an emoji prefix
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    /// Styling tag (`gold`, `silver`, ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

impl Badge {
    pub fn new(text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
        }
    }

    /// Awarded for a GPA of 3.5 or above
    pub fn honors() -> Self {
        Self::new("🌟 Honors", "gold")
    }

    /// Awarded for listing five or more skills
    pub fn multi_skilled() -> Self {
        Self::new("💪 Multi-skilled", "silver")
    }

    /// CSS class for the badge chip
    pub fn class(&self) -> String {
        if self.kind.is_empty() {
            "badge".to_string()
        } else {
            format!("badge {}", self.kind)
        }
    }
}
