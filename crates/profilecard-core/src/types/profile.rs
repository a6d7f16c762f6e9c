//! Student Profile Type - the read-only record a card displays
//!
//! Profiles arrive as camelCase JSON. Every field is optional on the wire:
//! missing or `null` strings and collections are empty, counts that are not
//! whole numbers read as zero, and a missing or non-numeric GPA becomes a
//! non-finite [`Gpa`].

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Badge;
use crate::error::{CardError, CardResult};

/// Student profile shown on the card
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// Full display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Institution-issued student identifier
    #[serde(deserialize_with = "null_as_default")]
    pub student_id: String,

    /// Field of study
    #[serde(deserialize_with = "null_as_default")]
    pub major: String,

    /// Year of study
    #[serde(deserialize_with = "lenient_count")]
    pub year: u32,

    /// Age in years
    #[serde(deserialize_with = "lenient_count")]
    pub age: u32,

    /// Grade point average, expected in [0.0, 4.0]
    pub gpa: Gpa,

    /// Contact email
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,

    /// Hobbies in display order
    #[serde(deserialize_with = "null_as_default")]
    pub hobbies: Vec<String>,

    /// Skills in display order
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,

    /// Platform key (`github`, `twitter`, ...) to profile URL
    #[serde(deserialize_with = "lenient_links")]
    pub socials: HashMap<String, String>,

    /// Externally supplied achievement badges
    #[serde(deserialize_with = "null_as_default")]
    pub badges: Vec<Badge>,
}

impl Profile {
    /// Parse a profile from a JSON document.
    pub fn from_json(json: &str) -> CardResult<Self> {
        serde_json::from_str(json).map_err(|e| CardError::Serialization(e.to_string()))
    }

    /// Load a profile from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Whether `hobby` is one of this profile's hobbies
    pub fn has_hobby(&self, hobby: &str) -> bool {
        self.hobbies.iter().any(|h| h == hobby)
    }

    /// Whether `skill` is one of this profile's skills
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// `null` reads as the field's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole non-negative number from a JSON number or numeric string, else 0.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    let value = match &raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value
        .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map_or(0, |v| v.trunc() as u32))
}

/// Link map that tolerates `null` and drops entries whose URL is not a string.
fn lenient_links<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<HashMap<String, String>, D::Error> {
    let raw: Option<HashMap<String, Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, url)| match url {
            Value::String(url) => Some((key, url)),
            _ => None,
        })
        .collect())
}

/// Grade point average as supplied by the profile source.
///
/// Accepts a JSON number or a numeric string. Anything else (null, booleans,
/// unparsable text) is kept as NaN so that labels fall back to a placeholder
/// and threshold checks fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gpa(f64);

impl Gpa {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// GPA that could not be read as a number
    pub fn missing() -> Self {
        Self(f64::NAN)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// The numeric value, if it is a finite number
    pub fn finite(&self) -> Option<f64> {
        self.0.is_finite().then_some(self.0)
    }

    fn coerce(raw: &Value) -> Self {
        match raw {
            Value::Number(n) => n.as_f64().map_or_else(Gpa::missing, Gpa),
            Value::String(s) => s.trim().parse::<f64>().map_or_else(|_| Gpa::missing(), Gpa),
            _ => Self::missing(),
        }
    }
}

impl Default for Gpa {
    fn default() -> Self {
        Self::missing()
    }
}

impl From<f64> for Gpa {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finite() {
            Some(v) => write!(f, "{:.2}", v),
            None => write!(f, "-"),
        }
    }
}

impl<'de> Deserialize<'de> for Gpa {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::coerce(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_profile_from_json() {
        let profile = Profile::from_json(
            r#"{
                "name": "Ada Lovelace",
                "studentId": "6754310070-8",
                "major": "Software Engineering",
                "year": 2,
                "age": 19,
                "gpa": 3.25,
                "email": "ada@example.edu",
                "hobbies": ["music", "chess"],
                "skills": ["Rust", "Git"],
                "socials": { "github": "https://github.com/ada" },
                "badges": [{ "text": "Dean's List", "type": "gold" }]
            }"#,
        )
        .unwrap();

        assert_eq!(profile.student_id, "6754310070-8");
        assert_eq!(profile.year, 2);
        assert_eq!(profile.gpa.finite(), Some(3.25));
        assert_eq!(profile.hobbies, vec!["music", "chess"]);
        assert_eq!(
            profile.socials.get("github").map(String::as_str),
            Some("https://github.com/ada")
        );
        assert_eq!(profile.badges[0].kind, "gold");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile = Profile::from_json(r#"{ "name": "Solo" }"#).unwrap();
        assert_eq!(profile.name, "Solo");
        assert!(profile.hobbies.is_empty());
        assert!(profile.socials.is_empty());
        assert!(profile.badges.is_empty());
        assert!(profile.gpa.finite().is_none());
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let profile = Profile::from_json(
            r#"{
                "name": "Ada",
                "studentId": null,
                "email": null,
                "hobbies": null,
                "skills": null,
                "socials": null,
                "badges": null,
                "year": null,
                "age": null,
                "gpa": null
            }"#,
        )
        .unwrap();

        assert_eq!(profile.name, "Ada");
        assert!(profile.student_id.is_empty());
        assert!(profile.email.is_empty());
        assert!(profile.hobbies.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.socials.is_empty());
        assert!(profile.badges.is_empty());
        assert_eq!(profile.year, 0);
        assert_eq!(profile.age, 0);
        assert!(profile.gpa.finite().is_none());
    }

    #[test]
    fn test_each_null_collection_alone() {
        for field in ["hobbies", "skills", "socials", "badges"] {
            let json = format!(r#"{{ "name": "Ada", "{}": null }}"#, field);
            let profile = Profile::from_json(&json).unwrap();
            assert_eq!(profile.name, "Ada", "{} null should not fail the profile", field);
        }
    }

    #[test]
    fn test_year_and_age_coerced() {
        let profile = Profile::from_json(r#"{ "year": "2", "age": 19.0 }"#).unwrap();
        assert_eq!(profile.year, 2);
        assert_eq!(profile.age, 19);

        let profile = Profile::from_json(r#"{ "year": "second", "age": -3 }"#).unwrap();
        assert_eq!(profile.year, 0);
        assert_eq!(profile.age, 0);
    }

    #[test]
    fn test_non_string_social_urls_dropped() {
        let profile = Profile::from_json(
            r#"{ "socials": {
                "github": "https://github.com/ada",
                "twitter": null,
                "facebook": 7
            } }"#,
        )
        .unwrap();
        assert_eq!(profile.socials.len(), 1);
        assert!(profile.socials.contains_key("github"));
    }

    #[test]
    fn test_gpa_accepts_numeric_string() {
        let profile = Profile::from_json(r#"{ "gpa": " 3.5 " }"#).unwrap();
        assert_eq!(profile.gpa.finite(), Some(3.5));
    }

    #[test]
    fn test_gpa_non_numeric_is_missing() {
        for raw in [r#""n/a""#, "null", "true", "[]"] {
            let json = format!(r#"{{ "gpa": {} }}"#, raw);
            let profile = Profile::from_json(&json).unwrap();
            assert!(profile.gpa.finite().is_none(), "gpa {} should be missing", raw);
        }
    }

    #[test]
    fn test_gpa_display() {
        assert_eq!(Gpa::new(3.0).to_string(), "3.00");
        assert_eq!(Gpa::new(3.456).to_string(), "3.46");
        assert_eq!(Gpa::missing().to_string(), "-");
        assert_eq!(Gpa::new(f64::INFINITY).to_string(), "-");
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = Profile::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CardError::Serialization(_)));
    }

    #[test]
    fn test_has_hobby_and_skill() {
        let profile = Profile {
            hobbies: vec!["music".into()],
            skills: vec!["Rust".into()],
            ..Default::default()
        };
        assert!(profile.has_hobby("music"));
        assert!(!profile.has_hobby("Music"));
        assert!(profile.has_skill("Rust"));
        assert!(!profile.has_skill("Go"));
    }
}
