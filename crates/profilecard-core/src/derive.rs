//! Derived display values.
//!
//! Pure functions of a [`Profile`]. Nothing here is cached; callers recompute
//! on every render.

use crate::types::{Badge, Gpa, Profile, SocialPlatform};

/// Lowest GPA that earns the honors badge and avatar highlight
pub const HONORS_GPA: f64 = 3.5;

/// Skill count that earns the multi-skilled badge
pub const MULTI_SKILLED_COUNT: usize = 5;

/// Placeholder label for a GPA that is not a finite number
pub const GPA_PLACEHOLDER: &str = "-";

/// Uppercased first letter of each whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// GPA with two decimals, or [`GPA_PLACEHOLDER`].
pub fn gpa_label(gpa: Gpa) -> String {
    match gpa.finite() {
        Some(value) => format!("{:.2}", value),
        None => GPA_PLACEHOLDER.to_string(),
    }
}

/// NaN compares false, so a missing GPA never qualifies.
pub fn is_honors(gpa: Gpa) -> bool {
    gpa.value() >= HONORS_GPA
}

pub fn is_multi_skilled(skills: &[String]) -> bool {
    skills.len() >= MULTI_SKILLED_COUNT
}

/// Supplied badges followed by the computed ones.
pub fn badge_list(profile: &Profile) -> Vec<Badge> {
    let mut badges = profile.badges.clone();
    if is_honors(profile.gpa) {
        badges.push(Badge::honors());
    }
    if is_multi_skilled(&profile.skills) {
        badges.push(Badge::multi_skilled());
    }
    badges
}

/// Platforms with a non-empty URL, in [`SocialPlatform::ALL`] order.
pub fn visible_social_links(profile: &Profile) -> Vec<(SocialPlatform, String)> {
    SocialPlatform::ALL
        .into_iter()
        .filter_map(|platform| {
            profile
                .socials
                .get(platform.key())
                .filter(|url| !url.is_empty())
                .map(|url| (platform, url.clone()))
        })
        .collect()
}

/// `socials` keys that name no supported platform, sorted
pub fn unsupported_social_keys(profile: &Profile) -> Vec<&str> {
    let mut keys: Vec<&str> = profile
        .socials
        .keys()
        .map(String::as_str)
        .filter(|key| SocialPlatform::from_key(key).is_none())
        .collect();
    keys.sort_unstable();
    keys
}

/// Owner name for user-facing messages
pub fn display_owner(profile: &Profile) -> &str {
    if profile.name.is_empty() {
        "Student"
    } else {
        &profile.name
    }
}
