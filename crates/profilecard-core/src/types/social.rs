//! Social platforms a profile can link to

/// Supported social platforms, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SocialPlatform {
    Twitter,
    Github,
    Instagram,
    Facebook,
}

impl SocialPlatform {
    /// Every platform in the order links are rendered
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Twitter,
        SocialPlatform::Github,
        SocialPlatform::Instagram,
        SocialPlatform::Facebook,
    ];

    /// Key used in the profile's `socials` map
    pub fn key(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Github => "github",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Facebook => "facebook",
        }
    }

    /// Human readable name, used as the link tooltip
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "Twitter/X",
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Facebook => "Facebook",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "🐦",
            SocialPlatform::Github => "💻",
            SocialPlatform::Instagram => "📸",
            SocialPlatform::Facebook => "📘",
        }
    }

    /// Look up a platform by its `socials` key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for platform in SocialPlatform::ALL {
            assert_eq!(SocialPlatform::from_key(platform.key()), Some(platform));
        }
        assert_eq!(SocialPlatform::from_key("myspace"), None);
    }

    #[test]
    fn test_display_order() {
        let labels: Vec<_> = SocialPlatform::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Twitter/X", "GitHub", "Instagram", "Facebook"]);
    }
}
