//! Built-in profile shown when no `--profile` file is given.

use profilecard_core::Profile;

const SAMPLE_PROFILE: &str = r#"{
    "name": "queyyz",
    "studentId": "6754310070-8",
    "major": "Software Engineering",
    "year": 2,
    "age": 19,
    "gpa": 3.25,
    "email": "student@example.edu",
    "hobbies": ["music", "manga", "anime", "novels", "movies"],
    "skills": ["JavaScript", "React.js", "HTML/CSS", "Python", "Git", "Node.js"],
    "socials": {
        "github": "https://github.com/queyyz",
        "instagram": "https://instagram.com/evernight_y"
    }
}"#;

pub fn sample_profile() -> Profile {
    Profile::from_json(SAMPLE_PROFILE).unwrap_or_else(|e| {
        tracing::error!("Built-in sample profile is invalid: {}", e);
        Profile::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_profile_parses() {
        let profile = Profile::from_json(SAMPLE_PROFILE).unwrap();
        assert_eq!(profile.name, "queyyz");
        assert_eq!(profile.skills.len(), 6);
        assert_eq!(profile.socials.len(), 2);
    }
}
