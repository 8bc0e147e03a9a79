//! Platform catalog structures.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Placeholder substituted with the username in a URL template.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// A single platform probed for every username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformSpec {
    /// Display name, unique within a catalog (e.g., "GitHub")
    pub name: String,

    /// Profile URL with a `{username}` placeholder
    pub url_template: String,

    /// Body substrings that mark a 200 response as "not found"
    #[serde(default)]
    pub not_found_signatures: Vec<String>,
}

impl PlatformSpec {
    pub fn new(
        name: impl Into<String>,
        url_template: impl Into<String>,
        not_found_signatures: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            not_found_signatures: not_found_signatures.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Substitute the username into the URL template.
    pub fn profile_url(&self, username: &str) -> String {
        self.url_template.replace(USERNAME_PLACEHOLDER, username)
    }
}

/// Ordered, immutable list of platforms.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    platforms: Vec<PlatformSpec>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate platform names.
    pub fn new(platforms: Vec<PlatformSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for platform in &platforms {
            if !seen.insert(platform.name.as_str()) {
                return Err(AppError::validation(format!(
                    "duplicate platform '{}' in catalog",
                    platform.name
                )));
            }
        }
        Ok(Self { platforms })
    }

    /// Platforms in declared order.
    pub fn platforms(&self) -> &[PlatformSpec] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Find a platform by exact name.
    pub fn get(&self, name: &str) -> Option<&PlatformSpec> {
        self.platforms.iter().find(|p| p.name == name)
    }

    /// Not-found signatures for a platform; unknown platforms have none.
    pub fn signatures(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|p| p.not_found_signatures.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_substitution() {
        let spec = PlatformSpec::new("Tumblr", "https://{username}.tumblr.com", &[]);
        assert_eq!(spec.profile_url("alice"), "https://alice.tumblr.com");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let platforms = vec![
            PlatformSpec::new("GitHub", "https://github.com/{username}", &[]),
            PlatformSpec::new("GitHub", "https://gh.example/{username}", &[]),
        ];
        assert!(Catalog::new(platforms).is_err());
    }

    #[test]
    fn test_unknown_platform_has_no_signatures() {
        let catalog = Catalog::new(vec![PlatformSpec::new(
            "Reddit",
            "https://www.reddit.com/user/{username}",
            &["User does not exist"],
        )])
        .unwrap();

        assert_eq!(catalog.signatures("Reddit"), ["User does not exist"]);
        assert!(catalog.signatures("Nowhere").is_empty());
    }
}
