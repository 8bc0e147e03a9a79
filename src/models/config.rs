//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Catalog, PlatformSpec, USERNAME_PLACEHOLDER};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP probing behavior settings
    #[serde(default)]
    pub prober: ProberConfig,

    /// Storage file names
    #[serde(default)]
    pub paths: PathsConfig,

    /// Platforms probed for every username, in order
    #[serde(default = "defaults::platforms")]
    pub platforms: Vec<PlatformSpec>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    ///
    /// A missing file is the normal setup and only logged at debug level.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Config load failed from {:?}: {}. Using defaults.", path, e);
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.prober.user_agent.trim().is_empty() {
            return Err(AppError::validation("prober.user_agent is empty"));
        }
        if self.prober.timeout_secs == 0 {
            return Err(AppError::validation("prober.timeout_secs must be > 0"));
        }
        if self.paths.cache_file.trim().is_empty() {
            return Err(AppError::validation("paths.cache_file is empty"));
        }
        if self.platforms.is_empty() {
            return Err(AppError::validation("No platforms defined"));
        }
        for platform in &self.platforms {
            if platform.name.trim().is_empty() {
                return Err(AppError::validation("Platform with empty name"));
            }
            if !platform.url_template.contains(USERNAME_PLACEHOLDER) {
                return Err(AppError::validation(format!(
                    "Platform '{}' url_template lacks {}",
                    platform.name, USERNAME_PLACEHOLDER
                )));
            }
            url::Url::parse(&platform.profile_url("probe")).map_err(|e| {
                AppError::validation(format!(
                    "Platform '{}' url_template is not a valid URL: {}",
                    platform.name, e
                ))
            })?;
        }
        self.catalog().map(|_| ())
    }

    /// Build the immutable platform catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::new(self.platforms.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prober: ProberConfig::default(),
            paths: PathsConfig::default(),
            platforms: defaults::platforms(),
        }
    }
}

/// HTTP client and probing behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProberConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-attempt request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Pause before the single retry, in milliseconds
    #[serde(default = "defaults::retry_delay")]
    pub retry_delay_ms: u64,

    /// Pause between platforms, in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl ProberConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            retry_delay_ms: defaults::retry_delay(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Storage file names, relative to the storage directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Result cache file
    #[serde(default = "defaults::cache_file")]
    pub cache_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cache_file: defaults::cache_file(),
        }
    }
}

mod defaults {
    use crate::models::PlatformSpec;

    // Prober defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; TraceVibe/1.0)".into()
    }
    pub fn timeout() -> u64 {
        5
    }
    pub fn retry_delay() -> u64 {
        1000
    }
    pub fn request_delay() -> u64 {
        500
    }

    // Path defaults
    pub fn cache_file() -> String {
        "tracevibe_cache.json".into()
    }

    /// (name, url template, not-found signatures)
    const PLATFORMS: &[(&str, &str, &[&str])] = &[
        (
            "Twitter",
            "https://twitter.com/{username}",
            &["This account doesn’t exist", "Page not found"],
        ),
        (
            "GitHub",
            "https://github.com/{username}",
            &["Page not found", "There isn’t a GitHub Pages site here"],
        ),
        (
            "Instagram",
            "https://instagram.com/{username}",
            &["Sorry, this page isn't available", "User not found"],
        ),
        (
            "LinkedIn",
            "https://linkedin.com/in/{username}",
            &["Page not found", "We can't find that page"],
        ),
        (
            "Reddit",
            "https://www.reddit.com/user/{username}",
            &["Page not found", "User does not exist"],
        ),
        (
            "Facebook",
            "https://www.facebook.com/{username}",
            &["Page Not Found", "This content is not available"],
        ),
        (
            "TikTok",
            "https://www.tiktok.com/@{username}",
            &["User does not exist", "Page not found"],
        ),
        (
            "Snapchat",
            "https://www.snapchat.com/add/{username}",
            &["Page not found", "Oops! We couldn’t find that page"],
        ),
        (
            "Pinterest",
            "https://www.pinterest.com/{username}",
            &["Page not found", "Looks like this page doesn’t exist"],
        ),
        (
            "Tumblr",
            "https://{username}.tumblr.com",
            &["There's nothing here", "Page not found"],
        ),
        (
            "Discord",
            "https://discord.com/users/{username}",
            &["Invite Invalid", "Unknown Invite"],
        ),
        (
            "Telegram",
            "https://t.me/{username}",
            &["This chat does not exist", "Page not found"],
        ),
        (
            "Medium",
            "https://medium.com/@{username}",
            &["Page not found", "This page doesn’t exist"],
        ),
        (
            "Quora",
            "https://www.quora.com/profile/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "Vimeo",
            "https://vimeo.com/{username}",
            &["Page not found", "Sorry, we can’t find that page"],
        ),
        (
            "SoundCloud",
            "https://soundcloud.com/{username}",
            &["Page not found", "We can’t find that user"],
        ),
        (
            "Twitch",
            "https://www.twitch.tv/{username}",
            &["Page not found", "Sorry, unless you’ve got a time machine"],
        ),
        (
            "Clubhouse",
            "https://www.clubhouse.com/@{username}",
            &["User not found", "Page not found"],
        ),
        (
            "Patreon",
            "https://www.patreon.com/{username}",
            &["Page not found", "This page doesn’t exist"],
        ),
        (
            "Behance",
            "https://www.behance.net/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "DeviantArt",
            "https://{username}.deviantart.com",
            &["Page Not Found", "The page you’re looking for isn’t here"],
        ),
        (
            "Flickr",
            "https://www.flickr.com/people/{username}",
            &["Page Not Found", "This member does not exist"],
        ),
        (
            "Meetup",
            "https://www.meetup.com/members/{username}",
            &["Page Not Found", "This page does not exist"],
        ),
        (
            "WeChat",
            "https://www.wechat.com/en/user/{username}",
            &["User not found", "Page not found"],
        ),
        (
            "Viber",
            "https://viber.com/{username}",
            &["User not found", "Page not found"],
        ),
        (
            "Line",
            "https://line.me/ti/p/~{username}",
            &["User not found", "Page not found"],
        ),
        (
            "KakaoTalk",
            "https://www.kakaotalk.com/{username}",
            &["User not found", "Page not found"],
        ),
        (
            "Dribbble",
            "https://dribbble.com/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "GitLab",
            "https://gitlab.com/{username}",
            &["Page not found", "404"],
        ),
        (
            "Bitbucket",
            "https://bitbucket.org/{username}",
            &["Repository not found", "Page not found"],
        ),
        (
            "Stack Overflow",
            "https://stackoverflow.com/users/{username}",
            &["Page Not Found", "This user does not exist"],
        ),
        (
            "Fiverr",
            "https://www.fiverr.com/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "Upwork",
            "https://www.upwork.com/freelancers/~{username}",
            &["Page Not Found", "We couldn’t find that page"],
        ),
        (
            "Freelancer",
            "https://www.freelancer.com/u/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "Kaggle",
            "https://www.kaggle.com/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "CodePen",
            "https://codepen.io/{username}",
            &["Pen Not Found", "Page not found"],
        ),
        (
            "Replit",
            "https://replit.com/@{username}",
            &["Not Found", "404"],
        ),
        (
            "AngelList",
            "https://angel.co/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "Crunchbase",
            "https://www.crunchbase.com/person/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "Etsy",
            "https://www.etsy.com/shop/{username}",
            &["Shop not found", "Page not found"],
        ),
        (
            "Goodreads",
            "https://www.goodreads.com/user/show/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "Myspace",
            "https://myspace.com/{username}",
            &["Page Not Found", "404"],
        ),
        (
            "Last.fm",
            "https://www.last.fm/user/{username}",
            &["User not found", "Page not found"],
        ),
        (
            "Steam",
            "https://steamcommunity.com/id/{username}",
            &["The specified profile could not be found", "404"],
        ),
        (
            "Xbox",
            "https://xboxgamertag.com/search/{username}",
            &["Gamer not found", "Page not found"],
        ),
        (
            "PlayStation Network",
            "https://psnprofiles.com/{username}",
            &["User not found", "Page not found"],
        ),
        (
            "Spotify",
            "https://open.spotify.com/user/{username}",
            &["Page not found", "404"],
        ),
        (
            "Strava",
            "https://www.strava.com/athletes/{username}",
            &["Athlete not found", "Page not found"],
        ),
        (
            "Duolingo",
            "https://www.duolingo.com/profile/{username}",
            &["User not found", "Page not found"],
        ),
        (
            "Wattpad",
            "https://www.wattpad.com/user/{username}",
            &["User not found", "Page not found"],
        ),
        (
            "Tripadvisor",
            "https://www.tripadvisor.com/members/{username}",
            &["Page not found", "404"],
        ),
    ];

    // Catalog defaults
    pub fn platforms() -> Vec<PlatformSpec> {
        PLATFORMS
            .iter()
            .map(|(name, template, signatures)| PlatformSpec::new(*name, *template, signatures))
            .collect()
    }
}
