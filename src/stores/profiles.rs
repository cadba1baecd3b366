use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

/// Profiles bundled with the client until a remote source exists
const BUNDLED_PROFILES: &str = include_str!("fixtures/profiles.json");

/// User id served when no other id is configured
pub const DEFAULT_USER_ID: &str = "alexjohnson";

/// Lightweight descriptor of one project shown on a profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub like_count: u32,
    pub comment_count: u32,
}

/// Identity, bio and project list of one user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub username: String,
    pub avatar_url: String,
    pub bio: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub github_handle: Option<String>,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    /// Display order is insertion order
    #[serde(default)]
    pub projects: Vec<ProjectSummary>,
}

// Blank strings count as absent so the view never renders an empty element
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

const UNSAFE_SCHEMES: [&str; 3] = ["javascript", "data", "vbscript"];

fn has_unsafe_scheme(raw: &str) -> bool {
    url::Url::parse(raw)
        .map(|u| UNSAFE_SCHEMES.contains(&u.scheme()))
        .unwrap_or(false)
}

impl UserProfile {
    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    /// Website target, verbatim. Blank values and script-capable schemes are
    /// treated as absent; anything else, schemeless included, is kept.
    pub fn website_url(&self) -> Option<&str> {
        self.website_url
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .filter(|raw| !has_unsafe_scheme(raw))
    }

    pub fn github_handle(&self) -> Option<&str> {
        present(&self.github_handle)
    }

    pub fn twitter_handle(&self) -> Option<&str> {
        present(&self.twitter_handle)
    }

    pub fn github_url(&self) -> Option<String> {
        self.github_handle().map(|handle| format!("https://github.com/{}", handle))
    }

    pub fn twitter_url(&self) -> Option<String> {
        self.twitter_handle().map(|handle| format!("https://twitter.com/{}", handle))
    }

    /// Generated initials avatar, used when `avatar_url` fails to load
    pub fn fallback_avatar_url(&self) -> String {
        let seed = if self.name.trim().is_empty() { &self.username } else { &self.name };
        format!(
            "https://api.dicebear.com/7.x/initials/svg?seed={}",
            urlencoding::encode(seed)
        )
    }

    pub fn project(&self, id: &str) -> Option<&ProjectSummary> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Project ids must be unique, each one maps to its own detail route
    pub fn has_unique_project_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.projects.iter().all(|p| seen.insert(p.id.as_str()))
    }
}

/// Errors raised while obtaining a profile
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// No profile exists for the requested user id
    NotFound(String),
    /// The profile payload could not be decoded or breaks an invariant
    InvalidPayload(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NotFound(user_id) => write!(f, "No profile found for @{}", user_id),
            ProfileError::InvalidPayload(reason) => write!(f, "Profile data is invalid: {}", reason),
        }
    }
}

impl std::error::Error for ProfileError {}

/// Source of profile records. The view only renders what a provider returns.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ProfileProvider {
    async fn fetch(&self, user_id: &str) -> Result<UserProfile, ProfileError>;
}

/// Serves profiles from an in-memory table decoded from JSON
#[derive(Clone, Debug, Default)]
pub struct StaticProfileProvider {
    profiles: HashMap<String, UserProfile>,
}

impl StaticProfileProvider {
    /// Provider over the profiles shipped with the client
    pub fn bundled() -> Result<Self, ProfileError> {
        Self::from_json(BUNDLED_PROFILES)
    }

    /// Decode a `{ user_id: UserProfile }` document
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profiles: HashMap<String, UserProfile> = serde_json::from_str(json)
            .map_err(|e| ProfileError::InvalidPayload(e.to_string()))?;

        for (user_id, profile) in &profiles {
            if !profile.has_unique_project_ids() {
                return Err(ProfileError::InvalidPayload(format!(
                    "duplicate project id in profile @{}",
                    user_id
                )));
            }
        }

        log::debug!("Loaded {} static profiles", profiles.len());
        Ok(Self { profiles })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ProfileProvider for StaticProfileProvider {
    async fn fetch(&self, user_id: &str) -> Result<UserProfile, ProfileError> {
        self.profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(user_id.to_string()))
    }
}

/// Provider handle shared through the component tree as context
#[derive(Clone)]
pub struct ProfileSource(Rc<dyn ProfileProvider>);

impl ProfileSource {
    pub fn new(provider: impl ProfileProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    /// Bundled profiles, or an empty source if the bundle fails to decode
    pub fn bundled() -> Self {
        match StaticProfileProvider::bundled() {
            Ok(provider) => Self::new(provider),
            Err(e) => {
                log::error!("Failed to load bundled profiles: {}", e);
                Self::new(StaticProfileProvider::default())
            }
        }
    }

    pub async fn fetch(&self, user_id: &str) -> Result<UserProfile, ProfileError> {
        log::debug!("Fetching profile @{}", user_id);
        self.0.fetch(user_id).await
    }
}
