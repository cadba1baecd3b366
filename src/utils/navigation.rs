//! Navigation intents emitted by the profile screen, and the entry context
//! used to work out which screen the user came from.

use crate::stores::profiles::ProjectSummary;

/// Path of the community listing
pub const COMMUNITY_PATH: &str = "/community";

/// Path of the profile screen, attached as provenance on outbound intents
pub const PROFILE_PATH: &str = "/profile";

/// A request to move to another screen, optionally carrying provenance
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Community,
    EditProfile { from: String },
    NewProject,
    OpenProject { id: String },
}

impl NavIntent {
    pub fn path(&self) -> String {
        match self {
            NavIntent::Community => COMMUNITY_PATH.to_string(),
            NavIntent::EditProfile { .. } => "/profile/edit".to_string(),
            NavIntent::NewProject => "/projects/new".to_string(),
            NavIntent::OpenProject { id } => {
                format!("{}/project/{}", COMMUNITY_PATH, urlencoding::encode(id))
            }
        }
    }

    /// Location state handed to the target screen
    pub fn state(&self) -> Option<(&'static str, &str)> {
        match self {
            NavIntent::EditProfile { from } => Some(("from", from.as_str())),
            _ => None,
        }
    }
}

/// Back always returns to the community listing, whatever the detected origin
pub fn back_intent() -> NavIntent {
    NavIntent::Community
}

pub fn edit_intent() -> NavIntent {
    NavIntent::EditProfile {
        from: PROFILE_PATH.to_string(),
    }
}

pub fn create_project_intent() -> NavIntent {
    NavIntent::NewProject
}

pub fn project_intent(project: &ProjectSummary) -> NavIntent {
    NavIntent::OpenProject {
        id: project.id.clone(),
    }
}

/// How the view was entered. Built once by the route from the router's
/// location state and, on the web, the document referrer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryContext {
    pub state_from: Option<String>,
    pub referrer: Option<String>,
}

impl EntryContext {
    pub fn new(state_from: Option<String>, referrer: Option<String>) -> Self {
        Self {
            state_from: state_from.filter(|s| !s.is_empty()),
            referrer: referrer.filter(|s| !s.is_empty()),
        }
    }

    /// Location state wins; the referrer is only consulted when state is absent.
    /// Advisory: nothing routes on this value.
    pub fn came_from_community(&self) -> bool {
        match &self.state_from {
            Some(from) => from == COMMUNITY_PATH,
            None => self
                .referrer
                .as_deref()
                .map(|r| r.contains(COMMUNITY_PATH))
                .unwrap_or(false),
        }
    }
}

/// Referring page URL, if the browser exposes one
pub fn document_referrer() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let referrer = web_sys::window()?.document()?.referrer();
        if !referrer.is_empty() {
            return Some(referrer);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> ProjectSummary {
        ProjectSummary {
            id: id.to_string(),
            title: "Project".to_string(),
            description: String::new(),
            image_url: String::new(),
            like_count: 0,
            comment_count: 0,
        }
    }

    #[test]
    fn test_action_paths() {
        assert_eq!(back_intent().path(), "/community");
        assert_eq!(back_intent().state(), None);
        assert_eq!(create_project_intent().path(), "/projects/new");
        assert_eq!(create_project_intent().state(), None);
    }

    #[test]
    fn test_edit_carries_provenance() {
        let intent = edit_intent();
        assert_eq!(intent.path(), "/profile/edit");
        assert_eq!(intent.state(), Some(("from", "/profile")));
    }

    #[test]
    fn test_project_intent_targets_project_route() {
        let intent = project_intent(&project("7"));
        assert_eq!(intent, NavIntent::OpenProject { id: "7".to_string() });
        assert_eq!(intent.path(), "/community/project/7");
    }

    #[test]
    fn test_project_id_is_encoded() {
        assert_eq!(project_intent(&project("a b/c")).path(), "/community/project/a%20b%2Fc");
    }

    #[test]
    fn test_origin_from_location_state() {
        let entry = EntryContext::new(Some("/community".to_string()), None);
        assert!(entry.came_from_community());

        // State present but elsewhere: referrer is not consulted
        let entry = EntryContext::new(
            Some("/profile/edit".to_string()),
            Some("https://chatandbuild.com/community".to_string()),
        );
        assert!(!entry.came_from_community());
    }

    #[test]
    fn test_origin_falls_back_to_referrer() {
        let entry = EntryContext::new(None, Some("https://chatandbuild.com/community/project/1".to_string()));
        assert!(entry.came_from_community());

        let entry = EntryContext::new(Some(String::new()), Some("https://chatandbuild.com/".to_string()));
        assert!(!entry.came_from_community());

        assert!(!EntryContext::default().came_from_community());
    }

    #[test]
    fn test_back_ignores_origin() {
        for entry in [
            EntryContext::default(),
            EntryContext::new(Some("/community".to_string()), None),
            EntryContext::new(Some("/projects/new".to_string()), None),
        ] {
            let _ = entry.came_from_community();
            assert_eq!(back_intent(), NavIntent::Community);
        }
    }

    #[test]
    fn test_no_referrer_off_the_web() {
        assert_eq!(document_referrer(), None);
    }
}
