use dioxus::prelude::*;

pub mod community;
pub mod not_found;
pub mod profile;
pub mod profile_edit;
pub mod project_detail;
pub mod project_new;

use community::Community;
use not_found::NotFound;
use profile::Profile;
use profile_edit::ProfileEdit;
use project_detail::ProjectDetail;
use project_new::ProjectNew;

use crate::utils::NavIntent;

/// App routes
///
/// Location state travels as the `from` query argument.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Profile { from: String::new() })]
    #[route("/community")]
    Community {},

    #[route("/community/project/:id")]
    ProjectDetail { id: String },

    #[route("/profile?:from")]
    Profile { from: String },

    #[route("/profile/edit?:from")]
    ProfileEdit { from: String },

    #[route("/projects/new")]
    ProjectNew {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<NavIntent> for Route {
    fn from(intent: NavIntent) -> Self {
        match intent {
            NavIntent::Community => Route::Community {},
            NavIntent::EditProfile { from } => Route::ProfileEdit { from },
            NavIntent::NewProject => Route::ProjectNew {},
            NavIntent::OpenProject { id } => Route::ProjectDetail { id },
        }
    }
}
