use dioxus::prelude::*;

use crate::components::ScreenPlaceholder;
use crate::hooks::use_profile;
use crate::routes::Route;
use crate::stores::config_store::APP_CONFIG;

#[component]
pub fn ProjectDetail(id: String) -> Element {
    let user_id = APP_CONFIG.read().default_user_id.clone();
    let state = use_profile(user_id);

    let project = state.data().and_then(|profile| profile.project(&id));
    let title = project
        .map(|p| p.title.clone())
        .unwrap_or_else(|| format!("Project {}", id));
    let message = if state.is_loading() {
        "Loading project...".to_string()
    } else if let Some(error) = state.error() {
        error.to_string()
    } else if let Some(project) = project {
        project.description.clone()
    } else {
        "This project could not be found.".to_string()
    };

    rsx! {
        ScreenPlaceholder {
            title,
            message,
            back_to: Route::Community {},
            back_label: "Back to Community",
        }
    }
}
