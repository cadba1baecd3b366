use dioxus::prelude::*;

use crate::components::ScreenPlaceholder;
use crate::routes::Route;

#[component]
pub fn ProjectNew() -> Element {
    rsx! {
        ScreenPlaceholder {
            title: "Create New Project",
            message: "Project creation is not available yet.",
            back_to: Route::Profile { from: String::new() },
            back_label: "Back to Profile",
        }
    }
}
