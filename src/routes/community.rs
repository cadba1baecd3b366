use dioxus::prelude::*;

use crate::components::ScreenPlaceholder;
use crate::routes::Route;
use crate::utils::navigation::COMMUNITY_PATH;

#[component]
pub fn Community() -> Element {
    rsx! {
        ScreenPlaceholder {
            title: "Community",
            message: "Projects shared by the community will appear here.",
            back_to: Route::Profile { from: COMMUNITY_PATH.to_string() },
            back_label: "View your profile",
        }
    }
}
