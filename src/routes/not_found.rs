use dioxus::prelude::*;

use crate::components::ScreenPlaceholder;
use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::warn!("No route for {}", path);

    rsx! {
        ScreenPlaceholder {
            title: "Page not found",
            message: "Nothing lives at {path}.",
            back_to: Route::Community {},
            back_label: "Back to Community",
        }
    }
}
