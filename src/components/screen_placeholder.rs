use dioxus::prelude::*;

use crate::components::AppHeader;
use crate::routes::Route;
use crate::utils::NavIntent;

/// Frame for screens that exist as navigation targets but have no content yet
#[component]
pub fn ScreenPlaceholder(
    #[props(into)] title: String,
    #[props(into)] message: String,
    back_to: Route,
    #[props(into)] back_label: String,
) -> Element {
    let navigator = navigator();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            AppHeader {
                on_navigate: move |intent: NavIntent| {
                    navigator.push(Route::from(intent));
                }
            }
            main {
                class: "max-w-3xl mx-auto px-4 py-16 text-center space-y-4",
                h1 {
                    class: "text-2xl font-bold text-gray-900",
                    "{title}"
                }
                p {
                    class: "text-gray-600",
                    "{message}"
                }
                Link {
                    to: back_to,
                    class: "inline-block px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors",
                    "{back_label}"
                }
            }
        }
    }
}
