use dioxus::prelude::*;

use crate::stores::config_store::APP_CONFIG;
use crate::utils::NavIntent;

/// Sticky top bar with the brand link back to the community listing
#[component]
pub fn AppHeader(on_navigate: EventHandler<NavIntent>) -> Element {
    let config = APP_CONFIG.read().clone();
    let community_href = NavIntent::Community.path();

    rsx! {
        header {
            class: "bg-white shadow-sm sticky top-0 z-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex justify-between items-center h-16",
                    a {
                        href: "{community_href}",
                        class: "flex items-center",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(NavIntent::Community);
                        },
                        img {
                            src: "{config.logo_url}",
                            alt: "{config.brand_name} Logo",
                            class: "h-8 w-8 mr-2",
                        }
                        span {
                            class: "text-xl font-bold text-indigo-600",
                            "{config.brand_name}"
                        }
                    }
                }
            }
        }
    }
}
