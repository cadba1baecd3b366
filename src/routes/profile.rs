use dioxus::prelude::*;

use crate::components::{ProfileView, ScreenPlaceholder};
use crate::hooks::{use_entry_context, use_profile};
use crate::routes::Route;
use crate::stores::config_store::APP_CONFIG;
use crate::utils::{DataState, NavIntent};

#[component]
pub fn Profile(from: String) -> Element {
    let navigator = navigator();
    let user_id = APP_CONFIG.read().default_user_id.clone();

    // The view never reads ambient page state itself
    let entry = use_entry_context(&from);

    let state = use_profile(user_id);

    let on_navigate = move |intent: NavIntent| {
        log::debug!("Navigating to {} (state: {:?})", intent.path(), intent.state());
        navigator.push(Route::from(intent));
    };

    match state {
        DataState::Loading => rsx! { ProfileSkeleton {} },
        DataState::Error(message) => rsx! {
            ScreenPlaceholder {
                title: "Profile unavailable",
                message,
                back_to: Route::Community {},
                back_label: "Back to Community",
            }
        },
        DataState::Loaded(profile) => rsx! {
            ProfileView {
                profile,
                entry,
                on_navigate,
            }
        },
    }
}

#[component]
fn ProfileSkeleton() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 animate-pulse",
            div {
                class: "bg-white shadow",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 flex items-start gap-6",
                    div { class: "h-24 w-24 rounded-full bg-gray-200" }
                    div {
                        class: "flex-1 space-y-3",
                        div { class: "h-6 w-48 bg-gray-200 rounded" }
                        div { class: "h-4 w-32 bg-gray-200 rounded" }
                        div { class: "h-4 w-2/3 bg-gray-200 rounded" }
                    }
                }
            }
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for i in 0..3 {
                    div {
                        key: "{i}",
                        class: "h-72 bg-gray-200 rounded-xl",
                    }
                }
            }
        }
    }
}
