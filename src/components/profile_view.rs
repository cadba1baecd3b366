use dioxus::prelude::*;

use crate::components::icons::{ArrowLeftIcon, EditIcon, GithubIcon, GlobeIcon, MapPinIcon, TwitterIcon};
use crate::components::{AppHeader, ProjectGrid};
use crate::stores::profiles::UserProfile;
use crate::utils::navigation::{back_intent, create_project_intent, edit_intent};
use crate::utils::{EntryContext, NavIntent};

/// Profile screen: header bar, profile card and project gallery.
///
/// Holds no state beyond image-load fallbacks. Every action is reported to
/// `on_navigate` as a [`NavIntent`]; the caller decides how to route it.
#[component]
pub fn ProfileView(
    profile: UserProfile,
    entry: EntryContext,
    on_navigate: EventHandler<NavIntent>,
) -> Element {
    let from_community = entry.came_from_community();
    log::debug!("Rendering profile @{} (from community: {})", profile.username, from_community);

    let mut avatar_failed = use_signal(|| false);
    let avatar_src = if *avatar_failed.read() || profile.avatar_url.trim().is_empty() {
        profile.fallback_avatar_url()
    } else {
        profile.avatar_url.clone()
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            AppHeader { on_navigate }

            // Profile card
            div {
                class: "bg-white shadow relative",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                    div {
                        class: "flex flex-col md:flex-row md:items-start",

                        div {
                            class: "flex items-start mr-4 mb-4 md:mb-0",
                            button {
                                class: "back-button flex items-center px-4 py-2 border border-gray-300 rounded-lg text-sm font-medium text-gray-700 bg-white shadow-sm hover:bg-gradient-to-r hover:from-blue-500 hover:via-indigo-600 hover:to-purple-600 hover:text-white hover:border-transparent hover:shadow-md transform hover:scale-105 transition-all duration-300 ease-in-out",
                                onclick: move |_| on_navigate.call(back_intent()),
                                ArrowLeftIcon { class: "h-4 w-4 mr-2" }
                                "Back to Community"
                            }
                        }

                        img {
                            src: "{avatar_src}",
                            alt: "{profile.name}",
                            class: "h-24 w-24 rounded-full border-4 border-white shadow-md",
                            onerror: move |_| avatar_failed.set(true),
                        }

                        div {
                            class: "mt-4 md:mt-0 md:ml-6 flex-1",
                            h1 {
                                class: "text-2xl font-bold text-gray-900",
                                "{profile.name}"
                            }
                            p {
                                class: "text-gray-600",
                                "@{profile.username}"
                            }

                            ProfileLinks { profile: profile.clone() }
                        }

                        div {
                            class: "mt-4 md:mt-0 md:ml-auto flex space-x-3",
                            button {
                                class: "edit-button flex items-center px-4 py-2 border border-gray-300 rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-50",
                                onclick: move |_| on_navigate.call(edit_intent()),
                                EditIcon { class: "h-4 w-4 mr-2" }
                                "Edit Profile"
                            }
                        }
                    }

                    div {
                        class: "mt-6",
                        p {
                            class: "text-gray-700",
                            "{profile.bio}"
                        }
                    }
                }
            }

            // Projects
            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div {
                    class: "flex justify-between items-center mb-6",
                    h2 {
                        class: "text-xl font-bold text-gray-900",
                        "My Projects"
                    }
                    button {
                        class: "create-project-button px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors",
                        onclick: move |_| on_navigate.call(create_project_intent()),
                        "Create New Project"
                    }
                }

                ProjectGrid {
                    projects: profile.projects.clone(),
                    on_navigate,
                }
            }
        }
    }
}

// Location and external links; each one is omitted when its field is absent
#[component]
fn ProfileLinks(profile: UserProfile) -> Element {
    let link_class = "flex items-center mr-4 hover:text-indigo-600";

    rsx! {
        div {
            class: "mt-2 flex flex-wrap items-center text-sm text-gray-500",

            if let Some(location) = profile.location() {
                span {
                    class: "profile-location flex items-center mr-4",
                    MapPinIcon { class: "h-4 w-4 mr-1" }
                    "{location}"
                }
            }

            if let Some(website) = profile.website_url() {
                a {
                    class: "profile-website {link_class}",
                    href: "{website}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    GlobeIcon { class: "h-4 w-4 mr-1" }
                    "Website"
                }
            }

            if let Some(github) = profile.github_url() {
                a {
                    class: "profile-github {link_class}",
                    href: "{github}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    GithubIcon { class: "h-4 w-4 mr-1" }
                    "GitHub"
                }
            }

            if let Some(twitter) = profile.twitter_url() {
                a {
                    class: "profile-twitter {link_class}",
                    href: "{twitter}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    TwitterIcon { class: "h-4 w-4 mr-1" }
                    "Twitter"
                }
            }
        }
    }
}
