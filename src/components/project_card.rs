use dioxus::prelude::*;

use crate::components::icons::{HeartIcon, MessageCircleIcon};
use crate::stores::profiles::ProjectSummary;
use crate::utils::format_stat;
use crate::utils::navigation::{project_intent, NavIntent};

/// Whole-card link to a project's detail screen
#[component]
pub fn ProjectCard(project: ProjectSummary, on_navigate: EventHandler<NavIntent>) -> Element {
    let intent = project_intent(&project);
    let href = intent.path();
    let likes = format_stat(project.like_count, "likes");
    let comments = format_stat(project.comment_count, "comments");
    let initial = project.title.chars().next().unwrap_or('?').to_uppercase().to_string();
    let mut image_failed = use_signal(|| false);

    rsx! {
        a {
            href: "{href}",
            class: "project-card block bg-white rounded-xl shadow-sm overflow-hidden border border-gray-200 hover:shadow-md transition-shadow",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                log::debug!("Opening project {:?}", intent);
                on_navigate.call(intent.clone());
            },

            div {
                class: "h-48 overflow-hidden",
                if *image_failed.read() || project.image_url.trim().is_empty() {
                    div {
                        class: "w-full h-full flex items-center justify-center bg-indigo-50 text-4xl font-bold text-indigo-300",
                        "{initial}"
                    }
                } else {
                    img {
                        src: "{project.image_url}",
                        alt: "{project.title}",
                        class: "w-full h-full object-cover",
                        loading: "lazy",
                        onerror: move |_| image_failed.set(true),
                    }
                }
            }

            div {
                class: "p-5",
                h3 {
                    class: "font-bold text-lg mb-2 text-gray-900",
                    "{project.title}"
                }

                // Clamped visually; the full description stays in the DOM
                p {
                    class: "text-gray-600 text-sm mb-4 line-clamp-2",
                    title: "{project.description}",
                    "{project.description}"
                }

                div {
                    class: "flex justify-between items-center text-sm text-gray-500",
                    span {
                        class: "flex items-center gap-1",
                        HeartIcon {}
                        "{likes}"
                    }
                    span {
                        class: "flex items-center gap-1",
                        MessageCircleIcon {}
                        "{comments}"
                    }
                }
            }
        }
    }
}

/// Project gallery in input order, with an explicit empty state
#[component]
pub fn ProjectGrid(projects: Vec<ProjectSummary>, on_navigate: EventHandler<NavIntent>) -> Element {
    if projects.is_empty() {
        return rsx! {
            div {
                class: "project-grid-empty text-center py-12 border border-dashed border-gray-300 rounded-xl text-gray-500",
                "No projects yet"
            }
        };
    }

    rsx! {
        div {
            class: "project-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            for project in projects {
                ProjectCard {
                    key: "{project.id}",
                    project: project.clone(),
                    on_navigate,
                }
            }
        }
    }
}
