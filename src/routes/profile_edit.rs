use dioxus::prelude::*;

use crate::components::ScreenPlaceholder;
use crate::routes::Route;
use crate::utils::navigation::PROFILE_PATH;

/// Where "back" leads, based on the provenance the caller attached
fn return_route(from: &str) -> Route {
    if from == PROFILE_PATH {
        Route::Profile { from: String::new() }
    } else {
        Route::Community {}
    }
}

#[component]
pub fn ProfileEdit(from: String) -> Element {
    let back_to = return_route(&from);
    let back_label = if matches!(back_to, Route::Profile { .. }) {
        "Back to Profile"
    } else {
        "Back to Community"
    };

    rsx! {
        ScreenPlaceholder {
            title: "Edit Profile",
            message: "Profile editing is not available yet.",
            back_to,
            back_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_to_profile_when_opened_from_profile() {
        assert_eq!(return_route("/profile"), Route::Profile { from: String::new() });
    }

    #[test]
    fn test_defaults_to_community() {
        assert_eq!(return_route(""), Route::Community {});
        assert_eq!(return_route("/projects/new"), Route::Community {});
    }
}
