use dioxus::prelude::*;

use crate::stores::profiles::{ProfileSource, UserProfile};
use crate::utils::DataState;

/// Load a profile through the `ProfileSource` in context.
///
/// Refetches when `user_id` changes.
pub fn use_profile(user_id: String) -> DataState<UserProfile> {
    let source = use_context::<ProfileSource>();

    let resource = use_resource(use_reactive(&user_id, move |user_id| {
        let source = source.clone();
        async move {
            let result = source.fetch(&user_id).await;
            if let Err(e) = &result {
                log::error!("Failed to load profile @{}: {}", user_id, e);
            }
            result
        }
    }));

    let state: DataState<UserProfile> = resource.read().clone().into();
    state
}
