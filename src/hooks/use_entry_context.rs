use dioxus::prelude::*;

use crate::utils::navigation::document_referrer;
use crate::utils::EntryContext;

/// Entry context for the current location state.
///
/// The referrer is fixed for the page load and read once; `from` is taken on
/// every render so a query change on a mounted route is reflected.
pub fn use_entry_context(from: &str) -> EntryContext {
    let referrer = use_hook(document_referrer);
    EntryContext::new(Some(from.to_string()), referrer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::navigation::COMMUNITY_PATH;
    use crate::utils::test_support::{click, flush, rebuild_collecting_clicks};

    #[component]
    fn OriginLabel(from: String) -> Element {
        let from_community = use_entry_context(&from).came_from_community();
        rsx! {
            span { "from community: {from_community}" }
        }
    }

    fn harness() -> Element {
        let mut from = use_signal(String::new);
        rsx! {
            button {
                onclick: move |_| from.set(COMMUNITY_PATH.to_string()),
                "enter"
            }
            OriginLabel { from: from() }
        }
    }

    #[test]
    fn test_follows_location_state_while_mounted() {
        let mut dom = VirtualDom::new(harness);
        let clicks = rebuild_collecting_clicks(&mut dom);
        assert_eq!(clicks.len(), 1);
        assert!(dioxus_ssr::render(&dom).contains("from community: false"));

        click(&dom, clicks[0]);
        flush(&mut dom);
        assert!(dioxus_ssr::render(&dom).contains("from community: true"));
    }
}
