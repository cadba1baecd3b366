//! Drive a `VirtualDom` from tests: collect click listeners and dispatch clicks.

use dioxus::dioxus_core::{ElementId, Event, Mutation, Mutations, NoOpMutations, VirtualDom};
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
};
use std::any::Any;
use std::rc::Rc;

/// Build the dom and return the elements carrying an `onclick`, in creation order
pub fn rebuild_collecting_clicks(dom: &mut VirtualDom) -> Vec<ElementId> {
    let mut mutations = Mutations::default();
    dom.rebuild(&mut mutations);

    mutations
        .edits
        .into_iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(id),
            _ => None,
        })
        .collect()
}

/// Dispatch a non-bubbling click on `id`
pub fn click(dom: &VirtualDom, id: ElementId) {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default()));
    dom.runtime().handle_event("click", Event::new(data, false), id);
}

/// Apply the renders queued by event handlers
pub fn flush(dom: &mut VirtualDom) {
    dom.render_immediate(&mut NoOpMutations);
}
