//! `web_sys` glue shared by the DOM installers.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, EventTarget, Node};

use crate::render::classes::ClassTarget;

impl ClassTarget for Element {
    fn add_class(&mut self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&mut self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element under `root` matching `selector`.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Whether `inner` is `outer` or one of its descendants.
pub fn contains(outer: &Element, inner: &Node) -> bool {
    outer.contains(Some(inner))
}

/// Attach a click listener that lives as long as the page.
pub fn on_click<F>(target: &EventTarget, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach click listener");
    }
    closure.forget();
}
