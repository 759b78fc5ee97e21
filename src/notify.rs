//! Optional user-facing notifications.
//!
//! The template may or may not load `toastr`. When it does, save results
//! are shown as toasts; when it does not, they only reach the log.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::rc::Rc;

pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Look up the page's notification library, if any.
pub fn detect() -> Option<Rc<dyn Notifier>> {
    #[cfg(feature = "hydrate")]
    {
        toastr::ToastrNotifier::from_window().map(|n| Rc::new(n) as Rc<dyn Notifier>)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
mod toastr {
    use wasm_bindgen::{JsCast, JsValue};

    use super::Notifier;

    /// Calls `window.toastr.success` / `window.toastr.error`.
    pub struct ToastrNotifier {
        toastr: JsValue,
    }

    impl ToastrNotifier {
        pub fn from_window() -> Option<Self> {
            let window = web_sys::window()?;
            let toastr = js_sys::Reflect::get(&window, &JsValue::from_str("toastr")).ok()?;
            if toastr.is_undefined() || toastr.is_null() {
                return None;
            }
            Some(Self { toastr })
        }

        fn call(&self, method: &str, message: &str) {
            let Ok(func) = js_sys::Reflect::get(&self.toastr, &JsValue::from_str(method)) else {
                return;
            };
            let Ok(func) = func.dyn_into::<js_sys::Function>() else {
                log::debug!("toastr.{method} is not a function");
                return;
            };
            let _ = func.call1(&self.toastr, &JsValue::from_str(message));
        }
    }

    impl Notifier for ToastrNotifier {
        fn success(&self, message: &str) {
            self.call("success", message);
        }

        fn error(&self, message: &str) {
            self.call("error", message);
        }
    }
}
