use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Current vertical scroll offset, or `0.0` outside a browser.
#[must_use]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Inner width of the viewport in CSS pixels, if a window is present.
#[must_use]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Four-digit year from the browser clock. `None` when not running in wasm.
#[must_use]
pub fn current_year() -> Option<u32> {
    #[cfg(target_arch = "wasm32")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// An event listener that unregisters itself when dropped.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    /// Returns the JavaScript exception if the browser rejects the listener.
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::error!(
                "Failed to remove {} listener: {}",
                self.event,
                js_error_message(&err)
            );
        }
    }
}
