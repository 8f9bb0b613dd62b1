//! `IntersectionObserver` binding for reveal subjects.
//!
//! One observer per subject. Reports are filtered through the
//! [`RevealPolicy`] before they reach the callback, so the callback only sees
//! viewport membership. The observer disconnects when dropped.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::reveal::RevealPolicy;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    /// Start observing `element`; `on_change` receives membership updates.
    ///
    /// # Errors
    ///
    /// Returns the browser exception if the observer cannot be constructed
    /// (for example, an unparseable root margin).
    pub fn observe(
        element: &Element,
        policy: RevealPolicy,
        on_change: impl Fn(bool) + 'static,
    ) -> Result<Self, JsValue> {
        let callback: EntriesCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            // Only the newest report per batch matters for a single target.
            let latest = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last();
            if let Some(entry) = latest {
                on_change(policy.admits(entry.is_intersecting(), entry.intersection_ratio()));
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&policy.root_margin());
        options.set_threshold(&JsValue::from_f64(policy.amount));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
