//! Browser glue for the page controllers.
//!
//! Everything here goes through `web-sys` and only does real work on
//! `wasm32`. Other targets (server rendering, native tests) get inert
//! fallbacks so the controllers above stay callable everywhere. Missing
//! elements or APIs are never errors: the affected feature just does nothing.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Where a document click landed relative to a group of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    Inside,
    Outside,
}

/// Outcome of asking the browser to watch an element's visibility.
pub enum Watch {
    Observing(Subscription),
    /// The host has no `IntersectionObserver`.
    Unsupported,
    MissingElement,
}

/// Keeps a browser callback registered; dropping it unregisters the callback.
#[must_use]
pub struct Subscription {
    #[cfg(target_arch = "wasm32")]
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn inert() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            release: None,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(release) = self.release.take() {
                release();
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document()?.get_element_by_id(id)
}

/// True when an element with this id is currently in the document.
pub fn has_element(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        element_by_id(id).is_some()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Put exactly one of the `light` / `dark` classes on `<body>`.
pub fn apply_body_theme(light: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        let classes = body.class_list();
        let _ = classes.toggle_with_force("light", light);
        let _ = classes.toggle_with_force("dark", !light);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = light;
    }
}

/// Smoothly scroll the element with `id` to the top of the viewport.
/// Returns `false` when there is no such element.
pub fn scroll_to_id(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(target) = element_by_id(id) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

#[cfg(target_arch = "wasm32")]
fn is_desktop_viewport(window: &web_sys::Window) -> bool {
    window
        .match_media(&crate::config::desktop_media_query())
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches())
}

#[cfg(target_arch = "wasm32")]
fn listen(
    target: web_sys::EventTarget,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Subscription {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::debug!(event, "could not register listener");
        return Subscription::inert();
    }
    Subscription::new(move || {
        let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    })
}

/// Call `handler` for every click anywhere in the document, classified
/// against the elements named by `ids`. Clicks are ignored while any of those
/// elements is absent.
pub fn on_document_click(
    ids: &'static [&'static str],
    mut handler: impl FnMut(ClickOrigin) + 'static,
) -> Subscription {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(doc) = document() else {
            return Subscription::inert();
        };
        listen(doc.into(), "click", move |event| {
            let Some(elements) = ids
                .iter()
                .map(|id| element_by_id(id))
                .collect::<Option<Vec<_>>>()
            else {
                return;
            };
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = elements.iter().any(|el| el.contains(target.as_ref()));
            handler(if inside {
                ClickOrigin::Inside
            } else {
                ClickOrigin::Outside
            });
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (ids, &mut handler);
        Subscription::inert()
    }
}

/// Call `handler` on every window resize with whether the desktop
/// breakpoint currently matches.
pub fn on_viewport_resize(mut handler: impl FnMut(bool) + 'static) -> Subscription {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return Subscription::inert();
        };
        let probe = window.clone();
        listen(window.into(), "resize", move |_| {
            handler(is_desktop_viewport(&probe));
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = &mut handler;
        Subscription::inert()
    }
}

/// True when the host exposes `IntersectionObserver`.
pub fn supports_intersection_observer() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().map_or(false, |w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Watch the element with `id` at the given visibility `threshold`.
///
/// `handler` receives each entry's `isIntersecting` flag and returns whether
/// the element should stay observed; returning `false` unobserves it.
pub fn watch_visibility(
    id: &str,
    threshold: f64,
    mut handler: impl FnMut(bool) -> bool + 'static,
) -> Watch {
    if !supports_intersection_observer() {
        return Watch::Unsupported;
    }
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = element_by_id(id) else {
            return Watch::MissingElement;
        };
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !handler(entry.is_intersecting()) {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let Ok(observer) =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        else {
            return Watch::Unsupported;
        };
        observer.observe(&element);
        Watch::Observing(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, threshold, &mut handler);
        Watch::MissingElement
    }
}
