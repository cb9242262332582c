use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Number};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

use super::platform::{
    CapabilityFlags, Disposer, Platform, PointerPoint, PointerSignal, PointerTarget, Rect,
};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const FINE_POINTER_QUERY: &str = "(pointer: fine)";

/// The live browser document.
#[derive(Clone)]
pub struct WebPlatform {
    window: Window,
    document: Document,
    locale: Rc<str>,
}

impl WebPlatform {
    /// None outside a browser window.
    pub fn new(locale: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            locale: Rc::from(locale),
        })
    }

    fn media_matches(&self, query: &str) -> bool {
        match self.window.match_media(query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                warn!("matchMedia {} failed: {:?}", query, err);
                false
            }
        }
    }
}

pub struct WebObserver {
    inner: Option<IntersectionObserver>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Platform for WebPlatform {
    type Element = HtmlElement;
    type Frame = i32;
    type Observer = WebObserver;

    fn capabilities(&self) -> CapabilityFlags {
        CapabilityFlags {
            reduced_motion: self.media_matches(REDUCED_MOTION_QUERY),
            fine_pointer: self.media_matches(FINE_POINTER_QUERY),
        }
    }

    fn query(&self, selector: &str) -> Option<HtmlElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.and_then(|element| element.dyn_into::<HtmlElement>().ok()),
            Err(err) => {
                warn!("Invalid selector {}: {:?}", selector, err);
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                warn!("Invalid selector {}: {:?}", selector, err);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn attribute(&self, element: &HtmlElement, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn bounds(&self, element: &HtmlElement) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn set_style(&self, element: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = element.style().set_property(property, value) {
            warn!("Failed to set {}: {:?}", property, err);
        }
    }

    fn remove_style(&self, element: &HtmlElement, property: &str) {
        if let Err(err) = element.style().remove_property(property) {
            warn!("Failed to remove {}: {:?}", property, err);
        }
    }

    fn add_class(&self, element: &HtmlElement, class: &str) {
        if let Err(err) = element.class_list().add_1(class) {
            warn!("Failed to add class {}: {:?}", class, err);
        }
    }

    fn set_text(&self, element: &HtmlElement, text: &str) {
        element.set_text_content(Some(text));
    }

    fn on_pointer(
        &self,
        target: PointerTarget<HtmlElement>,
        handler: Box<dyn FnMut(PointerSignal)>,
    ) -> Disposer {
        // The root element sees every bubbled move and a mouseleave when the pointer exits the window.
        let event_target: EventTarget = match target {
            PointerTarget::Viewport => match self.document.document_element() {
                Some(root) => root.into(),
                None => {
                    warn!("No document element to track the pointer on");
                    return Disposer::noop();
                }
            },
            PointerTarget::Element(element) => element.into(),
        };

        let handler = Rc::new(RefCell::new(handler));
        let on_move = {
            let handler = handler.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let point = PointerPoint {
                    x: event.client_x() as f64,
                    y: event.client_y() as f64,
                };
                (&mut *handler.borrow_mut())(PointerSignal::Move(point));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_leave = Closure::wrap(Box::new(move |_event: MouseEvent| {
            (&mut *handler.borrow_mut())(PointerSignal::Leave);
        }) as Box<dyn FnMut(MouseEvent)>);

        for (event, callback) in [("mousemove", &on_move), ("mouseleave", &on_leave)] {
            if let Err(err) =
                event_target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!("Failed to listen for {}: {:?}", event, err);
            }
        }

        Disposer::new(move || {
            for (event, callback) in [("mousemove", &on_move), ("mouseleave", &on_leave)] {
                let _ = event_target
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
        })
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> i32 {
        // A cancelled frame keeps its closure alive; only dispose cancels, so this stays bounded.
        let callback = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => id,
            Err(err) => {
                warn!("requestAnimationFrame failed: {:?}", err);
                0
            }
        }
    }

    fn cancel_frame(&self, frame: i32) {
        if let Err(err) = self.window.cancel_animation_frame(frame) {
            warn!("cancelAnimationFrame failed: {:?}", err);
        }
    }

    fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }

    fn observe_visibility(
        &self,
        threshold: f64,
        targets: &[HtmlElement],
        callback: Box<dyn FnMut(HtmlElement)>,
    ) -> WebObserver {
        let mut callback = callback;
        let closure = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                    callback(element);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let inner = match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                for target in targets {
                    observer.observe(target);
                }
                Some(observer)
            }
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                None
            }
        };

        WebObserver {
            inner,
            _callback: closure,
        }
    }

    fn unobserve(&self, observer: &WebObserver, element: &HtmlElement) {
        if let Some(inner) = &observer.inner {
            inner.unobserve(element);
        }
    }

    fn disconnect(&self, observer: &WebObserver) {
        if let Some(inner) = &observer.inner {
            inner.disconnect();
        }
    }

    fn format_integer(&self, value: i64) -> String {
        Number::from(value as f64).to_locale_string(&self.locale).into()
    }
}
