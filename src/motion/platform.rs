use std::cell::RefCell;
use std::rc::Rc;

/// User preferences and device capabilities, read once per controller session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapabilityFlags {
    pub reduced_motion: bool,
    pub fine_pointer: bool,
}

impl CapabilityFlags {
    /// Pointer-driven decoration only runs for precise pointers without a reduced-motion request.
    pub fn pointer_effects(&self) -> bool {
        self.fine_pointer && !self.reduced_motion
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSignal {
    Move(PointerPoint),
    Leave,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointerTarget<E> {
    Viewport,
    Element(E),
}

/// Teardown for a single registration. Consumed on use, so it can run at most once.
#[must_use]
pub struct Disposer(Option<Box<dyn FnOnce()>>);

impl Disposer {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(teardown)))
    }

    pub fn noop() -> Self {
        Self(None)
    }

    pub fn dispose(mut self) {
        if let Some(teardown) = self.0.take() {
            teardown();
        }
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Disposer").field(&self.0.is_some()).finish()
    }
}

/// Everything the controller needs from the host page.
///
/// Implementations absorb their own failures: a call that cannot be carried
/// out is a no-op, never an error surfaced to the controller.
pub trait Platform: Clone + 'static {
    type Element: Clone + PartialEq + 'static;
    type Frame: 'static;
    type Observer: 'static;

    fn capabilities(&self) -> CapabilityFlags;

    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn bounds(&self, element: &Self::Element) -> Rect;

    fn set_style(&self, element: &Self::Element, property: &str, value: &str);
    fn remove_style(&self, element: &Self::Element, property: &str);
    fn add_class(&self, element: &Self::Element, class: &str);
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Registers move and leave handling on `target`. The returned disposer removes both.
    fn on_pointer(
        &self,
        target: PointerTarget<Self::Element>,
        handler: Box<dyn FnMut(PointerSignal)>,
    ) -> Disposer;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Frame;
    fn cancel_frame(&self, frame: Self::Frame);
    /// Monotonic milliseconds on the same clock as frame timestamps.
    fn now(&self) -> f64;

    /// Calls `callback` for each target whose visible fraction crosses `threshold`.
    fn observe_visibility(
        &self,
        threshold: f64,
        targets: &[Self::Element],
        callback: Box<dyn FnMut(Self::Element)>,
    ) -> Self::Observer;
    fn unobserve(&self, observer: &Self::Observer, element: &Self::Element);
    fn disconnect(&self, observer: &Self::Observer);

    fn format_integer(&self, value: i64) -> String;
}

/// Holds at most one pending animation frame.
pub struct FrameSlot<P: Platform> {
    platform: P,
    pending: RefCell<Option<P::Frame>>,
}

impl<P: Platform> FrameSlot<P> {
    pub fn new(platform: P) -> Rc<Self> {
        Rc::new(Self {
            platform,
            pending: RefCell::new(None),
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Requests a frame unless one is already pending. Returns whether a new frame was requested.
    pub fn schedule(self: &Rc<Self>, callback: impl FnOnce(f64) + 'static) -> bool {
        if self.is_pending() {
            return false;
        }
        let slot = Rc::downgrade(self);
        let frame = self.platform.request_frame(Box::new(move |timestamp| {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            slot.pending.borrow_mut().take();
            callback(timestamp);
        }));
        *self.pending.borrow_mut() = Some(frame);
        true
    }

    pub fn cancel(&self) {
        let frame = self.pending.borrow_mut().take();
        if let Some(frame) = frame {
            self.platform.cancel_frame(frame);
        }
    }
}
