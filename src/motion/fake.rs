//! In-memory page used by the unit tests. Records every write and lets a test
//! deliver pointer events, animation frames and visibility crossings by hand.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::platform::{
    CapabilityFlags, Disposer, Platform, PointerPoint, PointerSignal, PointerTarget, Rect,
};

pub struct Node {
    markers: Vec<String>,
    attrs: HashMap<String, String>,
    rect: Cell<Rect>,
    style: RefCell<BTreeMap<String, String>>,
    classes: RefCell<Vec<String>>,
    text: RefCell<String>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeElement")
            .field("markers", &self.0.markers)
            .finish()
    }
}

impl FakeElement {
    pub fn style(&self, property: &str) -> Option<String> {
        self.0.style.borrow().get(property).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    pub fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    pub fn set_rect(&self, rect: Rect) {
        self.0.rect.set(rect);
    }
}

type Handler = Rc<RefCell<Box<dyn FnMut(PointerSignal)>>>;

struct Listener {
    id: usize,
    target: PointerTarget<FakeElement>,
    handler: Handler,
}

pub struct FakeObservation {
    threshold: f64,
    targets: RefCell<Vec<FakeElement>>,
    connected: Cell<bool>,
    callback: Rc<RefCell<Box<dyn FnMut(FakeElement)>>>,
}

impl FakeObservation {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

struct Inner {
    flags: CapabilityFlags,
    elements: RefCell<Vec<FakeElement>>,
    listeners: RefCell<Vec<Listener>>,
    frames: RefCell<Vec<(usize, Box<dyn FnOnce(f64)>)>>,
    observers: RefCell<Vec<Rc<FakeObservation>>>,
    next_id: Cell<usize>,
    clock: Cell<f64>,
    writes: Cell<usize>,
}

#[derive(Clone)]
pub struct FakePlatform(Rc<Inner>);

impl FakePlatform {
    pub fn new(flags: CapabilityFlags) -> Self {
        Self(Rc::new(Inner {
            flags,
            elements: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            frames: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            clock: Cell::new(0.0),
            writes: Cell::new(0),
        }))
    }

    pub fn interactive() -> Self {
        Self::new(CapabilityFlags {
            reduced_motion: false,
            fine_pointer: true,
        })
    }

    fn next_id(&self) -> usize {
        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);
        id
    }

    pub fn element(&self, markers: &[&str]) -> FakeElement {
        self.element_with(markers, &[])
    }

    pub fn element_with(&self, markers: &[&str], attrs: &[(&str, &str)]) -> FakeElement {
        let element = FakeElement(Rc::new(Node {
            markers: markers.iter().map(|m| m.to_string()).collect(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            rect: Cell::new(Rect {
                left: 0.0,
                top: 0.0,
                width: 100.0,
                height: 100.0,
            }),
            style: RefCell::new(BTreeMap::new()),
            classes: RefCell::new(Vec::new()),
            text: RefCell::new(String::new()),
        }));
        self.0.elements.borrow_mut().push(element.clone());
        element
    }

    fn record_write(&self) {
        self.0.writes.set(self.0.writes.get() + 1);
    }

    /// Number of DOM writes made through this platform so far.
    pub fn writes(&self) -> usize {
        self.0.writes.get()
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    pub fn listeners_on(&self, target: &PointerTarget<FakeElement>) -> usize {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|l| &l.target == target)
            .count()
    }

    pub fn pending_frames(&self) -> usize {
        self.0.frames.borrow().len()
    }

    pub fn connected_observers(&self) -> Vec<Rc<FakeObservation>> {
        self.0
            .observers
            .borrow()
            .iter()
            .filter(|o| o.connected.get())
            .cloned()
            .collect()
    }

    /// Targets still watched by a connected observer.
    pub fn observed_count(&self) -> usize {
        self.connected_observers()
            .iter()
            .map(|o| o.targets.borrow().len())
            .sum()
    }

    fn deliver(&self, target: &PointerTarget<FakeElement>, signal: PointerSignal) {
        let handlers: Vec<Handler> = self
            .0
            .listeners
            .borrow()
            .iter()
            .filter(|l| &l.target == target)
            .map(|l| l.handler.clone())
            .collect();
        for handler in handlers {
            (&mut *handler.borrow_mut())(signal);
        }
    }

    pub fn pointer_move(&self, target: &PointerTarget<FakeElement>, x: f64, y: f64) {
        self.deliver(target, PointerSignal::Move(PointerPoint { x, y }));
    }

    pub fn pointer_leave(&self, target: &PointerTarget<FakeElement>) {
        self.deliver(target, PointerSignal::Leave);
    }

    /// Runs the frames queued before this call; frames they request wait for the next one.
    pub fn run_frame(&self, timestamp: f64) {
        self.0.clock.set(timestamp);
        let frames = std::mem::take(&mut *self.0.frames.borrow_mut());
        for (_, callback) in frames {
            callback(timestamp);
        }
    }

    /// Steps frames every `step` ms until `until` or until nothing is pending.
    pub fn run_frames_until(&self, until: f64, step: f64) {
        let mut timestamp = self.0.clock.get();
        while self.pending_frames() > 0 && timestamp < until {
            timestamp += step;
            self.run_frame(timestamp);
        }
    }

    pub fn set_clock(&self, timestamp: f64) {
        self.0.clock.set(timestamp);
    }

    /// Simulates `element` crossing the threshold of every connected observer watching it.
    pub fn intersect(&self, element: &FakeElement) {
        let callbacks: Vec<_> = self
            .connected_observers()
            .iter()
            .filter(|o| o.targets.borrow().contains(element))
            .map(|o| o.callback.clone())
            .collect();
        for callback in callbacks {
            (&mut *callback.borrow_mut())(element.clone());
        }
    }
}

impl Platform for FakePlatform {
    type Element = FakeElement;
    type Frame = usize;
    type Observer = Rc<FakeObservation>;

    fn capabilities(&self) -> CapabilityFlags {
        self.0.flags
    }

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.0
            .elements
            .borrow()
            .iter()
            .filter(|e| e.0.markers.iter().any(|m| m == selector))
            .cloned()
            .collect()
    }

    fn attribute(&self, element: &FakeElement, name: &str) -> Option<String> {
        element.0.attrs.get(name).cloned()
    }

    fn bounds(&self, element: &FakeElement) -> Rect {
        element.0.rect.get()
    }

    fn set_style(&self, element: &FakeElement, property: &str, value: &str) {
        self.record_write();
        element
            .0
            .style
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style(&self, element: &FakeElement, property: &str) {
        self.record_write();
        element.0.style.borrow_mut().remove(property);
    }

    fn add_class(&self, element: &FakeElement, class: &str) {
        self.record_write();
        if !element.has_class(class) {
            element.0.classes.borrow_mut().push(class.to_string());
        }
    }

    fn set_text(&self, element: &FakeElement, text: &str) {
        self.record_write();
        *element.0.text.borrow_mut() = text.to_string();
    }

    fn on_pointer(
        &self,
        target: PointerTarget<FakeElement>,
        handler: Box<dyn FnMut(PointerSignal)>,
    ) -> Disposer {
        let id = self.next_id();
        self.0.listeners.borrow_mut().push(Listener {
            id,
            target,
            handler: Rc::new(RefCell::new(handler)),
        });
        let platform = self.clone();
        Disposer::new(move || {
            platform.0.listeners.borrow_mut().retain(|l| l.id != id);
        })
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> usize {
        let id = self.next_id();
        self.0.frames.borrow_mut().push((id, callback));
        id
    }

    fn cancel_frame(&self, frame: usize) {
        self.0.frames.borrow_mut().retain(|(id, _)| *id != frame);
    }

    fn now(&self) -> f64 {
        self.0.clock.get()
    }

    fn observe_visibility(
        &self,
        threshold: f64,
        targets: &[FakeElement],
        callback: Box<dyn FnMut(FakeElement)>,
    ) -> Rc<FakeObservation> {
        let observation = Rc::new(FakeObservation {
            threshold,
            targets: RefCell::new(targets.to_vec()),
            connected: Cell::new(true),
            callback: Rc::new(RefCell::new(callback)),
        });
        self.0.observers.borrow_mut().push(observation.clone());
        observation
    }

    fn unobserve(&self, observer: &Rc<FakeObservation>, element: &FakeElement) {
        observer.targets.borrow_mut().retain(|t| t != element);
    }

    fn disconnect(&self, observer: &Rc<FakeObservation>) {
        observer.connected.set(false);
        observer.targets.borrow_mut().clear();
    }

    fn format_integer(&self, value: i64) -> String {
        // pt-BR grouping
        let digits = value.unsigned_abs().to_string();
        let mut grouped = String::new();
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        if value < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_dot_grouping() {
        let platform = FakePlatform::interactive();
        assert_eq!(platform.format_integer(0), "0");
        assert_eq!(platform.format_integer(120), "120");
        assert_eq!(platform.format_integer(1200), "1.200");
        assert_eq!(platform.format_integer(-1234567), "-1.234.567");
    }
}
