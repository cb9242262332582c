//! One-shot visibility triggers and the scroll reveal built on them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::platform::{Disposer, Platform};

struct OneShot<P: Platform> {
    platform: P,
    waiting: RefCell<Vec<P::Element>>,
    observer: RefCell<Option<P::Observer>>,
}

impl<P: Platform> OneShot<P> {
    /// Removes `element` from the waiting set. False if it already fired.
    fn claim(&self, element: &P::Element) -> bool {
        let mut waiting = self.waiting.borrow_mut();
        match waiting.iter().position(|w| w == element) {
            Some(index) => {
                waiting.remove(index);
                true
            }
            None => false,
        }
    }

    fn release(&self, element: &P::Element) {
        let done = self.waiting.borrow().is_empty();
        if let Some(observer) = self.observer.borrow().as_ref() {
            self.platform.unobserve(observer, element);
        }
        if done {
            self.disconnect();
        }
    }

    fn disconnect(&self) {
        let observer = self.observer.borrow_mut().take();
        if let Some(observer) = observer {
            self.platform.disconnect(&observer);
        }
    }
}

/// Calls `on_visible` the first time each target crosses `threshold`, never again for that target.
///
/// The observer is disconnected once every target has fired, or when the
/// returned disposer runs.
pub fn observe_once<P, F>(
    platform: &P,
    threshold: f64,
    targets: Vec<P::Element>,
    mut on_visible: F,
) -> Disposer
where
    P: Platform,
    F: FnMut(&P::Element) + 'static,
{
    if targets.is_empty() {
        return Disposer::noop();
    }

    let shot = Rc::new(OneShot {
        platform: platform.clone(),
        waiting: RefCell::new(targets.clone()),
        observer: RefCell::new(None),
    });

    let weak: Weak<OneShot<P>> = Rc::downgrade(&shot);
    let observer = platform.observe_visibility(
        threshold,
        &targets,
        Box::new(move |element| {
            let Some(shot) = weak.upgrade() else {
                return;
            };
            if !shot.claim(&element) {
                return;
            }
            on_visible(&element);
            shot.release(&element);
        }),
    );
    *shot.observer.borrow_mut() = Some(observer);

    Disposer::new(move || shot.disconnect())
}

/// Marks every target visible right away, without observing anything.
pub fn reveal_all<P: Platform>(platform: &P, targets: &[P::Element], visible_class: &str) {
    debug!("Revealing {} elements without observation", targets.len());
    for target in targets {
        platform.add_class(target, visible_class);
    }
}

/// Marks each target visible the first time it crosses `threshold`.
pub fn reveal<P: Platform>(
    platform: &P,
    targets: Vec<P::Element>,
    visible_class: &str,
    threshold: f64,
) -> Disposer {
    let host = platform.clone();
    let class = visible_class.to_string();
    observe_once(platform, threshold, targets, move |element| {
        host.add_class(element, &class);
    })
}
