//! Pointer-driven decoration: cursor glow, hero parallax, magnetic pull and tilt.

use std::cell::Cell;
use std::rc::Rc;

use super::platform::{Disposer, FrameSlot, Platform, PointerPoint, PointerSignal, PointerTarget, Rect};

pub type StyleWrite = (&'static str, String);

/// Pointer position relative to the box center, as a fraction of its size in `[-0.5, 0.5]`.
pub fn normalized(rect: Rect, point: PointerPoint) -> (f64, f64) {
    let axis = |position: f64, start: f64, size: f64| {
        if size > 0.0 {
            ((position - start) / size - 0.5).clamp(-0.5, 0.5)
        } else {
            0.0
        }
    };
    (
        axis(point.x, rect.left, rect.width),
        axis(point.y, rect.top, rect.height),
    )
}

/// Pointer offset from the box center, in px.
pub fn center_offset(rect: Rect, point: PointerPoint) -> (f64, f64) {
    (
        point.x - rect.left - rect.width / 2.0,
        point.y - rect.top - rect.height / 2.0,
    )
}

/// `(rotateX, rotateY)` in degrees for a normalized pointer position.
pub fn tilt_angles(x: f64, y: f64, amplitude: f64) -> (f64, f64) {
    (-y * amplitude, x * amplitude)
}

// `+ 0.0` turns -0 into 0 so resets never print "-0px".
pub fn px(value: f64) -> String {
    format!("{}px", value + 0.0)
}

pub fn deg(value: f64) -> String {
    format!("{:.2}deg", value + 0.0)
}

/// Writes `transform(bounds, pointer)` to `element` on every move and `rest` on leave.
pub fn bind_transform<P, F>(
    platform: &P,
    element: P::Element,
    transform: F,
    rest: &'static [(&'static str, &'static str)],
) -> Disposer
where
    P: Platform,
    F: Fn(Rect, PointerPoint) -> Vec<StyleWrite> + 'static,
{
    let host = platform.clone();
    let target = element.clone();
    platform.on_pointer(
        PointerTarget::Element(element),
        Box::new(move |signal| match signal {
            PointerSignal::Move(point) => {
                let rect = host.bounds(&target);
                for (property, value) in transform(rect, point) {
                    host.set_style(&target, property, &value);
                }
            }
            PointerSignal::Leave => {
                for (property, value) in rest {
                    host.set_style(&target, property, value);
                }
            }
        }),
    )
}

pub fn cursor_glow<P: Platform>(platform: &P, glow: P::Element) -> Disposer {
    let host = platform.clone();
    let mut visible = false;
    platform.on_pointer(
        PointerTarget::Viewport,
        Box::new(move |signal| match signal {
            PointerSignal::Move(point) => {
                host.set_style(&glow, "left", &px(point.x));
                host.set_style(&glow, "top", &px(point.y));
                if !visible {
                    host.set_style(&glow, "opacity", "1");
                    visible = true;
                }
            }
            PointerSignal::Leave => {
                host.set_style(&glow, "opacity", "0");
                visible = false;
            }
        }),
    )
}

struct ParallaxState<P: Platform> {
    platform: P,
    layers: Vec<(P::Element, f64)>,
    target: Cell<(f64, f64)>,
    frame: Rc<FrameSlot<P>>,
}

impl<P: Platform> ParallaxState<P> {
    /// Pointer samples arriving before the frame fires only move the target.
    fn request_update(self: &Rc<Self>) {
        let state = self.clone();
        self.frame.schedule(move |_| state.apply());
    }

    fn apply(&self) {
        let (x, y) = self.target.get();
        for (layer, depth) in &self.layers {
            self.platform.set_style(layer, "--parallax-x", &px(x * depth));
            self.platform.set_style(layer, "--parallax-y", &px(y * depth));
        }
    }
}

/// Shifts each `(layer, depth)` with the pointer position inside `hero`, once per frame.
pub fn parallax<P: Platform>(
    platform: &P,
    hero: P::Element,
    layers: Vec<(P::Element, f64)>,
) -> Disposer {
    let state = Rc::new(ParallaxState {
        platform: platform.clone(),
        layers,
        target: Cell::new((0.0, 0.0)),
        frame: FrameSlot::new(platform.clone()),
    });

    let host = platform.clone();
    let region = hero.clone();
    let tracked = state.clone();
    let listener = platform.on_pointer(
        PointerTarget::Element(hero),
        Box::new(move |signal| {
            match signal {
                PointerSignal::Move(point) => {
                    tracked.target.set(normalized(host.bounds(&region), point));
                }
                PointerSignal::Leave => tracked.target.set((0.0, 0.0)),
            }
            tracked.request_update();
        }),
    );

    Disposer::new(move || {
        listener.dispose();
        state.frame.cancel();
    })
}

pub fn magnetic<P: Platform>(platform: &P, element: P::Element, factor: f64) -> Disposer {
    bind_transform(
        platform,
        element,
        move |rect, point| {
            let (x, y) = center_offset(rect, point);
            vec![("--magnet-x", px(x * factor)), ("--magnet-y", px(y * factor))]
        },
        &[("--magnet-x", "0px"), ("--magnet-y", "0px")],
    )
}

pub fn tilt<P: Platform>(platform: &P, element: P::Element, amplitude: f64) -> Disposer {
    bind_transform(
        platform,
        element,
        move |rect, point| {
            let (x, y) = normalized(rect, point);
            let (rotate_x, rotate_y) = tilt_angles(x, y, amplitude);
            vec![("--tilt-x", deg(rotate_x)), ("--tilt-y", deg(rotate_y))]
        },
        &[("--tilt-x", "0deg"), ("--tilt-y", "0deg")],
    )
}
