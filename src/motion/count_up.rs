//! Animated number counters.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::easing::Ease;
use super::markers::round_half_up;
use super::platform::{Disposer, FrameSlot, Platform};
use super::visibility::observe_once;

#[derive(Clone, Debug, PartialEq)]
pub struct CountTarget<E> {
    pub element: E,
    pub value: i64,
    pub suffix: String,
}

/// Displayed value at `progress` (clamped to `[0, 1]`) of the ease-out ramp towards `target`.
pub fn count_value(target: i64, progress: f64) -> i64 {
    round_half_up(target as f64 * Ease::CubicOut.apply(progress))
}

pub fn count_text<P: Platform>(platform: &P, value: i64, suffix: &str) -> String {
    format!("{}{}", platform.format_integer(value), suffix)
}

struct CountUpRun<P: Platform> {
    platform: P,
    target: CountTarget<P::Element>,
    start: f64,
    duration_ms: f64,
    frame: Rc<FrameSlot<P>>,
}

impl<P: Platform> CountUpRun<P> {
    fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration_ms).clamp(0.0, 1.0)
    }
}

fn step<P: Platform>(run: Rc<CountUpRun<P>>, now: f64) {
    let progress = run.progress(now);
    let value = count_value(run.target.value, progress);
    let text = count_text(&run.platform, value, &run.target.suffix);
    run.platform.set_text(&run.target.element, &text);
    if progress < 1.0 {
        let next = run.clone();
        run.frame.schedule(move |now| step(next, now));
    }
}

/// Starts one ramp for `target`; the returned slot holds its next frame.
fn start<P: Platform>(platform: &P, target: CountTarget<P::Element>, duration_ms: f64) -> Rc<FrameSlot<P>> {
    let run = Rc::new(CountUpRun {
        platform: platform.clone(),
        target,
        start: platform.now(),
        duration_ms,
        frame: FrameSlot::new(platform.clone()),
    });
    let slot = run.frame.clone();
    let first = run.clone();
    run.frame.schedule(move |now| step(first, now));
    slot
}

/// Writes every final value right away, without animation.
pub fn write_final<P: Platform>(platform: &P, targets: &[CountTarget<P::Element>]) {
    debug!("Writing {} counters without animation", targets.len());
    for target in targets {
        let text = count_text(platform, target.value, &target.suffix);
        platform.set_text(&target.element, &text);
    }
}

/// Counts every target up from zero the first time it crosses `threshold`.
pub fn count_up<P: Platform>(
    platform: &P,
    targets: Vec<CountTarget<P::Element>>,
    threshold: f64,
    duration_ms: f64,
) -> Disposer {
    let elements: Vec<P::Element> = targets.iter().map(|t| t.element.clone()).collect();
    let pending = RefCell::new(targets);
    let running: Rc<RefCell<Vec<Rc<FrameSlot<P>>>>> = Rc::new(RefCell::new(Vec::new()));

    let host = platform.clone();
    let runs = running.clone();
    let observation = observe_once(platform, threshold, elements, move |element| {
        let target = {
            let mut pending = pending.borrow_mut();
            pending
                .iter()
                .position(|t| &t.element == element)
                .map(|index| pending.remove(index))
        };
        if let Some(target) = target {
            runs.borrow_mut().push(start(&host, target, duration_ms));
        }
    });

    Disposer::new(move || {
        observation.dispose();
        for slot in running.borrow_mut().drain(..) {
            slot.cancel();
        }
    })
}
