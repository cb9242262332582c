//! Minimal "from" tweens for entrance effects.
//!
//! Every animated channel starts at the configured value and eases towards
//! the element's natural state (opacity 1, no offset, scale 1). Inline styles
//! written here are removed again when the tween completes or is cancelled.

use std::cell::Cell;
use std::rc::Rc;

use super::easing::Ease;
use super::platform::{Disposer, FrameSlot, Platform};

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from_opacity: Option<f64>,
    /// Vertical offset in px.
    pub from_y: Option<f64>,
    pub from_scale: Option<f64>,
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// Extra start delay per target, in document order.
    pub stagger_ms: f64,
    pub ease: Ease,
}

impl Tween {
    fn progress(&self, index: usize, elapsed: f64) -> f64 {
        let local = elapsed - self.delay_ms - index as f64 * self.stagger_ms;
        if self.duration_ms <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration_ms).clamp(0.0, 1.0)
    }

    fn opacity(&self, eased: f64) -> Option<String> {
        self.from_opacity
            .map(|from| format!("{:.3}", from + (1.0 - from) * eased))
    }

    fn transform(&self, eased: f64) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(from) = self.from_y {
            parts.push(format!("translateY({:.2}px)", from * (1.0 - eased) + 0.0));
        }
        if let Some(from) = self.from_scale {
            parts.push(format!("scale({:.4})", from + (1.0 - from) * eased));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

struct TweenRun<P: Platform> {
    platform: P,
    targets: Vec<P::Element>,
    tween: Tween,
    start: f64,
    frame: Rc<FrameSlot<P>>,
    finished: Cell<bool>,
}

impl<P: Platform> TweenRun<P> {
    fn render(&self, target: &P::Element, eased: f64) {
        if let Some(opacity) = self.tween.opacity(eased) {
            self.platform.set_style(target, "opacity", &opacity);
        }
        if let Some(transform) = self.tween.transform(eased) {
            self.platform.set_style(target, "transform", &transform);
        }
    }

    fn finish(&self) {
        self.finished.set(true);
        for target in &self.targets {
            if self.tween.from_opacity.is_some() {
                self.platform.remove_style(target, "opacity");
            }
            if self.tween.from_y.is_some() || self.tween.from_scale.is_some() {
                self.platform.remove_style(target, "transform");
            }
        }
    }
}

/// Starts `tween` on `targets`. The disposer stops it and clears its inline styles.
pub fn play<P: Platform>(platform: &P, targets: Vec<P::Element>, tween: Tween) -> Disposer {
    if targets.is_empty() {
        return Disposer::noop();
    }

    let run = Rc::new(TweenRun {
        platform: platform.clone(),
        targets,
        tween,
        start: platform.now(),
        frame: FrameSlot::new(platform.clone()),
        finished: Cell::new(false),
    });
    for target in &run.targets {
        run.render(target, 0.0);
    }
    schedule(&run);

    Disposer::new(move || {
        if !run.finished.get() {
            run.frame.cancel();
            run.finish();
        }
    })
}

fn schedule<P: Platform>(run: &Rc<TweenRun<P>>) {
    let next = run.clone();
    run.frame.schedule(move |now| step(next, now));
}

fn step<P: Platform>(run: Rc<TweenRun<P>>, now: f64) {
    if run.finished.get() {
        return;
    }
    let elapsed = now - run.start;
    let mut done = true;
    for (index, target) in run.targets.iter().enumerate() {
        let progress = run.tween.progress(index, elapsed);
        if progress < 1.0 {
            done = false;
        }
        run.render(target, run.tween.ease.apply(progress));
    }
    if done {
        run.finish();
    } else {
        schedule(&run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::fake::FakePlatform;

    fn rise() -> Tween {
        Tween {
            from_opacity: Some(0.0),
            from_y: Some(24.0),
            from_scale: None,
            duration_ms: 1000.0,
            delay_ms: 100.0,
            stagger_ms: 120.0,
            ease: Ease::Power3Out,
        }
    }

    #[test]
    fn from_values_are_written_immediately() {
        let platform = FakePlatform::interactive();
        let a = platform.element(&["[data-animate]"]);
        let _tween = play(&platform, vec![a.clone()], rise());

        assert_eq!(a.style("opacity").as_deref(), Some("0.000"));
        assert_eq!(a.style("transform").as_deref(), Some("translateY(24.00px)"));
        assert_eq!(platform.pending_frames(), 1);
    }

    #[test]
    fn staggered_targets_trail_earlier_ones() {
        let platform = FakePlatform::interactive();
        let a = platform.element(&["[data-animate]"]);
        let b = platform.element(&["[data-animate]"]);
        let _tween = play(&platform, vec![a.clone(), b.clone()], rise());

        platform.run_frame(200.0);
        let first: f64 = a.style("opacity").unwrap().parse().unwrap();
        let second: f64 = b.style("opacity").unwrap().parse().unwrap();
        assert!(first > 0.0);
        assert!(second < first);
    }

    #[test]
    fn completion_clears_inline_styles() {
        let platform = FakePlatform::interactive();
        let visual = platform.element(&[".hero-visual"]);
        let tween = Tween {
            from_opacity: Some(0.0),
            from_y: None,
            from_scale: Some(0.96),
            duration_ms: 1100.0,
            delay_ms: 250.0,
            stagger_ms: 0.0,
            ease: Ease::Power3Out,
        };
        let _tween = play(&platform, vec![visual.clone()], tween);
        assert_eq!(visual.style("transform").as_deref(), Some("scale(0.9600)"));

        platform.run_frames_until(5000.0, 16.0);
        assert_eq!(platform.pending_frames(), 0);
        assert_eq!(visual.style("opacity"), None);
        assert_eq!(visual.style("transform"), None);
    }

    #[test]
    fn cancel_stops_frames_and_restores() {
        let platform = FakePlatform::interactive();
        let a = platform.element(&["[data-animate]"]);
        let tween = play(&platform, vec![a.clone()], rise());
        platform.run_frame(300.0);

        tween.dispose();
        assert_eq!(platform.pending_frames(), 0);
        assert_eq!(a.style("opacity"), None);

        let writes = platform.writes();
        platform.run_frame(400.0);
        assert_eq!(platform.writes(), writes);
    }

    #[test]
    fn no_targets_is_a_noop() {
        let platform = FakePlatform::interactive();
        play(&platform, Vec::new(), rise()).dispose();
        assert_eq!(platform.pending_frames(), 0);
        assert_eq!(platform.writes(), 0);
    }
}
