use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::MotionConfig;

use super::count_up::{count_up, write_final, CountTarget};
use super::markers::{parse_count, parse_depth, parse_suffix};
use super::platform::{CapabilityFlags, Disposer, Platform};
use super::pointer::{cursor_glow, magnetic, parallax, tilt};
use super::tween::play;
use super::visibility::{reveal, reveal_all};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    CursorGlow,
    Parallax,
    Magnetic,
    Tilt,
    ScrollReveal,
    CountUp,
    Entrance,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CursorGlow => "cursor-glow",
            Category::Parallax => "parallax",
            Category::Magnetic => "magnetic",
            Category::Tilt => "tilt",
            Category::ScrollReveal => "scroll-reveal",
            Category::CountUp => "count-up",
            Category::Entrance => "entrance-animation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attached behavior and the procedure that detaches it.
#[derive(Debug)]
pub struct InteractionBinding {
    pub category: Category,
    disposer: Disposer,
}

struct Session {
    categories: Vec<Category>,
    bindings: RefCell<Vec<InteractionBinding>>,
    disposed: Cell<bool>,
}

impl Session {
    fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        let bindings = std::mem::take(&mut *self.bindings.borrow_mut());
        info!("Disposing motion controller ({} bindings)", bindings.len());
        for binding in bindings {
            binding.disposer.dispose();
        }
    }
}

/// Returned by [`Controller::initialize`]. Disposing more than once is a no-op; dropping disposes.
#[must_use = "dropping the handle tears every effect down"]
pub struct DisposeHandle {
    session: Rc<Session>,
}

impl DisposeHandle {
    pub fn dispose(&self) {
        self.session.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.session.disposed.get()
    }

    /// Category of every binding attached by this session, in attach order.
    pub fn categories(&self) -> &[Category] {
        &self.session.categories
    }
}

impl Drop for DisposeHandle {
    fn drop(&mut self) {
        self.session.dispose();
    }
}

/// Finds the interaction markers on a page and wires their effects.
pub struct Controller<P: Platform> {
    platform: P,
    config: MotionConfig,
    active: RefCell<Option<Rc<Session>>>,
}

impl<P: Platform> Controller<P> {
    pub fn new(platform: P, config: MotionConfig) -> Self {
        Self {
            platform,
            config,
            active: RefCell::new(None),
        }
    }

    pub fn initialize(&self) -> DisposeHandle {
        let previous = self.active.borrow_mut().take();
        if let Some(previous) = previous {
            if !previous.disposed.get() {
                warn!("Motion controller initialized twice, disposing the previous session");
                previous.dispose();
            }
        }

        let flags = self.platform.capabilities();
        info!(
            "Initializing motion controller (reduced motion: {}, fine pointer: {})",
            flags.reduced_motion, flags.fine_pointer
        );

        let mut bindings = Vec::new();
        if flags.pointer_effects() {
            self.attach_pointer_effects(&mut bindings);
        } else {
            debug!("Pointer effects disabled for this device");
        }
        self.attach_reveal(flags, &mut bindings);
        self.attach_count_up(flags, &mut bindings);
        if !flags.reduced_motion {
            self.attach_entrance(&mut bindings);
        }

        let categories: Vec<Category> = bindings.iter().map(|b| b.category).collect();
        info!(
            "Motion controller attached {} bindings: {}",
            categories.len(),
            categories.iter().map(Category::as_str).collect::<Vec<_>>().join(", ")
        );

        let session = Rc::new(Session {
            categories,
            bindings: RefCell::new(bindings),
            disposed: Cell::new(false),
        });
        *self.active.borrow_mut() = Some(session.clone());
        DisposeHandle { session }
    }

    fn attach_pointer_effects(&self, bindings: &mut Vec<InteractionBinding>) {
        let markers = &self.config.markers;
        let platform = &self.platform;

        match platform.query(&markers.cursor_glow) {
            Some(glow) => bind(bindings, Category::CursorGlow, cursor_glow(platform, glow)),
            None => debug!("No cursor glow element"),
        }

        let layers: Vec<(P::Element, f64)> = platform
            .query_all(&markers.parallax)
            .into_iter()
            .map(|layer| {
                let raw = platform.attribute(&layer, &markers.parallax_depth_attr);
                let depth = parse_depth(raw.as_deref(), self.config.default_depth);
                (layer, depth)
            })
            .collect();
        match platform.query(&markers.hero) {
            Some(hero) if !layers.is_empty() => {
                bind(bindings, Category::Parallax, parallax(platform, hero, layers));
            }
            _ => debug!("No parallax hero or layers"),
        }

        for target in platform.query_all(&markers.magnetic) {
            let disposer = magnetic(platform, target, self.config.magnet_factor);
            bind(bindings, Category::Magnetic, disposer);
        }

        for card in platform.query_all(&markers.tilt) {
            let disposer = tilt(platform, card, self.config.tilt_degrees);
            bind(bindings, Category::Tilt, disposer);
        }
    }

    fn attach_reveal(&self, flags: CapabilityFlags, bindings: &mut Vec<InteractionBinding>) {
        let markers = &self.config.markers;
        let targets = self.platform.query_all(&markers.reveal);
        if targets.is_empty() {
            return;
        }
        if flags.reduced_motion {
            reveal_all(&self.platform, &targets, &markers.visible_class);
        } else {
            let disposer = reveal(
                &self.platform,
                targets,
                &markers.visible_class,
                self.config.reveal_threshold,
            );
            bind(bindings, Category::ScrollReveal, disposer);
        }
    }

    fn attach_count_up(&self, flags: CapabilityFlags, bindings: &mut Vec<InteractionBinding>) {
        let markers = &self.config.markers;
        let targets: Vec<CountTarget<P::Element>> = self
            .platform
            .query_all(&markers.count)
            .into_iter()
            .map(|element| {
                let value = parse_count(self.platform.attribute(&element, &markers.count_attr).as_deref());
                let suffix = parse_suffix(self.platform.attribute(&element, &markers.suffix_attr).as_deref());
                CountTarget { element, value, suffix }
            })
            .collect();
        if targets.is_empty() {
            return;
        }
        if flags.reduced_motion {
            write_final(&self.platform, &targets);
        } else {
            let disposer = count_up(
                &self.platform,
                targets,
                self.config.count_threshold,
                self.config.count_duration_ms,
            );
            bind(bindings, Category::CountUp, disposer);
        }
    }

    fn attach_entrance(&self, bindings: &mut Vec<InteractionBinding>) {
        let markers = &self.config.markers;
        let staggered = self.platform.query_all(&markers.animate);
        if !staggered.is_empty() {
            let disposer = play(&self.platform, staggered, self.config.entrance.clone());
            bind(bindings, Category::Entrance, disposer);
        }
        let visual = self.platform.query_all(&markers.hero_visual);
        if !visual.is_empty() {
            let disposer = play(&self.platform, visual, self.config.hero_visual.clone());
            bind(bindings, Category::Entrance, disposer);
        }
    }
}

fn bind(bindings: &mut Vec<InteractionBinding>, category: Category, disposer: Disposer) {
    debug!("Attached {}", category);
    bindings.push(InteractionBinding { category, disposer });
}
