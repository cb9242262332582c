//! Decorative motion for the landing page.
//!
//! [`Controller::initialize`] scans the document for interaction markers,
//! attaches the matching effect to each and returns a [`DisposeHandle`]
//! that reverses all of it. Pointer effects only run on fine pointers
//! without a reduced-motion preference; reveal and count-up finish
//! instantly when reduced motion is requested.

pub mod controller;
pub mod count_up;
pub mod easing;
pub mod markers;
pub mod platform;
pub mod pointer;
pub mod tween;
pub mod visibility;
pub mod web;

#[cfg(test)]
pub mod fake;

pub use controller::{Category, Controller, DisposeHandle};
pub use web::WebPlatform;
