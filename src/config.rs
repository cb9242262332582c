use log::Level;

use crate::motion::easing::Ease;
use crate::motion::tween::Tween;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const WHATSAPP_PHONE: &str = "554499889644";
pub const WHATSAPP_MESSAGE: &str = "Fala Daniel, vim da Bio e quero conhecer o PDS";

/// Outbound link for every call to action on the page.
pub fn whatsapp_link() -> String {
    format!(
        "https://api.whatsapp.com/send/?phone={}&text={}&type=phone_number&app_absent=0",
        WHATSAPP_PHONE,
        urlencoding::encode(WHATSAPP_MESSAGE),
    )
}

/// Selectors and attributes the page markup uses to opt elements into effects.
#[derive(Clone, Debug, PartialEq)]
pub struct Markers {
    pub cursor_glow: String,
    pub hero: String,
    pub parallax: String,
    pub parallax_depth_attr: String,
    pub magnetic: String,
    pub tilt: String,
    pub reveal: String,
    pub visible_class: String,
    pub count: String,
    pub count_attr: String,
    pub suffix_attr: String,
    pub animate: String,
    pub hero_visual: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            cursor_glow: ".cursor-glow".to_string(),
            hero: ".hero".to_string(),
            parallax: "[data-parallax]".to_string(),
            parallax_depth_attr: "data-parallax".to_string(),
            magnetic: "[data-magnetic]".to_string(),
            tilt: ".tilt".to_string(),
            reveal: ".reveal".to_string(),
            visible_class: "is-visible".to_string(),
            count: "[data-count]".to_string(),
            count_attr: "data-count".to_string(),
            suffix_attr: "data-suffix".to_string(),
            animate: "[data-animate]".to_string(),
            hero_visual: ".hero-visual".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub markers: Markers,
    pub locale: String,
    pub default_depth: f64,
    pub magnet_factor: f64,
    pub tilt_degrees: f64,
    pub reveal_threshold: f64,
    pub count_threshold: f64,
    pub count_duration_ms: f64,
    pub entrance: Tween,
    pub hero_visual: Tween,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            locale: "pt-BR".to_string(),
            default_depth: 8.0,
            magnet_factor: 0.2,
            tilt_degrees: 8.0,
            reveal_threshold: 0.2,
            count_threshold: 0.6,
            count_duration_ms: 1200.0,
            entrance: Tween {
                from_opacity: Some(0.0),
                from_y: Some(24.0),
                from_scale: None,
                duration_ms: 1000.0,
                delay_ms: 100.0,
                stagger_ms: 120.0,
                ease: Ease::Power3Out,
            },
            hero_visual: Tween {
                from_opacity: Some(0.0),
                from_y: None,
                from_scale: Some(0.96),
                duration_ms: 1100.0,
                delay_ms: 250.0,
                stagger_ms: 0.0,
                ease: Ease::Power3Out,
            },
        }
    }
}
