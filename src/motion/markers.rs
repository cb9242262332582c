//! Reading the numeric data attributes the page markup carries.

fn parse_number(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parallax depth; zero counts as missing.
pub fn parse_depth(raw: Option<&str>, default: f64) -> f64 {
    parse_number(raw).filter(|v| *v != 0.0).unwrap_or(default)
}

/// Count-up target, rounded half up.
pub fn parse_count(raw: Option<&str>) -> i64 {
    parse_number(raw).map(round_half_up).unwrap_or(0)
}

pub fn parse_suffix(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
