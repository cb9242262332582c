#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// `1 - (1 - t)^3`
    CubicOut,
    /// `1 - (1 - t)^4`, the curve tweening libraries call "power3.out".
    Power3Out,
}

impl Ease {
    /// `progress` is clamped to `[0, 1]`.
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for ease in [Ease::CubicOut, Ease::Power3Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert_eq!(ease.apply(-2.0), 0.0);
            assert_eq!(ease.apply(3.0), 1.0);
        }
    }

    #[test]
    fn cubic_out_midpoint() {
        assert!((Ease::CubicOut.apply(0.5) - 0.875).abs() < 1e-12);
        assert!((Ease::Power3Out.apply(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn eases_are_monotonic() {
        for ease in [Ease::CubicOut, Ease::Power3Out] {
            let mut last = 0.0;
            for step in 0..=100 {
                let value = ease.apply(step as f64 / 100.0);
                assert!(value >= last);
                last = value;
            }
        }
    }
}
