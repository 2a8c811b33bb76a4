use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Easing curve applied to entrance animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutBounce,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `[0, 1]`) onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOutBounce => ease_out_bounce(t),
        }
    }
}

/// Penner's bounce-out curve; `f(0) = 0`, `f(1) = 1`.
#[must_use]
pub fn ease_out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984_375
    }
}

/// Deterministic entrance animation clock.
///
/// Time only moves when the host calls `advance`, so identical tick
/// sequences always produce identical frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntranceAnimation {
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
}

impl EntranceAnimation {
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn linear_progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased progress used to scale series geometry.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.easing.apply(self.linear_progress())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Moves the clock forward, saturating at the configured duration.
    pub fn advance(&mut self, delta: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        self.progress()
    }

    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Easing, EntranceAnimation, ease_out_bounce};
    use approx::assert_relative_eq;

    #[test]
    fn bounce_hits_both_endpoints() {
        assert_relative_eq!(ease_out_bounce(0.0), 0.0);
        assert_relative_eq!(ease_out_bounce(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn bounce_touches_one_at_segment_boundaries() {
        assert_relative_eq!(ease_out_bounce(1.0 / 2.75), 1.0, epsilon = 1e-12);
        assert_relative_eq!(ease_out_bounce(2.0 / 2.75), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn apply_clamps_out_of_range_input() {
        assert_relative_eq!(Easing::EaseOutBounce.apply(-3.0), 0.0);
        assert_relative_eq!(Easing::Linear.apply(7.0), 1.0);
        assert_relative_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn animation_saturates_at_duration() {
        let mut animation = EntranceAnimation::new(Duration::from_millis(1000), Easing::Linear);
        assert_relative_eq!(animation.advance(Duration::from_millis(250)), 0.25);
        assert!(!animation.is_finished());
        assert_relative_eq!(animation.advance(Duration::from_secs(5)), 1.0);
        assert!(animation.is_finished());
        assert_eq!(animation.elapsed(), Duration::from_millis(1000));
    }

    #[test]
    fn zero_duration_animation_is_complete_immediately() {
        let animation = EntranceAnimation::new(Duration::ZERO, Easing::EaseOutBounce);
        assert!(animation.is_finished());
        assert_relative_eq!(animation.progress(), 1.0, epsilon = 1e-12);
    }
}
