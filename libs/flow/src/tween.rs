//! Cosmetic fade for the splash logo.
//!
//! The tween is advanced by the host's frame clock and never signals the
//! navigation layer: the splash timer runs on its own delay.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// cubic-bezier(0.4, 0.0, 0.2, 1.0)
    #[default]
    FastOutSlowIn,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        }
    }
}

/// Solve the bezier for x == `t` with Newton steps, falling back to bisection.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let sample = |a1: f32, a2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    };
    let slope = |a1: f32, a2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    };

    let mut s = t;
    for _ in 0..8 {
        let err = sample(x1, x2, s) - t;
        if err.abs() < 1e-5 {
            return sample(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = sample(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample(y1, y2, s)
}

/// `{target_value, current_value}` driven by an explicit per-frame tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeTween {
    start_value: f32,
    target_value: f32,
    current_value: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl FadeTween {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            start_value: 0.0,
            target_value: 0.0,
            current_value: 0.0,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Retarget from the current value; restarts the clock.
    pub fn animate_to(&mut self, target: f32) {
        self.start_value = self.current_value;
        self.target_value = target.clamp(0.0, 1.0);
        self.elapsed = Duration::ZERO;
        if self.duration.is_zero() {
            self.current_value = self.target_value;
        }
    }

    /// Advance by `dt` and return the new value.
    pub fn tick(&mut self, dt: Duration) -> f32 {
        if self.is_finished() {
            return self.current_value;
        }
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        let eased = self.easing.apply(progress);
        self.current_value = self.start_value + (self.target_value - self.start_value) * eased;
        if self.elapsed >= self.duration {
            self.current_value = self.target_value;
        }
        self.current_value
    }

    pub fn value(&self) -> f32 {
        self.current_value
    }

    pub fn target(&self) -> f32 {
        self.target_value
    }

    pub fn is_finished(&self) -> bool {
        self.current_value == self.target_value
    }
}
