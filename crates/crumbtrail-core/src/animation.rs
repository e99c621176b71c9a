#![forbid(unsafe_code)]

//! Animation primitives: easing curves and the width-toggle reveal.
//!
//! Animations are driven by explicit [`Animation::tick`] calls with a frame
//! delta; nothing here reads a clock. The reveal is cosmetic and
//! fire-and-forget: callers may stop ticking at any point without affecting
//! correctness elsewhere.
//!
//! # Invariants
//!
//! 1. All animations are deterministic for a given tick sequence.
//! 2. Zero durations are clamped to 1ns to avoid division by zero.
//! 3. Every named easing maps 0.0 to 0.0 and 1.0 to 1.0 (elastic and bounce
//!    may overshoot in between).

use std::time::Duration;

/// An easing function mapping linear progress to eased progress.
pub type EasingFn = fn(f32) -> f32;

// ---------------------------------------------------------------------------
// Easing curves
// ---------------------------------------------------------------------------

/// Identity easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Sinusoidal ease-in-out, the classic default for UI slides.
#[must_use]
pub fn swing(t: f32) -> f32 {
    0.5 - (t * std::f32::consts::PI).cos() / 2.0
}

/// Quadratic ease-in.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Elastic ease-out: springs past the target before settling.
#[must_use]
pub fn ease_out_elastic(t: f32) -> f32 {
    const C4: f32 = std::f32::consts::TAU / 3.0;
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
    }
}

/// Bounce ease-out: decaying bounces into the target.
#[must_use]
pub fn ease_out_bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
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
        N1 * t * t + 0.984375
    }
}

/// Look up an easing curve by name.
///
/// Names are matched case-insensitively with `-`/`_` separators ignored, so
/// `"ease-out-bounce"`, `"easeOutBounce"`, and `"EASE_OUT_BOUNCE"` all
/// resolve to the same curve. Unknown names return `None`; callers degrade
/// to [`swing`].
#[must_use]
pub fn by_name(name: &str) -> Option<EasingFn> {
    let key: String = name
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match key.as_str() {
        "linear" => Some(linear),
        "swing" => Some(swing),
        "easein" => Some(ease_in),
        "easeout" => Some(ease_out),
        "easeinout" => Some(ease_in_out),
        "easeoutelastic" => Some(ease_out_elastic),
        "easeoutbounce" => Some(ease_out_bounce),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-driven animation producing a progress value.
pub trait Animation {
    /// Advance the animation by a frame delta.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current eased value.
    fn value(&self) -> f32;

    /// Rewind to the start.
    fn reset(&mut self);

    /// Time ticked past the end, zero while running.
    fn overshoot(&self) -> Duration;
}

// ---------------------------------------------------------------------------
// Reveal
// ---------------------------------------------------------------------------

/// Width-toggle reveal: eased progress from 0.0 (collapsed) to 1.0 (fully
/// shown) over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Reveal {
    /// Create a reveal with the given duration (zero is clamped to 1ns).
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: swing,
        }
    }

    /// Set the easing curve.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }
}

impl Animation for Reveal {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        let t = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32;
        (self.easing)(t)
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
