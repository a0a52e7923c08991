//! Easing functions.
//!
//! The named curves are the standard timing functions used by Core Animation
//! and CSS. Each is a cubic bezier from (0, 0) to (1, 1) whose two control
//! points shape the curve.

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Starts slow, accelerates. Bezier (0.42, 0, 1, 1).
    EaseIn,
    /// Starts fast, decelerates. Bezier (0, 0, 0.58, 1).
    EaseOut,
    /// Slow start and end. Bezier (0.42, 0, 0.58, 1).
    EaseInOut,
    /// A custom cubic bezier with control points (x1, y1) and (x2, y2).
    ///
    /// `x1` and `x2` must lie in 0..=1 for the curve to be a function of time;
    /// values outside are clamped.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// The bezier control points describing this curve.
    pub fn control_points(self) -> (f32, f32, f32, f32) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                (x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2)
            }
        }
    }
}

/// Apply an easing curve to a progress value.
///
/// `t` is clamped to 0.0..=1.0; the endpoints map exactly to 0.0 and 1.0.
///
/// ```
/// use segue::widget::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }

    match easing {
        Easing::Linear => t,
        other => {
            let (x1, y1, x2, y2) = other.control_points();
            let s = solve_parameter(x1, x2, t);
            bezier(y1, y2, s)
        }
    }
}

/// Interpolate between two values along an easing curve.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

/// One coordinate of a cubic bezier with endpoints 0 and 1.
#[inline]
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_derivative(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate is `x`.
///
/// Newton's method converges in a few steps for typical curves; flat
/// regions fall back to bisection, which always converges since x(s) is
/// monotonic for control x values in 0..=1.
fn solve_parameter(x1: f32, x2: f32, x: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut s = x;
    for _ in 0..8 {
        let error = bezier(x1, x2, s) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_derivative(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= error / slope;
        if !(0.0..=1.0).contains(&s) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}
