use std::f64::consts::{FRAC_PI_2, PI};

use crate::foundation::error::{StargazeError, StargazeResult};

/// Easing curves mapping normalized progress to eased progress.
///
/// [`Ease::apply`] never clamps its input: callers decide what happens outside `[0, 1]`
/// (see [`crate::Extrapolate`]). Every curve maps `0 -> 0` and `1 -> 1` exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`.
    Bezier {
        /// First control point x, in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
    /// Damped cosine that overshoots 1 before settling.
    Elastic {
        /// Oscillation amount; `1.0` gives one half-swing past the target.
        bounciness: f64,
    },
}

impl Ease {
    /// CSS `ease`.
    pub const EASE: Self = Self::Bezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };
    /// CSS `ease-in`.
    pub const EASE_IN: Self = Self::Bezier {
        x1: 0.42,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::Bezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::Bezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Build a validated cubic-bezier curve.
    ///
    /// The x coordinates must lie in `[0, 1]` so the curve is a function of x.
    pub fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> StargazeResult<Self> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(StargazeError::animation(
                "bezier control points must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(StargazeError::invalid_range(
                "bezier x values must be in [0, 1]",
            ));
        }
        Ok(Self::Bezier { x1, y1, x2, y2 })
    }

    /// Build an elastic curve with the given bounciness.
    pub fn elastic(bounciness: f64) -> StargazeResult<Self> {
        if !bounciness.is_finite() || bounciness < 0.0 {
            return Err(StargazeError::animation(
                "elastic bounciness must be finite and >= 0",
            ));
        }
        Ok(Self::Elastic { bounciness })
    }

    /// Apply this curve to progress `t`. Input is not clamped.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Bezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
            Self::Elastic { bounciness } => elastic(t, bounciness),
        }
    }
}

fn sample_curve(a1: f64, a2: f64, u: f64) -> f64 {
    let omu = 1.0 - u;
    3.0 * omu * omu * u * a1 + 3.0 * omu * u * u * a2 + u * u * u
}

fn sample_curve_derivative(a1: f64, a2: f64, u: f64) -> f64 {
    let omu = 1.0 - u;
    3.0 * omu * omu * a1 + 6.0 * omu * u * (a2 - a1) + 3.0 * u * u * (1.0 - a2)
}

/// Solve `bx(u) = x` for `u` in `[0, 1]`. Fixed iteration counts keep this reproducible.
fn solve_curve_x(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-12;

    let mut u = x;
    for _ in 0..8 {
        let err = sample_curve(x1, x2, u) - x;
        if err.abs() < EPS {
            return u;
        }
        let d = sample_curve_derivative(x1, x2, u);
        if d.abs() < 1e-9 {
            break;
        }
        u -= err / d;
        if !(0.0..=1.0).contains(&u) {
            break;
        }
    }

    // Newton left the unit interval or stalled on a flat tangent.
    let mut lo = 0.0;
    let mut hi = 1.0;
    u = x;
    for _ in 0..64 {
        let x_u = sample_curve(x1, x2, u);
        if (x_u - x).abs() < EPS {
            break;
        }
        if x_u < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    u
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x == 0.0 || x == 1.0 {
        return x;
    }
    if x1 == y1 && x2 == y2 {
        return x;
    }

    // Outside the unit interval the curve continues along its endpoint tangent.
    if x < 0.0 {
        let slope = if x1 > 0.0 {
            y1 / x1
        } else if y1 == 0.0 && x2 > 0.0 {
            y2 / x2
        } else {
            0.0
        };
        return slope * x;
    }
    if x > 1.0 {
        let slope = if x2 < 1.0 {
            (y2 - 1.0) / (x2 - 1.0)
        } else if y2 == 1.0 && x1 < 1.0 {
            (y1 - 1.0) / (x1 - 1.0)
        } else {
            0.0
        };
        return 1.0 + slope * (x - 1.0);
    }

    let u = solve_curve_x(x, x1, x2);
    sample_curve(y1, y2, u)
}

fn elastic(t: f64, bounciness: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let p = bounciness * PI;
    1.0 - (t * FRAC_PI_2).cos().powi(3) * (t * p).cos()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
