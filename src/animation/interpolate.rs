use crate::animation::ease::Ease;
use crate::foundation::error::{StargazeError, StargazeResult};

/// What an interpolation does with input outside its range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Pin to the boundary output.
    Clamp,
    /// Keep evaluating the eased curve past the boundary.
    #[default]
    Extend,
    /// Return the input unchanged.
    Identity,
    /// Wrap the input back into the range, repeating the curve.
    Wrap,
}

/// Easing and boundary behavior for [`interpolate`].
///
/// The default is linear easing with [`Extrapolate::Extend`] on both sides, so callers that
/// need a settled end state must ask for [`Extrapolate::Clamp`] explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpolateOpts {
    /// Curve applied to normalized progress.
    pub easing: Ease,
    /// Policy for input below the first point.
    pub extrapolate_left: Extrapolate,
    /// Policy for input above the last point.
    pub extrapolate_right: Extrapolate,
}

impl InterpolateOpts {
    /// Replace the easing curve.
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }

    /// Clamp input below the range.
    pub fn clamp_left(mut self) -> Self {
        self.extrapolate_left = Extrapolate::Clamp;
        self
    }

    /// Clamp input above the range.
    pub fn clamp_right(mut self) -> Self {
        self.extrapolate_right = Extrapolate::Clamp;
        self
    }

    /// Clamp on both sides.
    pub fn clamped(self) -> Self {
        self.clamp_left().clamp_right()
    }
}

/// Map `x` through `input_range` onto `output_range`.
///
/// Both ranges must have the same length (at least 2) and `input_range` must be strictly
/// ascending; otherwise [`StargazeError::InvalidRange`] is returned. With more than two points
/// the segment containing `x` is used, and the first/last segment handles out-of-range input.
pub fn interpolate(
    x: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> StargazeResult<f64> {
    validate_ranges(input_range, output_range)?;
    if !x.is_finite() {
        return Err(StargazeError::invalid_range(format!(
            "interpolate input must be finite (got {x})"
        )));
    }

    let last = input_range.len() - 1;
    let seg = (1..last)
        .find(|&i| input_range[i] >= x)
        .unwrap_or(last)
        - 1;

    Ok(interpolate_segment(
        x,
        [input_range[seg], input_range[seg + 1]],
        [output_range[seg], output_range[seg + 1]],
        opts,
    ))
}

/// Two-point form of [`interpolate`].
pub fn interpolate2(
    x: f64,
    input_range: [f64; 2],
    output_range: [f64; 2],
    opts: InterpolateOpts,
) -> StargazeResult<f64> {
    interpolate(x, &input_range, &output_range, opts)
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> StargazeResult<()> {
    if input_range.len() != output_range.len() {
        return Err(StargazeError::invalid_range(format!(
            "input range has {} points but output range has {}",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(StargazeError::invalid_range(
            "ranges must contain at least 2 points",
        ));
    }
    if !input_range
        .iter()
        .chain(output_range.iter())
        .all(|v| v.is_finite())
    {
        return Err(StargazeError::invalid_range(
            "range values must be finite",
        ));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(StargazeError::invalid_range(format!(
            "input range must be strictly ascending, got {input_range:?}"
        )));
    }
    Ok(())
}

fn interpolate_segment(x: f64, input: [f64; 2], output: [f64; 2], opts: InterpolateOpts) -> f64 {
    let [x0, x1] = input;
    let [y0, y1] = output;

    let mut x = x;
    if x < x0 {
        match opts.extrapolate_left {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = x0,
            Extrapolate::Wrap => x = wrap(x, x0, x1),
            Extrapolate::Extend => {}
        }
    }
    if x > x1 {
        match opts.extrapolate_right {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = x1,
            Extrapolate::Wrap => x = wrap(x, x0, x1),
            Extrapolate::Extend => {}
        }
    }

    if y0 == y1 {
        return y0;
    }

    let t = (x - x0) / (x1 - x0);
    let p = opts.easing.apply(t);
    // Weighted form hits both endpoints exactly.
    (1.0 - p) * y0 + p * y1
}

fn wrap(x: f64, x0: f64, x1: f64) -> f64 {
    x0 + (x - x0).rem_euclid(x1 - x0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
