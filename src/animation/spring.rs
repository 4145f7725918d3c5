//! Damped harmonic oscillator sampled at frame positions.
//!
//! All functions here are closed-form in elapsed seconds (`frames / fps`). Nothing depends on
//! wall-clock time or on previously sampled frames.

use crate::foundation::core::Fps;
use crate::foundation::error::{StargazeError, StargazeResult};

/// Physical parameters of a unit spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m`.
    pub mass: f64,
    /// Never report a value past the target.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Default spring with a different stiffness.
    pub fn with_stiffness(stiffness: f64) -> Self {
        Self {
            stiffness,
            ..Self::default()
        }
    }

    /// Reject parameters that do not describe a physical spring.
    pub fn validate(&self) -> StargazeResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(StargazeError::animation("spring stiffness must be > 0"));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(StargazeError::animation("spring mass must be > 0"));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(StargazeError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio `zeta`; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt()).max(1e-9)
    }
}

/// Position of a spring released from 0 toward 1 after `elapsed_frames`.
///
/// Negative (not yet started) elapsed frames return exactly `0.0`.
pub fn spring_value(elapsed_frames: f64, fps: Fps, config: &SpringConfig) -> f64 {
    if elapsed_frames.is_nan() || elapsed_frames <= 0.0 {
        return 0.0;
    }
    let t = fps.frames_to_secs(elapsed_frames);
    let v = spring_step(t, config.stiffness, config.damping, config.mass);
    if config.overshoot_clamping {
        v.min(1.0)
    } else {
        v
    }
}

fn spring_step(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    // Step response from 0 to 1 with x(0)=0, v(0)=0.
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return 0.0;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

/// Shaping options for [`spring`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringOpts {
    /// Value at rest before the spring starts.
    pub from: f64,
    /// Value the spring settles at.
    pub to: f64,
    /// Frames to wait before releasing the spring.
    pub delay_frames: f64,
    /// Stretch or squash the motion to settle in exactly this many frames.
    pub duration_frames: Option<f64>,
    /// Play the motion backwards, from `to` to `from`.
    pub reverse: bool,
}

impl Default for SpringOpts {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            delay_frames: 0.0,
            duration_frames: None,
            reverse: false,
        }
    }
}

/// Threshold used to find the natural length of a spring for stretching and reversing.
const NATURAL_DURATION_THRESHOLD: f64 = 0.001;

/// Frames a settled spring must stay within threshold before it counts as finished.
const SETTLE_HOLD_FRAMES: u32 = 20;

/// Sample a spring at a global `frame` with delay, remapping and duration stretching.
pub fn spring(
    frame: f64,
    fps: Fps,
    config: &SpringConfig,
    opts: &SpringOpts,
) -> StargazeResult<f64> {
    config.validate()?;
    if let Some(d) = opts.duration_frames
        && (!d.is_finite() || d <= 0.0)
    {
        return Err(StargazeError::animation("spring duration must be > 0"));
    }

    let natural = if opts.reverse || opts.duration_frames.is_some() {
        Some(measure_spring(fps, config, NATURAL_DURATION_THRESHOLD)? as f64)
    } else {
        None
    };

    let mut f = frame;
    if opts.reverse {
        let total = opts.duration_frames.or(natural).unwrap_or(0.0);
        f = total - f + opts.delay_frames;
    } else {
        f -= opts.delay_frames;
    }

    let progress = match (opts.duration_frames, natural) {
        (Some(d), _) if f > d => 1.0,
        (Some(d), Some(n)) if n > 0.0 => spring_value(f / (d / n), fps, config),
        (Some(_), _) => 1.0,
        (None, _) => spring_value(f, fps, config),
    };

    Ok(opts.from + (opts.to - opts.from) * progress)
}

/// First frame after which the spring stays within `threshold` of its target.
///
/// The value has to hold for a run of consecutive frames, since an underdamped spring
/// crosses the threshold band several times before settling.
pub fn measure_spring(fps: Fps, config: &SpringConfig, threshold: f64) -> StargazeResult<u64> {
    config.validate()?;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(StargazeError::animation(
            "spring settle threshold must be > 0",
        ));
    }
    if threshold >= 1.0 {
        return Ok(0);
    }
    if config.damping == 0.0 {
        return Err(StargazeError::animation("undamped spring never settles"));
    }

    // One hour of footage; beyond that the spring is effectively broken.
    let cap = u64::from(fps.num / fps.den.max(1)).max(1) * 3600;
    let diff = |frame: u64| (spring_value(frame as f64, fps, config) - 1.0).abs();

    let mut frame = 0u64;
    while diff(frame) >= threshold {
        frame += 1;
        if frame > cap {
            return Err(StargazeError::animation("spring does not settle"));
        }
    }

    let mut finished = frame;
    let mut held = 0;
    while held < SETTLE_HOLD_FRAMES {
        frame += 1;
        if diff(frame) >= threshold {
            held = 0;
            finished = frame + 1;
        } else {
            held += 1;
        }
        if frame > cap {
            return Err(StargazeError::animation("spring does not settle"));
        }
    }
    Ok(finished)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
