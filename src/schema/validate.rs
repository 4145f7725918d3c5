use std::fmt;

use crate::foundation::core::{Canvas, Fps, MAX_EXACT_INT};
use crate::scene::config::StarsConfigDef;
use crate::scene::model::{AnimationConfig, RepoLabel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    fn field(name: &'static str, message: impl Into<String>) -> Self {
        Self::at(&[SchemaPathElem::Field(name)], message)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

pub(crate) fn validate_config(def: &StarsConfigDef) -> Result<AnimationConfig, SchemaErrors> {
    let mut errors = Vec::new();

    for (name, value) in [("repo_org", &def.repo_org), ("repo_name", &def.repo_name)] {
        if value.trim().is_empty() {
            errors.push(SchemaError::field(name, "must not be empty"));
        }
    }

    if def.stars_final < 0 {
        errors.push(SchemaError::field("stars_final", "must be >= 0"));
    } else if def.stars_final > MAX_EXACT_INT {
        errors.push(SchemaError::field(
            "stars_final",
            format!("must be <= {MAX_EXACT_INT}"),
        ));
    }

    for (i, r) in def.stargazers.iter().enumerate() {
        if r.trim().is_empty() {
            errors.push(SchemaError::at(
                &[SchemaPathElem::Field("stargazers"), SchemaPathElem::Index(i)],
                "avatar reference must not be empty",
            ));
        }
    }

    let fps = Fps::new(def.fps, 1).map_err(|_| SchemaError::field("fps", "must be > 0"));
    if let Err(e) = &fps {
        errors.push(e.clone());
    }

    if !def.duration_in_seconds.is_finite() || def.duration_in_seconds <= 0.0 {
        errors.push(SchemaError::field("duration_in_seconds", "must be > 0"));
    }

    if def.width == 0 {
        errors.push(SchemaError::field("width", "must be > 0"));
    }
    if def.height == 0 {
        errors.push(SchemaError::field("height", "must be > 0"));
    }

    non_negative(&mut errors, "avatar_size", def.avatar_size);
    non_negative(&mut errors, "avatar_gap", def.avatar_gap);
    if !def.star_size.is_finite() || def.star_size <= 0.0 {
        errors.push(SchemaError::field("star_size", "must be > 0"));
    }

    let duration_frames = match &fps {
        Ok(fps) if def.duration_in_seconds.is_finite() && def.duration_in_seconds > 0.0 => {
            match fps.secs_to_frames_round(def.duration_in_seconds) {
                Some(0) => {
                    errors.push(SchemaError::field(
                        "duration_in_seconds",
                        "must cover at least one frame",
                    ));
                    0
                }
                Some(frames) => frames,
                None => {
                    errors.push(SchemaError::field(
                        "duration_in_seconds",
                        format!("must span at most {MAX_EXACT_INT} frames"),
                    ));
                    0
                }
            }
        }
        _ => 0,
    };

    match fps {
        Ok(fps) if errors.is_empty() => Ok(AnimationConfig {
            duration_frames,
            fps,
            canvas: Canvas {
                width: def.width,
                height: def.height,
            },
            avatar_size: def.avatar_size,
            avatar_gap: def.avatar_gap,
            star_size: def.star_size,
            stars_final: def.stars_final,
            stargazers: def.stargazers.clone(),
            repo: RepoLabel {
                org: def.repo_org.clone(),
                name: def.repo_name.clone(),
            },
        }),
        _ => Err(SchemaErrors { errors }),
    }
}

fn non_negative(errors: &mut Vec<SchemaError>, name: &'static str, v: f64) {
    if !v.is_finite() || v < 0.0 {
        errors.push(SchemaError::field(name, "must be finite and >= 0"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
