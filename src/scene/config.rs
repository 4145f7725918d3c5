use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{StargazeError, StargazeResult};
use crate::scene::model::AnimationConfig;
use crate::schema::validate::validate_config;

/// JSON-facing input configuration, before validation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StarsConfigDef {
    /// Repository owner shown in the title.
    pub repo_org: String,
    /// Repository name shown in the title.
    pub repo_name: String,
    /// Star count reached on the last frame.
    pub stars_final: i64,
    /// Avatar image references of the newest stargazers, in display order.
    pub stargazers: Vec<String>,
    /// Video length in seconds.
    #[serde(default = "default_duration_in_seconds")]
    pub duration_in_seconds: f64,
    /// Frames per second.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Output width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Output height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Avatar edge length in pixels.
    #[serde(default = "default_avatar_size")]
    pub avatar_size: f64,
    /// Gap between avatars in pixels.
    #[serde(default = "default_avatar_gap")]
    pub avatar_gap: f64,
    /// Star glyph edge length in pixels.
    #[serde(default = "default_star_size")]
    pub star_size: f64,
}

fn default_duration_in_seconds() -> f64 {
    3.0
}

fn default_fps() -> u32 {
    60
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_avatar_size() -> f64 {
    80.0
}

fn default_avatar_gap() -> f64 {
    10.0
}

fn default_star_size() -> f64 {
    120.0
}

/// Input configuration boundary object.
///
/// Parse with [`StarsConfig::from_reader`] / [`StarsConfig::from_path`], then call
/// [`StarsConfig::validate`] to obtain the typed [`AnimationConfig`] the engine works on.
#[derive(Debug, Clone)]
pub struct StarsConfig {
    def: StarsConfigDef,
}

impl StarsConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StargazeResult<Self> {
        let def: StarsConfigDef = serde_json::from_reader(r).map_err(|e| {
            StargazeError::config_validation(format!("parse stars config JSON: {e}"))
        })?;
        Ok(Self { def })
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> StargazeResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StargazeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StargazeError::config_validation(format!(
                "open stars config JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Wrap an already-built boundary definition.
    pub fn from_def(def: StarsConfigDef) -> Self {
        Self { def }
    }

    /// Boundary definition as parsed.
    pub fn def(&self) -> &StarsConfigDef {
        &self.def
    }

    /// Check every field and build the immutable engine configuration.
    ///
    /// All violations are reported together in one [`StargazeError::ConfigValidation`].
    pub fn validate(&self) -> StargazeResult<AnimationConfig> {
        let config = validate_config(&self.def).map_err(|e| {
            StargazeError::config_validation(format!("stars config validation failed: {e}"))
        })?;
        tracing::debug!(
            duration_frames = config.duration_frames(),
            entities = config.entity_count(),
            "validated stars config"
        );
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
