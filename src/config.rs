//! Adjuster configuration.
//!
//! Values are read once when an [`AdjustScreen`](crate::adjust::AdjustScreen)
//! is built. A TOML file may set any subset of the fields:
//!
//! ```toml
//! strategy = "monotonic"
//! gate = "when_resized"
//! hslider_threshold = 60
//!
//! [viewport]
//! width = 1024
//! height = 600
//! ```

use crate::model::ViewSize;
use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

pub const HSLIDER_OVERLAP_THRESHOLD: f64 = 50.0;
pub const VSLIDER_OVERLAP_THRESHOLD: f64 = 50.0;
pub const BUTTON_GAP: i32 = 10;

/// How a de-overlap pass walks the sorted widget list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One backward sweep over consecutive pairs. Sliders accumulate their
    /// push, buttons do not. A fixed pair can be pushed back into overlap.
    #[default]
    Greedy,
    /// Forward sweep with a running minimum position. Only later widgets move,
    /// and every adjacent pair ends up separated.
    Monotonic,
}

/// Whether the size check runs before adjusting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateMode {
    /// Always adjust.
    #[default]
    Always,
    /// Adjust only when the saved view size differs from the current one.
    WhenResized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustConfig {
    /// Feature switch consulted by the size check.
    pub feature_enabled: bool,
    pub gate: GateMode,
    pub strategy: Strategy,
    pub hslider_threshold: f64,
    pub vslider_threshold: f64,
    pub button_gap: i32,
    /// Current viewport, if known ahead of time.
    pub viewport: Option<ViewSize>,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            feature_enabled: true,
            gate: GateMode::Always,
            strategy: Strategy::Greedy,
            hslider_threshold: HSLIDER_OVERLAP_THRESHOLD,
            vslider_threshold: VSLIDER_OVERLAP_THRESHOLD,
            button_gap: BUTTON_GAP,
            viewport: None,
        }
    }
}

impl AdjustConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse adjuster config")
    }

    pub fn load(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path.as_std_path())
            .with_context(|| format!("Failed to read config {}", path))?;
        Self::from_toml_str(&text).with_context(|| format!("In {}", path))
    }
}

/// A viewport must have a positive size on both axes.
pub fn check_viewport(viewport: ViewSize) -> Result<ViewSize> {
    if viewport.width <= 0 || viewport.height <= 0 {
        bail!(
            "Viewport must be positive, got {}x{}",
            viewport.width,
            viewport.height
        );
    }
    Ok(viewport)
}
