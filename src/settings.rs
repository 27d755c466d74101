//! Host settings and preferences
//!
//! Supplied by the page as JSON (see `Settings::from_json`). Nothing here
//! changes gameplay; difficulty is fixed per level.

use serde::{Deserialize, Serialize};

use crate::platform::KeyBindings;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Background star count for this preset
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 40,
            QualityPreset::Medium => 100,
            QualityPreset::High => 200,
        }
    }

    /// Segments used to tessellate circles
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 10,
            QualityPreset::Medium => 20,
            QualityPreset::High => 32,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Scrolling starfield background
    pub starfield: bool,
    /// Explosion bursts
    pub explosions: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (static starfield)
    pub reduced_motion: bool,

    // === Controls ===
    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            // Visual effects - all on by default
            starfield: true,
            explosions: true,

            // HUD
            show_fps: false,

            // Accessibility
            reduced_motion: false,

            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Effective star count (0 when the starfield is off)
    pub fn star_count(&self) -> usize {
        if self.starfield {
            self.quality.star_count()
        } else {
            0
        }
    }

    /// Whether the starfield scrolls (respects reduced_motion)
    pub fn effective_star_scroll(&self) -> bool {
        self.starfield && !self.reduced_motion
    }
}
