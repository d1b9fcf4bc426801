//! Configuration for viewport behavior tuning
//!
//! Every magic number the controller uses is a named field here so it can be
//! tuned and tested independently. `ViewportProfile` layers presets on top,
//! the same way the engine resolves a profile into concrete options.

use crate::core::constants::*;
use crate::core::geo::Size;
use crate::input::gestures::GestureConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportProfile {
    /// The tuning the campus map ships with
    Standard,
    Custom(ViewportConfig),
}

impl ViewportProfile {
    pub fn resolve(&self) -> ViewportConfig {
        match self {
            Self::Standard => ViewportConfig::default(),
            Self::Custom(config) => config.clone().validate(),
        }
    }
}

impl Default for ViewportProfile {
    fn default() -> Self {
        Self::Standard
    }
}

/// Durations of the transient center-first hint banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintConfig {
    /// Shown when a pan/pinch gesture starts
    pub gesture_ms: u64,
    /// Shown when a marker tap is suppressed
    pub tap_ms: u64,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            gesture_ms: GESTURE_HINT_MS,
            tap_ms: TAP_HINT_MS,
        }
    }
}

impl HintConfig {
    pub fn gesture_duration(&self) -> Duration {
        Duration::from_millis(self.gesture_ms)
    }

    pub fn tap_duration(&self) -> Duration {
        Duration::from_millis(self.tap_ms)
    }
}

/// Tunables for the viewport transform controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Rendered width at scale 1 as a multiple of viewport width
    pub overscan: f64,
    /// Overscroll allowance beyond the content edges
    pub pan_gutter: f64,
    /// Extra vertical travel at the bottom
    pub extra_bottom: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub animation_duration_ms: u64,
    pub step_zoom_factor: f64,
    pub region_zoom_floor: f64,
    pub region_zoom_factor: f64,
    /// Natural content size used until real metadata arrives
    pub fallback_natural_size: Size,
    pub gestures: GestureConfig,
    pub hints: HintConfig,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            overscan: OVERSCAN,
            pan_gutter: PAN_GUTTER,
            extra_bottom: EXTRA_BOTTOM,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            animation_duration_ms: ANIMATION_DURATION_MS,
            step_zoom_factor: STEP_ZOOM_FACTOR,
            region_zoom_floor: REGION_ZOOM_FLOOR,
            region_zoom_factor: REGION_ZOOM_FACTOR,
            fallback_natural_size: Size::new(FALLBACK_NATURAL_SIZE.0, FALLBACK_NATURAL_SIZE.1),
            gestures: GestureConfig::default(),
            hints: HintConfig::default(),
        }
    }
}

impl ViewportConfig {
    /// Parses a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: ViewportConfig = serde_json::from_str(json)?;
        Ok(config.validate())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Clamps `scale` into `[min_scale, max_scale]`
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }

    /// Repairs values that would break the clamping math
    pub fn validate(mut self) -> Self {
        let defaults = Self::default();

        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            log::warn!("invalid min_scale {}, using {}", self.min_scale, defaults.min_scale);
            self.min_scale = defaults.min_scale;
        }
        if !self.max_scale.is_finite() || self.max_scale <= 0.0 {
            log::warn!("invalid max_scale {}, using {}", self.max_scale, defaults.max_scale);
            self.max_scale = defaults.max_scale;
        }
        if self.min_scale > self.max_scale {
            std::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        if !self.overscan.is_finite() || self.overscan < 1.0 {
            self.overscan = 1.0;
        }
        if !self.pan_gutter.is_finite() || self.pan_gutter < 0.0 {
            self.pan_gutter = 0.0;
        }
        if !self.extra_bottom.is_finite() {
            self.extra_bottom = defaults.extra_bottom;
        }
        if self.fallback_natural_size.aspect_ratio().is_none() {
            self.fallback_natural_size = defaults.fallback_natural_size;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = ViewportConfig::default();
        assert_eq!(config.overscan, 1.4);
        assert_eq!(config.pan_gutter, 140.0);
        assert_eq!(config.extra_bottom, 140.0);
        assert_eq!((config.min_scale, config.max_scale), (1.0, 2.0));
        assert_eq!(config.animation_duration(), Duration::from_millis(250));
        assert_eq!(config.gestures.drag_threshold, 6.0);
    }

    #[test]
    fn test_partial_json() {
        let config = ViewportConfig::from_json(r#"{ "max_scale": 3.0, "hints": { "tap_ms": 500 } }"#)
            .unwrap();
        assert_eq!(config.max_scale, 3.0);
        assert_eq!(config.min_scale, 1.0);
        assert_eq!(config.hints.tap_ms, 500);
        assert_eq!(config.hints.gesture_ms, 1600);
    }

    #[test]
    fn test_validate_swaps_reversed_bounds() {
        let config = ViewportConfig {
            min_scale: 3.0,
            max_scale: 1.5,
            overscan: 0.2,
            ..Default::default()
        }
        .validate();
        assert_eq!((config.min_scale, config.max_scale), (1.5, 3.0));
        assert_eq!(config.overscan, 1.0);
    }

    #[test]
    fn test_custom_profile_resolves() {
        let custom = ViewportConfig {
            max_scale: 4.0,
            ..Default::default()
        };
        assert_eq!(ViewportProfile::Custom(custom).resolve().max_scale, 4.0);
        assert_eq!(ViewportProfile::default().resolve(), ViewportConfig::default());
    }

    #[test]
    fn test_clamp_scale() {
        let config = ViewportConfig::default();
        assert_eq!(config.clamp_scale(0.5), 1.0);
        assert_eq!(config.clamp_scale(1.5), 1.5);
        assert_eq!(config.clamp_scale(9.0), 2.0);
    }
}
