//! Engine-wide defaults for the map viewport.
//! Keeping them in a single place makes it easier to tweak the magic numbers;
//! `ViewportConfig::default()` is built from these.

/// Rendered content width at scale 1, as a multiple of the viewport width.
pub const OVERSCAN: f64 = 1.4;

/// Permitted overscroll (whitespace) beyond each content edge, in pixels.
pub const PAN_GUTTER: f64 = 140.0;

/// Extra vertical travel at the bottom of the content, in pixels.
pub const EXTRA_BOTTOM: f64 = 140.0;

/// Lower scale bound.
pub const MIN_SCALE: f64 = 1.0;

/// Upper scale bound.
pub const MAX_SCALE: f64 = 2.0;

/// Duration of animated commits.
pub const ANIMATION_DURATION_MS: u64 = 250;

/// Programmatic zoom step used by `zoom_in` / `zoom_out`.
pub const STEP_ZOOM_FACTOR: f64 = 1.15;

/// Region zoom always reaches at least this scale...
pub const REGION_ZOOM_FLOOR: f64 = 1.8;

/// ...and at least this multiple of the current scale.
pub const REGION_ZOOM_FACTOR: f64 = 1.3;

/// Movement (per axis, in pixels) before a touch counts as a drag.
pub const DRAG_THRESHOLD: f64 = 6.0;

/// How long the center-first hint stays up after a gesture starts.
pub const GESTURE_HINT_MS: u64 = 1600;

/// How long the center-first hint stays up after a suppressed marker tap.
pub const TAP_HINT_MS: u64 = 1200;

/// Natural image size assumed until asset metadata resolves.
pub const FALLBACK_NATURAL_SIZE: (f64, f64) = (2048.0, 1536.0);

/// Text shown in place of a level when a gate has no data for an advisory.
pub const LEVEL_NOT_AVAILABLE: &str = "Not available in this Rainfall Advisory";

/// Half extents of a gate marker's hit box, in unscaled content pixels.
pub const MARKER_HALF_SIZE: (f64, f64) = (28.0, 22.0);
