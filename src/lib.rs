//! # Floodmap
//!
//! Pan/zoom viewport controller for a static campus flood map.
//!
//! The crate maps finger gestures (single-finger drag, two-finger pinch) and
//! programmatic zoom commands onto one clamped transform for a large
//! background image inside a fixed viewport, and gates marker taps behind a
//! "confirm center" step after every gesture.

pub mod animation;
pub mod core;
pub mod data;
pub mod input;
pub mod prelude;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{ViewportConfig, ViewportProfile},
    controller::ViewportController,
    geo::{Point, Size},
    viewport::{Transform, Viewport},
};

pub use input::{InteractionState, TouchPoint, ViewEvent};

pub use animation::{EasingFunction, FrameClock, TransitionDriver};

pub use data::{FloodLevels, MapDataset, MapPoint, Region};

pub use ui::{MapView, PointSelection};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the fallible edges: loading datasets, configs and image metadata.
/// Geometry operations never fail; they clamp or no-op.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "assets")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}
