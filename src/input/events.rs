use crate::core::{geo::Point, viewport::Transform};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Individual touch point, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// Whether marker taps are currently honored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    /// Taps on markers are honored
    #[default]
    Idle,
    /// A pan/zoom happened and has not been confirmed; taps are suppressed
    Seeking,
}

/// Why the center-first hint banner is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    GestureStarted,
    TapSuppressed,
}

/// Events the controller emits for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// New transform to display; `animated` asks for a timed transition
    Transform {
        target: Transform,
        animated: bool,
        duration: Duration,
    },
    /// Show the center-first hint for `duration`
    Hint { kind: HintKind, duration: Duration },
}
