//! Prelude module for common floodmap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use floodmap::prelude::*;`

pub use crate::core::{
    config::{HintConfig, ViewportConfig, ViewportProfile},
    controller::ViewportController,
    geo::{Point, Size},
    viewport::{Transform, Viewport},
};

pub use crate::input::{
    events::{HintKind, InteractionState, TouchPoint, ViewEvent},
    gestures::{GestureBaseline, GestureConfig, PinchBaseline},
};

pub use crate::animation::{EasingFunction, FrameClock, Transition, TransitionDriver};

pub use crate::data::{FloodLevels, MapDataset, MapPoint, Region, ZoomTarget};

pub use crate::ui::{HintBanner, MapView, PointSelection};

pub use crate::traits::Lerp;

pub use crate::{Error, Result};

pub use std::time::Duration;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
