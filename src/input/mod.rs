pub mod events;
pub mod gestures;

// Re-export the essential types
pub use events::{HintKind, InteractionState, TouchPoint, ViewEvent};
pub use gestures::{GestureBaseline, GestureConfig, PinchBaseline};
