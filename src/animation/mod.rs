pub mod clock;
pub mod interpolation;
pub mod transitions;

// Re-export commonly used types for convenience
pub use clock::FrameClock;
pub use interpolation::EasingFunction;
pub use transitions::{Transition, TransitionDriver, TransitionState};
