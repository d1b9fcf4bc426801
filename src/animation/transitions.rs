//! Presentational transform interpolation.
//!
//! The driver mirrors the controller's model: it consumes
//! [`ViewEvent::Transform`] targets and produces the value to draw each frame.
//! A new target always supersedes the running transition (restart, never
//! queue), so a stale animation cannot overwrite a newer commit.

use crate::animation::interpolation::EasingFunction;
use crate::core::viewport::Transform;
use crate::input::events::ViewEvent;
use std::time::Duration;

/// State of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    Running,
    Completed,
    Cancelled,
}

/// A single timed move from one transform to another
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: Transform,
    pub to: Transform,
    pub duration: Duration,
    pub easing: EasingFunction,
    pub elapsed: Duration,
    pub state: TransitionState,
}

impl Transition {
    pub fn new(from: Transform, to: Transform, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: EasingFunction::default(),
            elapsed: Duration::ZERO,
            state: TransitionState::Running,
        }
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Get the current progress (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        }
    }

    /// Advances the clock and returns the interpolated transform
    pub fn update(&mut self, delta: Duration) -> Transform {
        if self.state != TransitionState::Running {
            return self.current();
        }

        self.elapsed += delta;
        if self.progress() >= 1.0 {
            self.state = TransitionState::Completed;
        }
        self.current()
    }

    pub fn current(&self) -> Transform {
        match self.state {
            TransitionState::Completed => self.to,
            _ => self.from.lerp_with_easing(&self.to, self.progress(), self.easing),
        }
    }

    pub fn stop(&mut self) {
        self.state = TransitionState::Cancelled;
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            TransitionState::Completed | TransitionState::Cancelled
        )
    }
}

/// Owns the displayed transform and the transition driving it
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDriver {
    current: Transform,
    transition: Option<Transition>,
    easing: EasingFunction,
}

impl TransitionDriver {
    pub fn new(initial: Transform) -> Self {
        Self {
            current: initial,
            transition: None,
            easing: EasingFunction::default(),
        }
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Value to draw this frame
    pub fn current(&self) -> Transform {
        self.current
    }

    /// Where the display is heading
    pub fn target(&self) -> Transform {
        self.transition
            .as_ref()
            .map(|transition| transition.to)
            .unwrap_or(self.current)
    }

    pub fn is_animating(&self) -> bool {
        self.transition
            .as_ref()
            .map(|transition| !transition.is_finished())
            .unwrap_or(false)
    }

    /// Starts a transition from the displayed value, replacing any running one
    pub fn animate_to(&mut self, target: Transform, duration: Duration) {
        if let Some(transition) = self.transition.as_mut() {
            transition.stop();
        }
        if duration.is_zero() {
            self.set(target);
            return;
        }
        self.transition =
            Some(Transition::new(self.current, target, duration).with_easing(self.easing));
    }

    /// Jumps to `target`, cancelling any running transition
    pub fn set(&mut self, target: Transform) {
        self.transition = None;
        self.current = target;
    }

    /// Feeds a controller event; hints are ignored
    pub fn apply(&mut self, event: &ViewEvent) {
        if let ViewEvent::Transform {
            target,
            animated,
            duration,
        } = event
        {
            if *animated {
                self.animate_to(*target, *duration);
            } else {
                self.set(*target);
            }
        }
    }

    /// Advances the running transition; returns whether the display changed
    pub fn update(&mut self, delta: Duration) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        self.current = transition.update(delta);
        if transition.is_finished() {
            self.transition = None;
        }
        true
    }
}

impl Default for TransitionDriver {
    fn default() -> Self {
        Self::new(Transform::identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut driver = TransitionDriver::default();
        let target = Transform::new(2.0, -100.0, -50.0);
        driver.animate_to(target, ms(250));
        assert!(driver.is_animating());

        driver.update(ms(100));
        let mid = driver.current();
        assert!(mid.scale > 1.0 && mid.scale < 2.0);

        driver.update(ms(200));
        assert_eq!(driver.current(), target);
        assert!(!driver.is_animating());
        assert!(!driver.update(ms(16)));
    }

    #[test]
    fn test_new_target_supersedes_running_transition() {
        let mut driver = TransitionDriver::default();
        driver.animate_to(Transform::new(2.0, -300.0, 0.0), ms(250));
        driver.update(ms(100));

        let second = Transform::new(1.5, -20.0, -20.0);
        driver.animate_to(second, ms(250));
        assert_eq!(driver.target(), second);

        for _ in 0..30 {
            driver.update(ms(16));
        }
        assert_eq!(driver.current(), second);
    }

    #[test]
    fn test_immediate_event_cancels_animation() {
        let mut driver = TransitionDriver::default();
        driver.animate_to(Transform::new(2.0, -300.0, 0.0), ms(250));
        driver.update(ms(50));

        let snapped = Transform::new(1.2, 10.0, 10.0);
        driver.apply(&ViewEvent::Transform {
            target: snapped,
            animated: false,
            duration: Duration::ZERO,
        });
        driver.update(ms(500));
        assert_eq!(driver.current(), snapped);
    }

    #[test]
    fn test_zero_duration_animation_is_immediate() {
        let mut driver = TransitionDriver::default();
        driver.animate_to(Transform::new(1.3, 0.0, 0.0), Duration::ZERO);
        assert_eq!(driver.current().scale, 1.3);
        assert!(!driver.is_animating());
    }
}
