use crate::input::events::HintKind;
use std::time::Duration;

/// One-shot dismissal timer for the center-first banner.
///
/// Showing it again re-arms the timer, replacing the pending dismissal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HintBanner {
    remaining: Option<Duration>,
    kind: Option<HintKind>,
}

impl HintBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: HintKind, duration: Duration) {
        self.kind = Some(kind);
        self.remaining = Some(duration);
    }

    pub fn update(&mut self, delta: Duration) {
        if let Some(remaining) = self.remaining {
            match remaining.checked_sub(delta) {
                Some(left) if !left.is_zero() => self.remaining = Some(left),
                _ => self.dismiss(),
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.remaining = None;
        self.kind = None;
    }

    /// Whether the timer is still running
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn kind(&self) -> Option<HintKind> {
        self.kind
    }
}
