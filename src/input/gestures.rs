use crate::{
    core::{geo::Point, viewport::Transform},
    input::events::TouchPoint,
};
use serde::{Deserialize, Serialize};

/// Configuration for gesture recognition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Movement on either axis beyond which a touch becomes a drag
    pub drag_threshold: f64,
    /// Touch count at which a gesture is captured regardless of movement
    pub pinch_touches: usize,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: crate::core::constants::DRAG_THRESHOLD,
            pinch_touches: 2,
        }
    }
}

impl GestureConfig {
    /// Whether a move should be captured as a pan/pinch rather than left as a tap
    pub fn should_capture(&self, active_touches: usize, dx: f64, dy: f64) -> bool {
        active_touches >= self.pinch_touches
            || dx.abs() > self.drag_threshold
            || dy.abs() > self.drag_threshold
    }
}

/// State captured when a two-finger gesture begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBaseline {
    /// Distance between the fingers at start; always positive
    pub distance: f64,
    pub scale: f64,
    pub offset: Point,
    /// Midpoint of the fingers at start, in viewport coordinates
    pub focal: Point,
}

impl PinchBaseline {
    /// Records a baseline from two touches, or `None` if they coincide
    pub fn capture(touches: &[TouchPoint], transform: &Transform) -> Option<Self> {
        let (focal, distance) = two_finger_geometry(touches)?;
        if distance <= 0.0 || !distance.is_finite() {
            log::warn!("pinch started with zero finger distance, treating as pan");
            return None;
        }

        Some(Self {
            distance,
            scale: transform.scale,
            offset: transform.offset,
            focal,
        })
    }

    /// Unclamped scale for the current finger distance
    pub fn scale_for(&self, current_distance: f64) -> f64 {
        self.scale * (current_distance / self.distance)
    }

    /// Offset that keeps the content under `focal` pinned there at `new_scale`.
    ///
    /// The content point is resolved against the baseline transform, so the
    /// anchor follows the fingers if they translate while pinching.
    pub fn offset_for(&self, focal: &Point, new_scale: f64) -> Point {
        let content = focal.subtract(&self.offset).multiply(1.0 / self.scale);
        focal.subtract(&content.multiply(new_scale))
    }
}

/// What the active gesture is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureBaseline {
    /// Plain pan from the transform the gesture started with
    #[default]
    None,
    Pinch(PinchBaseline),
    /// Multi-touch start with coincident fingers; the view holds still while
    /// several fingers are down
    Degenerate,
    /// A pinch dropped below two fingers; panning continues from `offset`,
    /// measured from the drag reported at the switch
    Pan { offset: Point, drag: Point },
}

impl GestureBaseline {
    pub fn pinch(&self) -> Option<&PinchBaseline> {
        match self {
            GestureBaseline::Pinch(baseline) => Some(baseline),
            _ => None,
        }
    }
}

/// Returns (midpoint, distance) of the first two touches
pub fn two_finger_geometry(touches: &[TouchPoint]) -> Option<(Point, f64)> {
    match touches {
        [first, second, ..] => Some((
            first.position.midpoint(&second.position),
            first.position.distance_to(&second.position),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_predicate() {
        let config = GestureConfig::default();
        assert!(!config.should_capture(1, 6.0, -6.0));
        assert!(config.should_capture(1, 6.5, 0.0));
        assert!(config.should_capture(1, 0.0, -7.0));
        assert!(config.should_capture(2, 0.0, 0.0));
    }

    #[test]
    fn test_two_finger_geometry() {
        let touches = [TouchPoint::new(0, 100.0, 100.0), TouchPoint::new(1, 100.0, 300.0)];
        let (mid, dist) = two_finger_geometry(&touches).unwrap();
        assert_eq!(mid, Point::new(100.0, 200.0));
        assert_eq!(dist, 200.0);
        assert!(two_finger_geometry(&touches[..1]).is_none());
    }

    #[test]
    fn test_zero_distance_has_no_baseline() {
        let touches = [TouchPoint::new(0, 50.0, 50.0), TouchPoint::new(1, 50.0, 50.0)];
        assert!(PinchBaseline::capture(&touches, &Transform::identity()).is_none());
    }

    #[test]
    fn test_offset_keeps_focal_content() {
        let touches = [TouchPoint::new(0, 100.0, 200.0), TouchPoint::new(1, 200.0, 200.0)];
        let baseline = PinchBaseline::capture(&touches, &Transform::new(1.0, -40.0, 10.0)).unwrap();
        let focal = Point::new(150.0, 200.0);
        let offset = baseline.offset_for(&focal, 1.5);

        // content under the focal point before: (190, 190)
        assert!((offset.x - (150.0 - 190.0 * 1.5)).abs() < 1e-9);
        assert!((offset.y - (200.0 - 190.0 * 1.5)).abs() < 1e-9);
    }
}
