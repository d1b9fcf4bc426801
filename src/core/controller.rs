//! The viewport transform controller.
//!
//! Owns the authoritative transform (scale + offset) and the interaction
//! state, turns gesture streams and zoom commands into clamped transforms,
//! and emits [`ViewEvent`]s for the presentation layer. Animated commits only
//! describe a transition; the model value is updated synchronously so a
//! command issued mid-animation reads the previous command's final target.

use crate::{
    core::{
        config::ViewportConfig,
        geo::{Point, Size},
        viewport::{Transform, Viewport},
    },
    data::points::{MapPoint, Region},
    input::{
        events::{HintKind, InteractionState, TouchPoint, ViewEvent},
        gestures::{two_finger_geometry, GestureBaseline, PinchBaseline},
    },
};
use fxhash::FxHashMap;
use std::collections::VecDeque;

pub struct ViewportController {
    config: ViewportConfig,
    viewport: Viewport,
    /// Source of truth, updated synchronously on every commit
    model: Transform,
    /// Last value pushed straight to the presentation layer
    live: Transform,
    interaction: InteractionState,
    gesture: GestureBaseline,
    regions: FxHashMap<String, Region>,
    events: VecDeque<ViewEvent>,
}

impl ViewportController {
    pub fn new(config: ViewportConfig, viewport_size: Size) -> Self {
        let config = config.validate();
        let viewport = Viewport::new(viewport_size, &config);
        Self {
            config,
            viewport,
            model: Transform::identity(),
            live: Transform::identity(),
            interaction: InteractionState::Idle,
            gesture: GestureBaseline::None,
            regions: FxHashMap::default(),
            events: VecDeque::new(),
        }
    }

    pub fn with_regions<I>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = Region>,
    {
        self.set_regions(regions);
        self
    }

    /// Replaces the region table used by `zoom_to_region`
    pub fn set_regions<I>(&mut self, regions: I)
    where
        I: IntoIterator<Item = Region>,
    {
        self.regions = regions
            .into_iter()
            .map(|region| (region.id.clone(), region))
            .collect();
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The authoritative transform
    pub fn transform(&self) -> Transform {
        self.model
    }

    /// What was last applied directly to the presentation layer
    pub fn live_transform(&self) -> Transform {
        self.live
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    pub fn is_seeking(&self) -> bool {
        self.interaction == InteractionState::Seeking
    }

    pub fn gesture(&self) -> &GestureBaseline {
        &self.gesture
    }

    /// Updates the viewport size. Existing offsets are re-clamped on the next commit.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport.set_size(Size::new(width, height));
    }

    /// Updates the content's natural size. Existing offsets are re-clamped on the next commit.
    pub fn set_content_natural_size(&mut self, width: f64, height: f64) {
        self.viewport.set_natural_size(Size::new(width, height));
    }

    /// Clamps a requested transform into the scale bounds and the gutter box
    pub fn clamp(&self, scale: f64, offset_x: f64, offset_y: f64) -> Transform {
        let scale = self.config.clamp_scale(scale);
        let offset = self
            .viewport
            .clamp_offset(Point::new(offset_x, offset_y), scale);
        Transform { scale, offset }
    }

    /// Central mutator: clamps, records the model value and emits it
    pub fn commit(&mut self, scale: f64, offset_x: f64, offset_y: f64, animated: bool) {
        let target = self.clamp(scale, offset_x, offset_y);
        log::debug!(
            "commit scale={:.3} offset=({:.2}, {:.2}) animated={}",
            target.scale,
            target.offset.x,
            target.offset.y,
            animated
        );

        self.model = target;
        self.live = target;
        self.events.push_back(ViewEvent::Transform {
            target,
            animated,
            duration: self.config.animation_duration(),
        });
    }

    fn commit_transform(&mut self, transform: Transform, animated: bool) {
        self.commit(transform.scale, transform.offset.x, transform.offset.y, animated);
    }

    /// Zooms deeper onto a region's center; unknown ids are ignored
    pub fn zoom_to_region(&mut self, region_id: &str) {
        let Some(center) = self.regions.get(region_id).map(Region::center) else {
            log::debug!("zoom_to_region: unknown region {region_id:?}");
            return;
        };

        let scale = self.config.clamp_scale(
            self.config
                .region_zoom_floor
                .max(self.model.scale * self.config.region_zoom_factor),
        );
        self.center_on_normalized(&center, scale);
    }

    /// Centers a point at its own zoom level, or `default_zoom` when it has none
    pub fn zoom_to_point(&mut self, point: Option<&MapPoint>, default_zoom: f64) {
        let Some(point) = point else {
            return;
        };

        let requested = point
            .zoom
            .filter(|zoom| zoom.is_finite())
            .unwrap_or(default_zoom);
        let scale = self.config.clamp_scale(requested);
        self.center_on_normalized(&point.zoom_focus(), scale);
    }

    fn center_on_normalized(&mut self, normalized: &Point, scale: f64) {
        let content = self.viewport.normalized_to_content(normalized);
        let offset = self.viewport.offset_centering(&content, scale);
        self.commit(scale, offset.x, offset.y, true);
    }

    /// Multiplies the scale by `factor`, keeping the viewport center fixed
    pub fn step_zoom(&mut self, factor: f64) {
        let center = self.viewport.size.center();
        let content = self.viewport.viewport_to_content(&center, &self.model);
        let scale = self.config.clamp_scale(self.model.scale * factor);
        let offset = self.viewport.offset_centering(&content, scale);
        self.commit(scale, offset.x, offset.y, true);
    }

    pub fn zoom_in(&mut self) {
        self.step_zoom(self.config.step_zoom_factor);
    }

    pub fn zoom_out(&mut self) {
        self.step_zoom(1.0 / self.config.step_zoom_factor);
    }

    pub fn reset_view(&mut self) {
        self.commit_transform(Transform::identity(), true);
    }

    /// Leaves the seeking state and snaps the current transform into bounds
    pub fn confirm_center(&mut self) {
        if self.is_seeking() {
            log::debug!("center confirmed, marker taps re-enabled");
        }
        if !self.viewport.contains_offset(&self.model) {
            log::debug!("snapping out-of-bounds offset back into the gutter box");
        }
        self.interaction = InteractionState::Idle;
        self.commit_transform(self.model, false);
    }

    /// Gesture-recognition predicate: capture multi-touch or movement past the dead zone
    pub fn should_capture_gesture(&self, active_touches: usize, dx: f64, dy: f64) -> bool {
        self.config.gestures.should_capture(active_touches, dx, dy)
    }

    pub fn on_gesture_start(&mut self, touches: &[TouchPoint]) {
        self.interaction = InteractionState::Seeking;
        self.show_hint(HintKind::GestureStarted);

        self.gesture = if touches.len() >= self.config.gestures.pinch_touches {
            PinchBaseline::capture(touches, &self.model)
                .map(GestureBaseline::Pinch)
                .unwrap_or(GestureBaseline::Degenerate)
        } else {
            GestureBaseline::None
        };
        log::debug!("gesture start: {} touches, {:?}", touches.len(), self.gesture);
    }

    /// Applies one move of the active gesture.
    ///
    /// `drag_dx`/`drag_dy` are cumulative since the gesture started and must
    /// stay continuous when fingers are added or lifted.
    pub fn on_gesture_move(&mut self, touches: &[TouchPoint], drag_dx: f64, drag_dy: f64) {
        let multi_touch = touches.len() >= self.config.gestures.pinch_touches;
        let drag = Point::new(drag_dx, drag_dy);

        match (multi_touch, self.gesture) {
            (true, GestureBaseline::Pinch(baseline)) => {
                let Some((focal, distance)) = two_finger_geometry(touches) else {
                    return;
                };
                let scale = self.config.clamp_scale(baseline.scale_for(distance));
                let offset = self
                    .viewport
                    .clamp_offset(baseline.offset_for(&focal, scale), scale);
                log::trace!("pinch distance={distance:.1} scale={scale:.3}");

                // Pinch tracks the model directly so successive moves and a
                // following command read the same value.
                self.model = Transform { scale, offset };
                self.apply_live(self.model);
            }
            (false, GestureBaseline::Pinch(_) | GestureBaseline::Degenerate) => {
                // Continue as a pan from what the pinch left, without a jump
                self.gesture = GestureBaseline::Pan {
                    offset: self.model.offset,
                    drag,
                };
                self.pan_from(self.model.offset, Point::zero());
            }
            (_, GestureBaseline::Pan { offset, drag: start }) => {
                self.pan_from(offset, drag.subtract(&start))
            }
            (true, GestureBaseline::Degenerate) => self.pan_from(self.model.offset, Point::zero()),
            (_, GestureBaseline::None) => self.pan_from(self.model.offset, drag),
        }
    }

    fn pan_from(&mut self, origin: Point, delta: Point) {
        let scale = self.model.scale;
        let offset = self.viewport.clamp_offset(origin.add(&delta), scale);
        log::trace!("pan offset=({:.2}, {:.2})", offset.x, offset.y);
        self.apply_live(Transform { scale, offset });
    }

    fn apply_live(&mut self, transform: Transform) {
        self.live = transform;
        self.events.push_back(ViewEvent::Transform {
            target: transform,
            animated: false,
            duration: std::time::Duration::ZERO,
        });
    }

    /// Ends the gesture and adopts the transform the presentation layer reports.
    ///
    /// With `None` the controller's own last live value is used. The state
    /// stays `Seeking` until `confirm_center`.
    pub fn on_gesture_end(&mut self, reported: Option<Transform>) {
        self.gesture = GestureBaseline::None;
        self.model = reported.unwrap_or(self.live);
        self.live = self.model;
        log::debug!(
            "gesture end: scale={:.3} offset=({:.2}, {:.2})",
            self.model.scale,
            self.model.offset.x,
            self.model.offset.y
        );
    }

    /// Whether a marker tap should open its details; suppressed while seeking
    pub fn try_activate_point(&mut self, point_id: &str) -> bool {
        if self.is_seeking() {
            log::debug!("tap on {point_id} suppressed until center is confirmed");
            self.show_hint(HintKind::TapSuppressed);
            return false;
        }
        true
    }

    fn show_hint(&mut self, kind: HintKind) {
        let duration = match kind {
            HintKind::GestureStarted => self.config.hints.gesture_duration(),
            HintKind::TapSuppressed => self.config.hints.tap_duration(),
        };
        self.events.push_back(ViewEvent::Hint { kind, duration });
    }

    /// Normalized map coordinate under a tap on the scaled content layer
    pub fn normalized_at(&self, layer_point: &Point) -> Point {
        self.viewport.normalized_at(layer_point, self.model.scale)
    }

    /// Takes every event emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        self.events.drain(..).collect()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewportConfig::default(), Viewport::default().size)
    }
}
