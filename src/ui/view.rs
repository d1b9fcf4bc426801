//! Host-facing map view.
//!
//! `MapView` wires the controller to its collaborators: it routes raw touch
//! streams through the capture predicate, feeds controller events into the
//! transition driver and the hint banner, hit-tests gate markers and gates
//! their selection behind `try_activate_point`.

use crate::{
    animation::transitions::TransitionDriver,
    core::{
        config::ViewportConfig,
        constants::{LEVEL_NOT_AVAILABLE, MARKER_HALF_SIZE},
        controller::ViewportController,
        geo::{Point, Size},
        viewport::Transform,
    },
    data::{dataset::MapDataset, points::MapPoint},
    input::events::{HintKind, TouchPoint, ViewEvent},
    ui::hint::HintBanner,
};
use std::time::Duration;

/// A gate whose details are open
#[derive(Debug, Clone, PartialEq)]
pub struct PointSelection {
    pub point_id: String,
    pub name: String,
    /// Expected flood level under the current advisory
    pub level: Option<String>,
}

impl PointSelection {
    pub fn level_text(&self) -> &str {
        self.level.as_deref().unwrap_or(LEVEL_NOT_AVAILABLE)
    }
}

pub type SelectionCallback = Box<dyn Fn(&PointSelection) + Send + Sync>;

/// Raw touch tracking before and after a gesture is captured
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct TouchTracker {
    /// Centroid the cumulative drag is measured from
    origin: Option<Point>,
    /// Centroid and finger count at the last update
    last: Option<Point>,
    count: usize,
    captured: bool,
}

impl TouchTracker {
    /// Follows a new set of touches and returns the cumulative drag.
    ///
    /// When fingers are added or lifted the origin shifts by the centroid
    /// jump, so the drag stays continuous.
    fn update(&mut self, touches: &[TouchPoint]) -> Option<Point> {
        let current = centroid(touches)?;
        let origin = match (self.origin, self.last) {
            (Some(origin), Some(last)) if touches.len() != self.count => {
                origin.add(&current.subtract(&last))
            }
            (Some(origin), _) => origin,
            (None, _) => current,
        };
        self.origin = Some(origin);
        self.last = Some(current);
        self.count = touches.len();
        Some(current.subtract(&origin))
    }
}

pub struct MapView {
    controller: ViewportController,
    driver: TransitionDriver,
    banner: HintBanner,
    dataset: MapDataset,
    advisory: String,
    selection: Option<PointSelection>,
    touches: TouchTracker,
    on_select: Option<SelectionCallback>,
}

impl MapView {
    pub fn new(
        dataset: MapDataset,
        advisory: impl Into<String>,
        config: ViewportConfig,
        viewport_size: Size,
    ) -> Self {
        let controller =
            ViewportController::new(config, viewport_size).with_regions(dataset.regions.clone());
        Self {
            controller,
            driver: TransitionDriver::default(),
            banner: HintBanner::new(),
            dataset,
            advisory: advisory.into(),
            selection: None,
            touches: TouchTracker::default(),
            on_select: None,
        }
    }

    /// Called whenever a gate's details are opened
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PointSelection) + Send + Sync + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    pub fn dataset(&self) -> &MapDataset {
        &self.dataset
    }

    pub fn advisory(&self) -> &str {
        &self.advisory
    }

    /// Switches the advisory; an open selection picks up the new level
    pub fn set_advisory(&mut self, advisory: impl Into<String>) {
        self.advisory = advisory.into();
        if let Some(selection) = self.selection.as_mut() {
            selection.level = self
                .dataset
                .level_for(&self.advisory, &selection.point_id)
                .map(str::to_string);
        }
    }

    pub fn hint_kind(&self) -> Option<HintKind> {
        self.banner.kind()
    }

    /// Transform to draw this frame
    pub fn transform(&self) -> Transform {
        self.driver.current()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn selection(&self) -> Option<&PointSelection> {
        self.selection.as_ref()
    }

    /// The center-first banner shows while seeking or while its timer runs
    pub fn hint_visible(&self) -> bool {
        self.controller.is_seeking() || self.banner.is_armed()
    }

    pub fn layout(&mut self, width: f64, height: f64) {
        if self.controller.viewport().size != Size::new(width, height) {
            self.controller.set_viewport(width, height);
        }
    }

    pub fn set_content_natural_size(&mut self, width: f64, height: f64) {
        self.controller.set_content_natural_size(width, height);
    }

    /// Advances animations and timers; returns whether a repaint is needed
    pub fn tick(&mut self, delta: Duration) -> bool {
        let had_events = self.flush();
        let was_armed = self.banner.is_armed();
        let moved = self.driver.update(delta);
        self.banner.update(delta);
        had_events || moved || was_armed != self.banner.is_armed()
    }

    fn flush(&mut self) -> bool {
        let events = self.controller.drain_events();
        for event in &events {
            match event {
                ViewEvent::Transform { .. } => self.driver.apply(event),
                ViewEvent::Hint { kind, duration } => self.banner.show(*kind, *duration),
            }
        }
        !events.is_empty()
    }

    /// `touches` are all touches down after the new one landed
    pub fn touch_down(&mut self, touches: &[TouchPoint]) {
        self.touches.update(touches);
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        if self.touches.origin.is_none() {
            return;
        }
        let Some(delta) = self.touches.update(touches) else {
            return;
        };

        if !self.touches.captured {
            if !self
                .controller
                .should_capture_gesture(touches.len(), delta.x, delta.y)
            {
                return;
            }
            self.touches.captured = true;
            self.controller.on_gesture_start(touches);
        }

        self.controller.on_gesture_move(touches, delta.x, delta.y);
        self.flush();
    }

    /// `remaining` are the touches still down after the release
    pub fn touch_up(&mut self, remaining: &[TouchPoint]) {
        if !remaining.is_empty() {
            self.touches.update(remaining);
            return;
        }
        if self.touches.captured {
            self.flush();
            self.controller.on_gesture_end(Some(self.driver.current()));
        }
        self.touches = TouchTracker::default();
    }

    /// Topmost gate marker under a viewport pixel
    pub fn point_at(&self, position: &Point) -> Option<&MapPoint> {
        let transform = self.driver.current();
        let half = Point::new(MARKER_HALF_SIZE.0, MARKER_HALF_SIZE.1).multiply(transform.scale);

        self.dataset.points.iter().rev().find(|point| {
            let center = self.marker_position(point);
            (position.x - center.x).abs() <= half.x && (position.y - center.y).abs() <= half.y
        })
    }

    /// Where a point's marker is drawn this frame, in viewport pixels
    pub fn marker_position(&self, point: &MapPoint) -> Point {
        let viewport = self.controller.viewport();
        let content = viewport.normalized_to_content(&point.position());
        viewport.content_to_viewport(&content, &self.driver.current())
    }

    /// Opens a gate's details unless taps are suppressed
    pub fn tap_point(&mut self, point_id: &str) -> Option<&PointSelection> {
        self.dataset.point(point_id)?;
        let activated = self.controller.try_activate_point(point_id);
        self.flush();
        if !activated {
            return None;
        }
        self.select(point_id)
    }

    /// Zooms to a gate and opens its details
    pub fn long_press_point(&mut self, point_id: &str) -> Option<&PointSelection> {
        let point = self.dataset.point(point_id)?.clone();
        let activated = self.controller.try_activate_point(point_id);
        if activated {
            let default_zoom = self.controller.config().min_scale;
            self.controller.zoom_to_point(Some(&point), default_zoom);
        }
        self.flush();
        if !activated {
            return None;
        }
        self.select(point_id)
    }

    fn select(&mut self, point_id: &str) -> Option<&PointSelection> {
        let point = self.dataset.point(point_id)?;
        let selection = PointSelection {
            point_id: point.id.clone(),
            name: self.dataset.friendly_name(point),
            level: self
                .dataset
                .level_for(&self.advisory, &point.id)
                .map(str::to_string),
        };
        log::info!("selected {} ({})", selection.name, selection.level_text());

        if let Some(callback) = &self.on_select {
            callback(&selection);
        }
        self.selection = Some(selection);
        self.selection.as_ref()
    }

    /// Closes the details and zooms onto the gate
    pub fn close_selection(&mut self) {
        let Some(selection) = self.selection.take() else {
            return;
        };
        let default_zoom = self.controller.config().min_scale;
        self.controller
            .zoom_to_point(self.dataset.point(&selection.point_id), default_zoom);
        self.flush();
    }

    /// Region buttons work regardless of the seeking state
    pub fn tap_region(&mut self, region_id: &str) {
        self.controller.zoom_to_region(region_id);
        self.flush();
    }

    pub fn zoom_in(&mut self) {
        self.controller.zoom_in();
        self.flush();
    }

    pub fn zoom_out(&mut self) {
        self.controller.zoom_out();
        self.flush();
    }

    pub fn reset_view(&mut self) {
        self.controller.reset_view();
        self.flush();
    }

    pub fn confirm_center(&mut self) {
        self.controller.confirm_center();
        self.flush();
    }

    /// Logs the normalized coordinate under a content-layer tap
    pub fn debug_coordinate(&self, layer_point: &Point) -> Point {
        let normalized = self.controller.normalized_at(layer_point);
        log::info!("[coord] x={:.4} y={:.4}", normalized.x, normalized.y);
        normalized
    }
}

fn centroid(touches: &[TouchPoint]) -> Option<Point> {
    if touches.is_empty() {
        return None;
    }
    let sum = touches
        .iter()
        .fold(Point::zero(), |acc, touch| acc.add(&touch.position));
    Some(sum.multiply(1.0 / touches.len() as f64))
}
