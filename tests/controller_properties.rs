//! Behavioral properties of the viewport controller: clamping, anchored
//! zooms, pinch focal stability and the seeking gate.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use floodmap::{
    core::{config::ViewportConfig, geo::Size},
    MapPoint, Point, Region, TouchPoint, Transform, ViewportController,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const EPS: f64 = 1e-9;

fn phone() -> ViewportController {
    let mut controller = ViewportController::new(ViewportConfig::default(), Size::new(390.0, 844.0))
        .with_regions([
            Region::new("CSFRC", "CS/FRC Building", 0.525, 0.6),
            Region::new("STOZ", "ST/OZ Building", -0.265, -10.0),
        ]);
    controller.set_content_natural_size(2048.0, 1536.0);
    controller
}

fn assert_in_bounds(controller: &ViewportController, transform: &Transform) {
    let config = controller.config();
    assert!(
        transform.scale >= config.min_scale && transform.scale <= config.max_scale,
        "scale {} out of bounds",
        transform.scale
    );
    let (min, max) = controller.viewport().offset_bounds(transform.scale);
    assert!(
        transform.offset.x >= min.x - EPS && transform.offset.x <= max.x + EPS,
        "offset x {} outside [{}, {}]",
        transform.offset.x,
        min.x,
        max.x
    );
    assert!(
        transform.offset.y >= min.y - EPS && transform.offset.y <= max.y + EPS,
        "offset y {} outside [{}, {}]",
        transform.offset.y,
        min.y,
        max.y
    );
}

#[test]
fn test_clamp_is_a_fixed_point() {
    let mut controller = phone();
    for scale in [0.2, 1.0, 1.37, 2.0, 7.5] {
        for x in [-5000.0, -300.0, 0.0, 99.0, 5000.0] {
            for y in [-5000.0, -120.0, 0.0, 141.0, 5000.0] {
                controller.commit(scale, x, y, false);
                let first = controller.transform();
                controller.commit(first.scale, first.offset.x, first.offset.y, false);
                assert_eq!(controller.transform(), first);
            }
        }
    }
}

#[test]
fn test_bounds_hold_across_random_operation_sequences() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut controller = phone();

    for _ in 0..2000 {
        match rng.gen_range(0..9) {
            0 => {
                let (scale, x, y) = (
                    rng.gen_range(-1.0..4.0),
                    rng.gen_range(-3000.0..3000.0),
                    rng.gen_range(-3000.0..3000.0),
                );
                controller.commit(scale, x, y, rng.gen_bool(0.5));
            }
            1 => controller.zoom_to_region(if rng.gen_bool(0.5) { "CSFRC" } else { "STOZ" }),
            2 => {
                let point = MapPoint::new("P", rng.gen(), rng.gen()).with_zoom(rng.gen_range(0.0..3.0));
                controller.zoom_to_point(Some(&point), 1.0);
            }
            3 => controller.step_zoom(rng.gen_range(0.5..1.6)),
            4 => controller.reset_view(),
            5 => controller.confirm_center(),
            6 => {
                let mut touch = |id: u64| {
                    TouchPoint::new(id, rng.gen_range(0.0..390.0), rng.gen_range(0.0..844.0))
                };
                controller.on_gesture_start(&[touch(0), touch(1)]);
                for _ in 0..5 {
                    controller.on_gesture_move(&[touch(0), touch(1)], 0.0, 0.0);
                    assert_in_bounds(&controller, &controller.live_transform());
                }
                controller.on_gesture_end(None);
            }
            7 => {
                // Finger count changes mid-gesture
                controller.on_gesture_start(&[TouchPoint::new(0, 200.0, 400.0)]);
                let mut drag = (0.0, 0.0);
                for _ in 0..6 {
                    drag.0 += rng.gen_range(-200.0..200.0);
                    drag.1 += rng.gen_range(-200.0..200.0);
                    let first = TouchPoint::new(0, 200.0 + drag.0, 400.0 + drag.1);
                    let touches = if rng.gen_bool(0.5) {
                        vec![first, TouchPoint::new(1, rng.gen_range(0.0..390.0), 400.0)]
                    } else {
                        vec![first]
                    };
                    controller.on_gesture_move(&touches, drag.0, drag.1);
                    assert_in_bounds(&controller, &controller.live_transform());
                }
                controller.on_gesture_end(None);
            }
            _ => {
                controller.on_gesture_start(&[TouchPoint::new(0, 200.0, 400.0)]);
                for _ in 0..5 {
                    let (dx, dy) = (rng.gen_range(-900.0..900.0), rng.gen_range(-900.0..900.0));
                    controller.on_gesture_move(&[TouchPoint::new(0, 200.0 + dx, 400.0 + dy)], dx, dy);
                    assert_in_bounds(&controller, &controller.live_transform());
                }
                controller.on_gesture_end(None);
            }
        }
        assert_in_bounds(&controller, &controller.transform());
    }
}

#[test]
fn test_step_zoom_keeps_viewport_center_anchored() {
    let config = ViewportConfig {
        overscan: 2.5,
        ..Default::default()
    };
    let mut controller = ViewportController::new(config, Size::new(400.0, 800.0));
    controller.set_content_natural_size(1000.0, 2000.0);

    let rendered = controller.viewport().rendered_size();
    assert_relative_eq!(rendered.width, 1000.0);
    assert_relative_eq!(rendered.height, 2000.0);

    let center = Point::new(200.0, 400.0);
    let before = controller
        .viewport()
        .viewport_to_content(&center, &controller.transform());

    controller.step_zoom(1.15);
    let after = controller
        .viewport()
        .viewport_to_content(&center, &controller.transform());

    assert_relative_eq!(controller.transform().scale, 1.15);
    assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-9);
    assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-9);
}

#[test]
fn test_zoom_in_out_factors() {
    let mut controller = phone();
    controller.zoom_in();
    assert_relative_eq!(controller.transform().scale, 1.15);
    controller.zoom_out();
    assert_relative_eq!(controller.transform().scale, 1.0);
}

#[test]
fn test_region_zoom_goes_deeper() {
    let mut controller = phone();
    controller.zoom_to_region("CSFRC");
    assert_relative_eq!(controller.transform().scale, 1.8);

    controller.commit(1.5, 0.0, 0.0, false);
    controller.zoom_to_region("CSFRC");
    assert_relative_eq!(controller.transform().scale, 1.5 * 1.3);

    controller.zoom_to_region("CSFRC");
    assert_eq!(controller.transform().scale, 2.0);
}

#[test]
fn test_region_zoom_centers_region() {
    let mut controller = phone();
    controller.zoom_to_region("CSFRC");

    let t = controller.transform();
    // 0.525 * 546 * 1.8 = 515.97, 0.6 * 409.5 * 1.8 = 442.26
    assert_relative_eq!(t.offset.x, 195.0 - 515.97, epsilon = 1e-9);
    assert_relative_eq!(t.offset.y, 422.0 - 442.26, epsilon = 1e-9);
}

#[test]
fn test_unknown_region_leaves_transform_unchanged() {
    let mut controller = phone();
    controller.commit(1.3, -40.0, 12.0, false);
    let before = controller.transform();
    controller.zoom_to_region("nonexistent");
    assert_eq!(controller.transform(), before);
}

#[test]
fn test_pinch_doubles_scale_and_holds_focal_point() {
    let mut controller = phone();
    controller.commit(1.0, -50.0, 40.0, false);
    let baseline = controller.transform();

    let start = [TouchPoint::new(0, 150.0, 300.0), TouchPoint::new(1, 250.0, 300.0)];
    controller.on_gesture_start(&start);

    let focal = Point::new(200.0, 300.0);
    let content = controller.viewport().viewport_to_content(&focal, &baseline);

    let spread = [TouchPoint::new(0, 100.0, 300.0), TouchPoint::new(1, 300.0, 300.0)];
    controller.on_gesture_move(&spread, 0.0, 0.0);

    let t = controller.transform();
    assert_relative_eq!(t.scale, 2.0);
    assert_eq!(controller.live_transform(), t);

    let back = controller.viewport().content_to_viewport(&content, &t);
    assert_abs_diff_eq!(back.x, focal.x, epsilon = 1e-9);
    assert_abs_diff_eq!(back.y, focal.y, epsilon = 1e-9);
}

#[test]
fn test_pinch_scale_is_clamped_to_max() {
    let mut controller = phone();
    controller.on_gesture_start(&[TouchPoint::new(0, 180.0, 400.0), TouchPoint::new(1, 200.0, 400.0)]);
    controller.on_gesture_move(&[TouchPoint::new(0, 0.0, 400.0), TouchPoint::new(1, 380.0, 400.0)], 0.0, 0.0);
    assert_eq!(controller.transform().scale, 2.0);

    controller.on_gesture_move(&[TouchPoint::new(0, 189.0, 400.0), TouchPoint::new(1, 191.0, 400.0)], 0.0, 0.0);
    assert_eq!(controller.transform().scale, 1.0);
}

#[test]
fn test_seeking_gate() {
    let mut controller = phone();
    assert!(controller.try_activate_point("SV-6"));

    controller.on_gesture_start(&[TouchPoint::new(0, 10.0, 10.0)]);
    assert!(!controller.try_activate_point("SV-6"));

    controller.on_gesture_end(None);
    assert!(!controller.try_activate_point("CS-8"));

    controller.confirm_center();
    assert!(controller.try_activate_point("SV-6"));
}

#[test]
fn test_zoom_to_point_scenario() {
    let mut controller = phone();
    let rendered = controller.viewport().rendered_size();
    assert_relative_eq!(rendered.width, 546.0);
    assert_relative_eq!(rendered.height, 409.5);

    controller.zoom_to_point(Some(&MapPoint::new("SV-6", 0.28, 0.40).with_zoom(2.0)), 1.0);

    let t = controller.transform();
    assert_eq!(t.scale, 2.0);
    assert_relative_eq!(t.offset.x, -110.76, epsilon = 1e-9);
    assert_relative_eq!(t.offset.y, 94.4, epsilon = 1e-9);
}

#[test]
fn test_zoom_to_point_prefers_zoom_target() {
    let mut controller = phone();
    let point = MapPoint::new("CS-2", 0.51, 0.49)
        .with_zoom(1.8)
        .with_zoom_target(0.3, 0.49);
    controller.zoom_to_point(Some(&point), 1.0);

    let t = controller.transform();
    assert_relative_eq!(t.offset.x, 195.0 - 0.3 * 546.0 * 1.8, epsilon = 1e-9);
    assert_relative_eq!(t.offset.y, 422.0 - 0.49 * 409.5 * 1.8, epsilon = 1e-9);
}

#[test]
fn test_reset_view() {
    let mut controller = phone();
    controller.zoom_to_region("CSFRC");
    controller.reset_view();
    assert_eq!(controller.transform(), Transform::identity());
}
