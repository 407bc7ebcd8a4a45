#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn config() -> BoardConfig {
    BoardConfig::default()
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Camera defaults ---

#[test]
fn camera_starts_at_level_one() {
    let cam = Camera::new(&config());
    assert_eq!(cam.level(), 1);
    assert_eq!(cam.max_level(), 8);
    assert_eq!(cam.scale(), 1.0);
}

#[test]
fn camera_starts_at_default_offset() {
    let cam = Camera::new(&config());
    assert_eq!(cam.offset_x, -16.0);
    assert_eq!(cam.offset_y, -16.0);
}

// --- Zoom levels ---

#[test]
fn scale_is_level_times_step_at_every_level() {
    let cfg = BoardConfig { num_levels: 5, max_scale: 2.5, ..config() };
    let mut cam = Camera::new(&cfg);
    for level in 1..=5 {
        cam.set_level(level);
        assert!(approx_eq(cam.scale(), f64::from(level) * 2.5 / 5.0));
    }
}

#[test]
fn zoom_in_then_out_round_trips_below_top() {
    let mut cam = Camera::new(&config());
    for level in 1..8 {
        cam.set_level(level);
        assert!(cam.zoom_in());
        assert!(cam.zoom_out());
        assert_eq!(cam.level(), level);
    }
}

#[test]
fn zoom_in_at_top_is_noop() {
    let mut cam = Camera::new(&config());
    cam.set_level(8);
    assert!(!cam.zoom_in());
    assert_eq!(cam.level(), 8);
}

#[test]
fn zoom_out_at_bottom_is_noop() {
    let mut cam = Camera::new(&config());
    assert!(!cam.zoom_out());
    assert_eq!(cam.level(), 1);
}

#[test]
fn set_level_clamps_out_of_range() {
    let mut cam = Camera::new(&config());
    cam.set_level(99);
    assert_eq!(cam.level(), 8);
    cam.set_level(0);
    assert_eq!(cam.level(), 1);
}

#[test]
fn set_level_reports_change() {
    let mut cam = Camera::new(&config());
    assert!(!cam.set_level(1));
    assert!(cam.set_level(3));
}

#[test]
fn reset_restores_level_and_offset() {
    let cfg = config();
    let mut cam = Camera::new(&cfg);
    cam.set_level(6);
    cam.offset_x = 300.0;
    cam.offset_y = -90.0;
    cam.reset(&cfg);
    assert_eq!(cam, Camera::new(&cfg));
}

// --- Drag and nudge ---

#[test]
fn drag_divides_by_level() {
    let cfg = BoardConfig { num_levels: 4, max_scale: 2.0, ..config() };
    let mut cam = Camera::new(&cfg);
    cam.offset_x = 0.0;
    cam.offset_y = 0.0;
    cam.set_level(4);
    cam.drag_by(40.0, -20.0);
    // scale is 2.0 here, but the divisor is the level (4)
    assert!(approx_eq(cam.offset_x, 10.0));
    assert!(approx_eq(cam.offset_y, -5.0));
}

#[test]
fn nudge_divides_by_scale() {
    let cfg = BoardConfig { num_levels: 4, max_scale: 2.0, ..config() };
    let mut cam = Camera::new(&cfg);
    cam.offset_x = 0.0;
    cam.offset_y = 0.0;
    cam.set_level(4);
    cam.nudge(96.0, 0.0);
    assert!(approx_eq(cam.offset_x, 48.0));
    assert!(approx_eq(cam.offset_y, 0.0));
}

// --- Pan bounds ---

#[test]
fn bounds_at_scale_one() {
    let cfg = config();
    let b = PanBounds::compute(&cfg, 1.0, 1920.0, 1080.0);
    assert!(approx_eq(b.pos_x, 48.0));
    assert!(approx_eq(b.pos_y, 48.0));
    assert!(approx_eq(b.neg_x, 1920.0 - cfg.scene_width() - 48.0 - 32.0));
    assert!(approx_eq(b.neg_y, 1080.0 - cfg.scene_height() - 112.0 - 48.0 - 32.0));
}

#[test]
fn bounds_at_scale_two() {
    let cfg = config();
    let w = cfg.scene_width();
    let b = PanBounds::compute(&cfg, 2.0, 1000.0, 800.0);
    assert!(approx_eq(b.pos_x, w / 4.0 + 24.0));
    assert!(approx_eq(b.neg_x, 500.0 - w * 3.0 / 4.0 - 24.0 - 32.0));
}

#[test]
fn bounds_contains() {
    let b = PanBounds { pos_x: 10.0, pos_y: 10.0, neg_x: -10.0, neg_y: -10.0 };
    assert!(b.contains(0.0, 0.0));
    assert!(b.contains(10.0, -10.0));
    assert!(!b.contains(10.1, 0.0));
    assert!(b.is_satisfiable());
}

#[test]
fn clamp_pulls_offsets_into_range() {
    let mut cam = Camera::new(&config());
    let b = PanBounds { pos_x: 50.0, pos_y: 40.0, neg_x: -500.0, neg_y: -300.0 };
    cam.offset_x = 900.0;
    cam.offset_y = -900.0;
    assert!(cam.clamp_to(&b));
    assert_eq!(cam.offset_x, 50.0);
    assert_eq!(cam.offset_y, -300.0);
}

#[test]
fn clamp_in_range_reports_no_change() {
    let mut cam = Camera::new(&config());
    let b = PanBounds { pos_x: 50.0, pos_y: 40.0, neg_x: -500.0, neg_y: -300.0 };
    assert!(!cam.clamp_to(&b));
}

#[test]
fn clamp_empty_range_prefers_negative_bound() {
    let mut cam = Camera::new(&config());
    let b = PanBounds { pos_x: 10.0, pos_y: 10.0, neg_x: 30.0, neg_y: 20.0 };
    assert!(!b.is_satisfiable());
    cam.clamp_to(&b);
    assert_eq!(cam.offset_x, 30.0);
    assert_eq!(cam.offset_y, 20.0);
}

// --- Screen / scene mapping ---

#[test]
fn scene_origin_at_level_one_default_offset() {
    let cfg = config();
    let cam = Camera::new(&cfg);
    // default offset cancels the half padding, so the scene sits at the layout origin
    let screen = cam.scene_to_screen(Point::new(0.0, 0.0), &cfg);
    assert!(point_approx_eq(screen, Point::new(0.0, 0.0)));
}

#[test]
fn screen_scene_round_trip() {
    let cfg = config();
    let mut cam = Camera::new(&cfg);
    cam.set_level(3);
    cam.offset_x = -120.0;
    cam.offset_y = 75.5;
    let scene = Point::new(420.0, 333.0);
    let back = cam.screen_to_scene(cam.scene_to_screen(scene, &cfg), &cfg);
    assert!(point_approx_eq(back, scene));
}

#[test]
fn screen_to_scene_scales_distances() {
    let cfg = config();
    let mut cam = Camera::new(&cfg);
    cam.set_level(2);
    let a = cam.screen_to_scene(Point::new(100.0, 100.0), &cfg);
    let b = cam.screen_to_scene(Point::new(300.0, 100.0), &cfg);
    assert!(approx_eq(b.x - a.x, 100.0));
}

#[test]
fn css_transform_format() {
    let cam = Camera::new(&config());
    assert_eq!(cam.css_transform(), "scale(1) translate(-16px, -16px)");
}
