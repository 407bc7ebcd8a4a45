#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn config() -> BoardConfig {
    BoardConfig::default()
}

// =============================================================
// Snapping
// =============================================================

#[test]
fn snap_rounds_down_to_cell() {
    let cfg = config(); // cells are 64 x 48
    let snapped = snap_to_cell(Point::new(130.0, 100.0), &cfg);
    assert_eq!(snapped, Point::new(128.0, 96.0));
}

#[test]
fn snap_negative_rounds_toward_negative_infinity() {
    let cfg = config();
    let snapped = snap_to_cell(Point::new(-1.0, -47.0), &cfg);
    assert_eq!(snapped, Point::new(-64.0, -48.0));
}

#[test]
fn snap_is_idempotent() {
    let cfg = config();
    for &(x, y) in &[(0.0, 0.0), (13.5, 97.2), (640.0, 480.0), (-33.0, 1000.1)] {
        let once = snap_to_cell(Point::new(x, y), &cfg);
        let twice = snap_to_cell(once, &cfg);
        assert_eq!(once, twice);
    }
}

#[test]
fn snap_is_idempotent_for_inexact_cells() {
    let cfg = BoardConfig { card_width: 100.0, card_height: 70.0, grid_subdivisions: 3, ..config() };
    for k in 0..50 {
        let p = Point::new(f64::from(k) * cfg.cell_width(), f64::from(k) * cfg.cell_height());
        let snapped = snap_to_cell(p, &cfg);
        assert!(approx_eq(snapped.x, p.x));
        assert!(approx_eq(snapped.y, p.y));
    }
}

#[test]
fn candidate_subtracts_anchor_before_snapping() {
    let cfg = BoardConfig { card_width: 240.0, card_height: 160.0, ..config() };
    // anchor (80, 20), cells (60, 40)
    let candidate = candidate_position(Point::new(200.0, 100.0), &cfg);
    assert_eq!(candidate, Point::new(120.0, 80.0));
}

#[test]
fn candidate_near_origin_goes_negative() {
    let cfg = config();
    let candidate = candidate_position(Point::new(10.0, 10.0), &cfg);
    assert!(candidate.x < 0.0);
    assert!(candidate.y < 0.0);
}

// =============================================================
// Grid lines
// =============================================================

#[test]
fn grid_covers_full_scene() {
    let cfg = config();
    let lines = grid_lines(&cfg);
    let verticals: Vec<_> = lines.iter().filter(|l| l.axis == GridAxis::Vertical).collect();
    let horizontals: Vec<_> = lines.iter().filter(|l| l.axis == GridAxis::Horizontal).collect();
    assert_eq!(verticals.len(), 40);
    assert_eq!(horizontals.len(), 30);
    assert!(approx_eq(verticals[39].position, cfg.scene_width()));
    assert!(approx_eq(horizontals[29].position, cfg.scene_height()));
}

#[test]
fn grid_every_fourth_line_is_heavy() {
    let lines = grid_lines(&config());
    let heavy: Vec<bool> = lines.iter().take(8).map(|l| l.heavy).collect();
    assert_eq!(heavy, vec![false, false, false, true, false, false, false, true]);
}

#[test]
fn grid_line_lengths_span_the_other_axis() {
    let cfg = config();
    for line in grid_lines(&cfg) {
        match line.axis {
            GridAxis::Vertical => assert_eq!(line.length, cfg.scene_height()),
            GridAxis::Horizontal => assert_eq!(line.length, cfg.scene_width()),
        }
    }
}

#[test]
fn grid_respects_subdivisions() {
    let cfg = BoardConfig { grid_subdivisions: 2, scene_width_cards: 3.0, scene_height_cards: 1.0, ..config() };
    let lines = grid_lines(&cfg);
    assert_eq!(lines.iter().filter(|l| l.axis == GridAxis::Vertical).count(), 6);
    assert_eq!(lines.iter().filter(|l| l.axis == GridAxis::Horizontal).count(), 2);
    assert_eq!(lines.iter().filter(|l| l.heavy).count(), 4);
}
