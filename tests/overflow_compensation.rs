//! Integration tests for overflow compensation of rotated text blocks.

use pretty_assertions::assert_eq;
use text_enhancer::layout::{
    compensate_overflow, compute, Direction, HorizontalAlign, LayoutSettings, Margins,
    Measurement, VerticalAlign,
};

const EPSILON: f64 = 1e-9;
const FONT_SIZE: f64 = 18.0;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn assert_margins(actual: Margins, top: f64, left: f64) {
    assert!(
        approx_eq(actual.top, top) && approx_eq(actual.left, left),
        "expected top={} left={}, got top={} left={}",
        top,
        left,
        actual.top,
        actual.left
    );
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn measured() -> Measurement {
    Measurement::new(200.0, 40.0).with_content_width(150.0)
}

#[test]
fn test_zero_rotation_is_identity() {
    init_logging();
    for direction in Direction::ALL {
        for align_v in VerticalAlign::ALL {
            for align_h in HorizontalAlign::ALL {
                let settings = LayoutSettings::new(direction, align_h, align_v);
                let result = compute(&settings, &measured());
                assert_margins(result.margins, 0.0, 0.0);
            }
        }
    }
}

#[test]
fn test_vertical_mirror_symmetry() {
    init_logging();
    for align_v in VerticalAlign::ALL {
        for align_h in HorizontalAlign::ALL {
            for step in 0..24 {
                let theta = step as f64 * 15.0;
                let rl = compensate_overflow(
                    Direction::VerticalRightToLeft,
                    align_h,
                    align_v,
                    theta,
                    &measured(),
                    FONT_SIZE,
                );
                let lr = compensate_overflow(
                    Direction::VerticalLeftToRight,
                    align_h,
                    align_v,
                    (theta + 180.0) % 360.0,
                    &measured(),
                    FONT_SIZE,
                );
                assert_margins(lr, rl.top, rl.left);
            }
        }
    }
}

#[test]
fn test_horizontal_half_turn_periodicity() {
    for align_v in VerticalAlign::ALL {
        for align_h in HorizontalAlign::ALL {
            for step in 0..24 {
                let theta = step as f64 * 15.0;
                let tb = compensate_overflow(
                    Direction::HorizontalTopToBottom,
                    align_h,
                    align_v,
                    theta,
                    &measured(),
                    FONT_SIZE,
                );
                let bt = compensate_overflow(
                    Direction::HorizontalBottomToTop,
                    align_h,
                    align_v,
                    (theta + 180.0) % 360.0,
                    &measured(),
                    FONT_SIZE,
                );
                assert_margins(bt, tb.top, tb.left);
            }
        }
    }
}

#[test]
fn test_mirrored_directions_match_through_compute() {
    // The flow adds the half turn, so equal user rotations give equal margins
    for align_v in VerticalAlign::ALL {
        for align_h in HorizontalAlign::ALL {
            let rl = compute(
                &LayoutSettings::new(Direction::VerticalRightToLeft, align_h, align_v)
                    .with_rotation(75.0),
                &measured(),
            );
            let lr = compute(
                &LayoutSettings::new(Direction::VerticalLeftToRight, align_h, align_v)
                    .with_rotation(75.0),
                &measured(),
            );
            assert_margins(lr.margins, rl.margins.top, rl.margins.left);
            assert_eq!(lr.flow.rotation, 255.0);
        }
    }
}

#[test]
fn test_horizontal_top_tilt() {
    let margins = compensate_overflow(
        Direction::HorizontalTopToBottom,
        HorizontalAlign::Left,
        VerticalAlign::Top,
        45.0,
        &Measurement::new(200.0, 30.0),
        FONT_SIZE,
    );
    assert_margins(margins, 100.0 * 45f64.to_radians().sin(), 0.0);
    assert!(margins.top > 0.0);
}

#[test]
fn test_horizontal_center_uses_content_width() {
    let margins = compensate_overflow(
        Direction::HorizontalTopToBottom,
        HorizontalAlign::Center,
        VerticalAlign::Top,
        90.0,
        &measured(),
        FONT_SIZE,
    );
    assert_margins(margins, 75.0, 0.0);
}

#[test]
fn test_horizontal_bottom_is_buffered() {
    let margins = compensate_overflow(
        Direction::HorizontalTopToBottom,
        HorizontalAlign::Right,
        VerticalAlign::Bottom,
        30.0,
        &Measurement::new(100.0, 20.0),
        FONT_SIZE,
    );
    // 50 * sin(30) plus 30 * 0.02 * 18
    assert_margins(margins, -(25.0 + 10.8), 0.0);
}

#[test]
fn test_horizontal_middle_is_uncorrected() {
    for theta in [30.0, 120.0, 300.0] {
        let margins = compensate_overflow(
            Direction::HorizontalTopToBottom,
            HorizontalAlign::Left,
            VerticalAlign::Middle,
            theta,
            &measured(),
            FONT_SIZE,
        );
        assert_eq!(margins, Margins::zero());
    }
}

#[test]
fn test_vertical_bottom_center_doubles_drift() {
    let m = Measurement::new(30.0, 100.0);
    let middle = compensate_overflow(
        Direction::VerticalRightToLeft,
        HorizontalAlign::Center,
        VerticalAlign::Middle,
        60.0,
        &m,
        FONT_SIZE,
    );
    let bottom = compensate_overflow(
        Direction::VerticalRightToLeft,
        HorizontalAlign::Center,
        VerticalAlign::Bottom,
        60.0,
        &m,
        FONT_SIZE,
    );
    assert_margins(middle, -25.0, -50.0 * 60f64.to_radians().sin());
    assert_margins(bottom, 2.0 * middle.top, 2.0 * middle.left);
}

#[test]
fn test_vertical_middle_edges_sweep_opposite_halves() {
    let m = Measurement::new(30.0, 100.0);
    let right = compensate_overflow(
        Direction::VerticalRightToLeft,
        HorizontalAlign::Right,
        VerticalAlign::Middle,
        90.0,
        &m,
        FONT_SIZE,
    );
    // drift (100 - 100 * sin 0) / 2, sweep -100, buffer 90 * 0.02 * 30
    assert_margins(right, -50.0, -100.0 - 54.0);

    let left = compensate_overflow(
        Direction::VerticalRightToLeft,
        HorizontalAlign::Left,
        VerticalAlign::Middle,
        90.0,
        &m,
        FONT_SIZE,
    );
    assert_margins(left, -50.0, -54.0);
}

#[test]
fn test_degenerate_box_yields_zero() {
    init_logging();
    let margins = compensate_overflow(
        Direction::VerticalRightToLeft,
        HorizontalAlign::Right,
        VerticalAlign::Bottom,
        120.0,
        &Measurement::default(),
        FONT_SIZE,
    );
    assert_eq!(margins, Margins::zero());
}

#[test]
fn test_compute_is_bit_identical() {
    for direction in Direction::ALL {
        for align_v in VerticalAlign::ALL {
            for align_h in HorizontalAlign::ALL {
                let settings = LayoutSettings::new(direction, align_h, align_v)
                    .with_rotation(212.5)
                    .with_skew(4.0, 8.0)
                    .with_line_indent(2.0);
                let first = compute(&settings, &measured());
                let second = compute(&settings, &measured());
                assert_eq!(first, second);
                assert_eq!(first.margins.top.to_bits(), second.margins.top.to_bits());
                assert_eq!(first.margins.left.to_bits(), second.margins.left.to_bits());
            }
        }
    }
}
