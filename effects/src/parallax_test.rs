#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn hero() -> Bounds {
    Bounds::new(0.0, 0.0, 1000.0, 500.0)
}

// --- LayerOffset ---

#[test]
fn offset_follows_formula() {
    let cfg = ParallaxConfig::default();
    for (x, y, d) in [(0.5, 0.5, 1.0), (-0.5, 0.25, 0.2), (0.1, -0.4, 0.6), (0.0, 0.0, 0.4)] {
        let o = LayerOffset::at(cfg, x, y, d);
        assert!(approx_eq(o.tx_px, -x * d * 20.0));
        assert!(approx_eq(o.ty_px, -y * d * 20.0));
    }
}

#[test]
fn offset_moves_against_pointer() {
    let o = LayerOffset::at(ParallaxConfig::default(), 0.5, -0.5, 1.0);
    assert!(o.tx_px < 0.0);
    assert!(o.ty_px > 0.0);
}

#[test]
fn zero_depth_layer_stays_put() {
    let o = LayerOffset::at(ParallaxConfig::default(), 0.5, 0.5, 0.0);
    assert_eq!(o, LayerOffset::default());
    assert_eq!(o.to_css(), "translate3d(0px, 0px, 0)");
}

#[test]
fn css_formats_translate3d() {
    let o = LayerOffset { tx_px: -2.5, ty_px: 1.0 };
    assert_eq!(o.to_css(), "translate3d(-2.5px, 1px, 0)");
}

// --- parse_depth ---

#[test]
fn parse_depth_reads_decimal() {
    assert_eq!(parse_depth(Some("0.4")), 0.4);
    assert_eq!(parse_depth(Some(" 0.6 ")), 0.6);
}

#[test]
fn parse_depth_defaults_to_zero() {
    assert_eq!(parse_depth(None), 0.0);
    assert_eq!(parse_depth(Some("")), 0.0);
    assert_eq!(parse_depth(Some("deep")), 0.0);
    assert_eq!(parse_depth(Some("NaN")), 0.0);
    assert_eq!(parse_depth(Some("inf")), 0.0);
}

#[test]
fn parse_depth_clamps_negative_weights() {
    assert_eq!(parse_depth(Some("-0.4")), 0.0);
    assert_eq!(parse_depth(Some("-0")), 0.0);
}

// --- ParallaxEffect ---

#[test]
fn pointer_move_updates_every_layer_independently() {
    let mut fx = ParallaxEffect::new(ParallaxConfig::default(), MotionPreference::NoPreference, [0.2, 0.4, 0.6]);
    // Pointer at the right edge, vertical centre: x = 0.5, y = 0.
    let offsets = fx.pointer_move(hero(), 1000.0, 250.0).expect("live effect").to_vec();
    assert_eq!(offsets.len(), 3);
    assert!(approx_eq(offsets[0].tx_px, -2.0));
    assert!(approx_eq(offsets[1].tx_px, -4.0));
    assert!(approx_eq(offsets[2].tx_px, -6.0));
    for o in &offsets {
        assert_eq!(o.ty_px, 0.0);
    }
}

#[test]
fn offsets_hold_last_position() {
    let mut fx = ParallaxEffect::new(ParallaxConfig::default(), MotionPreference::NoPreference, [1.0]);
    fx.pointer_move(hero(), 0.0, 0.0);
    let held = fx.offsets()[0];
    assert!(approx_eq(held.tx_px, 10.0));
    assert!(approx_eq(held.ty_px, 10.0));

    // Unmeasurable container: nothing changes.
    assert!(fx.pointer_move(Bounds::new(0.0, 0.0, 0.0, 0.0), 5.0, 5.0).is_none());
    assert_eq!(fx.offsets()[0], held);
}

#[test]
fn reduced_motion_keeps_layers_neutral() {
    let mut fx = ParallaxEffect::new(ParallaxConfig::default(), MotionPreference::Reduce, [0.2, 0.4]);
    assert!(!fx.is_enabled());
    assert!(fx.pointer_move(hero(), 0.0, 0.0).is_none());
    assert!(fx.offsets().iter().all(|o| *o == LayerOffset::default()));
}

#[test]
fn no_layers_is_fine() {
    let mut fx = ParallaxEffect::new(ParallaxConfig::default(), MotionPreference::NoPreference, []);
    assert_eq!(fx.pointer_move(hero(), 10.0, 10.0).map(<[LayerOffset]>::len), Some(0));
}

#[test]
fn inert_has_requested_layer_count() {
    let fx = ParallaxEffect::inert(3);
    assert_eq!(fx.offsets().len(), 3);
    assert!(!fx.is_enabled());
}
