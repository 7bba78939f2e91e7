use super::*;

// --- DecorVariant ---

#[test]
fn variant_default_is_blue() {
    assert_eq!(DecorVariant::default(), DecorVariant::Blue);
}

#[test]
fn variant_from_name() {
    assert_eq!(DecorVariant::from("purple"), DecorVariant::Purple);
    assert_eq!(DecorVariant::from("Pink"), DecorVariant::Pink);
    assert_eq!(DecorVariant::from("blue"), DecorVariant::Blue);
    assert_eq!(DecorVariant::from("chartreuse"), DecorVariant::Blue);
}

#[test]
fn variant_names_round_trip() {
    for v in [DecorVariant::Blue, DecorVariant::Purple, DecorVariant::Pink] {
        assert_eq!(DecorVariant::from(v.name()), v);
    }
}

#[test]
fn variants_map_to_distinct_gradients() {
    assert_eq!(DecorVariant::Blue.gradient(), GradientPair { edge: "#60a5fa22", centre: "#93c5fd22" });
    assert_eq!(DecorVariant::Purple.gradient(), GradientPair { edge: "#a78bfa22", centre: "#c4b5fd22" });
    assert_eq!(DecorVariant::Pink.gradient(), GradientPair { edge: "#f472b622", centre: "#f9a8d422" });
}

#[test]
fn gradient_css_puts_centre_colour_first() {
    let css = DecorVariant::Blue.gradient().to_css();
    assert_eq!(
        css,
        "radial-gradient(circle at 30% 30%, #93c5fd22 0%, #60a5fa22 60%, transparent 70%)"
    );
}

// --- generation ---

#[test]
fn count_five_yields_five_orbs_in_bounds() {
    let orbs = seeded_orbs(5, 42);
    assert_eq!(orbs.len(), 5);
    for orb in &orbs {
        assert!((140..=260).contains(&orb.size_px), "size {}", orb.size_px);
        assert!(orb.top_pct <= 80, "top {}", orb.top_pct);
        assert!(orb.left_pct <= 80, "left {}", orb.left_pct);
        assert!((0.0..4.0).contains(&orb.delay_s), "delay {}", orb.delay_s);
        assert!((-100..=100).contains(&orb.depth_px), "depth {}", orb.depth_px);
    }
}

#[test]
fn zero_count_yields_nothing() {
    assert!(seeded_orbs(0, 7).is_empty());
}

#[test]
fn bounds_hold_across_many_seeds() {
    for seed in 0..200 {
        for orb in seeded_orbs(6, seed) {
            assert!((140..=260).contains(&orb.size_px));
            assert!(orb.top_pct <= 80 && orb.left_pct <= 80);
            assert!(orb.delay_s >= 0.0 && orb.delay_s < 4.0);
            assert!((-100..=100).contains(&orb.depth_px));
        }
    }
}

#[test]
fn same_seed_same_layout() {
    assert_eq!(seeded_orbs(6, 99), seeded_orbs(6, 99));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(seeded_orbs(6, 1), seeded_orbs(6, 2));
}

#[test]
fn delay_has_at_most_two_decimals() {
    for orb in seeded_orbs(20, 5) {
        let hundredths = orb.delay_s * 100.0;
        assert!((hundredths - hundredths.round()).abs() < 1e-6);
    }
}

#[test]
fn period_grows_with_index() {
    let orbs = seeded_orbs(4, 3);
    let periods: Vec<u32> = orbs.iter().map(Orb::period_s).collect();
    assert_eq!(periods, vec![6, 7, 8, 9]);
}

#[test]
fn indices_are_sequential() {
    let orbs = seeded_orbs(3, 11);
    assert_eq!(orbs.iter().map(|o| o.index).collect::<Vec<_>>(), vec![0, 1, 2]);
}

// --- styles ---

#[test]
fn wrapper_style_positions_orb() {
    let orb = Orb { index: 0, size_px: 150, top_pct: 10, left_pct: 20, delay_s: 1.25, depth_px: -40 };
    assert_eq!(
        orb.wrapper_style(),
        "top: 10%; left: 20%; width: 150px; height: 150px; transform: translateZ(-40px);"
    );
}

#[test]
fn body_style_carries_period_and_delay() {
    let orb = Orb { index: 2, size_px: 150, top_pct: 10, left_pct: 20, delay_s: 1.5, depth_px: 0 };
    let style = orb.body_style(DecorVariant::Pink);
    assert!(style.contains("#f9a8d422 0%"));
    assert!(style.ends_with("animation: decor-float 8s ease-in-out 1.50s infinite;"));
}

// --- instance_seed ---

#[test]
fn instance_seed_is_stable() {
    assert_eq!(instance_seed(""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(instance_seed("services"), instance_seed("services"));
    assert_ne!(instance_seed("services"), instance_seed("contact"));
}
