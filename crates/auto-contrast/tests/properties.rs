//! Property tests for the algebra the selection engine is built on.

use std::str::FromStr;

use auto_contrast::{
    hue::{normalize_degrees, rotate, shortest_rotation},
    select_text_color, ContrastOptions, Rgba, Strategy,
};
// Explicit imports: proptest's prelude exports a `Strategy` trait that would
// collide with the engine's `Strategy` enum.
use proptest::{prop_assert, prop_assert_eq, prop_assume, proptest, sample::select};

static ROTATION_STRATEGIES: [Strategy; 5] = [
    Strategy::Complementary,
    Strategy::Analogous,
    Strategy::Adjacent,
    Strategy::Contrast,
    Strategy::Custom,
];

static ALL_STRATEGIES: [Strategy; 6] = Strategy::ALL;

proptest! {
    #[test]
    fn normalize_lands_in_range(degrees in -1.0e9f64..1.0e9) {
        let n = normalize_degrees(degrees);
        prop_assert!((0.0..360.0).contains(&n), "normalize({}) = {}", degrees, n);
    }

    #[test]
    fn rotate_lands_in_range(h in -1.0e6f64..1.0e6, d in -1.0e6f64..1.0e6) {
        let r = rotate(h, d);
        prop_assert!((0.0..360.0).contains(&r), "rotate({}, {}) = {}", h, d, r);
    }

    #[test]
    fn shortest_rotation_is_zero_on_the_diagonal(h in 0.0f64..360.0) {
        prop_assert_eq!(shortest_rotation(h, h), 0.0);
    }

    #[test]
    fn shortest_rotation_stays_in_half_open_band(
        a in 0.0f64..360.0,
        b in 0.0f64..360.0,
    ) {
        let d = shortest_rotation(a, b);
        prop_assert!(d > -180.0 && d <= 180.0, "shortest({}, {}) = {}", a, b, d);
    }

    #[test]
    fn shortest_rotation_is_antisymmetric_off_the_boundary(
        a in 0.0f64..360.0,
        b in 0.0f64..360.0,
    ) {
        let fwd = shortest_rotation(a, b);
        // the ±180 boundary is single-valued by construction; skip it
        prop_assume!(fwd.abs() < 179.999);
        let back = shortest_rotation(b, a);
        prop_assert!((fwd + back).abs() < 1e-9, "fwd {} back {}", fwd, back);
    }

    #[test]
    fn rotating_by_the_shortest_path_reaches_the_target(
        a in 0.0f64..360.0,
        b in 0.0f64..360.0,
    ) {
        let reached = rotate(a, shortest_rotation(a, b));
        let err = shortest_rotation(reached, b).abs();
        prop_assert!(err < 1e-9, "reached {}, wanted {}", reached, b);
    }

    #[test]
    fn accessibility_picks_exactly_by_luminance(
        r in 0u8..=255,
        g in 0u8..=255,
        b in 0u8..=255,
        threshold in 0.0f64..1.0,
    ) {
        let background = format!("#{r:02x}{g:02x}{b:02x}");
        let opts = ContrastOptions::new(Strategy::Accessibility).threshold(threshold);
        let color = select_text_color(&background, &opts).unwrap().color;
        let lum = Rgba::from_str(&background).unwrap().relative_luminance();
        if lum > threshold {
            prop_assert_eq!(color, opts.dark_color);
        } else {
            prop_assert_eq!(color, opts.light_color);
        }
    }

    #[test]
    fn achromatic_backgrounds_match_accessibility_under_every_strategy(
        v in 0u8..=255,
        strategy in select(ROTATION_STRATEGIES.as_slice()),
        threshold in 0.0f64..1.0,
    ) {
        let background = format!("#{v:02x}{v:02x}{v:02x}");
        let rotated = select_text_color(
            &background,
            &ContrastOptions::new(strategy).threshold(threshold),
        )
        .unwrap();
        let baseline = select_text_color(
            &background,
            &ContrastOptions::new(Strategy::Accessibility).threshold(threshold),
        )
        .unwrap();
        prop_assert!(rotated.achromatic_fallback);
        prop_assert_eq!(rotated.color, baseline.color);
    }

    #[test]
    fn unusual_numeric_options_never_error(
        r in 0u8..=255,
        g in 0u8..=255,
        b in 0u8..=255,
        threshold in -10.0f64..10.0,
        degree in -5000.0f64..5000.0,
        strategy in select(ALL_STRATEGIES.as_slice()),
    ) {
        let background = format!("#{r:02x}{g:02x}{b:02x}");
        let opts = ContrastOptions::new(strategy)
            .threshold(threshold)
            .custom_degree(degree);
        prop_assert!(select_text_color(&background, &opts).is_ok());
    }

    #[test]
    fn selection_is_deterministic(
        r in 0u8..=255,
        g in 0u8..=255,
        b in 0u8..=255,
        strategy in select(ALL_STRATEGIES.as_slice()),
    ) {
        let background = format!("#{r:02x}{g:02x}{b:02x}");
        let opts = ContrastOptions::new(strategy);
        let first = select_text_color(&background, &opts).unwrap();
        let second = select_text_color(&background, &opts).unwrap();
        prop_assert_eq!(first, second);
    }
}
