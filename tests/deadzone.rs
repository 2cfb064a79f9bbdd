use padaction::gamepad::{apply_deadzone, DeadzoneConfig};
use proptest::prelude::*;

const INNER: f32 = 0.1;
const OUTER: f32 = 0.05;

#[test]
fn reference_thresholds() {
    assert_eq!(apply_deadzone(0.0999, INNER, OUTER), 0.0);
    assert_eq!(apply_deadzone(-0.0999, INNER, OUTER), 0.0);
    assert_eq!(apply_deadzone(0.951, INNER, OUTER), 1.0);
    assert_eq!(apply_deadzone(-0.951, INNER, OUTER), -1.0);
    assert_eq!(apply_deadzone(1.0, 0.0, 0.0), 1.0);
}

proptest! {
    #[test]
    fn zero_stays_zero(inner in 0.0f32..0.5, outer in 0.0f32..0.49) {
        prop_assert_eq!(apply_deadzone(0.0, inner, outer), 0.0);
    }

    #[test]
    fn output_stays_in_unit_range(v in -1.0f32..=1.0) {
        let out = apply_deadzone(v, INNER, OUTER);
        prop_assert!((-1.0..=1.0).contains(&out));
        // Sign is preserved (or collapses to zero)
        prop_assert!(out == 0.0 || out.signum() == v.signum());
    }

    #[test]
    fn monotonic_in_magnitude(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(apply_deadzone(lo, INNER, OUTER) <= apply_deadzone(hi, INNER, OUTER));
    }

    #[test]
    fn continuous_between_thresholds(v in 0.1f32..0.95) {
        let step = 1e-4;
        let here = apply_deadzone(v, INNER, OUTER);
        let next = apply_deadzone(v + step, INNER, OUTER);
        // Slope is 1 / (0.95 - 0.1), so a tiny step moves the output by a tiny amount
        prop_assert!((next - here).abs() <= step / (0.95 - 0.1) + 1e-5);
    }

    #[test]
    fn symmetric_around_center(v in 0.0f32..=1.0) {
        prop_assert_eq!(apply_deadzone(-v, INNER, OUTER), -apply_deadzone(v, INNER, OUTER));
    }

    #[test]
    fn valid_pairs_span_the_full_range(inner in 0.0f32..0.45, outer in 0.0f32..0.45) {
        let config = DeadzoneConfig::new(inner, outer).unwrap();
        prop_assert_eq!(config.apply(1.0), 1.0);
        prop_assert_eq!(config.apply(-1.0), -1.0);
        prop_assert_eq!(config.apply(inner / 2.0), 0.0);
    }
}
