use super::*;

#[test]
fn gcd_and_lcm_agree_on_small_values() {
    assert_eq!(gcd_u64(96, 36), 12);
    assert_eq!(gcd_u64(7, 13), 1);
    assert_eq!(lcm_u64(4, 6), 12);
    assert_eq!(lcm_u64(5, 1), 5);
    assert_eq!(lcm_u64(0, 3), 0);
}

#[test]
fn approx_ratio_recovers_simple_fractions() {
    assert_eq!(approx_ratio(2.5, 1000), (5, 2));
    assert_eq!(approx_ratio(3.0, 1000), (3, 1));
    assert_eq!(approx_ratio(1.0, 1000), (1, 1));
    assert_eq!(approx_ratio(0.25, 1000), (1, 4));
}

#[test]
fn approx_ratio_bounds_the_denominator() {
    let (n, d) = approx_ratio(std::f64::consts::PI, 1000);
    assert!(d <= 1000);
    assert!(((n as f64) / (d as f64) - std::f64::consts::PI).abs() < 1e-5);
}

#[test]
fn approx_ratio_collapses_degenerate_input() {
    assert_eq!(approx_ratio(f64::NAN, 1000), (1, 1));
    assert_eq!(approx_ratio(-2.0, 1000), (1, 1));
    assert_eq!(approx_ratio(0.0, 1000), (1, 1));
}

#[test]
fn lerp_hits_both_endpoints() {
    assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
}
