use super::*;

#[test]
fn uniform_grid_is_half_open_and_monotone() {
    let grid = TimeGrid::uniform(4, 2.0).unwrap();
    assert_eq!(grid.len(), 4);
    assert_eq!(grid.values(), &[0.0, 0.5, 1.0, 1.5]);
    assert!(grid.values().windows(2).all(|w| w[0] < w[1]));
    assert!(*grid.values().last().unwrap() < grid.span());
}

#[test]
fn uniform_grid_rejects_degenerate_input() {
    assert!(TimeGrid::uniform(1, 1.0).is_err());
    assert!(TimeGrid::uniform(10, 0.0).is_err());
    assert!(TimeGrid::uniform(10, f64::NAN).is_err());
}

#[test]
fn unwrapped_phase_is_normalized_and_monotone() {
    let grid = TimeGrid::uniform(8, 3.0).unwrap();
    assert_eq!(grid.unwrapped(0), 0.0);
    for i in 1..grid.len() {
        assert!(grid.unwrapped(i) > grid.unwrapped(i - 1));
        assert!(grid.unwrapped(i) < 1.0);
    }
}

#[test]
fn wrapped_phase_retraces_while_global_advances() {
    // The moiré split: with cycles = 4 the local phase must wrap four
    // times while the unwrapped phase stays monotone.
    let grid = TimeGrid::uniform(400, 1.0).unwrap();
    let mut wraps = 0;
    let mut prev = 0.0;
    for i in 0..grid.len() {
        let local = wrap_phase(grid.unwrapped(i), 4.0);
        assert!((0.0..1.0).contains(&local));
        if local < prev {
            wraps += 1;
        }
        prev = local;
    }
    assert_eq!(wraps, 3);
}

#[test]
fn combined_span_takes_fraction_lcm() {
    assert_eq!(combined_span([1.0]), 1.0);
    assert_eq!(combined_span([3.0, 1.0]), 3.0);
    assert_eq!(combined_span([2.0, 3.0]), 6.0);
    assert_eq!(combined_span([2.5]), 2.5);
    assert_eq!(combined_span([2.5, 3.0]), 15.0);
    assert_eq!(combined_span(std::iter::empty()), 1.0);
}
