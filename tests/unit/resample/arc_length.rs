use super::*;

fn spiral_dense(n: usize) -> PointSequence {
    // Archimedean spiral: markedly non-uniform chord lengths under naive
    // t-spacing (slow near the center, fast outside).
    (0..n)
        .map(|i| {
            let t = (i as f64) / (n as f64);
            let r = 50.0 * t;
            let angle = t * 3.0 * std::f64::consts::TAU;
            (r * angle.cos(), r * angle.sin())
        })
        .collect()
}

fn spacing_cv(points: &PointSequence) -> f64 {
    let d: Vec<f64> = (1..points.len())
        .map(|i| {
            (points.xs()[i] - points.xs()[i - 1]).hypot(points.ys()[i] - points.ys()[i - 1])
        })
        .collect();
    let mean = d.iter().sum::<f64>() / (d.len() as f64);
    let var = d.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (d.len() as f64);
    var.sqrt() / mean
}

#[test]
fn cumulative_lengths_are_monotone_and_start_at_zero() {
    let points: PointSequence = [(0.0, 0.0), (3.0, 4.0), (3.0, 4.0), (6.0, 8.0)]
        .into_iter()
        .collect();
    let lengths = cumulative_lengths(&points);
    assert_eq!(lengths, vec![0.0, 5.0, 5.0, 10.0]);
}

#[test]
fn resampled_spacing_is_even() {
    let dense = spiral_dense(50_000);
    let naive = stride_subsample(&dense, 1000).unwrap();
    let resampled = resample_by_arc_length(&dense, 1000).unwrap();

    let naive_cv = spacing_cv(&naive);
    let even_cv = spacing_cv(&resampled);
    assert!(even_cv < 0.05, "cv = {even_cv}");
    assert!(even_cv < naive_cv);
}

#[test]
fn resampling_preserves_endpoints() {
    let dense = spiral_dense(10_000);
    let out = resample_by_arc_length(&dense, 100).unwrap();
    assert_eq!(out.len(), 100);
    assert_eq!(out.point(0), dense.point(0));
    let (a, b) = (out.point(out.len() - 1), dense.point(dense.len() - 1));
    assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
}

#[test]
fn coincident_samples_are_skipped_not_divided_by() {
    let points: PointSequence = [(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (2.0, 0.0)]
        .into_iter()
        .collect();
    let out = resample_by_arc_length(&points, 5).unwrap();
    assert_eq!(out.len(), 5);
    for p in out.points() {
        assert!(p.x.is_finite() && p.y.is_finite());
    }
    assert_eq!(out.point(0), points.point(0));
    assert_eq!(out.point(4), points.point(3));
}

#[test]
fn zero_total_length_falls_back_to_stride() {
    let points = PointSequence::repeated(Point::new(7.0, 7.0), 50);
    let out = resample_by_arc_length(&points, 10).unwrap();
    assert_eq!(out.len(), 10);
    assert!(out.points().all(|p| p == Point::new(7.0, 7.0)));
}

#[test]
fn stride_subsample_keeps_endpoints_and_order() {
    let dense: PointSequence = (0..101).map(|i| (i as f64, 0.0)).collect();
    let out = stride_subsample(&dense, 11).unwrap();
    assert_eq!(out.len(), 11);
    assert_eq!(out.point(0), dense.point(0));
    assert_eq!(out.point(10), dense.point(100));
    assert!(out.xs().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn tiny_inputs_are_rejected() {
    let one: PointSequence = [(0.0, 0.0)].into_iter().collect();
    assert!(resample_by_arc_length(&one, 10).is_err());
    let two: PointSequence = [(0.0, 0.0), (1.0, 1.0)].into_iter().collect();
    assert!(resample_by_arc_length(&two, 1).is_err());
}
