use crate::{
    foundation::core::{Point, PointSequence},
    foundation::error::{TrochographError, TrochographResult},
    foundation::math::lerp,
};

/// Cumulative Euclidean path length at each index, starting at 0.
/// Monotonically non-decreasing for finite input.
pub fn cumulative_lengths(points: &PointSequence) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(points.len());
    let mut total = 0.0;
    lengths.push(0.0);
    for i in 1..points.len() {
        let dx = points.xs()[i] - points.xs()[i - 1];
        let dy = points.ys()[i] - points.ys()[i - 1];
        total += dx.hypot(dy);
        lengths.push(total);
    }
    lengths
}

/// Resample `points` at uniform arc-length intervals.
///
/// Target lengths are evenly spaced from 0 to the total length inclusive,
/// so the first and last output points equal the first and last dense
/// points. Zero-length segments (numerically coincident dense samples) are
/// skipped rather than dividing by zero. A degenerate path (zero or
/// non-finite total length) falls back to stride sampling with a non-fatal
/// warning.
pub fn resample_by_arc_length(
    points: &PointSequence,
    output_samples: usize,
) -> TrochographResult<PointSequence> {
    if output_samples < 2 {
        return Err(TrochographError::config("output_samples must be >= 2"));
    }
    if points.len() < 2 {
        return Err(TrochographError::numeric(
            "resampling needs at least two dense points",
        ));
    }

    let lengths = cumulative_lengths(points);
    let total = *lengths.last().unwrap_or(&0.0);
    if !total.is_finite() || total <= 0.0 {
        tracing::warn!(
            total,
            "degenerate arc length; falling back to stride sampling"
        );
        return stride_subsample(points, output_samples);
    }

    let mut out = PointSequence::with_capacity(output_samples);
    let last = output_samples - 1;
    for j in 0..output_samples {
        let target = total * (j as f64) / (last as f64);

        // First index whose cumulative length reaches the target.
        let idx = lengths.partition_point(|&l| l < target).min(points.len() - 1);
        if idx == 0 {
            out.push(points.point(0));
            continue;
        }

        let (lo, hi) = (idx - 1, idx);
        let segment = lengths[hi] - lengths[lo];
        if segment > 0.0 {
            let t = (target - lengths[lo]) / segment;
            out.push(Point::new(
                lerp(points.xs()[lo], points.xs()[hi], t),
                lerp(points.ys()[lo], points.ys()[hi], t),
            ));
        } else {
            // Coincident dense samples; take the segment start.
            out.push(points.point(lo));
        }
    }
    Ok(out)
}

/// Plain stride-based subsample over the inclusive index range, used when
/// arc-length resampling is disabled or degenerate. Endpoints are
/// preserved.
pub fn stride_subsample(
    points: &PointSequence,
    output_samples: usize,
) -> TrochographResult<PointSequence> {
    if output_samples < 2 {
        return Err(TrochographError::config("output_samples must be >= 2"));
    }
    if points.len() < 2 {
        return Err(TrochographError::numeric(
            "subsampling needs at least two dense points",
        ));
    }

    let last_index = (points.len() - 1) as f64;
    let last = (output_samples - 1) as f64;
    let mut out = PointSequence::with_capacity(output_samples);
    for j in 0..output_samples {
        let idx = (last_index * (j as f64) / last).floor() as usize;
        out.push(points.point(idx));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/resample/arc_length.rs"]
mod tests;
