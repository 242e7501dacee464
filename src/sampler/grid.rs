use crate::foundation::error::{TrochographError, TrochographResult};
use crate::foundation::math::{approx_ratio, gcd_u64, lcm_u64};

/// Denominator bound when rationalizing fractional cycle counts.
const MAX_CYCLE_DENOMINATOR: u64 = 1000;

/// The normalized time grid over which all modules evaluate.
///
/// Time values are uniform over the half-open interval `[0, span)`, where
/// `span` is the pipeline's combined cycle count. Every module sees the same
/// grid; what differs per module is how it splits each value into an
/// unwrapped global phase (for anything cumulative: rotation angle,
/// translation distance, radius animation) and a wrapped local phase (for
/// shape). Naively repeating identical samples per cycle would produce no
/// visual change; advancing the global phase while the local phase wraps is
/// what produces moiré interference.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    values: Vec<f64>,
    span: f64,
}

impl TimeGrid {
    /// Uniform grid of `samples` values over `[0, span)`, endpoint excluded.
    pub fn uniform(samples: usize, span: f64) -> TrochographResult<Self> {
        if samples < 2 {
            return Err(TrochographError::config("time grid needs >= 2 samples"));
        }
        if !span.is_finite() || span <= 0.0 {
            return Err(TrochographError::config(
                "time grid span must be finite and > 0",
            ));
        }
        let n = samples as f64;
        let values = (0..samples).map(|i| span * (i as f64) / n).collect();
        Ok(Self { values, span })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total span of the grid (the combined cycle count).
    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Unwrapped global phase at index `i`, in `[0, 1)`: the fraction of the
    /// whole drawing completed. Monotone over the grid.
    pub fn unwrapped(&self, i: usize) -> f64 {
        self.values[i] / self.span
    }
}

/// Wrapped local phase: `(u * cycles) mod 1`.
///
/// `u` is an unwrapped global phase in `[0, 1)`; the result is the position
/// within the current cycle. Shape evaluation uses this; anything cumulative
/// must keep using `u` directly.
#[inline]
pub fn wrap_phase(u: f64, cycles: f64) -> f64 {
    (u * cycles).fract()
}

/// Combined cycle span of a pipeline: the least span after which every
/// module's pattern closes.
///
/// Each cycle count is approximated by a bounded-denominator rational and
/// the fraction LCM is taken (`lcm` of numerators over `gcd` of
/// denominators), so e.g. cycles of 2.5 and 3 close jointly after 15.
pub fn combined_span(cycles: impl IntoIterator<Item = f64>) -> f64 {
    let mut iter = cycles.into_iter();
    let Some(first) = iter.next() else {
        return 1.0;
    };
    let (mut num, mut den) = approx_ratio(first.abs(), MAX_CYCLE_DENOMINATOR);
    for c in iter {
        let (n, d) = approx_ratio(c.abs(), MAX_CYCLE_DENOMINATOR);
        num = lcm_u64(num, n).max(1);
        den = gcd_u64(den, d).max(1);
    }
    (num as f64) / (den as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/sampler/grid.rs"]
mod tests;
