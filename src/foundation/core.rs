use crate::foundation::error::{TrochographError, TrochographResult};

pub use kurbo::{Point, Rect, Vec2};

/// An ordered sequence of (x, y) pairs, index-aligned 1:1 with a
/// [`crate::TimeGrid`] at every pipeline stage.
///
/// Stored structure-of-arrays (one contiguous buffer of x, one of y) so
/// per-point stage maps stay cache-friendly and trivially parallel. No
/// implicit closing segment is ever added: the first and last point are not
/// an implied loop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSequence {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PointSequence {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            xs: Vec::with_capacity(n),
            ys: Vec::with_capacity(n),
        }
    }

    /// Build from parallel x/y buffers.
    pub fn from_xy(xs: Vec<f64>, ys: Vec<f64>) -> TrochographResult<Self> {
        if xs.len() != ys.len() {
            return Err(TrochographError::length_mismatch(format!(
                "x/y buffers differ in length ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        Ok(Self { xs, ys })
    }

    /// Equal-length buffers produced by an unzip; length equality is the
    /// caller's structural guarantee.
    pub(crate) fn from_buffers(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    /// The same point repeated `n` times (degenerate pipeline start).
    pub fn repeated(p: Point, n: usize) -> Self {
        Self {
            xs: vec![p.x; n],
            ys: vec![p.y; n],
        }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn push(&mut self, p: Point) {
        self.xs.push(p.x);
        self.ys.push(p.y);
    }

    /// Point at index `i`. Panics if out of bounds, like slice indexing.
    pub fn point(&self, i: usize) -> Point {
        Point::new(self.xs[i], self.ys[i])
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Point::new(x, y))
    }

    /// Shift every point by `v` in place.
    pub fn offset(&mut self, v: Vec2) {
        for x in &mut self.xs {
            *x += v.x;
        }
        for y in &mut self.ys {
            *y += v.y;
        }
    }

    /// Drop points with a non-finite coordinate, returning how many were
    /// removed. Index alignment with a grid is lost, so this is only valid
    /// after the final pipeline stage.
    pub fn retain_finite(&mut self) -> usize {
        let before = self.xs.len();
        let mut keep = 0usize;
        for i in 0..before {
            if self.xs[i].is_finite() && self.ys[i].is_finite() {
                self.xs[keep] = self.xs[i];
                self.ys[keep] = self.ys[i];
                keep += 1;
            }
        }
        self.xs.truncate(keep);
        self.ys.truncate(keep);
        before - keep
    }

    /// Axis-aligned bounding box, or `None` when empty.
    pub fn bounding_box(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for i in 0..self.len() {
            min_x = min_x.min(self.xs[i]);
            max_x = max_x.max(self.xs[i]);
            min_y = min_y.min(self.ys[i]);
            max_y = max_y.max(self.ys[i]);
        }
        Some(Rect::new(min_x, min_y, max_x, max_y))
    }
}

impl FromIterator<(f64, f64)> for PointSequence {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (xs, ys) = iter.into_iter().unzip();
        Self { xs, ys }
    }
}

/// The global drawing frame: origin point, canvas bounds, margin and
/// styling.
///
/// Established once before the pipeline runs and never mutated by any
/// module; all modules operate in the same untransformed coordinate space
/// and only the renderer maps into canvas coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawingFrame {
    /// Canvas width in canvas units.
    #[serde(default = "default_canvas_side")]
    pub width: f64,
    /// Canvas height in canvas units.
    #[serde(default = "default_canvas_side")]
    pub height: f64,
    /// Margin as a fraction of the canvas size.
    #[serde(default = "default_margin")]
    pub margin: f64,
    /// Stroke width for the rendered path.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Stroke color (hex).
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    /// Background fill color (hex).
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Global start point x: the single anchor for absolute position.
    #[serde(default)]
    pub start_x: f64,
    /// Global start point y.
    #[serde(default)]
    pub start_y: f64,
}

fn default_canvas_side() -> f64 {
    800.0
}

fn default_margin() -> f64 {
    0.1
}

fn default_stroke_width() -> f64 {
    0.5
}

fn default_stroke_color() -> String {
    "#000000".to_string()
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

impl Default for DrawingFrame {
    fn default() -> Self {
        Self {
            width: default_canvas_side(),
            height: default_canvas_side(),
            margin: default_margin(),
            stroke_width: default_stroke_width(),
            stroke_color: default_stroke_color(),
            background_color: default_background_color(),
            start_x: 0.0,
            start_y: 0.0,
        }
    }
}

impl DrawingFrame {
    /// The global origin anchoring absolute position for the whole run.
    pub fn origin(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// Validate frame invariants.
    pub fn validate(&self) -> TrochographResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(TrochographError::config(
                "output width must be finite and > 0",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(TrochographError::config(
                "output height must be finite and > 0",
            ));
        }
        if !self.margin.is_finite() || self.margin < 0.0 || self.margin >= 0.5 {
            return Err(TrochographError::config(
                "output margin must be in [0, 0.5)",
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TrochographError::config(
                "output stroke_width must be finite and > 0",
            ));
        }
        if !self.start_x.is_finite() || !self.start_y.is_finite() {
            return Err(TrochographError::config(
                "output start_x/start_y must be finite",
            ));
        }
        Ok(())
    }
}

/// Sampling settings for one pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sampling {
    /// Dense sample count for the pipeline run.
    #[serde(default = "default_initial_samples")]
    pub initial_samples: usize,
    /// Output sample count after resampling.
    #[serde(default = "default_output_samples")]
    pub output_samples: usize,
    /// Arc-length reparameterization on/off (off = stride subsample).
    #[serde(default = "default_use_arc_length")]
    pub use_arc_length: bool,
}

fn default_initial_samples() -> usize {
    100_000
}

fn default_output_samples() -> usize {
    10_000
}

fn default_use_arc_length() -> bool {
    true
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            initial_samples: default_initial_samples(),
            output_samples: default_output_samples(),
            use_arc_length: default_use_arc_length(),
        }
    }
}

impl Sampling {
    /// Validate sampling invariants.
    pub fn validate(&self) -> TrochographResult<()> {
        if self.initial_samples < 2 {
            return Err(TrochographError::config(
                "sampling initial_samples must be >= 2",
            ));
        }
        if self.output_samples < 2 {
            return Err(TrochographError::config(
                "sampling output_samples must be >= 2",
            ));
        }
        if self.output_samples > self.initial_samples {
            return Err(TrochographError::config(
                "sampling output_samples must be <= initial_samples",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
