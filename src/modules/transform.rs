use rayon::prelude::*;

use crate::{
    foundation::core::{Point, PointSequence},
    foundation::error::{TrochographError, TrochographResult},
    foundation::math::lerp,
    sampler::grid::{TimeGrid, wrap_phase},
};

/// Transform modules: per-point maps over the running coordinate frame.
///
/// Sliding transforms (translation, arc-slide, spiral-arc) carry the input
/// shape rigidly along a path; rotation spins it about a fixed origin; bend
/// warps the geometry itself. Anything cumulative (rotation angle, slide
/// distance) advances with the unwrapped global phase, never re-tracing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform {
    /// Rotate about a configurable origin, linearly over the drawing.
    Rotation(RotationParams),
    /// Slide along a straight line, single pass.
    Translation(TranslationParams),
    /// Slide rigidly along a circular arc.
    ArcSlide(ArcSlideParams),
    /// Warp x into angle and y into radius (polar remap).
    Bend(BendParams),
    /// Slide along an arc whose radius grows over the drawing.
    SpiralArc(SpiralArcParams),
}

/// Rotation parameters.
///
/// The angle grows linearly with the unwrapped global phase, reaching
/// `total_degrees` at the end of the grid regardless of how many generator
/// cycles occurred: the rotation smears the pattern across its full
/// angular range instead of retracing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RotationParams {
    /// Total rotation over the full drawing in degrees.
    #[serde(default = "default_total_degrees")]
    pub total_degrees: f64,
    /// Center of rotation x.
    #[serde(default)]
    pub origin_x: f64,
    /// Center of rotation y.
    #[serde(default)]
    pub origin_y: f64,
}

fn default_total_degrees() -> f64 {
    360.0
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            total_degrees: default_total_degrees(),
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

impl RotationParams {
    fn map_point(&self, p: Point, u: f64) -> (f64, f64) {
        let theta = u * self.total_degrees.to_radians();
        let (sin_t, cos_t) = theta.sin_cos();
        let (rx, ry) = (p.x - self.origin_x, p.y - self.origin_y);
        (
            self.origin_x + rx * cos_t - ry * sin_t,
            self.origin_y + rx * sin_t + ry * cos_t,
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        for (name, v) in [
            ("total_degrees", self.total_degrees),
            ("origin_x", self.origin_x),
            ("origin_y", self.origin_y),
        ] {
            if !v.is_finite() {
                return Err(TrochographError::config(format!(
                    "rotation {name} must be finite",
                )));
            }
        }
        Ok(())
    }
}

/// Translation parameters.
///
/// The offset grows linearly from `start` to `end` over the drawing, single
/// pass only; it never oscillates. A back-and-forth sweep is obtained by
/// composing two translation stages with opposite directions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TranslationParams {
    /// Starting offset x.
    #[serde(default)]
    pub start_x: f64,
    /// Starting offset y.
    #[serde(default)]
    pub start_y: f64,
    /// Ending offset x.
    #[serde(default = "default_translation_end_x")]
    pub end_x: f64,
    /// Ending offset y.
    #[serde(default)]
    pub end_y: f64,
}

fn default_translation_end_x() -> f64 {
    100.0
}

impl Default for TranslationParams {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            start_y: 0.0,
            end_x: default_translation_end_x(),
            end_y: 0.0,
        }
    }
}

impl TranslationParams {
    fn map_point(&self, p: Point, u: f64) -> (f64, f64) {
        (
            p.x + lerp(self.start_x, self.end_x, u),
            p.y + lerp(self.start_y, self.end_y, u),
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        for (name, v) in [
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("end_x", self.end_x),
            ("end_y", self.end_y),
        ] {
            if !v.is_finite() {
                return Err(TrochographError::config(format!(
                    "translation {name} must be finite",
                )));
            }
        }
        let (dx, dy) = (self.end_x - self.start_x, self.end_y - self.start_y);
        if dx == 0.0 && dy == 0.0 {
            return Err(TrochographError::config(
                "translation direction vector must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Arc-slide parameters.
///
/// The whole input shape rides along a circular arc as a rigid body; its
/// internal geometry is unchanged. An input line segment stays a straight
/// segment, in contrast with [`BendParams`], which turns it into an arc.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcSlideParams {
    /// Arc radius.
    #[serde(default = "default_arc_radius")]
    pub radius: f64,
    /// Starting angle in degrees (0 = right, 90 = up).
    #[serde(default)]
    pub start_angle: f64,
    /// Total swept angle in degrees (positive = counter-clockwise).
    #[serde(default = "default_arc_sweep")]
    pub sweep_angle: f64,
    /// Arc center x.
    #[serde(default)]
    pub center_x: f64,
    /// Arc center y.
    #[serde(default)]
    pub center_y: f64,
    /// How many times the arc is traversed.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_arc_radius() -> f64 {
    100.0
}

fn default_arc_sweep() -> f64 {
    180.0
}

fn default_cycles() -> f64 {
    1.0
}

impl Default for ArcSlideParams {
    fn default() -> Self {
        Self {
            radius: default_arc_radius(),
            start_angle: 0.0,
            sweep_angle: default_arc_sweep(),
            center_x: 0.0,
            center_y: 0.0,
            cycles: default_cycles(),
        }
    }
}

impl ArcSlideParams {
    fn map_point(&self, p: Point, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let angle = self.start_angle.to_radians() + local * self.sweep_angle.to_radians();
        (
            p.x + self.center_x + self.radius * angle.cos(),
            p.y + self.center_y + self.radius * angle.sin(),
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        for (name, v) in [
            ("radius", self.radius),
            ("start_angle", self.start_angle),
            ("sweep_angle", self.sweep_angle),
            ("center_x", self.center_x),
            ("center_y", self.center_y),
        ] {
            if !v.is_finite() {
                return Err(TrochographError::config(format!(
                    "arc_slide {name} must be finite",
                )));
            }
        }
        if !self.cycles.is_finite() || self.cycles <= 0.0 {
            return Err(TrochographError::config(
                "arc_slide cycles must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Bend parameters.
///
/// Reinterprets each input point's x as an angle along the arc and y as a
/// radial offset, then remaps to Cartesian. This is a warp, not a slide:
/// pairwise distances change, and a y = 0 input line lands exactly on the
/// circle of the configured radius.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BendParams {
    /// Base radius (where y = 0 maps).
    #[serde(default = "default_bend_radius")]
    pub radius: f64,
    /// Angle in degrees where x = 0 maps.
    #[serde(default)]
    pub start_angle: f64,
    /// Angular range in degrees that the x range maps into.
    #[serde(default = "default_bend_sweep")]
    pub sweep_angle: f64,
    /// Input x range mapped across the sweep; 0 auto-fits to the arc length
    /// `radius * |sweep|`.
    #[serde(default)]
    pub x_range: f64,
    /// Bend center x.
    #[serde(default)]
    pub center_x: f64,
    /// Bend center y.
    #[serde(default)]
    pub center_y: f64,
    /// 1 bends outward (y away from center), -1 inward.
    #[serde(default = "default_direction")]
    pub direction: i8,
}

fn default_bend_radius() -> f64 {
    200.0
}

fn default_bend_sweep() -> f64 {
    90.0
}

fn default_direction() -> i8 {
    1
}

impl Default for BendParams {
    fn default() -> Self {
        Self {
            radius: default_bend_radius(),
            start_angle: 0.0,
            sweep_angle: default_bend_sweep(),
            x_range: 0.0,
            center_x: 0.0,
            center_y: 0.0,
            direction: default_direction(),
        }
    }
}

impl BendParams {
    /// Effective x range: configured, or the arc length when auto.
    pub fn resolved_x_range(&self) -> f64 {
        if self.x_range > 0.0 {
            self.x_range
        } else {
            self.radius * self.sweep_angle.to_radians().abs()
        }
    }

    fn map_point(&self, p: Point, _u: f64) -> (f64, f64) {
        let normalized_x = p.x / self.resolved_x_range();
        let angle = self.start_angle.to_radians() + normalized_x * self.sweep_angle.to_radians();
        let r = self.radius + f64::from(self.direction) * p.y;
        (
            self.center_x + r * angle.cos(),
            self.center_y + r * angle.sin(),
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        for (name, v) in [
            ("radius", self.radius),
            ("start_angle", self.start_angle),
            ("sweep_angle", self.sweep_angle),
            ("x_range", self.x_range),
            ("center_x", self.center_x),
            ("center_y", self.center_y),
        ] {
            if !v.is_finite() {
                return Err(TrochographError::config(format!(
                    "bend {name} must be finite",
                )));
            }
        }
        if self.radius <= 0.0 {
            return Err(TrochographError::config("bend radius must be > 0"));
        }
        if self.direction != 1 && self.direction != -1 {
            return Err(TrochographError::config("bend direction must be 1 or -1"));
        }
        if self.resolved_x_range() <= 0.0 {
            return Err(TrochographError::config(
                "bend sweep_angle must be non-zero when x_range is auto",
            ));
        }
        Ok(())
    }
}

/// Spiral-arc parameters: an arc-slide whose radius grows linearly over the
/// drawing from `inner_radius` to `outer_radius`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpiralArcParams {
    /// Starting radius.
    #[serde(default = "default_inner_radius")]
    pub inner_radius: f64,
    /// Ending radius.
    #[serde(default = "default_outer_radius")]
    pub outer_radius: f64,
    /// Starting angle in degrees.
    #[serde(default)]
    pub start_angle: f64,
    /// Total swept angle in degrees.
    #[serde(default = "default_spiral_arc_sweep")]
    pub sweep_angle: f64,
    /// Spiral center x.
    #[serde(default)]
    pub center_x: f64,
    /// Spiral center y.
    #[serde(default)]
    pub center_y: f64,
    /// Pattern repetitions contributed to the combined span.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_inner_radius() -> f64 {
    50.0
}

fn default_outer_radius() -> f64 {
    150.0
}

fn default_spiral_arc_sweep() -> f64 {
    720.0
}

impl Default for SpiralArcParams {
    fn default() -> Self {
        Self {
            inner_radius: default_inner_radius(),
            outer_radius: default_outer_radius(),
            start_angle: 0.0,
            sweep_angle: default_spiral_arc_sweep(),
            center_x: 0.0,
            center_y: 0.0,
            cycles: default_cycles(),
        }
    }
}

impl SpiralArcParams {
    fn map_point(&self, p: Point, u: f64) -> (f64, f64) {
        let angle = self.start_angle.to_radians() + u * self.sweep_angle.to_radians();
        let radius = lerp(self.inner_radius, self.outer_radius, u);
        (
            p.x + self.center_x + radius * angle.cos(),
            p.y + self.center_y + radius * angle.sin(),
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        for (name, v) in [
            ("inner_radius", self.inner_radius),
            ("outer_radius", self.outer_radius),
            ("start_angle", self.start_angle),
            ("sweep_angle", self.sweep_angle),
            ("center_x", self.center_x),
            ("center_y", self.center_y),
        ] {
            if !v.is_finite() {
                return Err(TrochographError::config(format!(
                    "spiral_arc {name} must be finite",
                )));
            }
        }
        if !self.cycles.is_finite() || self.cycles <= 0.0 {
            return Err(TrochographError::config(
                "spiral_arc cycles must be finite and > 0",
            ));
        }
        Ok(())
    }
}

impl Transform {
    /// Cycle contribution to the combined span, for the variants that carry
    /// one.
    pub fn cycles(&self) -> Option<f64> {
        match self {
            Self::ArcSlide(p) => Some(p.cycles),
            Self::SpiralArc(p) => Some(p.cycles),
            Self::Rotation(_) | Self::Translation(_) | Self::Bend(_) => None,
        }
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> TrochographResult<()> {
        match self {
            Self::Rotation(p) => p.validate(),
            Self::Translation(p) => p.validate(),
            Self::ArcSlide(p) => p.validate(),
            Self::Bend(p) => p.validate(),
            Self::SpiralArc(p) => p.validate(),
        }
    }

    /// Map a single point at unwrapped global phase `u`.
    pub fn map_point(&self, p: Point, u: f64) -> (f64, f64) {
        match self {
            Self::Rotation(params) => params.map_point(p, u),
            Self::Translation(params) => params.map_point(p, u),
            Self::ArcSlide(params) => params.map_point(p, u),
            Self::Bend(params) => params.map_point(p, u),
            Self::SpiralArc(params) => params.map_point(p, u),
        }
    }

    /// Apply the transform to a whole sequence, producing a new sequence of
    /// the same length. Operates on the running coordinate frame: the input
    /// points are whatever the previous stage produced, untouched. The
    /// sequence must be index-aligned with `grid`.
    pub fn apply(&self, points: &PointSequence, grid: &TimeGrid) -> PointSequence {
        let (xs, ys) = (0..points.len())
            .into_par_iter()
            .map(|i| self.map_point(points.point(i), grid.unwrapped(i)))
            .unzip();
        PointSequence::from_buffers(xs, ys)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/modules/transform.rs"]
mod tests;
