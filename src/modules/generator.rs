use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::{
    foundation::core::PointSequence,
    foundation::error::{TrochographError, TrochographResult},
    foundation::math::{gcd_u32, lerp},
    sampler::grid::{TimeGrid, wrap_phase},
};

/// Generator modules: pure functions from time to a point, used only as the
/// first pipeline stage.
///
/// Every variant wraps its own local phase (`(u * cycles) mod 1`) for shape
/// and interpolates animated parameters (end radii, end amplitudes, line
/// growth) against the unwrapped global phase `u`, so that with `cycles > 1`
/// the shape retraces while anything cumulative keeps advancing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Generator {
    /// Two-gear spirograph (hypotrochoid/epitrochoid).
    SpirographGear(SpirographGearParams),
    /// Multi-pendulum damped-sinusoid harmonograph.
    Harmonograph(HarmonographParams),
    /// Lissajous figure.
    Lissajous(LissajousParams),
    /// Rose curve (rhodonea).
    Rose(RoseParams),
    /// Regular polygon traced edge by edge.
    Polygon(PolygonParams),
    /// Pointed star with alternating outer/inner vertices.
    Star(StarParams),
    /// Archimedean spiral.
    Spiral(SpiralParams),
    /// Straight line with stroke timing and length animation.
    Line(LineParams),
    /// Circle with optional radius animation.
    Circle(CircleParams),
    /// Ellipse with optional radius animation and tilt.
    Ellipse(EllipseParams),
}

/// Two-gear spirograph parameters.
///
/// Gear radii derive from tooth counts via the tooth pitch
/// (`circumference = teeth * pitch`), so more teeth means a proportionally
/// larger gear. The reduced tooth ratio determines lobe count and closure.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpirographGearParams {
    /// Teeth on the stationary gear.
    #[serde(default = "default_fixed_teeth")]
    pub fixed_teeth: u32,
    /// Teeth on the rolling gear.
    #[serde(default = "default_rolling_teeth")]
    pub rolling_teeth: u32,
    /// Distance per tooth; sets the physical scale.
    #[serde(default = "default_tooth_pitch")]
    pub tooth_pitch: f64,
    /// Pen hole position as a fraction of the rolling gear radius
    /// (0 = center, 1 = rim).
    #[serde(default = "default_hole_position")]
    pub hole_position: f64,
    /// Rotations of the rolling-gear center around the fixed gear per
    /// cycle; 0 auto-computes the closure count from the tooth ratio.
    #[serde(default)]
    pub rotations: u32,
    /// Roll inside the fixed gear (hypotrochoid) or outside (epitrochoid).
    #[serde(default = "default_inside")]
    pub inside: bool,
    /// How many times the complete pattern is traced.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_fixed_teeth() -> u32 {
    96
}

fn default_rolling_teeth() -> u32 {
    36
}

fn default_tooth_pitch() -> f64 {
    1.0
}

fn default_hole_position() -> f64 {
    0.7
}

fn default_inside() -> bool {
    true
}

fn default_cycles() -> f64 {
    1.0
}

impl Default for SpirographGearParams {
    fn default() -> Self {
        Self {
            fixed_teeth: default_fixed_teeth(),
            rolling_teeth: default_rolling_teeth(),
            tooth_pitch: default_tooth_pitch(),
            hole_position: default_hole_position(),
            rotations: 0,
            inside: default_inside(),
            cycles: default_cycles(),
        }
    }
}

impl SpirographGearParams {
    /// Rotations needed for closure when not configured explicitly.
    pub fn resolved_rotations(&self) -> u32 {
        if self.rotations > 0 {
            self.rotations
        } else {
            self.rolling_teeth / gcd_u32(self.fixed_teeth, self.rolling_teeth).max(1)
        }
    }

    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let theta = local * f64::from(self.resolved_rotations()) * TAU;

        let fixed_r = f64::from(self.fixed_teeth) * self.tooth_pitch / TAU;
        let rolling_r = f64::from(self.rolling_teeth) * self.tooth_pitch / TAU;
        let pen_d = self.hole_position * rolling_r;

        let (center_radius, direction) = if self.inside {
            (fixed_r - rolling_r, -1.0)
        } else {
            (fixed_r + rolling_r, 1.0)
        };
        let speed_ratio = center_radius / rolling_r;
        let pen_angle = direction * speed_ratio * theta;

        (
            center_radius * theta.cos() + pen_d * pen_angle.cos(),
            center_radius * theta.sin() + pen_d * pen_angle.sin(),
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        if self.fixed_teeth == 0 || self.rolling_teeth == 0 {
            return Err(TrochographError::config(
                "spirograph_gear tooth counts must be > 0",
            ));
        }
        if !self.tooth_pitch.is_finite() || self.tooth_pitch <= 0.0 {
            return Err(TrochographError::config(
                "spirograph_gear tooth_pitch must be finite and > 0",
            ));
        }
        if !self.hole_position.is_finite() || self.hole_position < 0.0 {
            return Err(TrochographError::config(
                "spirograph_gear hole_position must be finite and >= 0",
            ));
        }
        if self.inside && self.rolling_teeth >= self.fixed_teeth {
            return Err(TrochographError::config(
                "spirograph_gear rolling_teeth must be < fixed_teeth when rolling inside",
            ));
        }
        validate_cycles("spirograph_gear", self.cycles)
    }
}

/// One damped pendulum: `amp * sin(freq * 2π * time + phase) * exp(-decay * time)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pendulum {
    /// Oscillation frequency.
    pub freq: f64,
    /// Amplitude.
    pub amp: f64,
    /// Phase in degrees.
    #[serde(default)]
    pub phase_deg: f64,
    /// Exponential decay rate (0 = undamped).
    #[serde(default)]
    pub decay: f64,
}

impl Pendulum {
    fn sample(&self, time: f64) -> f64 {
        self.amp * (self.freq * TAU * time + self.phase_deg.to_radians()).sin()
            * (-self.decay * time).exp()
    }

    fn validate(&self, axis: &str) -> TrochographResult<()> {
        for (name, v) in [
            ("freq", self.freq),
            ("amp", self.amp),
            ("phase_deg", self.phase_deg),
            ("decay", self.decay),
        ] {
            if !v.is_finite() {
                return Err(TrochographError::config(format!(
                    "harmonograph {axis} pendulum {name} must be finite",
                )));
            }
        }
        if self.freq <= 0.0 {
            return Err(TrochographError::config(format!(
                "harmonograph {axis} pendulum freq must be > 0",
            )));
        }
        if self.decay < 0.0 {
            return Err(TrochographError::config(format!(
                "harmonograph {axis} pendulum decay must be >= 0",
            )));
        }
        Ok(())
    }
}

/// Harmonograph parameters: summed damped pendulums per axis.
///
/// Frequencies at near-integer ratios (e.g. 1.000 vs 1.002) produce slow
/// beating useful for long-duration patterns.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HarmonographParams {
    /// Pendulums summed into the x axis (1 or 2).
    pub x: Vec<Pendulum>,
    /// Pendulums summed into the y axis (1 or 2).
    pub y: Vec<Pendulum>,
    /// Simulated seconds per cycle; decay acts against this clock.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// How many times the pattern is traced.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_duration() -> f64 {
    60.0
}

impl Default for HarmonographParams {
    fn default() -> Self {
        Self {
            x: vec![Pendulum {
                freq: 2.0,
                amp: 100.0,
                phase_deg: 0.0,
                decay: 0.0,
            }],
            y: vec![Pendulum {
                freq: 3.0,
                amp: 100.0,
                phase_deg: 90.0,
                decay: 0.0,
            }],
            duration: default_duration(),
            cycles: default_cycles(),
        }
    }
}

impl HarmonographParams {
    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let time = local * self.duration;
        let x = self.x.iter().map(|p| p.sample(time)).sum();
        let y = self.y.iter().map(|p| p.sample(time)).sum();
        (x, y)
    }

    fn validate(&self) -> TrochographResult<()> {
        for (axis, pendulums) in [("x", &self.x), ("y", &self.y)] {
            if pendulums.is_empty() || pendulums.len() > 2 {
                return Err(TrochographError::config(format!(
                    "harmonograph needs 1 or 2 pendulums on the {axis} axis",
                )));
            }
            for p in pendulums {
                p.validate(axis)?;
            }
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(TrochographError::config(
                "harmonograph duration must be finite and > 0",
            ));
        }
        validate_cycles("harmonograph", self.cycles)
    }
}

/// Lissajous figure parameters: `x = A sin(a·θ + φ), y = B sin(b·θ)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LissajousParams {
    /// Integer x frequency.
    #[serde(default = "default_freq_x")]
    pub freq_x: u32,
    /// Integer y frequency.
    #[serde(default = "default_freq_y")]
    pub freq_y: u32,
    /// X amplitude.
    #[serde(default = "default_radius")]
    pub amplitude_x: f64,
    /// Y amplitude.
    #[serde(default = "default_radius")]
    pub amplitude_y: f64,
    /// Ending x amplitude for grow/shrink animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_amplitude_x: Option<f64>,
    /// Ending y amplitude for grow/shrink animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_amplitude_y: Option<f64>,
    /// Phase difference in degrees.
    #[serde(default = "default_lissajous_phase")]
    pub phase_deg: f64,
    /// How many times the complete figure is traced.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_freq_x() -> u32 {
    3
}

fn default_freq_y() -> u32 {
    2
}

fn default_radius() -> f64 {
    50.0
}

fn default_lissajous_phase() -> f64 {
    90.0
}

impl Default for LissajousParams {
    fn default() -> Self {
        Self {
            freq_x: default_freq_x(),
            freq_y: default_freq_y(),
            amplitude_x: default_radius(),
            amplitude_y: default_radius(),
            end_amplitude_x: None,
            end_amplitude_y: None,
            phase_deg: default_lissajous_phase(),
            cycles: default_cycles(),
        }
    }
}

impl LissajousParams {
    /// Traversals of θ needed for the figure to close.
    fn closure_cycles(&self) -> f64 {
        f64::from(self.freq_y / gcd_u32(self.freq_x, self.freq_y).max(1))
    }

    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let theta = local * self.closure_cycles() * TAU;
        let ax = lerp(self.amplitude_x, self.end_amplitude_x.unwrap_or(self.amplitude_x), u);
        let ay = lerp(self.amplitude_y, self.end_amplitude_y.unwrap_or(self.amplitude_y), u);
        (
            ax * (f64::from(self.freq_x) * theta + self.phase_deg.to_radians()).sin(),
            ay * (f64::from(self.freq_y) * theta).sin(),
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        if self.freq_x == 0 || self.freq_y == 0 {
            return Err(TrochographError::config(
                "lissajous frequencies must be > 0",
            ));
        }
        validate_finite("lissajous", "amplitude_x", self.amplitude_x)?;
        validate_finite("lissajous", "amplitude_y", self.amplitude_y)?;
        validate_cycles("lissajous", self.cycles)
    }
}

/// Rose curve parameters: `r = radius * cos(k·θ)` with `k = k_num / k_den`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoseParams {
    /// Petal ratio numerator.
    #[serde(default = "default_k_num")]
    pub k_num: u32,
    /// Petal ratio denominator.
    #[serde(default = "default_k_den")]
    pub k_den: u32,
    /// Maximum petal radius.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Ending radius for grow/shrink animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_radius: Option<f64>,
    /// How many times the complete rose is traced.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_k_num() -> u32 {
    3
}

fn default_k_den() -> u32 {
    1
}

impl Default for RoseParams {
    fn default() -> Self {
        Self {
            k_num: default_k_num(),
            k_den: default_k_den(),
            radius: default_radius(),
            end_radius: None,
            cycles: default_cycles(),
        }
    }
}

impl RoseParams {
    /// θ revolutions needed for the rose to close (rhodonea parity rules).
    fn closure_cycles(&self) -> f64 {
        if self.k_den == 1 {
            if self.k_num % 2 == 1 { 1.0 } else { 2.0 }
        } else {
            let g = gcd_u32(self.k_num, self.k_den).max(1);
            let (p, q) = (self.k_num / g, self.k_den / g);
            if (p * q) % 2 == 1 {
                f64::from(q)
            } else {
                f64::from(2 * q)
            }
        }
    }

    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let theta = local * self.closure_cycles() * TAU;
        let radius = lerp(self.radius, self.end_radius.unwrap_or(self.radius), u);
        let k = f64::from(self.k_num) / f64::from(self.k_den);
        let r = radius * (k * theta).cos();
        (r * theta.cos(), r * theta.sin())
    }

    fn validate(&self) -> TrochographResult<()> {
        if self.k_num == 0 || self.k_den == 0 {
            return Err(TrochographError::config("rose k_num/k_den must be > 0"));
        }
        validate_finite("rose", "radius", self.radius)?;
        validate_cycles("rose", self.cycles)
    }
}

/// Regular polygon parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PolygonParams {
    /// Number of sides (>= 3).
    #[serde(default = "default_sides")]
    pub sides: u32,
    /// Circumradius.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Ending circumradius for grow/shrink animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_radius: Option<f64>,
    /// Initial rotation in degrees.
    #[serde(default)]
    pub rotation_deg: f64,
    /// How many times the perimeter is traced.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_sides() -> u32 {
    4
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            sides: default_sides(),
            radius: default_radius(),
            end_radius: None,
            rotation_deg: 0.0,
            cycles: default_cycles(),
        }
    }
}

impl PolygonParams {
    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let radius = lerp(self.radius, self.end_radius.unwrap_or(self.radius), u);
        let sides = f64::from(self.sides);

        // Quantize into an edge index, then interpolate within the edge.
        let progress = local * sides;
        let index = (progress.floor() as u32).min(self.sides - 1);
        let frac = progress - f64::from(index);

        let rot = self.rotation_deg.to_radians();
        let a1 = rot + f64::from(index) / sides * TAU;
        let a2 = rot + f64::from(index + 1) / sides * TAU;
        (
            lerp(radius * a1.cos(), radius * a2.cos(), frac),
            lerp(radius * a1.sin(), radius * a2.sin(), frac),
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        if self.sides < 3 {
            return Err(TrochographError::config("polygon sides must be >= 3"));
        }
        validate_finite("polygon", "radius", self.radius)?;
        validate_cycles("polygon", self.cycles)
    }
}

/// Pointed star parameters (alternating outer and inner vertices).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StarParams {
    /// Number of star points.
    #[serde(default = "default_star_points")]
    pub points: u32,
    /// Radius to outer points.
    #[serde(default = "default_radius")]
    pub outer_radius: f64,
    /// Radius to inner vertices; 0 picks 38.2% of the outer radius.
    #[serde(default)]
    pub inner_radius: f64,
    /// Ending outer radius for animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_outer_radius: Option<f64>,
    /// Ending inner radius for animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_inner_radius: Option<f64>,
    /// Initial rotation in degrees (-90 points the star up).
    #[serde(default = "default_star_rotation")]
    pub rotation_deg: f64,
    /// How many times the perimeter is traced.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_star_points() -> u32 {
    5
}

fn default_star_rotation() -> f64 {
    -90.0
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            points: default_star_points(),
            outer_radius: default_radius(),
            inner_radius: 0.0,
            end_outer_radius: None,
            end_inner_radius: None,
            rotation_deg: default_star_rotation(),
            cycles: default_cycles(),
        }
    }
}

impl StarParams {
    fn resolved_inner(&self) -> f64 {
        if self.inner_radius > 0.0 {
            self.inner_radius
        } else {
            self.outer_radius * 0.382
        }
    }

    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let inner = self.resolved_inner();
        let outer = lerp(self.outer_radius, self.end_outer_radius.unwrap_or(self.outer_radius), u);
        let inner = lerp(inner, self.end_inner_radius.unwrap_or(inner), u);

        let total = self.points * 2;
        let total_f = f64::from(total);
        let progress = local * total_f;
        let index = (progress.floor() as u32).min(total - 1);
        let frac = progress - f64::from(index);

        let (r1, r2) = if index % 2 == 0 {
            (outer, inner)
        } else {
            (inner, outer)
        };
        let rot = self.rotation_deg.to_radians();
        let a1 = rot + f64::from(index) / total_f * TAU;
        let a2 = rot + f64::from(index + 1) / total_f * TAU;
        (
            lerp(r1 * a1.cos(), r2 * a2.cos(), frac),
            lerp(r1 * a1.sin(), r2 * a2.sin(), frac),
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        if self.points < 2 {
            return Err(TrochographError::config("star points must be >= 2"));
        }
        if !self.outer_radius.is_finite() || self.outer_radius <= 0.0 {
            return Err(TrochographError::config(
                "star outer_radius must be finite and > 0",
            ));
        }
        if !self.inner_radius.is_finite() || self.inner_radius < 0.0 {
            return Err(TrochographError::config(
                "star inner_radius must be finite and >= 0",
            ));
        }
        validate_cycles("star", self.cycles)
    }
}

/// Archimedean spiral parameters: radius and angle both grow within each
/// traced cycle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpiralParams {
    /// Starting radius.
    #[serde(default)]
    pub start_radius: f64,
    /// Ending radius.
    #[serde(default = "default_radius")]
    pub end_radius: f64,
    /// Number of spiral turns per cycle.
    #[serde(default = "default_turns")]
    pub turns: f64,
    /// 1 winds counter-clockwise, -1 clockwise.
    #[serde(default = "default_direction")]
    pub direction: i8,
    /// How many times the spiral is traced.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_turns() -> f64 {
    3.0
}

fn default_direction() -> i8 {
    1
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            start_radius: 0.0,
            end_radius: default_radius(),
            turns: default_turns(),
            direction: default_direction(),
            cycles: default_cycles(),
        }
    }
}

impl SpiralParams {
    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let r = lerp(self.start_radius, self.end_radius, local);
        let angle = f64::from(self.direction) * local * self.turns * TAU;
        (r * angle.cos(), r * angle.sin())
    }

    fn validate(&self) -> TrochographResult<()> {
        validate_finite("spiral", "start_radius", self.start_radius)?;
        validate_finite("spiral", "end_radius", self.end_radius)?;
        if !self.turns.is_finite() || self.turns <= 0.0 {
            return Err(TrochographError::config(
                "spiral turns must be finite and > 0",
            ));
        }
        if self.direction != 1 && self.direction != -1 {
            return Err(TrochographError::config("spiral direction must be 1 or -1"));
        }
        validate_cycles("spiral", self.cycles)
    }
}

/// Where the line pen parks while idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleAt {
    /// Idle first, then draw (default).
    #[default]
    Start,
    /// Draw first, then idle at the far end.
    End,
}

/// Line generator parameters.
///
/// With `stroke_time < 1` the pen draws only during that fraction of each
/// cycle and is otherwise parked, producing discrete dash-like strokes when
/// chained with a rotation transform.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineParams {
    /// Line length (shorthand for `end_x` when the start is the origin).
    #[serde(default = "default_line_length")]
    pub length: f64,
    /// Ending length for grow/shrink animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_length: Option<f64>,
    /// Line start point x.
    #[serde(default)]
    pub start_x: f64,
    /// Line start point y.
    #[serde(default)]
    pub start_y: f64,
    /// Line end point x (defaults to `length`); sets the direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_x: Option<f64>,
    /// Line end point y.
    #[serde(default)]
    pub end_y: f64,
    /// How many times the line is drawn (pen returns to start each cycle).
    #[serde(default = "default_cycles")]
    pub cycles: f64,
    /// Fraction of each cycle spent drawing, clamped to [0.001, 1].
    #[serde(default = "default_stroke_time")]
    pub stroke_time: f64,
    /// Where the pen parks during idle time.
    #[serde(default)]
    pub idle_at: IdleAt,
}

fn default_line_length() -> f64 {
    100.0
}

fn default_stroke_time() -> f64 {
    1.0
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            length: default_line_length(),
            end_length: None,
            start_x: 0.0,
            start_y: 0.0,
            end_x: None,
            end_y: 0.0,
            cycles: default_cycles(),
            stroke_time: default_stroke_time(),
            idle_at: IdleAt::Start,
        }
    }
}

impl LineParams {
    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let current_length = lerp(self.length, self.end_length.unwrap_or(self.length), u);

        let stroke = self.stroke_time.clamp(0.001, 1.0);
        let draw_progress = if stroke >= 1.0 {
            local
        } else {
            let idle = 1.0 - stroke;
            match self.idle_at {
                IdleAt::End => {
                    if local < stroke {
                        local / stroke
                    } else {
                        1.0
                    }
                }
                IdleAt::Start => {
                    if local < idle {
                        0.0
                    } else {
                        (local - idle) / stroke
                    }
                }
            }
        };

        let dx = self.end_x.unwrap_or(self.length) - self.start_x;
        let dy = self.end_y - self.start_y;
        let norm = dx.hypot(dy);
        let (ux, uy) = if norm > 0.0 {
            (dx / norm, dy / norm)
        } else {
            (1.0, 0.0)
        };
        (
            self.start_x + draw_progress * current_length * ux,
            self.start_y + draw_progress * current_length * uy,
        )
    }

    fn validate(&self) -> TrochographResult<()> {
        for (name, v) in [
            ("length", self.length),
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("end_y", self.end_y),
        ] {
            validate_finite("line", name, v)?;
        }
        if !self.stroke_time.is_finite() || self.stroke_time <= 0.0 {
            return Err(TrochographError::config(
                "line stroke_time must be finite and > 0",
            ));
        }
        validate_cycles("line", self.cycles)
    }
}

/// Circle generator parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircleParams {
    /// Circle radius (starting radius when animating).
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Ending radius for grow/shrink animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_radius: Option<f64>,
    /// How many revolutions are traced.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            end_radius: None,
            cycles: default_cycles(),
        }
    }
}

impl CircleParams {
    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let r = lerp(self.radius, self.end_radius.unwrap_or(self.radius), u);
        let angle = local * TAU;
        (r * angle.cos(), r * angle.sin())
    }

    fn validate(&self) -> TrochographResult<()> {
        validate_finite("circle", "radius", self.radius)?;
        validate_cycles("circle", self.cycles)
    }
}

/// Ellipse generator parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EllipseParams {
    /// Horizontal semi-axis.
    #[serde(default = "default_radius")]
    pub radius_x: f64,
    /// Vertical semi-axis.
    #[serde(default = "default_radius_y")]
    pub radius_y: f64,
    /// Ending horizontal semi-axis for animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_radius_x: Option<f64>,
    /// Ending vertical semi-axis for animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_radius_y: Option<f64>,
    /// Tilt of the ellipse in degrees.
    #[serde(default)]
    pub rotation_deg: f64,
    /// How many revolutions are traced.
    #[serde(default = "default_cycles")]
    pub cycles: f64,
}

fn default_radius_y() -> f64 {
    30.0
}

impl Default for EllipseParams {
    fn default() -> Self {
        Self {
            radius_x: default_radius(),
            radius_y: default_radius_y(),
            end_radius_x: None,
            end_radius_y: None,
            rotation_deg: 0.0,
            cycles: default_cycles(),
        }
    }
}

impl EllipseParams {
    fn point_at(&self, u: f64) -> (f64, f64) {
        let local = wrap_phase(u, self.cycles);
        let rx = lerp(self.radius_x, self.end_radius_x.unwrap_or(self.radius_x), u);
        let ry = lerp(self.radius_y, self.end_radius_y.unwrap_or(self.radius_y), u);
        let angle = local * TAU;
        let (x, y) = (rx * angle.cos(), ry * angle.sin());

        let tilt = self.rotation_deg.to_radians();
        let (sin_t, cos_t) = tilt.sin_cos();
        (x * cos_t - y * sin_t, x * sin_t + y * cos_t)
    }

    fn validate(&self) -> TrochographResult<()> {
        validate_finite("ellipse", "radius_x", self.radius_x)?;
        validate_finite("ellipse", "radius_y", self.radius_y)?;
        validate_cycles("ellipse", self.cycles)
    }
}

impl Generator {
    /// How many times this generator's natural period is traversed over the
    /// full grid; feeds [`crate::combined_span`].
    pub fn cycles(&self) -> f64 {
        match self {
            Self::SpirographGear(p) => p.cycles,
            Self::Harmonograph(p) => p.cycles,
            Self::Lissajous(p) => p.cycles,
            Self::Rose(p) => p.cycles,
            Self::Polygon(p) => p.cycles,
            Self::Star(p) => p.cycles,
            Self::Spiral(p) => p.cycles,
            Self::Line(p) => p.cycles,
            Self::Circle(p) => p.cycles,
            Self::Ellipse(p) => p.cycles,
        }
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> TrochographResult<()> {
        match self {
            Self::SpirographGear(p) => p.validate(),
            Self::Harmonograph(p) => p.validate(),
            Self::Lissajous(p) => p.validate(),
            Self::Rose(p) => p.validate(),
            Self::Polygon(p) => p.validate(),
            Self::Star(p) => p.validate(),
            Self::Spiral(p) => p.validate(),
            Self::Line(p) => p.validate(),
            Self::Circle(p) => p.validate(),
            Self::Ellipse(p) => p.validate(),
        }
    }

    /// Closed-form point at unwrapped global phase `u`.
    pub fn point_at(&self, u: f64) -> (f64, f64) {
        match self {
            Self::SpirographGear(p) => p.point_at(u),
            Self::Harmonograph(p) => p.point_at(u),
            Self::Lissajous(p) => p.point_at(u),
            Self::Rose(p) => p.point_at(u),
            Self::Polygon(p) => p.point_at(u),
            Self::Star(p) => p.point_at(u),
            Self::Spiral(p) => p.point_at(u),
            Self::Line(p) => p.point_at(u),
            Self::Circle(p) => p.point_at(u),
            Self::Ellipse(p) => p.point_at(u),
        }
    }

    /// Evaluate the generator over the whole grid.
    ///
    /// Pure function of configured parameters and time: independent of
    /// pipeline position, which is why generators are only valid as the
    /// first stage.
    pub fn evaluate(&self, grid: &TimeGrid) -> PointSequence {
        let (xs, ys) = (0..grid.len())
            .into_par_iter()
            .map(|i| self.point_at(grid.unwrapped(i)))
            .unzip();
        PointSequence::from_buffers(xs, ys)
    }
}

fn validate_cycles(module: &str, cycles: f64) -> TrochographResult<()> {
    if !cycles.is_finite() || cycles <= 0.0 {
        return Err(TrochographError::config(format!(
            "{module} cycles must be finite and > 0",
        )));
    }
    Ok(())
}

fn validate_finite(module: &str, name: &str, v: f64) -> TrochographResult<()> {
    if !v.is_finite() {
        return Err(TrochographError::config(format!(
            "{module} {name} must be finite",
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/modules/generator.rs"]
mod tests;
