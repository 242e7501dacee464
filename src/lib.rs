//! Trochograph is a modular parametric-curve engine.
//!
//! It renders mathematical curves by composing independent modules into a
//! pipeline: generators produce a parametric point sequence from scratch
//! (spirograph gears, harmonographs, Lissajous figures, roses, polygons,
//! stars, spirals, lines, circles, ellipses), transforms reshape or relocate
//! the sequence produced by earlier stages (rotation, translation,
//! arc-slide, bend, spiral-arc).
//!
//! # Pipeline overview
//!
//! 1. **Load**: `Scene` from a sectioned TOML (or JSON) configuration file
//! 2. **Sample**: `TimeGrid` over the pipeline's combined cycle span
//! 3. **Execute**: each stage maps the running `PointSequence` within one
//!    shared coordinate frame
//! 4. **Resample**: arc-length reparameterization for even point density
//! 5. **Render** (adapter): SVG path emission, optional PNG rasterization
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a scene evaluates to the same points every run.
//! - **One coordinate frame**: modules never re-anchor the drawing origin;
//!   only the renderer maps into canvas coordinates.
//! - **Wrapped/unwrapped phase split**: every module wraps its own local
//!   phase for shape and uses the unwrapped global phase for anything
//!   cumulative, which is what makes moiré composition work.
#![forbid(unsafe_code)]

mod foundation;
mod modules;
mod pipeline;
mod render;
mod resample;
mod sampler;
mod scene;

pub use foundation::core::{DrawingFrame, Point, PointSequence, Rect, Sampling, Vec2};
pub use foundation::error::{TrochographError, TrochographResult};
pub use modules::generator::{
    CircleParams, EllipseParams, Generator, HarmonographParams, IdleAt, LineParams,
    LissajousParams, Pendulum, PolygonParams, RoseParams, SpiralParams, SpirographGearParams,
    StarParams,
};
pub use modules::registry::{Module, ModuleRole, known_types, lookup, parse_module};
pub use modules::transform::{
    ArcSlideParams, BendParams, RotationParams, SpiralArcParams, Transform, TranslationParams,
};
pub use pipeline::executor::{RenderOutput, execute_pipeline, run_scene};
pub use render::png::{rasterize_svg, write_png};
pub use render::svg::{normalize_to_canvas, svg_document};
pub use resample::arc_length::{cumulative_lengths, resample_by_arc_length, stride_subsample};
pub use sampler::grid::{TimeGrid, combined_span, wrap_phase};
pub use scene::model::{ModuleInstance, Scene};
