use crate::{
    foundation::core::{DrawingFrame, PointSequence},
    foundation::error::{TrochographError, TrochographResult},
    modules::registry::Module,
    resample::arc_length::{resample_by_arc_length, stride_subsample},
    sampler::grid::{TimeGrid, combined_span},
    scene::model::{ModuleInstance, Scene},
};

/// Everything the external renderer needs: the final resampled sequence and
/// the drawing frame it is to be mapped with.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    /// Final point sequence in the shared (untransformed) coordinate space.
    pub points: PointSequence,
    /// The frame established before the pipeline ran.
    pub frame: DrawingFrame,
}

/// Thread the time grid and point sequence through the ordered pipeline.
///
/// The initial sequence holds the first generator's output offset by the
/// frame's global origin, or that origin repeated across the grid when the
/// pipeline starts with a transform. Each stage consumes the running
/// sequence and produces the next; re-zeroing is forbidden at every
/// boundary, so only the frame origin ever anchors absolute position. A
/// stage returning a sequence of the wrong length is a fatal internal
/// error, never padded or truncated.
pub fn execute_pipeline(
    pipeline: &[ModuleInstance],
    grid: &TimeGrid,
    frame: &DrawingFrame,
) -> TrochographResult<PointSequence> {
    let mut sequence = PointSequence::repeated(frame.origin(), grid.len());

    for (stage, instance) in pipeline.iter().enumerate() {
        let next = match &instance.module {
            Module::Generator(generator) => {
                if stage > 0 {
                    return Err(TrochographError::config(format!(
                        "generator module '{}' must be the first pipeline stage",
                        instance.name
                    )));
                }
                let mut points = generator.evaluate(grid);
                points.offset(frame.origin().to_vec2());
                points
            }
            Module::Transform(transform) => transform.apply(&sequence, grid),
        };

        if next.len() != grid.len() {
            return Err(TrochographError::length_mismatch(format!(
                "stage {stage} ('{}') returned {} points for a grid of {}",
                instance.name,
                next.len(),
                grid.len()
            )));
        }
        sequence = next;
    }

    Ok(sequence)
}

/// Run a whole scene: build the grid, execute the pipeline, recover from
/// numeric degeneracies and resample.
#[tracing::instrument(skip(scene), fields(stages = scene.pipeline.len()))]
pub fn run_scene(scene: &Scene) -> TrochographResult<RenderOutput> {
    scene.validate()?;

    let span = combined_span(scene.pipeline.iter().filter_map(|m| m.module.cycles()));
    let grid = TimeGrid::uniform(scene.sampling.initial_samples, span)?;
    tracing::debug!(samples = grid.len(), span, "sampling pipeline");

    let mut dense = execute_pipeline(&scene.pipeline, &grid, &scene.output)?;

    let dropped = dense.retain_finite();
    if dropped > 0 {
        tracing::warn!(
            dropped,
            "pipeline produced non-finite points; dropping them before resampling"
        );
    }
    if dense.len() < 2 {
        return Err(TrochographError::numeric(
            "fewer than two finite points survived the pipeline",
        ));
    }

    let points = if scene.sampling.use_arc_length {
        resample_by_arc_length(&dense, scene.sampling.output_samples)?
    } else {
        stride_subsample(&dense, scene.sampling.output_samples)?
    };

    Ok(RenderOutput {
        points,
        frame: scene.output.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/executor.rs"]
mod tests;
