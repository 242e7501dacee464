use std::collections::BTreeSet;

use crate::{
    foundation::core::{DrawingFrame, Sampling},
    foundation::error::{TrochographError, TrochographResult},
    modules::registry::{Module, ModuleRole},
};

/// A named, configured pipeline stage.
///
/// The name is unique within a pipeline and used only for diagnostics; the
/// same module type may appear under several names with independent
/// parameters (two rotations with different speeds is a first-class use
/// case).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModuleInstance {
    /// Diagnostic name, unique within the pipeline.
    pub name: String,
    /// The configured module.
    #[serde(flatten)]
    pub module: Module,
}

/// A complete scene: ordered module pipeline, drawing frame and sampling
/// settings.
///
/// A scene is a pure data model that can be built programmatically or
/// loaded from a sectioned configuration file (see [`Scene::from_path`]);
/// it is immutable once constructed. Rendering a scene is performed by
/// [`crate::run_scene`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Ordered pipeline stages.
    pub pipeline: Vec<ModuleInstance>,
    /// Global drawing frame (canvas, margin, styling, origin).
    #[serde(default)]
    pub output: DrawingFrame,
    /// Dense/output sample counts and resampling mode.
    #[serde(default)]
    pub sampling: Sampling,
}

impl Scene {
    /// Validate scene invariants and every module's parameters.
    pub fn validate(&self) -> TrochographResult<()> {
        if self.pipeline.is_empty() {
            return Err(TrochographError::config(
                "pipeline must contain at least one module",
            ));
        }

        let mut seen = BTreeSet::new();
        for (stage, instance) in self.pipeline.iter().enumerate() {
            if instance.name.trim().is_empty() {
                return Err(TrochographError::config(format!(
                    "pipeline stage {stage} has an empty module name",
                )));
            }
            if !seen.insert(instance.name.as_str()) {
                return Err(TrochographError::config(format!(
                    "duplicate module name '{}' in pipeline",
                    instance.name
                )));
            }
            if stage > 0 && instance.module.role() == ModuleRole::Generator {
                return Err(TrochographError::config(format!(
                    "generator module '{}' must be the first pipeline stage",
                    instance.name
                )));
            }
            instance.module.validate().map_err(|e| match e {
                TrochographError::Config(msg) => {
                    TrochographError::config(format!("module '{}': {msg}", instance.name))
                }
                other => other,
            })?;
        }

        self.output.validate()?;
        self.sampling.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
