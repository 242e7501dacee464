use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{DrawingFrame, Sampling},
    foundation::error::{TrochographError, TrochographResult},
    modules::registry,
    scene::model::{ModuleInstance, Scene},
};

/// Raw sectioned configuration file shape, shared by the TOML and JSON
/// syntaxes: a `pipeline` section with the ordered module name list, one
/// `modules.<name>` table per named module, and `output`/`sampling`
/// sections.
#[derive(Debug, serde::Deserialize)]
struct SceneFile {
    pipeline: PipelineSection,
    #[serde(default)]
    modules: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    output: DrawingFrame,
    #[serde(default)]
    sampling: Sampling,
}

#[derive(Debug, serde::Deserialize)]
struct PipelineSection {
    modules: Vec<String>,
}

impl SceneFile {
    fn resolve(self) -> TrochographResult<Scene> {
        let mut pipeline = Vec::with_capacity(self.pipeline.modules.len());
        for name in &self.pipeline.modules {
            let payload = self.modules.get(name).ok_or_else(|| {
                TrochographError::config(format!(
                    "pipeline references module '{name}' but no [modules.{name}] section exists",
                ))
            })?;
            pipeline.push(ModuleInstance {
                name: name.clone(),
                module: registry::parse_module(name, payload)?,
            });
        }

        let scene = Scene {
            pipeline,
            output: self.output,
            sampling: self.sampling,
        };
        scene.validate()?;
        Ok(scene)
    }
}

impl Scene {
    /// Load a scene from a sectioned TOML string.
    pub fn from_toml_str(s: &str) -> TrochographResult<Self> {
        let file: SceneFile =
            toml::from_str(s).map_err(|e| TrochographError::serde(e.to_string()))?;
        file.resolve()
    }

    /// Load a scene from the JSON rendition of the sectioned format.
    pub fn from_json_str(s: &str) -> TrochographResult<Self> {
        let file: SceneFile =
            serde_json::from_str(s).map_err(|e| TrochographError::serde(e.to_string()))?;
        file.resolve()
    }

    /// Load a scene file, picking the parser from the file extension
    /// (`.json` is JSON, anything else is TOML).
    pub fn from_path(path: &Path) -> TrochographResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene file '{}'", path.display()))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/load.rs"]
mod tests;
