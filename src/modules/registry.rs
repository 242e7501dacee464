use crate::{
    foundation::error::{TrochographError, TrochographResult},
    modules::generator::{
        CircleParams, EllipseParams, Generator, HarmonographParams, LineParams, LissajousParams,
        PolygonParams, RoseParams, SpiralParams, SpirographGearParams, StarParams,
    },
    modules::transform::{
        ArcSlideParams, BendParams, RotationParams, SpiralArcParams, Transform, TranslationParams,
    },
};

/// A configured pipeline module: either a generator or a transform.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Module {
    /// Produces coordinates from scratch; first pipeline stage only.
    Generator(Generator),
    /// Reshapes or relocates the running sequence.
    Transform(Transform),
}

/// Which capability a module implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleRole {
    /// `evaluate(grid) -> points`.
    Generator,
    /// `apply(points, grid) -> points`.
    Transform,
}

impl std::fmt::Display for ModuleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generator => write!(f, "generator"),
            Self::Transform => write!(f, "transform"),
        }
    }
}

impl Module {
    /// The module's capability role.
    pub fn role(&self) -> ModuleRole {
        match self {
            Self::Generator(_) => ModuleRole::Generator,
            Self::Transform(_) => ModuleRole::Transform,
        }
    }

    /// Cycle contribution to the combined span, when the variant has one.
    pub fn cycles(&self) -> Option<f64> {
        match self {
            Self::Generator(g) => Some(g.cycles()),
            Self::Transform(t) => t.cycles(),
        }
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> TrochographResult<()> {
        match self {
            Self::Generator(g) => g.validate(),
            Self::Transform(t) => t.validate(),
        }
    }
}

const GENERATOR_TYPES: &[&str] = &[
    "spirograph_gear",
    "harmonograph",
    "lissajous",
    "rose",
    "polygon",
    "star",
    "spiral",
    "line",
    "circle",
    "ellipse",
];

const TRANSFORM_TYPES: &[&str] = &[
    "rotation",
    "translation",
    "arc_slide",
    "bend",
    "spiral_arc",
];

/// Every type tag the registry knows, generators first.
pub fn known_types() -> impl Iterator<Item = &'static str> {
    GENERATOR_TYPES.iter().chain(TRANSFORM_TYPES).copied()
}

/// Look up a type tag, returning its role and a module populated with the
/// documented default parameters. `None` for unknown tags.
pub fn lookup(type_name: &str) -> Option<(ModuleRole, Module)> {
    let module = match type_name {
        "spirograph_gear" => {
            Module::Generator(Generator::SpirographGear(SpirographGearParams::default()))
        }
        "harmonograph" => Module::Generator(Generator::Harmonograph(HarmonographParams::default())),
        "lissajous" => Module::Generator(Generator::Lissajous(LissajousParams::default())),
        "rose" => Module::Generator(Generator::Rose(RoseParams::default())),
        "polygon" => Module::Generator(Generator::Polygon(PolygonParams::default())),
        "star" => Module::Generator(Generator::Star(StarParams::default())),
        "spiral" => Module::Generator(Generator::Spiral(SpiralParams::default())),
        "line" => Module::Generator(Generator::Line(LineParams::default())),
        "circle" => Module::Generator(Generator::Circle(CircleParams::default())),
        "ellipse" => Module::Generator(Generator::Ellipse(EllipseParams::default())),
        "rotation" => Module::Transform(Transform::Rotation(RotationParams::default())),
        "translation" => Module::Transform(Transform::Translation(TranslationParams::default())),
        "arc_slide" => Module::Transform(Transform::ArcSlide(ArcSlideParams::default())),
        "bend" => Module::Transform(Transform::Bend(BendParams::default())),
        "spiral_arc" => Module::Transform(Transform::SpiralArc(SpiralArcParams::default())),
        _ => return None,
    };
    Some((module.role(), module))
}

/// Parse one configured module section into a typed, validated [`Module`].
///
/// `section` is the module's name from the pipeline list, used only for
/// diagnostics. The payload must carry a `type` tag selecting the registry
/// entry; unknown tags are a configuration error listing the known types.
pub fn parse_module(section: &str, payload: &serde_json::Value) -> TrochographResult<Module> {
    let type_name = payload
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            TrochographError::config(format!("module '{section}' is missing a 'type' tag"))
        })?
        .trim()
        .to_ascii_lowercase();

    let module = if GENERATOR_TYPES.contains(&type_name.as_str()) {
        serde_json::from_value::<Generator>(payload.clone())
            .map(Module::Generator)
            .map_err(|e| {
                TrochographError::config(format!("module '{section}' ({type_name}): {e}"))
            })?
    } else if TRANSFORM_TYPES.contains(&type_name.as_str()) {
        serde_json::from_value::<Transform>(payload.clone())
            .map(Module::Transform)
            .map_err(|e| {
                TrochographError::config(format!("module '{section}' ({type_name}): {e}"))
            })?
    } else {
        return Err(TrochographError::config(format!(
            "module '{section}' has unknown type '{type_name}' (known: {})",
            known_types().collect::<Vec<_>>().join(", ")
        )));
    };

    module.validate().map_err(|e| match e {
        TrochographError::Config(msg) => {
            TrochographError::config(format!("module '{section}': {msg}"))
        }
        other => other,
    })?;
    Ok(module)
}

#[cfg(test)]
#[path = "../../tests/unit/modules/registry.rs"]
mod tests;
