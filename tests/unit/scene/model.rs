use super::*;
use crate::modules::registry;

fn instance(name: &str, type_name: &str) -> ModuleInstance {
    let (_, module) = registry::lookup(type_name).unwrap();
    ModuleInstance {
        name: name.to_string(),
        module,
    }
}

fn scene_with(pipeline: Vec<ModuleInstance>) -> Scene {
    Scene {
        pipeline,
        output: DrawingFrame::default(),
        sampling: Sampling::default(),
    }
}

#[test]
fn a_single_generator_scene_validates() {
    let scene = scene_with(vec![instance("gear", "spirograph_gear")]);
    assert!(scene.validate().is_ok());
}

#[test]
fn transform_first_pipelines_are_allowed() {
    // Degenerate start: the pipeline begins from the origin point.
    let scene = scene_with(vec![
        instance("slide", "translation"),
        instance("spin", "rotation"),
    ]);
    assert!(scene.validate().is_ok());
}

#[test]
fn repeated_types_under_distinct_names_are_allowed() {
    let scene = scene_with(vec![
        instance("gear", "spirograph_gear"),
        instance("spin_fast", "rotation"),
        instance("spin_slow", "rotation"),
    ]);
    assert!(scene.validate().is_ok());
}

#[test]
fn empty_pipelines_are_rejected() {
    assert!(scene_with(vec![]).validate().is_err());
}

#[test]
fn duplicate_names_are_rejected() {
    let scene = scene_with(vec![
        instance("gear", "spirograph_gear"),
        instance("gear", "rotation"),
    ]);
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate module name 'gear'"));
}

#[test]
fn generators_after_stage_zero_are_rejected() {
    let scene = scene_with(vec![
        instance("gear", "spirograph_gear"),
        instance("extra", "circle"),
    ]);
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("'extra'"));
    assert!(err.to_string().contains("first pipeline stage"));
}

#[test]
fn module_errors_carry_the_instance_name() {
    let mut bad = instance("gear", "spirograph_gear");
    if let registry::Module::Generator(crate::modules::generator::Generator::SpirographGear(p)) =
        &mut bad.module
    {
        p.tooth_pitch = 0.0;
    }
    let err = scene_with(vec![bad]).validate().unwrap_err();
    assert!(err.to_string().contains("module 'gear'"));
}
