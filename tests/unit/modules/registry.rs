use super::*;

#[test]
fn every_known_type_has_valid_defaults() {
    for type_name in known_types() {
        let (_, module) = lookup(type_name).unwrap_or_else(|| panic!("missing '{type_name}'"));
        module
            .validate()
            .unwrap_or_else(|e| panic!("'{type_name}' defaults invalid: {e}"));
    }
    assert_eq!(known_types().count(), 15);
}

#[test]
fn lookup_reports_roles() {
    let (role, _) = lookup("circle").unwrap();
    assert_eq!(role, ModuleRole::Generator);
    let (role, _) = lookup("rotation").unwrap();
    assert_eq!(role, ModuleRole::Transform);
    assert!(lookup("oscillograph").is_none());
}

#[test]
fn parse_module_applies_defaults_and_overrides() {
    let payload = serde_json::json!({
        "type": "circle",
        "radius": 75.0,
    });
    let module = parse_module("my_circle", &payload).unwrap();
    let Module::Generator(Generator::Circle(params)) = module else {
        panic!("expected a circle generator");
    };
    assert_eq!(params.radius, 75.0);
    assert_eq!(params.cycles, 1.0);
    assert_eq!(params.end_radius, None);
}

#[test]
fn parse_module_rejects_unknown_types() {
    let payload = serde_json::json!({ "type": "wormhole" });
    let err = parse_module("weird", &payload).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("weird"));
    assert!(msg.contains("wormhole"));
    assert!(msg.contains("spirograph_gear"));
}

#[test]
fn parse_module_requires_a_type_tag() {
    let payload = serde_json::json!({ "radius": 10.0 });
    let err = parse_module("untyped", &payload).unwrap_err();
    assert!(err.to_string().contains("missing a 'type' tag"));
}

#[test]
fn parse_module_surfaces_range_violations_with_the_section_name() {
    let payload = serde_json::json!({
        "type": "spirograph_gear",
        "fixed_teeth": 0,
    });
    let err = parse_module("gear", &payload).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'gear'"));
    assert!(msg.contains("tooth counts"));

    let payload = serde_json::json!({
        "type": "translation",
        "end_x": 0.0,
        "end_y": 0.0,
    });
    let err = parse_module("slide", &payload).unwrap_err();
    assert!(err.to_string().contains("non-zero"));
}

#[test]
fn module_cycles_feed_the_span() {
    let (_, gear) = lookup("spirograph_gear").unwrap();
    assert_eq!(gear.cycles(), Some(1.0));

    let (_, rotation) = lookup("rotation").unwrap();
    assert_eq!(rotation.cycles(), None);

    let (_, arc) = lookup("arc_slide").unwrap();
    assert_eq!(arc.cycles(), Some(1.0));
}

#[test]
fn modules_round_trip_through_serde() {
    let (_, module) = lookup("lissajous").unwrap();
    let json = serde_json::to_value(&module).unwrap();
    assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("lissajous"));
    let back: Module = serde_json::from_value(json).unwrap();
    assert_eq!(back, module);
}
