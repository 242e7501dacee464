use super::*;

fn assert_close(a: (f64, f64), b: (f64, f64), eps: f64) {
    assert!(
        (a.0 - b.0).abs() < eps && (a.1 - b.1).abs() < eps,
        "{a:?} != {b:?}"
    );
}

#[test]
fn circle_points_lie_on_the_radius() {
    let shape = Generator::Circle(CircleParams {
        radius: 50.0,
        ..CircleParams::default()
    });
    let grid = TimeGrid::uniform(64, 1.0).unwrap();
    let points = shape.evaluate(&grid);
    assert_eq!(points.len(), grid.len());
    for p in points.points() {
        assert!((p.to_vec2().hypot() - 50.0).abs() < 1e-9);
    }
    // Quarter turn lands on the +y axis.
    assert_close(shape.point_at(0.25), (0.0, 50.0), 1e-9);
}

#[test]
fn circle_with_cycles_retraces_while_animating_radius() {
    let shape = Generator::Circle(CircleParams {
        radius: 50.0,
        end_radius: None,
        cycles: 2.0,
    });
    // Same local phase half a drawing apart: identical points when the
    // radius is static.
    assert_close(shape.point_at(0.0), shape.point_at(0.5), 1e-9);

    let growing = Generator::Circle(CircleParams {
        radius: 50.0,
        end_radius: Some(100.0),
        cycles: 2.0,
    });
    // Radius animation follows the unwrapped phase, so the retrace lands
    // further out.
    let (x0, _) = growing.point_at(0.0);
    let (x1, _) = growing.point_at(0.5);
    assert!((x0 - 50.0).abs() < 1e-9);
    assert!((x1 - 75.0).abs() < 1e-9);
}

#[test]
fn lissajous_matches_closed_form() {
    let params = LissajousParams {
        freq_x: 3,
        freq_y: 2,
        amplitude_x: 40.0,
        amplitude_y: 20.0,
        phase_deg: 90.0,
        ..LissajousParams::default()
    };
    let shape = Generator::Lissajous(params);
    // gcd(3, 2) = 1, so the figure closes after 2 revolutions of θ.
    for u in [0.0, 0.1, 0.37, 0.5, 0.93] {
        let theta = u * 2.0 * TAU;
        let expected = (
            40.0 * (3.0 * theta + std::f64::consts::FRAC_PI_2).sin(),
            20.0 * (2.0 * theta).sin(),
        );
        assert_close(shape.point_at(u), expected, 1e-9);
    }
}

#[test]
fn polygon_quantizes_into_edges() {
    let shape = Generator::Polygon(PolygonParams {
        sides: 4,
        radius: 10.0,
        rotation_deg: 0.0,
        ..PolygonParams::default()
    });
    // Vertices at the start of each quarter.
    assert_close(shape.point_at(0.0), (10.0, 0.0), 1e-9);
    assert_close(shape.point_at(0.25), (0.0, 10.0), 1e-9);
    assert_close(shape.point_at(0.5), (-10.0, 0.0), 1e-9);
    // Midway along the first edge: straight-line midpoint, not an arc.
    assert_close(shape.point_at(0.125), (5.0, 5.0), 1e-9);
}

#[test]
fn star_alternates_outer_and_inner_vertices() {
    let shape = Generator::Star(StarParams {
        points: 5,
        outer_radius: 50.0,
        inner_radius: 20.0,
        rotation_deg: -90.0,
        ..StarParams::default()
    });
    // First vertex is an outer point straight down the rotated axis.
    assert_close(shape.point_at(0.0), (0.0, -50.0), 1e-9);
    // One vertex later (1/10 of the perimeter) sits on the inner radius.
    let (x, y) = shape.point_at(0.1);
    assert!((x.hypot(y) - 20.0).abs() < 1e-9);
}

#[test]
fn gear_auto_rotations_come_from_the_tooth_ratio() {
    let params = SpirographGearParams::default();
    // gcd(96, 36) = 12 -> 36 / 12 = 3 rotations to close.
    assert_eq!(params.resolved_rotations(), 3);

    let explicit = SpirographGearParams {
        rotations: 7,
        ..SpirographGearParams::default()
    };
    assert_eq!(explicit.resolved_rotations(), 7);
}

#[test]
fn gear_starts_at_the_pen_extreme() {
    let params = SpirographGearParams {
        fixed_teeth: 96,
        rolling_teeth: 36,
        tooth_pitch: 1.0,
        hole_position: 0.7,
        ..SpirographGearParams::default()
    };
    let shape = Generator::SpirographGear(params);
    let fixed_r = 96.0 / TAU;
    let rolling_r = 36.0 / TAU;
    let expected_x = (fixed_r - rolling_r) + 0.7 * rolling_r;
    assert_close(shape.point_at(0.0), (expected_x, 0.0), 1e-9);
}

#[test]
fn gear_rejects_zero_teeth() {
    let shape = Generator::SpirographGear(SpirographGearParams {
        fixed_teeth: 0,
        ..SpirographGearParams::default()
    });
    assert!(shape.validate().is_err());
}

#[test]
fn harmonograph_decay_shrinks_amplitude() {
    let undamped = Pendulum {
        freq: 2.0,
        amp: 100.0,
        phase_deg: 90.0,
        decay: 0.0,
    };
    let damped = Pendulum {
        decay: 0.05,
        ..undamped.clone()
    };
    let base = HarmonographParams {
        x: vec![undamped.clone()],
        y: vec![undamped.clone()],
        duration: 60.0,
        cycles: 1.0,
    };
    let decayed = HarmonographParams {
        x: vec![damped.clone()],
        y: vec![damped],
        duration: 60.0,
        cycles: 1.0,
    };
    // Pick a phase where the undamped pendulum is at full swing.
    let u = 0.5;
    let (x0, _) = Generator::Harmonograph(base).point_at(u);
    let (x1, _) = Generator::Harmonograph(decayed).point_at(u);
    assert!(x0.abs() > 1.0);
    assert!(x1.abs() < x0.abs());
    assert!((x1 / x0 - (-0.05f64 * 30.0).exp()).abs() < 1e-9);
}

#[test]
fn harmonograph_needs_pendulums_on_both_axes() {
    let shape = Generator::Harmonograph(HarmonographParams {
        x: vec![],
        ..HarmonographParams::default()
    });
    assert!(shape.validate().is_err());
}

#[test]
fn line_stroke_time_parks_the_pen() {
    let shape = Generator::Line(LineParams {
        length: 100.0,
        stroke_time: 0.25,
        ..LineParams::default()
    });
    // Idle phase: pen stays at the start.
    assert_close(shape.point_at(0.0), (0.0, 0.0), 1e-9);
    assert_close(shape.point_at(0.5), (0.0, 0.0), 1e-9);
    // Draw phase maps the remaining quarter onto the full length.
    assert_close(shape.point_at(0.875), (50.0, 0.0), 1e-9);

    let eager = Generator::Line(LineParams {
        length: 100.0,
        stroke_time: 0.25,
        idle_at: IdleAt::End,
        ..LineParams::default()
    });
    assert_close(eager.point_at(0.125), (50.0, 0.0), 1e-9);
    assert_close(eager.point_at(0.5), (100.0, 0.0), 1e-9);
}

#[test]
fn spiral_radius_grows_within_each_cycle() {
    let shape = Generator::Spiral(SpiralParams {
        start_radius: 0.0,
        end_radius: 50.0,
        turns: 2.0,
        ..SpiralParams::default()
    });
    let (x, y) = shape.point_at(0.5);
    // Half way: radius 25, angle 2π (back on the +x axis).
    assert!((x - 25.0).abs() < 1e-9);
    assert!(y.abs() < 1e-6);
}

#[test]
fn rose_closure_follows_parity_rules() {
    let odd = RoseParams {
        k_num: 3,
        k_den: 1,
        ..RoseParams::default()
    };
    assert_eq!(odd.closure_cycles(), 1.0);

    let even = RoseParams {
        k_num: 2,
        k_den: 1,
        ..RoseParams::default()
    };
    assert_eq!(even.closure_cycles(), 2.0);

    let fractional = RoseParams {
        k_num: 3,
        k_den: 2,
        ..RoseParams::default()
    };
    assert_eq!(fractional.closure_cycles(), 4.0);
}

#[test]
fn ellipse_tilt_rotates_the_axes() {
    let shape = Generator::Ellipse(EllipseParams {
        radius_x: 40.0,
        radius_y: 10.0,
        rotation_deg: 90.0,
        ..EllipseParams::default()
    });
    // The semi-major axis now points along +y.
    assert_close(shape.point_at(0.0), (0.0, 40.0), 1e-9);
}

#[test]
fn evaluate_is_grid_aligned() {
    let grid = TimeGrid::uniform(257, 1.0).unwrap();
    for type_name in [
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
    ] {
        let (_, module) = crate::modules::registry::lookup(type_name).unwrap();
        let crate::modules::registry::Module::Generator(generator) = module else {
            panic!("'{type_name}' should be a generator");
        };
        assert_eq!(generator.evaluate(&grid).len(), grid.len(), "{type_name}");
    }
}
