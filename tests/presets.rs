//! Preset shapes traced to SVG path data

use prstgeom::{
    AdjustValues, CustomGeometryDefinition, Geometry, NumericPathCommand, PathFill,
    PresetGeometryCatalog, Primitive, ShapePath, resolve_geometry, resolve_preset,
};

fn preset_svg(name: &str, w: f64, h: f64) -> Vec<String> {
    resolve_preset(name, w, h, None)
        .unwrap_or_else(|| panic!("unknown preset {}", name))
        .to_svg_paths(w, h)
}

#[test]
fn rect() {
    insta::assert_snapshot!(&preset_svg("rect", 100.0, 80.0)[0], @"M0,0L100,0L100,80L0,80Z");
}

#[test]
fn ellipse() {
    insta::assert_snapshot!(
        &preset_svg("ellipse", 200.0, 100.0)[0],
        @"M0,50A100,50 0 0,1 100,0A100,50 0 0,1 200,50A100,50 0 0,1 100,100A100,50 0 0,1 0,50Z"
    );
}

#[test]
fn round_rect_default_adjust() {
    insta::assert_snapshot!(
        &preset_svg("roundRect", 100.0, 100.0)[0],
        @"M0,16.667A16.667,16.667 0 0,1 16.667,0L83.333,0A16.667,16.667 0 0,1 100,16.667L100,83.333A16.667,16.667 0 0,1 83.333,100L16.667,100A16.667,16.667 0 0,1 0,83.333Z"
    );
}

#[test]
fn triangle_and_diamond() {
    insta::assert_snapshot!(&preset_svg("triangle", 100.0, 100.0)[0], @"M0,100L50,0L100,100Z");
    insta::assert_snapshot!(&preset_svg("diamond", 100.0, 60.0)[0], @"M0,30L50,0L100,30L50,60Z");
}

#[test]
fn home_plate() {
    insta::assert_snapshot!(
        &preset_svg("homePlate", 200.0, 100.0)[0],
        @"M0,0L150,0L200,50L150,100L0,100Z"
    );
}

#[test]
fn flowchart_presets_scale_from_path_space() {
    insta::assert_snapshot!(
        &preset_svg("flowChartDecision", 40.0, 20.0)[0],
        @"M0,10L20,0L40,10L20,20Z"
    );
    insta::assert_snapshot!(
        &preset_svg("flowChartDocument", 216.0, 216.0)[0],
        @"M0,0L216,0L216,173.22C108,173.22 108,239.22 0,201.72Z"
    );
}

#[test]
fn can_paths() {
    let paths = preset_svg("can", 100.0, 200.0);
    assert_eq!(paths.len(), 3);
    insta::assert_snapshot!(
        &paths[0],
        @"M0,12.5A50,12.5 0 0,0 100,12.5L100,187.5A50,12.5 0 0,1 0,187.5Z"
    );
    insta::assert_snapshot!(
        &paths[1],
        @"M0,12.5A50,12.5 0 0,1 100,12.5A50,12.5 0 0,1 0,12.5Z"
    );
    insta::assert_snapshot!(
        &paths[2],
        @"M100,12.5A50,12.5 0 0,1 0,12.5A50,12.5 0 0,1 100,12.5L100,187.5A50,12.5 0 0,1 0,187.5L0,12.5"
    );
}

#[test]
fn line_is_unfilled() {
    let traced = resolve_preset("line", 100.0, 50.0, None)
        .unwrap()
        .trace(100.0, 50.0);
    assert_eq!(traced[0].fill, PathFill::None);
    insta::assert_snapshot!(traced[0].to_svg_path(), @"M0,0L100,50");
}

#[test]
fn adjust_override_changes_shape() {
    let adjust: AdjustValues = [("adj".to_string(), 25000.0)].into();
    let geom = resolve_geometry(
        &Geometry::Preset {
            name: "homePlate".into(),
            adjust_values: adjust,
        },
        200.0,
        100.0,
    )
    .unwrap();
    insta::assert_snapshot!(
        &geom.to_svg_paths(200.0, 100.0)[0],
        @"M0,0L175,0L200,50L175,100L0,100Z"
    );
}

#[test]
fn every_preset_resolves_and_traces() {
    let catalog = PresetGeometryCatalog::global();
    for name in catalog.names() {
        let geom = catalog.resolve(name, 320.0, 240.0, None).unwrap();
        assert!(!geom.paths.is_empty(), "{} has no paths", name);
        for traced in geom.trace(320.0, 240.0) {
            assert!(
                matches!(traced.primitives.first(), Some(Primitive::MoveTo { .. })),
                "{} path does not start with a move",
                name
            );
            for p in &traced.primitives {
                let finite = match *p {
                    Primitive::MoveTo { x, y } | Primitive::LineTo { x, y } => {
                        x.is_finite() && y.is_finite()
                    }
                    Primitive::EllipseArc { cx, cy, rx, ry, .. } => {
                        cx.is_finite() && cy.is_finite() && rx > 0.0 && ry > 0.0
                    }
                    _ => true,
                };
                assert!(finite, "{} produced {:?}", name, p);
            }
        }
        let text = geom.text_rect.unwrap();
        assert!(text.left <= text.right && text.top <= text.bottom, "{}", name);
    }
}

#[test]
fn custom_geometry_scales_to_shape() {
    let def = CustomGeometryDefinition {
        paths: vec![ShapePath {
            path_width: Some(100.0),
            path_height: Some(100.0),
            commands: vec![
                NumericPathCommand::MoveTo { x: 0.0, y: 50.0 },
                NumericPathCommand::ArcTo {
                    w_r: 50.0,
                    h_r: 50.0,
                    start_angle_deg: 180.0,
                    sweep_angle_deg: 90.0,
                },
                NumericPathCommand::LineTo { x: 100.0, y: 0.0 },
                NumericPathCommand::Close,
            ],
            ..Default::default()
        }],
        ..Default::default()
    };
    let geom = resolve_geometry(&Geometry::Custom(def), 200.0, 300.0).unwrap();
    insta::assert_snapshot!(
        &geom.to_svg_paths(200.0, 300.0)[0],
        @"M0,150A100,150 0 0,1 100,0L200,0Z"
    );
}
