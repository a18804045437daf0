//! Preset geometry catalog
//!
//! Shape templates follow the DrawingML preset shape definitions: adjust
//! defaults (`avLst`), derived guides (`gdLst`), paths whose coordinates are
//! guide references, and an optional text rectangle.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::{
    AdjustValues, PathFill, PresetGeometryDefinition, PresetPathCommand, PresetPathDefinition,
    ResolvedCommand, ResolvedGeometry, ResolvedPath, TextRect, TextRectRefs,
};

use super::context::GuideContext;
use super::eval::{evaluate, ooxml_angle_to_degrees};

/// Read-only table of preset shapes, keyed by preset name
#[derive(Debug)]
pub struct PresetGeometryCatalog {
    shapes: HashMap<&'static str, PresetGeometryDefinition>,
}

static CATALOG: LazyLock<PresetGeometryCatalog> = LazyLock::new(PresetGeometryCatalog::builtin);

impl PresetGeometryCatalog {
    /// The process-wide catalog
    pub fn global() -> &'static PresetGeometryCatalog {
        &CATALOG
    }

    fn builtin() -> Self {
        let shapes = builtin_presets()
            .into_iter()
            .map(|def| (def.name, def))
            .collect();
        Self { shapes }
    }

    pub fn lookup(&self, name: &str) -> Option<&PresetGeometryDefinition> {
        self.shapes.get(name)
    }

    /// Preset names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.shapes.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolve a preset for a `width` x `height` shape.
    ///
    /// Returns `None` for unknown presets.
    pub fn resolve(
        &self,
        name: &str,
        width: f64,
        height: f64,
        adjust_overrides: Option<&AdjustValues>,
    ) -> Option<ResolvedGeometry> {
        let Some(def) = self.lookup(name) else {
            crate::log::debug!(preset = name, "unknown preset, no geometry");
            return None;
        };
        Some(def.resolve(width, height, adjust_overrides))
    }
}

impl PresetGeometryDefinition {
    /// Evaluate adjust defaults, overlay overrides, run derived guides
    pub fn guide_context(
        &self,
        width: f64,
        height: f64,
        adjust_overrides: Option<&AdjustValues>,
    ) -> GuideContext {
        let seed = GuideContext::new(width, height);
        let mut adjust: AdjustValues = self
            .adjust_defaults
            .iter()
            .map(|(name, formula)| (name.to_string(), evaluate(formula, &seed)))
            .collect();
        if let Some(overrides) = adjust_overrides {
            adjust.extend(overrides.iter().map(|(k, v)| (k.clone(), *v)));
        }

        let mut ctx = GuideContext::new(width, height).with_overrides(&adjust);
        for (name, formula) in &self.derived_guides {
            ctx.evaluate_guide(name, formula);
        }
        ctx
    }

    /// Resolve all paths (and the text rectangle) to numeric commands
    pub fn resolve(
        &self,
        width: f64,
        height: f64,
        adjust_overrides: Option<&AdjustValues>,
    ) -> ResolvedGeometry {
        let ctx = self.guide_context(width, height, adjust_overrides);

        let paths = self
            .paths
            .iter()
            .map(|path| ResolvedPath {
                path_width: path.path_width,
                path_height: path.path_height,
                fill: path.fill,
                stroke: path.stroke,
                commands: path
                    .commands
                    .iter()
                    .map(|cmd| resolve_command(&ctx, cmd))
                    .collect(),
            })
            .collect();

        let text_rect = self.text_rect.map(|rect| TextRect {
            left: ctx.resolve_ref(rect.l),
            top: ctx.resolve_ref(rect.t),
            right: ctx.resolve_ref(rect.r),
            bottom: ctx.resolve_ref(rect.b),
        });

        ResolvedGeometry {
            paths,
            text_rect,
            connection_sites: Vec::new(),
        }
    }
}

fn resolve_command(ctx: &GuideContext, cmd: &PresetPathCommand) -> ResolvedCommand {
    let v = |r: &str| ctx.resolve_ref(r);
    match *cmd {
        PresetPathCommand::MoveTo { x, y } => ResolvedCommand::MoveTo { x: v(x), y: v(y) },
        PresetPathCommand::LineTo { x, y } => ResolvedCommand::LineTo { x: v(x), y: v(y) },
        PresetPathCommand::CubicBezierTo { p0, p1, p2 } => ResolvedCommand::CubicBezierTo {
            x1: v(p0.0),
            y1: v(p0.1),
            x2: v(p1.0),
            y2: v(p1.1),
            x: v(p2.0),
            y: v(p2.1),
        },
        PresetPathCommand::QuadBezierTo { p0, p1 } => ResolvedCommand::QuadBezierTo {
            x1: v(p0.0),
            y1: v(p0.1),
            x: v(p1.0),
            y: v(p1.1),
        },
        PresetPathCommand::ArcTo {
            w_r,
            h_r,
            start_angle,
            sweep_angle,
        } => ResolvedCommand::ArcTo {
            w_r: v(w_r),
            h_r: v(h_r),
            start_angle_deg: ooxml_angle_to_degrees(v(start_angle)),
            sweep_angle_deg: ooxml_angle_to_degrees(v(sweep_angle)),
        },
        PresetPathCommand::Close => ResolvedCommand::Close,
    }
}

/// Look up a preset in the global catalog
pub fn lookup_preset(name: &str) -> Option<&'static PresetGeometryDefinition> {
    PresetGeometryCatalog::global().lookup(name)
}

/// Resolve a preset from the global catalog
pub fn resolve_preset(
    name: &str,
    width: f64,
    height: f64,
    adjust_overrides: Option<&AdjustValues>,
) -> Option<ResolvedGeometry> {
    PresetGeometryCatalog::global().resolve(name, width, height, adjust_overrides)
}

// ============================================================================
// Catalog data
// ============================================================================

fn m(x: &'static str, y: &'static str) -> PresetPathCommand {
    PresetPathCommand::MoveTo { x, y }
}

fn l(x: &'static str, y: &'static str) -> PresetPathCommand {
    PresetPathCommand::LineTo { x, y }
}

fn arc(
    w_r: &'static str,
    h_r: &'static str,
    start_angle: &'static str,
    sweep_angle: &'static str,
) -> PresetPathCommand {
    PresetPathCommand::ArcTo {
        w_r,
        h_r,
        start_angle,
        sweep_angle,
    }
}

type Pt = (&'static str, &'static str);

fn cubic(p0: Pt, p1: Pt, p2: Pt) -> PresetPathCommand {
    PresetPathCommand::CubicBezierTo { p0, p1, p2 }
}

const Z: PresetPathCommand = PresetPathCommand::Close;

fn path(commands: Vec<PresetPathCommand>) -> PresetPathDefinition {
    PresetPathDefinition {
        path_width: None,
        path_height: None,
        fill: PathFill::Norm,
        stroke: true,
        commands,
    }
}

impl PresetPathDefinition {
    fn sized(mut self, w: f64, h: f64) -> Self {
        self.path_width = Some(w);
        self.path_height = Some(h);
        self
    }

    fn fill(mut self, fill: PathFill) -> Self {
        self.fill = fill;
        self
    }

    fn no_stroke(mut self) -> Self {
        self.stroke = false;
        self
    }
}

fn rect(l: &'static str, t: &'static str, r: &'static str, b: &'static str) -> Option<TextRectRefs> {
    Some(TextRectRefs { l, t, r, b })
}

fn preset(
    name: &'static str,
    adjust_defaults: &[(&'static str, &'static str)],
    derived_guides: &[(&'static str, &'static str)],
    paths: Vec<PresetPathDefinition>,
    text_rect: Option<TextRectRefs>,
) -> PresetGeometryDefinition {
    PresetGeometryDefinition {
        name,
        adjust_defaults: adjust_defaults.to_vec(),
        derived_guides: derived_guides.to_vec(),
        paths,
        text_rect,
    }
}

#[rustfmt::skip]
fn builtin_presets() -> Vec<PresetGeometryDefinition> {
    vec![
        preset("rect", &[], &[],
            vec![path(vec![m("l", "t"), l("r", "t"), l("r", "b"), l("l", "b"), Z])],
            rect("l", "t", "r", "b")),

        preset("roundRect",
            &[("adj", "val 16667")],
            &[
                ("a", "pin 0 adj 50000"),
                ("x1", "*/ ss a 100000"),
                ("x2", "+- r 0 x1"),
                ("y2", "+- b 0 x1"),
                ("il", "*/ x1 29289 100000"),
                ("ir", "+- r 0 il"),
                ("ib", "+- b 0 il"),
            ],
            vec![path(vec![
                m("l", "x1"),
                arc("x1", "x1", "cd2", "cd4"),
                l("x2", "t"),
                arc("x1", "x1", "3cd4", "cd4"),
                l("r", "y2"),
                arc("x1", "x1", "0", "cd4"),
                l("x1", "b"),
                arc("x1", "x1", "cd4", "cd4"),
                Z,
            ])],
            rect("il", "il", "ir", "ib")),

        preset("ellipse", &[],
            &[
                ("idx", "cos wd2 2700000"),
                ("idy", "sin hd2 2700000"),
                ("il", "+- hc 0 idx"),
                ("ir", "+- hc idx 0"),
                ("it", "+- vc 0 idy"),
                ("ib", "+- vc idy 0"),
            ],
            vec![path(vec![
                m("l", "vc"),
                arc("wd2", "hd2", "cd2", "cd4"),
                arc("wd2", "hd2", "3cd4", "cd4"),
                arc("wd2", "hd2", "0", "cd4"),
                arc("wd2", "hd2", "cd4", "cd4"),
                Z,
            ])],
            rect("il", "it", "ir", "ib")),

        preset("triangle",
            &[("adj", "val 50000")],
            &[
                ("a", "pin 0 adj 100000"),
                ("x1", "*/ w a 200000"),
                ("x2", "*/ w a 100000"),
                ("x3", "+- x1 wd2 0"),
            ],
            vec![path(vec![m("l", "b"), l("x2", "t"), l("r", "b"), Z])],
            rect("x1", "vc", "x3", "b")),

        preset("rtTriangle", &[],
            &[
                ("it", "*/ h 7 12"),
                ("ir", "*/ w 7 12"),
                ("ib", "*/ h 11 12"),
            ],
            vec![path(vec![m("l", "b"), l("l", "t"), l("r", "b"), Z])],
            rect("l", "it", "ir", "ib")),

        preset("diamond", &[],
            &[
                ("ir", "*/ w 3 4"),
                ("ib", "*/ h 3 4"),
            ],
            vec![path(vec![m("l", "vc"), l("hc", "t"), l("r", "vc"), l("hc", "b"), Z])],
            rect("wd4", "hd4", "ir", "ib")),

        preset("parallelogram",
            &[("adj", "val 25000")],
            &[
                ("maxAdj", "*/ 100000 w ss"),
                ("a", "pin 0 adj maxAdj"),
                ("x1", "*/ ss a 200000"),
                ("x2", "*/ ss a 100000"),
                ("x6", "+- r 0 x2"),
                ("x5", "+- r 0 x1"),
                ("q1", "*/ 5 a maxAdj"),
                ("q2", "+/ 1 q1 12"),
                ("il", "*/ q2 w 1"),
                ("it", "*/ q2 h 1"),
                ("ir", "+- r 0 il"),
                ("ib", "+- b 0 it"),
            ],
            vec![path(vec![m("l", "b"), l("x2", "t"), l("r", "t"), l("x6", "b"), Z])],
            rect("il", "it", "ir", "ib")),

        preset("trapezoid",
            &[("adj", "val 25000")],
            &[
                ("maxAdj", "*/ 50000 w ss"),
                ("a", "pin 0 adj maxAdj"),
                ("x1", "*/ ss a 200000"),
                ("x2", "*/ ss a 100000"),
                ("x3", "+- r 0 x2"),
                ("x4", "+- r 0 x1"),
                ("il", "*/ wd3 a maxAdj"),
                ("it", "*/ hd3 a maxAdj"),
                ("ir", "+- r 0 il"),
            ],
            vec![path(vec![m("l", "b"), l("x2", "t"), l("x3", "t"), l("r", "b"), Z])],
            rect("il", "it", "ir", "b")),

        preset("hexagon",
            &[("adj", "val 25000"), ("vf", "val 115470")],
            &[
                ("maxAdj", "*/ 50000 w ss"),
                ("a", "pin 0 adj maxAdj"),
                ("shd2", "*/ hd2 vf 100000"),
                ("x1", "*/ ss a 100000"),
                ("x2", "+- r 0 x1"),
                ("dy1", "sin shd2 3600000"),
                ("y1", "+- vc 0 dy1"),
                ("y2", "+- vc dy1 0"),
                ("q1", "*/ maxAdj -1 2"),
                ("q2", "+- a q1 0"),
                ("q3", "?: q2 4 2"),
                ("q4", "?: q2 3 2"),
                ("q5", "?: q1 24 0"),
                ("q6", "+/ a q5 q1"),
                ("q7", "*/ q6 q4 -1"),
                ("q8", "+- q3 q7 0"),
                ("il", "*/ w q8 24"),
                ("it", "*/ h q8 24"),
                ("ir", "+- r 0 il"),
                ("ib", "+- b 0 it"),
            ],
            vec![path(vec![
                m("l", "vc"), l("x1", "y1"), l("x2", "y1"),
                l("r", "vc"), l("x2", "y2"), l("x1", "y2"), Z,
            ])],
            rect("il", "it", "ir", "ib")),

        preset("octagon",
            &[("adj", "val 29289")],
            &[
                ("a", "pin 0 adj 50000"),
                ("x1", "*/ ss a 100000"),
                ("x2", "+- r 0 x1"),
                ("y2", "+- b 0 x1"),
                ("il", "*/ x1 1 2"),
                ("ir", "+- r 0 il"),
                ("ib", "+- b 0 il"),
            ],
            vec![path(vec![
                m("l", "x1"), l("x1", "t"), l("x2", "t"), l("r", "x1"),
                l("r", "y2"), l("x2", "b"), l("x1", "b"), l("l", "y2"), Z,
            ])],
            rect("il", "il", "ir", "ib")),

        preset("plus",
            &[("adj", "val 25000")],
            &[
                ("a", "pin 0 adj 50000"),
                ("x1", "*/ ss a 100000"),
                ("x2", "+- r 0 x1"),
                ("y2", "+- b 0 x1"),
                ("d", "+- w 0 h"),
                ("il", "?: d l x1"),
                ("ir", "?: d r x2"),
                ("it", "?: d x1 t"),
                ("ib", "?: d y2 b"),
            ],
            vec![path(vec![
                m("l", "x1"), l("x1", "x1"), l("x1", "t"), l("x2", "t"),
                l("x2", "x1"), l("r", "x1"), l("r", "y2"), l("x2", "y2"),
                l("x2", "b"), l("x1", "b"), l("x1", "y2"), l("l", "y2"), Z,
            ])],
            rect("il", "it", "ir", "ib")),

        preset("homePlate",
            &[("adj", "val 50000")],
            &[
                ("maxAdj", "*/ 100000 w ss"),
                ("a", "pin 0 adj maxAdj"),
                ("dx1", "*/ ss a 100000"),
                ("x1", "+- r 0 dx1"),
                ("ir", "+/ x1 r 2"),
            ],
            vec![path(vec![m("l", "t"), l("x1", "t"), l("r", "vc"), l("x1", "b"), l("l", "b"), Z])],
            rect("l", "t", "ir", "b")),

        preset("chevron",
            &[("adj", "val 50000")],
            &[
                ("maxAdj", "*/ 100000 w ss"),
                ("a", "pin 0 adj maxAdj"),
                ("x1", "*/ ss a 100000"),
                ("x2", "+- r 0 x1"),
                ("dx", "+- x2 0 x1"),
                ("il", "?: dx x1 l"),
                ("ir", "?: dx x2 r"),
            ],
            vec![path(vec![
                m("l", "t"), l("x2", "t"), l("r", "vc"),
                l("x2", "b"), l("l", "b"), l("x1", "vc"), Z,
            ])],
            rect("il", "t", "ir", "b")),

        preset("rightArrow",
            &[("adj1", "val 50000"), ("adj2", "val 50000")],
            &[
                ("maxAdj2", "*/ 100000 w ss"),
                ("a1", "pin 0 adj1 100000"),
                ("a2", "pin 0 adj2 maxAdj2"),
                ("dx1", "*/ ss a2 100000"),
                ("x1", "+- r 0 dx1"),
                ("dy1", "*/ h a1 200000"),
                ("y1", "+- vc 0 dy1"),
                ("y2", "+- vc dy1 0"),
                ("dx2", "*/ y1 dx1 hd2"),
                ("x2", "+- x1 dx2 0"),
            ],
            vec![path(vec![
                m("l", "y1"), l("x1", "y1"), l("x1", "t"), l("r", "vc"),
                l("x1", "b"), l("x1", "y2"), l("l", "y2"), Z,
            ])],
            rect("l", "y1", "x2", "y2")),

        preset("line", &[], &[],
            vec![path(vec![m("l", "t"), l("r", "b")]).fill(PathFill::None)],
            rect("l", "t", "r", "b")),

        preset("can",
            &[("adj", "val 25000")],
            &[
                ("maxAdj", "*/ 50000 h ss"),
                ("a", "pin 0 adj maxAdj"),
                ("y1", "*/ ss a 200000"),
                ("y2", "+- y1 y1 0"),
                ("y3", "+- b 0 y1"),
            ],
            vec![
                path(vec![
                    m("l", "y1"),
                    arc("wd2", "y1", "cd2", "-10800000"),
                    l("r", "y3"),
                    arc("wd2", "y1", "0", "cd2"),
                    Z,
                ]).no_stroke(),
                path(vec![
                    m("l", "y1"),
                    arc("wd2", "y1", "cd2", "cd2"),
                    arc("wd2", "y1", "0", "cd2"),
                    Z,
                ]).fill(PathFill::Lighten).no_stroke(),
                path(vec![
                    m("r", "y1"),
                    arc("wd2", "y1", "0", "cd2"),
                    arc("wd2", "y1", "cd2", "cd2"),
                    l("r", "y3"),
                    arc("wd2", "y1", "0", "cd2"),
                    l("l", "y1"),
                ]).fill(PathFill::None),
            ],
            rect("l", "y2", "r", "y3")),

        preset("flowChartProcess", &[], &[],
            vec![path(vec![m("0", "0"), l("1", "0"), l("1", "1"), l("0", "1"), Z]).sized(1.0, 1.0)],
            rect("l", "t", "r", "b")),

        preset("flowChartDecision", &[],
            &[
                ("ir", "*/ w 3 4"),
                ("ib", "*/ h 3 4"),
            ],
            vec![path(vec![m("0", "1"), l("1", "0"), l("2", "1"), l("1", "2"), Z]).sized(2.0, 2.0)],
            rect("wd4", "hd4", "ir", "ib")),

        preset("flowChartDocument", &[],
            &[
                ("y1", "*/ h 17322 21600"),
                ("y2", "*/ h 20172 21600"),
            ],
            vec![path(vec![
                m("0", "0"),
                l("21600", "0"),
                l("21600", "17322"),
                cubic(("10800", "17322"), ("10800", "23922"), ("0", "20172")),
                Z,
            ]).sized(21600.0, 21600.0)],
            rect("l", "t", "r", "y1")),
    ]
}
