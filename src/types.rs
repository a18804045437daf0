//! Geometry data model: definitions coming in, commands and primitives going out.
//!
//! Coordinates are plain `f64` in whatever linear unit the caller sized the
//! shape in. Angles are tagged by unit in field names: `*_deg` are plain
//! degrees, preset angle refs evaluate to OOXML units (60000ths of a degree).

use std::collections::HashMap;

/// A named guide with its formula, e.g. `("x1", "*/ ss a 100000")`
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub name: String,
    pub formula: String,
}

impl Guide {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
        }
    }
}

/// Caller supplied adjust values, keyed by guide name (`adj`, `adj1`, ...)
pub type AdjustValues = HashMap<String, f64>;

/// How a path is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathFill {
    /// Path is outline only
    None,
    #[default]
    Norm,
    Lighten,
    LightenLess,
    Darken,
    DarkenLess,
}

impl PathFill {
    /// Parse the DrawingML `fill` attribute; unknown values read as `Norm`
    pub fn from_attr(value: &str) -> Self {
        match value {
            "none" => PathFill::None,
            "lighten" => PathFill::Lighten,
            "lightenLess" => PathFill::LightenLess,
            "darken" => PathFill::Darken,
            "darkenLess" => PathFill::DarkenLess,
            _ => PathFill::Norm,
        }
    }
}

// ============================================================================
// Preset definitions (guide-referencing string commands)
// ============================================================================

/// Preset path command; every field is a numeric literal or guide name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresetPathCommand {
    MoveTo {
        x: &'static str,
        y: &'static str,
    },
    LineTo {
        x: &'static str,
        y: &'static str,
    },
    CubicBezierTo {
        p0: (&'static str, &'static str),
        p1: (&'static str, &'static str),
        p2: (&'static str, &'static str),
    },
    QuadBezierTo {
        p0: (&'static str, &'static str),
        p1: (&'static str, &'static str),
    },
    /// Angles evaluate to OOXML angle units
    ArcTo {
        w_r: &'static str,
        h_r: &'static str,
        start_angle: &'static str,
        sweep_angle: &'static str,
    },
    Close,
}

/// One path of a preset shape
#[derive(Debug, Clone, PartialEq)]
pub struct PresetPathDefinition {
    pub path_width: Option<f64>,
    pub path_height: Option<f64>,
    pub fill: PathFill,
    pub stroke: bool,
    pub commands: Vec<PresetPathCommand>,
}

/// Text rectangle as guide refs: left, top, right, bottom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRectRefs {
    pub l: &'static str,
    pub t: &'static str,
    pub r: &'static str,
    pub b: &'static str,
}

/// A built-in shape template
#[derive(Debug, Clone, PartialEq)]
pub struct PresetGeometryDefinition {
    pub name: &'static str,
    /// `avLst`: adjust guides and their default formulas
    pub adjust_defaults: Vec<(&'static str, &'static str)>,
    /// `gdLst`: derived guides, evaluated in order
    pub derived_guides: Vec<(&'static str, &'static str)>,
    pub paths: Vec<PresetPathDefinition>,
    pub text_rect: Option<TextRectRefs>,
}

// ============================================================================
// Custom definitions (already-numeric commands)
// ============================================================================

/// Custom path command. Angles are plain degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericPathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicBezierTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadBezierTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    ArcTo {
        w_r: f64,
        h_r: f64,
        start_angle_deg: f64,
        sweep_angle_deg: f64,
    },
    Close,
}

/// One path of a custom shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapePath {
    pub path_width: Option<f64>,
    pub path_height: Option<f64>,
    pub commands: Vec<NumericPathCommand>,
    pub fill_override: Option<PathFill>,
    pub stroke_override: Option<bool>,
}

/// A connection site: angle in OOXML units, position as guide refs or literals
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSiteDefinition {
    pub angle: String,
    pub pos_x_ref: String,
    pub pos_y_ref: String,
}

/// A document-authored shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomGeometryDefinition {
    /// `avLst` followed by `gdLst`, in declared order
    pub guides: Vec<Guide>,
    pub paths: Vec<ShapePath>,
    pub connection_sites: Vec<ConnectionSiteDefinition>,
}

/// Geometry attached to a shape, as handed over by the document parser
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Preset {
        name: String,
        adjust_values: AdjustValues,
    },
    Custom(CustomGeometryDefinition),
}

// ============================================================================
// Resolved commands (tracer input)
// ============================================================================

/// Fully numeric command in path space; angles in plain degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicBezierTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadBezierTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    ArcTo {
        w_r: f64,
        h_r: f64,
        start_angle_deg: f64,
        sweep_angle_deg: f64,
    },
    Close,
}

/// A resolved path, still in its own path space
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    pub path_width: Option<f64>,
    pub path_height: Option<f64>,
    pub fill: PathFill,
    pub stroke: bool,
    pub commands: Vec<ResolvedCommand>,
}

/// Text box inset, in shape space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Resolved connection site in shape space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionSite {
    pub x: f64,
    pub y: f64,
    pub angle_deg: f64,
}

/// Output of preset or custom resolution
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedGeometry {
    pub paths: Vec<ResolvedPath>,
    pub text_rect: Option<TextRect>,
    pub connection_sites: Vec<ConnectionSite>,
}

// ============================================================================
// Primitives (tracer output)
// ============================================================================

/// Absolute-space drawing primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    BezierCurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    /// Centre-parameterised ellipse arc, angles in radians
    EllipseArc {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_rad: f64,
        end_rad: f64,
        counterclockwise: bool,
    },
    ClosePath,
}

/// A traced path with its paint attributes
#[derive(Debug, Clone, PartialEq)]
pub struct TracedPath {
    pub fill: PathFill,
    pub stroke: bool,
    pub primitives: Vec<Primitive>,
}
