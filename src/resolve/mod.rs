//! Geometry resolution for DrawingML shapes
//!
//! This module is organized into submodules:
//! - `defaults`: Angle constants and built-in guide divisor tables
//! - `context`: GuideContext, the name to value table for one shape
//! - `eval`: Formula evaluation and OOXML angle conversion
//! - `presets`: The preset shape catalog and preset resolution
//! - `custom`: Custom geometry resolution
//! - `tracer`: Lowering resolved commands into absolute primitives
//! - `sink`: The PathSink backend seam
//! - `svg`: An SVG path data backend

pub mod context;
pub mod custom;
pub mod defaults;
pub mod eval;
pub mod presets;
pub mod sink;
pub mod svg;
pub mod tracer;

pub use context::GuideContext;
pub use custom::resolve_custom;
pub use eval::{evaluate, ooxml_angle_to_degrees, ooxml_angle_to_radians, radians_to_ooxml_angle};
pub use presets::{PresetGeometryCatalog, lookup_preset, resolve_preset};
pub use sink::{PathSink, replay};
pub use svg::SvgPathData;
pub use tracer::{PathTracer, trace};

use crate::types::{Geometry, ResolvedGeometry, TracedPath};

/// Resolve any geometry for a `width` x `height` shape.
///
/// Returns `None` only for a preset name the catalog does not know.
pub fn resolve_geometry(geometry: &Geometry, width: f64, height: f64) -> Option<ResolvedGeometry> {
    match geometry {
        Geometry::Preset {
            name,
            adjust_values,
        } => resolve_preset(name, width, height, Some(adjust_values)),
        Geometry::Custom(def) => Some(resolve_custom(def, width, height)),
    }
}

impl ResolvedGeometry {
    /// Trace every path onto a `width` x `height` shape, keeping paint attributes
    pub fn trace(&self, width: f64, height: f64) -> Vec<TracedPath> {
        self.paths
            .iter()
            .map(|path| TracedPath {
                fill: path.fill,
                stroke: path.stroke,
                primitives: trace(
                    &path.commands,
                    path.path_width,
                    path.path_height,
                    width,
                    height,
                ),
            })
            .collect()
    }

    /// One SVG `d` string per path
    pub fn to_svg_paths(&self, width: f64, height: f64) -> Vec<String> {
        self.trace(width, height)
            .iter()
            .map(TracedPath::to_svg_path)
            .collect()
    }
}

impl TracedPath {
    /// Replay into a sink
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        replay(&self.primitives, sink);
    }

    pub fn to_svg_path(&self) -> String {
        let mut svg = SvgPathData::new();
        self.replay(&mut svg);
        svg.into_string()
    }
}
