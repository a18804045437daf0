//! Resolve DrawingML shape geometry into vector path primitives.
//!
//! A shape's geometry is either a named preset (`roundRect`, `can`, ...)
//! with optional adjust values, or a custom definition authored in the
//! document. Either way, resolution evaluates the shape's guide formulas for
//! a concrete width and height, turns the path commands into numbers, and
//! the tracer lowers them into absolute primitives ready for a canvas-like
//! backend.
//!
//! ```
//! use prstgeom::{Geometry, resolve_geometry};
//!
//! let geometry = Geometry::Preset {
//!     name: "rect".into(),
//!     adjust_values: Default::default(),
//! };
//! let resolved = resolve_geometry(&geometry, 100.0, 80.0).unwrap();
//! assert_eq!(resolved.to_svg_paths(100.0, 80.0), ["M0,0L100,0L100,80L0,80Z"]);
//! ```

pub mod ast;
pub mod errors;
mod log;
pub mod parse;
pub mod resolve;
pub mod types;

pub use ast::{Formula, Operand, Operator};
pub use errors::FormulaError;
pub use parse::parse_formula;
pub use resolve::{
    GuideContext, PathSink, PathTracer, PresetGeometryCatalog, SvgPathData, evaluate,
    lookup_preset, replay, resolve_custom, resolve_geometry, resolve_preset, trace,
};
pub use types::*;
