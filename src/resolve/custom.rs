//! Custom geometry resolution
//!
//! Document-authored shapes carry their own guide list and already-numeric
//! path commands. Only the guides and the connection sites need evaluating.

use crate::types::{
    ConnectionSite, ConnectionSiteDefinition, CustomGeometryDefinition, NumericPathCommand,
    PathFill, ResolvedCommand, ResolvedGeometry, ResolvedPath, ShapePath,
};

use super::context::GuideContext;
use super::eval::ooxml_angle_to_degrees;

/// Resolve a custom geometry for a `width` x `height` shape
pub fn resolve_custom(
    def: &CustomGeometryDefinition,
    width: f64,
    height: f64,
) -> ResolvedGeometry {
    let ctx = def.guide_context(width, height);
    ResolvedGeometry {
        paths: def.paths.iter().map(resolve_path).collect(),
        text_rect: None,
        connection_sites: def
            .connection_sites
            .iter()
            .map(|site| resolve_connection_site(&ctx, site))
            .collect(),
    }
}

impl CustomGeometryDefinition {
    /// Built-ins plus every declared guide, evaluated in order
    pub fn guide_context(&self, width: f64, height: f64) -> GuideContext {
        let mut ctx = GuideContext::new(width, height);
        ctx.evaluate_guides(&self.guides);
        ctx
    }

    pub fn resolve(&self, width: f64, height: f64) -> ResolvedGeometry {
        resolve_custom(self, width, height)
    }
}

fn resolve_path(path: &ShapePath) -> ResolvedPath {
    ResolvedPath {
        path_width: path.path_width,
        path_height: path.path_height,
        fill: path.fill_override.unwrap_or(PathFill::Norm),
        stroke: path.stroke_override.unwrap_or(true),
        commands: path.commands.iter().map(|c| (*c).into()).collect(),
    }
}

fn resolve_connection_site(ctx: &GuideContext, site: &ConnectionSiteDefinition) -> ConnectionSite {
    ConnectionSite {
        x: ctx.resolve_ref(&site.pos_x_ref),
        y: ctx.resolve_ref(&site.pos_y_ref),
        angle_deg: ooxml_angle_to_degrees(ctx.resolve_ref(&site.angle)),
    }
}

impl From<NumericPathCommand> for ResolvedCommand {
    fn from(cmd: NumericPathCommand) -> Self {
        match cmd {
            NumericPathCommand::MoveTo { x, y } => ResolvedCommand::MoveTo { x, y },
            NumericPathCommand::LineTo { x, y } => ResolvedCommand::LineTo { x, y },
            NumericPathCommand::CubicBezierTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => ResolvedCommand::CubicBezierTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            },
            NumericPathCommand::QuadBezierTo { x1, y1, x, y } => {
                ResolvedCommand::QuadBezierTo { x1, y1, x, y }
            }
            NumericPathCommand::ArcTo {
                w_r,
                h_r,
                start_angle_deg,
                sweep_angle_deg,
            } => ResolvedCommand::ArcTo {
                w_r,
                h_r,
                start_angle_deg,
                sweep_angle_deg,
            },
            NumericPathCommand::Close => ResolvedCommand::Close,
        }
    }
}
