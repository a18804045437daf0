//! Path tracer: lowers resolved commands into absolute-space primitives.
//!
//! # Key Concepts
//!
//! - **Scale**: a path authored against a `w` x `h` path space is stretched
//!   onto the shape by `shape_w / w`, `shape_h / h`. A missing or
//!   non-positive path dimension means scale 1 on that axis.
//!
//! - **Current point**: starts at the origin and follows every emitted
//!   segment end. `ArcTo` is relative to it: the arc's start angle says where
//!   on the ellipse the current point sits, which fixes the centre.
//!
//! - **Degenerate arcs** (non-positive radius, negligible sweep) emit nothing
//!   and leave the current point where it was.
//!
//! - **Close** does not move the current point.

use glam::{DVec2, dvec2};

use crate::types::{Primitive, ResolvedCommand};

use super::defaults::MIN_ARC_SWEEP_RAD;

/// Incremental tracer for one path
#[derive(Debug)]
pub struct PathTracer {
    /// Path space to shape space, per axis
    scale: DVec2,
    /// Last emitted point, shape space
    current: DVec2,
    primitives: Vec<Primitive>,
}

impl PathTracer {
    /// Create a tracer mapping a path space onto a `shape_w` x `shape_h` shape
    pub fn new(
        path_width: Option<f64>,
        path_height: Option<f64>,
        shape_width: f64,
        shape_height: f64,
    ) -> Self {
        Self {
            scale: dvec2(
                axis_scale(path_width, shape_width),
                axis_scale(path_height, shape_height),
            ),
            current: DVec2::ZERO,
            primitives: Vec::new(),
        }
    }

    /// Per-axis path-to-shape scale
    pub fn scale(&self) -> DVec2 {
        self.scale
    }

    /// Current point in shape space
    pub fn current_point(&self) -> DVec2 {
        self.current
    }

    fn map(&self, x: f64, y: f64) -> DVec2 {
        dvec2(x, y) * self.scale
    }

    /// Lower one command
    pub fn push(&mut self, command: ResolvedCommand) {
        match command {
            ResolvedCommand::MoveTo { x, y } => {
                let p = self.map(x, y);
                self.primitives.push(Primitive::MoveTo { x: p.x, y: p.y });
                self.current = p;
            }
            ResolvedCommand::LineTo { x, y } => {
                let p = self.map(x, y);
                self.primitives.push(Primitive::LineTo { x: p.x, y: p.y });
                self.current = p;
            }
            ResolvedCommand::CubicBezierTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let c1 = self.map(x1, y1);
                let c2 = self.map(x2, y2);
                let p = self.map(x, y);
                self.primitives.push(Primitive::BezierCurveTo {
                    x1: c1.x,
                    y1: c1.y,
                    x2: c2.x,
                    y2: c2.y,
                    x: p.x,
                    y: p.y,
                });
                self.current = p;
            }
            ResolvedCommand::QuadBezierTo { x1, y1, x, y } => {
                let c = self.map(x1, y1);
                let p = self.map(x, y);
                self.primitives.push(Primitive::QuadraticCurveTo {
                    x1: c.x,
                    y1: c.y,
                    x: p.x,
                    y: p.y,
                });
                self.current = p;
            }
            ResolvedCommand::ArcTo {
                w_r,
                h_r,
                start_angle_deg,
                sweep_angle_deg,
            } => self.arc_to(w_r, h_r, start_angle_deg, sweep_angle_deg),
            ResolvedCommand::Close => {
                self.primitives.push(Primitive::ClosePath);
            }
        }
    }

    fn arc_to(&mut self, w_r: f64, h_r: f64, start_angle_deg: f64, sweep_angle_deg: f64) {
        let start_rad = start_angle_deg.to_radians();
        let sweep_rad = sweep_angle_deg.to_radians();

        if w_r <= 0.0 || h_r <= 0.0 || sweep_rad.abs() < MIN_ARC_SWEEP_RAD {
            crate::log::debug!(w_r, h_r, sweep_angle_deg, "skipping degenerate arc");
            return;
        }

        let radii = self.map(w_r, h_r);
        let center = self.current - radii * dvec2(start_rad.cos(), start_rad.sin());
        let end_rad = start_rad + sweep_rad;

        self.primitives.push(Primitive::EllipseArc {
            cx: center.x,
            cy: center.y,
            rx: radii.x,
            ry: radii.y,
            rotation: 0.0,
            start_rad,
            end_rad,
            counterclockwise: sweep_rad < 0.0,
        });

        self.current = center + radii * dvec2(end_rad.cos(), end_rad.sin());
    }

    /// Finish and return the emitted primitives
    pub fn build(self) -> Vec<Primitive> {
        self.primitives
    }
}

fn axis_scale(path_extent: Option<f64>, shape_extent: f64) -> f64 {
    match path_extent {
        Some(extent) if extent > 0.0 => shape_extent / extent,
        _ => 1.0,
    }
}

/// Trace a command list into shape-space primitives
pub fn trace(
    commands: &[ResolvedCommand],
    path_width: Option<f64>,
    path_height: Option<f64>,
    shape_width: f64,
    shape_height: f64,
) -> Vec<Primitive> {
    let mut tracer = PathTracer::new(path_width, path_height, shape_width, shape_height);
    for command in commands {
        tracer.push(*command);
    }
    tracer.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_eq(actual: DVec2, expected: DVec2) {
        const EPSILON: f64 = 1e-9;
        assert!(
            (actual - expected).length() < EPSILON,
            "point mismatch: {:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_unscaled_lines() {
        let prims = trace(
            &[
                ResolvedCommand::MoveTo { x: 1.0, y: 2.0 },
                ResolvedCommand::LineTo { x: 3.0, y: 4.0 },
                ResolvedCommand::Close,
            ],
            None,
            None,
            100.0,
            100.0,
        );
        assert_eq!(
            prims,
            vec![
                Primitive::MoveTo { x: 1.0, y: 2.0 },
                Primitive::LineTo { x: 3.0, y: 4.0 },
                Primitive::ClosePath,
            ]
        );
    }

    #[test]
    fn test_path_space_scaling() {
        let prims = trace(
            &[
                ResolvedCommand::MoveTo { x: 0.0, y: 0.0 },
                ResolvedCommand::LineTo { x: 100.0, y: 0.0 },
                ResolvedCommand::LineTo { x: 100.0, y: 100.0 },
            ],
            Some(100.0),
            Some(100.0),
            200.0,
            300.0,
        );
        assert_eq!(prims[1], Primitive::LineTo { x: 200.0, y: 0.0 });
        assert_eq!(prims[2], Primitive::LineTo { x: 200.0, y: 300.0 });
    }

    #[test]
    fn test_zero_path_extent_means_unit_scale() {
        let tracer = PathTracer::new(Some(0.0), Some(-5.0), 200.0, 300.0);
        assert_eq!(tracer.scale(), dvec2(1.0, 1.0));
    }

    #[test]
    fn test_curves_scale_and_advance() {
        let mut tracer = PathTracer::new(Some(10.0), Some(10.0), 20.0, 40.0);
        tracer.push(ResolvedCommand::CubicBezierTo {
            x1: 1.0,
            y1: 1.0,
            x2: 2.0,
            y2: 2.0,
            x: 3.0,
            y: 3.0,
        });
        assert_point_eq(tracer.current_point(), dvec2(6.0, 12.0));
        tracer.push(ResolvedCommand::QuadBezierTo {
            x1: 5.0,
            y1: 5.0,
            x: 10.0,
            y: 0.0,
        });
        assert_point_eq(tracer.current_point(), dvec2(20.0, 0.0));
        let prims = tracer.build();
        assert_eq!(
            prims[0],
            Primitive::BezierCurveTo {
                x1: 2.0,
                y1: 4.0,
                x2: 4.0,
                y2: 8.0,
                x: 6.0,
                y: 12.0,
            }
        );
        assert_eq!(
            prims[1],
            Primitive::QuadraticCurveTo {
                x1: 10.0,
                y1: 20.0,
                x: 20.0,
                y: 0.0,
            }
        );
    }

    #[test]
    fn test_arc_center_and_endpoint() {
        let mut tracer = PathTracer::new(None, None, 100.0, 100.0);
        tracer.push(ResolvedCommand::MoveTo { x: 0.0, y: 50.0 });
        tracer.push(ResolvedCommand::ArcTo {
            w_r: 50.0,
            h_r: 50.0,
            start_angle_deg: 180.0,
            sweep_angle_deg: 90.0,
        });
        assert_point_eq(tracer.current_point(), dvec2(50.0, 0.0));

        let prims = tracer.build();
        match prims[1] {
            Primitive::EllipseArc {
                cx,
                cy,
                rx,
                ry,
                rotation,
                start_rad,
                end_rad,
                counterclockwise,
            } => {
                assert_point_eq(dvec2(cx, cy), dvec2(50.0, 50.0));
                assert_eq!((rx, ry, rotation), (50.0, 50.0, 0.0));
                assert!((start_rad - std::f64::consts::PI).abs() < 1e-12);
                assert!((end_rad - 1.5 * std::f64::consts::PI).abs() < 1e-12);
                assert!(!counterclockwise);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_sweep_is_counterclockwise() {
        let mut tracer = PathTracer::new(None, None, 100.0, 100.0);
        tracer.push(ResolvedCommand::MoveTo { x: 100.0, y: 50.0 });
        tracer.push(ResolvedCommand::ArcTo {
            w_r: 50.0,
            h_r: 25.0,
            start_angle_deg: 0.0,
            sweep_angle_deg: -90.0,
        });
        assert_point_eq(tracer.current_point(), dvec2(50.0, 25.0));
        assert!(matches!(
            tracer.build()[1],
            Primitive::EllipseArc {
                counterclockwise: true,
                ..
            }
        ));
    }

    #[test]
    fn test_arc_radii_follow_path_scale() {
        let mut tracer = PathTracer::new(Some(10.0), Some(10.0), 20.0, 40.0);
        tracer.push(ResolvedCommand::MoveTo { x: 0.0, y: 5.0 });
        tracer.push(ResolvedCommand::ArcTo {
            w_r: 5.0,
            h_r: 5.0,
            start_angle_deg: 180.0,
            sweep_angle_deg: 180.0,
        });
        // centre (10, 20), radii (10, 20), ends at angle 0
        assert_point_eq(tracer.current_point(), dvec2(20.0, 20.0));
    }

    #[test]
    fn test_degenerate_arcs_are_skipped() {
        let mut tracer = PathTracer::new(None, None, 100.0, 100.0);
        tracer.push(ResolvedCommand::MoveTo { x: 10.0, y: 10.0 });
        for (w_r, h_r, sweep) in [(0.0, 5.0, 90.0), (5.0, -1.0, 90.0), (5.0, 5.0, 0.0)] {
            tracer.push(ResolvedCommand::ArcTo {
                w_r,
                h_r,
                start_angle_deg: 0.0,
                sweep_angle_deg: sweep,
            });
        }
        assert_point_eq(tracer.current_point(), dvec2(10.0, 10.0));
        assert_eq!(tracer.build().len(), 1);
    }

    #[test]
    fn test_sweep_below_threshold_is_skipped() {
        let mut tracer = PathTracer::new(None, None, 100.0, 100.0);
        tracer.push(ResolvedCommand::MoveTo { x: 10.0, y: 10.0 });
        // 1e-9 degrees is ~1.75e-11 rad
        tracer.push(ResolvedCommand::ArcTo {
            w_r: 5.0,
            h_r: 5.0,
            start_angle_deg: 0.0,
            sweep_angle_deg: 1e-9,
        });
        assert_eq!(tracer.current_point(), dvec2(10.0, 10.0));
        assert_eq!(tracer.build(), vec![Primitive::MoveTo { x: 10.0, y: 10.0 }]);
    }

    #[test]
    fn test_sweep_above_threshold_is_emitted() {
        let mut tracer = PathTracer::new(None, None, 100.0, 100.0);
        tracer.push(ResolvedCommand::MoveTo { x: 10.0, y: 10.0 });
        tracer.push(ResolvedCommand::ArcTo {
            w_r: 5.0,
            h_r: 5.0,
            start_angle_deg: 0.0,
            sweep_angle_deg: 1e-7,
        });
        let prims = tracer.build();
        assert_eq!(prims.len(), 2);
        match prims[1] {
            Primitive::EllipseArc {
                cx,
                cy,
                start_rad,
                end_rad,
                counterclockwise,
                ..
            } => {
                assert_point_eq(dvec2(cx, cy), dvec2(5.0, 10.0));
                assert_eq!(start_rad, 0.0);
                assert!((end_rad - 1e-7f64.to_radians()).abs() < 1e-20);
                assert!(!counterclockwise);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_close_keeps_current_point() {
        let mut tracer = PathTracer::new(None, None, 10.0, 10.0);
        tracer.push(ResolvedCommand::MoveTo { x: 1.0, y: 1.0 });
        tracer.push(ResolvedCommand::LineTo { x: 5.0, y: 1.0 });
        tracer.push(ResolvedCommand::Close);
        assert_point_eq(tracer.current_point(), dvec2(5.0, 1.0));
    }
}
