//! Backend seam: the six path capabilities a consumer of primitives needs

use crate::types::Primitive;

/// A 2D vector path backend (canvas-like)
pub trait PathSink {
    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);

    fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64);

    /// Centre-parameterised ellipse arc; angles in radians
    #[allow(clippy::too_many_arguments)]
    fn ellipse_arc(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_rad: f64,
        end_rad: f64,
        counterclockwise: bool,
    );

    fn close_path(&mut self);
}

impl Primitive {
    /// Feed this primitive to a sink
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            Primitive::MoveTo { x, y } => sink.move_to(x, y),
            Primitive::LineTo { x, y } => sink.line_to(x, y),
            Primitive::BezierCurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => sink.bezier_curve_to(x1, y1, x2, y2, x, y),
            Primitive::QuadraticCurveTo { x1, y1, x, y } => sink.quadratic_curve_to(x1, y1, x, y),
            Primitive::EllipseArc {
                cx,
                cy,
                rx,
                ry,
                rotation,
                start_rad,
                end_rad,
                counterclockwise,
            } => sink.ellipse_arc(cx, cy, rx, ry, rotation, start_rad, end_rad, counterclockwise),
            Primitive::ClosePath => sink.close_path(),
        }
    }
}

/// Feed a primitive sequence to a sink, in order
pub fn replay<S: PathSink + ?Sized>(primitives: &[Primitive], sink: &mut S) {
    for primitive in primitives {
        primitive.replay(sink);
    }
}

/// Recording sink
impl PathSink for Vec<Primitive> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push(Primitive::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(Primitive::LineTo { x, y });
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.push(Primitive::BezierCurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.push(Primitive::QuadraticCurveTo { x1, y1, x, y });
    }

    fn ellipse_arc(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_rad: f64,
        end_rad: f64,
        counterclockwise: bool,
    ) {
        self.push(Primitive::EllipseArc {
            cx,
            cy,
            rx,
            ry,
            rotation,
            start_rad,
            end_rad,
            counterclockwise,
        });
    }

    fn close_path(&mut self) {
        self.push(Primitive::ClosePath);
    }
}
