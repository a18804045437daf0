//! SVG path data backend

use std::f64::consts::{PI, TAU};
use std::fmt::{self, Write};

use glam::{DVec2, dvec2};

use super::sink::PathSink;

/// Builds an SVG `d` attribute from path primitives.
///
/// Ellipse arcs arrive centre-parameterised and are written in SVG's
/// endpoint form. Like a canvas `ellipse()`, an arc is joined to the current
/// point with a line when it does not start there, and starts a new subpath
/// when there is no current point.
#[derive(Debug, Clone, Default)]
pub struct SvgPathData {
    data: String,
    current: Option<DVec2>,
    subpath_start: Option<DVec2>,
}

/// Points closer than this are treated as coincident
const JOIN_EPSILON: f64 = 1e-6;

impl SvgPathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn push_cmd(&mut self, cmd: char, coords: &[f64]) {
        self.data.push(cmd);
        for (i, pair) in coords.chunks(2).enumerate() {
            if i > 0 {
                self.data.push(' ');
            }
            self.data.push_str(&fmt_num(pair[0]));
            if let Some(y) = pair.get(1) {
                self.data.push(',');
                self.data.push_str(&fmt_num(*y));
            }
        }
    }

    fn push_arc(&mut self, radii: DVec2, rotation_deg: f64, large: bool, sweep: bool, to: DVec2) {
        // write! into a String cannot fail
        let _ = write!(
            self.data,
            "A{},{} {} {},{} {},{}",
            fmt_num(radii.x),
            fmt_num(radii.y),
            fmt_num(rotation_deg),
            large as u8,
            sweep as u8,
            fmt_num(to.x),
            fmt_num(to.y),
        );
        self.current = Some(to);
    }
}

impl fmt::Display for SvgPathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl PathSink for SvgPathData {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push_cmd('M', &[x, y]);
        self.current = Some(dvec2(x, y));
        self.subpath_start = self.current;
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if self.current.is_none() {
            return self.move_to(x, y);
        }
        self.push_cmd('L', &[x, y]);
        self.current = Some(dvec2(x, y));
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        if self.current.is_none() {
            self.move_to(x1, y1);
        }
        self.push_cmd('C', &[x1, y1, x2, y2, x, y]);
        self.current = Some(dvec2(x, y));
    }

    fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        if self.current.is_none() {
            self.move_to(x1, y1);
        }
        self.push_cmd('Q', &[x1, y1, x, y]);
        self.current = Some(dvec2(x, y));
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
        let center = dvec2(cx, cy);
        let radii = dvec2(rx.abs(), ry.abs());
        let sweep = normalized_sweep(start_rad, end_rad, counterclockwise);
        let start = ellipse_point(center, radii, rotation, start_rad);

        match self.current {
            None => self.move_to(start.x, start.y),
            Some(p) if (p - start).length() > JOIN_EPSILON => self.line_to(start.x, start.y),
            Some(_) => {}
        }

        if sweep == 0.0 || radii.x == 0.0 || radii.y == 0.0 {
            return;
        }

        let rotation_deg = rotation.to_degrees();
        let sweep_flag = sweep > 0.0;
        if sweep.abs() >= TAU - JOIN_EPSILON {
            // An SVG arc cannot end where it starts; split the full turn
            let half = start_rad + sweep / 2.0;
            let mid = ellipse_point(center, radii, rotation, half);
            self.push_arc(radii, rotation_deg, false, sweep_flag, mid);
        }
        let end = ellipse_point(center, radii, rotation, start_rad + sweep);
        let remaining = if sweep.abs() >= TAU - JOIN_EPSILON {
            sweep / 2.0
        } else {
            sweep
        };
        self.push_arc(radii, rotation_deg, remaining.abs() > PI, sweep_flag, end);
    }

    fn close_path(&mut self) {
        self.data.push('Z');
        self.current = self.subpath_start;
    }
}

/// Sweep as a canvas `ellipse()` interprets `(start, end, counterclockwise)`
fn normalized_sweep(start_rad: f64, end_rad: f64, counterclockwise: bool) -> f64 {
    let delta = end_rad - start_rad;
    if counterclockwise {
        if delta <= -TAU {
            -TAU
        } else {
            -((-delta).rem_euclid(TAU))
        }
    } else if delta >= TAU {
        TAU
    } else {
        delta.rem_euclid(TAU)
    }
}

fn ellipse_point(center: DVec2, radii: DVec2, rotation: f64, angle: f64) -> DVec2 {
    let local = radii * dvec2(angle.cos(), angle.sin());
    center + DVec2::from_angle(rotation).rotate(local)
}

/// Format a coordinate with 6 significant figures, trailing zeros trimmed.
/// Values within 1e-9 of zero print as `0`.
pub fn fmt_num(value: f64) -> String {
    if value.abs() < 1e-9 || !value.is_finite() {
        return "0".to_string();
    }

    const SIG_FIGS: i32 = 6;
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", value, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
