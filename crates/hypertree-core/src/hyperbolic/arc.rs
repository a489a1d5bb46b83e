//! Geodesic arcs for drawing edges.
//!
//! A hyperbolic line segment between two points of the disk is either a
//! piece of a diameter or an arc of the circle through both points that
//! meets the unit circle at right angles. For such a circle with center `c`
//! and radius `r`, orthogonality gives `|c|^2 = r^2 + 1`, and passing
//! through `z` gives `2·Re(conj(c)·z) = 1 + |z|^2`.

use serde::Serialize;

use super::complex::{Complex, ComplexExt};
use super::xmath::angle_between;

/// Below this, points are treated as collinear with the origin.
const COLLINEAR_EPS: f64 = 1e-9;

/// How to draw the geodesic between two node centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geodesic {
    /// Straight segment along a diameter.
    Line { from: Complex, to: Complex },
    /// Circular arc starting at `start_angle` (as seen from `center`) and
    /// sweeping `sweep` radians; negative sweep is clockwise.
    Arc {
        center: Complex,
        radius: f64,
        start_angle: f64,
        sweep: f64,
    },
}

/// Geodesic between `z1` and `z2`.
pub fn geodesic(z1: Complex, z2: Complex) -> Geodesic {
    let cross = z1.re * z2.im - z1.im * z2.re;
    if cross.abs() < COLLINEAR_EPS {
        return Geodesic::Line { from: z1, to: z2 };
    }

    let k1 = (1.0 + z1.abs2()) / 2.0;
    let k2 = (1.0 + z2.abs2()) / 2.0;
    let center = Complex::new(
        (k1 * z2.im - k2 * z1.im) / cross,
        (z1.re * k2 - z2.re * k1) / cross,
    );
    let radius = (z1 - center).mag();
    let start_angle = (z1 - center).arg();
    let end_angle = (z2 - center).arg();

    Geodesic::Arc {
        center,
        radius,
        start_angle,
        sweep: angle_between(start_angle, end_angle),
    }
}

impl Geodesic {
    /// Point at parameter `t` in `[0, 1]` along the drawn curve.
    pub fn point_at(&self, t: f64) -> Complex {
        match *self {
            Geodesic::Line { from, to } => from + (to - from) * t,
            Geodesic::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => center + Complex::polar(start_angle + sweep * t, radius),
        }
    }
}
