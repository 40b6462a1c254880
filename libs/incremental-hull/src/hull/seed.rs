//! Seed tetrahedron selection.

use crate::error::{HullError, HullResult};
use crate::geometry::{orientation, Point};
use rand::Rng;
use tracing::{debug, warn};

/// A non-coplanar quadruple drawn from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Seed {
    /// Distinct indices into the point slice.
    pub indices: [usize; 4],
    /// `orientation` of the four points in index order.
    pub determinant: f64,
    /// Attempts spent, including the successful one.
    pub attempts: u32,
}

impl Seed {
    /// Seed corners ordered so the tetrahedron's faces wind outward.
    pub fn oriented_points(&self, points: &[Point]) -> [Point; 4] {
        let [a, b, c, d] = self.indices.map(|i| points[i]);
        if self.determinant > 0.0 {
            [a, b, c, d]
        } else {
            [b, a, c, d]
        }
    }
}

/// Draws random distinct quadruples until one spans a volume whose
/// determinant magnitude exceeds `tolerance`.
pub(crate) fn select_seed<R: Rng + ?Sized>(
    points: &[Point],
    rng: &mut R,
    max_attempts: u32,
    tolerance: f64,
) -> HullResult<Seed> {
    if points.len() < 4 {
        return Err(HullError::degenerate(format!(
            "a hull needs at least 4 points, got {}",
            points.len()
        )));
    }

    for attempt in 1..=max_attempts {
        let sample = rand::seq::index::sample(rng, points.len(), 4);
        let indices = [
            sample.index(0),
            sample.index(1),
            sample.index(2),
            sample.index(3),
        ];
        let [a, b, c, d] = indices.map(|i| points[i]);
        let determinant = orientation(a, b, c, d);
        if determinant.abs() > tolerance {
            debug!(attempt, determinant, ?indices, "seed tetrahedron found");
            return Ok(Seed {
                indices,
                determinant,
                attempts: attempt,
            });
        }
    }

    warn!(
        max_attempts,
        points = points.len(),
        "no non-coplanar quadruple found"
    );
    Err(HullError::degenerate(format!(
        "no non-coplanar quadruple among {} points after {max_attempts} attempts",
        points.len()
    )))
}
