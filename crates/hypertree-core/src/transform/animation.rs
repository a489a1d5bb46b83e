//! Interpolated transforms for animated focus changes.

use std::iter::FusedIterator;
use std::vec;

use super::Transformer;
use crate::hyperbolic::complex::{Complex, ComplexExt};
use crate::hyperbolic::distance::hyperbolic_distance;
use crate::hyperbolic::mobius::{HyperTransform, HyperTranslation};

/// Frames per unit of hyperbolic distance when the step count is automatic.
const STEPS_PER_UNIT: f64 = 3.0;

/// Hyperbolic distances below this are treated as no move at all.
const MIN_DISTANCE: f64 = 1e-12;

/// One-shot sequence of transforms animating a move from `from` to `to`.
///
/// Each item is a complete view transform (the transformer's current one
/// composed with a partial move) to be installed with
/// [`Transformer::set_transform`]. The last item is exact, so the animation
/// always lands on the target.
#[derive(Debug, Clone)]
pub struct AnimationTransforms {
    frames: vec::IntoIter<HyperTransform>,
}

impl AnimationTransforms {
    /// Builds the frames for moving the point displayed at `from` to `to`.
    ///
    /// `steps == 0` derives the frame count from the hyperbolic distance,
    /// see [`AnimationTransforms::auto_steps`]. Returns `None` when the two
    /// points coincide (up to rounding).
    ///
    /// Points on the unit circle, such as centers clamped by
    /// [`Transformer::transform`], are first pulled just inside the disk.
    pub fn make(
        from: Complex,
        to: Complex,
        transformer: &Transformer,
        orientation: Complex,
        steps: usize,
    ) -> Option<Self> {
        let from = from.pull_inside();
        let to = to.pull_inside();
        let distance = hyperbolic_distance(from, to);
        if distance < MIN_DISTANCE {
            return None;
        }
        let steps = if steps == 0 {
            Self::auto_steps(distance)
        } else {
            steps
        };

        let current = transformer.transform_of();

        // `from` as seen from `to`: bearing and Euclidean length to interpolate
        let offset = HyperTranslation::map(from, -to);
        let bearing = offset.arg();
        let length = offset.mag();

        let mut frames = Vec::with_capacity(steps);
        for i in 1..steps {
            let fraction = i as f64 / steps as f64;
            let waypoint = HyperTranslation::map(Complex::polar(bearing, length * fraction), to);
            let partial = transformer.make_transform(waypoint, to, orientation);
            frames.push(current.compose(&partial));
        }
        let last = transformer.make_transform(from, to, orientation);
        frames.push(current.compose(&last));

        tracing::debug!(distance, steps, "built animation transforms");
        Some(Self {
            frames: frames.into_iter(),
        })
    }

    /// `max(1, ceil(3 · distance))`.
    pub fn auto_steps(distance: f64) -> usize {
        ((STEPS_PER_UNIT * distance).ceil() as usize).max(1)
    }
}

impl Iterator for AnimationTransforms {
    type Item = HyperTransform;

    fn next(&mut self) -> Option<HyperTransform> {
        self.frames.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}

impl ExactSizeIterator for AnimationTransforms {}

impl FusedIterator for AnimationTransforms {}
