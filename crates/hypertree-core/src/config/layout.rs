//! Layout parameters derived from settings.

use std::f64::consts::{FRAC_PI_2, PI};

use super::{Orientation, Settings};
use crate::error::HyperResult;
use crate::hyperbolic::complex::Complex;
use crate::hyperbolic::distance::distance_to_origin_e2h;

/// Immutable parameters consumed by the layout walk.
///
/// Built once from validated [`Settings`]; rebuild to change anything.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    orientation: Orientation,
    orientation_vector: Complex,
    root_half_wedge: f64,
    clockwise: bool,
    base_node_distance: f64,
    root_radius: f64,
    sweep_factor: f64,
}

impl LayoutConfig {
    /// Validates `settings` and derives the layout parameters.
    ///
    /// The root circle's hyperbolic radius is `e2h(expansion / 2)`, so the
    /// root's Euclidean extent is half the base child distance.
    pub fn from_settings(settings: &Settings) -> HyperResult<Self> {
        settings.validate()?;
        Ok(Self::derive(settings))
    }

    /// Derivation shared by [`LayoutConfig::from_settings`] and `Default`;
    /// `settings` must already be valid.
    fn derive(settings: &Settings) -> Self {
        let orientation = settings.orientation;
        Self {
            orientation,
            orientation_vector: orientation.vector(),
            root_half_wedge: if orientation.is_radial() { PI } else { FRAC_PI_2 },
            clockwise: orientation.is_clockwise(),
            base_node_distance: settings.expansion,
            root_radius: distance_to_origin_e2h(settings.expansion / 2.0),
            sweep_factor: settings.sweep,
        }
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Unit vector of the growth direction; zero for radial layouts.
    #[inline]
    pub fn orientation_vector(&self) -> Complex {
        self.orientation_vector
    }

    /// Half of the angular wedge available to the root's children.
    #[inline]
    pub fn root_half_wedge(&self) -> f64 {
        self.root_half_wedge
    }

    #[inline]
    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    #[inline]
    pub fn base_node_distance(&self) -> f64 {
        self.base_node_distance
    }

    /// Hyperbolic radius of the root node's circle.
    #[inline]
    pub fn root_radius(&self) -> f64 {
        self.root_radius
    }

    #[inline]
    pub fn sweep_factor(&self) -> f64 {
        self.sweep_factor
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::derive(&Settings::default())
    }
}
