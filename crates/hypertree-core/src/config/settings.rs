//! User-facing settings.

use std::f64::consts::FRAC_PI_2;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Orientation;
use crate::error::{HyperError, HyperResult};

/// Prefix of environment variables overriding settings (`HYPERTREE_EXPANSION=0.4`).
pub const ENV_PREFIX: &str = "HYPERTREE";

/// Settings supplied by the embedding application.
///
/// Every field has a default, so partial files and environment overrides
/// are accepted. Values are checked by [`Settings::validate`]; layout
/// parameters are derived from validated settings through
/// [`LayoutConfig::from_settings`](super::LayoutConfig::from_settings).
///
/// # Example
/// ```
/// use hypertree_core::config::{Orientation, Settings};
///
/// let settings = Settings::default();
/// assert_eq!(settings.orientation, Orientation::Radial);
/// assert_eq!(settings.expansion, 0.3);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Growth direction of the tree.
    pub orientation: Orientation,

    /// Base Euclidean distance between a node and its children.
    /// Must be in open interval (0, 1). Default: 0.3
    pub expansion: f64,

    /// Angular sweep factor used when spacing siblings.
    /// Must be in (0, π/2]. Default: 1.0
    pub sweep: f64,

    /// Keep the reference direction fixed while panning. Default: true
    pub preserve_orientation: bool,

    /// Number of animation frames for a focus change; 0 derives it from
    /// the hyperbolic distance travelled. Default: 0
    pub animation_steps: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Radial,
            expansion: 0.3,
            sweep: 1.0,
            preserve_orientation: true,
            animation_steps: 0,
        }
    }
}

impl Settings {
    /// Loads settings from an optional TOML file, then `HYPERTREE_*`
    /// environment variables, and validates the result.
    ///
    /// # Errors
    /// - `HyperError::Config` if the file is missing or malformed
    /// - `HyperError::InvalidConfig` / `InvalidOrientation` if a value is out of range
    pub fn load(path: Option<&Path>) -> HyperResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Settings::load`], reading overrides from `env` instead of the
    /// process environment when given.
    pub(crate) fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> HyperResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        tracing::debug!(
            orientation = %settings.orientation,
            expansion = settings.expansion,
            sweep = settings.sweep,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Validates all values, returning the FIRST error encountered.
    pub fn validate(&self) -> HyperResult<()> {
        if self.expansion.is_nan() {
            return Err(HyperError::InvalidConfig(
                "expansion cannot be NaN".to_string(),
            ));
        }
        if self.expansion <= 0.0 || self.expansion >= 1.0 {
            return Err(HyperError::InvalidConfig(format!(
                "expansion must be in open interval (0, 1), got {}",
                self.expansion
            )));
        }

        if self.sweep.is_nan() {
            return Err(HyperError::InvalidConfig("sweep cannot be NaN".to_string()));
        }
        // above π/2 the sibling spacing cosine goes negative for single children
        if self.sweep <= 0.0 || self.sweep > FRAC_PI_2 {
            return Err(HyperError::InvalidConfig(format!(
                "sweep must be in (0, π/2], got {}",
                self.sweep
            )));
        }

        Ok(())
    }
}
