//! Configuration for the hyperbolic tree layout.
//!
//! - [`Settings`]: user-facing values, loaded from TOML and `HYPERTREE_*` env vars
//! - [`Orientation`]: growth direction of the tree
//! - [`LayoutConfig`]: parameters derived from validated settings

mod layout;
mod orientation;
mod settings;

pub use self::layout::LayoutConfig;
pub use self::orientation::Orientation;
pub use self::settings::{Settings, ENV_PREFIX};
