//! Navigation: the current view transform and animated moves between views.

mod animation;
mod transformer;

pub use animation::AnimationTransforms;
pub use transformer::Transformer;
