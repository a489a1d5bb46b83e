//! Thread-safe facade over a laid-out tree.
//!
//! [`HyperView`] owns the tree together with its layout parameters and
//! transformer. Every whole-tree walk (weigh, layout, transform, remap) runs
//! under the write lock, so two walks over the same tree never overlap.
//! Readers take the read lock through [`HyperView::with_tree`].

use parking_lot::RwLock;
use tracing::instrument;

use crate::config::{LayoutConfig, Settings};
use crate::error::{HyperError, HyperResult};
use crate::hyperbolic::complex::{checked_disk_point, Complex, ORIGIN};
use crate::hyperbolic::mobius::HyperTransform;
use crate::layout::{LayerOut, Weigher};
use crate::location::MapperToEuclidean;
use crate::transform::{AnimationTransforms, Transformer};
use crate::tree::{MountPoint, NodeId, Tree};

struct ViewState {
    tree: Tree,
    settings: Settings,
    layer_out: LayerOut,
    transformer: Transformer,
}

impl ViewState {
    /// Weigh, lay out, transform and remap the whole tree.
    fn relayout(&mut self) -> usize {
        let root = self.tree.root();
        Weigher::weigh(&mut self.tree, root);
        let placed = self.layer_out.layout(&mut self.tree, root);
        self.refresh();
        placed
    }

    /// Re-applies the current transform and remaps dirty circles.
    fn refresh(&mut self) -> usize {
        let root = self.tree.root();
        self.transformer.transform(&mut self.tree, root);
        MapperToEuclidean::map_tree(&mut self.tree, root)
    }

    fn attached(&self, id: NodeId) -> HyperResult<()> {
        if self.tree.get(id)?.is_attached() {
            Ok(())
        } else {
            Err(HyperError::NodeNotFound(id))
        }
    }
}

/// A tree laid out in the Poincare disk, with navigation.
///
/// # Example
/// ```
/// use hypertree_core::config::Settings;
/// use hypertree_core::tree::Tree;
/// use hypertree_core::view::HyperView;
///
/// let view = HyperView::new(Tree::balanced(2, 3), Settings::default()).unwrap();
/// let leaf = view.with_tree(|tree| tree[tree.root()].children()[0]);
/// let frames: Vec<_> = view.focus(leaf).unwrap().expect("leaf is off-center").collect();
/// for frame in frames {
///     view.apply(frame);
/// }
/// let center = view.with_tree(|tree| tree[leaf].location.hyper.center());
/// assert!(center.norm() < 1e-9);
/// ```
pub struct HyperView {
    state: RwLock<ViewState>,
}

impl HyperView {
    /// Validates `settings`, then weighs, lays out and maps `tree`.
    #[instrument(skip(tree, settings), fields(nodes = tree.len()), level = "debug")]
    pub fn new(tree: Tree, settings: Settings) -> HyperResult<Self> {
        let config = LayoutConfig::from_settings(&settings)?;
        let mut state = ViewState {
            tree,
            transformer: Transformer::new(settings.preserve_orientation),
            layer_out: LayerOut::new(config),
            settings,
        };
        state.relayout();
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Recomputes weights and layout, keeping the current transform.
    /// Returns the number of nodes placed.
    #[instrument(skip(self), level = "debug")]
    pub fn relayout(&self) -> usize {
        self.state.write().relayout()
    }

    /// Switches to new settings, dropping the current transform.
    ///
    /// Invalid settings are rejected and leave the view unchanged.
    #[instrument(skip(self), level = "debug")]
    pub fn apply_settings(&self, settings: Settings) -> HyperResult<()> {
        let config = LayoutConfig::from_settings(&settings)?;
        let mut state = self.state.write();
        state.layer_out.set_config(config);
        state.transformer = Transformer::new(settings.preserve_orientation);
        state.settings = settings;
        state.relayout();
        Ok(())
    }

    /// Frames animating `node` to the center of the disk, or `None` if it
    /// is already there.
    #[instrument(skip(self), level = "debug")]
    pub fn focus(&self, node: NodeId) -> HyperResult<Option<AnimationTransforms>> {
        let state = self.state.read();
        state.attached(node)?;
        let from = state.tree[node].location.hyper.center();
        let orientation = state.layer_out.config().orientation_vector();
        Ok(AnimationTransforms::make(
            from,
            ORIGIN,
            &state.transformer,
            orientation,
            state.settings.animation_steps,
        ))
    }

    /// Immediately moves the point displayed at `from` to `to`.
    ///
    /// # Errors
    /// `PointOutsideDisk` if either point is not strictly inside the unit disk.
    #[instrument(skip(self), level = "debug")]
    pub fn pan(&self, from: Complex, to: Complex) -> HyperResult<()> {
        let from = checked_disk_point(from.re, from.im)?;
        let to = checked_disk_point(to.re, to.im)?;
        if from == to {
            return Ok(());
        }
        let mut state = self.state.write();
        let orientation = state.layer_out.config().orientation_vector();
        let step = state.transformer.make_transform(from, to, orientation);
        state.transformer.compose_transform(&step);
        state.refresh();
        Ok(())
    }

    /// Installs `transform` as the current view transform (one animation frame).
    #[instrument(skip(self), level = "trace")]
    pub fn apply(&self, transform: HyperTransform) {
        let mut state = self.state.write();
        state.transformer.set_transform(transform);
        state.refresh();
    }

    /// Drops the current transform and restores layout positions.
    #[instrument(skip(self), level = "debug")]
    pub fn reset(&self) {
        let mut state = self.state.write();
        let state = &mut *state;
        let root = state.tree.root();
        state.transformer.reset(&mut state.tree, root);
        MapperToEuclidean::map_tree(&mut state.tree, root);
    }

    /// Grafts `subtree` in place of the `Mounting` node `mounting` and lays
    /// it out in the wedge recorded for that node.
    #[instrument(skip(self, subtree), fields(subtree_nodes = subtree.len()), level = "debug")]
    pub fn graft(&self, mounting: NodeId, subtree: Tree) -> HyperResult<NodeId> {
        let mut state = self.state.write();
        let (half_wedge, orientation) = match state.tree.get(mounting)?.mount_point() {
            Some(MountPoint::Mounting {
                half_wedge,
                orientation,
                ..
            }) => (*half_wedge, *orientation),
            _ => {
                return Err(HyperError::InvalidMount {
                    node: mounting,
                    reason: "node is not a mounting point".to_string(),
                })
            }
        };

        let grafted = state.tree.graft(mounting, subtree)?;
        let center = state.tree[grafted].location.hyper.center0();
        Weigher::weigh(&mut state.tree, grafted);
        let state = &mut *state;
        state
            .layer_out
            .layout_from(&mut state.tree, grafted, center, half_wedge, orientation);
        state.refresh();
        Ok(grafted)
    }

    /// Removes the subtree grafted at `mounted`, restoring its mounting node.
    ///
    /// The whole tree is weighed and laid out again, so siblings sized for
    /// the grafted subtree give its slice back.
    #[instrument(skip(self), level = "debug")]
    pub fn prune(&self, mounted: NodeId) -> HyperResult<NodeId> {
        let mut state = self.state.write();
        let mounting = state.tree.prune(mounted)?;
        state.relayout();
        Ok(mounting)
    }

    /// Runs `f` with read access to the tree.
    pub fn with_tree<R>(&self, f: impl FnOnce(&Tree) -> R) -> R {
        f(&self.state.read().tree)
    }

    pub fn current_transform(&self) -> HyperTransform {
        self.state.read().transformer.transform_of()
    }

    pub fn settings(&self) -> Settings {
        self.state.read().settings.clone()
    }
}
