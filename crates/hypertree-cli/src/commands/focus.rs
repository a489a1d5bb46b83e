//! `hypertree focus`

use clap::Args;
use hypertree_core::NodeId;
use serde::Serialize;
use tracing::info;

use super::{print_json, report, TreeArgs};
use crate::snapshot::{FrameSnapshot, Snapshot};

/// Arguments for the focus command.
#[derive(Args, Debug)]
pub struct FocusArgs {
    /// Id of the node to bring to the center, as printed by `layout`
    #[arg(short, long)]
    pub node: usize,

    /// Animation frames; 0 derives them from the distance travelled
    #[arg(short, long)]
    pub steps: Option<usize>,

    #[command(flatten)]
    pub tree: TreeArgs,
}

#[derive(Debug, Serialize)]
struct FocusReport {
    node: NodeId,
    frames: Vec<FrameSnapshot>,
    /// Tree after the last frame.
    result: Snapshot,
}

/// Handle the focus command.
pub fn handle_focus(args: FocusArgs) -> i32 {
    let mut settings = match args.tree.settings.resolve() {
        Ok(s) => s,
        Err(e) => return report(&e),
    };
    if let Some(steps) = args.steps {
        settings.animation_steps = steps;
    }
    let view = match args.tree.build_view(settings) {
        Ok(v) => v,
        Err(e) => return report(&e),
    };

    let node = NodeId(args.node);
    let animation = match view.focus(node) {
        Ok(a) => a,
        Err(e) => return report(&e),
    };

    let mut frames = Vec::new();
    for (index, transform) in animation.into_iter().flatten().enumerate() {
        view.apply(transform);
        frames.push(FrameSnapshot {
            index,
            transform,
            focus_center: view.with_tree(|tree| tree[node].location.hyper.center()),
        });
    }
    info!(node = %node, frames = frames.len(), "focus complete");

    let output = FocusReport {
        node,
        frames,
        result: view.with_tree(Snapshot::capture),
    };
    print_json(&output, args.tree.pretty)
}
