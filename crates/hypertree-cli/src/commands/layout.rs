//! `hypertree layout`

use clap::Args;
use tracing::info;

use super::{print_json, report, TreeArgs};
use crate::snapshot::Snapshot;

/// Arguments for the layout command.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub tree: TreeArgs,
}

/// Handle the layout command.
pub fn handle_layout(args: LayoutArgs) -> i32 {
    let settings = match args.tree.settings.resolve() {
        Ok(s) => s,
        Err(e) => return report(&e),
    };
    let view = match args.tree.build_view(settings) {
        Ok(v) => v,
        Err(e) => return report(&e),
    };

    let snapshot = view.with_tree(Snapshot::capture);
    info!(nodes = snapshot.nodes.len(), "layout complete");
    print_json(&snapshot, args.tree.pretty)
}
