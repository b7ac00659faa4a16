//! Resolver: turn a chain into a segment tree.
//!
//! Every entry is started at once and awaited jointly. The tree is indexed by
//! chain position, so completion order never leaks into the artifact. The
//! first failing entry fails the whole chain and drops the rest.

use chainbuild_core::{BuildContext, ChainEntry, Result, Segment, SegmentNode, SegmentTree};
use futures::future::try_join_all;
use tracing::debug;

/// Resolve every entry of `chain` concurrently, preserving chain order.
pub async fn resolve_chain(chain: &[ChainEntry], ctx: &BuildContext) -> Result<SegmentTree> {
    let tree = try_join_all(chain.iter().map(|entry| resolve_entry(entry, ctx))).await?;
    debug!(
        entries = tree.len(),
        segments = tree.iter().map(SegmentNode::leaf_count).sum::<usize>(),
        "Resolved chain"
    );
    Ok(tree)
}

/// Resolve one entry: literal text inline, handler calls via dispatch.
pub async fn resolve_entry(entry: &ChainEntry, ctx: &BuildContext) -> Result<SegmentNode> {
    match entry {
        ChainEntry::Text(text) => Ok(Segment::inline(text.clone()).into()),
        ChainEntry::Handler(call) => chainbuild_handlers::dispatch(call, ctx).await,
    }
}
