//! `target` handler: build another target of the node and read it.

use chainbuild_core::error::ResolveError;
use chainbuild_core::{BuildContext, Result, Segment};
use tracing::debug;

/// Unmask `mask`, require the target from the node, then read its file.
///
/// Every failure is fatal to the step.
pub async fn resolve(ctx: &BuildContext, mask: &str) -> Result<Segment> {
    let node = ctx.node();
    let target = node.unmask_target_name(mask)?;
    node.require_sources(std::slice::from_ref(&target)).await?;

    let path = node.resolve_path(&target);
    let contents = ctx
        .fs()
        .read_to_string(&path)
        .await
        .map_err(|source| ResolveError::Read {
            path: path.clone(),
            source,
        })?;

    debug!(target = %target, path = %path.display(), "Read node target");
    Ok(Segment::new(path.display().to_string(), contents))
}
