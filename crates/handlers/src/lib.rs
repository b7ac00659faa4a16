//! Built-in chain handlers for chainbuild.
//!
//! Handlers turn a [`HandlerCall`] into segments:
//! - [`ym`] reads the module loader, leniently
//! - [`target`] builds and reads another target of the node
//! - [`source`] reads the ambient source files concurrently
//!
//! The handler set is closed, so dispatch is an exhaustive match rather than
//! a name lookup.

pub mod source;
pub mod target;
pub mod ym;

#[cfg(test)]
pub(crate) mod test_helpers;

use chainbuild_core::{BuildContext, HandlerCall, Result, SegmentNode};

/// Run the handler named by `call` against the step context.
///
/// `source` ignores any configured argument and reads `ctx.sources()`.
pub async fn dispatch(call: &HandlerCall, ctx: &BuildContext) -> Result<SegmentNode> {
    let node: SegmentNode = match call {
        HandlerCall::Ym => ym::resolve(ctx).await?.into(),
        HandlerCall::Target { mask } => target::resolve(ctx, mask).await?.into(),
        HandlerCall::Source => source::resolve(ctx, ctx.sources()).await?.into(),
    };
    Ok(node)
}
