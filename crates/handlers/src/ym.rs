//! `ym` handler: read the module loader shipped in `node_modules`.
//!
//! This is the one lenient handler: a failed read is logged and yields a
//! segment without contents instead of failing the step.

use chainbuild_core::{BuildContext, Result, Segment};
use tracing::{debug, warn};

/// Module name the handler resolves.
pub const YM_MODULE: &str = "ym";

pub async fn resolve(ctx: &BuildContext) -> Result<Segment> {
    let path = ctx.modules().resolve(YM_MODULE)?;
    let shown = path.display().to_string();

    match ctx.fs().read_to_string(&path).await {
        Ok(contents) => {
            debug!(path = %shown, bytes = contents.len(), "Read module loader");
            Ok(Segment::new(shown, contents))
        }
        Err(e) => {
            warn!(path = %shown, error = %e, "Failed to read module loader, continuing without it");
            Ok(Segment::missing(shown))
        }
    }
}
