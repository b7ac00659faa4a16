//! `source` handler: read every file of a file list concurrently.

use chainbuild_core::error::ResolveError;
use chainbuild_core::{BuildContext, Result, Segment, SourceFile};
use futures::future::try_join_all;
use tracing::debug;

/// Read all `files` at once, returning segments in `files` order.
///
/// The first failed read fails the whole list; no partial result is returned.
pub async fn resolve(ctx: &BuildContext, files: &[SourceFile]) -> Result<Vec<Segment>> {
    let reads = files.iter().map(|file| async move {
        let contents = ctx
            .fs()
            .read_to_string(&file.fullname)
            .await
            .map_err(|source| ResolveError::Read {
                path: file.fullname.clone(),
                source,
            })?;
        Ok::<_, ResolveError>(Segment::new(file.fullname.display().to_string(), contents))
    });

    let segments = try_join_all(reads).await?;
    debug!(files = segments.len(), "Read source files");
    Ok(segments)
}
