//! Directory-backed build node.
//!
//! Targets are plain files in the node directory. The node name is the
//! directory's basename and replaces `?` in masks, so `?.js` in
//! `bundles/index` is `bundles/index/index.js`.

use async_trait::async_trait;
use chainbuild_core::{BuildNode, NodeError};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DirectoryNode {
    name: String,
    dir: PathBuf,
}

impl DirectoryNode {
    /// Create a node for `dir`. Fails when the path has no usable basename.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, NodeError> {
        let dir = dir.into();
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .ok_or_else(|| NodeError::InvalidMask {
                mask: dir.display().to_string(),
                reason: "node directory has no name".into(),
            })?;
        Ok(Self { name, dir })
    }
}

#[async_trait]
impl BuildNode for DirectoryNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn unmask_target_name(&self, mask: &str) -> Result<String, NodeError> {
        let invalid = |reason: &str| NodeError::InvalidMask {
            mask: mask.into(),
            reason: reason.into(),
        };
        if mask.trim().is_empty() {
            return Err(invalid("mask is empty"));
        }
        if mask.contains(['/', '\\']) {
            return Err(invalid("targets are file names, not paths"));
        }
        Ok(mask.replace('?', &self.name))
    }

    async fn require_sources(&self, targets: &[String]) -> Result<(), NodeError> {
        for target in targets {
            let path = self.resolve_path(target);
            let exists = tokio::fs::try_exists(&path)
                .await
                .map_err(|e| NodeError::BuildFailed {
                    target: target.clone(),
                    reason: e.to_string(),
                })?;
            if !exists {
                return Err(NodeError::MissingTarget {
                    node: self.name.clone(),
                    target: target.clone(),
                });
            }
            debug!(node = %self.name, target = %target, "Target available");
        }
        Ok(())
    }

    fn resolve_path(&self, target: &str) -> PathBuf {
        self.dir.join(target)
    }
}
