//! Build node trait: the build-graph collaborator the step runs inside.
//!
//! The node owns target naming, path resolution, and building prerequisite
//! targets. The step only ever asks; it never mutates the graph.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::NodeError;

/// A source file of the ambient file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Absolute (or node-resolved) path of the file.
    pub fullname: PathBuf,
}

impl SourceFile {
    pub fn new(fullname: impl Into<PathBuf>) -> Self {
        Self {
            fullname: fullname.into(),
        }
    }

    /// Everything after the first `.` of the file name
    /// (`block.vanilla.js` → `vanilla.js`).
    pub fn suffix(&self) -> Option<&str> {
        let name = self.fullname.file_name()?.to_str()?;
        name.split_once('.').map(|(_, suffix)| suffix)
    }
}

/// A node of the build graph.
#[async_trait]
pub trait BuildNode: Send + Sync {
    /// The node's name, substituted for `?` in target masks.
    fn name(&self) -> &str;

    /// The directory the node's targets live in.
    fn dir(&self) -> &Path;

    /// Turn a mask such as `?.deps.js` into a concrete target name.
    fn unmask_target_name(&self, mask: &str) -> Result<String, NodeError>;

    /// Make sure the given targets are built. May suspend on nested builds.
    async fn require_sources(&self, targets: &[String]) -> Result<(), NodeError>;

    /// On-disk path of a target.
    fn resolve_path(&self, target: &str) -> PathBuf;
}
