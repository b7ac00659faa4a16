//! Build step: one configured chain assembled into one target.
//!
//! `run` is the full invocation: unmask the target, select the ambient
//! source files, resolve, assemble, and write. The artifact is written only
//! after everything before it succeeded.

use chainbuild_config::StepConfig;
use chainbuild_core::error::ResolveError;
use chainbuild_core::{
    BuildContext, BuildNode, ChainEntry, Error, FileSystem, HandlerCall, ModuleResolver, Result,
    SegmentNode, SegmentTree, SourceFile, Transform,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::assembler::Assembler;
use crate::file_list::{parse_file_list, select_by_suffix};
use crate::resolver::resolve_chain;

/// What a finished step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutput {
    pub target: String,
    pub path: PathBuf,
    pub segments: usize,
    pub bytes: usize,
}

pub struct BuildStep {
    config: StepConfig,
    transform: Arc<dyn Transform>,
}

impl BuildStep {
    pub fn new(config: StepConfig, transform: Arc<dyn Transform>) -> Self {
        Self { config, transform }
    }

    /// Whether the chain reads the ambient file list at all.
    pub fn uses_sources(&self) -> bool {
        self.config
            .chain
            .iter()
            .any(|entry| matches!(entry, ChainEntry::Handler(HandlerCall::Source)))
    }

    /// Read the node's file list and keep the files with an eligible suffix.
    pub async fn select_sources(
        &self,
        node: &dyn BuildNode,
        fs: &dyn FileSystem,
    ) -> Result<Vec<SourceFile>> {
        let files_target = node.unmask_target_name(&self.config.files_target)?;
        node.require_sources(std::slice::from_ref(&files_target)).await?;

        let path = node.resolve_path(&files_target);
        let text = fs
            .read_to_string(&path)
            .await
            .map_err(|source| ResolveError::Read {
                path: path.clone(),
                source,
            })?;

        let files = select_by_suffix(parse_file_list(&text, node.dir()), &self.config.source_suffixes);
        debug!(files_target = %files_target, selected = files.len(), "Selected source files");
        Ok(files)
    }

    /// Build the context for one invocation. The file list is only read when
    /// the chain has a `source` entry.
    pub async fn context(
        &self,
        node: Arc<dyn BuildNode>,
        fs: Arc<dyn FileSystem>,
        modules: Arc<dyn ModuleResolver>,
    ) -> Result<BuildContext> {
        let sources = if self.uses_sources() {
            self.select_sources(node.as_ref(), fs.as_ref()).await?
        } else {
            Vec::new()
        };
        Ok(BuildContext::new(node, fs, modules).with_sources(sources))
    }

    /// Resolve the chain against `ctx`.
    pub async fn resolve(&self, ctx: &BuildContext) -> Result<SegmentTree> {
        resolve_chain(&self.config.chain, ctx).await
    }

    /// Transform and concatenate a resolved tree.
    ///
    /// Transforms are synchronous and may shell out, so assembly runs on the
    /// blocking pool.
    pub async fn assemble(&self, tree: SegmentTree) -> Result<String> {
        let transform = Arc::clone(&self.transform);
        let params = self.config.params.clone();
        let artifact = tokio::task::spawn_blocking(move || {
            Assembler::new(transform.as_ref(), params.as_ref()).assemble(&tree)
        })
        .await
        .map_err(|e| Error::Internal(format!("assembly task failed: {e}")))??;
        Ok(artifact)
    }

    /// Resolve and assemble without writing anything.
    pub async fn build(&self, ctx: &BuildContext) -> Result<String> {
        let tree = self.resolve(ctx).await?;
        self.assemble(tree).await
    }

    /// Full invocation: build the artifact and write it to the step's target.
    pub async fn run(
        &self,
        node: Arc<dyn BuildNode>,
        fs: Arc<dyn FileSystem>,
        modules: Arc<dyn ModuleResolver>,
    ) -> Result<StepOutput> {
        let target = node.unmask_target_name(&self.config.target)?;
        info!(node = %node.name(), target = %target, transform = %self.transform.name(), "Building target");

        let ctx = self.context(node.clone(), fs.clone(), modules).await?;
        let tree = self.resolve(&ctx).await?;
        let segments: usize = tree.iter().map(SegmentNode::leaf_count).sum();
        let artifact = self.assemble(tree).await?;

        let path = node.resolve_path(&target);
        fs.write(&path, &artifact)
            .await
            .map_err(|source| ResolveError::Write {
                path: path.clone(),
                source,
            })?;

        info!(target = %target, segments, bytes = artifact.len(), "Wrote target");
        Ok(StepOutput {
            target,
            path,
            segments,
            bytes: artifact.len(),
        })
    }
}
