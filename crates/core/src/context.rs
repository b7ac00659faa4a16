//! Build context: everything a single step invocation may consult.

use std::sync::Arc;

use crate::fs::FileSystem;
use crate::module::ModuleResolver;
use crate::node::{BuildNode, SourceFile};

/// Explicit, per-invocation context handed to the resolver.
///
/// Cloning is cheap: collaborators are shared behind `Arc`.
#[derive(Clone)]
pub struct BuildContext {
    node: Arc<dyn BuildNode>,
    fs: Arc<dyn FileSystem>,
    modules: Arc<dyn ModuleResolver>,
    sources: Vec<SourceFile>,
}

impl BuildContext {
    /// Create a context with an empty source list.
    pub fn new(
        node: Arc<dyn BuildNode>,
        fs: Arc<dyn FileSystem>,
        modules: Arc<dyn ModuleResolver>,
    ) -> Self {
        Self {
            node,
            fs,
            modules,
            sources: Vec::new(),
        }
    }

    /// Set the ambient source list substituted for `source` entries.
    pub fn with_sources(mut self, sources: Vec<SourceFile>) -> Self {
        self.sources = sources;
        self
    }

    pub fn node(&self) -> &dyn BuildNode {
        self.node.as_ref()
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn modules(&self) -> &dyn ModuleResolver {
        self.modules.as_ref()
    }

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }
}

impl std::fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildContext")
            .field("node", &self.node.name())
            .field("sources", &self.sources.len())
            .finish()
    }
}
