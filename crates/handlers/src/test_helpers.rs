//! Shared test helpers for handler tests.

use async_trait::async_trait;
use chainbuild_core::error::{NodeError, ResolveError};
use chainbuild_core::{BuildContext, BuildNode, FileSystem, ModuleResolver};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// An in-memory filesystem with optional per-file read latency.
#[derive(Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, (String, Duration)>,
    /// Paths in the order their reads completed.
    pub completed: Mutex<Vec<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.with_slow_file(path, contents, Duration::ZERO)
    }

    pub fn with_slow_file(mut self, path: &str, contents: &str, delay: Duration) -> Self {
        self.files
            .insert(PathBuf::from(path), (contents.to_string(), delay));
        self
    }
}

#[async_trait]
impl FileSystem for MemoryFs {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let (contents, delay) = self
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.completed.lock().unwrap().push(path.to_path_buf());
        Ok(contents)
    }

    async fn write(&self, _path: &Path, _contents: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }
}

/// A node that substitutes its name for `?` and knows a fixed set of targets.
pub struct StubNode {
    name: String,
    dir: PathBuf,
    failing: HashSet<String>,
    pub required: Mutex<Vec<String>>,
}

impl StubNode {
    pub fn new(name: &str, dir: &str) -> Self {
        Self {
            name: name.into(),
            dir: PathBuf::from(dir),
            failing: HashSet::new(),
            required: Mutex::new(Vec::new()),
        }
    }

    /// Make `require_sources` fail for `target`.
    pub fn failing(mut self, target: &str) -> Self {
        self.failing.insert(target.into());
        self
    }
}

#[async_trait]
impl BuildNode for StubNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn unmask_target_name(&self, mask: &str) -> Result<String, NodeError> {
        if mask.contains('/') {
            return Err(NodeError::InvalidMask {
                mask: mask.into(),
                reason: "targets cannot contain '/'".into(),
            });
        }
        Ok(mask.replace('?', &self.name))
    }

    async fn require_sources(&self, targets: &[String]) -> Result<(), NodeError> {
        self.required.lock().unwrap().extend(targets.iter().cloned());
        match targets.iter().find(|t| self.failing.contains(*t)) {
            Some(target) => Err(NodeError::BuildFailed {
                target: target.clone(),
                reason: "upstream step failed".into(),
            }),
            None => Ok(()),
        }
    }

    fn resolve_path(&self, target: &str) -> PathBuf {
        self.dir.join(target)
    }
}

/// Resolves every module to `/node_modules/<name>/index.js`.
pub struct StubModules;

impl ModuleResolver for StubModules {
    fn resolve(&self, name: &str) -> Result<PathBuf, ResolveError> {
        Ok(PathBuf::from(format!("/node_modules/{name}/index.js")))
    }
}

/// Accepts owned stubs or `Arc`s the test keeps for later inspection.
pub fn context(node: impl Into<Arc<StubNode>>, fs: impl Into<Arc<MemoryFs>>) -> BuildContext {
    let node: Arc<StubNode> = node.into();
    let fs: Arc<MemoryFs> = fs.into();
    BuildContext::new(node, fs, Arc::new(StubModules))
}
