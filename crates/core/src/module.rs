//! Module resolution seam: where a well-known module lives on disk.

use std::path::PathBuf;

use crate::error::ResolveError;

pub trait ModuleResolver: Send + Sync {
    /// Absolute path of the entry file of module `name`.
    fn resolve(&self, name: &str) -> Result<PathBuf, ResolveError>;
}
