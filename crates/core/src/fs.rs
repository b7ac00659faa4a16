//! Filesystem seam: async reads for handlers and the artifact write.

use async_trait::async_trait;
use std::io;
use std::path::Path;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read a whole file as UTF-8.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace a file's contents, creating parent directories.
    async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem, via `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait]
impl FileSystem for TokioFs {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await
    }
}
