//! Transform seam: the injected source-to-source code transform.
//!
//! A transform is a pure, synchronous function of `(code, options)`. It is
//! applied to every segment separately, never to the concatenated artifact.

use crate::error::TransformError;

/// Opaque options forwarded unchanged to the transform.
pub type TransformOptions = serde_json::Value;

pub trait Transform: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Transform one segment of source code.
    fn transform(
        &self,
        code: &str,
        options: Option<&TransformOptions>,
    ) -> Result<String, TransformError>;
}
