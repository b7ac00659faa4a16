//! Error types for the chainbuild domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each collaborator seam has its own error enum; the top-level [`Error`]
//! wraps them without rewording so the orchestrator sees the original cause.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for a build-step invocation.
#[derive(Debug, Error)]
pub enum Error {
    // --- Build node errors ---
    #[error("Build node error: {0}")]
    Node(#[from] NodeError),

    // --- Resolution errors ---
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    // --- Transform errors ---
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Seam errors ---

/// Failures raised by the build-graph collaborator.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("Cannot unmask target name '{mask}': {reason}")]
    InvalidMask { mask: String, reason: String },

    #[error("Target '{target}' is not available in node '{node}'")]
    MissingTarget { node: String, target: String },

    #[error("Failed to build target '{target}': {reason}")]
    BuildFailed { target: String, reason: String },
}

/// Failures while turning a chain entry into segments.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Module not found: {name} (searched from {from})")]
    ModuleNotFound { name: String, from: PathBuf },

    #[error("Invalid package manifest at {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },
}

/// Failures raised by the injected code transform.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Transform rejected input: {0}")]
    Rejected(String),

    #[error("Failed to launch transform '{program}': {reason}")]
    Spawn { program: String, reason: String },

    #[error("Transform produced invalid UTF-8 output")]
    InvalidOutput,
}
