//! # chainbuild core
//!
//! Domain types, collaborator traits, and error definitions for the
//! chainbuild step. This crate has **no engine logic**: it defines the
//! model that the handler and engine crates implement against.
//!
//! ## Seams
//!
//! Everything the step needs from the outside world is a trait here:
//! - [`BuildNode`]: the build-graph node the step runs in
//! - [`FileSystem`]: async reads and the final artifact write
//! - [`ModuleResolver`]: locating well-known modules on disk
//! - [`Transform`]: the source-to-source code transform
//!
//! They are bundled into an explicit [`BuildContext`] passed to the resolver,
//! so tests can swap any of them for a stub.

pub mod chain;
pub mod context;
pub mod error;
pub mod fs;
pub mod module;
pub mod node;
pub mod segment;
pub mod transform;

// Re-export key types at crate root for ergonomics
pub use chain::{ChainEntry, ChainSpec, HandlerCall};
pub use context::BuildContext;
pub use error::{Error, NodeError, ResolveError, Result, TransformError};
pub use fs::{FileSystem, TokioFs};
pub use module::ModuleResolver;
pub use node::{BuildNode, SourceFile};
pub use segment::{INLINE_PATH, Segment, SegmentNode, SegmentTree};
pub use transform::{Transform, TransformOptions};
