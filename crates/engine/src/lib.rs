//! Chain engine: resolve a chain, transform every segment, assemble the artifact.
//!
//! ```text
//! chain ──▶ resolver (concurrent, order-preserving) ──▶ segment tree
//!       ──▶ assembler (flatten + per-segment transform + markers) ──▶ artifact
//! ```
//!
//! [`BuildStep`] ties the pipeline to one configured target, including file-list
//! selection and the final write. The [`node`], [`modules`] and [`transform`]
//! modules hold local implementations of the collaborator traits used by the
//! command-line front end.

pub mod assembler;
pub mod file_list;
pub mod modules;
pub mod node;
pub mod resolver;
pub mod step;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use assembler::{Assembler, flatten};
pub use file_list::{parse_file_list, select_by_suffix};
pub use modules::NodeModulesResolver;
pub use node::DirectoryNode;
pub use resolver::{resolve_chain, resolve_entry};
pub use step::{BuildStep, StepOutput};
pub use transform::{CommandTransform, IdentityTransform, from_config};
