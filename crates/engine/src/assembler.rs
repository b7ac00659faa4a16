//! Assembler: linearize a segment tree into the artifact text.
//!
//! Each leaf is transformed on its own and wrapped in provenance markers:
//!
//! ```text
//! /* begin: <path> */
//! <transformed code>/* end: <path> */
//! ```
//!
//! Nested lists are inlined depth-first at their position. Nothing is added
//! between or after wrapped segments.

use chainbuild_core::{Segment, SegmentNode, Transform, TransformError, TransformOptions};

/// Applies one transform with fixed options to every segment of a tree.
pub struct Assembler<'a> {
    transform: &'a dyn Transform,
    options: Option<&'a TransformOptions>,
}

impl<'a> Assembler<'a> {
    pub fn new(transform: &'a dyn Transform, options: Option<&'a TransformOptions>) -> Self {
        Self { transform, options }
    }

    /// Produce the artifact for `tree`.
    ///
    /// The first transform failure aborts assembly.
    pub fn assemble(&self, tree: &[SegmentNode]) -> Result<String, TransformError> {
        let mut artifact = String::new();
        self.assemble_into(tree, &mut artifact)?;
        Ok(artifact)
    }

    fn assemble_into(&self, nodes: &[SegmentNode], out: &mut String) -> Result<(), TransformError> {
        for node in nodes {
            match node {
                SegmentNode::List(items) => self.assemble_into(items, out)?,
                SegmentNode::Leaf(segment) => self.wrap(segment, out)?,
            }
        }
        Ok(())
    }

    fn wrap(&self, segment: &Segment, out: &mut String) -> Result<(), TransformError> {
        let code = self.transform.transform(segment.code(), self.options)?;
        out.push_str("/* begin: ");
        out.push_str(&segment.path);
        out.push_str(" */\n");
        out.push_str(&code);
        out.push_str("/* end: ");
        out.push_str(&segment.path);
        out.push_str(" */\n");
        Ok(())
    }
}

/// The leaves of `tree` in artifact order.
pub fn flatten(tree: &[SegmentNode]) -> Vec<&Segment> {
    fn walk<'t>(nodes: &'t [SegmentNode], out: &mut Vec<&'t Segment>) {
        for node in nodes {
            match node {
                SegmentNode::Leaf(segment) => out.push(segment),
                SegmentNode::List(items) => walk(items, out),
            }
        }
    }

    let mut out = Vec::new();
    walk(tree, &mut out);
    out
}
