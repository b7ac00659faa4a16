//! Segments: resolved `(path, contents)` units and the tree they form.

use serde::{Deserialize, Serialize};

/// Provenance path used for literal chain text.
pub const INLINE_PATH: &str = "inline";

/// A resolved unit of source.
///
/// `path` is provenance only: it ends up in the begin/end markers and is never
/// read again. `contents` is `None` when a lenient handler could not read its
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl Segment {
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: Some(contents.into()),
        }
    }

    /// A literal chain string.
    pub fn inline(contents: impl Into<String>) -> Self {
        Self::new(INLINE_PATH, contents)
    }

    /// A segment whose contents could not be read.
    pub fn missing(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: None,
        }
    }

    /// Contents as source text; unreadable contents count as empty.
    pub fn code(&self) -> &str {
        self.contents.as_deref().unwrap_or_default()
    }
}

/// One element of a resolved chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentNode {
    Leaf(Segment),
    /// A handler that expanded into several segments, in its own order.
    List(Vec<SegmentNode>),
}

/// The ordered result of resolving a chain, one node per chain entry.
pub type SegmentTree = Vec<SegmentNode>;

impl SegmentNode {
    /// Number of leaf segments below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            SegmentNode::Leaf(_) => 1,
            SegmentNode::List(items) => items.iter().map(SegmentNode::leaf_count).sum(),
        }
    }
}

impl From<Segment> for SegmentNode {
    fn from(segment: Segment) -> Self {
        SegmentNode::Leaf(segment)
    }
}

impl From<Vec<Segment>> for SegmentNode {
    fn from(segments: Vec<Segment>) -> Self {
        SegmentNode::List(segments.into_iter().map(SegmentNode::Leaf).collect())
    }
}
