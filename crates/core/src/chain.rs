//! Chain entries: the declarative ingredient list of a build step.
//!
//! A chain is an ordered list of entries. Each entry is either literal text
//! injected verbatim, or a call to one of the built-in handlers. Order is
//! load-bearing: it is the order segments appear in the artifact.
//!
//! Configuration accepts several spellings for convenience:
//!
//! | Form | Meaning |
//! |---|---|
//! | `"ym"`, `"source"` | handler call |
//! | `"any other text"` | literal text |
//! | `["target", "?.deps.js"]` | handler call with argument |
//! | `{ text = "source" }` | literal text, even if it collides with a handler name |
//! | `{ handler = "target", args = "?.css" }` | explicit handler call |

use serde::{Deserialize, Serialize};

/// Name of the handler that reads the module loader.
pub const YM: &str = "ym";
/// Name of the handler that reads another target of the node.
pub const TARGET: &str = "target";
/// Name of the handler that reads the ambient source files.
pub const SOURCE: &str = "source";

/// An ordered chain of entries.
pub type ChainSpec = Vec<ChainEntry>;

/// One ingredient of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub enum ChainEntry {
    /// Literal text, emitted as an `inline` segment.
    Text(String),
    /// A call to a built-in handler.
    Handler(HandlerCall),
}

/// The closed set of built-in handlers, each with its own typed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerCall {
    /// Read the well-known module loader.
    Ym,
    /// Build and read another target of the current node.
    Target { mask: String },
    /// Read every file of the ambient source list.
    Source,
}

impl HandlerCall {
    /// The configuration name of this handler.
    pub fn name(&self) -> &'static str {
        match self {
            HandlerCall::Ym => YM,
            HandlerCall::Target { .. } => TARGET,
            HandlerCall::Source => SOURCE,
        }
    }

    /// Whether `name` is reserved by a built-in handler.
    pub fn is_reserved(name: &str) -> bool {
        matches!(name, YM | TARGET | SOURCE)
    }

    /// Build a call from a handler name and optional argument.
    ///
    /// Returns `None` when `name` is not a handler. `source` ignores its
    /// argument: the ambient file list is always substituted.
    pub fn from_name(name: &str, args: Option<String>) -> Option<Result<Self, String>> {
        match name {
            YM => Some(Ok(HandlerCall::Ym)),
            SOURCE => Some(Ok(HandlerCall::Source)),
            TARGET => Some(match args {
                Some(mask) if !mask.is_empty() => Ok(HandlerCall::Target { mask }),
                _ => Err("handler 'target' requires a target mask".into()),
            }),
            _ => None,
        }
    }
}

impl ChainEntry {
    /// Shorthand for a literal entry.
    pub fn text(text: impl Into<String>) -> Self {
        ChainEntry::Text(text.into())
    }

    /// Shorthand for a `target` call.
    pub fn target(mask: impl Into<String>) -> Self {
        ChainEntry::Handler(HandlerCall::Target { mask: mask.into() })
    }

    /// Parse a bare string the way chains have always been written: a handler
    /// name selects the handler, anything else is literal text.
    pub fn parse_bare(value: &str) -> Result<Self, String> {
        match HandlerCall::from_name(value, None) {
            Some(call) => call.map(ChainEntry::Handler),
            None => Ok(ChainEntry::Text(value.to_string())),
        }
    }
}

/// Wire representation accepted in configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Bare(String),
    Pair(Vec<String>),
    Text {
        text: String,
    },
    Call {
        handler: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<String>,
    },
}

impl TryFrom<RawEntry> for ChainEntry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        match raw {
            RawEntry::Bare(value) => ChainEntry::parse_bare(&value),
            RawEntry::Pair(items) => {
                let mut items = items.into_iter();
                let name = items.next().ok_or("empty chain entry")?;
                let args = items.next();
                if items.next().is_some() {
                    return Err(format!("chain entry '{name}' takes at most one argument"));
                }
                match HandlerCall::from_name(&name, args) {
                    Some(call) => call.map(ChainEntry::Handler),
                    // Unknown names fall back to literal text of the name.
                    None => Ok(ChainEntry::Text(name)),
                }
            }
            RawEntry::Text { text } => Ok(ChainEntry::Text(text)),
            RawEntry::Call { handler, args } => match HandlerCall::from_name(&handler, args) {
                Some(call) => call.map(ChainEntry::Handler),
                None => Err(format!("unknown handler '{handler}'")),
            },
        }
    }
}

impl From<ChainEntry> for RawEntry {
    fn from(entry: ChainEntry) -> Self {
        match entry {
            ChainEntry::Text(text) if HandlerCall::is_reserved(&text) => RawEntry::Text { text },
            ChainEntry::Text(text) => RawEntry::Bare(text),
            ChainEntry::Handler(HandlerCall::Target { mask }) => {
                RawEntry::Pair(vec![TARGET.to_string(), mask])
            }
            ChainEntry::Handler(call) => RawEntry::Bare(call.name().to_string()),
        }
    }
}
