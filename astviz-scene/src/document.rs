//! Building the in-memory tree from a clang JSON AST dump.
//!
//! Each JSON object carries its syntax kind in `"kind"` and its children in
//! `"inner"`. Both are optional: a node without a kind is labelled
//! [`UNKNOWN_LABEL`] and a node without `"inner"` is a leaf.

use std::path::Path;

use serde_json::Value;

use crate::error::SceneError;
use crate::node::Node;

/// Label used when a document entry carries no usable `"kind"`.
pub const UNKNOWN_LABEL: &str = "Unknown";

const LABEL_FIELD: &str = "kind";
const CHILDREN_FIELD: &str = "inner";

/// Read access to one entry of a nested-node document.
pub trait NodeSource {
    /// Display label of the entry, if present.
    fn label(&self) -> Option<&str>;
    /// Ordered child entries, empty when absent.
    fn children(&self) -> Vec<&Self>;
}

impl NodeSource for Value {
    fn label(&self) -> Option<&str> {
        self.get(LABEL_FIELD).and_then(Value::as_str)
    }

    fn children(&self) -> Vec<&Self> {
        self.get(CHILDREN_FIELD)
            .and_then(Value::as_array)
            .map(|inner| inner.iter().collect())
            .unwrap_or_default()
    }
}

impl Node {
    /// Build a tree from any nested-node source, substituting defaults for
    /// missing fields.
    ///
    /// The source must be tree shaped. Self-referential sources recurse
    /// without bound.
    pub fn build<S: NodeSource>(source: &S) -> Self {
        let label = source.label().unwrap_or(UNKNOWN_LABEL);
        let children = source.children().into_iter().map(Node::build).collect();
        Node::with_children(label, children)
    }
}

/// Parse a JSON document into a tree.
pub fn parse_document(bytes: &[u8]) -> Result<Node, SceneError> {
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(Node::build(&value))
}

/// Read and parse the JSON document at `path`.
pub fn load_document(path: &Path) -> Result<Node, SceneError> {
    let bytes = std::fs::read(path)?;
    let root = parse_document(&bytes)?;
    log::info!(
        "loaded {} ({} nodes, depth {})",
        path.display(),
        root.node_count(),
        root.depth()
    );
    Ok(root)
}
