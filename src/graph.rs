use serde::{Deserialize, Serialize};

/// A single node of the derived graph — one named definition from the
/// schema text (a type, an enum, an input, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Identifier unique within one regeneration. Not stable across
    /// regenerations: every rebuild assigns ids from scratch.
    pub id: String,
    /// Display name shown on the canvas.
    pub name: String,
    /// Node kind as reported by the schema transform ("type", "enum", ...).
    pub kind: String,
}

/// A directed connection between two nodes, referencing [`GraphNode::id`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

/// The node/link structure derived from schema text for visual rendering.
///
/// Produced fresh on every successful regeneration; each regeneration is a
/// full rebuild, not an incremental diff, so consumers must not assume any
/// identity carries over from the previous result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphResult {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphResult {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}
