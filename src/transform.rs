//! The schema → graph transform seam.
//!
//! The engine never interprets schema text itself; it only decides *when*
//! to run the external pipeline. Implementations supply the two stages
//! (parse, then structural build) and the engine drives them through
//! [`SchemaTransform::regenerate`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::GraphResult;

// ─── Notation ─────────────────────────────────────────────────────────────────

/// Notations the editor can hold. Metadata only: which transform to use and
/// which tab to highlight is the host's business, not the engine's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notation {
    /// Graph query language schema (`.graphql` / `.gql`).
    GraphQuery,
    /// Typed source code (`.ts`).
    TypedSource,
    /// Structured data (`.json`).
    StructuredData,
}

impl Notation {
    /// Guess the notation from a file extension, for tab preselection when
    /// a schema is imported from disk.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "graphql" | "gql" => Some(Notation::GraphQuery),
            "ts" => Some(Notation::TypedSource),
            "json" => Some(Notation::StructuredData),
            _ => None,
        }
    }
}

// ─── Errors ───────────────────────────────────────────────────────────────────

/// Malformed schema syntax. Locations are 1-based when the parser can
/// attribute the failure to a position.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn at(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }
}

/// Syntactically valid schema that cannot be assembled into a graph, e.g.
/// an unresolvable reference between definitions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct BuildError {
    pub message: String,
}

impl BuildError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a regeneration attempt produced no graph. Both variants are
/// transient: the scheduler logs them and retries on the next tick.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("schema parse failed: {0}")]
    Parse(#[from] ParseError),
    #[error("graph build failed: {0}")]
    Build(#[from] BuildError),
}

// ─── Transform trait ──────────────────────────────────────────────────────────

/// External schema → graph pipeline.
pub trait SchemaTransform {
    /// Intermediate representation between the two stages. Opaque to the
    /// engine; it is handed straight from [`parse`](Self::parse) to
    /// [`build`](Self::build) within one tick.
    type Parsed;

    /// Parse raw schema text.
    fn parse(&self, source: &str) -> Result<Self::Parsed, ParseError>;

    /// Assemble the parsed schema into a node/link graph.
    fn build(&self, parsed: Self::Parsed) -> Result<GraphResult, BuildError>;

    /// Run the full pipeline on one source snapshot. The two stages fail
    /// independently but the scheduler treats both failures identically.
    fn regenerate(&self, source: &str) -> Result<GraphResult, TransformError> {
        let parsed = self.parse(source)?;
        Ok(self.build(parsed)?)
    }
}
