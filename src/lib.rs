//! livegraph — synchronization engine between a free-text schema editor
//! and its derived node/link graph.
//!
//! The editing surface reports raw text on change and on blur; a periodic
//! scheduler compares "last edited" against "last regenerated" and, when
//! the document is dirty, runs the external schema → graph transform and
//! notifies downstream consumers.  Failed transforms are logged and
//! retried on the next tick; edits are never lost.

pub mod engine;
pub mod graph;
pub mod io;
pub mod session;
pub mod states;
pub mod transform;

// --- Re-exports ---
pub use engine::{spawn, EngineHandle, DEFAULT_TICK_PERIOD};
pub use graph::{GraphLink, GraphNode, GraphResult};
pub use session::Session;
pub use states::edit::EditState;
pub use transform::{BuildError, Notation, ParseError, SchemaTransform, TransformError};
