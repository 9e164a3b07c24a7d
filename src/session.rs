//! One editing session: the Edit Tracker wired to the Regeneration
//! Scheduler.
//!
//! The session is deliberately cadence-free: the host (a UI frame loop or
//! the background ticker in [`crate::engine`]) calls [`Session::tick`] at
//! whatever rhythm it likes and the timestamp guards make redundant calls
//! no-ops.  All methods take `&mut self`, so a tick can never overlap a
//! previous tick's consumer callback.

use log::{debug, warn};

use crate::graph::GraphResult;
use crate::states::edit::EditState;
use crate::transform::SchemaTransform;

/// Fired once, synchronously, on the first text change of a session.
pub type SchemaTextChanged = Box<dyn FnMut(&str) + Send>;

/// Fired after each successful regeneration tick with the fresh graph and
/// the source text it was built from.
pub type GraphRegenerated = Box<dyn FnMut(&GraphResult, &str) + Send>;

/// A single editing session: pending text, dirty timestamps, the transform
/// to run, and the downstream callbacks.  Created when the session starts,
/// dropped when it ends; multiple sessions never share state.
pub struct Session<T: SchemaTransform> {
    transform: T,
    edit: EditState,
    schema_text_changed: Option<SchemaTextChanged>,
    graph_regenerated: Option<GraphRegenerated>,
}

impl<T: SchemaTransform> Session<T> {
    pub fn new(transform: T) -> Self {
        Self {
            transform,
            edit: EditState::default(),
            schema_text_changed: None,
            graph_regenerated: None,
        }
    }

    /// Register the consumer notified of the first text change.
    pub fn on_schema_text_changed(&mut self, callback: impl FnMut(&str) + Send + 'static) {
        self.schema_text_changed = Some(Box::new(callback));
    }

    /// Register the consumer notified after each successful regeneration.
    pub fn on_graph_regenerated(
        &mut self,
        callback: impl FnMut(&GraphResult, &str) + Send + 'static,
    ) {
        self.graph_regenerated = Some(Box::new(callback));
    }

    /// Read-only view of the tracked edit state, e.g. for a dirty
    /// indicator in the editor chrome.
    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    /// The editing surface reported new text.  Cheap: stores the snapshot
    /// and, only on the very first change of the session, propagates it
    /// downstream immediately so the rest of the application is seeded
    /// before the first tick.
    pub fn text_changed(&mut self, text: &str) {
        let first = self.edit.on_change(text);
        if first {
            if let Some(callback) = &mut self.schema_text_changed {
                callback(text);
            }
        }
    }

    /// The editing surface lost focus.  This is the sole dirty trigger:
    /// regeneration is expensive, so it is deferred until the user pauses.
    pub fn text_blurred(&mut self, now: f64) {
        self.edit.on_blur(now);
    }

    /// One regeneration tick.  Returns `true` when a fresh graph was
    /// emitted.
    ///
    /// Clean state is a no-op.  A failed transform is logged and leaves the
    /// timestamps untouched, so the next tick retries the same pending
    /// text; failures never propagate to the caller.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.edit.is_dirty() {
            return false;
        }
        let Some(source) = self.edit.pending_text.clone() else {
            return false;
        };

        match self.transform.regenerate(&source) {
            Ok(graph) => {
                debug!(
                    "schema regenerated: {} nodes, {} links",
                    graph.nodes.len(),
                    graph.links.len()
                );
                if let Some(callback) = &mut self.graph_regenerated {
                    callback(&graph, &source);
                }
                self.edit.mark_generated(now);
                true
            }
            Err(err) => {
                warn!("schema regeneration failed, retrying next tick: {err}");
                false
            }
        }
    }
}
