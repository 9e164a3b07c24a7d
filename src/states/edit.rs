// Encapsulates the timestamps and pending text used for dirty-tracking
// between "last edited" and "last regenerated".  Moving this into a
// dedicated type keeps the scheduler from having to know about each field
// individually and provides a convenient place for helpers such as
// `on_change` and `is_dirty`.

/// Mutable per-session edit state. One instance per editing session, owned
/// by the [`Session`](crate::session::Session); never shared between
/// sessions and never persisted.
#[derive(Debug, Default)]
pub struct EditState {
    /// Most recent raw text reported by the editing surface.  `None` until
    /// the first change of the session; overwritten on every change, no
    /// history retained.
    pub pending_text: Option<String>,
    /// Wall-clock time (seconds) of the last blur event.  Blur, not typing,
    /// is what marks the document dirty.  `None` means the field has never
    /// lost focus.
    pub last_edit_time: Option<f64>,
    /// Time of the last successful regeneration.  Never moves backwards.
    pub last_generation_time: Option<f64>,
}

impl EditState {
    /// Record the text of an edit.  Returns `true` when this is the very
    /// first change observed in the session, so the caller can seed
    /// downstream state before the first tick.
    pub fn on_change(&mut self, text: &str) -> bool {
        let first = self.pending_text.is_none();
        self.pending_text = Some(text.to_owned());
        first
    }

    /// The editing surface lost focus: mark the document dirty.
    pub fn on_blur(&mut self, now: f64) {
        self.last_edit_time = Some(now);
    }

    /// True when text exists and was blurred after the last successful
    /// regeneration.
    pub fn is_dirty(&self) -> bool {
        if self.pending_text.is_none() {
            return false;
        }
        match (self.last_edit_time, self.last_generation_time) {
            (Some(edit), Some(generation)) => edit > generation,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// A regeneration of the pending text completed.  The generation time
    /// is clamped so it can only advance.
    pub fn mark_generated(&mut self, now: f64) {
        let next = match self.last_generation_time {
            Some(prev) => prev.max(now),
            None => now,
        };
        self.last_generation_time = Some(next);
    }
}
