//! File glue for the editing surface: import a schema from disk into raw
//! text, and the (currently inert) export path.

use std::fs;
use std::io;
use std::path::Path;

/// Read a local schema file into raw text for the editing surface.  The
/// contents are not interpreted here; feed them to
/// [`Session::text_changed`](crate::session::Session::text_changed).
pub fn import_schema_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Export the current schema text.  Not wired up yet: the call is accepted
/// and ignored so the editor chrome can keep its save affordance.
pub fn export_schema(_schema: &str) -> io::Result<()> {
    Ok(())
}
