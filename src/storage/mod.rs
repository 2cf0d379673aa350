pub mod drafts;

pub use drafts::{DraftError, DraftStore, MemoryDraftStore, SqliteDraftStore, draft_key};

use std::fs;
use std::path::Path;

/// Ensure the parent directory of `path` exists
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
