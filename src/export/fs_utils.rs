use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// Make sure `path` may be (over)written.
///
/// A missing file, or `force`, passes straight through. An existing file is
/// only replaced after the user agrees; a refusal is a storage error so the
/// caller stops before touching anything.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists.", path.display()));
    if confirm("Overwrite?")? {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::Storage(format!(
        "kept existing file {}",
        path.display()
    )))
}
