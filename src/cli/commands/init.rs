use crate::config::Config;
use crate::core::store::LogStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (kept unless `force`)
///  - the SQLite database and its schema
pub fn handle(cfg: &Config, config_path: &Path, force: bool) -> AppResult<()> {
    info("Initializing stamplog…");

    if config_path.exists() && !force {
        info(format!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        ));
    } else {
        cfg.save(config_path)?;
    }

    let db_path = cfg.database_path();
    let store = LogStore::initialize(&db_path)?;
    success(format!(
        "Database initialized at {} ({} entries)",
        db_path.display(),
        store.count()?
    ));
    Ok(())
}
