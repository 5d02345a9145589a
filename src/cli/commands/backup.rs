use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `backup` command (manual copy, optionally zipped).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let dest = expand_tilde(file);
        ensure_writable(&BackupLogic::target_path(&dest, *compress), *force)?;

        let written = BackupLogic::backup_to(&cfg.database_path(), &dest, *compress)?;
        success(format!("Backup created: {}", written.display()));
    }

    Ok(())
}
