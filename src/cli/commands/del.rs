use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::SessionTracker;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};
use crate::ui::render::{entry_line, status_line};

/// Handle the `del` command. Deleting a missing ID is not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = open_store(cfg)?;

        let Some(entry) = store.get(*id)? else {
            info(format!("Entry {} does not exist; nothing to delete.", id));
            return Ok(());
        };

        if !*yes {
            warning(format!(
                "Delete {}? This action is irreversible.",
                entry_line(&entry)
            ));
            if !confirm("Confirm")? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut tracker = SessionTracker::load(&store)?;
        if tracker.delete_entry(&store, *id)? {
            success(format!("Entry {} has been deleted.", id));
        }
        println!("{}", status_line(store.latest()?.as_ref()));
    }

    Ok(())
}
