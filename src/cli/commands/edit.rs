use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EDIT_LINE_FORMAT, EditLogic};
use crate::core::tracker::SessionTracker;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::render::status_line;

/// Handle the `edit` command.
///
/// Without a line the current values are printed in the editable format, so
/// they can be copied, changed and passed back.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, line } = cmd {
        let store = open_store(cfg)?;
        let current = store.get(*id)?.ok_or(AppError::NotFound(*id))?;

        let Some(line) = line else {
            info(format!("Edit entry ({EDIT_LINE_FORMAT}):"));
            println!("{}", current.to_edit_line());
            return Ok(());
        };

        let updated = EditLogic::parse_line(line, *id)?;

        let mut tracker = SessionTracker::load(&store)?;
        tracker.update_entry(&store, &updated)?;

        success(format!("Entry {} updated.", id));
        println!("{}", status_line(store.latest()?.as_ref()));
    }

    Ok(())
}
