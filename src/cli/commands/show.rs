use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::render::entry_block;
use crate::utils::colors::{GREY, RESET};

/// Handle the `show` command: one entry plus its neighbours.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, prev, next } = cmd {
        let store = open_store(cfg)?;

        let base = match id {
            Some(id) => *id,
            None => match store.latest()? {
                Some(e) => e.id,
                None => {
                    info("No entries found");
                    return Ok(());
                }
            },
        };

        let target = if *prev {
            store.previous(base)?
        } else if *next {
            store.next(base)?
        } else {
            Some(base)
        };

        let Some(target) = target else {
            info(format!(
                "No entry {} ID {}",
                if *prev { "before" } else { "after" },
                base
            ));
            return Ok(());
        };

        let entry = store.get(target)?.ok_or(AppError::NotFound(target))?;
        println!("{}", entry_block(&entry));

        let fmt_id = |id: Option<i64>| {
            id.map(|i| i.to_string())
                .unwrap_or_else(|| format!("{GREY}--{RESET}"))
        };
        println!(
            "\n< {}   > {}",
            fmt_id(store.previous(entry.id)?),
            fmt_id(store.next(entry.id)?)
        );
    }

    Ok(())
}
