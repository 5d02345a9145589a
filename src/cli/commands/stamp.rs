use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::SessionTracker;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render::status_line_colored;
use chrono::{Local, Utc};

/// Handle the `stamp` command: toggle in/out.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stamp { code, comment } = cmd {
        let store = open_store(cfg)?;
        let mut tracker = SessionTracker::load(&store)?;

        let now_utc = Utc::now();
        let now_local = now_utc.with_timezone(&Local).naive_local();

        let outcome = tracker.toggle(
            &store,
            now_utc,
            now_local,
            code.as_deref(),
            comment.as_deref(),
            cfg,
        )?;

        println!("{}", status_line_colored(Some(&outcome.entry)));
        if let Some(c) = &outcome.entry.comment {
            println!("Code: {} | Comment: {}", outcome.entry.code, c);
        } else {
            println!("Code: {}", outcome.entry.code);
        }

        let next = &outcome.next;
        info(format!(
            "Next stamp: code '{}', {} '{}'",
            next.code, next.prompt, next.comment
        ));
    }

    Ok(())
}
