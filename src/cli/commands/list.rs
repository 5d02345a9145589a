use crate::cli::commands::{Selection, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::TrustedFilter;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::render::entry_line;
use crate::utils::date::current_year_month;

/// Handle the `list` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        from,
        to,
        where_expr,
        month,
    } = cmd
    {
        let store = open_store(cfg)?;

        let selection = if *month {
            Selection::Raw(TrustedFilter::for_month(&current_year_month()))
        } else {
            Selection::from_args(from.as_deref(), to.as_deref(), where_expr.as_deref())
        };

        let entries = selection.load(&store)?;
        if entries.is_empty() {
            info("No entries found for the specified filter.");
            return Ok(());
        }

        header(selection.describe());
        for e in &entries {
            println!("{}", entry_line(e));
        }
    }

    Ok(())
}
