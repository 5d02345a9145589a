use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::tracker::SessionTracker;
use crate::errors::AppResult;
use crate::ui::render::status_line_colored;

/// Handle the `status` command.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let tracker = SessionTracker::load(&store)?;
    let latest = store.latest()?;

    println!("{}", status_line_colored(latest.as_ref()));

    let next = tracker.input_defaults(cfg);
    println!(
        "Next: stamp {} (code '{}', {} '{}')",
        tracker.next_direction(),
        next.code,
        next.prompt,
        next.comment
    );
    Ok(())
}
