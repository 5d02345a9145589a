use crate::cli::commands::{Selection, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::{default_from_text, default_to_text};
use crate::utils::path::expand_tilde;

/// Handle the `export` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        from,
        to,
        where_expr,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let selection =
            Selection::from_args(from.as_deref(), to.as_deref(), where_expr.as_deref());
        let entries = selection.load(&store)?;

        let path = match file {
            Some(f) => expand_tilde(f),
            None => {
                let (from_text, to_text) = match &selection {
                    Selection::Range {
                        from_text, to_text, ..
                    } => (from_text.clone(), to_text.clone()),
                    Selection::Raw(_) => (default_from_text(), default_to_text()),
                };
                cfg.export_dir_path()
                    .join(ExportLogic::default_file_name(&from_text, &to_text, *format))
            }
        };

        ExportLogic::export(&entries, *format, &path, *force)?;
    }
    Ok(())
}
