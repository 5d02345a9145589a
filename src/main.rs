//! stamplog main entrypoint.

use stamplog::run;
use stamplog::ui::messages::{error, info};

fn main() {
    if let Err(e) = run() {
        error(&e);
        if let Some(hint) = e.kind().hint() {
            info(hint);
        }
        std::process::exit(1);
    }
}
