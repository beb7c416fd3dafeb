use clap::Parser;

use rollfive::cli::Cli;
use rollfive::clipboard::ShareTarget;
use rollfive::state::DiceStore;
use rollfive::{config, logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    let config = config::load(cli.config.as_deref())?;

    // The store outlives every screen; it is handed to them by reference.
    let mut store = DiceStore::new();
    store.subscribe(|state| {
        tracing::debug!(headline = %state.headline, "dice state updated");
    });

    let share = match ShareTarget::new() {
        Ok(target) => Some(target),
        Err(err) => {
            tracing::warn!(error = %err, "clipboard unavailable, sharing disabled");
            None
        }
    };

    ui::runtime::run(store, config, share)?;
    Ok(())
}
