use std::io;

use anyhow::Context;

use stockroom_cli::{CliConfig, Console};
use stockroom_inventory::InventorySystem;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = CliConfig::load().context("failed to load configuration")?;
    let mut system = InventorySystem::with_default_users(config.inventory);
    tracing::info!(
        low_stock_threshold = system.config().low_stock_threshold,
        update_policy = ?system.config().update_policy,
        users = system.user_count(),
        "starting console"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let outcome = console.run(&mut system).context("console I/O failed")?;

    tracing::info!(?outcome, "console finished");
    Ok(())
}
