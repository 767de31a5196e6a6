//! Terminal entry point.

use std::io;

use almacen_cli::{Settings, Shell};
use almacen_inventory::{InventoryForm, InventoryState};

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    almacen_observability::init(settings.log_format);

    let registry = settings.registry();
    tracing::info!(categories = registry.len(), "starting stock form");

    let mut shell = Shell::new(InventoryForm::new(InventoryState::new(registry)));
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout.lock())?;

    tracing::info!("stock form closed");
    Ok(())
}
