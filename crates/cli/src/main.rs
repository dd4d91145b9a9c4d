use anyhow::Context;

use stockroom_cli::{Config, demo};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Config::from_env().context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out, &config)?;

    Ok(())
}
