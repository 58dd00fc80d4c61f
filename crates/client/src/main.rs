//! `pocket` binary.
//!
//! Composition root: loads `.env`, reads [`RuntimeConfig`] from the environment,
//! sets up logging, assembles the [`App`], then runs one command.
//!
//! ```bash
//! pocket convert charmander
//! pocket party add 25
//! pocket party xp 25 300
//! POCKET_PERSISTENCE=memory pocket roll d20
//! ```

use anyhow::Result;
use clap::Parser;
use pocket_client::{App, Cli, logging};
use pocket_runtime::RuntimeConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();

    let _guard = logging::setup_logging(cli.verbose)?;
    tracing::debug!(
        "Data dir: {}, persistence: {:?}",
        config.data_dir.display(),
        config.persistence
    );

    let app = App::build(&config)?;
    let output = cli.command.execute(&app)?;
    println!("{output}");

    Ok(())
}
