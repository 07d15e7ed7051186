use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifegrid::config::Config;
use lifegrid::display::App;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lifegrid=info"));

    match (&config.log_file, config.generations) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }

        // Logging to the terminal would garble the UI, so only headless runs log to stderr
        (None, Some(_)) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .init();
        }
        (None, None) => {}
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    info!(?config, "Starting");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let generations = config.generations;
    let mut app = App::new(config, &mut rng).context("Failed to build the grid")?;

    match generations {
        Some(n) => app
            .run_headless(n, &mut io::stdout().lock())
            .context("Failed to print the grid")?,
        None => app.run().context("Terminal UI failed")?,
    }

    Ok(())
}
