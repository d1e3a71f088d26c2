use std::env;

use anyhow::Context;
use qbank::config::Config;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn parse_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let mut config = Config::from_env().context("invalid QBANK_* configuration")?;
    if let Some(manifest) = args.next() {
        config.manifest = manifest.into();
    }
    if let Some(extra) = args.next() {
        anyhow::bail!("unexpected argument '{}'", extra);
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qbank=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match parse_config(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: qbank [manifest_path]");
            return Err(e);
        }
    };

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let summary = qbank::bank::run(&config, &mut rng).context("failed to generate question bank")?;
    println!("{}", summary);

    Ok(())
}
