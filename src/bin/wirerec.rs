use clap::Parser;
use wirerec::cli::{run_cli, Cli};
use wirerec::logging;
use wirerec::runtime_config::RuntimeConfig;

fn main() -> anyhow::Result<()> {
    let config = RuntimeConfig::from_env();
    logging::init(&config);

    let cli = Cli::parse();
    run_cli(&cli)
}
