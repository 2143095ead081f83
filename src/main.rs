use clap::Parser;

use annokit::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = cli::config_path(&args)?;
    let mut config = cli::load_config(&config_path)?;
    if args.json_logs {
        config.logging.json = true;
    }

    // Initialize logging
    annokit::init_logging_with(&config.logging)?;
    tracing::debug!("annokit {} using {}", annokit::VERSION, config_path.display());

    cli::run(args.cmd, &config, &config_path)
}
