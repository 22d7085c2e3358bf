use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod formats;
mod model;
mod pipeline;

fn main() -> Result<()> {
    // Usage errors exit with 1; --help and --version still exit with 0.
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let cfg = config::Config::load(args.config.as_deref())?;

    if args.print_default_config {
        let s = cfg.to_toml_pretty()?;
        print!("{s}");
        return Ok(());
    }

    config::init_tracing(&cfg.logging, args.log_level.as_deref())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "subshift starting");

    pipeline::run_shift(&args, &cfg)
}
