//! Command-line scramble generator and pattern statistics for NxNxN cubes.

mod cli;
mod harness;
mod settings;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;

    let args = cli::Args::parse();
    let settings = settings::Settings::load(args.config.as_deref())?;

    // Initialize logging. `RUST_LOG` takes precedence over the settings.
    env_logger::builder()
        .filter_level(settings.log_level()?)
        .parse_default_env()
        .init();
    log::debug!("loaded settings {settings:?}");

    cli::exec(args.subcommand, &settings)
}
