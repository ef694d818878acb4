use anyhow::Result;
use clap::Parser;
use term_settings::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level takes precedence over RUST_LOG
    term_settings::debug::init_log_bridge(cli.log_level.map(cli::LogLevel::to_level_filter));

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(cli, &mut stdout) {
        eprintln!("term-settings: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
