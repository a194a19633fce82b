use clap::Parser;
use hadolint_bridge::{cli::Cli, config};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(hadolint_bridge::handlers::EXIT_TOOL_UNAVAILABLE);
        }
    }
}

fn run() -> hadolint_bridge::Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    let cwd = std::env::current_dir()?;
    let config = config::load_config(cli.config.as_deref(), &cwd)?;

    let mut stdout = std::io::stdout().lock();
    hadolint_bridge::run_command(cli.command, &config, &mut stdout)
}
