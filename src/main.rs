use clap::Parser;

use claude_session_export::cli::{self, Cli};

fn main() {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
