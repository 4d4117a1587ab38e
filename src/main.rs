use clap::Parser;
use std::process;

use music_manager::args::Args;
use music_manager::config::Config;

fn main() {
    let args = Args::parse();

    // RUST_LOG still takes precedence over the verbose flag
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::build(&args).unwrap_or_else(|err| {
        log::error!("Could not build configuration: {err}");
        process::exit(1);
    });

    if let Err(e) = music_manager::run(config) {
        log::error!("Fatal Error: {e}");
        process::exit(1);
    }
}
