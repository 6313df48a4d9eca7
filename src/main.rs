use std::process::exit;

use clap::Parser;
use colored::Colorize;
use env_logger::Env;

use roomctl::app;
use roomctl::cli::args::CliArgs;

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let args = CliArgs::parse();
    if let Err(e) = app::run(args).await {
        log::debug!("command failed: {e:?}");
        eprintln!("{} {e}", "error:".bold().red());
        exit(1);
    }
}
