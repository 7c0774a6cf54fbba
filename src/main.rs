use clap::Parser;

use launchd_docker::adapter::inbound::cli::command::Cli;
use launchd_docker::adapter::inbound::cli::{dispatch, operator, output};
use launchd_docker::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if operator::install(Box::new(Operator::new())).is_err() {
        eprintln!("operator already installed");
        std::process::exit(1);
    }

    if let Err(e) = dispatch::execute(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
