use std::process::ExitCode;

use tokio;

use steam_presence::{cli, logging};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();
    cli::cli_main().await
}
