pub mod init;
pub mod run;

use std::process::ExitCode;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "steam-presence")]
#[command(version = "0.1.0")]
enum Cli {
    Run(run::RunPresence),
    InitConfig(init::RunInitConfig),
}

impl Cli {
    async fn run(&self) -> ExitCode {
        match self {
            Self::Run(cmd) => cmd.run().await,
            Self::InitConfig(cmd) => cmd.run(),
        }
    }
}

pub async fn cli_main() -> ExitCode {
    Cli::parse().run().await
}
