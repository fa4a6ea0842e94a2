use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::{self, Config};

#[derive(Debug, Parser)]
pub struct RunInitConfig {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

impl RunInitConfig {
    /// Write a config template with placeholder credentials
    pub fn run(&self) -> ExitCode {
        let path = match config::resolve_path(self.config_file.as_ref()) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };

        if path.exists() && !self.force {
            tracing::error!("{} already exists; pass --force to overwrite it", path.display());
            return ExitCode::FAILURE;
        }

        match Config::write_default_template(&path) {
            Ok(()) => {
                println!("Wrote config template to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("{}", e);
                ExitCode::FAILURE
            }
        }
    }
}
