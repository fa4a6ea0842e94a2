use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::{self, Config, ConfigError};
use crate::discord::DiscordDisplay;
use crate::steam::SteamClient;
use crate::update::UpdateLoop;

#[derive(Debug, Parser)]
pub struct RunPresence {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
}

impl RunPresence {
    fn load_config(&self) -> Result<Config, ConfigError> {
        let path = config::resolve_path(self.config_file.as_ref())?;

        if !path.exists() {
            Config::write_default_template(&path)?;
            println!(
                "No config found, so a template was written to {}. Fill in your Discord and Steam details and run again.",
                path.display()
            );
        }

        Config::load(&path)
    }

    /// Primary action: keep the Discord presence in sync with steam until interrupted
    pub async fn run(&self) -> ExitCode {
        let conf = match self.load_config() {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };

        if conf.has_placeholders() {
            tracing::error!("The config file still contains placeholder values");
            return ExitCode::FAILURE;
        }
        if conf.settings.autostart {
            tracing::debug!("autostart is enabled; registering a login item is left to the installer");
        }

        let steam_client = SteamClient::official(&conf.steam.api_key, conf.settings.request_timeout());
        let display = DiscordDisplay::new(&conf.discord.application_id);

        let mut presence_loop = UpdateLoop::new(conf, steam_client, display);
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Could not listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
        };

        match presence_loop.run(shutdown).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("{}", e);
                ExitCode::FAILURE
            }
        }
    }
}
