use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use itertools::Itertools;
use thiserror::Error;

use crate::config::Config;
use crate::discord::{DisplayError, PresenceDisplay};
use crate::errlog;
use crate::models::steam::Game;
use crate::presence;
use crate::steam::{SteamError, SteamHandling};

#[derive(Error, Debug)]
pub enum LoopError {
    #[error("Could not fetch the owned games catalog: {0}")]
    Catalog(#[from] SteamError),
    #[error("Presence display failed: {0}")]
    Display(#[from] DisplayError),
}

pub type Result<T> = std::result::Result<T, LoopError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoopState {
    Disconnected,
    Connected,
    /// Terminal; restarting is left to whatever supervises the process
    Failed,
    /// Shut down on request
    Stopped,
}

/// Mirrors the steam user's activity into the presence display, once per interval
pub struct UpdateLoop<S: SteamHandling, D: PresenceDisplay> {
    config: Config,
    steam: S,
    display: D,
    games: Vec<Game>,
    interval: Duration,
    error_log_dir: PathBuf,
    state: LoopState,
}

impl<S: SteamHandling, D: PresenceDisplay> UpdateLoop<S, D> {
    pub fn new(config: Config, steam: S, display: D) -> UpdateLoop<S, D> {
        let interval = config.settings.poll_interval();

        UpdateLoop {
            config: config,
            steam: steam,
            display: display,
            games: vec![],
            interval: interval,
            error_log_dir: PathBuf::from("."),
            state: LoopState::Disconnected,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Where error records for fatal display failures are written
    pub fn with_error_log_dir(mut self, dir: &Path) -> Self {
        self.error_log_dir = dir.to_owned();
        self
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    fn fail(&mut self, e: DisplayError) -> LoopError {
        tracing::error!("{}", e);
        if let Err(io) = errlog::write_error_log(&self.error_log_dir, &e) {
            tracing::error!("Could not write error log: {}", io);
        }
        self.state = LoopState::Failed;
        e.into()
    }

    fn load_catalog(&mut self) -> Result<()> {
        self.games = self.steam.get_owned_games(&self.config.steam.id)?;
        tracing::info!("Loaded {} owned games", self.games.len());

        let settings = &self.config.settings;
        if !settings.show_all_games && !settings.allowed_games.is_empty() {
            tracing::info!("Only showing games: {}", settings.allowed_games.iter().join(", "));
        }
        Ok(())
    }

    /// One fetch, derive, push round. Only fatal display errors escape.
    async fn cycle(&mut self) -> std::result::Result<(), DisplayError> {
        let user = match self.steam.get_user(&self.config.steam.id) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Skipping update, could not fetch steam user: {}", e);
                return Ok(());
            }
        };

        let kind = presence::classify(&user, &self.games, &self.config);
        tracing::debug!("User {} is {:?}", user.personaname, kind);

        let update = presence::derive_presence(&user, &self.games, &self.config);
        match self.display.update(&update).await {
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                tracing::warn!("Skipping update: {}", e);
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    /// Fetch the catalog, connect to the display, then keep it updated until `shutdown` resolves
    /// or the display goes away.
    pub async fn run<F: Future<Output = ()>>(&mut self, shutdown: F) -> Result<()> {
        self.load_catalog()?;

        if let Err(e) = self.display.connect().await {
            return Err(self.fail(e));
        }
        self.state = LoopState::Connected;

        tokio::pin!(shutdown);

        loop {
            if let Err(e) = self.cycle().await {
                return Err(self.fail(e));
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = &mut shutdown => break,
            }
        }

        tracing::info!("Shutting down");
        self.display.disconnect().await;
        self.state = LoopState::Stopped;

        Ok(())
    }
}
