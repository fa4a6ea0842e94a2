//! Rich presence display backed by the local Discord client

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use discord_sdk::{
    activity::{ActivityBuilder, Assets, Button, PartyPrivacy},
    wheel::{UserState, Wheel},
    Discord, Subscriptions,
};
use thiserror::Error;
use tokio::sync::watch;

use crate::models::presence::PresenceUpdate;

/// Timeout for waiting for the Discord handshake
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Discord is not available: {0}")]
    Unavailable(String),
    #[error("Invalid Discord application id: {0:?}")]
    InvalidApplicationId(String),
    #[error("Not connected to Discord")]
    NotConnected,
    #[error("Lost the connection to Discord")]
    SessionLost,
    #[error("Discord rejected the presence update: {0}")]
    Update(String),
}

impl DisplayError {
    /// Whether the display session is unusable, as opposed to a single failed update
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DisplayError::Update(_))
    }
}

pub type Result<T> = std::result::Result<T, DisplayError>;

/// A chat client able to show a rich presence payload
#[async_trait]
pub trait PresenceDisplay: Send {
    async fn connect(&mut self) -> Result<()>;
    async fn update(&mut self, presence: &PresenceUpdate) -> Result<()>;
    async fn disconnect(&mut self);
}

struct Session {
    discord: Discord,
    user: watch::Receiver<UserState>,
    _wheel: Wheel,
}

pub struct DiscordDisplay {
    application_id: String,
    session: Option<Session>,
}

impl DiscordDisplay {
    pub fn new(application_id: &str) -> DiscordDisplay {
        DiscordDisplay { application_id: application_id.to_string(), session: None }
    }

    fn app_id(&self) -> Result<i64> {
        self.application_id
            .trim()
            .parse()
            .map_err(|_| DisplayError::InvalidApplicationId(self.application_id.clone()))
    }
}

fn build_activity(presence: &PresenceUpdate) -> ActivityBuilder {
    let mut activity = ActivityBuilder::new().instance(presence.instance);

    if let Some(state) = &presence.state {
        activity = activity.state(state.clone());
    }
    if let Some(details) = &presence.details {
        activity = activity.details(details.clone());
    }
    if let Some(start) = presence.start {
        activity = activity.start_timestamp(start);
    }
    if let Some(end) = presence.end {
        activity = activity.end_timestamp(end);
    }

    // Image texts are only shown as hover text, so they're dropped without an image
    let mut assets = Assets::default();
    if let Some(image) = &presence.large_image {
        assets = assets.large(image.clone(), presence.large_text.clone());
    }
    if let Some(image) = &presence.small_image {
        assets = assets.small(image.clone(), presence.small_text.clone());
    }
    activity = activity.assets(assets);

    if let Some(id) = &presence.party_id {
        let (current, max) = presence.party_size.unwrap_or((0, 0));
        activity = activity.party(
            id.clone(),
            NonZeroU32::new(current),
            NonZeroU32::new(max),
            PartyPrivacy::Private,
        );
    }

    for button in presence.buttons.iter().take(2) {
        activity = activity.button(Button { label: button.label.clone(), url: button.url.clone() });
    }

    activity
}

#[async_trait]
impl PresenceDisplay for DiscordDisplay {
    async fn connect(&mut self) -> Result<()> {
        let app_id = self.app_id()?;

        let (wheel, handler) = Wheel::new(Box::new(|err| {
            tracing::warn!("Discord error: {:?}", err);
        }));
        let mut user_spoke = wheel.user();

        let discord = Discord::new(app_id, Subscriptions::ACTIVITY, Box::new(handler))
            .map_err(|e| DisplayError::Unavailable(format!("{:?}", e)))?;

        tracing::info!("Discord connecting...");

        let handshake = tokio::time::timeout(HANDSHAKE_TIMEOUT, async {
            if user_spoke.0.changed().await.is_err() {
                Err("Discord connection closed".to_string())
            } else {
                match &*user_spoke.0.borrow() {
                    UserState::Connected(user) => Ok(user.username.clone()),
                    UserState::Disconnected(err) => Err(format!("Discord disconnected: {:?}", err)),
                }
            }
        })
        .await;

        let username = match handshake {
            Ok(Ok(username)) => username,
            Ok(Err(e)) => {
                discord.disconnect().await;
                return Err(DisplayError::Unavailable(e));
            }
            Err(_) => {
                discord.disconnect().await;
                return Err(DisplayError::Unavailable("handshake timed out".to_string()));
            }
        };

        tracing::info!("Discord Rich Presence connected as {}", username);

        self.session = Some(Session { discord, user: user_spoke.0, _wheel: wheel });
        Ok(())
    }

    async fn update(&mut self, presence: &PresenceUpdate) -> Result<()> {
        let session = self.session.as_ref().ok_or(DisplayError::NotConnected)?;

        let is_disconnected = || matches!(*session.user.borrow(), UserState::Disconnected(_));
        if is_disconnected() {
            return Err(DisplayError::SessionLost);
        }

        match session.discord.update_activity(build_activity(presence)).await {
            Ok(_) => Ok(()),
            Err(_) if is_disconnected() => Err(DisplayError::SessionLost),
            Err(e) => Err(DisplayError::Update(e.to_string())),
        }
    }

    async fn disconnect(&mut self) {
        if let Some(session) = self.session.take() {
            if let Err(e) = session.discord.clear_activity().await {
                tracing::debug!("Failed to clear Discord activity: {:?}", e);
            }
            session.discord.disconnect().await;
            tracing::info!("Discord Rich Presence disconnected");
        }
    }
}
