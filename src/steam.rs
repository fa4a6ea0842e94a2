use std::time::Duration;

use thiserror::Error;
use ureq;

use crate::models::steam::*;

pub const STEAM_API_URL: &str = "https://api.steampowered.com";

#[derive(Error, Debug)]
pub enum SteamError {
    #[error("Steam responded with http status {0}")]
    Status(u16),
    #[error("An http error occurred fetching data from steam: {0}")]
    Http(String),
    #[error("An IO error occurred fetching data from steam: {0}")]
    Io(#[from] std::io::Error),
    #[error("Steam returned no profile for user {0}")]
    UserNotFound(String),
}

pub type Result<T> = std::result::Result<T, SteamError>;

// ureq renders the request url, api key included, into its errors; keep only the status or the
// transport failure itself.
impl From<ureq::Error> for SteamError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => SteamError::Status(code),
            ureq::Error::Transport(t) => {
                let mut msg = t.kind().to_string();
                if let Some(detail) = t.message() {
                    msg.push_str(&format!(": {}", detail));
                }
                if let Some(source) = std::error::Error::source(&t) {
                    msg.push_str(&format!(": {}", source));
                }
                SteamError::Http(msg)
            }
        }
    }
}

pub trait SteamUserHandling {
    fn get_user(&self, steam_id: &str) -> Result<User>;
}

pub trait SteamPlayerServiceHandling {
    fn get_owned_games(&self, steam_id: &str) -> Result<Vec<Game>>;
}

/// Everything the presence loop needs from steam
pub trait SteamHandling: SteamUserHandling + SteamPlayerServiceHandling {}

pub struct SteamClient {
    api_key: String,
    api_url: String,
    agent: ureq::Agent,
}

impl SteamClient {
    pub fn new(api_key: &str, api_url: &str, timeout: Duration) -> SteamClient {
        SteamClient {
            api_key: api_key.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    /// A client talking to the public steam web API
    pub fn official(api_key: &str, timeout: Duration) -> SteamClient {
        SteamClient::new(api_key, STEAM_API_URL, timeout)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }
}

impl SteamUserHandling for SteamClient {
    fn get_user(&self, steam_id: &str) -> Result<User> {
        let req = self.agent.get(&self.endpoint("ISteamUser/GetPlayerSummaries/v0002/"))
            .query("key", &self.api_key)
            .query("steamids", steam_id);

        req.call()?
            .into_json::<SteamPlayerSummariesResponse>()?
            .response
            .players
            .into_iter()
            .next()
            .ok_or_else(|| SteamError::UserNotFound(steam_id.to_string()))
    }
}

impl SteamPlayerServiceHandling for SteamClient {
    fn get_owned_games(&self, steam_id: &str) -> Result<Vec<Game>> {
        let req = self.agent.get(&self.endpoint("IPlayerService/GetOwnedGames/v0001/"))
            .query("key", &self.api_key)
            .query("steamid", steam_id)
            .query("include_appinfo", "1")
            .query("format", "json");

        Ok(req.call()?.into_json::<SteamOwnedGamesResponse>()?.response.games)
    }
}

impl SteamHandling for SteamClient {}
