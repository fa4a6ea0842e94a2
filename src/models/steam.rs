#[cfg(test)]
mod tests;

use serde::Deserialize;

use crate::models::game::GameId;

const ICON_BASE_URL: &str = "http://media.steampowered.com/steamcommunity/public/images/apps";

/// An entry of a user's owned games catalog, as returned by `IPlayerService/GetOwnedGames`
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Game {
    pub appid: GameId,
    #[serde(default)]
    pub name: String,
    pub playtime_forever: Option<u64>,
    pub img_icon_url: Option<String>,
    pub playtime_2weeks: Option<u64>,
    pub has_community_visible_stats: Option<bool>,
    pub playtime_windows_forever: Option<u64>,
    pub playtime_mac_forever: Option<u64>,
    pub playtime_linux_forever: Option<u64>,
    pub playtime_deck_forever: Option<u64>,
    pub rtime_last_played: Option<u64>,
    pub playtime_disconnected: Option<u64>,
    pub has_leaderboards: Option<bool>,
    pub content_descriptorids: Option<Vec<u32>>,
}

impl Game {
    pub fn icon_url(&self) -> Option<String> {
        self.img_icon_url
            .as_ref()
            .filter(|hash| !hash.is_empty())
            .map(|hash| format!("{}/{}/{}.jpg", ICON_BASE_URL, self.appid, hash))
    }

    /// Whole hours played, rounded down. None if steam didn't report any playtime.
    pub fn total_playtime_hours(&self) -> Option<u64> {
        self.playtime_forever.map(|minutes| minutes / 60)
    }
}

/// Steam's `personastate` field. Private profiles always report `Offline`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(from = "u8")]
pub enum PersonaState {
    #[default]
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
    Other(u8),
}

impl From<u8> for PersonaState {
    fn from(n: u8) -> Self {
        match n {
            0 => PersonaState::Offline,
            1 => PersonaState::Online,
            2 => PersonaState::Busy,
            3 => PersonaState::Away,
            4 => PersonaState::Snooze,
            5 => PersonaState::LookingToTrade,
            6 => PersonaState::LookingToPlay,
            _ => PersonaState::Other(n),
        }
    }
}

/// A player profile snapshot from `ISteamUser/GetPlayerSummaries`
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct User {
    pub steamid: String,
    #[serde(default)]
    pub personaname: String,
    #[serde(default)]
    pub profileurl: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub avatarmedium: String,
    #[serde(default)]
    pub avatarfull: String,
    #[serde(default)]
    pub personastate: PersonaState,
    pub communityvisibilitystate: Option<u8>,
    pub profilestate: Option<u8>,
    pub lastlogoff: Option<u64>,
    pub timecreated: Option<u64>,
    pub personastateflags: Option<u32>,
    pub gameextrainfo: Option<String>,
    pub gameid: Option<String>,
    pub lobbysteamid: Option<String>,
    pub loccountrycode: Option<String>,
}

impl User {
    pub fn is_playing(&self) -> bool {
        self.gameid.is_some()
    }

    pub fn is_in_lobby(&self) -> bool {
        self.lobbysteamid.is_some()
    }

    pub fn is_online(&self) -> bool {
        self.personastate == PersonaState::Online
    }

    /// The game currently being played, if steam reported a numeric game id
    pub fn game_id(&self) -> Option<GameId> {
        self.gameid.as_deref().and_then(|id| GameId::try_from(id).ok())
    }

    pub fn join_uri(&self) -> String {
        format!(
            "steam://joinlobby/{}/{}/{}",
            self.gameid.as_deref().unwrap_or_default(),
            self.lobbysteamid.as_deref().unwrap_or_default(),
            self.steamid,
        )
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SteamPlayers {
    #[serde(default)]
    pub players: Vec<User>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SteamPlayerSummariesResponse {
    pub response: SteamPlayers,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SteamOwnedGames {
    pub game_count: Option<u32>,
    #[serde(default)]
    pub games: Vec<Game>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SteamOwnedGamesResponse {
    pub response: SteamOwnedGames,
}
