use serde::Serialize;

use crate::models::steam::{Game, User};

pub const BRAND_LABEL: &str = "Steam";
pub const PROJECT_BUTTON_LABEL: &str = "Download SteamRPC";
pub const PROJECT_URL: &str = "https://github.com/EchterTimo/SteamRPC";
pub const JOIN_BUTTON_LABEL: &str = "Join Lobby";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Button {
    pub label: String,
    pub url: String,
}

impl Button {
    pub fn new(label: &str, url: &str) -> Button {
        Button { label: label.to_string(), url: url.to_string() }
    }

    fn project() -> Button {
        Button::new(PROJECT_BUTTON_LABEL, PROJECT_URL)
    }
}

/// The rich presence payload pushed to the display client once per cycle
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PresenceUpdate {
    pub state: Option<String>,
    pub details: Option<String>,

    pub start: Option<i64>,
    pub end: Option<i64>,

    pub large_image: Option<String>,
    pub large_text: Option<String>,
    pub small_image: Option<String>,
    pub small_text: Option<String>,

    pub party_id: Option<String>,
    pub party_size: Option<(u32, u32)>,

    // At most two; the display client rejects more
    pub buttons: Vec<Button>,
    pub instance: bool,
}

impl Default for PresenceUpdate {
    fn default() -> Self {
        PresenceUpdate {
            state: None,
            details: None,
            start: None,
            end: None,
            large_image: None,
            large_text: None,
            small_image: None,
            small_text: None,
            party_id: None,
            party_size: None,
            buttons: vec![],
            instance: true,
        }
    }
}

impl PresenceUpdate {
    /// Nothing is running
    pub fn idle(show_buttons: bool) -> PresenceUpdate {
        PresenceUpdate {
            state: Some("Idle".to_string()),
            details: Some("No game running".to_string()),
            large_text: Some(BRAND_LABEL.to_string()),
            buttons: if show_buttons { vec![Button::project()] } else { vec![] },
            ..Default::default()
        }
    }

    /// Playing a catalog game inside a joinable lobby
    pub fn lobby(user: &User, game: &Game, show_buttons: bool) -> PresenceUpdate {
        let buttons = if show_buttons {
            vec![Button::new(JOIN_BUTTON_LABEL, &user.join_uri()), Button::project()]
        } else {
            vec![]
        };

        PresenceUpdate {
            state: Some(game.name.clone()),
            details: game.total_playtime_hours().map(|h| format!("{}h total playtime", h)),
            large_image: Some(user.avatarfull.clone()),
            large_text: Some(user.personaname.clone()),
            small_image: game.icon_url(),
            small_text: Some(game.name.clone()),
            buttons: buttons,
            ..Default::default()
        }
    }

    /// Playing something we only know the name of
    pub fn simple(user: &User, show_buttons: bool) -> PresenceUpdate {
        PresenceUpdate {
            state: user.gameextrainfo.clone(),
            large_image: Some(user.avatar.clone()),
            large_text: Some(user.personaname.clone()),
            buttons: if show_buttons { vec![Button::project()] } else { vec![] },
            ..Default::default()
        }
    }
}
