
use crate::config::Config;
use crate::models::presence::PresenceUpdate;
use crate::models::steam::{Game, User};

/// Which of the three payload shapes was chosen for a user snapshot
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresenceKind {
    Idle,
    Lobby,
    Simple,
}

/// Find the catalog entry for the game the user is playing
pub fn find_game<'a>(user: &User, games: &'a [Game]) -> Option<&'a Game> {
    let id = user.game_id()?;
    games.iter().find(|g| g.appid == id)
}

/// Decide which payload shape applies, degrading to idle when information is missing or the
/// game is filtered out by the allow-list.
pub fn classify(user: &User, games: &[Game], config: &Config) -> PresenceKind {
    if !user.is_playing() || !config.settings.is_game_allowed(user.game_id()) {
        return PresenceKind::Idle;
    }

    if user.is_in_lobby() {
        match find_game(user, games) {
            Some(_) => PresenceKind::Lobby,
            None => PresenceKind::Idle,
        }
    } else {
        PresenceKind::Simple
    }
}

/// Build this cycle's presence payload. Pure: the result depends only on the arguments.
pub fn derive_presence(user: &User, games: &[Game], config: &Config) -> PresenceUpdate {
    let show_buttons = config.settings.show_invite_button;

    match (classify(user, games, config), find_game(user, games)) {
        (PresenceKind::Lobby, Some(game)) => PresenceUpdate::lobby(user, game, show_buttons),
        (PresenceKind::Simple, _) => PresenceUpdate::simple(user, show_buttons),
        _ => PresenceUpdate::idle(show_buttons),
    }
}
