use super::*;

use std::fs;

use serde_json;

#[test]
fn read_player_summaries_response() {
    let data = fs::read_to_string("test/fixtures/player-summaries/player-summaries-1.json").unwrap();
    let actual: SteamPlayerSummariesResponse = serde_json::from_str(&data).unwrap();

    assert_eq!(actual.response.players.len(), 1);

    let user = &actual.response.players[0];
    assert_eq!(user.steamid, "76561197960287930");
    assert_eq!(user.personaname, "Rabscuttle");
    assert_eq!(user.personastate, PersonaState::Online);
    assert_eq!(user.gameextrainfo.as_deref(), Some("Team Fortress 2"));
    assert_eq!(user.game_id(), Some(GameId(440)));
    assert!(user.is_playing());
    assert!(user.is_in_lobby());
    assert!(user.is_online());
}

#[test]
fn read_player_summaries_response_not_playing() {
    let data = fs::read_to_string("test/fixtures/player-summaries/player-summaries-idle.json").unwrap();
    let actual: SteamPlayerSummariesResponse = serde_json::from_str(&data).unwrap();

    let user = &actual.response.players[0];
    assert_eq!(user.personastate, PersonaState::Away);
    assert!(!user.is_playing());
    assert!(!user.is_in_lobby());
    assert!(!user.is_online());
    assert_eq!(user.game_id(), None);
}

#[test]
fn read_owned_games_response() {
    let data = fs::read_to_string("test/fixtures/owned-games/owned-games-1.json").unwrap();
    let actual: SteamOwnedGamesResponse = serde_json::from_str(&data).unwrap();

    let games = actual.response.games;
    assert_eq!(games.len(), 3);

    assert_eq!(games[0].appid, GameId(440));
    assert_eq!(games[0].total_playtime_hours(), Some(10));
    assert_eq!(
        games[0].icon_url().as_deref(),
        Some("http://media.steampowered.com/steamcommunity/public/images/apps/440/e3f595a92552da3d664ad00277fad2107345f743.jpg")
    );

    assert_eq!(games[1].total_playtime_hours(), Some(2));
    assert_eq!(games[1].content_descriptorids, Some(vec![1, 5]));

    // No playtime or icon reported at all
    assert_eq!(games[2].total_playtime_hours(), None);
    assert_eq!(games[2].icon_url(), None);
}

#[test]
fn read_owned_games_response_private_profile() {
    let data = fs::read_to_string("test/fixtures/owned-games/owned-games-private.json").unwrap();
    let actual: SteamOwnedGamesResponse = serde_json::from_str(&data).unwrap();

    assert_eq!(actual.response.game_count, None);
    assert!(actual.response.games.is_empty());
}

#[test]
fn unknown_persona_state_is_preserved() {
    assert_eq!(PersonaState::from(6), PersonaState::LookingToPlay);
    assert_eq!(PersonaState::from(9), PersonaState::Other(9));
}

#[test]
fn join_uri_from_lobby() {
    let user = User {
        steamid: "1".to_string(),
        gameid: Some("440".to_string()),
        lobbysteamid: Some("999".to_string()),
        ..Default::default()
    };

    assert_eq!(user.join_uri(), "steam://joinlobby/440/999/1");
}

#[test]
fn game_id_accepts_both_representations() {
    let from_int: GameId = serde_json::from_str("440").unwrap();
    let from_str: GameId = serde_json::from_str("\"440\"").unwrap();

    assert_eq!(from_int, from_str);
    assert!(serde_json::from_str::<GameId>("\"tf2\"").is_err());
}
