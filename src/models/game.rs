use std::fmt;
use std::num::ParseIntError;

use serde::{Deserialize, Deserializer, Serialize};

/// Numeric steam app / game identifier.
///
/// Steam reports catalog appids as integers but the live `gameid` of a player as a string, and
/// the allow-list in the config file may use either, so deserialization accepts both.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        GameId(id)
    }
}

impl TryFrom<&str> for GameId {
    type Error = ParseIntError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(GameId(s.trim().parse()?))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGameId {
    Int(u64),
    Str(String),
}

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawGameId::deserialize(deserializer)? {
            RawGameId::Int(id) => Ok(GameId(id)),
            RawGameId::Str(s) => GameId::try_from(s.as_str()).map_err(serde::de::Error::custom),
        }
    }
}
