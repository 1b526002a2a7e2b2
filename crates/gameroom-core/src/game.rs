use serde::{Deserialize, Serialize};

/// Unique identifier for a registered game. Assigned by the registry,
/// strictly positive, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    /// The identifier handed to the first game a registry creates.
    pub const FIRST: GameId = GameId(1);

    pub fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> GameId {
        GameId(self.0 + 1)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A game known to the registry. Identity and name never change once the
/// registry has created it. Only a registry can construct one, so a `Game`
/// always carries an id that registry actually issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    id: GameId,
    name: String,
}

impl Game {
    pub(crate) fn new(id: GameId, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game [id={}, name={}]", self.id, self.name)
    }
}
