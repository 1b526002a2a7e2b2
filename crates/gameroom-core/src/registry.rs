use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::game::{Game, GameId};

/// Registry handle shared between collaborators that were handed the same
/// registry explicitly.
pub type SharedGameRegistry = Arc<GameRegistry>;

/// Tracks every game by id and by name, and hands out ids in creation order.
///
/// All operations take one lock for their whole duration, so a lookup never
/// sees a half-applied creation and two callers racing to create the same
/// name end up with the same game.
#[derive(Debug)]
pub struct GameRegistry {
    inner: Mutex<Inner>,
    log_lookups: bool,
}

#[derive(Debug)]
struct Inner {
    /// Insertion order. Never reordered or shrunk.
    games: Vec<Arc<Game>>,
    by_id: HashMap<GameId, usize>,
    by_name: HashMap<String, usize>,
    next_id: GameId,
}

impl Inner {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            games: Vec::with_capacity(capacity),
            by_id: HashMap::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
            next_id: GameId::FIRST,
        }
    }

    fn alloc_game_id(&mut self) -> GameId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

/// Point-in-time copy of the registry contents, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    pub games: Vec<Game>,
    pub next_id: GameId,
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            inner: Mutex::new(Inner::with_capacity(config.effective_capacity())),
            log_lookups: config.log_lookups,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation finishes before anything that could panic, so the
        // state behind a poisoned lock is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the game called `name`, creating it with the next id if no such
    /// game exists yet. Asking twice for the same name returns the same game
    /// and consumes no id.
    pub fn create_or_get(&self, name: &str) -> Arc<Game> {
        let mut inner = self.lock();

        if let Some(&pos) = inner.by_name.get(name) {
            let game = Arc::clone(&inner.games[pos]);
            tracing::trace!(id = %game.id(), name = ?name, "Game already registered");
            return game;
        }

        let id = inner.alloc_game_id();
        let game = Arc::new(Game::new(id, name.to_string()));
        let pos = inner.games.len();
        inner.games.push(Arc::clone(&game));
        inner.by_id.insert(id, pos);
        inner.by_name.insert(name.to_string(), pos);

        tracing::debug!(id = %id, name = ?name, "Registered new game");
        game
    }

    /// Game at zero-based insertion position `index`. Positions are not
    /// identifiers; this exists for diagnostics and tests.
    pub fn get_by_position(&self, index: usize) -> Result<Arc<Game>, RegistryError> {
        let inner = self.lock();
        inner
            .games
            .get(index)
            .map(Arc::clone)
            .ok_or(RegistryError::PositionOutOfRange {
                index,
                count: inner.games.len(),
            })
    }

    pub fn get_by_id(&self, id: GameId) -> Option<Arc<Game>> {
        let inner = self.lock();
        let found = inner.by_id.get(&id).map(|&pos| Arc::clone(&inner.games[pos]));
        if found.is_none() && self.log_lookups {
            tracing::trace!(id = %id, "No game with id");
        }
        found
    }

    pub fn get_by_name(&self, name: &str) -> Option<Arc<Game>> {
        let inner = self.lock();
        let found = inner
            .by_name
            .get(name)
            .map(|&pos| Arc::clone(&inner.games[pos]));
        if found.is_none() && self.log_lookups {
            tracing::trace!(name = ?name, "No game with name");
        }
        found
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.lock().by_name.contains_key(name)
    }

    /// Number of games created so far.
    pub fn count(&self) -> usize {
        self.lock().games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().games.is_empty()
    }

    /// The id the next newly created game will receive.
    pub fn next_id(&self) -> GameId {
        self.lock().next_id
    }

    /// All games in creation order.
    pub fn games(&self) -> Vec<Arc<Game>> {
        self.lock().games.clone()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let inner = self.lock();
        RegistrySnapshot {
            games: inner.games.iter().map(|g| (**g).clone()).collect(),
            next_id: inner.next_id,
        }
    }
}
