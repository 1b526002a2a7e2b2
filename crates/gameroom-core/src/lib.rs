pub mod config;
pub mod error;
pub mod game;
pub mod global;
pub mod registry;

pub use error::RegistryError;
pub use game::{Game, GameId};
pub use registry::{GameRegistry, RegistrySnapshot, SharedGameRegistry};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::collections::HashSet;

    use crate::game::GameId;
    use crate::registry::GameRegistry;

    /// Create a fresh registry and register `names` in order.
    pub fn make_registry(names: &[&str]) -> GameRegistry {
        let reg = GameRegistry::new();
        for name in names {
            reg.create_or_get(name);
        }
        reg
    }

    /// Check every structural registry invariant against the current contents:
    /// ids are exactly `1..=count` in position order, names are unique, both
    /// lookups agree with positional lookup, and the next id follows the last.
    pub fn assert_registry_invariants(reg: &GameRegistry) {
        let snapshot = reg.snapshot();
        let count = snapshot.games.len();
        assert_eq!(reg.count(), count, "count() must match snapshot length");

        let mut names = HashSet::new();
        for (pos, game) in snapshot.games.iter().enumerate() {
            assert_eq!(
                game.id(),
                GameId(pos as u64 + 1),
                "ids must be assigned 1, 2, 3, ... in creation order"
            );
            assert!(
                names.insert(game.name().to_string()),
                "duplicate game name {:?}",
                game.name()
            );
            assert_eq!(*reg.get_by_position(pos).unwrap(), *game);
            assert_eq!(*reg.get_by_id(game.id()).unwrap(), *game);
            assert_eq!(*reg.get_by_name(game.name()).unwrap(), *game);
            assert!(game.id() < snapshot.next_id, "id must be below next_id");
        }

        assert_eq!(
            snapshot.next_id,
            GameId(count as u64 + 1),
            "next_id must follow the last issued id"
        );
        assert!(reg.get_by_position(count).is_err());
    }
}
