//! Process-wide registry.
//!
//! Applications that can thread a [`SharedGameRegistry`] through their own
//! state should do that instead. This module is for callers that need the one
//! registry the whole process agrees on.
//!
//! [`SharedGameRegistry`]: crate::registry::SharedGameRegistry

use std::sync::OnceLock;

use crate::config::RegistryConfig;
use crate::registry::GameRegistry;

static INSTANCE: OnceLock<GameRegistry> = OnceLock::new();

/// The process-wide registry, created from [`RegistryConfig::load`] on first
/// access. Concurrent first calls block until exactly one of them has built
/// the registry, and all of them get that registry.
pub fn instance() -> &'static GameRegistry {
    INSTANCE.get_or_init(|| build(&RegistryConfig::load()))
}

/// Create the process-wide registry from `config`. If it already exists,
/// `config` is ignored and the existing registry is returned.
pub fn init(config: &RegistryConfig) -> &'static GameRegistry {
    let mut created = false;
    let registry = INSTANCE.get_or_init(|| {
        created = true;
        build(config)
    });
    if !created {
        tracing::warn!("Game registry already initialized, ignoring new configuration");
    }
    registry
}

pub fn is_initialized() -> bool {
    INSTANCE.get().is_some()
}

fn build(config: &RegistryConfig) -> GameRegistry {
    config.validate();
    tracing::info!(
        initial_capacity = config.initial_capacity,
        log_lookups = config.log_lookups,
        "Game registry initialized"
    );
    GameRegistry::with_config(config)
}
