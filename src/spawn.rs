/// Time-driven produce spawning.
///
/// Spawning is keyed to elapsed milliseconds, not frames, so the spawn rate
/// does not depend on how often the loop ticks.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{FallingItem, Freshness, ProduceKind};

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnController {
    pub interval_ms: u64,
    pub last_spawn_ms: u64,
}

impl SpawnController {
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms,
            last_spawn_ms: now_ms,
        }
    }

    pub fn reset(&mut self, now_ms: u64) {
        self.last_spawn_ms = now_ms;
    }

    /// Returns a new item if more than one interval has elapsed since the
    /// last spawn.  A clock reading earlier than the last spawn never spawns.
    pub fn maybe_spawn(
        &mut self,
        now_ms: u64,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Option<FallingItem> {
        if now_ms.saturating_sub(self.last_spawn_ms) <= self.interval_ms {
            return None;
        }
        self.last_spawn_ms = now_ms;
        Some(spawn_item(config, rng))
    }
}

/// Build one item just above the visible field.
pub fn spawn_item(config: &GameConfig, rng: &mut impl Rng) -> FallingItem {
    let kind = ProduceKind::ALL[rng.gen_range(0..ProduceKind::ALL.len())];
    let size = config.item_size;
    let max_x = config.field_width - size;
    let x = if max_x > 0.0 { rng.gen_range(0.0..max_x) } else { 0.0 };
    let freshness = if rng.gen_bool(config.fresh_probability) {
        Freshness::Fresh
    } else {
        Freshness::Spoiled
    };
    log::debug!("spawn {} ({:?}) at x={:.1}", kind.name(), freshness, x);
    FallingItem {
        x,
        y: -size,
        width: size,
        height: size,
        kind,
        freshness,
    }
}
