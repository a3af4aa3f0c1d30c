/// Motion and collision.
///
/// Moves the basket from the input snapshot, advances every falling item,
/// and sorts items into caught / missed / still falling.  Scoring is not
/// done here; callers feed `StepReport::caught` to the score machine.

use crate::config::GameConfig;
use crate::entities::{Basket, CatchEvent, FallingItem};

/// Held-state of the movement intents, sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
}

/// What happened to the items during one step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Catches in processing order (highest store index first).
    pub caught: Vec<CatchEvent>,
    /// Items that fell past the bottom of the field.
    pub missed: usize,
}

// ── Basket ────────────────────────────────────────────────────────────────────

pub fn clamp_basket(basket: &mut Basket, config: &GameConfig) {
    basket.x = basket.x.clamp(0.0, config.basket_max_x());
}

/// Apply held input then clamp.  Left and right together cancel out.
pub fn move_basket(basket: &mut Basket, input: InputSnapshot, config: &GameConfig) {
    if input.left {
        basket.x -= config.basket_speed;
    }
    if input.right {
        basket.x += config.basket_speed;
    }
    clamp_basket(basket, config);
}

// ── Items ─────────────────────────────────────────────────────────────────────

/// Box test with the basket's horizontal extent shrunk by `margin` per side.
pub fn in_catch_zone(item: &FallingItem, basket: &Basket, margin: f32) -> bool {
    let vertical = item.y + item.height > basket.y && item.y < basket.y + basket.height;
    let horizontal = item.x + item.width > basket.x + margin
        && item.x < basket.x + basket.width - margin;
    vertical && horizontal
}

/// Advance every item by `item_speed`, then remove caught and off-field
/// items.  Each item is tested once and lands in at most one outcome.
pub fn step_items(
    items: &mut Vec<FallingItem>,
    basket: &Basket,
    config: &GameConfig,
) -> StepReport {
    for item in items.iter_mut() {
        item.y += config.item_speed;
    }

    let mut report = StepReport::default();
    // Reverse index walk so removals don't shift unvisited items.
    for i in (0..items.len()).rev() {
        if in_catch_zone(&items[i], basket, config.catch_margin) {
            let item = items.remove(i);
            report.caught.push(CatchEvent::from(&item));
        } else if items[i].y > config.field_height {
            items.remove(i);
            report.missed += 1;
        }
    }
    report
}
