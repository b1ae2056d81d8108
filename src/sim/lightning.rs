//! Lightning strikes and the first-fire timer

use serde::{Deserialize, Serialize};

use super::fire;
use super::grid::{CellState, Coord};
use super::state::SimState;

/// A recorded lightning strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightningEvent {
    pub at: Coord,
    /// Coarse tick of the strike
    pub tick: u64,
    /// Whether the struck cell was a tree
    pub ignited: bool,
}

/// Latches the coarse tick of the first lightning fire since reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstFire {
    tick: Option<u64>,
}

impl FirstFire {
    /// Record `tick` unless a first fire is already latched
    pub fn latch(&mut self, tick: u64) -> bool {
        if self.tick.is_some() {
            return false;
        }
        self.tick = Some(tick);
        true
    }

    pub fn tick(&self) -> Option<u64> {
        self.tick
    }

    /// Coarse ticks since the first fire, if there has been one
    pub fn elapsed(&self, now: u64) -> Option<u64> {
        self.tick.map(|t| now.saturating_sub(t))
    }
}

/// Roll for a strike this coarse tick and, if it hits, strike a random cell.
pub fn step(state: &mut SimState, lightning_prob: f64) -> Option<LightningEvent> {
    if !state.roll(lightning_prob) {
        return None;
    }
    let at = state.random_coord();
    Some(strike_at(state, at))
}

/// Strike a specific cell.
///
/// A tree ignites along with its orthogonal tree neighbours; anything else is
/// left alone. The strike is recorded either way.
pub fn strike_at(state: &mut SimState, at: Coord) -> LightningEvent {
    let tick = state.tick_count;
    let ignited = state.grid.get(at) == CellState::Tree;

    if ignited {
        fire::ignite(state, at);
        for n in state.grid.neighbors4(at) {
            if state.grid.get(n) == CellState::Tree {
                fire::ignite(state, n);
            }
        }
        if state.first_fire.latch(tick) {
            log::debug!("First fire at tick {} ({}, {})", tick, at.row, at.col);
        }
    }

    log::debug!(
        "Lightning at tick {}: ({}, {}){}",
        tick,
        at.row,
        at.col,
        if ignited { " ignited" } else { "" }
    );

    let event = LightningEvent { at, tick, ignited };
    state.last_lightning = Some(event);
    event
}
