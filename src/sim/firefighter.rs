//! Firefighter lifecycle and suppression zone
//!
//! At most one firefighter exists. It appears a configurable number of coarse
//! ticks after the first lightning fire, douses every fire within its
//! Chebyshev radius on arrival, blocks ignition inside that zone while
//! present, and leaves after a fixed number of coarse ticks.
//!
//! State machine: `Inactive -> Active -> Inactive`.

use serde::{Deserialize, Serialize};

use super::grid::{CellState, Coord};
use super::state::SimState;

/// Firefighter timing and reach, in coarse ticks and cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirefighterParams {
    /// Coarse ticks after the first fire before spawning
    pub delay: u64,
    /// Coarse ticks the firefighter stays (counting the spawn tick)
    pub duration: u32,
    /// Suppression radius (Chebyshev distance)
    pub radius: usize,
}

impl Default for FirefighterParams {
    fn default() -> Self {
        Self {
            delay: 5,
            duration: 5,
            radius: 3,
        }
    }
}

/// An active firefighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firefighter {
    pub position: Coord,
    /// Coarse ticks left before leaving
    pub remaining_ticks: u32,
    /// Fixed at spawn time
    pub radius: usize,
}

impl Firefighter {
    #[inline]
    pub fn covers(&self, at: Coord) -> bool {
        self.position.chebyshev(at) <= self.radius
    }
}

/// Owns the (at most one) firefighter
#[derive(Debug, Clone, Default)]
pub struct FirefighterController {
    active: Option<Firefighter>,
}

impl FirefighterController {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn current(&self) -> Option<&Firefighter> {
        self.active.as_ref()
    }

    /// Suppression zone test shared by ignition blocking and the spawn sweep
    pub fn is_inside_zone(&self, at: Coord) -> bool {
        self.active.is_some_and(|ff| ff.covers(at))
    }

    pub(crate) fn activate(&mut self, firefighter: Firefighter) {
        debug_assert!(self.active.is_none(), "firefighter already active");
        self.active = Some(firefighter);
    }

    pub(crate) fn deactivate(&mut self) -> Option<Firefighter> {
        self.active.take()
    }

    /// Count down one coarse tick, returning the ticks left
    fn tick_down(&mut self) -> Option<u32> {
        let ff = self.active.as_mut()?;
        ff.remaining_ticks = ff.remaining_ticks.saturating_sub(1);
        Some(ff.remaining_ticks)
    }
}

/// Per-coarse-tick update: spawn check, then countdown, then expiry check.
///
/// The countdown also runs on the spawn tick, so a duration of 1 leaves in
/// the same tick it arrived.
pub fn update(state: &mut SimState, params: &FirefighterParams) {
    if !state.firefighter.is_active()
        && state
            .first_fire
            .elapsed(state.tick_count)
            .is_some_and(|since| since >= params.delay)
    {
        spawn(state, params);
    }

    if state.firefighter.tick_down() == Some(0) {
        expire(state);
    }
}

/// Spawn at a uniformly random cell
pub fn spawn(state: &mut SimState, params: &FirefighterParams) -> Coord {
    let at = state.random_coord();
    spawn_at(state, at, params);
    at
}

/// Spawn at a specific cell and extinguish every fire inside the zone.
pub fn spawn_at(state: &mut SimState, at: Coord, params: &FirefighterParams) {
    state.firefighter.activate(Firefighter {
        position: at,
        remaining_ticks: params.duration,
        radius: params.radius,
    });

    let doused: Vec<Coord> = state
        .burning
        .coords()
        .filter(|&c| state.firefighter.is_inside_zone(c))
        .collect();
    for &c in &doused {
        state.grid.set(c, CellState::Tree);
        state.burning.remove(c);
    }

    state.grid.set(at, CellState::Firefighter);

    log::info!(
        "Firefighter spawned at ({}, {}) on tick {} for {} ticks, radius {}, doused {} fires",
        at.row,
        at.col,
        state.tick_count,
        params.duration,
        params.radius,
        doused.len()
    );
}

/// Remove the firefighter, clearing its cell if nothing else took it over
fn expire(state: &mut SimState) {
    let Some(ff) = state.firefighter.deactivate() else {
        return;
    };
    let at = ff.position;
    if state.grid.contains(at) && state.grid.get(at) == CellState::Firefighter {
        state.grid.set(at, CellState::Empty);
    }
    log::info!(
        "Firefighter at ({}, {}) left on tick {}",
        at.row,
        at.col,
        state.tick_count
    );
}
