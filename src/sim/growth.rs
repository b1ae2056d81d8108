//! Stochastic tree regrowth

use super::grid::{CellState, Coord};
use super::state::SimState;

/// Each cell empty at the start of the step becomes a tree with probability `growth_prob`.
pub fn step(state: &mut SimState, growth_prob: f64) {
    let empty: Vec<Coord> = state
        .grid
        .iter()
        .filter(|&(_, s)| s == CellState::Empty)
        .map(|(at, _)| at)
        .collect();

    let mut grown = 0usize;
    for at in empty {
        if state.roll(growth_prob) {
            state.grid.set(at, CellState::Tree);
            grown += 1;
        }
    }
    log::trace!("Tick {}: {} trees grew", state.tick_count, grown);
}
