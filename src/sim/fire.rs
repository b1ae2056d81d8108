//! Fire ignition and 4-directional spread

use super::grid::{CellState, Coord};
use super::state::SimState;

/// Set a cell on fire.
///
/// No-op on a firefighter cell or inside the active suppression zone.
/// Re-igniting a burning cell keeps its original countdown.
pub fn ignite(state: &mut SimState, at: Coord) {
    if state.grid.get(at) == CellState::Firefighter {
        return;
    }
    if state.firefighter.is_inside_zone(at) {
        return;
    }
    state.grid.set(at, CellState::Burning);
    state.burning.ignite(at);
}

/// One fine tick of fire: spread to neighbouring trees, then burn down.
///
/// Walks a snapshot of the registry, so cells lit during this step neither
/// spread nor count down until the next one.
pub fn propagate_step(state: &mut SimState) {
    for (at, _) in state.burning.snapshot() {
        if !state.grid.contains(at) || state.grid.get(at) != CellState::Burning {
            log::debug!("Dropping stale burning entry at ({}, {})", at.row, at.col);
            state.burning.remove(at);
            continue;
        }

        for n in state.grid.neighbors4(at) {
            if state.grid.get(n) == CellState::Tree {
                ignite(state, n);
            }
        }

        match state.burning.tick_down(at) {
            Some(0) | None => {
                state.grid.set(at, CellState::Empty);
                state.burning.remove(at);
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::firefighter::Firefighter;

    fn state_with_trees(size: usize, trees: &[(usize, usize)]) -> SimState {
        let mut state = SimState::new(size, 1);
        for &(r, c) in trees {
            state.grid.set(Coord::new(r, c), CellState::Tree);
        }
        state
    }

    #[test]
    fn test_ignite_tree() {
        let mut state = state_with_trees(3, &[(1, 1)]);
        ignite(&mut state, Coord::new(1, 1));
        assert_eq!(state.grid.get(Coord::new(1, 1)), CellState::Burning);
        assert!(state.burning.contains(Coord::new(1, 1)));
    }

    #[test]
    fn test_ignite_firefighter_cell_is_noop() {
        let mut state = SimState::new(3, 1);
        state.grid.set(Coord::new(0, 0), CellState::Firefighter);
        ignite(&mut state, Coord::new(0, 0));
        assert_eq!(state.grid.get(Coord::new(0, 0)), CellState::Firefighter);
        assert!(state.burning.is_empty());
    }

    #[test]
    fn test_ignite_inside_zone_is_noop() {
        let mut state = state_with_trees(5, &[(1, 1), (3, 3)]);
        state.firefighter.activate(Firefighter {
            position: Coord::new(0, 0),
            remaining_ticks: 5,
            radius: 1,
        });
        ignite(&mut state, Coord::new(1, 1));
        assert_eq!(state.grid.get(Coord::new(1, 1)), CellState::Tree);
        ignite(&mut state, Coord::new(3, 3));
        assert_eq!(state.grid.get(Coord::new(3, 3)), CellState::Burning);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_burns_out_after_two_subticks() {
        let mut state = state_with_trees(3, &[(1, 1)]);
        ignite(&mut state, Coord::new(1, 1));
        propagate_step(&mut state);
        assert_eq!(state.grid.get(Coord::new(1, 1)), CellState::Burning);
        propagate_step(&mut state);
        assert_eq!(state.grid.get(Coord::new(1, 1)), CellState::Empty);
        assert!(state.burning.is_empty());
    }

    #[test]
    fn test_spread_one_ring_per_subtick() {
        // Row of trees: fire walks one cell per fine tick
        let mut state = SimState::new(5, 1);
        for c in 0..5 {
            state.grid.set(Coord::new(0, c), CellState::Tree);
        }
        ignite(&mut state, Coord::new(0, 0));

        propagate_step(&mut state);
        assert_eq!(state.grid.get(Coord::new(0, 1)), CellState::Burning);
        assert_eq!(state.grid.get(Coord::new(0, 2)), CellState::Tree);

        propagate_step(&mut state);
        assert_eq!(state.grid.get(Coord::new(0, 0)), CellState::Empty);
        assert_eq!(state.grid.get(Coord::new(0, 2)), CellState::Burning);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_spread_skips_non_trees() {
        let mut state = state_with_trees(3, &[(1, 1)]);
        state.grid.set(Coord::new(0, 1), CellState::Firefighter);
        ignite(&mut state, Coord::new(1, 1));
        propagate_step(&mut state);
        assert_eq!(state.grid.get(Coord::new(0, 1)), CellState::Firefighter);
        assert_eq!(state.grid.get(Coord::new(1, 0)), CellState::Empty);
        assert_eq!(state.burning.len(), 1);
    }

    #[test]
    fn test_stale_entry_is_dropped() {
        let mut state = state_with_trees(3, &[(1, 1)]);
        ignite(&mut state, Coord::new(1, 1));
        // Simulate drift: cell cleared behind the registry's back
        state.grid.set(Coord::new(1, 1), CellState::Tree);
        propagate_step(&mut state);
        assert!(state.burning.is_empty());
        assert_eq!(state.grid.get(Coord::new(1, 1)), CellState::Tree);
        assert!(state.is_consistent());
    }
}
