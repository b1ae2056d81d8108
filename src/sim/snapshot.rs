//! Read-only view of the simulation for rendering

use std::fmt;

use serde::Serialize;

use super::firefighter::{Firefighter, FirefighterController};
use super::grid::{CellState, Coord, Grid};
use super::state::SimState;

/// Per-state cell totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellCounts {
    pub empty: usize,
    pub trees: usize,
    pub burning: usize,
    pub firefighters: usize,
}

impl CellCounts {
    pub fn of(grid: &Grid) -> Self {
        grid.iter().fold(Self::default(), |mut acc, (_, state)| {
            match state {
                CellState::Empty => acc.empty += 1,
                CellState::Tree => acc.trees += 1,
                CellState::Burning => acc.burning += 1,
                CellState::Firefighter => acc.firefighters += 1,
            }
            acc
        })
    }
}

/// Borrowed frame handed to renderers after every clock tick
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    grid: &'a Grid,
    firefighter: &'a FirefighterController,
    tick: u64,
    counts: CellCounts,
}

impl<'a> Snapshot<'a> {
    pub fn new(state: &'a SimState) -> Self {
        Self {
            grid: &state.grid,
            firefighter: &state.firefighter,
            tick: state.tick_count,
            counts: CellCounts::of(&state.grid),
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn cell(&self, at: Coord) -> CellState {
        self.grid.get(at)
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Whether `at` lies in the active firefighter's suppression zone
    pub fn in_firefighter_zone(&self, at: Coord) -> bool {
        self.firefighter.is_inside_zone(at)
    }

    pub fn firefighter(&self) -> Option<&'a Firefighter> {
        self.firefighter.current()
    }

    pub fn tree_count(&self) -> usize {
        self.counts.trees
    }

    pub fn counts(&self) -> CellCounts {
        self.counts
    }

    /// Coarse tick this frame was taken on
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

impl fmt::Display for Snapshot<'_> {
    /// ASCII frame: `.` empty, `T` tree, `*` burning, `F` firefighter,
    /// lowercase/`~` marks cells inside the suppression zone
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            for col in 0..self.size() {
                let at = Coord::new(row, col);
                let zone = self.in_firefighter_zone(at);
                let ch = match (self.cell(at), zone) {
                    (CellState::Empty, false) => '.',
                    (CellState::Empty, true) => '~',
                    (CellState::Tree, false) => 'T',
                    (CellState::Tree, true) => 't',
                    (CellState::Burning, _) => '*',
                    (CellState::Firefighter, _) => 'F',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::firefighter::{FirefighterParams, spawn_at};

    #[test]
    fn test_counts_and_ascii() {
        let mut state = SimState::new(3, 1);
        state.grid.set(Coord::new(0, 0), CellState::Tree);
        state.grid.set(Coord::new(2, 2), CellState::Tree);
        spawn_at(
            &mut state,
            Coord::new(2, 1),
            &FirefighterParams {
                delay: 0,
                duration: 2,
                radius: 1,
            },
        );

        let snap = Snapshot::new(&state);
        assert_eq!(snap.tree_count(), 2);
        assert_eq!(
            snap.counts(),
            CellCounts {
                empty: 6,
                trees: 2,
                burning: 0,
                firefighters: 1,
            }
        );
        assert!(snap.in_firefighter_zone(Coord::new(1, 0)));
        assert!(!snap.in_firefighter_zone(Coord::new(0, 0)));
        assert_eq!(snap.to_string(), "T..\n~~~\n~Ft\n");
    }
}
