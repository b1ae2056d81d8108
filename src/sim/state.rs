//! Simulation state aggregate
//!
//! All mutable state lives in one owned value. Resetting means building a
//! fresh `SimState`; there is no partial reset.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::burning::BurningRegistry;
use super::firefighter::FirefighterController;
use super::grid::{CellState, Coord, Grid};
use super::lightning::{FirstFire, LightningEvent};

/// Complete simulation state (deterministic given the seed)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub grid: Grid,
    pub burning: BurningRegistry,
    pub firefighter: FirefighterController,
    pub first_fire: FirstFire,
    /// Most recent strike, whether or not it ignited anything
    pub last_lightning: Option<LightningEvent>,
    /// Coarse tick counter; the only time reference for fire and firefighter timing
    pub tick_count: u64,
    /// Fine tick counter (informational)
    pub subtick_count: u64,
    rng: Pcg32,
}

impl SimState {
    /// Create a fresh all-empty state
    pub fn new(grid_size: usize, seed: u64) -> Self {
        Self {
            seed,
            grid: Grid::new(grid_size),
            burning: BurningRegistry::new(),
            firefighter: FirefighterController::default(),
            first_fire: FirstFire::default(),
            last_lightning: None,
            tick_count: 0,
            subtick_count: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Bernoulli trial with probability `p` (p = 0 never, p = 1 always)
    pub(crate) fn roll(&mut self, p: f64) -> bool {
        self.rng.random::<f64>() < p
    }

    /// Uniformly random coordinate over the whole grid (row drawn first)
    pub(crate) fn random_coord(&mut self) -> Coord {
        let size = self.grid.size();
        let row = self.rng.random_range(0..size);
        let col = self.rng.random_range(0..size);
        Coord::new(row, col)
    }

    /// True if every registry entry is a burning cell and every burning cell is registered
    pub fn is_consistent(&self) -> bool {
        let registry_ok = self
            .burning
            .coords()
            .all(|at| self.grid.contains(at) && self.grid.get(at) == CellState::Burning);
        registry_ok && self.grid.count(CellState::Burning) == self.burning.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = SimState::new(8, 42);
        assert_eq!(state.grid.size(), 8);
        assert!(state.burning.is_empty());
        assert!(!state.firefighter.is_active());
        assert_eq!(state.first_fire.tick(), None);
        assert_eq!(state.tick_count, 0);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_roll_extremes() {
        let mut state = SimState::new(4, 7);
        for _ in 0..100 {
            assert!(!state.roll(0.0));
            assert!(state.roll(1.0));
        }
    }

    #[test]
    fn test_random_coord_in_bounds_and_seeded() {
        let mut a = SimState::new(5, 99);
        let mut b = SimState::new(5, 99);
        for _ in 0..50 {
            let ca = a.random_coord();
            assert!(a.grid.contains(ca));
            assert_eq!(ca, b.random_coord());
        }
    }

    #[test]
    fn test_inconsistency_detected() {
        let mut state = SimState::new(3, 1);
        state.grid.set(Coord::new(1, 1), CellState::Burning);
        assert!(!state.is_consistent());
        state.burning.ignite(Coord::new(1, 1));
        assert!(state.is_consistent());
    }
}
