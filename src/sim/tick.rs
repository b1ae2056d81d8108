//! Coarse and fine tick bodies
//!
//! The scheduler decides when these run; this module only decides what a
//! single tick of each clock does and in which order.

use serde::{Deserialize, Serialize};

use super::firefighter::{self, FirefighterParams};
use super::state::SimState;
use super::{fire, growth, lightning};

/// Parameters consumed by the next tick (deterministic)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickParams {
    /// Per-cell regrowth probability per coarse tick, in [0, 1]
    pub growth_prob: f64,
    /// Strike probability per coarse tick, in [0, 1]
    pub lightning_prob: f64,
    pub firefighter: FirefighterParams,
}

impl Default for TickParams {
    fn default() -> Self {
        Self {
            growth_prob: 0.01,
            lightning_prob: 0.1,
            firefighter: FirefighterParams::default(),
        }
    }
}

/// Advance one coarse tick: growth, lightning, then the firefighter
pub fn coarse_tick(state: &mut SimState, params: &TickParams) {
    state.tick_count += 1;

    growth::step(state, params.growth_prob);
    lightning::step(state, params.lightning_prob);
    firefighter::update(state, &params.firefighter);

    log::trace!(
        "Coarse tick {}: {} burning",
        state.tick_count,
        state.burning.len()
    );
}

/// Advance one fine tick of fire. Returns false when nothing was burning.
pub fn fine_tick(state: &mut SimState) -> bool {
    state.subtick_count += 1;
    if state.burning.is_empty() {
        return false;
    }
    fire::propagate_step(state);
    true
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sim::grid::CellState;
    use proptest::prelude::*;

    fn params_strategy() -> impl Strategy<Value = TickParams> {
        (0.0f64..=1.0, 0.0f64..=1.0, 0u64..5, 1u32..6, 0usize..4).prop_map(
            |(growth_prob, lightning_prob, delay, duration, radius)| TickParams {
                growth_prob,
                lightning_prob,
                firefighter: FirefighterParams {
                    delay,
                    duration,
                    radius,
                },
            },
        )
    }

    proptest! {
        #[test]
        fn registry_matches_grid_after_every_tick(
            seed in any::<u64>(),
            size in 1usize..12,
            params in params_strategy(),
            fine_per_coarse in 0usize..12,
        ) {
            let mut state = SimState::new(size, seed);
            for _ in 0..15 {
                coarse_tick(&mut state, &params);
                prop_assert!(state.is_consistent());
                for _ in 0..fine_per_coarse {
                    fine_tick(&mut state);
                    prop_assert!(state.is_consistent());
                }
            }
        }

        #[test]
        fn at_most_one_firefighter(
            seed in any::<u64>(),
            size in 1usize..10,
            params in params_strategy(),
        ) {
            let mut state = SimState::new(size, seed);
            for _ in 0..20 {
                coarse_tick(&mut state, &params);
                fine_tick(&mut state);
                let expected = usize::from(state.firefighter.is_active());
                prop_assert!(state.grid.count(CellState::Firefighter) <= expected);
            }
        }

        #[test]
        fn full_growth_fills_every_empty_cell(seed in any::<u64>(), size in 1usize..16) {
            let mut state = SimState::new(size, seed);
            let params = TickParams {
                growth_prob: 1.0,
                lightning_prob: 0.0,
                ..TickParams::default()
            };
            coarse_tick(&mut state, &params);
            prop_assert_eq!(state.grid.count(CellState::Tree), size * size);
        }
    }
}
