//! Deterministic simulation module
//!
//! All forest-fire logic lives here. This module must be pure and deterministic:
//! - Tick-counted time only (no wall clock)
//! - Seeded RNG only
//! - Stable iteration order (row-major grid, insertion-ordered fires)
//! - No rendering or platform dependencies

pub mod burning;
pub mod fire;
pub mod firefighter;
pub mod grid;
pub mod growth;
pub mod lightning;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use burning::{BURN_SUBTICKS, BurningRegistry};
pub use firefighter::{Firefighter, FirefighterController, FirefighterParams};
pub use grid::{CellState, Coord, Grid};
pub use lightning::{FirstFire, LightningEvent};
pub use snapshot::{CellCounts, Snapshot};
pub use state::SimState;
pub use tick::{TickParams, coarse_tick, fine_tick};
