//! Forest Fire - A stochastic forest-fire cellular automaton
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, fire, growth, lightning, firefighter)
//! - `scheduler`: Two-clock tick scheduler (coarse main tick, fine sub tick)
//! - `simulation`: Public facade used by a presentation layer
//! - `settings`: Data-driven simulation parameters

pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod simulation;

pub use scheduler::{ClockKind, TickScheduler};
pub use settings::{Settings, SettingsError};
pub use simulation::{FrameObserver, Simulation};

/// Simulation configuration constants
pub mod consts {
    use std::time::Duration;

    /// Coarse (main) clock period: growth, lightning, firefighter lifecycle
    pub const COARSE_PERIOD: Duration = Duration::from_millis(1000);
    /// Fine (sub) clock period: fire propagation and burnout
    pub const FINE_PERIOD: Duration = Duration::from_millis(100);

    /// Maximum clock firings processed per `advance` call to prevent spiral of death
    pub const MAX_CATCHUP_FIRINGS: usize = 64;

    /// Default grid dimension (cells per side)
    pub const DEFAULT_GRID_SIZE: usize = 50;
}
