//! Simulation facade
//!
//! Everything a presentation layer needs: reset, start/stop, feeding elapsed
//! time to the clocks, a read-only snapshot after every tick, the last
//! lightning strike, and parameter setters that only affect later ticks.

use std::time::Duration;

use crate::scheduler::{ClockKind, TickScheduler};
use crate::settings::Settings;
use crate::sim::{LightningEvent, SimState, Snapshot, coarse_tick, fine_tick};

/// Render notification, called after each clock tick that changed something
pub trait FrameObserver {
    fn on_frame(&mut self, clock: ClockKind, snapshot: &Snapshot<'_>);
}

/// Headless runs
impl FrameObserver for () {
    fn on_frame(&mut self, _clock: ClockKind, _snapshot: &Snapshot<'_>) {}
}

/// A forest-fire simulation plus its clocks
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimState,
    settings: Settings,
    scheduler: TickScheduler,
}

impl Simulation {
    /// Create a stopped simulation with an empty grid
    pub fn new(settings: Settings) -> Self {
        let state = SimState::new(settings.grid_size, settings.seed);
        let scheduler = TickScheduler::new(settings.coarse_period(), settings.fine_period());
        Self {
            state,
            settings,
            scheduler,
        }
    }

    /// Stop, then rebuild all state with a new grid dimension
    pub fn reset(&mut self, grid_size: usize) {
        self.reset_with_seed(grid_size, self.settings.seed);
    }

    /// Stop, then rebuild all state with a new grid dimension and seed
    pub fn reset_with_seed(&mut self, grid_size: usize, seed: u64) {
        self.scheduler.reset();
        self.settings.grid_size = grid_size;
        self.settings.seed = seed;
        self.state = SimState::new(grid_size, seed);
        log::info!("Simulation reset: {}x{} grid, seed {}", grid_size, grid_size, seed);
    }

    pub fn start(&mut self) {
        if self.scheduler.start() {
            log::info!("Simulation started at tick {}", self.state.tick_count);
        }
    }

    pub fn stop(&mut self) {
        if self.scheduler.stop() {
            log::info!("Simulation stopped at tick {}", self.state.tick_count);
        }
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Let `elapsed` pass, running every due tick in order.
    /// Returns the number of clock firings processed.
    pub fn advance(&mut self, elapsed: Duration, observer: &mut impl FrameObserver) -> usize {
        let fired = self.scheduler.advance(elapsed);
        for &clock in &fired {
            self.run_clock(clock, observer);
        }
        fired.len()
    }

    /// Run one coarse tick immediately, regardless of the clocks
    pub fn step_coarse(&mut self, observer: &mut impl FrameObserver) {
        self.run_clock(ClockKind::Coarse, observer);
    }

    /// Run one fine tick immediately, regardless of the clocks
    pub fn step_fine(&mut self, observer: &mut impl FrameObserver) {
        self.run_clock(ClockKind::Fine, observer);
    }

    fn run_clock(&mut self, clock: ClockKind, observer: &mut impl FrameObserver) {
        let changed = match clock {
            ClockKind::Coarse => {
                coarse_tick(&mut self.state, &self.settings.tick_params());
                true
            }
            ClockKind::Fine => fine_tick(&mut self.state),
        };
        if changed {
            observer.on_frame(clock, &Snapshot::new(&self.state));
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.state)
    }

    pub fn last_lightning(&self) -> Option<LightningEvent> {
        self.state.last_lightning
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Mutable state access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // === Parameters (read by the next tick) ===

    pub fn set_growth_prob(&mut self, p: f64) {
        self.settings.growth_prob = p;
    }

    pub fn set_lightning_prob(&mut self, p: f64) {
        self.settings.lightning_prob = p;
    }

    pub fn set_firefighter_delay(&mut self, ticks: u64) {
        self.settings.firefighter_delay = ticks;
    }

    pub fn set_firefighter_duration(&mut self, ticks: u32) {
        self.settings.firefighter_duration = ticks;
    }

    /// Applies to the next firefighter spawned
    pub fn set_firefighter_radius(&mut self, cells: usize) {
        self.settings.firefighter_radius = cells;
    }

    pub fn set_clock_periods(&mut self, coarse: Duration, fine: Duration) {
        self.settings.coarse_period_ms = coarse.as_millis() as u64;
        self.settings.fine_period_ms = fine.as_millis() as u64;
        self.scheduler.set_periods(coarse, fine);
    }
}
