//! Forest Fire entry point
//!
//! Headless native runner: feeds wall-clock-sized steps to the scheduler and
//! prints an ASCII frame after every coarse tick.
//!
//! Usage: `forest-fire [SETTINGS.json] [COARSE_TICKS]`

use forest_fire::sim::Snapshot;
use forest_fire::{ClockKind, FrameObserver, Settings, Simulation};

/// Default number of coarse ticks to run
const DEFAULT_TICKS: u64 = 30;

/// Prints each coarse frame to stdout
struct AsciiPrinter;

impl FrameObserver for AsciiPrinter {
    fn on_frame(&mut self, clock: ClockKind, snapshot: &Snapshot<'_>) {
        if clock != ClockKind::Coarse {
            return;
        }
        let counts = snapshot.counts();
        println!(
            "tick {:>4}  trees {:>5}  burning {:>4}{}",
            snapshot.tick(),
            counts.trees,
            counts.burning,
            match snapshot.firefighter() {
                Some(ff) => format!(
                    "  firefighter ({}, {}) {} left",
                    ff.position.row, ff.position.col, ff.remaining_ticks
                ),
                None => String::new(),
            }
        );
        println!("{snapshot}");
    }
}

fn main() {
    env_logger::init();
    log::info!("Forest Fire (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let ticks = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("Invalid tick count: {e}");
            std::process::exit(2);
        }
        None => DEFAULT_TICKS,
    };

    if let Err(e) = settings.validate() {
        eprintln!("{e}");
        std::process::exit(2);
    }

    let step = settings.fine_period();
    let mut sim = Simulation::new(settings);
    let mut printer = AsciiPrinter;
    sim.start();
    while sim.state().tick_count < ticks {
        sim.advance(step, &mut printer);
    }
    sim.stop();

    match sim.last_lightning() {
        Some(strike) => println!(
            "Last lightning: tick {} at ({}, {}){}",
            strike.tick,
            strike.at.row,
            strike.at.col,
            if strike.ignited { ", fire" } else { "" }
        ),
        None => println!("Last lightning: none"),
    }
    println!(
        "Ran {} coarse / {} fine ticks",
        sim.state().tick_count,
        sim.state().subtick_count
    );
}
