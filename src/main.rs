mod config;
mod controller;
mod error;
mod grid;
mod history;
mod persist;
mod rules;
mod stepper;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use config::SimConfig;
use controller::SimulationController;

/// How long the demo driver lets the ticker run before saving and exiting.
const DEMO_RUNTIME: Duration = Duration::from_secs(2);

fn main() {
    env_logger::init();

    let rule = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "conway".to_string());
    let config = SimConfig {
        rule,
        ..SimConfig::default()
    };

    log::info!("torus-life - toroidal cellular-automaton engine");
    log::info!("Rule sets: {}", rules::RuleSet::names().join(", "));

    let mut sim = match SimulationController::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "{}x{} grid | rule {} | tick interval {}ms",
        sim.rows(),
        sim.cols(),
        sim.rule_label(),
        config.interval_ms,
    );

    sim.randomize_default();
    log::info!("Initial population: {}", sim.population());

    sim.start();
    thread::sleep(DEMO_RUNTIME);
    sim.pause();

    log::info!(
        "Reached generation {} with population {}",
        sim.generation(),
        sim.population()
    );
    if let Some(first) = sim.population_history().first() {
        log::info!(
            "History holds {} samples starting at generation {}",
            sim.population_history().len(),
            first.generation
        );
    }

    let path = PathBuf::from(persist::SAVE_FILENAME);
    match sim.save(&path) {
        Ok(()) => log::info!("State saved to {}", path.display()),
        Err(e) => log::error!("Failed to save state: {e}"),
    }
}
