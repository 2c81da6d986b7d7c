use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::grid::{pattern_by_name, Grid, MAX_DIM, MIN_DIM};
use crate::history::{History, Sample};
use crate::persist;
use crate::rules::RuleSet;
use crate::stepper;

/// Mutable simulation state, exclusively owned by the controller and shared
/// with the ticker thread behind one mutex so every tick is atomic.
struct SimState {
    grid: Grid,
    rules: RuleSet,
    generation: u64,
    history: History,
}

impl SimState {
    /// Advance one generation: step, publish the new grid, record the
    /// population. Reads only the previous snapshot.
    fn tick(&mut self) {
        let (next, population) = stepper::step(&self.grid, &self.rules);
        self.grid = next;
        self.generation += 1;
        self.history.record(population);
    }

    /// Swap in a fresh grid and restart the generation count and history.
    fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
        self.history.clear();
    }

    /// All-dead grid with the current dimensions.
    fn empty_grid(&self) -> Grid {
        Grid {
            rows: self.grid.rows,
            cols: self.grid.cols,
            cells: vec![0; self.grid.cells.len()],
        }
    }
}

/// Orchestrates repeated stepping of a toroidal automaton grid.
///
/// Two states: Stopped and Running. While Running, a single ticker thread
/// sleeps the configured interval and executes one tick per iteration,
/// checking the shared running flag at the top of each iteration so
/// [`SimulationController::pause`] has one authoritative cancellation point
/// and no tick can fire after it returns.
pub struct SimulationController {
    state: Arc<Mutex<SimState>>,
    running: Arc<AtomicBool>,
    ticker: Option<thread::JoinHandle<()>>,
    interval: Duration,
    default_density: f64,
}

impl SimulationController {
    /// Build a stopped controller with an empty grid from the config.
    ///
    /// Unlike `resize`, direct construction does not clamp: dimensions
    /// outside the supported range and unknown rule names are
    /// configuration errors.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        if config.rows < MIN_DIM
            || config.rows > MAX_DIM
            || config.cols < MIN_DIM
            || config.cols > MAX_DIM
        {
            return Err(SimError::Config(format!(
                "grid dimensions {}x{} outside supported range [{MIN_DIM},{MAX_DIM}]",
                config.rows, config.cols
            )));
        }
        let rules = RuleSet::from_name(&config.rule)?;
        let grid = Grid::new(config.rows, config.cols)?;

        Ok(Self {
            state: Arc::new(Mutex::new(SimState {
                grid,
                rules,
                generation: 0,
                history: History::new(),
            })),
            running: Arc::new(AtomicBool::new(false)),
            ticker: None,
            interval: Duration::from_millis(config.interval_ms),
            default_density: config.density,
        })
    }

    fn lock(&self) -> MutexGuard<'_, SimState> {
        self.state.lock().unwrap()
    }

    // ── State machine ──

    /// Stopped → Running: spawn the ticker. No-op while already Running.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }
        let state = Arc::clone(&self.state);
        let running = Arc::clone(&self.running);
        let interval = self.interval;
        self.ticker = Some(thread::spawn(move || loop {
            thread::sleep(interval);
            // Cooperative cancellation point, checked before every tick.
            if !running.load(Ordering::SeqCst) {
                break;
            }
            if let Ok(mut state) = state.lock() {
                state.tick();
            }
        }));
        log::info!("Simulation resumed");
    }

    /// Running → Stopped: flip the flag and wait out the ticker, so no
    /// automatic tick fires after this returns. No-op while Stopped.
    pub fn pause(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = self.ticker.take() {
            let _ = handle.join();
        }
        log::info!("Simulation paused");
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Any state → Stopped with an empty grid of the current dimensions,
    /// generation 0, history cleared.
    pub fn reset(&mut self) {
        self.pause();
        let mut state = self.lock();
        let empty = state.empty_grid();
        state.replace_grid(empty);
        log::info!("Grid reset to empty");
    }

    /// Manually advance one generation. Intended for single-stepping while
    /// paused, but valid in either state.
    pub fn step_once(&self) {
        self.lock().tick();
    }

    // ── Grid edits ──

    /// Replace the grid with a named pattern stamped centered at
    /// (rows/2, cols/2); generation and history restart. Running state is
    /// unchanged. Unknown names fail before anything is touched.
    pub fn load_pattern(&self, name: &str) -> Result<(), SimError> {
        let offsets = pattern_by_name(name)?;
        let mut state = self.lock();
        let mut grid = state.empty_grid();
        grid.place_pattern(&offsets);
        state.replace_grid(grid);
        log::info!("Loaded pattern: {name}");
        Ok(())
    }

    /// Replace the grid with an independently-sampled random one where each
    /// cell is live with probability `density`; generation and history
    /// restart.
    pub fn randomize(&self, density: f64) {
        let mut state = self.lock();
        let mut grid = state.empty_grid();
        grid.randomize(density);
        state.replace_grid(grid);
        log::info!("Grid randomized at density {density:.2}");
    }

    /// Randomize at the configured default density.
    pub fn randomize_default(&self) {
        self.randomize(self.default_density);
    }

    /// Apply the caller's deltas to the current dimensions, clamp each to
    /// the supported range, and replace the grid with an empty one of the
    /// new size. Destructive: prior cell content is not preserved.
    pub fn resize(&self, d_rows: i64, d_cols: i64) {
        let mut state = self.lock();
        let rows = (state.grid.rows as i64 + d_rows).clamp(MIN_DIM as i64, MAX_DIM as i64)
            as usize;
        let cols = (state.grid.cols as i64 + d_cols).clamp(MIN_DIM as i64, MAX_DIM as i64)
            as usize;
        let empty = Grid {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };
        state.replace_grid(empty);
        log::info!("Grid resized to {rows}x{cols}");
    }

    /// Paint (or erase, with the eraser flag) a square brush centered at
    /// (row, col): every cell within brush_size/2 in each axis, wrapped
    /// toroidally. Does not touch the generation counter or history; valid
    /// in either state.
    pub fn edit_cell(&self, row: i32, col: i32, brush_size: usize, eraser: bool) {
        let value = u8::from(!eraser);
        let half = (brush_size / 2) as i32;
        let mut state = self.lock();
        for dr in -half..=half {
            for dc in -half..=half {
                let (r, c) = state.grid.wrap(row + dr, col + dc);
                state.grid.set(r, c, value);
            }
        }
    }

    /// Switch rule sets by name without touching the grid. Unknown names
    /// are a configuration error and leave the current rules in place.
    pub fn set_rule(&self, name: &str) -> Result<(), SimError> {
        let rules = RuleSet::from_name(name)?;
        let mut state = self.lock();
        state.rules = rules;
        log::info!("Rules: {}", rules.label());
        Ok(())
    }

    // ── Persistence ──

    /// Serialize the current grid, generation counter and dimensions.
    pub fn save(&self, path: &Path) -> Result<(), SimError> {
        let state = self.lock();
        persist::save_state(path, &state.grid, state.generation)
    }

    /// Load persisted state. Validation happens before anything is applied,
    /// so a malformed payload leaves the current simulation untouched. On
    /// success grid, generation and dimensions replace atomically and the
    /// history starts empty.
    pub fn load(&self, path: &Path) -> Result<(), SimError> {
        let (grid, generations) = persist::load_state(path)?;
        let mut state = self.lock();
        state.replace_grid(grid);
        state.generation = generations;
        log::info!("Loaded saved state at generation {generations}");
        Ok(())
    }

    // ── Read-only snapshot access for the rendering layer ──

    /// Copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.lock().grid.clone()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    pub fn rows(&self) -> usize {
        self.lock().grid.rows
    }

    pub fn cols(&self) -> usize {
        self.lock().grid.cols
    }

    pub fn population(&self) -> u64 {
        self.lock().grid.population()
    }

    /// Retained population samples with absolute generation numbers, for
    /// the trend chart.
    pub fn population_history(&self) -> Vec<Sample> {
        let state = self.lock();
        state.history.samples(state.generation)
    }

    /// Current rule set in B/S notation.
    pub fn rule_label(&self) -> String {
        self.lock().rules.label()
    }
}

impl Drop for SimulationController {
    fn drop(&mut self) {
        self.pause();
    }
}
