use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::grid::{Grid, MAX_DIM, MIN_DIM};

/// Conventional filename for persisted simulation state.
pub const SAVE_FILENAME: &str = "game-of-life-config.json";

/// The persisted simulation record: grid contents, generation counter and
/// dimensions, verbatim. History is display-only and deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedState {
    pub grid: Vec<Vec<u8>>,
    pub generations: u64,
    #[serde(rename = "numRows")]
    pub num_rows: usize,
    #[serde(rename = "numCols")]
    pub num_cols: usize,
}

impl SavedState {
    /// Capture the current grid and generation counter.
    pub fn capture(grid: &Grid, generations: u64) -> Self {
        Self {
            grid: (0..grid.rows)
                .map(|r| (0..grid.cols).map(|c| grid.get(r, c)).collect())
                .collect(),
            generations,
            num_rows: grid.rows,
            num_cols: grid.cols,
        }
    }

    /// Validate the record and rebuild the grid from it.
    ///
    /// Rejects non-rectangular grids, dimension mismatches, values other
    /// than 0/1, and dimensions outside the supported range. Nothing is
    /// applied on rejection.
    pub fn into_grid(self) -> Result<(Grid, u64), SimError> {
        if self.num_rows < MIN_DIM
            || self.num_rows > MAX_DIM
            || self.num_cols < MIN_DIM
            || self.num_cols > MAX_DIM
        {
            return Err(SimError::Validation(format!(
                "dimensions {}x{} outside supported range [{MIN_DIM},{MAX_DIM}]",
                self.num_rows, self.num_cols
            )));
        }
        if self.grid.len() != self.num_rows {
            return Err(SimError::Validation(format!(
                "grid has {} rows, expected {}",
                self.grid.len(),
                self.num_rows
            )));
        }
        for (r, row) in self.grid.iter().enumerate() {
            if row.len() != self.num_cols {
                return Err(SimError::Validation(format!(
                    "row {r} has {} entries, expected {}",
                    row.len(),
                    self.num_cols
                )));
            }
            if let Some(&bad) = row.iter().find(|&&v| v > 1) {
                return Err(SimError::Validation(format!(
                    "row {r} contains cell value {bad}, expected 0 or 1"
                )));
            }
        }

        let mut grid = Grid::new(self.num_rows, self.num_cols)?;
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                grid.set(r, c, v);
            }
        }
        Ok((grid, self.generations))
    }
}

/// Serialize the simulation state to a JSON file.
pub fn save_state(path: &Path, grid: &Grid, generations: u64) -> Result<(), SimError> {
    let state = SavedState::capture(grid, generations);
    let json = serde_json::to_string(&state)
        .map_err(|e| SimError::Validation(format!("failed to serialize state: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}

/// Parse and validate a persisted state file, returning the rebuilt grid
/// and generation counter. Malformed payloads are rejected without side
/// effects so the caller's current state stays intact.
pub fn load_state(path: &Path) -> Result<(Grid, u64), SimError> {
    let json = fs::read_to_string(path)?;
    let state: SavedState = serde_json::from_str(&json)
        .map_err(|e| SimError::Validation(format!("malformed state file: {e}")))?;
    state.into_grid()
}
