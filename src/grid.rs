use rand::Rng;

use crate::error::SimError;

/// Smallest supported grid dimension.
pub const MIN_DIM: usize = 10;
/// Largest supported grid dimension.
pub const MAX_DIM: usize = 100;

/// A fixed-size toroidal grid of binary cell states.
///
/// Backing store is a flat row-major `Vec<u8>` of 0/1 values, so the grid is
/// rectangular by construction. The accessors are raw (non-wrapping);
/// callers wrap coordinates with [`Grid::wrap`] when they need toroidal
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<u8>,
}

impl Grid {
    /// Create an all-dead grid. Fails only on a zero dimension.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SimError> {
        if rows == 0 || cols == 0 {
            return Err(SimError::Config(format!(
                "grid dimensions must be positive, got {rows}x{cols}"
            )));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        })
    }

    /// Cell state at a raw (non-wrapped) coordinate.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    /// Set a cell at a raw (non-wrapped) coordinate.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * self.cols + col] = u8::from(value != 0);
    }

    /// Wrap a possibly-negative coordinate onto the torus. The added
    /// dimension keeps the modulo non-negative for negative operands.
    pub fn wrap(&self, row: i32, col: i32) -> (usize, usize) {
        let r = self.rows as i32;
        let c = self.cols as i32;
        (((row % r + r) % r) as usize, ((col % c + c) % c) as usize)
    }

    /// Kill all cells.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Fill with random cells at the given density (0.0 = empty, 1.0 = full).
    pub fn randomize(&mut self, density: f64) {
        let mut rng = rand::thread_rng();
        for cell in &mut self.cells {
            *cell = u8::from(rng.gen_range(0.0..1.0) < density);
        }
    }

    /// Count live cells.
    pub fn population(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// Stamp a pattern of relative offsets centered at (rows/2, cols/2).
    ///
    /// Offsets are raw, not wrapped: the provided patterns are small and
    /// centered, so they always land in-bounds on a supported grid.
    pub fn place_pattern(&mut self, offsets: &[(i32, i32)]) {
        let center_r = (self.rows / 2) as i32;
        let center_c = (self.cols / 2) as i32;
        for &(dr, dc) in offsets {
            self.set((center_r + dr) as usize, (center_c + dc) as usize, 1);
        }
    }
}

// ── Predefined patterns ──

/// Glider: small, moving pattern.
pub fn pattern_glider() -> Vec<(i32, i32)> {
    vec![(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)]
}

/// Blinker: the smallest period-2 oscillator, a 3-cell line.
pub fn pattern_blinker() -> Vec<(i32, i32)> {
    vec![(-1, 0), (0, 0), (1, 0)]
}

/// Toad: a period-2 oscillator of two offset 3-cell rows.
pub fn pattern_toad() -> Vec<(i32, i32)> {
    vec![(0, 0), (0, 1), (0, 2), (1, -1), (1, 0), (1, 1)]
}

/// R-pentomino: a methuselah that runs for 1103 generations.
pub fn pattern_r_pentomino() -> Vec<(i32, i32)> {
    vec![(-1, 0), (-1, 1), (0, -1), (0, 0), (1, 0)]
}

/// Acorn: a methuselah that takes 5206 generations to stabilize.
pub fn pattern_acorn() -> Vec<(i32, i32)> {
    vec![(0, -3), (0, -2), (-2, -2), (-1, 0), (0, 1), (0, 2), (0, 3)]
}

/// Lightweight spaceship (LWSS).
pub fn pattern_lwss() -> Vec<(i32, i32)> {
    vec![
        (-1, -2), (-2, -1), (-2, 0), (-2, 1), (-2, 2),
        (-1, 2), (0, 2), (1, 1), (0, -2),
    ]
}

/// Look up a named pattern's offsets. Unknown names are a configuration
/// error, same as an unknown rule set.
pub fn pattern_by_name(name: &str) -> Result<Vec<(i32, i32)>, SimError> {
    match name {
        "glider" => Ok(pattern_glider()),
        "blinker" => Ok(pattern_blinker()),
        "toad" => Ok(pattern_toad()),
        "r_pentomino" => Ok(pattern_r_pentomino()),
        "acorn" => Ok(pattern_acorn()),
        "lwss" => Ok(pattern_lwss()),
        _ => Err(SimError::Config(format!("unknown pattern: {name}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(100, 100).unwrap();
        assert_eq!(grid.cells.len(), 10000);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_grid_zero_dimension_rejected() {
        assert!(Grid::new(0, 10).is_err());
        assert!(Grid::new(10, 0).is_err());
    }

    #[test]
    fn test_grid_set_get() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(3, 4, 1);
        assert_eq!(grid.get(3, 4), 1);
        assert_eq!(grid.get(0, 0), 0);
        grid.set(3, 4, 0);
        assert_eq!(grid.get(3, 4), 0);
    }

    #[test]
    fn test_wrap_negative_and_overflow() {
        let grid = Grid::new(10, 10).unwrap();
        assert_eq!(grid.wrap(-1, -1), (9, 9));
        assert_eq!(grid.wrap(10, 10), (0, 0));
        assert_eq!(grid.wrap(3, 4), (3, 4));
    }

    #[test]
    fn test_wrap_always_in_bounds() {
        let grid = Grid::new(13, 17).unwrap();
        for row in 0..13i32 {
            for col in 0..17i32 {
                for dr in -1..=1 {
                    for dc in -1..=1 {
                        let (r, c) = grid.wrap(row + dr, col + dc);
                        assert!(r < 13 && c < 17);
                    }
                }
            }
        }
    }

    #[test]
    fn test_grid_randomize() {
        let mut grid = Grid::new(100, 100).unwrap();
        grid.randomize(0.5);
        let pop = grid.population();
        // With 10000 cells at 50% density, population should be roughly 5000
        assert!(pop > 1000 && pop < 9000);
    }

    #[test]
    fn test_grid_clear() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.randomize(1.0);
        assert!(grid.population() > 0);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_place_pattern() {
        let mut grid = Grid::new(50, 50).unwrap();
        grid.place_pattern(&pattern_glider());
        assert_eq!(grid.population(), 5);
        // Centered: the glider's top cell sits one row above (rows/2, cols/2).
        assert_eq!(grid.get(24, 25), 1);
        assert_eq!(grid.get(26, 25), 1);
    }

    #[test]
    fn test_pattern_lookup() {
        assert_eq!(pattern_by_name("blinker").unwrap().len(), 3);
        assert_eq!(pattern_by_name("toad").unwrap().len(), 6);
        assert!(pattern_by_name("pulsar").is_err());
    }
}
