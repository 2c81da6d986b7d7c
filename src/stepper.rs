use crate::grid::Grid;
use crate::rules::RuleSet;

/// Advance the grid by one generation under the given rules, returning the
/// next grid together with its live-cell count.
///
/// The grid uses toroidal (wrap-around) boundary conditions. Every cell's
/// 8-neighbor count is read from the previous snapshot while the result is
/// written into a freshly allocated grid, so no cell's update can observe an
/// already-updated neighbor within the same step.
pub fn step(grid: &Grid, rules: &RuleSet) -> (Grid, u64) {
    let rows = grid.rows as i32;
    let cols = grid.cols as i32;
    let mut next = Grid {
        rows: grid.rows,
        cols: grid.cols,
        cells: vec![0; grid.cells.len()],
    };
    let mut population = 0u64;

    for row in 0..rows {
        for col in 0..cols {
            let mut count = 0u32;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let nr = ((row + dr) % rows + rows) % rows;
                    let nc = ((col + dc) % cols + cols) % cols;
                    count += u32::from(grid.cells[(nr * cols + nc) as usize]);
                }
            }

            let alive = grid.cells[(row * cols + col) as usize] == 1;
            let next_alive = rules.next_state(count, alive);
            next.cells[(row * cols + col) as usize] = u8::from(next_alive);
            population += u64::from(next_alive);
        }
    }

    (next, population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{pattern_blinker, pattern_toad};

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(5, 5, 1);
        let (next, pop) = step(&grid, &RuleSet::conway());
        assert_eq!(pop, 0);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(10, 10).unwrap();
        for (r, c) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            grid.set(r, c, 1);
        }
        let (next, pop) = step(&grid, &RuleSet::conway());
        assert_eq!(pop, 4);
        assert_eq!(next, grid);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.place_pattern(&pattern_blinker());
        let original = grid.clone();

        // One step rotates the 3-cell line by 90 degrees.
        let (rotated, pop) = step(&grid, &RuleSet::conway());
        assert_eq!(pop, 3);
        assert_eq!(rotated.get(10, 9), 1);
        assert_eq!(rotated.get(10, 10), 1);
        assert_eq!(rotated.get(10, 11), 1);
        assert_eq!(rotated.get(9, 10), 0);
        assert_eq!(rotated.get(11, 10), 0);

        // A second step restores the original configuration.
        let (restored, _) = step(&rotated, &RuleSet::conway());
        assert_eq!(restored, original);
    }

    #[test]
    fn test_toad_has_period_two() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.place_pattern(&pattern_toad());
        let original = grid.clone();
        let (a, _) = step(&grid, &RuleSet::conway());
        assert_ne!(a, original);
        let (b, _) = step(&a, &RuleSet::conway());
        assert_eq!(b, original);
    }

    #[test]
    fn test_wrapping_at_edges() {
        // A blinker straddling the top edge still oscillates: the torus
        // connects row 0 to the last row.
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(9, 5, 1);
        grid.set(0, 5, 1);
        grid.set(1, 5, 1);
        let (next, pop) = step(&grid, &RuleSet::conway());
        assert_eq!(pop, 3);
        assert_eq!(next.get(0, 4), 1);
        assert_eq!(next.get(0, 5), 1);
        assert_eq!(next.get(0, 6), 1);
    }

    #[test]
    fn test_step_in_bounds_on_any_dims() {
        for (rows, cols) in [(10, 10), (10, 100), (37, 11)] {
            let mut grid = Grid::new(rows, cols).unwrap();
            grid.randomize(0.5);
            let (next, _) = step(&grid, &RuleSet::day_and_night());
            assert_eq!(next.cells.len(), rows * cols);
        }
    }

    #[test]
    fn test_seeds_kills_everything_alive() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.randomize(1.0);
        // Full grid: every cell has 8 neighbors, no survival mask matches.
        let (_, pop) = step(&grid, &RuleSet::seeds());
        assert_eq!(pop, 0);
    }
}
