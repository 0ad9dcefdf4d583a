#[cfg(test)]
mod tests {
    use conway_grid::{Error, Grid};
    use rand::SeedableRng;

    const SEED: u64 = 42;

    fn with_cells(width: usize, height: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in cells {
            grid.toggle(x, y).unwrap();
        }
        grid
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells = grid.live_cells().collect::<Vec<_>>();
        cells.sort();
        cells
    }

    fn sorted(cells: &[(usize, usize)]) -> Vec<(usize, usize)> {
        let mut cells = cells.to_vec();
        cells.sort();
        cells
    }

    #[test]
    fn test_blinker() {
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let vertical = [(2, 1), (2, 2), (2, 3)];
        let mut grid = with_cells(5, 5, &horizontal);

        grid.step();
        assert_eq!(live_cells(&grid), sorted(&vertical), "\n{}", grid);
        grid.step();
        assert_eq!(live_cells(&grid), sorted(&horizontal), "\n{}", grid);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_block_is_still() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut grid = with_cells(4, 4, &block);
        for _ in 0..10 {
            grid.step();
            assert_eq!(live_cells(&grid), sorted(&block), "\n{}", grid);
        }
    }

    #[test]
    fn test_block_in_corner_is_still() {
        let block = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let mut grid = with_cells(2, 2, &block);
        grid.step();
        assert_eq!(live_cells(&grid), sorted(&block));
    }

    #[test]
    fn test_isolated_cell_dies_anywhere() {
        let (w, h) = (4, 3);
        for (x, y) in conway_grid::every_cell(w, h) {
            let mut grid = with_cells(w, h, &[(x, y)]);
            grid.step();
            assert_eq!(grid.total_alive(), 0, "x={} y={}", x, y);
        }
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // a blinker split across the vertical edges would survive on a torus
        let mut grid = with_cells(5, 5, &[(4, 2), (0, 2), (1, 2)]);
        grid.step();
        assert_eq!(grid.total_alive(), 0, "\n{}", grid);
    }

    #[test]
    fn test_glider_hits_the_wall() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut grid = with_cells(6, 6, &glider);
        for _ in 0..4 {
            grid.step();
        }
        let moved = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect::<Vec<_>>();
        assert_eq!(live_cells(&grid), sorted(&moved));

        // on a bounded field the glider ends up as a block in the corner
        for _ in 0..40 {
            grid.step();
        }
        assert_eq!(live_cells(&grid), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_step_is_pure() {
        let mut grid = Grid::new(32, 24);
        grid.seed_random_life_from(300, Some(SEED)).unwrap();
        let snapshot = grid.clone();

        let mut a = snapshot.clone();
        let mut b = snapshot;
        a.step();
        b.step();
        assert_eq!(a, b);
        grid.step();
        assert_eq!(grid, a);
    }

    #[test]
    fn test_step_matches_neighbor_counts() {
        let mut grid = Grid::new(20, 15);
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
        grid.seed_random_life(120, &mut rng).unwrap();

        for _ in 0..10 {
            let before = grid.clone();
            grid.step();
            for (x, y) in grid.every_cell() {
                let neibs = before.live_neighbor_count(x, y).unwrap();
                let expected = if before.is_alive(x, y).unwrap() {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                assert_eq!(grid.is_alive(x, y).unwrap(), expected, "x={} y={}", x, y);
            }
        }
    }

    #[test]
    fn test_seed_whole_field() {
        let (w, h) = (7, 5);
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);

        let mut grid = Grid::new(w, h);
        grid.seed_random_life(w * h, &mut rng).unwrap();
        assert_eq!(grid.total_alive(), w * h);

        let mut grid = Grid::new(w, h);
        assert!(matches!(
            grid.seed_random_life(w * h + 1, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(grid.total_alive(), 0);
    }

    #[test]
    fn test_negative_size() {
        for (w, h) in [(-1, 0), (0, -1), (-5, -5), (i64::MIN, 3)] {
            assert!(matches!(Grid::try_new(w, h), Err(Error::InvalidArgument(_))));
        }
    }
}
