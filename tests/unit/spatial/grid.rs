//! Tests for the fixed-size terrain grid

#[cfg(test)]
mod tests {
    use shoreline::spatial::grid::TileGrid;
    use shoreline::spatial::tiles::TileKind;

    // Tests that from_fn visits cells strictly row by row
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_from_fn_visits_row_major() {
        let mut visited = Vec::new();
        let grid = TileGrid::from_fn(3, 2, |x, y| {
            visited.push((x, y));
            TileKind::Water
        });

        assert_eq!(
            visited,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
    }

    // Tests that (x, y) addresses column x of row y
    // Verified by swapping the index order in get
    #[test]
    fn test_get_and_set_use_column_row_addressing() {
        let mut grid = TileGrid::filled(3, 2, TileKind::Water);

        assert!(grid.set(2, 1, TileKind::Land));
        assert_eq!(grid.get(2, 1), Some(TileKind::Land));
        assert_eq!(grid.get(1, 2), None);
        assert!(!grid.set(3, 0, TileKind::Land));

        let rows = grid.to_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], TileKind::Land);
        assert_eq!(rows[0][2], TileKind::Water);
    }

    // Tests construction from nested rows and rejection of ragged input
    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![TileKind::Land, TileKind::Grass],
            vec![TileKind::Water, TileKind::CoastalWater],
        ];
        let grid = TileGrid::from_rows(&rows);
        assert_eq!(grid.as_ref().map(TileGrid::to_rows), Some(rows));

        let ragged = vec![vec![TileKind::Land, TileKind::Grass], vec![TileKind::Water]];
        assert!(TileGrid::from_rows(&ragged).is_none());
    }

    // Tests wire encoding and per-kind census
    // Verified by indexing the census by row instead of by code
    #[test]
    fn test_to_codes_and_census() {
        let grid = TileGrid::from_fn(2, 2, |x, y| {
            if x == y {
                TileKind::Forest
            } else {
                TileKind::CoastalWater
            }
        });

        assert_eq!(grid.to_codes(), vec![vec![4, 1], vec![1, 4]]);
        assert_eq!(grid.census(), [0, 2, 0, 0, 2]);
    }

    // Tests that degenerate shapes keep their declared dimensions
    #[test]
    fn test_empty_grids() {
        let no_rows = TileGrid::filled(5, 0, TileKind::Land);
        assert_eq!(no_rows.width(), 5);
        assert_eq!(no_rows.height(), 0);
        assert!(no_rows.to_rows().is_empty());

        let no_columns = TileGrid::filled(0, 3, TileKind::Land);
        assert_eq!(no_columns.to_codes(), vec![Vec::<u8>::new(); 3]);
        assert_eq!(no_columns.iter().count(), 0);
    }

    // Tests iteration order and coordinates
    #[test]
    fn test_iter_yields_coordinates_row_major() {
        let grid = TileGrid::from_fn(2, 2, |x, _| {
            if x == 0 {
                TileKind::Land
            } else {
                TileKind::Water
            }
        });

        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, TileKind::Land),
                (1, 0, TileKind::Water),
                (0, 1, TileKind::Land),
                (1, 1, TileKind::Water),
            ]
        );
    }
}
