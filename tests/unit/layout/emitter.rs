//! Tests for the connectivity-to-placement expansion

#[cfg(test)]
mod tests {
    use mazeforge::MazeError;
    use mazeforge::algorithm::backtracker::generate;
    use mazeforge::algorithm::random::SeededSource;
    use mazeforge::io::configuration::MAX_PATH_WIDTH;
    use mazeforge::layout::emitter::{LayoutEmitter, emit};
    use mazeforge::layout::placement::{ModelKind, PlacementCommand, Position};
    use mazeforge::spatial::{CellState, Coord, MazeGrid};

    fn grid_from_bits(width: usize, height: usize, bits: &[u8]) -> MazeGrid {
        let cells = bits.iter().copied().map(CellState::from_bits).collect();
        let Ok(grid) = MazeGrid::from_cells(width, height, cells) else {
            unreachable!("cell count matches dimensions");
        };
        grid
    }

    fn golden_grid() -> MazeGrid {
        grid_from_bits(2, 2, &[0x12, 0x1C, 0x12, 0x19])
    }

    fn units(commands: &[PlacementCommand], kind: ModelKind) -> Vec<(i64, i64)> {
        commands
            .iter()
            .filter(|command| command.kind == kind)
            .map(|command| command.position.units())
            .collect()
    }

    fn at(kind: ModelKind, u: i64, v: i64) -> PlacementCommand {
        PlacementCommand::new(kind, Position::from_units(u, v, 0.0))
    }

    // Tests the single-cell plan command by command
    #[test]
    fn test_single_cell_plan() {
        let grid = grid_from_bits(1, 1, &[0x10]);
        let Ok(emitter) = LayoutEmitter::new(&grid, 1) else {
            unreachable!("valid path width");
        };
        let commands: Vec<PlacementCommand> = emitter.commands().collect();

        assert_eq!(
            commands,
            vec![
                at(ModelKind::Floor, 0, 0),
                // p = -1: south, east, north, west
                at(ModelKind::Wall, -1, 1),
                at(ModelKind::Wall, 1, -1),
                at(ModelKind::Wall, -1, -1),
                at(ModelKind::Wall, -1, -1),
                // p = 0
                at(ModelKind::Wall, 0, 1),
                at(ModelKind::Wall, 1, 0),
                at(ModelKind::Wall, 0, -1),
                at(ModelKind::Wall, -1, 0),
                // corner cap
                at(ModelKind::Wall, 1, 1),
            ]
        );
        assert_eq!(emitter.command_count(), commands.len());
    }

    // Tests the 2x2 counts are fixed whatever tree was carved
    #[test]
    fn test_two_by_two_tally() {
        let grid = golden_grid();
        let Ok(emitter) = LayoutEmitter::new(&grid, 1) else {
            unreachable!("valid path width");
        };
        let tally = emitter.tally();

        assert_eq!(tally.floors, 4);
        assert_eq!(tally.walls, 22);
        assert_eq!(tally.passages, 3);
        assert_eq!(emitter.command_count(), 29);

        for seed in 0..10 {
            let Ok(random) = generate(2, 2, 1, SeededSource::seeded(seed)) else {
                unreachable!("valid dimensions");
            };
            let Ok(emitter) = LayoutEmitter::new(&random, 1) else {
                unreachable!("valid path width");
            };
            assert_eq!(emitter.tally(), tally);
        }
    }

    // Tests passages sit exactly between connected floor blocks
    #[test]
    fn test_passage_positions() {
        let grid = golden_grid();
        let Ok(commands) = emit(&grid, 1).map(Iterator::collect::<Vec<_>>) else {
            unreachable!("valid path width");
        };

        assert_eq!(
            units(&commands, ModelKind::Passage),
            vec![(1, 0), (2, 1), (1, 2)]
        );
        assert_eq!(
            units(&commands, ModelKind::Floor),
            vec![(0, 0), (2, 0), (0, 2), (2, 2)]
        );
    }

    // Tests an open connection still gets a wall cap at p == -1
    #[test]
    fn test_open_strip_keeps_wall_cap() {
        let grid = grid_from_bits(2, 1, &[0x12, 0x18]);
        let Ok(commands) = emit(&grid, 3).map(Iterator::collect::<Vec<_>>) else {
            unreachable!("valid path width");
        };

        // East strip of (0,0) runs down column u = 3
        let east_strip: Vec<ModelKind> = commands
            .iter()
            .filter(|command| command.position.units().0 == 3)
            .filter(|command| (0..3).contains(&command.position.units().1))
            .map(|command| command.kind)
            .collect();
        assert_eq!(east_strip, vec![ModelKind::Passage; 3]);

        let caps: Vec<ModelKind> = commands
            .iter()
            .filter(|command| command.position.units() == (3, -1))
            .map(|command| command.kind)
            .collect();
        assert!(!caps.is_empty());
        assert!(caps.iter().all(|&kind| kind == ModelKind::Wall));
    }

    // Tests wider paths scale floors and passages quadratically and linearly
    #[test]
    fn test_counts_scale_with_path_width() {
        let Ok(grid) = generate(5, 4, 1, SeededSource::seeded(8)) else {
            unreachable!("valid dimensions");
        };
        for path_width in [1, 2, 3, 5] {
            let Ok(emitter) = LayoutEmitter::new(&grid, path_width) else {
                unreachable!("valid path width");
            };
            let tally = emitter.tally();
            assert_eq!(tally.floors, 20 * path_width * path_width);
            assert_eq!(tally.passages, 19 * path_width);
            assert_eq!(tally.total(), emitter.command_count());
        }
    }

    // Tests two passes over the same grid are identical
    #[test]
    fn test_emission_is_restartable() {
        let Ok(grid) = generate(6, 3, 2, SeededSource::seeded(21)) else {
            unreachable!("valid dimensions");
        };
        let Ok(emitter) = LayoutEmitter::new(&grid, 2) else {
            unreachable!("valid path width");
        };
        let first: Vec<PlacementCommand> = emitter.commands().collect();
        let second: Vec<PlacementCommand> = emitter.commands().collect();
        assert_eq!(first, second);

        let by_rows: Vec<PlacementCommand> = (0..grid.height())
            .flat_map(|y| emitter.row(y))
            .collect();
        assert_eq!(by_rows, first);
        assert_eq!(emitter.row(grid.height()).count(), 0);
    }

    // Tests every position lies inside the reported extent
    #[test]
    fn test_positions_within_extent() {
        let Ok(grid) = generate(4, 3, 1, SeededSource::seeded(4)) else {
            unreachable!("valid dimensions");
        };
        let Ok(emitter) = LayoutEmitter::new(&grid, 2) else {
            unreachable!("valid path width");
        };
        let (min_u, min_v, max_u, max_v) = emitter.extent();
        assert_eq!((min_u, min_v, max_u, max_v), (-1, -1, 11, 8));

        for command in emitter.commands() {
            let (u, v) = command.position.units();
            assert!((min_u..=max_u).contains(&u));
            assert!((min_v..=max_v).contains(&v));
        }
        assert!(
            emitter
                .commands()
                .any(|command| command.position.units() == (max_u, max_v))
        );
    }

    #[test]
    fn test_elevation_applies_to_every_command() {
        let grid = golden_grid();
        let Ok(emitter) = LayoutEmitter::new(&grid, 1) else {
            unreachable!("valid path width");
        };
        let raised = emitter.with_elevation(2.5);
        assert!(
            raised
                .commands()
                .all(|command| (command.position.y - 2.5).abs() < f64::EPSILON)
        );
        assert!(
            emitter
                .commands()
                .all(|command| command.position.y.abs() < f64::EPSILON)
        );
    }

    // Tests unvisited cells contribute strips but no floor
    #[test]
    fn test_unvisited_cells_have_no_floor() {
        let Ok(mut grid) = MazeGrid::new(2, 1) else {
            unreachable!("valid dimensions");
        };
        assert!(grid.mark_visited(Coord::new(0, 0)).is_ok());
        let Ok(emitter) = LayoutEmitter::new(&grid, 2) else {
            unreachable!("valid path width");
        };
        let commands: Vec<PlacementCommand> = emitter.commands().collect();
        assert_eq!(units(&commands, ModelKind::Floor).len(), 4);
        assert_eq!(commands.len(), emitter.command_count());
    }

    #[test]
    fn test_invalid_path_width_rejected() {
        let grid = golden_grid();
        assert!(matches!(
            LayoutEmitter::new(&grid, 0),
            Err(MazeError::InvalidParameter { .. })
        ));
        assert!(emit(&grid, MAX_PATH_WIDTH + 1).is_err());
    }
}
