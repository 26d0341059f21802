//! Property tests for engine invariants
//!
//! - Four rotations in one direction restore any shape.
//! - A rejected command leaves the falling shape untouched.
//! - The board never holds more than the blocks that landed on it.
//! - Line clears score `10 * lines * level` and level up once per threshold.
//! - `remove_all_blocks` hands back every settled block exactly once.

use proptest::prelude::*;
use swiftris::core::scoring::{apply_line_clear, level_threshold};
use swiftris::core::{is_illegal_placement, Block, EventLog, Shape, SimpleRng, Swiftris};
use swiftris::types::{BlockColor, GameCommand, Orientation, ShapeKind};

fn kind() -> impl Strategy<Value = ShapeKind> {
    (0u32..7).prop_map(ShapeKind::from_index)
}

fn orientation() -> impl Strategy<Value = Orientation> {
    (0u32..4).prop_map(Orientation::from_index)
}

fn command() -> impl Strategy<Value = GameCommand> {
    prop_oneof![
        Just(GameCommand::MoveLeft),
        Just(GameCommand::MoveRight),
        Just(GameCommand::RotateClockwise),
        Just(GameCommand::RotateCounterClockwise),
        Just(GameCommand::Drop),
        Just(GameCommand::Tick),
    ]
}

fn apply(game: &mut Swiftris<SimpleRng, EventLog>, command: GameCommand) -> Option<bool> {
    match command {
        GameCommand::MoveLeft => Some(game.move_left()),
        GameCommand::MoveRight => Some(game.move_right()),
        GameCommand::RotateClockwise => Some(game.rotate_clockwise()),
        GameCommand::RotateCounterClockwise => Some(game.rotate_counterclockwise()),
        GameCommand::Drop => {
            game.drop_shape();
            None
        }
        GameCommand::Tick | GameCommand::BeginGame => {
            game.tick();
            None
        }
    }
}

proptest! {
    #[test]
    fn four_rotations_restore_shape(
        kind in kind(),
        orientation in orientation(),
        column in 0i8..10,
        row in 0i8..20,
        clockwise in any::<bool>(),
    ) {
        let start = Shape::new(kind, column, row, BlockColor::Teal, orientation);
        let mut shape = start.clone();
        for _ in 0..4 {
            if clockwise {
                shape.rotate_clockwise();
            } else {
                shape.rotate_counterclockwise();
            }
        }
        prop_assert_eq!(shape, start);
    }

    #[test]
    fn rejected_commands_leave_shape_untouched(
        seed in any::<u32>(),
        commands in prop::collection::vec(command(), 1..120),
    ) {
        let mut game = Swiftris::with_seed(seed);
        game.begin_game();
        game.spawn_next();
        let mut landed = 0usize;

        for command in commands {
            if game.is_game_over() {
                break;
            }
            if game.falling_shape().is_none() {
                while !game.clear_completed_lines().is_empty() {}
                game.spawn_next();
                continue;
            }

            let before = game.falling_shape().cloned();
            let moves_before = game.listener().events().len();
            match apply(&mut game, command) {
                Some(false) => {
                    prop_assert_eq!(game.falling_shape().cloned(), before);
                    prop_assert_eq!(game.listener().events().len(), moves_before);
                }
                Some(true) => {
                    prop_assert_ne!(game.falling_shape().cloned(), before);
                }
                None => {}
            }

            if let Some(shape) = game.falling_shape() {
                prop_assert!(!is_illegal_placement(shape, game.board()));
            } else if !game.is_game_over() {
                landed += 1;
            }
            prop_assert!(game.board().occupied_count() <= landed * 4);
        }
    }

    #[test]
    fn line_clear_scoring(
        score in 0u32..100_000,
        level in 1u32..50,
        lines in 0usize..5,
    ) {
        let result = apply_line_clear(score, level, lines);
        prop_assert_eq!(result.points, 10 * lines as u32 * level);
        prop_assert_eq!(result.score, score + result.points);
        prop_assert_eq!(result.level, level + result.levels_gained);
        prop_assert!(result.score < level_threshold(result.level));
        if result.levels_gained > 0 {
            prop_assert!(result.score >= level_threshold(result.level - 1));
        }
    }

    #[test]
    fn remove_all_blocks_returns_each_block_once(
        cells in prop::collection::hash_set((0i8..10, 0i8..20), 0..120),
    ) {
        let mut game = Swiftris::with_seed(1);
        for &(column, row) in &cells {
            game.board_mut()
                .set(column, row, Some(Block::new(column, row, BlockColor::Blue)));
        }

        let rows = game.remove_all_blocks();
        prop_assert_eq!(rows.len(), 20);
        let mut returned = 0;
        for (row, blocks) in rows.iter().enumerate() {
            for block in blocks {
                prop_assert_eq!(block.row as usize, row);
                prop_assert!(cells.contains(&(block.column, block.row)));
                returned += 1;
            }
        }
        prop_assert_eq!(returned, cells.len());
        prop_assert!(game.board().is_empty());
    }
}
