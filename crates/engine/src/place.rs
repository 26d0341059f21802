use swiftris_core::shape::block_offsets;
use swiftris_core::types::{Orientation, NUM_COLUMNS};
use swiftris_core::{GameListener, RandomSource, Swiftris};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    RotationBlocked,
    ColumnOutOfBounds,
    ColumnBlocked,
    NotPlayable,
    NoFallingShape,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable | PlaceError::NoFallingShape => "not_playable",
            PlaceError::RotationBlocked
            | PlaceError::ColumnOutOfBounds
            | PlaceError::ColumnBlocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::RotationBlocked => "could not rotate to target orientation",
            PlaceError::ColumnOutOfBounds => "target column would place shape out of bounds",
            PlaceError::ColumnBlocked => "could not shift to target column due to collision",
            PlaceError::NotPlayable => "game is over",
            PlaceError::NoFallingShape => "no falling shape",
        }
    }
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Rotate, shift and drop the falling shape so its anchor ends at
/// `target_column` facing `target_orientation`
///
/// The shape is dropped but not settled; the next tick lands it.
pub fn apply_place<R: RandomSource, L: GameListener>(
    game: &mut Swiftris<R, L>,
    target_column: i8,
    target_orientation: Orientation,
) -> Result<(), PlaceError> {
    if game.is_game_over() {
        return Err(PlaceError::NotPlayable);
    }
    let Some(falling) = game.falling_shape() else {
        return Err(PlaceError::NoFallingShape);
    };

    let mut min_dx = i8::MAX;
    let mut max_dx = i8::MIN;
    for (dx, _) in block_offsets(falling.kind(), target_orientation) {
        min_dx = min_dx.min(dx);
        max_dx = max_dx.max(dx);
    }
    let target_column_wide = i16::from(target_column);
    if target_column_wide + i16::from(min_dx) < 0
        || target_column_wide + i16::from(max_dx) >= i16::from(NUM_COLUMNS)
    {
        return Err(PlaceError::ColumnOutOfBounds);
    }

    let current = falling.orientation().index() as i8;
    let target = target_orientation.index() as i8;
    let cw = (target - current).rem_euclid(4) as u8;
    let ccw = (current - target).rem_euclid(4) as u8;

    // Shorter direction first; for 180 both are 2.
    let mut plans = [(true, cw), (false, ccw)];
    if plans[1].1 < plans[0].1 {
        plans.swap(0, 1);
    }

    let mut rotated = false;
    for (clockwise, steps) in plans {
        let mut done = 0;
        while done < steps && rotate(game, clockwise) {
            done += 1;
        }
        if done == steps {
            rotated = true;
            break;
        }
        // Every undo step returns to a placement that was legal a moment ago.
        for _ in 0..done {
            rotate(game, !clockwise);
        }
    }
    if !rotated {
        return Err(PlaceError::RotationBlocked);
    }

    let Some(falling) = game.falling_shape() else {
        return Err(PlaceError::NoFallingShape);
    };
    let dx = target_column - falling.column();
    for _ in 0..dx.unsigned_abs() {
        let shifted = if dx > 0 {
            game.move_right()
        } else {
            game.move_left()
        };
        if !shifted {
            return Err(PlaceError::ColumnBlocked);
        }
    }

    game.drop_shape();
    Ok(())
}

fn rotate<R: RandomSource, L: GameListener>(game: &mut Swiftris<R, L>, clockwise: bool) -> bool {
    if clockwise {
        game.rotate_clockwise()
    } else {
        game.rotate_counterclockwise()
    }
}
