//! Game engine - piece lifecycle, line clears, score and level
//!
//! The falling piece moves through `spawn -> fall -> settle -> clear -> spawn`.
//! Every speculative move follows try-then-revert: mutate the shape, test
//! [`is_illegal_placement`], and apply the exact inverse when illegal. Rejected
//! moves are silent; legal ones notify the listener inline.
//!
//! The engine never spawns or clears on its own after a landing. Whoever drives
//! it (see the session driver) reacts to `gameShapeDidLand` by calling
//! [`Swiftris::clear_completed_lines`] until it reports nothing, then
//! [`Swiftris::spawn_next`].

use tracing::{debug, trace};

use crate::board::{Board, BlockColumn, BlockRow};
use crate::listener::{EventLog, GameListener};
use crate::rng::{RandomSource, SimpleRng};
use crate::rules::{detect_touch, is_illegal_placement};
use crate::scoring::apply_line_clear;
use crate::shape::Shape;
use crate::snapshot::{GameSnapshot, ShapeSnapshot};
use crate::types::{
    GameEvent, NUM_COLUMNS, NUM_ROWS, PREVIEW_COLUMN, PREVIEW_ROW, STARTING_COLUMN, STARTING_ROW,
};

/// Outcome of one line-clear pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Removed rows, bottom row first
    pub lines_removed: Vec<BlockRow>,
    /// Blocks that fell, grouped per column (left to right), each bottom to top.
    /// Positions are the post-fall ones.
    pub fallen_blocks: Vec<BlockColumn>,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.lines_removed.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines_removed.len()
    }
}

/// The simulation engine for one game session
#[derive(Debug, Clone)]
pub struct Swiftris<R = SimpleRng, L = EventLog> {
    board: Board,
    falling_shape: Option<Shape>,
    next_shape: Option<Shape>,
    score: u32,
    level: u32,
    game_over: bool,
    rng: R,
    listener: L,
}

impl Swiftris<SimpleRng, EventLog> {
    /// Seeded engine that records its notifications
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed), EventLog::new())
    }
}

impl<R: RandomSource, L: GameListener> Swiftris<R, L> {
    pub fn new(rng: R, listener: L) -> Self {
        Self {
            board: Board::new(),
            falling_shape: None,
            next_shape: None,
            score: 0,
            level: 1,
            game_over: false,
            rng,
            listener,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for setting up positions and replays
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn falling_shape(&self) -> Option<&Shape> {
        self.falling_shape.as_ref()
    }

    pub fn next_shape(&self) -> Option<&Shape> {
        self.next_shape.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn notify(&mut self, event: GameEvent) {
        trace!(event = event.as_str(), "notify");
        self.listener.on_event(event);
    }

    fn random_preview(&mut self) -> Shape {
        Shape::random(&mut self.rng, PREVIEW_COLUMN, PREVIEW_ROW)
    }

    /// Start a session: make sure a preview exists, then notify
    pub fn begin_game(&mut self) {
        if self.next_shape.is_none() {
            self.next_shape = Some(self.random_preview());
        }
        self.game_over = false;
        debug!(score = self.score, level = self.level, "game begin");
        self.notify(GameEvent::GameDidBegin);
    }

    /// Promote the preview to falling and draw a new preview
    ///
    /// Returns the new `(falling, next)` pair. If the spawn position is already
    /// blocked, the would-be falling shape goes back to the preview slot, the
    /// game ends, and `(None, None)` is returned. While a shape is still falling
    /// nothing changes and the current pair is returned.
    pub fn spawn_next(&mut self) -> (Option<Shape>, Option<Shape>) {
        if self.falling_shape.is_some() {
            return (self.falling_shape.clone(), self.next_shape.clone());
        }
        let Some(mut falling) = self.next_shape.take() else {
            return (None, None);
        };

        self.next_shape = Some(self.random_preview());
        falling.move_to(STARTING_COLUMN, STARTING_ROW);

        if is_illegal_placement(&falling, &self.board) {
            debug!(shape = %falling, "spawn blocked");
            falling.move_to(PREVIEW_COLUMN, PREVIEW_ROW);
            self.next_shape = Some(falling);
            self.end_game();
            return (None, None);
        }

        debug!(shape = %falling, "spawn");
        self.falling_shape = Some(falling);
        (self.falling_shape.clone(), self.next_shape.clone())
    }

    /// Reset score and level and notify that the game is over
    ///
    /// Settled blocks stay on the board; see [`Self::remove_all_blocks`].
    pub fn end_game(&mut self) {
        debug!(score = self.score, level = self.level, "game over");
        self.score = 0;
        self.level = 1;
        self.game_over = true;
        self.falling_shape = None;
        self.notify(GameEvent::GameDidEnd);
    }

    /// Apply `apply` to the falling shape; undo with `revert` if illegal
    fn try_shape_move(&mut self, apply: fn(&mut Shape), revert: fn(&mut Shape)) -> bool {
        let Some(shape) = self.falling_shape.as_mut() else {
            return false;
        };

        apply(shape);
        if is_illegal_placement(shape, &self.board) {
            revert(shape);
            return false;
        }

        self.notify(GameEvent::GameShapeDidMove);
        true
    }

    pub fn rotate_clockwise(&mut self) -> bool {
        self.try_shape_move(Shape::rotate_clockwise, Shape::rotate_counterclockwise)
    }

    pub fn rotate_counterclockwise(&mut self) -> bool {
        self.try_shape_move(Shape::rotate_counterclockwise, Shape::rotate_clockwise)
    }

    /// Single rotate input; same as [`Self::rotate_clockwise`]
    pub fn rotate_shape(&mut self) -> bool {
        self.rotate_clockwise()
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shape_move(Shape::shift_left_by_one_column, Shape::shift_right_by_one_column)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shape_move(Shape::shift_right_by_one_column, Shape::shift_left_by_one_column)
    }

    /// Lower the falling shape one row
    ///
    /// When the lower is illegal the shape goes back up and settles, or the game
    /// ends if it cannot stand where it was either. After a legal lower the
    /// shape settles immediately if it now touches something below.
    pub fn let_shape_fall(&mut self) {
        let Some(shape) = self.falling_shape.as_mut() else {
            return;
        };

        shape.lower_by_one_row();
        if is_illegal_placement(shape, &self.board) {
            shape.raise_by_one_row();
            if is_illegal_placement(shape, &self.board) {
                self.end_game();
            } else {
                self.settle_shape();
            }
            return;
        }

        self.notify(GameEvent::GameShapeDidMove);
        let touching = self
            .falling_shape
            .as_ref()
            .is_some_and(|shape| detect_touch(shape, &self.board));
        if touching {
            self.settle_shape();
        }
    }

    /// Timer entry point; same as [`Self::let_shape_fall`]
    pub fn tick(&mut self) {
        self.let_shape_fall();
    }

    /// Lower the falling shape as far as it goes, without settling it
    pub fn drop_shape(&mut self) {
        let Some(shape) = self.falling_shape.as_mut() else {
            return;
        };

        while !is_illegal_placement(shape, &self.board) {
            shape.lower_by_one_row();
        }
        shape.raise_by_one_row();

        trace!(shape = %shape, "drop");
        self.notify(GameEvent::GameShapeDidDrop);
    }

    /// Move the falling shape's blocks into the board
    pub fn settle_shape(&mut self) {
        let Some(shape) = self.falling_shape.take() else {
            return;
        };

        debug!(shape = %shape, "settle");
        for block in shape.into_blocks() {
            self.board.set(block.column, block.row, Some(block));
        }
        self.notify(GameEvent::GameShapeDidLand);
    }

    /// Remove full rows, score them, and let the blocks above fall
    ///
    /// Row 0 is the spawn row and never counts as a line. Blocks above the
    /// lowest removed row drop straight down, each to the lowest free cell
    /// beneath it in its column, so new full rows may form; call again until the
    /// result is empty.
    pub fn clear_completed_lines(&mut self) -> LineClear {
        let mut lines_removed = Vec::new();
        let mut lowest_removed: Option<i8> = None;

        for row in (1..NUM_ROWS as i8).rev() {
            if !self.board.is_row_full(row) {
                continue;
            }
            let mut line = BlockRow::new();
            for column in 0..NUM_COLUMNS as i8 {
                if let Some(block) = self.board.take(column, row) {
                    line.push(block);
                }
            }
            lines_removed.push(line);
            lowest_removed.get_or_insert(row);
        }

        let Some(lowest_removed) = lowest_removed else {
            return LineClear::default();
        };

        let result = apply_line_clear(self.score, self.level, lines_removed.len());
        debug!(
            lines = lines_removed.len(),
            points = result.points,
            score = result.score,
            level = result.level,
            "lines cleared"
        );
        self.score = result.score;
        self.level = result.level;
        for _ in 0..result.levels_gained {
            self.notify(GameEvent::GameDidLevelUp);
        }

        let fallen_blocks = self.collapse_columns(lowest_removed);
        LineClear {
            lines_removed,
            fallen_blocks,
        }
    }

    /// Let every block above `boundary` fall to the lowest free cell below it
    fn collapse_columns(&mut self, boundary: i8) -> Vec<BlockColumn> {
        let last_row = NUM_ROWS as i8 - 1;
        let mut fallen_blocks = Vec::new();

        for column in 0..NUM_COLUMNS as i8 {
            let mut fallen = BlockColumn::new();
            for row in (0..boundary).rev() {
                let Some(mut block) = self.board.get(column, row) else {
                    continue;
                };

                let mut new_row = row;
                while new_row < last_row && !self.board.is_occupied(column, new_row + 1) {
                    new_row += 1;
                }
                if new_row == row {
                    continue;
                }

                self.board.set(column, row, None);
                block.row = new_row;
                self.board.set(column, new_row, Some(block));
                fallen.push(block);
            }
            if !fallen.is_empty() {
                fallen_blocks.push(fallen);
            }
        }

        fallen_blocks
    }

    /// Empty the board, returning its blocks grouped by row (index = row)
    pub fn remove_all_blocks(&mut self) -> Vec<BlockRow> {
        let mut all_blocks = Vec::with_capacity(NUM_ROWS as usize);
        for row in 0..NUM_ROWS as i8 {
            let mut row_blocks = BlockRow::new();
            for column in 0..NUM_COLUMNS as i8 {
                if let Some(block) = self.board.take(column, row) {
                    row_blocks.push(block);
                }
            }
            all_blocks.push(row_blocks);
        }
        all_blocks
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.falling = self.falling_shape.as_ref().map(ShapeSnapshot::from);
        out.next = self.next_shape.as_ref().map(ShapeSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.game_over = self.game_over;
    }
}
