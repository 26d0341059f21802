//! Session driver - runs the landing cascade the engine leaves to its caller
//!
//! The engine stops at `gameShapeDidLand`. A [`Session`] reacts to that by
//! clearing lines until a pass removes nothing, then spawning the next shape.
//! When the game ends it wipes the board so the next `begin` starts clean.

use tracing::{debug, info};

use swiftris_core::types::{GameCommand, GameEvent};
use swiftris_core::{
    tick_length_ms, EventLog, GameListener, GameSnapshot, LineClear, RandomSource, SimpleRng,
    Swiftris,
};

/// Everything that followed one landing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingReport {
    /// One entry per clear pass that removed at least one line
    pub passes: Vec<LineClear>,
    pub lines_cleared: usize,
    pub score_gained: u32,
    /// Score after the cascade, before the next spawn (which may end the game)
    pub score: u32,
    pub level: u32,
    /// Whether the next shape could enter the board
    pub spawned: bool,
}

/// Result of one driver step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    /// Notifications in firing order
    pub events: Vec<GameEvent>,
    pub landing: Option<LandingReport>,
}

impl Step {
    pub fn fired(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }
}

pub struct Session<R = SimpleRng, L = ()> {
    game: Swiftris<R, EventLog>,
    listener: L,
    pieces_landed: u32,
    lines_cleared: usize,
    wiped_blocks: Option<usize>,
}

impl Session<SimpleRng, ()> {
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Session<R, ()> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            game: Swiftris::new(rng, EventLog::new()),
            listener: (),
            pieces_landed: 0,
            lines_cleared: 0,
            wiped_blocks: None,
        }
    }
}

impl<R: RandomSource, L: GameListener> Session<R, L> {
    /// Forward every notification to `listener` as well
    ///
    /// Notifications are delivered in firing order once the step has resolved,
    /// not while it runs. By the time `listener` sees `gameShapeDidLand` the
    /// clear cascade, the next spawn and any game-over wipe have already been
    /// applied, so the board it can observe is the post-step board.
    pub fn with_listener<M: GameListener>(self, listener: M) -> Session<R, M> {
        Session {
            game: self.game,
            listener,
            pieces_landed: self.pieces_landed,
            lines_cleared: self.lines_cleared,
            wiped_blocks: self.wiped_blocks,
        }
    }

    pub fn game(&self) -> &Swiftris<R, EventLog> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Swiftris<R, EventLog> {
        &mut self.game
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn pieces_landed(&self) -> u32 {
        self.pieces_landed
    }

    pub fn lines_cleared(&self) -> usize {
        self.lines_cleared
    }

    /// Blocks removed from the board when the last game ended
    pub fn wiped_blocks(&self) -> Option<usize> {
        self.wiped_blocks
    }

    pub fn is_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Milliseconds until the next gravity tick at the current level
    pub fn tick_interval_ms(&self) -> u32 {
        tick_length_ms(self.game.level())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Begin (or restart) the game and spawn the first shape
    pub fn begin(&mut self) -> Step {
        if self.game.is_game_over() {
            self.pieces_landed = 0;
            self.lines_cleared = 0;
        }
        self.wiped_blocks = None;
        self.game.begin_game();
        self.game.spawn_next();
        self.finish_step()
    }

    pub fn tick(&mut self) -> Step {
        self.apply(GameCommand::Tick)
    }

    pub fn apply(&mut self, command: GameCommand) -> Step {
        match command {
            GameCommand::BeginGame => return self.begin(),
            GameCommand::MoveLeft => {
                self.game.move_left();
            }
            GameCommand::MoveRight => {
                self.game.move_right();
            }
            GameCommand::RotateClockwise => {
                self.game.rotate_clockwise();
            }
            GameCommand::RotateCounterClockwise => {
                self.game.rotate_counterclockwise();
            }
            GameCommand::Drop => self.game.drop_shape(),
            GameCommand::Tick => self.game.tick(),
        }
        self.finish_step()
    }

    fn finish_step(&mut self) -> Step {
        let mut events = self.game.listener_mut().take();

        let landing = if events.contains(&GameEvent::GameShapeDidLand) {
            let report = self.resolve_landing();
            events.extend(self.game.listener_mut().take());
            Some(report)
        } else {
            None
        };

        if self.game.is_game_over() && self.wiped_blocks.is_none() {
            let wiped: usize = self
                .game
                .remove_all_blocks()
                .iter()
                .map(|row| row.len())
                .sum();
            info!(
                pieces = self.pieces_landed,
                lines = self.lines_cleared,
                wiped,
                "game over"
            );
            self.wiped_blocks = Some(wiped);
        }

        for &event in &events {
            self.listener.on_event(event);
        }

        Step { events, landing }
    }

    fn resolve_landing(&mut self) -> LandingReport {
        self.pieces_landed += 1;
        let score_before = self.game.score();

        let mut report = LandingReport::default();
        loop {
            let pass = self.game.clear_completed_lines();
            if pass.is_empty() {
                break;
            }
            report.lines_cleared += pass.line_count();
            report.passes.push(pass);
        }
        report.score = self.game.score();
        report.level = self.game.level();
        report.score_gained = report.score.saturating_sub(score_before);
        self.lines_cleared += report.lines_cleared;

        let (falling, _) = self.game.spawn_next();
        report.spawned = falling.is_some();

        debug!(
            passes = report.passes.len(),
            lines = report.lines_cleared,
            score_gained = report.score_gained,
            spawned = report.spawned,
            "landing resolved"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftris_core::board::Block;
    use swiftris_core::types::BlockColor;
    use swiftris_core::ScriptedRng;

    fn squares() -> Session<ScriptedRng> {
        Session::with_rng(ScriptedRng::new(vec![0]))
    }

    #[test]
    fn begin_spawns_first_shape() {
        let mut session = squares();
        let step = session.begin();
        assert_eq!(step.events, vec![GameEvent::GameDidBegin]);
        assert!(step.landing.is_none());
        assert!(session.game().falling_shape().is_some());
        assert!(session.game().next_shape().is_some());
    }

    #[test]
    fn drop_lands_on_next_tick_and_spawns() {
        let mut session = squares();
        session.begin();

        let step = session.apply(GameCommand::Drop);
        assert!(step.fired(GameEvent::GameShapeDidDrop));
        assert!(step.landing.is_none());

        let step = session.tick();
        let landing = step.landing.unwrap();
        assert!(landing.spawned);
        assert_eq!(landing.lines_cleared, 0);
        assert_eq!(session.pieces_landed(), 1);
        assert_eq!(session.game().falling_shape().unwrap().row(), 0);
    }

    #[test]
    fn landing_runs_clear_cascade() {
        let mut session = squares();
        for column in 0..10 {
            if column != 4 && column != 5 {
                for row in [18, 19] {
                    session
                        .game_mut()
                        .board_mut()
                        .set(column, row, Some(Block::new(column, row, BlockColor::Red)));
                }
            }
        }
        session.begin();
        session.apply(GameCommand::Drop);
        let landing = session.tick().landing.unwrap();

        assert_eq!(landing.lines_cleared, 2);
        assert_eq!(landing.passes.len(), 1);
        assert_eq!(landing.score_gained, 20);
        assert_eq!(session.lines_cleared(), 2);
        assert!(session.game().board().is_empty());
    }

    #[test]
    fn game_over_wipes_board() {
        let mut session = squares();
        session
            .game_mut()
            .board_mut()
            .set(4, 2, Some(Block::new(4, 2, BlockColor::Red)));
        session.begin();

        // The first square settles on rows 0-1, the next one cannot enter.
        let step = session.tick();
        assert!(step.fired(GameEvent::GameShapeDidLand));
        assert!(step.fired(GameEvent::GameDidEnd));
        assert!(!step.landing.unwrap().spawned);
        assert!(session.is_over());
        assert_eq!(session.wiped_blocks(), Some(5));
        assert!(session.game().board().is_empty());

        assert!(session.tick().events.is_empty());

        let step = session.begin();
        assert!(step.fired(GameEvent::GameDidBegin));
        assert!(!session.is_over());
        assert_eq!(session.wiped_blocks(), None);
        assert!(session.game().falling_shape().is_some());
    }

    #[test]
    fn forwards_to_listener() {
        let mut session = squares().with_listener(EventLog::new());
        session.begin();
        session.apply(GameCommand::MoveLeft);
        session.apply(GameCommand::RotateClockwise);
        assert_eq!(
            session.listener().events(),
            &[
                GameEvent::GameDidBegin,
                GameEvent::GameShapeDidMove,
                GameEvent::GameShapeDidMove
            ]
        );
    }

    #[test]
    fn gravity_completed_line_clears_in_second_pass() {
        let mut session = squares();
        let board = session.game_mut().board_mut();
        for column in 0..10 {
            board.set(column, 19, Some(Block::new(column, 19, BlockColor::Red)));
            if column != 9 {
                board.set(column, 18, Some(Block::new(column, 18, BlockColor::Red)));
            }
        }
        for row in [16, 17] {
            board.set(9, row, Some(Block::new(9, row, BlockColor::Red)));
        }
        session.begin();
        session.apply(GameCommand::Drop);
        let landing = session.tick().landing.unwrap();

        // Row 19 goes first; column 9 then falls into the gap left in row 18.
        assert_eq!(landing.passes.len(), 2);
        assert_eq!(landing.lines_cleared, 2);
        for pass in &landing.passes {
            assert_eq!(pass.line_count(), 1);
            assert_eq!(pass.lines_removed[0][0].row, 19);
        }
        assert_eq!(landing.score_gained, 20);
        assert!(landing.spawned);

        let board = session.game().board();
        assert_eq!(board.occupied_count(), 5);
        for (column, row) in [(4, 18), (4, 19), (5, 18), (5, 19), (9, 19)] {
            assert!(board.is_occupied(column, row));
        }
    }

    #[test]
    fn listener_sees_step_after_it_resolves() {
        let mut session = squares().with_listener(EventLog::new());
        session
            .game_mut()
            .board_mut()
            .set(4, 2, Some(Block::new(4, 2, BlockColor::Red)));
        let begin = session.begin();
        let step = session.tick();

        assert!(session.game().board().is_empty());
        let mut expected = begin.events.clone();
        expected.extend(step.events.iter().copied());
        assert_eq!(session.listener().events(), expected.as_slice());
        assert_eq!(
            step.events,
            vec![GameEvent::GameShapeDidLand, GameEvent::GameDidEnd]
        );
    }

    #[test]
    fn tick_interval_follows_level() {
        let session = Session::new(7);
        assert_eq!(session.tick_interval_ms(), 600);
    }
}
