//! Session driver tests - command dispatch, landing cascade, restart

use swiftris::core::{Block, EventLog, ScriptedRng};
use swiftris::engine::{apply_place, Session};
use swiftris::types::{BlockColor, GameCommand, GameEvent, Orientation};

#[test]
fn test_session_plays_until_game_over() {
    let mut session = Session::new(4242);
    session.begin();

    // Dropping every shape straight down stacks them at the spawn column.
    let mut steps = 0;
    while !session.is_over() && steps < 1_000 {
        session.apply(GameCommand::Drop);
        session.tick();
        steps += 1;
    }

    assert!(session.is_over());
    assert!(session.pieces_landed() > 0);
    assert!(session.wiped_blocks().unwrap() > 0);
    assert!(session.game().board().is_empty());
    assert_eq!(session.game().score(), 0);
}

#[test]
fn test_commands_parse_and_dispatch() {
    let mut session = Session::with_rng(ScriptedRng::new(vec![0])).with_listener(EventLog::new());
    for name in ["begin", "moveLeft", "moveRight", "rotate", "drop", "tick"] {
        let command = GameCommand::from_str(name).unwrap();
        session.apply(command);
    }

    assert_eq!(
        session.listener().events(),
        &[
            GameEvent::GameDidBegin,
            GameEvent::GameShapeDidMove,
            GameEvent::GameShapeDidMove,
            GameEvent::GameShapeDidMove,
            GameEvent::GameShapeDidDrop,
            GameEvent::GameShapeDidLand,
        ]
    );
    assert_eq!(session.pieces_landed(), 1);
}

#[test]
fn test_place_then_tick_clears_two_lines() {
    let mut session = Session::with_rng(ScriptedRng::new(vec![0]));
    for row in [18, 19] {
        for column in 0..10 {
            if column != 2 && column != 3 {
                session
                    .game_mut()
                    .board_mut()
                    .set(column, row, Some(Block::new(column, row, BlockColor::Blue)));
            }
        }
    }
    session.begin();

    apply_place(session.game_mut(), 2, Orientation::Ninety).unwrap();
    let step = session.tick();
    let landing = step.landing.unwrap();

    assert_eq!(landing.lines_cleared, 2);
    assert_eq!(landing.passes.len(), 1);
    assert_eq!(landing.score_gained, 20);
    assert_eq!((landing.score, landing.level), (20, 1));
    assert!(landing.spawned);
    assert_eq!(session.lines_cleared(), 2);
    assert_eq!(session.tick_interval_ms(), 600);
}

#[test]
fn test_restart_after_game_over() {
    let mut session = Session::with_rng(ScriptedRng::new(vec![0]));
    session
        .game_mut()
        .board_mut()
        .set(5, 1, Some(Block::new(5, 1, BlockColor::Red)));

    let step = session.begin();
    assert!(step.fired(GameEvent::GameDidEnd));
    assert_eq!(session.wiped_blocks(), Some(1));

    let step = session.apply(GameCommand::BeginGame);
    assert_eq!(step.events, vec![GameEvent::GameDidBegin]);
    let falling = session.game().falling_shape().unwrap();
    assert_eq!((falling.column(), falling.row()), (4, 0));
}
