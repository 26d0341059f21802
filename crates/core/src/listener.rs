//! Notification interface consumed by the presentation layer
//!
//! The engine owns its listener and calls it inline, before the triggering
//! command returns. Implement the per-event methods you care about, or override
//! [`GameListener::on_event`] to receive everything through one entry point.

use crate::types::GameEvent;

pub trait GameListener {
    fn game_did_begin(&mut self) {}

    fn game_did_end(&mut self) {}

    fn game_shape_did_move(&mut self) {}

    fn game_shape_did_drop(&mut self) {}

    fn game_shape_did_land(&mut self) {}

    fn game_did_level_up(&mut self) {}

    /// Entry point used by the engine; routes to the per-event methods
    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameDidBegin => self.game_did_begin(),
            GameEvent::GameDidEnd => self.game_did_end(),
            GameEvent::GameShapeDidMove => self.game_shape_did_move(),
            GameEvent::GameShapeDidDrop => self.game_shape_did_drop(),
            GameEvent::GameShapeDidLand => self.game_shape_did_land(),
            GameEvent::GameDidLevelUp => self.game_did_level_up(),
        }
    }
}

/// Ignores every notification
impl GameListener for () {}

impl<L: GameListener + ?Sized> GameListener for &mut L {
    fn on_event(&mut self, event: GameEvent) {
        (**self).on_event(event)
    }
}

impl<L: GameListener + ?Sized> GameListener for Box<L> {
    fn on_event(&mut self, event: GameEvent) {
        (**self).on_event(event)
    }
}

/// Records notifications in firing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain the recorded events
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn count(&self, event: GameEvent) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameListener for EventLog {
    fn on_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
