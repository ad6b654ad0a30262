//! Event sinks: where the engine sends its events.

use super::event::GameEvent;

/// Receiver for engine events.
///
/// Sinks are called synchronously, in order, as each step of a turn happens.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Records events for later inspection.
///
/// ```
/// use trivia_engine::core::PlayerId;
/// use trivia_engine::events::{EventLog, EventSink, GameEvent};
///
/// let mut log = EventLog::new();
/// log.emit(GameEvent::GameStarted { player_count: 2 });
/// assert_eq!(log.len(), 1);
///
/// let drained = log.drain();
/// assert_eq!(drained.len(), 1);
/// assert!(log.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Take every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Check whether any recorded event matches.
    pub fn any(&self, predicate: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Writes every event to `tracing` at info level.
///
/// Install a subscriber to see a running commentary of the game.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: GameEvent) {
        match event.player() {
            Some(player) => tracing::info!(player = player.0, "{event}"),
            None => tracing::info!("{event}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn rolled(value: u32) -> GameEvent {
        GameEvent::DiceRolled {
            player: PlayerId::new(0),
            value,
        }
    }

    #[test]
    fn test_vec_sink() {
        let mut sink: Vec<GameEvent> = Vec::new();
        sink.emit(rolled(3));
        assert_eq!(sink, vec![rolled(3)]);
    }

    fn emit_twice(mut sink: impl EventSink) {
        sink.emit(rolled(1));
        sink.emit(rolled(2));
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        let mut log = EventLog::new();
        emit_twice(&mut log);
        assert_eq!(log.events(), &[rolled(1), rolled(2)]);
        assert_eq!(log.last(), Some(&rolled(2)));
    }

    #[test]
    fn test_log_any_and_clear() {
        let mut log = EventLog::new();
        log.emit(rolled(5));
        assert!(log.any(|e| matches!(e, GameEvent::DiceRolled { value: 5, .. })));
        assert!(!log.any(|e| matches!(e, GameEvent::GameStarted { .. })));

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_null_and_tracing_sinks_accept_events() {
        NullSink.emit(rolled(1));
        TracingSink.emit(rolled(1));
        TracingSink.emit(GameEvent::GameStarted { player_count: 2 });
    }
}
