//! Hand-off point between the request boundary and the game logic.

use crate::RiddleDto;

/// Receives riddles built from inbound requests.
///
/// The game logic implements this; the REST layer only constructs the DTO and passes ownership
/// on. Implementations must be shareable across request handlers.
pub trait RiddleSink: Send + Sync {
    fn accept(&self, riddle: RiddleDto);
}

/// Sink that only records each riddle in the log.
///
/// Used when the service runs without a game engine attached.
#[derive(Clone, Debug, Default)]
pub struct LoggingSink;

impl RiddleSink for LoggingSink {
    fn accept(&self, riddle: RiddleDto) {
        if !riddle.is_complete() {
            tracing::warn!("received incomplete riddle: {:?}", riddle);
        }
        tracing::info!(
            riddle_type = riddle.riddle_type.as_deref().unwrap_or("<missing>"),
            "riddle received"
        );
    }
}
