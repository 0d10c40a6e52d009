//! # Chatbot Game
//!
//! Domain types for the chatbot's game features.
//!
//! This crate contains request boundary types and nothing that talks to the network:
//! - [`RiddleDto`], built from a decoded JSON request body
//! - the riddle request-body schema descriptor used for OpenAPI documentation
//! - the [`RiddleSink`] seam through which a built riddle is handed to the game logic
//!
//! **No API concerns**: routing, HTTP status mapping and servers belong in `api-rest`.

pub mod dto;
pub mod error;
pub mod sink;

pub use dto::riddle::RiddleDto;
pub use dto::schema::{
    ObjectSchemaDescriptor, PropertyDescriptor, PropertyType, RIDDLE_ANSWER, RIDDLE_DESCRIPTION,
    RIDDLE_REQUEST_BODY, RIDDLE_TYPE,
};
pub use error::{GameError, GameResult};
pub use sink::{LoggingSink, RiddleSink};
