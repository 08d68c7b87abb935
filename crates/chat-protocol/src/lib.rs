//! The text command surface.
//!
//! Turns one free-form user message into a typed [`Intent`] by ordered,
//! case-insensitive substring matching against fixed keyword tables. No NLP
//! model, no scoring; the tables and their precedence are the protocol.

pub mod intent;
pub mod keywords;

pub use intent::{parse, ChartKind, Intent, Parameter};
