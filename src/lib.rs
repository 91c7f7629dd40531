//! SwiftRead: a terminal RSVP speed reader.
//!
//! Text is shown one word at a time at a fixed pivot position so the eye
//! never travels. The [`engine`] module holds the tokenizer, the pivot
//! calculator and the playback clock; [`app`] wires them to text
//! acquisition ([`input`]), session logging ([`analytics`]) and the
//! terminal front end ([`ui`]).

pub mod analytics;
pub mod app;
pub mod engine;
pub mod input;
pub mod ui;
