// src/selectors/mod.rs

//! "Selectors" for _simlib_.
//!
//! A selector reads committed [`EventRecord`s] and returns the
//! [`EventId`s] of those matching some condition. A selector never modifies
//! an event.
//!
//! [`EventRecord`s]: crate::data::event::EventRecord
//! [`EventId`s]: crate::data::event::EventId

pub mod eventselector;
