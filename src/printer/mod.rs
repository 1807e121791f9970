// src/printer/mod.rs

//! The `printer` module is for printing user-facing output of decoded event
//! logs: selected [`EventId`s], the [`RunHeader`], and the `--summary`.
//!
//! [`EventId`s]: crate::data::event::EventId
//! [`RunHeader`]: crate::data::runheader::RunHeader

pub mod printers;
pub mod summary;
