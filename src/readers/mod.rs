// src/readers/mod.rs

//! "Readers" for _simlib_.
//!
//! ## Overview of readers
//!
//! * An [`EventDecoder`] drives a [`LineReader`] to derive [`EventRecord`s]
//!   and one [`RunHeader`].
//! * A `LineReader` drives a [`BufRead`] to derive lines of text.
//! * The `EventDecoder` extracts the fields of each line with the cursors of
//!   [`fields`].
//!
//! <br/>
//!
//! Also see [_Definitions of data_].
//!
//! <br/>
//!
//! ---
//!
//! The _simev_ binary program uses an [`EventDecoder`] instance, one per
//! file, to decode a file. The statistics of decoding a file are collected
//! in a [`Summary`].
//!
//! <br/>
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [_Definitions of data_]: crate::data
//! [`BufRead`]: std::io::BufRead
//! [`Read`]: std::io::Read
//! [`EventRecord`s]: crate::data::event::EventRecord
//! [`RunHeader`]: crate::data::runheader::RunHeader
//! [`EventDecoder`]: crate::readers::eventdecoder::EventDecoder
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`fields`]: crate::readers::fields
//! [`Summary`]: crate::readers::summary::Summary

pub mod eventdecoder;
pub mod fields;
pub mod linereader;
pub mod summary;
