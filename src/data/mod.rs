// src/data/mod.rs

//! The `data` module is specialized data containers for the records decoded
//! from a simulation event log: [`RunHeader`], [`EventRecord`]s,
//! [`InteractionRecord`]s, and [`HitRecord`]s. It also holds the detector
//! [`geometry`] helpers shared by every consumer of those records.
//!
//! ## Definitions of data
//!
//! ### Line
//!
//! A "line" is a sequence of bytes that:
//!
//! * begins after a prior "line" or the beginning of the stream.
//! * ends with a newline character `'\n'` or the end of the stream.
//!
//! A "line" begins with a whitespace-delimited _tag_, e.g. `SE`, `ID`,
//! `HTsim`. The tag determines the fields that follow on that line.
//! Lines are found by a [`LineReader`].
//!
//! ### Run header
//!
//! The "run header" is the simulation-wide metadata: beam and spectrum
//! settings. It is assembled from the tags `SimulationStartAreaFarField`,
//! `BeamType`, and `SpectralType`, usually found before the `TB` line.
//! There is exactly one [`RunHeader`] per stream.
//!
//! ### Event
//!
//! An "event" is the sequence of lines that:
//!
//! * begins after an `SE` line (or the `TB` line).
//! * ends with the next `SE` line or the `EN` line.
//!
//! An "event" is represented by an [`EventRecord`]. An event holds
//! "interactions" (`IA` lines), the simulated physical processes, and "hits"
//! (`HTsim` lines), the energy deposits recorded by the detector.
//!
//! ### Layer
//!
//! A "layer" is one of ten Z-bands of the tracker, derived from a hit Z
//! coordinate by [`layer_of`].
//!
//! <br/>
//!
//! Events are decoded by an [`EventDecoder`].
//!
//! [`RunHeader`]: crate::data::runheader::RunHeader
//! [`EventRecord`]: crate::data::event::EventRecord
//! [`EventRecord`]s: crate::data::event::EventRecord
//! [`InteractionRecord`]s: crate::data::interaction::InteractionRecord
//! [`HitRecord`]s: crate::data::hit::HitRecord
//! [`geometry`]: crate::data::geometry
//! [`layer_of`]: crate::data::geometry::layer_of
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`EventDecoder`]: crate::readers::eventdecoder::EventDecoder

pub mod event;
pub mod geometry;
pub mod hit;
pub mod interaction;
pub mod runheader;
