// src/readers/eventdecoder.rs

//! Implements an [`EventDecoder`],
//! the driver of deriving [`EventRecord`s] and one [`RunHeader`] from the
//! lines of a `.sim` event log.
//!
//! An event log is a header, the `TB` line, then a series of events each
//! beginning with an `SE` line, then the `EN` line.
//!
//! ```text
//! SimulationStartAreaFarField 78.54
//! BeamType FarFieldPointSource 0 0
//! SpectralType Mono 511
//! TB
//! SE
//! ID 1 1
//! TI 0.000123
//! ED 511
//! IA INIT 1;0;0;0.0;0;0;0;0;0;0;0;0;0;0;0;1;0;0;0;0;0;-1;511
//! HTsim 1;0.0;0.0;5.0;12.5;0.000001;1;
//! SE
//! ...
//! EN
//! ```
//!
//! [`EventRecord`s]: crate::data::event::EventRecord
//! [`RunHeader`]: crate::data::runheader::RunHeader

#![allow(non_snake_case)]

use crate::common::{Count, FPath, LineNumber, ResultS3};
use crate::data::event::{EventRecord, EventRecordP, EventRecords, TRIGGER_ID_NONE};
use crate::data::hit::HitRecord;
use crate::data::interaction::InteractionRecord;
use crate::data::runheader::RunHeader;
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;
use crate::de_wrn;
use crate::readers::fields::{parse_field, FieldResult, SegmentCursor, TokenCursor};
use crate::readers::linereader::{LineReader, ResultS3LineFind};
use crate::readers::summary::Summary;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Error, Result};
use std::sync::Arc;

use ::more_asserts::debug_assert_le;
use ::phf::phf_map;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LineTag
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The recognized tags, the first whitespace-delimited token of a line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LineTag {
    /// `SimulationStartAreaFarField <float>`
    SimulationStartAreaFarField,
    /// `BeamType <string> <float> <float>`
    BeamType,
    /// `SpectralType <string> <float>`
    SpectralType,
    /// `TB`, begin of events
    TB,
    /// `SE`, start of an event
    SE,
    /// `ID <int> <int>`
    ID,
    /// `TI <double>`
    TI,
    /// `ED <float>`
    ED,
    /// `EC <float>`
    EC,
    /// `NS <float>`
    NS,
    /// `PM <string> <float>`
    PM,
    /// `IA <string> <scalar>;...`
    IA,
    /// `HTsim <scalar>;...;<int>;...`
    HTsim,
    /// `EN`, end of events
    EN,
}

/// Map of tag text to [`LineTag`].
static LINE_TAGS: phf::Map<&'static str, LineTag> = phf_map! {
    "SimulationStartAreaFarField" => LineTag::SimulationStartAreaFarField,
    "BeamType" => LineTag::BeamType,
    "SpectralType" => LineTag::SpectralType,
    "TB" => LineTag::TB,
    "SE" => LineTag::SE,
    "ID" => LineTag::ID,
    "TI" => LineTag::TI,
    "ED" => LineTag::ED,
    "EC" => LineTag::EC,
    "NS" => LineTag::NS,
    "PM" => LineTag::PM,
    "IA" => LineTag::IA,
    "HTsim" => LineTag::HTsim,
    "EN" => LineTag::EN,
};

impl LineTag {
    /// Find the `LineTag` for `token`. Case-sensitive.
    pub fn from_token(token: &str) -> Option<LineTag> {
        LINE_TAGS.get(token).copied()
    }

    /// Is this a header tag, recognized in every [`DecoderPhase`]?
    /// Other tags are event tags, recognized only in
    /// [`DecoderPhase::Phase1Active`].
    pub const fn is_header(&self) -> bool {
        matches!(
            self,
            LineTag::SimulationStartAreaFarField | LineTag::BeamType | LineTag::SpectralType | LineTag::TB
        )
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Enum for the [`EventDecoder`] decoding phases. A stream advances
/// through these phases in order.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub enum DecoderPhase {
    /// Before the `TB` line. Only header tags are recognized.
    #[default]
    Phase0Header,
    /// After the `TB` line. Header and event tags are recognized.
    Phase1Active,
    /// After the `EN` line or the end of the stream. No more lines are read.
    Phase2Done,
}

/// What to do with a finished event that carries `TriggerID` 0.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TriggerZeroPolicy {
    /// Never commit an event with `TriggerID` 0. A log that legitimately
    /// uses `TriggerID` 0 loses those events.
    #[default]
    Drop,
    /// Also commit an event with `TriggerID` 0 if an `ID` line explicitly
    /// assigned it.
    Commit,
}

/// What to do with an `IA` or `HTsim` line that could only be partially
/// decoded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PartialRecordPolicy {
    /// Append the record; fields that were not decoded keep their default
    /// value.
    ///
    /// The ROOT macro `parse_and_fill_tree.C` that first read these logs
    /// skips such a record, as [`Discard`] does. Choose [`Discard`] to match
    /// its output.
    ///
    /// [`Discard`]: PartialRecordPolicy::Discard
    #[default]
    Keep,
    /// Do not append the record.
    Discard,
}

/// Settings of an [`EventDecoder`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DecoderConfig {
    pub trigger_zero: TriggerZeroPolicy,
    pub partial_records: PartialRecordPolicy,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EventDecoder
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`EventDecoder.next_event()`] searching results.
///
/// [`EventDecoder.next_event()`]: self::EventDecoder#method.next_event
pub type ResultS3EventFind = ResultS3<EventRecordP, Error>;

/// Summary of decoding by an [`EventDecoder`], for CLI option `--summary`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryEventDecoder {
    /// `Count` of events committed
    pub EventDecoder_events_committed: Count,
    /// `Count` of lines abandoned because a field could not be decoded
    pub EventDecoder_lines_skipped: Count,
    /// `Count` of lines without a recognized tag, including event tags before
    /// the `TB` line and blank lines
    pub EventDecoder_lines_ignored: Count,
    /// `Count` of `TB` lines
    pub EventDecoder_tb_seen: Count,
    /// Was the `EN` line reached?
    pub EventDecoder_en_seen: bool,
    /// `Count` of finished events not committed because of `TriggerID` 0
    pub EventDecoder_trigger_zero_dropped: Count,
    /// `Count` of events still pending at the end of the stream (no `EN`),
    /// never committed
    pub EventDecoder_events_discarded_eof: Count,
    /// `Count` of `InteractionRecord`s appended, including to events later
    /// dropped
    pub EventDecoder_interactions: Count,
    /// `Count` of `HitRecord`s appended, including to events later dropped
    pub EventDecoder_hits: Count,
    /// The `RunHeader` as it was at the most recent `TB` line
    pub EventDecoder_runheader_at_tb: Option<RunHeader>,
}

/// All of a decoded stream.
#[derive(Debug, Default)]
pub struct DecodedLog {
    /// The `RunHeader` as it was at the end of decoding.
    pub runheader: RunHeader,
    /// Committed events, in input order.
    pub events: EventRecords,
    pub summary: Summary,
}

/// All mutable decoding state other than the [`LineReader`].
///
/// Separate from the `LineReader` so a borrowed line may be decoded while
/// the state is mutated.
#[derive(Debug, Default)]
struct DecoderState {
    config: DecoderConfig,
    phase: DecoderPhase,
    runheader: RunHeader,
    /// The event under construction. `None` until an event tag is seen after
    /// an `SE` line (or after `TB`).
    event: Option<EventRecord>,
    /// Did an `ID` line assign `event.trigger_id`?
    trigger_assigned: bool,
    summary: SummaryEventDecoder,
}

/// A specialized reader that decodes a `.sim` event log into
/// [`EventRecord`s] and one [`RunHeader`], one line at a time.
///
/// Committed events are returned in input order by [`next_event()`] or by
/// iteration. The `RunHeader` is available at any time from
/// [`runheader()`]; its values are whatever was last decoded.
///
/// A line that cannot be fully decoded is abandoned at the first bad field
/// and counted by [`lines_skipped()`]. Fields assigned before the bad field
/// remain assigned. Decoding never fails because of line content; only an
/// I/O error of the underlying reader is returned as an error.
///
/// [`EventRecord`s]: crate::data::event::EventRecord
/// [`next_event()`]: self::EventDecoder#method.next_event
/// [`runheader()`]: self::EventDecoder#method.runheader
/// [`lines_skipped()`]: self::EventDecoder#method.lines_skipped
pub struct EventDecoder<R: BufRead> {
    linereader: LineReader<R>,
    state: DecoderState,
}

impl<R: BufRead> fmt::Debug for EventDecoder<R> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("EventDecoder")
            .field("linereader", &self.linereader)
            .field("phase", &self.state.phase)
            .field("config", &self.state.config)
            .field("event pending", &self.state.event.is_some())
            .field("events committed", &self.state.summary.EventDecoder_events_committed)
            .field("lines skipped", &self.state.summary.EventDecoder_lines_skipped)
            .finish()
    }
}

impl EventDecoder<BufReader<File>> {
    /// Open the file at `path` and create a new `EventDecoder` for it.
    pub fn from_path(
        path: &FPath,
        config: DecoderConfig,
    ) -> Result<EventDecoder<BufReader<File>>> {
        defñ!("({:?})", path);
        let linereader = LineReader::open(path)?;

        Ok(EventDecoder::from_linereader(linereader, config))
    }
}

impl<R: BufRead> EventDecoder<R> {
    /// Create a new `EventDecoder` reading from `reader`.
    /// `path` is used only for messages and the [`Summary`].
    pub fn new(
        reader: R,
        path: FPath,
        config: DecoderConfig,
    ) -> EventDecoder<R> {
        EventDecoder::from_linereader(LineReader::new(reader, path), config)
    }

    /// Create a new `EventDecoder` reading the lines of `linereader`.
    pub fn from_linereader(
        linereader: LineReader<R>,
        config: DecoderConfig,
    ) -> EventDecoder<R> {
        defñ!("({:?}, {:?})", linereader.path(), config);
        EventDecoder {
            linereader,
            state: DecoderState {
                config,
                ..Default::default()
            },
        }
    }

    /// Decode lines until the next event is committed.
    ///
    /// Returns `Found(event)` for each committed event, in input order.
    /// Returns `Done` after the `EN` line or the end of the stream, and on
    /// every later call.
    /// Returns `Err` for an I/O error of the underlying reader; decoding
    /// then stops and later calls return `Done`.
    pub fn next_event(&mut self) -> ResultS3EventFind {
        defn!();
        loop {
            if self.state.phase == DecoderPhase::Phase2Done {
                defx!("phase {:?}, return Done", self.state.phase);
                return ResultS3EventFind::Done;
            }
            let line_number: LineNumber = match self.linereader.next_line() {
                ResultS3LineFind::Found(val) => val,
                ResultS3LineFind::Done => {
                    self.state.finish_stream(self.linereader.path());
                    defx!("end of stream, return Done");
                    return ResultS3EventFind::Done;
                }
                ResultS3LineFind::Err(err) => {
                    self.state.phase = DecoderPhase::Phase2Done;
                    defx!("return Err {}", err);
                    return ResultS3EventFind::Err(err);
                }
            };
            if let Some(event) = self
                .state
                .decode_line(self.linereader.line(), line_number)
            {
                defx!("line {}: return Found(event {})", line_number, event.event_id);
                return ResultS3EventFind::Found(event);
            }
        }
    }

    /// Decode the remainder of the stream.
    pub fn decode_all(mut self) -> Result<DecodedLog> {
        defn!("({:?})", self.linereader.path());
        let mut events = EventRecords::new();
        loop {
            match self.next_event() {
                ResultS3EventFind::Found(event) => events.push(event),
                ResultS3EventFind::Done => break,
                ResultS3EventFind::Err(err) => {
                    defx!("return Err {}", err);
                    return Err(Error::new(
                        err.kind(),
                        format!("{} at line {} of {:?}", err, self.linereader.line_number(), self.linereader.path()),
                    ));
                }
            }
        }
        let summary: Summary = self.summary_complete();
        defx!("return {} events", events.len());

        Ok(DecodedLog {
            runheader: self.state.runheader,
            events,
            summary,
        })
    }

    /// The `RunHeader` as decoded so far.
    pub const fn runheader(&self) -> &RunHeader {
        &self.state.runheader
    }

    pub const fn phase(&self) -> DecoderPhase {
        self.state.phase
    }

    pub const fn config(&self) -> &DecoderConfig {
        &self.state.config
    }

    /// `Count` of lines abandoned because a field could not be decoded.
    pub const fn lines_skipped(&self) -> Count {
        self.state.summary.EventDecoder_lines_skipped
    }

    /// `Count` of lines without a recognized tag.
    pub const fn lines_ignored(&self) -> Count {
        self.state.summary.EventDecoder_lines_ignored
    }

    /// `Count` of events committed so far.
    pub const fn count_events_committed(&self) -> Count {
        self.state.summary.EventDecoder_events_committed
    }

    pub fn path(&self) -> &FPath {
        self.linereader.path()
    }

    /// Return a [`SummaryEventDecoder`] of the decoding so far.
    pub fn summary(&self) -> SummaryEventDecoder {
        self.state.summary.clone()
    }

    /// Return a [`Summary`] of the decoding so far, including the underlying
    /// `LineReader`.
    pub fn summary_complete(&self) -> Summary {
        Summary::new(
            self.linereader.path().clone(),
            self.linereader.summary(),
            self.summary(),
            None,
        )
    }
}

impl<R: BufRead> Iterator for EventDecoder<R> {
    type Item = Result<EventRecordP>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_event() {
            ResultS3EventFind::Found(event) => Some(Ok(event)),
            ResultS3EventFind::Done => None,
            ResultS3EventFind::Err(err) => Some(Err(err)),
        }
    }
}

impl DecoderState {
    /// Decode one line. Returns an event if the line committed one.
    fn decode_line(
        &mut self,
        line: &str,
        line_number: LineNumber,
    ) -> Option<EventRecordP> {
        defñ!("line {}: {:?}", line_number, str_to_String_noraw(line));
        debug_assert_le!(self.phase, DecoderPhase::Phase1Active, "decoding a line after EN");
        let mut tokens = TokenCursor::new(line);
        let tag: LineTag = match tokens.next_token().and_then(LineTag::from_token) {
            Some(tag) => tag,
            None => {
                self.summary.EventDecoder_lines_ignored += 1;
                return None;
            }
        };
        if self.phase == DecoderPhase::Phase0Header && !tag.is_header() {
            defo!("line {}: event tag {:?} before TB, ignored", line_number, tag);
            self.summary.EventDecoder_lines_ignored += 1;
            return None;
        }
        let result: FieldResult<Option<EventRecordP>> = match tag {
            LineTag::SimulationStartAreaFarField => self.decode_far_field(&mut tokens).map(|_| None),
            LineTag::BeamType => self.decode_beam_type(&mut tokens).map(|_| None),
            LineTag::SpectralType => self.decode_spectral_type(&mut tokens).map(|_| None),
            LineTag::TB => {
                self.begin_events();
                Ok(None)
            }
            LineTag::SE => Ok(self.commit_event()),
            LineTag::EN => {
                let committed = self.commit_event();
                self.phase = DecoderPhase::Phase2Done;
                self.summary.EventDecoder_en_seen = true;
                defo!("line {}: EN", line_number);
                Ok(committed)
            }
            LineTag::ID => self.decode_id(&mut tokens).map(|_| None),
            LineTag::TI => {
                let event = self.event.get_or_insert_with(EventRecord::new);
                tokens.next_parsed::<f64>("InitialTime").map(|val| {
                    event.initial_time = val;
                    None
                })
            }
            LineTag::ED => {
                let event = self.event.get_or_insert_with(EventRecord::new);
                tokens.next_parsed::<f32>("TotDepositedEnergy").map(|val| {
                    event.tot_deposited_energy = val;
                    None
                })
            }
            LineTag::EC => {
                let event = self.event.get_or_insert_with(EventRecord::new);
                tokens.next_parsed::<f32>("EscapedEnergy").map(|val| {
                    event.escaped_energy = val;
                    None
                })
            }
            LineTag::NS => {
                let event = self.event.get_or_insert_with(EventRecord::new);
                tokens.next_parsed::<f32>("NSMaterialEnergy").map(|val| {
                    event.ns_material_energy = val;
                    None
                })
            }
            LineTag::PM => self.decode_physics_module(&mut tokens).map(|_| None),
            LineTag::IA => self.decode_ia(&mut tokens).map(|_| None),
            LineTag::HTsim => self.decode_htsim(tokens.remainder()).map(|_| None),
        };
        match result {
            Ok(committed) => committed,
            Err(_err) => {
                defo!("line {}: {:?} abandoned: {}", line_number, tag, _err);
                self.summary.EventDecoder_lines_skipped += 1;
                None
            }
        }
    }

    fn decode_far_field(
        &mut self,
        tokens: &mut TokenCursor,
    ) -> FieldResult<()> {
        self.runheader.sim_start_area_far_field = tokens.next_parsed("SimulationStartAreaFarField")?;

        Ok(())
    }

    fn decode_beam_type(
        &mut self,
        tokens: &mut TokenCursor,
    ) -> FieldResult<()> {
        self.runheader.beam_type = tokens.next_field("BeamType")?.to_string();
        self.runheader.beam_theta = tokens.next_parsed("BeamTheta")?;
        self.runheader.beam_phi = tokens.next_parsed("BeamPhi")?;

        Ok(())
    }

    fn decode_spectral_type(
        &mut self,
        tokens: &mut TokenCursor,
    ) -> FieldResult<()> {
        self.runheader.spectral_type = tokens.next_field("SpectralType")?.to_string();
        self.runheader.spectral_energy = tokens.next_parsed("SpectralEnergy")?;

        Ok(())
    }

    /// `TB` line. May be seen more than once.
    fn begin_events(&mut self) {
        defo!("TB: {:?}", self.runheader);
        self.phase = DecoderPhase::Phase1Active;
        self.summary.EventDecoder_tb_seen += 1;
        self.summary.EventDecoder_runheader_at_tb = Some(self.runheader.clone());
    }

    fn decode_id(
        &mut self,
        tokens: &mut TokenCursor,
    ) -> FieldResult<()> {
        let event = self.event.get_or_insert_with(EventRecord::new);
        event.trigger_id = tokens.next_parsed("TriggerID")?;
        self.trigger_assigned = true;
        event.event_id = tokens.next_parsed("EventID")?;

        Ok(())
    }

    fn decode_physics_module(
        &mut self,
        tokens: &mut TokenCursor,
    ) -> FieldResult<()> {
        let event = self.event.get_or_insert_with(EventRecord::new);
        event.physics_module_type = tokens.next_field("PhysicsModuleType")?.to_string();
        event.physics_module_energy = tokens.next_parsed("PhysicsModuleEnergy")?;

        Ok(())
    }

    fn decode_ia(
        &mut self,
        tokens: &mut TokenCursor,
    ) -> FieldResult<()> {
        let mut interaction = InteractionRecord::default();
        let result = decode_interaction(tokens, &mut interaction);
        if result.is_ok() || self.config.partial_records == PartialRecordPolicy::Keep {
            self.event
                .get_or_insert_with(EventRecord::new)
                .interactions
                .push(interaction);
            self.summary.EventDecoder_interactions += 1;
        }

        result
    }

    fn decode_htsim(
        &mut self,
        text: &str,
    ) -> FieldResult<()> {
        let mut hit = HitRecord::default();
        let result = decode_hit(text, &mut hit);
        if result.is_ok() || self.config.partial_records == PartialRecordPolicy::Keep {
            self.event
                .get_or_insert_with(EventRecord::new)
                .hits
                .push(hit);
            self.summary.EventDecoder_hits += 1;
        }

        result
    }

    /// `SE` or `EN` line. Take the event under construction, if any, and
    /// return it if it may be committed.
    fn commit_event(&mut self) -> Option<EventRecordP> {
        let trigger_assigned = self.trigger_assigned;
        self.trigger_assigned = false;
        let event: EventRecord = self.event.take()?;
        let commit: bool = match self.config.trigger_zero {
            TriggerZeroPolicy::Drop => event.trigger_id != TRIGGER_ID_NONE,
            TriggerZeroPolicy::Commit => event.trigger_id != TRIGGER_ID_NONE || trigger_assigned,
        };
        if !commit {
            defo!("drop event with TriggerID {}: {:?}", TRIGGER_ID_NONE, event);
            self.summary.EventDecoder_trigger_zero_dropped += 1;
            return None;
        }
        self.summary.EventDecoder_events_committed += 1;

        Some(Arc::new(event))
    }

    /// The stream ended. A pending event is not committed.
    fn finish_stream(
        &mut self,
        _path: &FPath,
    ) {
        if let Some(_event) = self.event.take() {
            de_wrn!(
                "end of {:?} without EN; pending event (EventID {}) not committed",
                _path,
                _event.event_id
            );
            self.summary.EventDecoder_events_discarded_eof += 1;
        }
        self.trigger_assigned = false;
        self.phase = DecoderPhase::Phase2Done;
    }
}

/// Decode the remainder of an `IA` line into `interaction`: the interaction
/// type then [`IA_FIELD_COUNT`] `;`-separated values.
///
/// [`IA_FIELD_COUNT`]: crate::data::interaction::IA_FIELD_COUNT
fn decode_interaction(
    tokens: &mut TokenCursor,
    ia: &mut InteractionRecord,
) -> FieldResult<()> {
    ia.interaction_type = tokens.next_field("Type")?.to_string();
    let mut segments = SegmentCursor::new(tokens.remainder());
    ia.index = segments.next_parsed("Index")?;
    ia.parent_interaction_id = segments.next_parsed("ParentInteractionID")?;
    ia.detector_id = segments.next_parsed("DetectorID")?;
    ia.time = segments.next_parsed("Time")?;
    ia.x = segments.next_parsed("X")?;
    ia.y = segments.next_parsed("Y")?;
    ia.z = segments.next_parsed("Z")?;
    ia.mother_particle_code = segments.next_parsed("MotherParticleCode")?;
    ia.px_in = segments.next_parsed("PxIn")?;
    ia.py_in = segments.next_parsed("PyIn")?;
    ia.pz_in = segments.next_parsed("PzIn")?;
    ia.dx_in = segments.next_parsed("DxIn")?;
    ia.dy_in = segments.next_parsed("DyIn")?;
    ia.dz_in = segments.next_parsed("DzIn")?;
    ia.energy_in = segments.next_parsed("EnergyIn")?;
    ia.outgoing_particle_code = segments.next_parsed("OutgoingParticleCode")?;
    ia.px_out = segments.next_parsed("PxOut")?;
    ia.py_out = segments.next_parsed("PyOut")?;
    ia.pz_out = segments.next_parsed("PzOut")?;
    ia.dx_out = segments.next_parsed("DxOut")?;
    ia.dy_out = segments.next_parsed("DyOut")?;
    ia.dz_out = segments.next_parsed("DzOut")?;
    ia.energy_out = segments.next_parsed("EnergyOut")?;

    Ok(())
}

/// Decode the remainder of an `HTsim` line into `hit`: [`HTSIM_FIELD_COUNT`]
/// `;`-separated values then zero or more primary particle IDs.
///
/// [`HTSIM_FIELD_COUNT`]: crate::data::hit::HTSIM_FIELD_COUNT
fn decode_hit(
    text: &str,
    hit: &mut HitRecord,
) -> FieldResult<()> {
    let mut segments = SegmentCursor::new(text);
    hit.index = segments.next_parsed("Index")?;
    hit.x = segments.next_parsed("X")?;
    hit.y = segments.next_parsed("Y")?;
    hit.z = segments.next_parsed("Z")?;
    hit.energy_deposit = segments.next_parsed("EnergyDeposit")?;
    hit.time = segments.next_parsed("Time")?;
    while let Some(segment) = segments.next_segment() {
        // trailing whitespace after the last `;`
        if segments.is_exhausted() && segment.trim().is_empty() {
            break;
        }
        let id = parse_field("PrimaryParticleID", segment)?;
        hit.push_primary_particle_id(id);
    }

    Ok(())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// convenience
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Stand-in path of an in-memory event log.
pub const FPATH_STR: &str = "<str>";

/// Decode all of an in-memory event log.
pub fn decode_str(
    data: &str,
    config: DecoderConfig,
) -> Result<DecodedLog> {
    EventDecoder::new(data.as_bytes(), FPath::from(FPATH_STR), config).decode_all()
}

/// Decode all of the event log file at `path`.
pub fn decode_path(
    path: &FPath,
    config: DecoderConfig,
) -> Result<DecodedLog> {
    EventDecoder::from_path(path, config)?.decode_all()
}
