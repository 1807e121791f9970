// src/readers/summary.rs

//! Implements `Summary` statistics tracking struct.

#![allow(non_snake_case)]

use crate::common::{Count, FPath};
use crate::readers::eventdecoder::SummaryEventDecoder;
use crate::readers::linereader::SummaryLineReader;

use std::fmt;

use ::more_asserts::debug_assert_ge;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Summary
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Accumulated statistics about decoding of a single event log by an
/// `EventDecoder` and its underlying `LineReader`.
///
/// For CLI option `--summary`.
#[derive(Clone, Default)]
pub struct Summary {
    /// the `FPath` of the processed file
    pub path: FPath,
    pub linereader: SummaryLineReader,
    pub eventdecoder: SummaryEventDecoder,
    /// The first encountered [`Error`], if any, as a `String`.
    ///
    /// Annoyingly, cannot [Clone or Copy `Error`].
    ///
    /// [`Error`]: std::io::Error
    /// [Clone or Copy `Error`]: https://github.com/rust-lang/rust/issues/24135
    pub error: Option<String>,
}

impl Summary {
    /// Create a new `Summary`
    pub fn new(
        path: FPath,
        linereader: SummaryLineReader,
        eventdecoder: SummaryEventDecoder,
        error: Option<String>,
    ) -> Summary {
        // some sanity checks
        debug_assert_ge!(
            linereader.LineReader_bytes,
            linereader.LineReader_lines,
            "There is less bytes than Lines"
        );
        debug_assert_ge!(
            linereader.LineReader_lines,
            eventdecoder.EventDecoder_lines_skipped + eventdecoder.EventDecoder_lines_ignored,
            "There is less Lines than skipped and ignored lines"
        );
        debug_assert_ge!(
            linereader.LineReader_lines,
            eventdecoder.EventDecoder_events_committed,
            "There is less Lines than Events"
        );
        Summary {
            path,
            linereader,
            eventdecoder,
            error,
        }
    }

    /// Create a new `Summary` for a file that could not be decoded at all.
    pub fn new_failed(
        path: FPath,
        error: Option<String>,
    ) -> Summary {
        defñ!("({:?}, {:?})", path, error);
        Summary {
            path,
            error,
            ..Default::default()
        }
    }

    /// `Count` of events committed.
    pub const fn count_events(&self) -> Count {
        self.eventdecoder.EventDecoder_events_committed
    }

    /// Were any lines abandoned because of a field that could not be decoded?
    pub const fn has_skipped_lines(&self) -> bool {
        self.eventdecoder.EventDecoder_lines_skipped != 0
    }
}

impl fmt::Debug for Summary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("Summary")
            .field("path", &self.path)
            .field("lines", &self.linereader.LineReader_lines)
            .field("bytes", &self.linereader.LineReader_bytes)
            .field("lines invalid UTF-8", &self.linereader.LineReader_lines_invalid_utf8)
            .field("lines skipped", &self.eventdecoder.EventDecoder_lines_skipped)
            .field("lines ignored", &self.eventdecoder.EventDecoder_lines_ignored)
            .field("TB", &self.eventdecoder.EventDecoder_tb_seen)
            .field("EN", &self.eventdecoder.EventDecoder_en_seen)
            .field("events committed", &self.eventdecoder.EventDecoder_events_committed)
            .field("events TriggerID 0", &self.eventdecoder.EventDecoder_trigger_zero_dropped)
            .field("events pending at end", &self.eventdecoder.EventDecoder_events_discarded_eof)
            .field("interactions", &self.eventdecoder.EventDecoder_interactions)
            .field("hits", &self.eventdecoder.EventDecoder_hits)
            .field("Error?", &self.error)
            .finish()
    }
}
