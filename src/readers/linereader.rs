// src/readers/linereader.rs

//! Implements a [`LineReader`],
//! the driver of deriving lines of text from a [`BufRead`] source.
//!
//! [`BufRead`]: std::io::BufRead

#![allow(non_snake_case)]

use crate::common::{Bytes, Count, CRu8, FPath, LineNumber, NLu8, ResultS3};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;
use crate::de_wrn;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Error, Result};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LineReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`LineReader.next_line()`] searching results.
///
/// `Found` holds the [`LineNumber`] of the line now available from
/// [`LineReader.line()`].
///
/// [`LineReader.next_line()`]: self::LineReader#method.next_line
/// [`LineReader.line()`]: self::LineReader#method.line
pub type ResultS3LineFind = ResultS3<LineNumber, Error>;

/// Size of the `BufReader` buffer used for files.
pub const LINEREADER_BUFSZ: usize = 0x10000;

/// Initial capacity of the line buffers. Most `IA` lines are shorter.
const LINE_CAPACITY: usize = 0x200;

/// A specialized reader that finds lines of text within a [`BufRead`]
/// source, one line at a time, in order.
///
/// A line ends with `'\n'`; a `"\r\n"` ending is also removed. The last line
/// of a stream may lack a line ending. Invalid UTF-8 is replaced with
/// `U+FFFD` and counted.
///
/// Only the most recent line is retained.
///
/// _XXX: not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`BufRead`]: std::io::BufRead
/// [`Read`]: std::io::Read
pub struct LineReader<R: BufRead> {
    reader: R,
    /// The path of the source, for messages. May be a stand-in name such as
    /// `"-"` for standard input.
    path: FPath,
    /// Raw bytes of the most recent line.
    buffer: Bytes,
    /// The most recent line, without line ending.
    line: String,
    /// `Count` of lines processed, also the `LineNumber` of `self.line`.
    lines_processed: Count,
    /// `Count` of bytes processed, including line endings.
    bytes_processed: Count,
    /// `Count` of lines with invalid UTF-8.
    lines_invalid_utf8: Count,
    /// Has the source been exhausted?
    eof: bool,
}

impl<R: BufRead> fmt::Debug for LineReader<R> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("path", &self.path)
            .field("lines_processed", &self.lines_processed)
            .field("bytes_processed", &self.bytes_processed)
            .field("lines_invalid_utf8", &self.lines_invalid_utf8)
            .field("eof", &self.eof)
            .finish()
    }
}

/// Summary of processing by a [`LineReader`], for CLI option `--summary`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SummaryLineReader {
    /// `Count` of lines processed by the `LineReader`
    pub LineReader_lines: Count,
    /// `Count` of bytes processed by the `LineReader`
    pub LineReader_bytes: Count,
    /// `Count` of lines with invalid UTF-8
    pub LineReader_lines_invalid_utf8: Count,
}

impl LineReader<BufReader<File>> {
    /// Open the file at `path` and create a new `LineReader` for it.
    pub fn open(path: &FPath) -> Result<LineReader<BufReader<File>>> {
        defn!("({:?})", path);
        let file: File = match File::open(path) {
            Ok(val) => val,
            Err(err) => {
                defx!("File::open({:?}) error {}", path, err);
                return Err(Error::new(err.kind(), format!("{} for file {:?}", err, path)));
            }
        };
        let reader = BufReader::with_capacity(LINEREADER_BUFSZ, file);
        defx!();

        Ok(LineReader::new(reader, path.clone()))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Create a new `LineReader` reading from `reader`.
    /// `path` is used only for messages.
    pub fn new(
        reader: R,
        path: FPath,
    ) -> LineReader<R> {
        defñ!("({:?})", path);
        LineReader {
            reader,
            path,
            buffer: Bytes::with_capacity(LINE_CAPACITY),
            line: String::with_capacity(LINE_CAPACITY),
            lines_processed: 0,
            bytes_processed: 0,
            lines_invalid_utf8: 0,
            eof: false,
        }
    }

    /// Read the next line.
    ///
    /// Returns `Found(line_number)`; the line text is then available from
    /// [`line()`] until the next call.
    /// Returns `Done` once the source is exhausted, and on every later call.
    ///
    /// [`line()`]: self::LineReader#method.line
    pub fn next_line(&mut self) -> ResultS3LineFind {
        if self.eof {
            defñ!("already eof, return Done");
            return ResultS3LineFind::Done;
        }
        self.buffer.clear();
        self.line.clear();
        let read: usize = match self.reader.read_until(NLu8, &mut self.buffer) {
            Ok(val) => val,
            Err(err) => {
                defñ!("read_until error {}", err);
                return ResultS3LineFind::Err(err);
            }
        };
        if read == 0 {
            defñ!("read 0 bytes, return Done");
            self.eof = true;
            return ResultS3LineFind::Done;
        }
        self.bytes_processed += read as Count;
        self.lines_processed += 1;
        if self.buffer.last() == Some(&NLu8) {
            self.buffer.pop();
            if self.buffer.last() == Some(&CRu8) {
                self.buffer.pop();
            }
        }
        match std::str::from_utf8(&self.buffer) {
            Ok(s) => self.line.push_str(s),
            Err(_err) => {
                de_wrn!(
                    "invalid UTF-8 on line {} of {:?}: {}",
                    self.lines_processed, self.path, _err
                );
                self.lines_invalid_utf8 += 1;
                self.line.push_str(&String::from_utf8_lossy(&self.buffer));
            }
        }
        defñ!("line {}: {:?}", self.lines_processed, str_to_String_noraw(&self.line));

        ResultS3LineFind::Found(self.lines_processed)
    }

    /// The most recent line found by [`next_line()`], without line ending.
    /// Empty before the first line is found.
    ///
    /// [`next_line()`]: self::LineReader#method.next_line
    #[inline(always)]
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// `LineNumber` of the most recent line; `0` before the first line.
    #[inline(always)]
    pub const fn line_number(&self) -> LineNumber {
        self.lines_processed
    }

    /// `Count` of lines processed.
    #[inline(always)]
    pub const fn count_lines_processed(&self) -> Count {
        self.lines_processed
    }

    /// `Count` of bytes processed, including line endings.
    #[inline(always)]
    pub const fn count_bytes_processed(&self) -> Count {
        self.bytes_processed
    }

    /// Has the source been exhausted?
    #[inline(always)]
    pub const fn is_eof(&self) -> bool {
        self.eof
    }

    pub fn path(&self) -> &FPath {
        &self.path
    }

    /// Return a [`SummaryLineReader`] of the processing so far.
    pub fn summary(&self) -> SummaryLineReader {
        SummaryLineReader {
            LineReader_lines: self.lines_processed,
            LineReader_bytes: self.bytes_processed,
            LineReader_lines_invalid_utf8: self.lines_invalid_utf8,
        }
    }
}
