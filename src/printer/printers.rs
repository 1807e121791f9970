// src/printer/printers.rs

//! Printer functions for user-facing output of a decoded event log:
//! the selected [`EventId`s] and the [`RunHeader`].
//!
//! [`EventId`s]: crate::data::event::EventId
//! [`RunHeader`]: crate::data::runheader::RunHeader

use crate::data::event::EventIds;
use crate::data::runheader::RunHeader;
use crate::debug::printers::de_err;

use std::io::{
    Result,
    Write, // for `std::io::Stdout.flush`
};

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for printing some user-facing error messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

/// [`Color`] for printing less important data.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_DIMMED: Color = Color::Rgb(0x80, 0x80, 0x80);

/// First line printed by [`write_event_ids`].
pub const EVENT_IDS_TITLE: &str = "Selected EventIDs: ";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// event log printer functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Write the count of `ids` then each `EventID` on its own line.
///
/// ```text
/// Selected EventIDs: 2
/// 7
/// 12
/// ```
pub fn write_event_ids<W: Write>(
    out: &mut W,
    ids: &EventIds,
) -> Result<()> {
    writeln!(out, "{}{}", EVENT_IDS_TITLE, ids.len())?;
    for id in ids.iter() {
        writeln!(out, "{}", id)?;
    }

    Ok(())
}

/// Write the `RunHeader` values on one line, see [`RunHeader`'s `Display`].
///
/// [`RunHeader`'s `Display`]: crate::data::runheader::RunHeader#impl-Display-for-RunHeader
pub fn write_runheader<W: Write>(
    out: &mut W,
    runheader: &RunHeader,
) -> Result<()> {
    writeln!(out, "{}", runheader)
}

/// Write the file header `==> path <==` that precedes the output of one
/// file when several files are printed.
pub fn write_file_header<W: Write>(
    out: &mut W,
    path: &str,
) -> Result<()> {
    writeln!(out, "==> {} <==", path)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// other printer functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print colored output to terminal if possible using passed stream,
/// otherwise, print plain output.
///
/// Caller should take stream locks, e.g. `std::io::stdout().lock()`.
///
/// See an example <https://docs.rs/termcolor/1.1.2/termcolor/#detecting-presence-of-a-terminal>.
pub fn print_colored(
    color: Color,
    value: &[u8],
    out: &mut termcolor::StandardStream,
) -> Result<()> {
    match out.set_color(ColorSpec::new().set_fg(Some(color))) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: std.set_color({:?}) returned error {}", color, err);
            return Err(err);
        }
    };
    match out.write(value) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.write(…) returned error {}", err);
            return Err(err);
        }
    }
    match out.reset() {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.reset() returned error {}", err);
            return Err(err);
        }
    }
    out.flush()?;

    Ok(())
}

/// Print colored output to terminal on stderr.
///
/// See an example <https://docs.rs/termcolor/1.1.2/termcolor/#detecting-presence-of-a-terminal>.
pub fn print_colored_stderr(
    color: Color,
    color_choice_opt: Option<ColorChoice>,
    value: &[u8],
) -> Result<()> {
    let choice: ColorChoice = match color_choice_opt {
        Some(choice_) => choice_,
        None => ColorChoice::Auto,
    };
    let mut stderr = termcolor::StandardStream::stderr(choice);
    let _stdout_lock = std::io::stdout().lock();

    print_colored(color, value, &mut stderr)
}
