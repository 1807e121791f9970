// src/printer/summary.rs

//! Functions to print the `--summary` of decoded event logs.

use crate::data::runheader::RunHeader;
use crate::printer::printers::{print_colored_stderr, ColorChoice, COLOR_DIMMED, COLOR_ERROR};
use crate::readers::summary::Summary;

use std::fmt;

use ::si_trace_print::defñ;

/// Electron rest energy, keV.
pub const ELECTRON_REST_ENERGY_KEV: f32 = 511.0;

/// For printing various levels of indentation.
const OPT_SUMMARY_PRINT_INDENT1: &str = "  ";
const OPT_SUMMARY_PRINT_INDENT2: &str = "      ";

/// The Compton edge of a photon of `energy` keV, the most energy it may
/// deposit in one Compton scatter, keV.
///
/// `E·(1 − 1/(1 + 2E/511))`
pub fn compton_edge(energy: f32) -> f32 {
    energy * (1.0 - 1.0 / (1.0 + 2.0 * energy / ELECTRON_REST_ENERGY_KEV))
}

/// print `value` normally if `predicate` returns `false`
/// else print `value` in color with the error color
fn eprintln_display_color_error<T, F>(
    value: &T,
    predicate: F,
    color_choice: &ColorChoice,
) where
    F: Fn(&T) -> bool,
    T: fmt::Display,
{
    if !predicate(value) {
        eprintln!("{}", value);
    } else {
        let data = format!("{}", value);
        _ = print_colored_stderr(COLOR_ERROR, Some(*color_choice), data.as_bytes());
        eprintln!();
    }
}

fn print_dimmed(
    s: &str,
    color_choice: &ColorChoice,
) {
    _ = print_colored_stderr(COLOR_DIMMED, Some(*color_choice), s.as_bytes());
}

fn print_runheader(
    runheader: &RunHeader,
    indent: &str,
    color_choice: &ColorChoice,
) {
    eprintln!("{}SimulationStartAreaFarField: {} (cm²)", indent, runheader.sim_start_area_far_field);
    eprintln!(
        "{}BeamType                   : {} theta {} phi {} (deg)",
        indent, runheader.beam_type, runheader.beam_theta, runheader.beam_phi
    );
    eprint!(
        "{}SpectralType               : {} {} (keV) ",
        indent, runheader.spectral_type, runheader.spectral_energy
    );
    print_dimmed(
        &format!("(Compton edge {} keV)", compton_edge(runheader.spectral_energy)),
        color_choice,
    );
    eprintln!();
}

/// Print the [`Summary`] (multiple lines) of one decoded event log to
/// stderr.
///
/// [`Summary`]: crate::readers::summary::Summary
pub fn print_summary(
    summary: &Summary,
    color_choice: &ColorChoice,
) {
    defñ!("({:?})", summary.path);
    let indent1 = OPT_SUMMARY_PRINT_INDENT1;
    let indent2 = OPT_SUMMARY_PRINT_INDENT2;
    eprintln!("File: {}", summary.path);
    if let Some(error) = &summary.error {
        eprint!("{}Error: ", indent1);
        eprintln_display_color_error(error, |_| true, color_choice);
        return;
    }
    let lr = &summary.linereader;
    let ed = &summary.eventdecoder;
    eprintln!("{}lines         : {}", indent1, lr.LineReader_lines);
    eprintln!("{}bytes         : {1} (0x{1:X})", indent1, lr.LineReader_bytes);
    eprint!("{}lines bad UTF-8: ", indent1);
    eprintln_display_color_error(&lr.LineReader_lines_invalid_utf8, |count| *count != 0, color_choice);
    eprint!("{}lines skipped : ", indent1);
    eprintln_display_color_error(&ed.EventDecoder_lines_skipped, |count| *count != 0, color_choice);
    eprintln!("{}lines ignored : {}", indent1, ed.EventDecoder_lines_ignored);
    eprintln!("{}TB lines      : {}", indent1, ed.EventDecoder_tb_seen);
    eprint!("{}EN line       : ", indent1);
    eprintln_display_color_error(&ed.EventDecoder_en_seen, |seen| !*seen, color_choice);
    eprintln!("{}events        : {}", indent1, ed.EventDecoder_events_committed);
    eprintln!("{}events dropped (TriggerID 0): {}", indent2, ed.EventDecoder_trigger_zero_dropped);
    eprint!("{}events pending at end      : ", indent2);
    eprintln_display_color_error(&ed.EventDecoder_events_discarded_eof, |count| *count != 0, color_choice);
    eprintln!("{}interactions  : {}", indent1, ed.EventDecoder_interactions);
    eprintln!("{}hits          : {}", indent1, ed.EventDecoder_hits);
    match &ed.EventDecoder_runheader_at_tb {
        Some(runheader) => {
            eprintln!("{}RunHeader at TB:", indent1);
            print_runheader(runheader, indent2, color_choice);
        }
        None => {
            eprint!("{}RunHeader at TB: ", indent1);
            eprintln_display_color_error(&"no TB line", |_| true, color_choice);
        }
    }
}
