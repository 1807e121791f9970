// src/bin/simev.rs

//! Driver program _simev_ drives the [_simlib_].
//!
//! Processes user-passed command-line arguments.
//! Then decodes each `.sim` event log path passed, one after another, using
//! an [`EventDecoder`] instance. The path `-` decodes standard input.
//!
//! The committed events of each file are passed to an [`EventSelector`].
//! The selected EventIDs are printed to STDOUT.
//!
//! If passed CLI option `--summary`, a [`Summary`] of each decoded file is
//! printed to STDERR.
//!
//! [_simlib_]: simlib
//! [`EventDecoder`]: simlib::readers::eventdecoder::EventDecoder
//! [`EventSelector`]: simlib::selectors::eventselector::EventSelector
//! [`Summary`]: simlib::readers::summary::Summary

#![allow(non_camel_case_types)]

// first setup the custom global allocator
use ::simlib::common::AllocatorChosen;

cfg_if::cfg_if! {
    if #[cfg(feature = "jemalloc")] {
        use ::tikv_jemallocator::Jemalloc;
        #[global_allocator]
        static GLOBAL: Jemalloc = Jemalloc;
        const ALLOCATOR_CHOSEN: AllocatorChosen = AllocatorChosen::Jemalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "jemalloc";
    }
    else if #[cfg(feature = "mimalloc")] {
        use ::mimalloc::MiMalloc;
        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
        const ALLOCATOR_CHOSEN: AllocatorChosen = AllocatorChosen::Mimalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "mimalloc";
    }
    else {
        const ALLOCATOR_CHOSEN: AllocatorChosen = AllocatorChosen::System;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "system";
    }
}

use std::io::{Result, Write};
use std::process::ExitCode;

use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use ::simlib::common::{Count, FPath, FPaths, FPATH_STDIN};
use ::simlib::data::event::EventIds;
use ::simlib::data::geometry::{layer_z_range, LayerIndex, LAYER_COUNT};
use ::simlib::debug::printers::{e_err, e_wrn};
use ::simlib::printer::printers::{
    write_event_ids,
    write_file_header,
    write_runheader,
    ColorChoice,
};
use ::simlib::printer::summary::print_summary;
use ::simlib::readers::eventdecoder::{
    decode_path,
    DecodedLog,
    DecoderConfig,
    EventDecoder,
    PartialRecordPolicy,
    TriggerZeroPolicy,
};
use ::simlib::readers::summary::Summary;
use ::simlib::selectors::eventselector::{EventSelector, EventSelectorConfig, SelectionMode};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// CLI enum that maps to [`SelectionMode`].
///
/// [`SelectionMode`]: simlib::selectors::eventselector::SelectionMode
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CLI_Mode {
    /// select events with a hit energy deposit within `--emin` and `--emax`
    energy,
    /// select events with a hit in tracker layer `--layer`
    layer,
}

/// CLI enum that maps to [`TriggerZeroPolicy`].
///
/// [`TriggerZeroPolicy`]: simlib::readers::eventdecoder::TriggerZeroPolicy
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CLI_Trigger_Zero {
    drop,
    commit,
}

/// CLI enum that maps to [`PartialRecordPolicy`].
///
/// [`PartialRecordPolicy`]: simlib::readers::eventdecoder::PartialRecordPolicy
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CLI_Partial_Records {
    keep,
    discard,
}

#[cfg(debug_assertions)]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "\nDEBUG BUILD";
#[cfg(not(debug_assertions))]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "";

/// `--help` _afterword_ message.
const CLI_HELP_AFTER: &str = concatcp!(
    "\
Each PATH is decoded as a .sim event log. Pass \"-\" to decode standard input.

Tracker layers are numbered 1 (top, Z > 11.5 cm) to 10, each 1.5 cm thick.
Layer N holds Z in (11.5 - N*1.5, 11.5 - (N-1)*1.5] cm.
A Z at or below -2.0 cm is in no layer.

An event with TriggerID 0 is never selected unless passed
\"--trigger-zero commit\".

---

Version: ", env!("CARGO_PKG_VERSION"), "
MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "
Allocator: ", CLI_HELP_AFTER_ALLOCATOR, "
License: ", env!("CARGO_PKG_LICENSE"), "
Author: ", env!("CARGO_PKG_AUTHORS"), "
",
    CLI_HELP_AFTER_NOTE_DEBUG,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "simev",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(Simulation Event Reader)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "Allocator: ", CLI_HELP_AFTER_ALLOCATOR , "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path(s) of .sim event log files.
    /// Pass "-" to read an event log from STDIN.
    #[clap(required = true, verbatim_doc_comment)]
    paths: Vec<String>,

    /// Selection mode.
    #[clap(
        short = 'm',
        long,
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Mode::energy,
    )]
    mode: CLI_Mode,

    /// Energy range bound (keV) for "--mode energy".
    /// The bounds may be passed in either order; both are inclusive.
    #[clap(long, verbatim_doc_comment, default_value_t = 0.0)]
    emin: f32,

    /// Energy range bound (keV) for "--mode energy".
    #[clap(long, verbatim_doc_comment, default_value_t = 0.0)]
    emax: f32,

    /// Tracker layer for "--mode layer".
    #[clap(
        short = 'l',
        long,
        verbatim_doc_comment,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=(LAYER_COUNT as i64)),
    )]
    layer: LayerIndex,

    /// Consider every hit. By default only tracker hits (hit Index 1) are
    /// considered.
    #[clap(long, verbatim_doc_comment)]
    all_hits: bool,

    /// Print an EventID for every selected event, even if the EventID was
    /// already printed.
    #[clap(long, verbatim_doc_comment)]
    keep_duplicates: bool,

    /// What to do with an event with TriggerID 0.
    /// "drop" never commits such an event.
    /// "commit" commits such an event if an ID line assigned TriggerID 0.
    #[clap(
        long,
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Trigger_Zero::drop,
    )]
    trigger_zero: CLI_Trigger_Zero,

    /// What to do with an IA or HTsim line that could only be partially
    /// decoded.
    /// "keep" appends the record with undecoded fields set to zero.
    /// "discard" does not append the record.
    #[clap(
        long,
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Partial_Records::keep,
    )]
    partial_records: CLI_Partial_Records,

    /// Select events on up to this many threads.
    /// Never more threads than the available parallelism.
    #[clap(
        short = 'p',
        long,
        verbatim_doc_comment,
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..),
    )]
    partitions: u16,

    /// Print the decoded run header of each file.
    #[clap(short = 'r', long, verbatim_doc_comment)]
    run_header: bool,

    /// Print a summary of decoding each file to STDERR.
    #[clap(short = 's', long, verbatim_doc_comment)]
    summary: bool,

    /// Choose to print to terminal using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,
}

/// Processed command-line arguments.
#[derive(Debug)]
struct CLI_Settings {
    paths: FPaths,
    decoderconfig: DecoderConfig,
    selectorconfig: EventSelectorConfig,
    partitions: usize,
    run_header: bool,
    summary: bool,
    color_choice: ColorChoice,
}

/// Process the user-passed command-line arguments.
fn cli_process_args() -> CLI_Settings {
    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    let mode: SelectionMode = match args.mode {
        CLI_Mode::energy => SelectionMode::EnergyRange {
            min: args.emin,
            max: args.emax,
        },
        CLI_Mode::layer => SelectionMode::Layer(args.layer),
    };
    let decoderconfig = DecoderConfig {
        trigger_zero: match args.trigger_zero {
            CLI_Trigger_Zero::drop => TriggerZeroPolicy::Drop,
            CLI_Trigger_Zero::commit => TriggerZeroPolicy::Commit,
        },
        partial_records: match args.partial_records {
            CLI_Partial_Records::keep => PartialRecordPolicy::Keep,
            CLI_Partial_Records::discard => PartialRecordPolicy::Discard,
        },
    };
    let selectorconfig = EventSelectorConfig {
        mode,
        require_hit_index1: !args.all_hits,
        unique_event_ids: !args.keep_duplicates,
    };
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };

    CLI_Settings {
        paths: args.paths,
        decoderconfig,
        selectorconfig,
        partitions: args.partitions as usize,
        run_header: args.run_header,
        summary: args.summary,
        color_choice,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// processing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Decode the event log at `path`, or STDIN if `path` is `"-"`.
fn decode(
    path: &FPath,
    config: DecoderConfig,
) -> Result<DecodedLog> {
    if path.as_str() == FPATH_STDIN {
        let stdin = std::io::stdin();
        return EventDecoder::new(stdin.lock(), path.clone(), config).decode_all();
    }

    decode_path(path, config)
}

/// Write the output of one decoded file to STDOUT.
fn print_decoded(
    path: &FPath,
    decoded: &DecodedLog,
    ids: &EventIds,
    settings: &CLI_Settings,
) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if settings.paths.len() > 1 {
        write_file_header(&mut stdout, path)?;
    }
    if settings.run_header {
        write_runheader(&mut stdout, &decoded.runheader)?;
    }
    write_event_ids(&mut stdout, ids)?;

    stdout.flush()
}

pub fn main() -> ExitCode {
    defn!();
    let settings = cli_process_args();

    let selector = EventSelector::new(settings.selectorconfig);
    if settings.summary {
        if let SelectionMode::Layer(layer) = settings.selectorconfig.mode {
            if let Some((low, high)) = layer_z_range(layer) {
                eprintln!("Selecting layer {}: Z in ({}, {}] cm", layer, low, high);
            }
        } else {
            eprintln!("Selecting {}", settings.selectorconfig.mode);
        }
    }

    let mut files_failed: Count = 0;
    for path in settings.paths.iter() {
        defo!("path {:?}", path);
        let decoded: DecodedLog = match decode(path, settings.decoderconfig) {
            Ok(val) => val,
            Err(err) => {
                e_err!("{}", err);
                files_failed += 1;
                if settings.summary {
                    print_summary(&Summary::new_failed(path.clone(), Some(err.to_string())), &settings.color_choice);
                }
                continue;
            }
        };
        if decoded.events.is_empty() {
            e_wrn!("no events decoded from {:?}", path);
        }
        let ids: EventIds = selector.select_partitioned(&decoded.events, settings.partitions);
        if let Err(err) = print_decoded(path, &decoded, &ids, &settings) {
            // e.g. STDOUT closed by `simev | head`
            defo!("print_decoded error {}", err);
            if err.kind() != std::io::ErrorKind::BrokenPipe {
                e_err!("{}", err);
                files_failed += 1;
            }
            break;
        }
        if settings.summary {
            print_summary(&decoded.summary, &settings.color_choice);
        }
    }

    if settings.summary {
        eprintln!();
        eprintln!("Files failed: {} of {}", files_failed, settings.paths.len());
        eprintln!("Allocator: {:?}", ALLOCATOR_CHOSEN);
    }
    defx!("files_failed {}", files_failed);
    if files_failed != 0 {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
