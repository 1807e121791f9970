// src/tests/common.rs

//! Common fixtures for tests.

#![allow(non_upper_case_globals)]

use crate::common::FPath;
use crate::debug::helpers::{create_temp_file, ntf_fpath, NamedTempFile};
use crate::readers::eventdecoder::{decode_str, DecodedLog, DecoderConfig};

use ::lazy_static::lazy_static;

/// Header lines of a typical event log.
pub const SIM_HEADER: &str = "\
SimulationStartAreaFarField 78.54
BeamType FarFieldPointSource 0 0
SpectralType Mono 511
";

/// An `IA` line with all fields, mostly zero.
pub const IA_INIT: &str = "IA INIT 1;0;0;0.0;0;0;0;0;0;0;0;0;0;0;0;1;0;0;0;0;0;-1;511";

/// An `IA` line with all fields, all distinct.
pub const IA_COMP: &str =
    "IA COMP 2;1;3;1.5e-9;0.5;-0.25;9.0;1;0;0;-1;0;0;-1;511;1;0.1;0.2;-0.9;0.1;0.2;-0.97;340.5";

/// Three events, EventIDs 1, 7, 12.
///
/// | EventID | hit Index | Z    | layer | EnergyDeposit |
/// |---------|-----------|------|-------|---------------|
/// | 1       | 1         | 9.0  | 3     | 75            |
/// | 1       | 2         | -5.0 | 0     | 90            |
/// | 7       | 1         | 5.0  | 6     | 12.5          |
/// | 12      | 1         | 12.0 | 1     | 150           |
pub const SIM_BASIC: &str = "\
Version 1
SimulationStartAreaFarField 78.54
BeamType FarFieldPointSource 0 0
SpectralType Mono 511
TB
SE
ID 1 1
TI 0.000123
ED 511
EC 0
NS 0
PM Copper 12.1
IA INIT 1;0;0;0.0;0;0;0;0;0;0;0;0;0;0;0;1;0;0;0;0;0;-1;511
IA COMP 2;1;3;1.5e-9;0.5;-0.25;9.0;1;0;0;-1;0;0;-1;511;1;0.1;0.2;-0.9;0.1;0.2;-0.97;340.5
HTsim 1;0.0;0.0;9.0;75;0.000001;2;
HTsim 2;0.0;0.0;-5.0;90;0.000002;2;
SE
ID 2 7
HTsim 1;1.0;1.0;5.0;12.5;0.000001;7;9;
SE
ID 3 12
HTsim 1;0.0;0.0;12.0;150;0.000001;
EN
";

/// Lines in [`SIM_BASIC`].
pub const SIM_BASIC_LINES: u64 = 23;

/// Two events sharing EventID 5, both with a tracker hit of 60 keV, then
/// EventID 6 with a tracker hit of 70 keV.
pub const SIM_DUPLICATE_IDS: &str = "\
TB
SE
ID 1 5
HTsim 1;0;0;3.0;60;0;
SE
ID 2 5
HTsim 1;0;0;3.0;60;0;
SE
ID 3 6
HTsim 1;0;0;3.0;70;0;
EN
";

/// Create an event log of `count` events with TriggerID and EventID
/// `1..=count`, each with one tracker hit at Z 9.0 with `EnergyDeposit`
/// equal to the EventID.
pub fn sim_generate(count: usize) -> String {
    let mut data = String::from(SIM_HEADER);
    data.push_str("TB\n");
    for i in 1..=count {
        data.push_str(&format!("SE\nID {0} {0}\nHTsim 1;0;0;9.0;{0};0;\n", i));
    }
    data.push_str("EN\n");

    data
}

/// Decode `data` with the default `DecoderConfig`.
pub fn decode_default(data: &str) -> DecodedLog {
    match decode_str(data, DecoderConfig::default()) {
        Ok(val) => val,
        Err(err) => {
            panic!("decode_str() returned Err {}", err);
        }
    }
}

lazy_static! {
    pub static ref NTF_SIM_BASIC: NamedTempFile = create_temp_file(SIM_BASIC);
    pub static ref NTF_SIM_BASIC_path: FPath = ntf_fpath(&NTF_SIM_BASIC);
    pub static ref NTF_SIM_EMPTY: NamedTempFile = create_temp_file("");
    pub static ref NTF_SIM_EMPTY_path: FPath = ntf_fpath(&NTF_SIM_EMPTY);
}
