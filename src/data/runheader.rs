// src/data/runheader.rs

//! Implement [`RunHeader`], the simulation-wide metadata of a decoded stream.

use std::fmt;

/// Simulation-wide metadata.
///
/// Assembled from the header lines
///
/// ```text
/// SimulationStartAreaFarField 78.54
/// BeamType FarFieldPointSource 0 0
/// SpectralType Mono 511
/// ```
///
/// There is exactly one `RunHeader` per decoded stream. A header line
/// overwrites any earlier value of the same fields (last write wins).
/// Header lines are accepted before and after the `TB` line.
///
/// A `RunHeader` is never "finalized"; its values are whatever was last
/// assigned at the time it is read. Fields never assigned remain zero or
/// empty.
#[derive(Clone, Default, PartialEq)]
pub struct RunHeader {
    /// `SimulationStartAreaFarField`, area of the far-field start disk
    /// (cm²).
    pub sim_start_area_far_field: f32,
    /// `BeamType` first field, e.g. `FarFieldPointSource`.
    pub beam_type: String,
    /// `BeamType` second field, beam theta (deg).
    pub beam_theta: f32,
    /// `BeamType` third field, beam phi (deg).
    pub beam_phi: f32,
    /// `SpectralType` first field, e.g. `Mono`.
    pub spectral_type: String,
    /// `SpectralType` second field, spectral energy (keV).
    pub spectral_energy: f32,
}

impl fmt::Debug for RunHeader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("RunHeader")
            .field("SimStartAreaFarField", &self.sim_start_area_far_field)
            .field("BeamType", &self.beam_type)
            .field("BeamTheta", &self.beam_theta)
            .field("BeamPhi", &self.beam_phi)
            .field("SpectralType", &self.spectral_type)
            .field("SpectralEnergy", &self.spectral_energy)
            .finish()
    }
}

/// One line, values separated by three spaces, in the order of the
/// header tags.
impl fmt::Display for RunHeader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(
            f,
            "{}   {}   {}   {}   {}   {}",
            self.sim_start_area_far_field,
            self.beam_type,
            self.beam_theta,
            self.beam_phi,
            self.spectral_type,
            self.spectral_energy,
        )
    }
}

impl RunHeader {
    pub fn new() -> RunHeader {
        RunHeader::default()
    }

    /// Has any `BeamType` been assigned?
    pub fn has_beam(&self) -> bool {
        !self.beam_type.is_empty()
    }

    /// Has any `SpectralType` been assigned?
    pub fn has_spectrum(&self) -> bool {
        !self.spectral_type.is_empty()
    }
}
