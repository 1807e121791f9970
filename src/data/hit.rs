// src/data/hit.rs

//! Implement [`HitRecord`], one `HTsim` line of an event.

use crate::data::geometry::{layer_of, LayerIndex};
use crate::data::interaction::InteractionIndex;

use std::fmt;

/// Sequence of [`HitRecord`] within one event, in order of the `HTsim`
/// lines.
pub type HitRecords = Vec<HitRecord>;

/// Sequence of [`InteractionRecord::index`] values.
///
/// [`InteractionRecord::index`]: crate::data::interaction::InteractionRecord::index
pub type PrimaryParticleIds = Vec<InteractionIndex>;

/// [`HitRecord::index`] value of a tracker hit.
pub const HIT_INDEX_TRACKER: i32 = 1;
/// [`HitRecord::index`] value of a calorimeter hit.
pub const HIT_INDEX_CALORIMETER: i32 = 2;

/// Number of `;`-separated scalar fields at the beginning of an `HTsim`
/// line, before the primary particle IDs.
pub const HTSIM_FIELD_COUNT: usize = 6;

/// The detector region of a hit, classified by [`HitRecord::index`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HitRegion {
    /// `index == 1`
    Tracker,
    /// `index == 2`
    Calorimeter,
    /// any other `index`
    Unclassified,
}

/// An energy deposit recorded at a detector position, decoded from an
/// `HTsim` line.
///
/// ```text
/// HTsim 1;0.0;0.0;5.0;12.5;0.000001;7;9;
/// ```
///
/// [`HTSIM_FIELD_COUNT`] scalars (`Index`, `X`, `Y`, `Z`, `EnergyDeposit`,
/// `Time`) are followed by zero or more primary particle IDs.
///
/// A `HitRecord` is owned by its [`EventRecord`] and is not modified after
/// it is appended.
///
/// [`EventRecord`]: crate::data::event::EventRecord
#[derive(Clone, Default, PartialEq)]
pub struct HitRecord {
    /// Detector region tag, see [`HitRegion`].
    pub index: i32,
    /// cm
    pub x: f32,
    /// cm
    pub y: f32,
    /// cm
    pub z: f32,
    /// keV
    pub energy_deposit: f32,
    /// seconds
    pub time: f64,
    /// Count of `primary_particle_ids`.
    pub multiplicity: i32,
    /// The [`InteractionRecord::index`] of interactions within the same
    /// event that contributed to this hit. May be empty.
    ///
    /// [`InteractionRecord::index`]: crate::data::interaction::InteractionRecord::index
    pub primary_particle_ids: PrimaryParticleIds,
}

impl fmt::Debug for HitRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("HitRecord")
            .field("Index", &self.index)
            .field("XYZ", &(self.x, self.y, self.z))
            .field("EnergyDeposit", &self.energy_deposit)
            .field("Time", &self.time)
            .field("Multiplicity", &self.multiplicity)
            .field("PrimaryParticleIDs", &self.primary_particle_ids)
            .finish()
    }
}

impl HitRecord {
    /// The detector region of this hit.
    pub const fn region(&self) -> HitRegion {
        match self.index {
            HIT_INDEX_TRACKER => HitRegion::Tracker,
            HIT_INDEX_CALORIMETER => HitRegion::Calorimeter,
            _ => HitRegion::Unclassified,
        }
    }

    /// Is this a tracker hit (`index == 1`)?
    pub const fn is_tracker(&self) -> bool {
        self.index == HIT_INDEX_TRACKER
    }

    /// The tracker layer of this hit, derived from `z`.
    /// Not stored; computed on each call.
    pub fn layer(&self) -> LayerIndex {
        layer_of(self.z)
    }

    /// Append a primary particle ID, keeping `multiplicity` equal to the
    /// count of IDs.
    pub(crate) fn push_primary_particle_id(&mut self, id: InteractionIndex) {
        self.primary_particle_ids.push(id);
        self.multiplicity = self.primary_particle_ids.len() as i32;
    }
}
