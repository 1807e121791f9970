// src/data/interaction.rs

//! Implement [`InteractionRecord`], one `IA` line of an event.

use std::fmt;

/// Sequence of [`InteractionRecord`] within one event, in order of the `IA`
/// lines.
pub type InteractionRecords = Vec<InteractionRecord>;

/// The per-event identity of an interaction, see
/// [`InteractionRecord::index`].
pub type InteractionIndex = i32;

/// A simulated physical process, e.g. a Compton scatter (`COMP`) or
/// photo-absorption (`PHOT`), decoded from an `IA` line.
///
/// ```text
/// IA COMP 2;1;4;1.2e-09;0.1;0.2;5.5;1;0;0;1;0;0;-1;511;1;0;0;1;0;0;-1;400
/// ```
///
/// The first token after the tag is the [`interaction_type`]; then
/// [`IA_FIELD_COUNT`] `;`-separated scalars in the order of the fields
/// of this struct.
///
/// Interactions form a causal chain through
/// [`parent_interaction_id`]; the [`index`] is unique within one event.
/// An `InteractionRecord` is owned by its [`EventRecord`] and is not
/// modified after it is appended.
///
/// [`interaction_type`]: InteractionRecord::interaction_type
/// [`parent_interaction_id`]: InteractionRecord::parent_interaction_id
/// [`index`]: InteractionRecord::index
/// [`EventRecord`]: crate::data::event::EventRecord
#[derive(Clone, Default, PartialEq)]
pub struct InteractionRecord {
    /// Interaction type tag, e.g. `INIT`, `COMP`, `PHOT`, `ESCP`.
    pub interaction_type: String,
    /// Identity within the event, for parent/child linkage.
    pub index: InteractionIndex,
    /// `index` of the parent interaction; `<= 0` means "no parent".
    pub parent_interaction_id: InteractionIndex,
    pub detector_id: i32,
    /// seconds
    pub time: f64,
    /// cm
    pub x: f32,
    /// cm
    pub y: f32,
    /// cm
    pub z: f32,
    pub mother_particle_code: i32,
    pub px_in: f32,
    pub py_in: f32,
    pub pz_in: f32,
    pub dx_in: f32,
    pub dy_in: f32,
    pub dz_in: f32,
    /// keV
    pub energy_in: f32,
    pub outgoing_particle_code: i32,
    pub px_out: f32,
    pub py_out: f32,
    pub pz_out: f32,
    pub dx_out: f32,
    pub dy_out: f32,
    pub dz_out: f32,
    /// keV
    pub energy_out: f32,
}

/// Number of `;`-separated scalar fields following the type token of an
/// `IA` line.
pub const IA_FIELD_COUNT: usize = 23;

impl fmt::Debug for InteractionRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("InteractionRecord")
            .field("Type", &self.interaction_type)
            .field("Index", &self.index)
            .field("ParentInteractionID", &self.parent_interaction_id)
            .field("DetectorID", &self.detector_id)
            .field("Time", &self.time)
            .field("XYZ", &(self.x, self.y, self.z))
            .field("MotherParticleCode", &self.mother_particle_code)
            .field("P_in", &(self.px_in, self.py_in, self.pz_in))
            .field("D_in", &(self.dx_in, self.dy_in, self.dz_in))
            .field("Energy_in", &self.energy_in)
            .field("OutgoingParticleCode", &self.outgoing_particle_code)
            .field("P_out", &(self.px_out, self.py_out, self.pz_out))
            .field("D_out", &(self.dx_out, self.dy_out, self.dz_out))
            .field("Energy_out", &self.energy_out)
            .finish()
    }
}

impl InteractionRecord {
    /// Does this interaction have a parent interaction?
    pub fn has_parent(&self) -> bool {
        self.parent_interaction_id > 0
    }

    /// Energy lost in this interaction, `energy_in - energy_out` (keV).
    pub fn energy_transfer(&self) -> f32 {
        self.energy_in - self.energy_out
    }
}
