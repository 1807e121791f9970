// src/data/event.rs

//! Implement [`EventRecord`], one simulated event and its interactions and
//! hits.

use crate::data::hit::{HitRecord, HitRecords};
use crate::data::interaction::{InteractionIndex, InteractionRecord, InteractionRecords};

use std::fmt;
use std::sync::Arc;

/// The `TriggerID` of an event.
pub type TriggerId = i32;

/// The `EventID` of an event.
pub type EventId = i32;

/// Sequence of [`EventId`], e.g. the result of an event selection.
pub type EventIds = Vec<EventId>;

/// `TriggerID` value meaning "no event accumulated".
///
/// An event carrying this `TriggerID` is not committed by an
/// [`EventDecoder`] using the default [`TriggerZeroPolicy::Drop`].
///
/// [`EventDecoder`]: crate::readers::eventdecoder::EventDecoder
/// [`TriggerZeroPolicy::Drop`]: crate::readers::eventdecoder::TriggerZeroPolicy::Drop
pub const TRIGGER_ID_NONE: TriggerId = 0;

/// Thread-safe [Atomic Reference Counting pointer] to a committed
/// [`EventRecord`].
///
/// [Atomic Reference Counting pointer]: std::sync::Arc
pub type EventRecordP = Arc<EventRecord>;

/// Sequence of committed [`EventRecord`], in input order.
pub type EventRecords = Vec<EventRecordP>;

/// One simulated event: the lines between two `SE` lines (or an `SE` line
/// and the `EN` line).
///
/// ```text
/// SE
/// ID 1 1
/// TI 0.000123
/// ED 511
/// EC 0
/// NS 0
/// PM Copper 12.1
/// IA INIT 1;0;0;0;...
/// HTsim 1;0.0;0.0;5.0;12.5;0.000001;7;9;
/// ```
///
/// An `EventRecord` is created by the [`EventDecoder`] and modified
/// line-by-line until it is committed. Once committed it is shared as an
/// [`EventRecordP`] and never modified again.
///
/// [`EventDecoder`]: crate::readers::eventdecoder::EventDecoder
#[derive(Clone, Default, PartialEq)]
pub struct EventRecord {
    /// `ID` first field.
    pub trigger_id: TriggerId,
    /// `ID` second field.
    pub event_id: EventId,
    /// `TI`, seconds
    pub initial_time: f64,
    /// `ED`, keV
    pub tot_deposited_energy: f32,
    /// `EC`, keV
    pub escaped_energy: f32,
    /// `NS`, energy deposited in non-sensitive material, keV
    pub ns_material_energy: f32,
    /// `PM` first field, e.g. `Copper`.
    pub physics_module_type: String,
    /// `PM` second field, keV
    pub physics_module_energy: f32,
    /// `IA` lines, append-only.
    pub interactions: InteractionRecords,
    /// `HTsim` lines, append-only.
    pub hits: HitRecords,
}

impl fmt::Debug for EventRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("EventRecord")
            .field("TriggerID", &self.trigger_id)
            .field("EventID", &self.event_id)
            .field("InitialTime", &self.initial_time)
            .field("TotDepositedEnergy", &self.tot_deposited_energy)
            .field("EscapedEnergy", &self.escaped_energy)
            .field("NSMaterialEnergy", &self.ns_material_energy)
            .field("PhysicsModuleType", &self.physics_module_type)
            .field("PhysicsModuleEnergy", &self.physics_module_energy)
            .field("interactions", &self.interactions.len())
            .field("hits", &self.hits.len())
            .finish()
    }
}

impl EventRecord {
    pub fn new() -> EventRecord {
        EventRecord::default()
    }

    /// Does this event carry the [`TRIGGER_ID_NONE`] sentinel?
    pub const fn is_trigger_none(&self) -> bool {
        self.trigger_id == TRIGGER_ID_NONE
    }

    /// Iterate the tracker hits (`index == 1`) of this event.
    pub fn tracker_hits(&self) -> impl Iterator<Item = &HitRecord> {
        self.hits.iter().filter(|hit| hit.is_tracker())
    }

    /// Find the first interaction with `index`.
    pub fn interaction(&self, index: InteractionIndex) -> Option<&InteractionRecord> {
        self.interactions.iter().find(|ia| ia.index == index)
    }

    /// Find the parent interaction of `interaction`, if any.
    pub fn parent_of(&self, interaction: &InteractionRecord) -> Option<&InteractionRecord> {
        if !interaction.has_parent() {
            return None;
        }
        self.interaction(interaction.parent_interaction_id)
    }

    /// Resolve the [`primary_particle_ids`] of `hit` to interactions of this
    /// event. IDs without a matching interaction are skipped.
    ///
    /// [`primary_particle_ids`]: crate::data::hit::HitRecord::primary_particle_ids
    pub fn primaries_of<'a>(&'a self, hit: &'a HitRecord) -> impl Iterator<Item = &'a InteractionRecord> + 'a {
        hit.primary_particle_ids
            .iter()
            .filter_map(move |id| self.interaction(*id))
    }
}
