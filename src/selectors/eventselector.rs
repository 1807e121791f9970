// src/selectors/eventselector.rs

//! Implements an [`EventSelector`], a query over committed
//! [`EventRecord`s] returning the [`EventId`] of each matching event.
//!
//! [`EventRecord`s]: crate::data::event::EventRecord
//! [`EventId`]: crate::data::event::EventId

use crate::common::debug_panic;
use crate::data::event::{EventRecord, EventIds};
use crate::data::geometry::{LayerIndex, LAYER_COUNT, LAYER_NONE};
use crate::data::hit::HitRecord;
use crate::de_wrn;

use std::borrow::Borrow;
use std::fmt;
use std::thread;

use ::itertools::Itertools;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// The condition a qualifying hit must meet for its event to match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionMode {
    /// The hit `energy_deposit` is within the range, inclusive of both
    /// bounds. The bounds may be given in either order.
    EnergyRange { min: f32, max: f32 },
    /// The hit is in the tracker layer, see [`layer_of`].
    ///
    /// [`layer_of`]: crate::data::geometry::layer_of
    Layer(LayerIndex),
}

impl Default for SelectionMode {
    fn default() -> Self {
        SelectionMode::EnergyRange { min: 0.0, max: 0.0 }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            SelectionMode::EnergyRange { min, max } => write!(f, "energy range [{}, {}] keV", min, max),
            SelectionMode::Layer(layer) => write!(f, "layer {}", layer),
        }
    }
}

/// Settings of an [`EventSelector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventSelectorConfig {
    pub mode: SelectionMode,
    /// Only tracker hits (`index == 1`) qualify.
    pub require_hit_index1: bool,
    /// Return each `EventID` once, at its first occurrence.
    pub unique_event_ids: bool,
}

impl Default for EventSelectorConfig {
    fn default() -> Self {
        EventSelectorConfig {
            mode: SelectionMode::default(),
            require_hit_index1: true,
            unique_event_ids: true,
        }
    }
}

/// Selects the events with any qualifying hit meeting the
/// [`SelectionMode`].
///
/// The selector holds no state besides its configuration; events are only
/// read.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventSelector {
    config: EventSelectorConfig,
    /// Normalized `SelectionMode::EnergyRange` bounds.
    energy_lo: f32,
    energy_hi: f32,
}

impl EventSelector {
    pub fn new(config: EventSelectorConfig) -> EventSelector {
        defñ!("({:?})", config);
        let (energy_lo, energy_hi) = match config.mode {
            SelectionMode::EnergyRange { min, max } => (min.min(max), min.max(max)),
            SelectionMode::Layer(_layer) => {
                if _layer == LAYER_NONE || _layer > LAYER_COUNT {
                    de_wrn!("layer {} can never match a hit", _layer);
                }
                (0.0, 0.0)
            }
        };

        EventSelector {
            config,
            energy_lo,
            energy_hi,
        }
    }

    pub const fn config(&self) -> &EventSelectorConfig {
        &self.config
    }

    /// May `hit` be evaluated by [`hit_matches`]?
    ///
    /// [`hit_matches`]: self::EventSelector#method.hit_matches
    pub const fn hit_qualifies(
        &self,
        hit: &HitRecord,
    ) -> bool {
        !self.config.require_hit_index1 || hit.is_tracker()
    }

    /// Does `hit` meet the [`SelectionMode`]? Does not check
    /// [`hit_qualifies`].
    ///
    /// [`hit_qualifies`]: self::EventSelector#method.hit_qualifies
    pub fn hit_matches(
        &self,
        hit: &HitRecord,
    ) -> bool {
        match self.config.mode {
            SelectionMode::EnergyRange { .. } => {
                self.energy_lo <= hit.energy_deposit && hit.energy_deposit <= self.energy_hi
            }
            SelectionMode::Layer(layer) => hit.layer() == layer,
        }
    }

    /// Does any qualifying hit of `event` meet the [`SelectionMode`]?
    pub fn event_matches(
        &self,
        event: &EventRecord,
    ) -> bool {
        event
            .hits
            .iter()
            .any(|hit| self.hit_qualifies(hit) && self.hit_matches(hit))
    }

    /// The `EventID` of each matching event, in order of `events`.
    pub fn select<T: Borrow<EventRecord>>(
        &self,
        events: &[T],
    ) -> EventIds {
        defn!("({} events)", events.len());
        let ids: EventIds = self.scan(events);
        let ids = self.finish(ids);
        defx!("return {} EventIDs", ids.len());

        ids
    }

    /// As [`select`], where absent `events` select nothing.
    ///
    /// [`select`]: self::EventSelector#method.select
    pub fn select_opt<T: Borrow<EventRecord>>(
        &self,
        events: Option<&[T]>,
    ) -> EventIds {
        match events {
            Some(events) => self.select(events),
            None => EventIds::new(),
        }
    }

    /// As [`select`], scanning `events` in up to `partitions` contiguous
    /// partitions, each on its own thread. The count of partitions is capped
    /// by [`partition_count`].
    ///
    /// Partition results are merged in the order of `events` before any
    /// de-duplication so the result equals that of `select`.
    ///
    /// [`select`]: self::EventSelector#method.select
    pub fn select_partitioned<T: Borrow<EventRecord> + Sync>(
        &self,
        events: &[T],
        partitions: usize,
    ) -> EventIds {
        defn!("({} events, {} partitions)", events.len(), partitions);
        let partitions: usize = partition_count(events.len(), partitions);
        if partitions <= 1 {
            defx!("one partition");
            return self.select(events);
        }
        let chunk_size: usize = events.len().div_ceil(partitions);
        let chunk_count: usize = events.len().div_ceil(chunk_size);
        let mut results: Vec<Option<EventIds>> = vec![None; chunk_count];

        thread::scope(|scope| {
            let (chan_send, chan_recv) = ::crossbeam_channel::bounded::<(usize, EventIds)>(chunk_count);
            for (index, chunk) in events.chunks(chunk_size).enumerate() {
                let chan_send = chan_send.clone();
                let spawned = thread::Builder::new()
                    .name(format!("select-{}", index))
                    .spawn_scoped(scope, move || {
                        let ids = self.scan(chunk);
                        if let Err(_err) = chan_send.send((index, ids)) {
                            de_wrn!("partition {} send failed: {}", index, _err);
                        }
                    });
                if let Err(_err) = spawned {
                    de_wrn!("partition {} thread spawn failed: {}; scan on this thread", index, _err);
                    results[index] = Some(self.scan(chunk));
                }
            }
            // all senders are held by the partition threads
            drop(chan_send);
            for (index, ids) in chan_recv.iter() {
                defo!("partition {} returned {} EventIDs", index, ids.len());
                results[index] = Some(ids);
            }
        });

        if results.iter().any(Option::is_none) {
            debug_panic!("a partition of {} did not return a result", chunk_count);
        }
        let ids: EventIds = results
            .into_iter()
            .flatten()
            .flatten()
            .collect();
        let ids = self.finish(ids);
        defx!("return {} EventIDs", ids.len());

        ids
    }

    /// The `EventID` of each matching event, not de-duplicated.
    fn scan<T: Borrow<EventRecord>>(
        &self,
        events: &[T],
    ) -> EventIds {
        events
            .iter()
            .map(Borrow::<EventRecord>::borrow)
            .filter(|event| self.event_matches(event))
            .map(|event| event.event_id)
            .collect()
    }

    fn finish(
        &self,
        ids: EventIds,
    ) -> EventIds {
        if !self.config.unique_event_ids {
            return ids;
        }

        ids.into_iter().unique().collect()
    }
}

/// The count of partitions to scan `count` events in when `partitions`
/// are requested. Never more than `count` or the available parallelism of
/// this host, never less than `1`.
pub fn partition_count(
    count: usize,
    partitions: usize,
) -> usize {
    let parallelism: usize = match thread::available_parallelism() {
        Ok(val) => val.get(),
        Err(_err) => {
            de_wrn!("available_parallelism() returned Err {}", _err);
            1
        }
    };
    let count_: usize = partitions.min(parallelism).min(count).max(1);
    defñ!("({}, {}) parallelism {} return {}", count, partitions, parallelism, count_);

    count_
}
