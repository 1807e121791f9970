// src/tests/eventselector_tests.rs

use crate::data::event::{EventIds, EventRecord, EventRecordP};
use crate::data::geometry::LayerIndex;
use crate::data::hit::{HitRecord, HIT_INDEX_CALORIMETER, HIT_INDEX_TRACKER};
use crate::selectors::eventselector::{partition_count, EventSelector, EventSelectorConfig, SelectionMode};
use crate::tests::common::{decode_default, sim_generate, SIM_BASIC, SIM_DUPLICATE_IDS};

use std::sync::Arc;
use std::thread;

use ::lazy_static::lazy_static;
use ::more_asserts::{assert_ge, assert_le};
use ::test_case::test_case;

lazy_static! {
    static ref EVENTS_BASIC: Vec<EventRecordP> = decode_default(SIM_BASIC).events;
    static ref EVENTS_DUPLICATE_IDS: Vec<EventRecordP> = decode_default(SIM_DUPLICATE_IDS).events;
}

fn selector(
    mode: SelectionMode,
    require_hit_index1: bool,
    unique_event_ids: bool,
) -> EventSelector {
    EventSelector::new(EventSelectorConfig {
        mode,
        require_hit_index1,
        unique_event_ids,
    })
}

fn energy_range(
    min: f32,
    max: f32,
) -> SelectionMode {
    SelectionMode::EnergyRange { min, max }
}

fn new_hit(
    index: i32,
    z: f32,
    energy_deposit: f32,
) -> HitRecord {
    HitRecord {
        index,
        z,
        energy_deposit,
        ..Default::default()
    }
}

fn new_event(
    event_id: i32,
    hits: Vec<HitRecord>,
) -> EventRecord {
    EventRecord {
        trigger_id: event_id,
        event_id,
        hits,
        ..Default::default()
    }
}

#[test]
fn test_selectionmode_default_display() {
    assert_eq!(SelectionMode::default(), energy_range(0.0, 0.0));
    assert_eq!(format!("{}", energy_range(50.0, 100.5)), "energy range [50, 100.5] keV");
    assert_eq!(format!("{}", SelectionMode::Layer(3)), "layer 3");

    let config = EventSelectorConfig::default();
    assert!(config.require_hit_index1);
    assert!(config.unique_event_ids);
}

#[test_case(50.0, 100.0, vec![1]; "hit 75")]
#[test_case(100.0, 50.0, vec![1]; "reversed bounds")]
#[test_case(75.0, 75.0, vec![1]; "bounds equal hit")]
#[test_case(0.0, 1000.0, vec![1, 7, 12]; "all")]
#[test_case(12.5, 12.5, vec![7]; "inclusive 12.5")]
#[test_case(150.0, 200.0, vec![12]; "inclusive low bound")]
#[test_case(80.0, 95.0, vec![]; "only calorimeter hit in range")]
#[test_case(1000.0, 2000.0, vec![]; "none")]
fn test_select_energy_range(
    min: f32,
    max: f32,
    expect: EventIds,
) {
    let selector = selector(energy_range(min, max), true, true);
    assert_eq!(selector.select(EVENTS_BASIC.as_slice()), expect);
}

/// a calorimeter hit only matches if all hits qualify
#[test]
fn test_select_energy_range_all_hits() {
    let selector = selector(energy_range(80.0, 95.0), false, true);
    assert_eq!(selector.select(EVENTS_BASIC.as_slice()), vec![1]);
}

/// event with a tracker hit at 75 keV and a calorimeter hit at 90 keV
#[test]
fn test_select_tracker_and_calorimeter() {
    let events = vec![new_event(
        4,
        vec![new_hit(HIT_INDEX_TRACKER, 9.0, 75.0), new_hit(HIT_INDEX_CALORIMETER, -5.0, 90.0)],
    )];
    assert_eq!(selector(energy_range(50.0, 100.0), true, true).select(&events), vec![4]);
    assert_eq!(selector(energy_range(80.0, 100.0), true, true).select(&events), EventIds::new());
    assert_eq!(selector(energy_range(80.0, 100.0), false, true).select(&events), vec![4]);
}

#[test_case(1, vec![12])]
#[test_case(3, vec![1])]
#[test_case(6, vec![7])]
#[test_case(2, vec![])]
#[test_case(10, vec![])]
#[test_case(0, vec![]; "layer none")]
#[test_case(11, vec![]; "layer out of range")]
fn test_select_layer(
    layer: LayerIndex,
    expect: EventIds,
) {
    let selector = selector(SelectionMode::Layer(layer), true, true);
    assert_eq!(selector.select(EVENTS_BASIC.as_slice()), expect);
}

/// the calorimeter hit at z -5.0 is below the tracker
#[test]
fn test_select_layer_none_all_hits() {
    let selector = selector(SelectionMode::Layer(0), false, true);
    assert_eq!(selector.select(EVENTS_BASIC.as_slice()), vec![1]);
}

#[test]
fn test_select_duplicate_ids() {
    let selector_unique = selector(energy_range(0.0, 100.0), true, true);
    assert_eq!(selector_unique.select(EVENTS_DUPLICATE_IDS.as_slice()), vec![5, 6]);

    let selector_all = selector(energy_range(0.0, 100.0), true, false);
    assert_eq!(selector_all.select(EVENTS_DUPLICATE_IDS.as_slice()), vec![5, 5, 6]);

    let selector_layer = selector(SelectionMode::Layer(7), true, true);
    assert_eq!(selector_layer.select(EVENTS_DUPLICATE_IDS.as_slice()), vec![5, 6]);
}

/// the first occurrence of a duplicate `EventID` decides its position
#[test]
fn test_select_unique_keeps_first_position() {
    let events = vec![
        new_event(9, vec![new_hit(HIT_INDEX_TRACKER, 9.0, 10.0)]),
        new_event(3, vec![new_hit(HIT_INDEX_TRACKER, 9.0, 10.0)]),
        new_event(9, vec![new_hit(HIT_INDEX_TRACKER, 9.0, 10.0)]),
        new_event(1, vec![new_hit(HIT_INDEX_TRACKER, 9.0, 10.0)]),
    ];
    assert_eq!(selector(energy_range(0.0, 20.0), true, true).select(&events), vec![9, 3, 1]);
}

#[test]
fn test_select_empty() {
    let selector = selector(energy_range(0.0, 1000.0), true, true);
    let events: Vec<EventRecord> = Vec::new();
    assert!(selector.select(&events).is_empty());
    assert!(selector.select_partitioned(&events, 4).is_empty());
    assert!(selector.select_opt::<EventRecord>(None).is_empty());
    // an event without hits never matches
    let events = vec![new_event(1, vec![])];
    assert!(selector.select(&events).is_empty());
}

#[test]
fn test_select_opt() {
    let selector = selector(energy_range(50.0, 100.0), true, true);
    assert_eq!(selector.select_opt(Some(EVENTS_BASIC.as_slice())), vec![1]);
    assert_eq!(selector.select_opt::<EventRecordP>(None), EventIds::new());
}

#[test]
fn test_select_owned_and_shared() {
    let selector = selector(SelectionMode::Layer(3), true, true);
    let owned: Vec<EventRecord> = EVENTS_BASIC
        .iter()
        .map(|event| EventRecord::clone(event))
        .collect();
    let shared: Vec<Arc<EventRecord>> = EVENTS_BASIC.iter().cloned().collect();
    assert_eq!(selector.select(&owned), selector.select(&shared));
}

#[test]
fn test_select_non_finite_energy() {
    let events = vec![
        new_event(1, vec![new_hit(HIT_INDEX_TRACKER, 9.0, f32::NAN)]),
        new_event(2, vec![new_hit(HIT_INDEX_TRACKER, f32::NAN, 10.0)]),
    ];
    assert_eq!(selector(energy_range(0.0, f32::INFINITY), true, true).select(&events), vec![2]);
    assert_eq!(selector(SelectionMode::Layer(0), true, true).select(&events), vec![2]);
}

#[test]
fn test_hit_qualifies_matches() {
    let selector = selector(energy_range(10.0, 20.0), true, true);
    let tracker = new_hit(HIT_INDEX_TRACKER, 9.0, 15.0);
    let calorimeter = new_hit(HIT_INDEX_CALORIMETER, 9.0, 15.0);
    assert!(selector.hit_qualifies(&tracker));
    assert!(!selector.hit_qualifies(&calorimeter));
    assert!(selector.hit_matches(&tracker));
    assert!(selector.hit_matches(&calorimeter));
    assert!(!selector.hit_matches(&new_hit(HIT_INDEX_TRACKER, 9.0, 20.01)));
    assert_eq!(selector.config().mode, energy_range(10.0, 20.0));
}

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(7)]
#[test_case(64; "more partitions than events")]
fn test_select_partitioned_basic(partitions: usize) {
    for mode in [energy_range(0.0, 1000.0), energy_range(50.0, 100.0), SelectionMode::Layer(6)] {
        let selector = selector(mode, true, true);
        assert_eq!(
            selector.select_partitioned(EVENTS_BASIC.as_slice(), partitions),
            selector.select(EVENTS_BASIC.as_slice()),
            "mode {}, partitions {}",
            mode,
            partitions
        );
    }
}

#[test_case(2)]
#[test_case(3)]
fn test_select_partitioned_duplicate_ids(partitions: usize) {
    let selector_unique = selector(energy_range(0.0, 100.0), true, true);
    assert_eq!(selector_unique.select_partitioned(EVENTS_DUPLICATE_IDS.as_slice(), partitions), vec![5, 6]);
    let selector_all = selector(energy_range(0.0, 100.0), true, false);
    assert_eq!(selector_all.select_partitioned(EVENTS_DUPLICATE_IDS.as_slice(), partitions), vec![5, 5, 6]);
}

#[test_case(1)]
#[test_case(4)]
#[test_case(9)]
#[test_case(32)]
fn test_select_partitioned_generated(partitions: usize) {
    let events = decode_default(&sim_generate(500)).events;
    // EnergyDeposit equals the EventID
    let selector = selector(energy_range(100.0, 399.0), true, true);
    let expect: EventIds = (100..=399).collect();
    assert_eq!(selector.select_partitioned(&events, partitions), expect);
    assert_eq!(selector.select(&events), expect);
}

fn parallelism() -> usize {
    match thread::available_parallelism() {
        Ok(val) => val.get(),
        Err(_) => 1,
    }
}

#[test_case(0, 0, 1)]
#[test_case(0, 8, 1; "no events")]
#[test_case(5, 0, 1; "no partitions")]
#[test_case(5, 1, 1)]
#[test_case(1, 8, 1; "one event")]
fn test_partition_count(
    count: usize,
    partitions: usize,
    expect: usize,
) {
    assert_eq!(partition_count(count, partitions), expect);
}

#[test_case(2)]
#[test_case(64)]
#[test_case(65535; "cli maximum")]
#[test_case(usize::MAX)]
fn test_partition_count_capped(partitions: usize) {
    let count_ = partition_count(1_000_000, partitions);
    assert_ge!(count_, 1);
    assert_le!(count_, parallelism());
    assert_le!(count_, partitions);
    assert_eq!(count_, partitions.min(parallelism()));
}

/// many requested partitions run on no more threads than available
#[test]
fn test_select_partitioned_many_partitions() {
    let events = decode_default(&sim_generate(2000)).events;
    let selector = selector(energy_range(0.0, 5000.0), true, true);
    assert_eq!(selector.select_partitioned(&events, 65535), selector.select(&events));
}
