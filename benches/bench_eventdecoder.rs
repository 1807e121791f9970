// bench_eventdecoder.rs
//
// benchmark functions of `crate::readers::eventdecoder::EventDecoder`
// and `crate::selectors::eventselector::EventSelector`
//

extern crate simlib;

use simlib::data::event::EventRecords;
use simlib::readers::eventdecoder::{decode_str, DecoderConfig, EventDecoder};
use simlib::selectors::eventselector::{EventSelector, EventSelectorConfig, SelectionMode};

extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const EVENT_COUNT: usize = 2000;

/// Create an event log of `count` events, each with two interactions and
/// three hits.
fn generate_log(count: usize) -> String {
    let mut data = String::from(
        "SimulationStartAreaFarField 78.54\nBeamType FarFieldPointSource 0 0\nSpectralType Mono 511\nTB\n",
    );
    for i in 1..=count {
        data.push_str("SE\n");
        data.push_str(&format!("ID {} {}\n", i, i));
        data.push_str("TI 0.000123\nED 511\nEC 0\nNS 0\nPM Copper 12.1\n");
        data.push_str("IA INIT 1;0;0;0.0;0;0;0;0;0;0;0;0;0;0;0;1;0;0;0;0;0;-1;511\n");
        data.push_str("IA COMP 2;1;3;1.5e-9;0.5;-0.25;9.0;1;0;0;-1;0;0;-1;511;1;0.1;0.2;-0.9;0.1;0.2;-0.97;340.5\n");
        data.push_str(&format!("HTsim 1;0.0;0.0;{}.0;{}.5;0.000001;1;2;\n", (i % 12) as i32 - 2, i % 200));
        data.push_str("HTsim 1;1.0;1.0;5.0;12.5;0.000001;2;\n");
        data.push_str("HTsim 2;0.0;0.0;-5.0;90;0.000002;2;\n");
    }
    data.push_str("EN\n");

    data
}

#[inline(never)]
fn eventdecoder_decode_all(data: &str) {
    let decoded = match decode_str(data, DecoderConfig::default()) {
        Ok(val) => val,
        Err(err) => {
            panic!("decode_str() error {}", err);
        }
    };

    black_box(decoded);
}

#[inline(never)]
fn eventdecoder_iterate(data: &str) {
    let decoder = EventDecoder::new(data.as_bytes(), String::from("bench"), DecoderConfig::default());
    let count = decoder.filter_map(Result::ok).count();

    black_box(count);
}

#[inline(never)]
fn eventselector_select(
    selector: &EventSelector,
    events: &EventRecords,
) {
    black_box(selector.select(events));
}

#[inline(never)]
fn eventselector_select_partitioned(
    selector: &EventSelector,
    events: &EventRecords,
) {
    black_box(selector.select_partitioned(events, 4));
}

// criterion runners

fn criterion_benchmark(c: &mut Criterion) {
    let data = generate_log(EVENT_COUNT);
    let events: EventRecords = match decode_str(&data, DecoderConfig::default()) {
        Ok(val) => val.events,
        Err(err) => {
            panic!("decode_str() error {}", err);
        }
    };
    let selector = EventSelector::new(EventSelectorConfig {
        mode: SelectionMode::EnergyRange { min: 50.0, max: 100.0 },
        ..Default::default()
    });

    let mut bg = c.benchmark_group("EventDecoder");
    bg.bench_function("eventdecoder_decode_all", |b| b.iter(|| eventdecoder_decode_all(&data)));
    bg.bench_function("eventdecoder_iterate", |b| b.iter(|| eventdecoder_iterate(&data)));
    bg.finish();

    let mut bg = c.benchmark_group("EventSelector");
    bg.bench_function("eventselector_select", |b| b.iter(|| eventselector_select(&selector, &events)));
    bg.bench_function("eventselector_select_partitioned", |b| {
        b.iter(|| eventselector_select_partitioned(&selector, &events))
    });
    bg.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
