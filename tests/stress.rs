mod common;

use common::{init_logging, RecordingCanvas};
use serialplot::{run_headless, Channel, ExitReason, PlotterConfig, RecordSource, Session};

const FRAMES: u64 = 100_000;

// Pacing is disabled so the renderer sees large bursts per tick; ordering
// and completeness must hold regardless of batch size.
#[test]
fn hundred_thousand_frames_arrive_in_order() {
    init_logging();
    let cfg = PlotterConfig {
        sample_interval_ms: 0,
        tick_interval_ms: 1,
        ..PlotterConfig::default()
    };
    let source = RecordSource::from_records((0..FRAMES).map(|i| i.to_string()));
    let Session {
        producer,
        mut renderer,
        mut controls,
    } = Session::new(source, &cfg);
    let handle = producer.spawn().unwrap();

    let canvas = run_headless(&mut renderer, &mut controls, RecordingCanvas::default()).unwrap();
    let summary = handle.join().unwrap();

    assert_eq!(summary.exit, ExitReason::Exhausted);
    assert_eq!(summary.sent, FRAMES);

    let series = renderer.series();
    assert_eq!(series.len() as u64, FRAMES);
    assert!(series
        .indices()
        .iter()
        .enumerate()
        .all(|(i, &idx)| idx == i as u64));
    assert!(series
        .channel(Channel::Three)
        .iter()
        .enumerate()
        .all(|(i, &v)| v == i as f64));

    let drawn = canvas.line_indices(Channel::One);
    assert_eq!(drawn.len() as u64, FRAMES);
    assert_eq!(drawn.as_slice(), series.indices());
}
