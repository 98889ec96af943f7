mod common;

use std::time::Duration;

use common::init_logging;
use serialplot::{
    channel, ExitReason, Frame, FrameReceiver, LineSource, ProducerLoop, RecordSource,
};

fn collect(rx: &mut FrameReceiver) -> Vec<Frame> {
    std::iter::from_fn(|| rx.recv()).collect()
}

fn data(index: u64, v: f64) -> Frame {
    Frame::Data {
        index,
        values: [v, v, v],
    }
}

/// Run a producer over `records` with the given triggers queued up front.
fn run_with(records: &[&str], triggers: &[Frame]) -> (Vec<Frame>, serialplot::ProducerSummary) {
    init_logging();
    let (frames_tx, mut frames_rx) = channel();
    let (trig_tx, trig_rx) = channel();
    for t in triggers {
        trig_tx.send(*t).unwrap();
    }
    let producer = ProducerLoop::new(
        RecordSource::from_records(records.iter().copied()),
        frames_tx,
        trig_rx,
    )
    .with_pacing(Duration::ZERO);
    let summary = producer.run();
    // Keep the trigger sender alive for the whole run.
    drop(trig_tx);
    (collect(&mut frames_rx), summary)
}

#[test]
fn malformed_sample_is_skipped_but_index_advances() {
    let (frames, summary) = run_with(&["1.0", "2.0", "bad", "4.0"], &[Frame::Start]);
    assert_eq!(
        frames,
        vec![Frame::Start, data(0, 1.0), data(1, 2.0), data(3, 4.0)]
    );
    assert_eq!(summary.sent, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.exit, ExitReason::Exhausted);
}

#[test]
fn exhaustion_sends_no_quit() {
    let (frames, summary) = run_with(&["1", "2"], &[Frame::Start]);
    assert!(!frames.contains(&Frame::Quit));
    assert_eq!(summary.exit, ExitReason::Exhausted);
}

#[test]
fn pause_resume_continues_without_gaps() {
    let (frames, summary) = run_with(
        &["1", "2", "3"],
        &[Frame::Start, Frame::Pause, Frame::Resume],
    );
    assert_eq!(
        frames,
        vec![Frame::Start, data(0, 1.0), data(1, 2.0), data(2, 3.0)]
    );
    assert_eq!(summary.exit, ExitReason::Exhausted);
}

#[test]
fn quit_while_running_sends_single_quit() {
    let (frames, summary) = run_with(&["1", "2", "3"], &[Frame::Start, Frame::Quit, Frame::Quit]);
    assert_eq!(frames, vec![Frame::Start, data(0, 1.0), Frame::Quit]);
    assert_eq!(summary.exit, ExitReason::Quit);
    assert_eq!(summary.sent, 1);
}

#[test]
fn quit_while_paused_stops() {
    let (frames, summary) = run_with(&["1", "2"], &[Frame::Start, Frame::Pause, Frame::Quit]);
    assert_eq!(frames, vec![Frame::Start, data(0, 1.0), Frame::Quit]);
    assert_eq!(summary.exit, ExitReason::Quit);
}

#[test]
fn repeated_start_sends_one_start_frame() {
    let (frames, _) = run_with(&["5"], &[Frame::Start, Frame::Start]);
    let starts = frames.iter().filter(|f| **f == Frame::Start).count();
    assert_eq!(starts, 1);
}

#[test]
fn closed_trigger_channel_is_an_implicit_quit() {
    init_logging();
    let (frames_tx, mut frames_rx) = channel();
    let (trig_tx, trig_rx) = channel();
    trig_tx.send(Frame::Start).unwrap();
    trig_tx.close();
    let producer = ProducerLoop::new(RecordSource::from_records(["1", "2"]), frames_tx, trig_rx)
        .with_pacing(Duration::ZERO);
    let summary = producer.run();
    assert_eq!(summary.exit, ExitReason::Quit);
    assert_eq!(
        collect(&mut frames_rx),
        vec![Frame::Start, data(0, 1.0), Frame::Quit]
    );
}

#[test]
fn line_source_reads_three_column_records() {
    init_logging();
    let (frames_tx, mut frames_rx) = channel();
    let (trig_tx, trig_rx) = channel();
    trig_tx.send(Frame::Start).unwrap();
    let source = LineSource::new(std::io::Cursor::new("1,2,3\n4 5 6\n"));
    let summary = ProducerLoop::new(source, frames_tx, trig_rx)
        .with_pacing(Duration::ZERO)
        .run();
    drop(trig_tx);
    assert_eq!(summary.sent, 2);
    assert_eq!(
        collect(&mut frames_rx),
        vec![
            Frame::Start,
            Frame::Data {
                index: 0,
                values: [1.0, 2.0, 3.0]
            },
            Frame::Data {
                index: 1,
                values: [4.0, 5.0, 6.0]
            },
        ]
    );
}
