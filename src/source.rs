//! Sample sources feeding the producer.
//!
//! A source hands out one record per call until it is exhausted. Exhaustion
//! is signalled with `None` and is a normal end of data, not an error.
//!
//! Text records are parsed with [`parse_record`]:
//! - a single number is copied to all three channels
//! - three numbers separated by commas or whitespace map one per channel
//! - anything else is a [`MalformedSample`]

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::MalformedSample;
use crate::frame::{ChannelValues, CHANNEL_COUNT};

/// Producer-side view of a device, file or generator.
pub trait SampleSource {
    /// Next record, `None` once the source is exhausted.
    fn next_sample(&mut self) -> Option<Result<ChannelValues, MalformedSample>>;

    /// Release the underlying resource. Called once when the producer stops.
    fn close(&mut self) {}
}

impl<S: SampleSource + ?Sized> SampleSource for Box<S> {
    fn next_sample(&mut self) -> Option<Result<ChannelValues, MalformedSample>> {
        (**self).next_sample()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Parse one text record into channel values.
pub fn parse_record(record: &str) -> Result<ChannelValues, MalformedSample> {
    let fields: Vec<&str> = record
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    let parse = |s: &str| {
        s.parse::<f64>()
            .map_err(|e| MalformedSample::new(record.trim_end(), format!("{:?}: {}", s, e)))
    };

    match fields.len() {
        1 => {
            let v = parse(fields[0])?;
            Ok([v; CHANNEL_COUNT])
        }
        CHANNEL_COUNT => {
            let mut values = [0.0; CHANNEL_COUNT];
            for (slot, field) in values.iter_mut().zip(&fields) {
                *slot = parse(*field)?;
            }
            Ok(values)
        }
        0 => Err(MalformedSample::new(record.trim_end(), "empty record")),
        n => Err(MalformedSample::new(
            record.trim_end(),
            format!("expected 1 or {} fields, got {}", CHANNEL_COUNT, n),
        )),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LineSource
// ─────────────────────────────────────────────────────────────────────────────

/// Newline-delimited text from any buffered reader: a log file, a serial
/// device node or stdin. A zero-byte read ends the stream; a line that is
/// not valid UTF-8 is reported as malformed and reading continues.
pub struct LineSource<R: BufRead> {
    reader: Option<R>,
    line: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            line: Vec::new(),
        }
    }
}

impl LineSource<BufReader<File>> {
    /// Open a file or device node for reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        log::info!("reading samples from {:?}", path.as_ref());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl LineSource<BufReader<io::Stdin>> {
    pub fn stdin() -> Self {
        log::info!("reading samples from stdin");
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> SampleSource for LineSource<R> {
    fn next_sample(&mut self) -> Option<Result<ChannelValues, MalformedSample>> {
        let reader = self.reader.as_mut()?;
        self.line.clear();
        match reader.read_until(b'\n', &mut self.line) {
            Ok(0) => None,
            Ok(_) => Some(match std::str::from_utf8(&self.line) {
                Ok(text) => parse_record(text),
                Err(e) => Err(MalformedSample::new(
                    String::from_utf8_lossy(&self.line).trim_end(),
                    e.to_string(),
                )),
            }),
            Err(e) => {
                log::error!("sample read failed, treating as end of data: {}", e);
                None
            }
        }
    }

    fn close(&mut self) {
        self.reader = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RecordSource
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory text records, replayed in order.
#[derive(Debug, Clone, Default)]
pub struct RecordSource {
    records: VecDeque<String>,
}

impl RecordSource {
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: records.into_iter().map(Into::into).collect(),
        }
    }
}

impl SampleSource for RecordSource {
    fn next_sample(&mut self) -> Option<Result<ChannelValues, MalformedSample>> {
        self.records.pop_front().map(|r| parse_record(&r))
    }

    fn close(&mut self) {
        self.records.clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WaveSource
// ─────────────────────────────────────────────────────────────────────────────

/// Synthetic source: three phase-shifted sines in `[center - amplitude, center + amplitude]`.
#[derive(Debug, Clone)]
pub struct WaveSource {
    pub center: f64,
    pub amplitude: f64,
    /// Samples per full period.
    pub period: f64,
    pub limit: Option<u64>,
    produced: u64,
}

impl WaveSource {
    pub fn new(center: f64, amplitude: f64, period: f64) -> Self {
        Self {
            center,
            amplitude,
            period: period.max(1.0),
            limit: None,
            produced: 0,
        }
    }

    /// Stop after `limit` samples instead of running forever.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl SampleSource for WaveSource {
    fn next_sample(&mut self) -> Option<Result<ChannelValues, MalformedSample>> {
        if self.limit.is_some_and(|l| self.produced >= l) {
            return None;
        }
        let phase = std::f64::consts::TAU * self.produced as f64 / self.period;
        let mut values = [0.0; CHANNEL_COUNT];
        for (ch, v) in values.iter_mut().enumerate() {
            let shift = std::f64::consts::TAU * ch as f64 / CHANNEL_COUNT as f64;
            *v = self.center + self.amplitude * (phase + shift).sin();
        }
        self.produced += 1;
        Some(Ok(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn single_value_is_copied_to_every_channel() {
        assert_eq!(parse_record("2.5\n").unwrap(), [2.5, 2.5, 2.5]);
    }

    #[test]
    fn three_values_map_one_per_channel() {
        assert_eq!(parse_record("1, 2 ,3").unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(parse_record("1 2\t3\r\n").unwrap(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn malformed_records_are_rejected() {
        assert!(parse_record("bad").is_err());
        assert!(parse_record("\n").is_err());
        assert!(parse_record("1,2").is_err());
        assert!(parse_record("1,x,3").is_err());
        let err = parse_record("1,2,3,4\n").unwrap_err();
        assert_eq!(err.record, "1,2,3,4");
    }

    #[test]
    fn line_source_ends_on_empty_read() {
        let mut src = LineSource::new(Cursor::new("1.0\nbad\n3\n"));
        assert_eq!(src.next_sample(), Some(Ok([1.0; 3])));
        assert!(matches!(src.next_sample(), Some(Err(_))));
        assert_eq!(src.next_sample(), Some(Ok([3.0; 3])));
        assert_eq!(src.next_sample(), None);
        assert_eq!(src.next_sample(), None);
    }

    #[test]
    fn invalid_utf8_line_is_skipped_not_end_of_data() {
        let mut src = LineSource::new(Cursor::new(&b"1.0\n\xff\xfe\n3.0\n"[..]));
        assert_eq!(src.next_sample(), Some(Ok([1.0; 3])));
        let err = src.next_sample().unwrap().unwrap_err();
        assert!(err.reason.contains("utf-8"), "{}", err.reason);
        assert_eq!(src.next_sample(), Some(Ok([3.0; 3])));
        assert_eq!(src.next_sample(), None);
    }

    #[test]
    fn closed_line_source_is_exhausted() {
        let mut src = LineSource::new(Cursor::new("1.0\n"));
        src.close();
        assert_eq!(src.next_sample(), None);
    }

    #[test]
    fn wave_source_respects_limit_and_range() {
        let mut src = WaveSource::new(5.0, 4.0, 50.0).with_limit(100);
        let mut n = 0;
        while let Some(Ok(values)) = src.next_sample() {
            for v in values {
                assert!((1.0..=9.0).contains(&v));
            }
            n += 1;
        }
        assert_eq!(n, 100);
    }
}
