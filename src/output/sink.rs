//! Sample sinks: where sampled body positions end up
//!
//! `CsvSink` writes the `x_a,y_a,z_a` table; `MemorySink` keeps samples in
//! memory for tests and library callers.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::simulation::states::Body;
use crate::simulation::vector::Vec3;

/// Header row of the position table
pub const CSV_HEADER: [&str; 3] = ["x_a", "y_a", "z_a"];

/// Append-only consumer of sampled body states
pub trait SampleSink {
    fn record(&mut self, step: u64, time: f64, body: &Body) -> Result<()>;

    /// Flush anything buffered; called once after the last sample
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// One sampled position
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub step: u64,
    pub time: f64,
    pub position: Vec3,
}

#[derive(Debug, Default)]
pub struct MemorySink {
    pub samples: Vec<Sample>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SampleSink for MemorySink {
    fn record(&mut self, step: u64, time: f64, body: &Body) -> Result<()> {
        self.samples.push(Sample {
            step,
            time,
            position: body.x,
        });
        Ok(())
    }
}

/// CSV table of positions in meters, one row per sample
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: u64,
}

impl CsvSink<File> {
    /// Create (or truncate) `path` and write the header
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(file)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Result<Self> {
        // header is written by hand; rows are plain tuples
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    /// Data rows written so far (header excluded)
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> SampleSink for CsvSink<W> {
    fn record(&mut self, _step: u64, _time: f64, body: &Body) -> Result<()> {
        let [x, y, z] = body.x.as_array();
        self.writer.serialize((x, y, z))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
