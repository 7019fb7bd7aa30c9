use super::driver::ProgressSink;
use super::snapshot::{Snapshot, SimulationEvent};
use crate::error::Result;
use std::io::Write;
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Human-readable progress lines with elapsed wall time.
pub struct ConsoleProgressSink<W: Write> {
    writer: W,
    start_time: Instant,
}

impl<W: Write> ConsoleProgressSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, start_time: Instant::now() }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.writer, "{}", line) {
            log::warn!("Failed to write progress line: {}", e);
        }
    }
}

impl<W: Write> ProgressSink for ConsoleProgressSink<W> {
    fn on_snapshot(&mut self, snapshot: Snapshot) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        self.write_line(format_args!(
            "Generation {:>8}: {}  {:5.1}%  ({:.2}s)",
            snapshot.generation,
            snapshot.best_string(),
            snapshot.match_percentage,
            elapsed
        ));
    }

    fn on_finished(&mut self, total_generations: u64) {
        log::info!("Run finished after {} generations", total_generations);
        self.write_line(format_args!(
            "Target fitness match achieved after {} generations.",
            total_generations
        ));
    }
}

// Event queue feeding the UI thread
pub struct ChannelProgressSink {
    sender: Sender<SimulationEvent>,
    disconnected: bool,
}

impl ChannelProgressSink {
    pub fn new(sender: Sender<SimulationEvent>) -> Self {
        Self { sender, disconnected: false }
    }

    fn post(&mut self, event: SimulationEvent) {
        if self.sender.send(event).is_err() && !self.disconnected {
            log::warn!("Event receiver dropped; further progress is discarded");
            self.disconnected = true;
        }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn on_snapshot(&mut self, snapshot: Snapshot) {
        log::debug!(
            "Snapshot at generation {}: distance {}, {:.1}% match",
            snapshot.generation,
            snapshot.best_distance,
            snapshot.match_percentage
        );
        self.post(SimulationEvent::Snapshot(snapshot));
    }

    fn on_finished(&mut self, total_generations: u64) {
        self.post(SimulationEvent::Finished { total_generations });
    }
}

/// Writes every event as one JSON object per line.
pub struct JsonLinesProgressSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesProgressSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn try_write(&mut self, event: &SimulationEvent) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_event(&mut self, event: &SimulationEvent) {
        if let Err(e) = self.try_write(event) {
            log::warn!("Failed to write progress event: {}", e);
        }
    }
}

impl<W: Write> ProgressSink for JsonLinesProgressSink<W> {
    fn on_snapshot(&mut self, snapshot: Snapshot) {
        self.write_event(&SimulationEvent::Snapshot(snapshot));
    }

    fn on_finished(&mut self, total_generations: u64) {
        self.write_event(&SimulationEvent::Finished { total_generations });
    }
}
