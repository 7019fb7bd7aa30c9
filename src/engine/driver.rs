use super::environment::Environment;
use super::progress::ChannelProgressSink;
use super::snapshot::{Snapshot, SimulationEvent};
use crate::config::EvolutionConfig;
use crate::error::{Result, SelectionError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Something the driver can advance one generation at a time.
pub trait Population {
    fn step(&mut self);
    fn converged(&self) -> bool;
    fn snapshot(&self, generation: u64) -> Snapshot;
}

/// Receives everything a run reports, in generation order.
pub trait ProgressSink {
    fn on_snapshot(&mut self, snapshot: Snapshot);
    fn on_finished(&mut self, total_generations: u64);
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Converged { generations: u64 },
    Cancelled { generations: u64 },
}

impl RunOutcome {
    pub fn generations(&self) -> u64 {
        match self {
            RunOutcome::Converged { generations } | RunOutcome::Cancelled { generations } => {
                *generations
            }
        }
    }
}

/// Step `population` until it converges or `cancel` is raised.
///
/// Emits a snapshot at generation 0, every `interval` generations and on the
/// converging generation, then `on_finished` if the target was reached.
/// Cancellation is checked once per generation and ends the run silently.
pub fn drive<P, S>(population: &mut P, interval: u64, cancel: &AtomicBool, sink: &mut S) -> RunOutcome
where
    P: Population + ?Sized,
    S: ProgressSink + ?Sized,
{
    let interval = interval.max(1);
    let mut generation = 0u64;
    sink.on_snapshot(population.snapshot(generation));

    while !cancel.load(Ordering::Relaxed) && !population.converged() {
        population.step();
        generation += 1;
        if generation % interval == 0 || population.converged() {
            sink.on_snapshot(population.snapshot(generation));
        }
    }

    if population.converged() {
        sink.on_finished(generation);
        RunOutcome::Converged { generations: generation }
    } else {
        RunOutcome::Cancelled { generations: generation }
    }
}

/// One run on its own background thread.
pub struct SimulationRunner {
    handle: Option<JoinHandle<RunOutcome>>,
    events_rx: Receiver<SimulationEvent>,
    cancel_flag: Arc<AtomicBool>,
}

impl SimulationRunner {
    /// Validate `config` and start evolving in the background.
    ///
    /// Configuration problems are reported here, before any thread exists.
    pub fn start(config: &EvolutionConfig) -> Result<Self> {
        let environment = Environment::from_config(config)?;
        let interval = config.snapshot_interval;

        let (events_tx, events_rx) = channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let cancel_flag_clone = Arc::clone(&cancel_flag);

        log::info!(
            "Starting run: target length {}, {} mutation(s)/generation, seed {:?}",
            environment.target().len(),
            environment.mutations(),
            config.seed
        );

        let handle = thread::Builder::new()
            .name("simulation".to_string())
            .spawn(move || {
                let mut environment = environment;
                let mut sink = ChannelProgressSink::new(events_tx);
                let outcome = drive(&mut environment, interval, &cancel_flag_clone, &mut sink);
                match outcome {
                    RunOutcome::Converged { generations } => {
                        log::info!("Target matched after {} generations", generations)
                    }
                    RunOutcome::Cancelled { generations } => {
                        log::info!("Run cancelled at generation {}", generations)
                    }
                }
                outcome
            })?;

        Ok(Self {
            handle: Some(handle),
            events_rx,
            cancel_flag,
        })
    }

    /// Next pending event, if any (non-blocking)
    pub fn poll_event(&self) -> Option<SimulationEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next event.
    ///
    /// `None` on timeout, or once the run has ended and every event was taken.
    pub fn wait_event(&self, timeout: Duration) -> Option<SimulationEvent> {
        match self.events_rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Ask the run to stop; it exits within one generation.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Block until the background thread exits.
    pub fn join(mut self) -> Result<RunOutcome> {
        self.join_inner()
            .unwrap_or(Err(SelectionError::WorkerPanicked))
    }

    /// Cancel, wait for the thread, then hand back every event it left queued.
    ///
    /// A run that converged before the cancel landed still reports its final
    /// snapshot and `Finished` here.
    pub fn finish(mut self) -> Result<(RunOutcome, Vec<SimulationEvent>)> {
        self.cancel();
        let outcome = self
            .join_inner()
            .unwrap_or(Err(SelectionError::WorkerPanicked))?;
        let events = self.events_rx.try_iter().collect();
        Ok((outcome, events))
    }

    fn join_inner(&mut self) -> Option<Result<RunOutcome>> {
        self.handle
            .take()
            .map(|handle| handle.join().map_err(|_| SelectionError::WorkerPanicked))
    }
}

impl Drop for SimulationRunner {
    fn drop(&mut self) {
        self.cancel();
        if let Some(Err(e)) = self.join_inner() {
            log::warn!("Simulation thread ended abnormally: {}", e);
        }
    }
}

/// Owner of the single active run.
///
/// Starting a run first cancels and joins any previous one, so at most one
/// background thread exists at a time.
#[derive(Default)]
pub struct Simulation {
    runner: Option<SimulationRunner>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, config: &EvolutionConfig) -> Result<()> {
        self.stop()?;
        self.runner = Some(SimulationRunner::start(config)?);
        Ok(())
    }

    /// Signal the active run to stop. No-op without a run.
    pub fn cancel(&mut self) {
        if let Some(runner) = &self.runner {
            runner.cancel();
        }
    }

    /// Cancel the active run and wait for its thread to exit.
    pub fn stop(&mut self) -> Result<Option<RunOutcome>> {
        match self.runner.take() {
            Some(runner) => {
                runner.cancel();
                runner.join().map(Some)
            }
            None => Ok(None),
        }
    }

    /// Like `stop`, but also returns the events the run queued before exiting.
    pub fn stop_and_drain(&mut self) -> Result<Option<(RunOutcome, Vec<SimulationEvent>)>> {
        self.runner.take().map(SimulationRunner::finish).transpose()
    }

    pub fn poll_event(&self) -> Option<SimulationEvent> {
        self.runner.as_ref().and_then(|r| r.poll_event())
    }

    pub fn wait_event(&self, timeout: Duration) -> Option<SimulationEvent> {
        self.runner.as_ref().and_then(|r| r.wait_event(timeout))
    }

    /// True while a run's thread is still evolving.
    pub fn is_running(&self) -> bool {
        self.runner.as_ref().map_or(false, |r| !r.is_finished())
    }
}
