use crate::config::{AppConfig, DisplayConfig, EvolutionConfig, DEFAULT_TARGET};
use crate::engine::{Snapshot, SimulationEvent, Symbol};
use std::collections::VecDeque;

/// Central application state for the UI
pub struct AppState {
    // Input
    pub target_input: String,
    pub mutations_input: String,

    // Run parameters not editable in the input row
    pub evolution: EvolutionConfig,
    pub display: DisplayConfig,

    // Execution State
    pub is_running: bool,
    pub generation: u64,
    pub status_message: String,
    pub start_requested: bool,
    pub stop_requested: bool,

    // Results
    pub latest: Option<Snapshot>,
    pub log: VecDeque<LogLine>,
    pub progress: Vec<[f64; 2]>,
    pub completed_after: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        // The default phrase is substituted on start, so the field stays blank for it
        let target_input = if config.evolution.target == DEFAULT_TARGET {
            String::new()
        } else {
            config.evolution.target.clone()
        };

        Self {
            target_input,
            mutations_input: config.evolution.mutations.to_string(),

            evolution: config.evolution.clone(),
            display: config.display.clone(),

            is_running: false,
            generation: 0,
            status_message: "Ready".to_string(),
            start_requested: false,
            stop_requested: false,

            latest: None,
            log: VecDeque::new(),
            progress: Vec::new(),
            completed_after: None,
        }
    }

    /// Pick up settings loaded from disk; leaves the phrase alone unless it is blank.
    pub fn apply_config(&mut self, config: &AppConfig) {
        if self.target_input.trim().is_empty() {
            self.target_input = config.evolution.target.clone();
        }
        self.mutations_input = config.evolution.mutations.to_string();
        self.evolution = config.evolution.clone();
        self.display = config.display.clone();
        self.trim_log();
    }

    pub fn begin_run(&mut self) {
        self.is_running = true;
        self.generation = 0;
        self.latest = None;
        self.log.clear();
        self.progress.clear();
        self.completed_after = None;
        self.status_message = "Evolving...".to_string();
    }

    pub fn end_run(&mut self, message: impl Into<String>) {
        self.is_running = false;
        self.status_message = message.into();
    }

    pub fn apply_event(&mut self, event: SimulationEvent) {
        match event {
            SimulationEvent::Snapshot(snapshot) => self.apply_snapshot(snapshot),
            SimulationEvent::Finished { total_generations } => {
                self.completed_after = Some(total_generations);
                self.end_run(format!(
                    "Target fitness match achieved after {} generations.",
                    total_generations
                ));
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.generation = snapshot.generation;
        if snapshot.generation == 0 {
            self.progress = vec![[0.0, 0.0]];
            self.log.clear();
        } else {
            self.progress.push([snapshot.generation as f64, snapshot.match_percentage]);
        }

        self.log.push_back(LogLine::from_snapshot(&snapshot));
        self.trim_log();
        self.latest = Some(snapshot);
    }

    fn trim_log(&mut self) {
        while self.log.len() > self.display.log_capacity {
            self.log.pop_front();
        }
    }

    /// Matched positions and target length, for the progress bar.
    pub fn matched(&self) -> (usize, usize) {
        self.latest
            .as_ref()
            .map_or((0, 0), |s| (s.matched(), s.target.len()))
    }
}

/// One entry of the scrolling log.
#[derive(Clone, Debug, PartialEq)]
pub struct LogLine {
    pub generation: u64,
    pub symbols: Vec<(Symbol, bool)>,
}

impl LogLine {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            generation: snapshot.generation,
            symbols: snapshot.match_flags().collect(),
        }
    }
}
