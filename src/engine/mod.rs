pub mod alphabet;
pub mod entity;
pub mod fitness;
pub mod breeding;
pub mod environment;
pub mod snapshot;
pub mod driver;
pub mod progress;

pub use alphabet::Symbol;
pub use entity::{Entity, Genome};
pub use fitness::{difference, match_percentage};
pub use breeding::breed;
pub use environment::{Environment, StepOutcome};
pub use snapshot::{Snapshot, SimulationEvent};
pub use driver::{drive, Population, ProgressSink, RunOutcome, Simulation, SimulationRunner};
pub use progress::{ChannelProgressSink, ConsoleProgressSink, JsonLinesProgressSink};
