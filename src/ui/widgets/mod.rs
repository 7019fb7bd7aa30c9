pub mod int_input;
pub mod genome_diff;
pub mod match_plot;

pub use int_input::IntInput;
pub use genome_diff::GenomeDiff;
pub use match_plot::MatchPlot;
