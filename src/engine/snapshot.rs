use super::alphabet::Symbol;
use super::entity::Genome;
use super::fitness;
use serde::{Deserialize, Serialize};

/// Point-in-time view of a run, handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub best_genome: Genome,
    pub best_distance: usize,
    pub next_best_genome: Genome,
    pub next_best_distance: usize,
    pub target: Genome,
    pub match_percentage: f64,
}

impl Snapshot {
    pub fn new(generation: u64, best: Genome, next_best: Genome, target: Genome) -> Self {
        let best_distance = fitness::difference(&best, &target);
        let next_best_distance = fitness::difference(&next_best, &target);
        Self {
            generation,
            match_percentage: fitness::match_percentage(best_distance, target.len()),
            best_genome: best,
            best_distance,
            next_best_genome: next_best,
            next_best_distance,
            target,
        }
    }

    /// Number of best-genome positions that match the target.
    pub fn matched(&self) -> usize {
        self.target.len().saturating_sub(self.best_distance)
    }

    /// Per-position pairs of best symbol and whether it matches the target.
    pub fn match_flags(&self) -> impl Iterator<Item = (Symbol, bool)> + '_ {
        self.best_genome
            .iter()
            .zip(&self.target)
            .map(|(best, target)| (*best, best == target))
    }

    pub fn is_converged(&self) -> bool {
        self.best_distance == 0
    }

    pub fn best_string(&self) -> String {
        self.best_genome.iter().collect()
    }

    pub fn target_string(&self) -> String {
        self.target.iter().collect()
    }
}

/// Messages posted by a background run, in generation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    Snapshot(Snapshot),
    /// Posted once, only when the target was matched.
    Finished { total_generations: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome(s: &str) -> Genome {
        s.chars().collect()
    }

    #[test]
    fn test_snapshot_scores() {
        let snapshot = Snapshot::new(1000, genome("ABCA"), genome("ZZZZ"), genome("AAAA"));
        assert_eq!(snapshot.best_distance, 2);
        assert_eq!(snapshot.next_best_distance, 4);
        assert_eq!(snapshot.matched(), 2);
        assert_eq!(snapshot.match_percentage, 50.0);
        assert!(!snapshot.is_converged());
    }

    #[test]
    fn test_match_flags() {
        let snapshot = Snapshot::new(0, genome("AbA"), genome("bbb"), genome("AAA"));
        let flags: Vec<bool> = snapshot.match_flags().map(|(_, ok)| ok).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_converged_snapshot() {
        let snapshot = Snapshot::new(7, genome("Z"), genome("Y"), genome("Z"));
        assert!(snapshot.is_converged());
        assert_eq!(snapshot.match_percentage, 100.0);
        assert_eq!(snapshot.best_string(), "Z");
        assert_eq!(snapshot.target_string(), "Z");
    }
}
