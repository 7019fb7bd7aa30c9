use super::alphabet;
use super::breeding::breed;
use super::driver::Population;
use super::entity::{Entity, Genome};
use super::fitness::{self, difference};
use super::snapshot::Snapshot;
use crate::config::{ConfigSection, EvolutionConfig};
use crate::error::{Result, SelectionError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What happened to the offspring of one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Child beat the best; the old best became next-best.
    Promoted,
    /// Child beat only the next-best and replaced it.
    ReplacedNextBest,
    /// Child was no better than either and was dropped.
    Discarded,
}

/// The target landscape plus the two fittest entities found so far.
///
/// Invariant: `distance(best) <= distance(next_best)` after construction
/// and after every [`step`](Environment::step).
pub struct Environment<R = StdRng> {
    target: Genome,
    mutations: usize,
    best: Entity,
    next_best: Entity,
    rng: R,
}

impl Environment<StdRng> {
    pub fn new(target: &str, mutations: usize) -> Result<Self> {
        Self::with_rng(target, mutations, StdRng::from_entropy())
    }

    /// Seeded from `config.seed` when present, otherwise from entropy.
    pub fn from_config(config: &EvolutionConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(&config.target, config.mutations, rng)
    }
}

impl<R: Rng> Environment<R> {
    pub fn with_rng(target: &str, mutations: usize, mut rng: R) -> Result<Self> {
        let target: Genome = target.chars().collect();
        if target.is_empty() {
            return Err(SelectionError::EmptyTarget);
        }
        if let Some(symbol) = target.iter().find(|s| !alphabet::contains(**s)) {
            log::warn!(
                "Target contains {:?}, which is outside the alphabet; the run cannot converge",
                symbol
            );
        }

        let first = Entity::new_random(target.len(), &mut rng)?;
        let second = Entity::new_random(target.len(), &mut rng)?;
        let (best, next_best) = if difference(&second, &target) < difference(&first, &target) {
            (second, first)
        } else {
            (first, second)
        };

        Ok(Self {
            target,
            mutations,
            best,
            next_best,
            rng,
        })
    }

    /// Advance one generation: breed the pair, score the child, keep the fittest two.
    ///
    /// Ties keep the incumbent.
    pub fn step(&mut self) -> StepOutcome {
        let child = breed(&self.best, &self.next_best, self.mutations, &mut self.rng);

        let child_score = difference(&child, &self.target);
        let best_score = difference(&self.best, &self.target);
        let next_best_score = difference(&self.next_best, &self.target);

        let outcome = if child_score < best_score {
            self.next_best = std::mem::replace(&mut self.best, child);
            StepOutcome::Promoted
        } else if child_score < next_best_score {
            self.next_best = child;
            StepOutcome::ReplacedNextBest
        } else {
            StepOutcome::Discarded
        };

        log::trace!(
            "child {} vs best {} / next {}: {:?}",
            child_score,
            best_score,
            next_best_score,
            outcome
        );
        outcome
    }

    /// Distances of best and next-best from the target.
    pub fn distances(&self) -> (usize, usize) {
        (
            difference(&self.best, &self.target),
            difference(&self.next_best, &self.target),
        )
    }

    pub fn best_fit_found(&self) -> bool {
        difference(&self.best, &self.target) == 0
    }

    pub fn match_percentage(&self) -> f64 {
        fitness::match_percentage(self.distances().0, self.target.len())
    }

    pub fn best(&self) -> &Entity {
        &self.best
    }

    pub fn next_best(&self) -> &Entity {
        &self.next_best
    }

    pub fn target(&self) -> &[alphabet::Symbol] {
        &self.target
    }

    pub fn mutations(&self) -> usize {
        self.mutations
    }
}

impl<R: Rng> Population for Environment<R> {
    fn step(&mut self) {
        Environment::step(self);
    }

    fn converged(&self) -> bool {
        self.best_fit_found()
    }

    fn snapshot(&self, generation: u64) -> Snapshot {
        Snapshot::new(
            generation,
            self.best.genome(),
            self.next_best.genome(),
            self.target.clone(),
        )
    }
}
