use super::alphabet::{self, Symbol};
use crate::error::{Result, SelectionError};
use rand::Rng;
use std::fmt;

/// Ordered, fixed-length sequence of symbols.
pub type Genome = Vec<Symbol>;

/// One individual, defined entirely by its genome.
///
/// The genome length is fixed at construction and is always at least one.
/// Positions only change through [`Entity::mutate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    genome: Genome,
}

impl Entity {
    /// Build an entity of `length` symbols, each drawn independently from the alphabet.
    pub fn new_random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self> {
        if length == 0 {
            return Err(SelectionError::EmptyGenome);
        }
        let genome = (0..length).map(|_| alphabet::random_symbol(rng)).collect();
        Ok(Self { genome })
    }

    /// Wrap a caller-provided genome.
    pub fn new_from_genome(genome: impl Into<Genome>) -> Result<Self> {
        let genome = genome.into();
        if genome.is_empty() {
            return Err(SelectionError::EmptyGenome);
        }
        Ok(Self { genome })
    }

    /// Caller guarantees `genome` is non-empty.
    pub(crate) fn from_nonempty(genome: Genome) -> Self {
        debug_assert!(!genome.is_empty());
        Self { genome }
    }

    /// Overwrite one uniformly chosen position with a fresh symbol.
    ///
    /// The new symbol may equal the old one.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let position = rng.gen_range(0..self.genome.len());
        self.genome[position] = alphabet::random_symbol(rng);
        self
    }

    /// A copy of the genome.
    pub fn genome(&self) -> Genome {
        self.genome.clone()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.genome
    }

    pub fn len(&self) -> usize {
        self.genome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }
}

impl AsRef<[Symbol]> for Entity {
    fn as_ref(&self) -> &[Symbol] {
        &self.genome
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.genome.iter().try_for_each(|symbol| write!(f, "{}", symbol))
    }
}
