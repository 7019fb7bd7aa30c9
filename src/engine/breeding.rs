use super::entity::{Entity, Genome};
use rand::Rng;
use std::ops::Range;

/// Choose the crossover segment for a genome of `length` symbols.
///
/// `start` is uniform over `[0, length)` and `end` uniform over
/// `[start, length]`, so both an empty and a full-length splice are possible.
pub fn pick_segment<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Range<usize> {
    if length == 0 {
        return 0..0;
    }
    let start = rng.gen_range(0..length);
    let end = rng.gen_range(start..=length);
    start..end
}

/// Copy of `first` with `segment` overwritten by `second`'s symbols.
///
/// One-directional: `second` is never modified and nothing of `first`
/// flows back into it.
pub fn crossover(first: &Entity, second: &Entity, segment: Range<usize>) -> Genome {
    let mut genome = first.genome();
    let end = segment.end.min(second.len()).min(genome.len());
    let start = segment.start.min(end);
    genome[start..end].copy_from_slice(&second.symbols()[start..end]);
    genome
}

/// Produce an offspring: segment crossover followed by `mutations` point mutations.
///
/// Parents are expected to have the same length; with a mismatch the
/// segment is drawn over the shorter of the two.
pub fn breed<R: Rng + ?Sized>(
    first: &Entity,
    second: &Entity,
    mutations: usize,
    rng: &mut R,
) -> Entity {
    debug_assert_eq!(first.len(), second.len());

    let segment = pick_segment(first.len().min(second.len()), rng);
    let mut child = Entity::from_nonempty(crossover(first, second, segment));
    for _ in 0..mutations {
        child.mutate(rng);
    }
    child
}
