use super::alphabet::Symbol;

/// Hamming distance between two genomes.
///
/// Compares position by position up to the shorter of the two inputs.
/// Accepts anything viewable as a symbol slice, so entities, genomes and
/// targets can be mixed freely.
pub fn difference<A, B>(first: &A, second: &B) -> usize
where
    A: AsRef<[Symbol]> + ?Sized,
    B: AsRef<[Symbol]> + ?Sized,
{
    first
        .as_ref()
        .iter()
        .zip(second.as_ref())
        .filter(|(a, b)| a != b)
        .count()
}

/// Share of matching positions as a percentage in `[0, 100]`.
pub fn match_percentage(distance: usize, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let matched = length.saturating_sub(distance);
    100.0 * matched as f64 / length as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::entity::Entity;

    fn genome(s: &str) -> Vec<Symbol> {
        s.chars().collect()
    }

    #[test]
    fn test_identical_is_zero() {
        assert_eq!(difference(&genome("hello"), &genome("hello")), 0);
    }

    #[test]
    fn test_counts_mismatches() {
        assert_eq!(difference(&genome("karolin"), &genome("kathrin")), 3);
        assert_eq!(difference(&genome("AAAA"), &genome("ABBA")), 2);
    }

    #[test]
    fn test_symmetric() {
        let a = genome("Tookie Tookie!");
        let b = genome("tookie-TOOKIE?");
        assert_eq!(difference(&a, &b), difference(&b, &a));
    }

    #[test]
    fn test_shorter_input_bounds_comparison() {
        assert_eq!(difference(&genome("abc"), &genome("abcdef")), 0);
        assert_eq!(difference(&genome("xbcdef"), &genome("abc")), 1);
    }

    #[test]
    fn test_entity_against_target() {
        let entity = Entity::new_from_genome(genome("Ca-Caw")).unwrap();
        let target = genome("Ca-Cow");
        assert_eq!(difference(&entity, &target), 1);
        assert_eq!(difference(&entity, &entity), 0);
    }

    #[test]
    fn test_match_percentage() {
        assert_eq!(match_percentage(0, 4), 100.0);
        assert_eq!(match_percentage(4, 4), 0.0);
        assert_eq!(match_percentage(1, 4), 75.0);
        assert_eq!(match_percentage(0, 0), 0.0);
    }
}
