//! The fixed symbol set every genome position is drawn from.

use rand::Rng;

/// One position of a genome.
pub type Symbol = char;

/// First code point of the alphabet (space).
pub const FIRST: u8 = 32;

/// Last code point of the alphabet (`}`), inclusive.
pub const LAST: u8 = 125;

/// Number of distinct symbols.
pub const SIZE: usize = (LAST - FIRST) as usize + 1;

/// Sample one symbol uniformly at random.
pub fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> Symbol {
    char::from(rng.gen_range(FIRST..=LAST))
}

pub fn contains(symbol: Symbol) -> bool {
    u32::from(symbol) >= u32::from(FIRST) && u32::from(symbol) <= u32::from(LAST)
}

/// Iterate the alphabet in order.
pub fn symbols() -> impl Iterator<Item = Symbol> {
    (FIRST..=LAST).map(char::from)
}
