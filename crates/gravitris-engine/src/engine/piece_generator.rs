use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::{ParseSeedError, Piece, PieceKind};

/// Produces new falling pieces by uniform random choice among the seven
/// kinds.
///
/// Each draw is an independent uniform sample — there is deliberately no
/// bag/7-shuffle fairness guarantee. The random source is owned by the
/// generator and injected at construction, never a process-global, so tests
/// and replays can substitute a deterministic sequence via
/// [`PieceGenerator::with_seed`].
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: Pcg32,
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceGenerator {
    /// Creates a generator seeded from the OS random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for a deterministic piece
    /// sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Generates the next piece, horizontally centered at the top row of a
    /// board of the given width.
    pub fn next_piece(&mut self, board_width: usize) -> Piece {
        let kind: PieceKind = self.rng.random();
        Piece::spawn(kind, board_width)
    }
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed, written as 32 hexadecimal characters. Using the same seed
/// reproduces the same piece sequence, which enables reproducible games (the
/// CLI `--seed` flag) and deterministic tests.
///
/// # Example
///
/// ```
/// use gravitris_engine::{PieceGenerator, PieceSeed};
///
/// let seed: PieceSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// let mut a = PieceGenerator::with_seed(seed);
/// let mut b = PieceGenerator::with_seed(seed);
/// assert_eq!(a.next_piece(10), b.next_piece(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PieceSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::Length { len: s.len() });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::InvalidDigit)?;
        Ok(Self(num.to_be_bytes()))
    }
}
