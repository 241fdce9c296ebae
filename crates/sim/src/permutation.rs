use std::fmt;

use rand::Rng;

/// The unscrambled box: egg labels `1..=n`.
pub fn sequence(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

/// In-place Fisher-Yates shuffle. Uniform over all `n!` orderings.
#[inline]
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, egg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", egg)?;
        }
        write!(f, ")")
    }
}

/// Draws a fresh scrambled box of `n` eggs.
pub fn scramble<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Permutation {
    let mut eggs = sequence(n);
    fisher_yates(&mut eggs, rng);
    Permutation(eggs)
}

/// Reusable generator for one box size. Holds the original sequence and a
/// scratch buffer so the trial loop does not allocate per draw.
pub struct Scrambler {
    sequence: Vec<usize>,
    scratch: Vec<usize>,
}

impl Scrambler {
    pub fn new(n: usize) -> Self {
        let sequence = sequence(n);
        Self {
            scratch: sequence.clone(),
            sequence,
        }
    }

    #[inline]
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Returns a new permutation, valid until the next call.
    #[inline]
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[usize] {
        self.scratch.copy_from_slice(&self.sequence);
        fisher_yates(&mut self.scratch, rng);
        &self.scratch
    }
}
