use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use thiserror::Error;

pub const SEQUENCE_LENGTH: usize = 10;

const ALPHABET_LEN: u8 = 26;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("sequence must not be empty")]
    Empty,
    #[error("`{0}` is not a letter between A and Z")]
    NotALetter(char),
}

/// The target letters for one session. Always uppercase, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence(Vec<char>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<char> {
        self.0.get(idx).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl TryFrom<&str> for Sequence {
    type Error = SequenceError;

    /// Builds a fixed sequence, e.g. for replaying a known round. Lowercase input is accepted.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(SequenceError::Empty);
        }

        s.chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase())
                } else {
                    Err(SequenceError::NotALetter(c))
                }
            })
            .collect::<Result<Vec<char>, _>>()
            .map(Sequence)
    }
}

/// Draws `length` independent uniform letters from A..=Z.
pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Sequence {
    Sequence(
        (0..length)
            .map(|_| char::from(b'A' + rng.gen_range(0..ALPHABET_LEN)))
            .collect(),
    )
}

/// Handles sequence generation for every new session
#[derive(Debug)]
pub struct SequenceGenerator {
    length: usize,
    rng: StdRng,
}

impl SequenceGenerator {
    /// Seeded from OS entropy.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator; the same seed yields the same run of sequences.
    pub fn seeded(length: usize, seed: u64) -> Self {
        Self {
            length,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> Sequence {
        generate(self.length, &mut self.rng)
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new(SEQUENCE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_sequences_are_ten_uppercase_letters() {
        let mut generator = SequenceGenerator::default();

        for _ in 0..200 {
            let seq = generator.generate();
            assert_eq!(seq.len(), SEQUENCE_LENGTH);
            assert!(seq.chars().iter().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_all_letters_are_reachable() {
        let mut generator = SequenceGenerator::seeded(1000, 42);
        let seq = generator.generate();

        for letter in 'A'..='Z' {
            assert!(seq.chars().contains(&letter), "missing {letter}");
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = SequenceGenerator::seeded(SEQUENCE_LENGTH, 7);
        let mut b = SequenceGenerator::seeded(SEQUENCE_LENGTH, 7);

        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_zero_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(0, &mut rng).is_empty());
    }

    #[test]
    fn test_try_from_normalizes_case() {
        let seq = Sequence::try_from("abcXyz").unwrap();
        assert_eq!(seq.to_string(), "ABCXYZ");
        assert_eq!(seq.get(3), Some('X'));
        assert_eq!(seq.get(6), None);
    }

    #[test]
    fn test_try_from_rejects_bad_input() {
        assert_eq!(Sequence::try_from(""), Err(SequenceError::Empty));
        assert_eq!(
            Sequence::try_from("AB1"),
            Err(SequenceError::NotALetter('1'))
        );
    }
}
