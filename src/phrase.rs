//! Phrase representation for cumulative selection.
//!
//! A phrase is a fixed-length sequence of uppercase letters. Phrases are
//! immutable: reproduction always yields a new phrase, copied letter by letter
//! with an occasional mistake that shifts a letter to one of its neighbours in
//! the alphabet.

use crate::clamp::clamp;
use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// First letter of the alphabet.
pub const FIRST_LETTER: char = 'A';

/// Last letter of the alphabet.
pub const LAST_LETTER: char = 'Z';

/// Distance between the first and last letter, used to normalize errors.
const ALPHABET_SPAN: f64 = 25.0;

/// A sequence of uppercase alphabetical characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Phrase {
    chars: Vec<char>,
}

impl Phrase {
    /// Create a phrase of `n` letters, each drawn uniformly from `A..=Z`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self {
        let chars = (0..n)
            .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
            .collect();
        Self { chars }
    }

    /// Create a phrase from text, upper-casing it first.
    ///
    /// Characters outside `A..=Z` are kept as-is; use [`Phrase::is_valid`]
    /// to check them.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            chars: text.to_uppercase().chars().collect(),
        }
    }

    /// Wrap raw characters without upper-casing or validation.
    #[must_use]
    pub fn from_chars(chars: Vec<char>) -> Self {
        Self { chars }
    }

    /// Number of letters in the phrase.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the phrase has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The letter at position `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// The letters as a slice.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Whether every letter lies in `A..=Z`.
    ///
    /// Phrases from [`Phrase::random`] and reproduction of a valid phrase are
    /// always valid; phrases from text or raw characters might not be.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.chars.iter().all(char::is_ascii_uppercase)
    }

    /// Create an imperfect copy of this phrase.
    ///
    /// Each letter is independently miscopied with probability `p`, becoming
    /// an adjacent letter instead (so P becomes O or Q). Letters at either end
    /// of the alphabet stay put when the mistake would leave it, so `A` and `Z`
    /// can survive even with `p = 1`.
    #[must_use]
    pub fn reproduce<R: Rng + ?Sized>(&self, p: f64, rng: &mut R) -> Self {
        let chars = self
            .chars
            .iter()
            .map(|&c| {
                if rng.gen_range(0.0..1.0) < p {
                    adjacent_mistake(c, rng)
                } else {
                    c
                }
            })
            .collect();
        Self { chars }
    }

    /// Mean squared error of this phrase with respect to `expected`.
    ///
    /// Letters are normalized to `[0, 1]` and compared position by position
    /// over the shorter of the two phrases. Returns `NaN` when either phrase
    /// is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_squared_error(&self, expected: &Phrase) -> f64 {
        let overlap = self.len().min(expected.len());
        let sum: f64 = self
            .chars
            .iter()
            .zip(&expected.chars)
            .map(|(&o, &e)| (normalize(o) - normalize(e)).powi(2))
            .sum();
        sum / overlap as f64
    }
}

/// Shift a letter one step up or down the alphabet, staying within `A..=Z`.
fn adjacent_mistake<R: Rng + ?Sized>(c: char, rng: &mut R) -> char {
    let step = if rng.gen_bool(0.5) { 1 } else { -1 };
    let code = clamp(
        i64::from(u32::from(c)) + step,
        i64::from(u32::from(FIRST_LETTER)),
        i64::from(u32::from(LAST_LETTER)),
    );
    u8::try_from(code).map_or(c, char::from)
}

/// Map a letter onto `[0, 1]`, with `A` at 0 and `Z` at 1.
fn normalize(c: char) -> f64 {
    (f64::from(u32::from(c)) - f64::from(u32::from(FIRST_LETTER))) / ALPHABET_SPAN
}

impl Index<usize> for Phrase {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.chars[index]
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl Serialize for Phrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_lengths() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(Phrase::random(&mut rng, 0).len(), 0);
        assert_eq!(Phrase::random(&mut rng, 1).len(), 1);
        assert_eq!(Phrase::random(&mut rng, 10).len(), 10);
        assert_eq!(Phrase::from_text("monty").len(), 5);
        assert_eq!(Phrase::from_text("python").len(), 6);
        assert!(Phrase::from_text("").is_empty());
    }

    #[test]
    fn test_uppercase_letters() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(Phrase::random(&mut rng, 1).is_valid());
        assert!(Phrase::random(&mut rng, 100).is_valid());
        assert!(Phrase::from_text("monty").is_valid());
        assert_eq!(Phrase::from_text("python").to_string(), "PYTHON");
    }

    #[test]
    fn test_invalid_characters() {
        assert!(!Phrase::from_text("methinks it is").is_valid());
        assert!(!Phrase::from_chars(vec!['a', 'B']).is_valid());
        assert!(!Phrase::from_chars(vec!['[']).is_valid());
        assert!(!Phrase::from_chars(vec!['@']).is_valid());
        assert!(Phrase::from_chars(vec!['A', 'Z']).is_valid());
    }

    #[test]
    fn test_indexing() {
        let monty = Phrase::from_text("monty");
        assert_eq!(monty[0], 'M');
        assert_eq!(monty[4], 'Y');
        assert_eq!(monty.get(4), Some('Y'));
        assert_eq!(monty.get(5), None);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_range() {
        let monty = Phrase::from_text("monty");
        let letter = monty[5];
        assert!(letter.is_ascii_uppercase());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Phrase::from_text("abc"), Phrase::from_chars(vec!['A', 'B', 'C']));
        assert_ne!(Phrase::from_text("abc"), Phrase::from_text("abcd"));
        assert_ne!(Phrase::from_text("abc"), Phrase::from_text("abd"));
    }

    #[test]
    fn test_reproduce_perfectly_for_zero() {
        let mut rng = SmallRng::seed_from_u64(1);
        let rand10 = Phrase::random(&mut rng, 10);
        let monty = Phrase::from_text("monty");
        assert_eq!(rand10.reproduce(0.0, &mut rng), rand10);
        assert_eq!(monty.reproduce(0.0, &mut rng), monty);
    }

    #[test]
    fn test_reproduce_imperfectly_for_one() {
        let mut rng = SmallRng::seed_from_u64(2);
        let monty = Phrase::from_text("monty");
        let python = Phrase::from_text("python");
        for _ in 0..100 {
            assert_ne!(monty.reproduce(1.0, &mut rng), monty);
            assert_ne!(python.reproduce(1.0, &mut rng), python);
        }
    }

    #[test]
    fn test_mistakes_are_adjacent() {
        let mut rng = SmallRng::seed_from_u64(3);
        let parent = Phrase::from_text("p");
        let mut seen = [false; 2];
        for _ in 0..100 {
            match parent.reproduce(1.0, &mut rng)[0] {
                'O' => seen[0] = true,
                'Q' => seen[1] = true,
                other => panic!("unexpected mistake: {other}"),
            }
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_boundary_letters_clamp() {
        let mut rng = SmallRng::seed_from_u64(4);
        let az = Phrase::from_text("az");
        for _ in 0..100 {
            let child = az.reproduce(1.0, &mut rng);
            assert!(matches!(child[0], 'A' | 'B'));
            assert!(matches!(child[1], 'Y' | 'Z'));
        }
    }

    #[test]
    fn test_reproduce_empty() {
        let mut rng = SmallRng::seed_from_u64(5);
        let empty = Phrase::from_text("");
        assert!(empty.reproduce(1.0, &mut rng).is_empty());
    }

    #[test]
    fn test_reproduce_does_not_mutate_parent() {
        let mut rng = SmallRng::seed_from_u64(6);
        let monty = Phrase::from_text("monty");
        let _ = monty.reproduce(1.0, &mut rng);
        assert_eq!(monty.to_string(), "MONTY");
    }

    #[test]
    fn test_zero_error_for_identical() {
        let mut rng = SmallRng::seed_from_u64(8);
        let rand10 = Phrase::random(&mut rng, 10);
        let python = Phrase::from_text("python");
        assert!(rand10.mean_squared_error(&rand10).abs() < f64::EPSILON);
        assert!(python.mean_squared_error(&python).abs() < f64::EPSILON);
    }

    #[test]
    fn test_known_errors_and_symmetry() {
        let monty = Phrase::from_text("monty");
        let python = Phrase::from_text("python");
        let a = Phrase::from_text("A");
        let m = Phrase::from_text("M");
        let z = Phrase::from_text("Z");

        assert!(close(monty.mean_squared_error(&python), 0.12448));
        assert!(close(python.mean_squared_error(&monty), 0.12448));
        assert!(close(a.mean_squared_error(&z), 1.0));
        assert!(close(z.mean_squared_error(&a), 1.0));
        assert!(close(a.mean_squared_error(&m), 0.48 * 0.48));
        assert!(close(m.mean_squared_error(&a), 0.48 * 0.48));
    }

    #[test]
    fn test_error_of_empty_overlap_is_nan() {
        let empty = Phrase::from_text("");
        assert!(empty.mean_squared_error(&Phrase::from_text("abc")).is_nan());
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&Phrase::from_text("weasel")).unwrap();
        assert_eq!(json, "\"WEASEL\"");
    }
}
