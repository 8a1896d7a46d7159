#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use weasel::Phrase;

/// Structured input for phrase fuzzing.
#[derive(Arbitrary, Debug)]
struct PhraseInput {
    /// Arbitrary text, including non-letters and multi-byte characters.
    text: String,
    /// Second phrase to compare against.
    other: String,
    /// Mutation probability (may be out of range or NaN).
    rate: f64,
    /// RNG seed.
    seed: u64,
}

fuzz_target!(|input: PhraseInput| {
    let mut rng = SmallRng::seed_from_u64(input.seed);
    let phrase = Phrase::from_text(&input.text);
    let other = Phrase::from_text(&input.other);

    let child = phrase.reproduce(input.rate, &mut rng);
    assert_eq!(child.len(), phrase.len());

    // Mistakes always land inside the alphabet
    for (before, after) in phrase.as_chars().iter().zip(child.as_chars()) {
        assert!(before == after || after.is_ascii_uppercase());
    }

    if phrase.is_valid() {
        assert!(child.is_valid());
    }

    if !phrase.is_empty() && !other.is_empty() {
        let mse = phrase.mean_squared_error(&other);
        assert!(mse.is_finite());
        assert!(mse >= 0.0);
    }
});
