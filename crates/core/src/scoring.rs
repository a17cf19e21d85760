//! Scoring module - evaluates a guess row against the secret
//!
//! Classic peg counting:
//! - `exact`: positions where guess and secret agree.
//! - `partial`: over the remaining (non-exact) positions, the multiset overlap
//!   of guess and secret symbols, i.e. `Σ min(guess_count[s], secret_count[s])`.
//! - `none`: whatever is left of `CODE_LENGTH`.
//!
//! A peg is counted in at most one category, and symbol order only matters for
//! `exact`.

use crate::board::Guess;
use crate::rng::SecretPattern;
use crate::types::{ScoreRow, Symbol, CODE_LENGTH, SYMBOL_COUNT};

/// Score a guess against the secret.
pub fn score(guess: &Guess, secret: &SecretPattern) -> ScoreRow {
    score_symbols(guess, secret.symbols())
}

/// Score two raw symbol sequences.
pub fn score_symbols(guess: &[Symbol; CODE_LENGTH], secret: &[Symbol; CODE_LENGTH]) -> ScoreRow {
    let mut exact: u8 = 0;
    let mut guess_left = [0u8; SYMBOL_COUNT];
    let mut secret_left = [0u8; SYMBOL_COUNT];

    for (g, s) in guess.iter().zip(secret.iter()) {
        if g == s {
            exact += 1;
        } else {
            guess_left[g.index()] += 1;
            secret_left[s.index()] += 1;
        }
    }

    let partial: u8 = guess_left
        .iter()
        .zip(secret_left.iter())
        .map(|(g, s)| (*g).min(*s))
        .sum();

    ScoreRow::new(exact, partial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol::*;

    fn sc(guess: Guess, secret: Guess) -> (u8, u8, u8) {
        let r = score_symbols(&guess, &secret);
        (r.exact, r.partial, r.none)
    }

    #[test]
    fn test_identical() {
        assert_eq!(sc([Fill, Blank, Vertical, Horizontal], [Fill, Blank, Vertical, Horizontal]), (4, 0, 0));
        assert_eq!(sc([Blank; 4], [Blank; 4]), (4, 0, 0));
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(sc([Blank, Blank, Vertical, Vertical], [Fill, Horizontal, Fill, Horizontal]), (0, 0, 4));
    }

    #[test]
    fn test_full_permutation() {
        assert_eq!(sc([Vertical, Blank, Fill, Horizontal], [Blank, Vertical, Horizontal, Fill]), (0, 4, 0));
    }

    #[test]
    fn test_repeated_guess_not_over_credited() {
        // secret [A,A,B,C], guess [A,A,A,A]
        assert_eq!(sc([Blank; 4], [Blank, Blank, Vertical, Horizontal]), (2, 0, 2));
    }

    #[test]
    fn test_repeated_secret_not_over_credited() {
        // One Fill in the guess can only match one of the secret's Fills.
        assert_eq!(sc([Blank, Fill, Vertical, Vertical], [Fill, Fill, Fill, Blank]), (1, 1, 2));
        assert_eq!(sc([Fill, Blank, Blank, Blank], [Blank, Fill, Fill, Fill]), (0, 2, 2));
    }

    #[test]
    fn test_exact_consumes_before_partial() {
        // The Vertical at position 0 is exact; the second guess Vertical has
        // nothing left to match.
        assert_eq!(sc([Vertical, Vertical, Blank, Blank], [Vertical, Fill, Fill, Fill]), (1, 0, 3));
    }

    #[test]
    fn test_end_to_end_example() {
        let secret = SecretPattern::new([Fill, Blank, Vertical, Horizontal]);
        let row = score(&[Fill, Vertical, Blank, Horizontal], &secret);
        assert_eq!(row, ScoreRow { exact: 2, partial: 2, none: 0 });
    }
}
