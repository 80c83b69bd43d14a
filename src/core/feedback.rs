//! Guess evaluation with duplicate-letter budgeting
//!
//! Each guess position is classified as:
//! - `Exact`   = letter matches the secret at the same position (green)
//! - `Present` = letter occurs elsewhere in the secret and still has budget (yellow)
//! - `Absent`  = letter has no remaining budget in the secret (gray)
//!
//! The budget of a letter is the number of times it occurs in the secret.
//! Exact matches spend budget first, then present matches spend what is left,
//! leftmost guess position first.

use super::{GuessError, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Classification of one guess position
///
/// Ordered by strength so the best-known class for a letter is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterClass {
    Absent,
    Present,
    Exact,
}

impl LetterClass {
    /// Single-letter code: `E`, `P` or `A`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'E',
            Self::Present => 'P',
            Self::Absent => 'A',
        }
    }

    /// Parse a single-letter code (case-insensitive)
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'E' | 'e' => Some(Self::Exact),
            'P' | 'p' => Some(Self::Present),
            'A' | 'a' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position classifications for one guess, aligned with the guess letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterClass>);

impl Feedback {
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &[LetterClass] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every position is `Exact`
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&class| class == LetterClass::Exact)
    }

    /// Number of positions with the given class
    #[must_use]
    pub fn count(&self, class: LetterClass) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterClass> + '_ {
        self.0.iter().copied()
    }

    /// Render as a row of colored squares, e.g. "⬜⬜🟩🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|class| class.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0 {
            write!(f, "{}", class.code())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse a code string like "AAEEE"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| LetterClass::from_code(c).ok_or_else(|| format!("Invalid class code: {c}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl FromIterator<LetterClass> for Feedback {
    fn from_iter<I: IntoIterator<Item = LetterClass>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How many more Exact/Present credits a letter may receive
#[derive(Debug, Clone, Copy)]
struct LetterBudget {
    total: usize,
    used: usize,
}

impl LetterBudget {
    const fn new(total: usize) -> Self {
        Self { total, used: 0 }
    }

    fn spend(&mut self) {
        self.used += 1;
    }

    /// Spend one credit if any is left
    fn try_spend(&mut self) -> bool {
        if self.used < self.total {
            self.used += 1;
            true
        } else {
            false
        }
    }
}

/// Classify every position of `guess` against `secret`
///
/// Pure and deterministic. Runs in O(N) using a letter frequency map.
///
/// # Algorithm
/// 1. Budget each distinct secret letter with its occurrence count
/// 2. Exact pass: mark matching positions and spend their letters' budget
/// 3. Present pass, left to right over the remaining positions: mark
///    `Present` while the letter has budget, otherwise `Absent`
///
/// # Errors
/// Returns [`GuessError::LengthMismatch`] if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, evaluate};
///
/// let secret = Word::new("hound").unwrap();
/// let guess = Word::new("honda").unwrap();
/// let feedback = evaluate(&secret, &guess).unwrap();
///
/// assert_eq!(feedback.to_string(), "EEPPA");
/// ```
pub fn evaluate(secret: &Word, guess: &Word) -> Result<Feedback, GuessError> {
    if secret.len() != guess.len() {
        return Err(GuessError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let mut budget: FxHashMap<char, LetterBudget> = secret
        .letter_counts()
        .into_iter()
        .map(|(letter, total)| (letter, LetterBudget::new(total)))
        .collect();

    let mut classes = vec![LetterClass::Absent; guess.len()];

    // Exact pass must finish before any Present is considered
    for (class, (&g, &s)) in classes
        .iter_mut()
        .zip(guess.letters().iter().zip(secret.letters()))
    {
        if g == s {
            *class = LetterClass::Exact;
            if let Some(entry) = budget.get_mut(&g) {
                entry.spend();
            }
        }
    }

    for (class, letter) in classes.iter_mut().zip(guess.letters()) {
        if *class == LetterClass::Exact {
            continue;
        }
        if budget.get_mut(letter).is_some_and(LetterBudget::try_spend) {
            *class = LetterClass::Present;
        }
    }

    Ok(Feedback(classes))
}
