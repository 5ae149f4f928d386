use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest total orbital angular momentum reachable with s, p, d and f subshells.
pub const MAX_L: u32 = 20;

#[rustfmt::skip]
static TERM_LETTERS: Map<u32, char> = phf_map! {
    0u32 => 'S', 1u32 => 'P', 2u32 => 'D', 3u32 => 'F',
    4u32 => 'G', 5u32 => 'H', 6u32 => 'I', 7u32 => 'K',
    8u32 => 'L', 9u32 => 'M', 10u32 => 'N', 11u32 => 'O',
    12u32 => 'Q', 13u32 => 'R', 14u32 => 'T', 15u32 => 'U',
    16u32 => 'V', 17u32 => 'W', 18u32 => 'X', 19u32 => 'Y',
    20u32 => 'Z',
};

/// Spectroscopic letter for a total orbital angular momentum `L`.
pub fn term_letter(l: u32) -> Option<char> {
    TERM_LETTERS.get(&l).copied()
}

/// Inverse of [`term_letter`].
pub fn letter_to_l(letter: char) -> Option<u32> {
    let upper = letter.to_ascii_uppercase();
    (0..=MAX_L).find(|&l| term_letter(l) == Some(upper))
}

/// Formats a value stored as twice its magnitude: `3` becomes `3/2`, `4` becomes `2`.
pub fn format_half_integer(doubled: i32) -> String {
    if doubled % 2 == 0 {
        format!("{}", doubled / 2)
    } else {
        format!("{}/2", doubled)
    }
}

/// One fine-structure level `^{2S+1}L_J` of a term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Level {
    pub multiplicity: u32,
    pub letter: char,
    pub j: f64,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.multiplicity,
            self.letter,
            format_half_integer((self.j * 2.0).round() as i32)
        )
    }
}

/// A Russell–Saunders term extracted from a configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub id: u32,
    pub l: u32,
    pub s: f64,
    pub multiplicity: u32,
    pub letter: char,
    /// How many times a block with this `(L, S)` was removed.
    pub count: u32,
    pub levels: Vec<Level>,
}

impl Term {
    /// Creates the term for `L = l` and `S = two_s / 2` with a count of one.
    ///
    /// Returns `None` if `l` has no spectroscopic letter (`l > MAX_L`).
    pub fn new(id: u32, l: u32, two_s: u32) -> Option<Self> {
        let letter = term_letter(l)?;
        let multiplicity = two_s + 1;
        let two_l = 2 * l;
        let two_j_min = two_l.abs_diff(two_s);
        let two_j_max = two_l + two_s;
        let levels = (two_j_min..=two_j_max)
            .step_by(2)
            .map(|two_j| Level {
                multiplicity,
                letter,
                j: f64::from(two_j) / 2.0,
            })
            .collect();

        Some(Self {
            id,
            l,
            s: f64::from(two_s) / 2.0,
            multiplicity,
            letter,
            count: 1,
            levels,
        })
    }

    #[inline]
    pub fn two_s(&self) -> u32 {
        (self.s * 2.0).round() as u32
    }

    /// Number of microstates covered by one instance of this term, `(2L+1)(2S+1)`.
    pub fn degeneracy(&self) -> u64 {
        u64::from(2 * self.l + 1) * u64::from(self.multiplicity)
    }

    /// Number of rows accounted for by all instances of this term.
    pub fn total_microstates(&self) -> u64 {
        self.degeneracy() * u64::from(self.count)
    }

    pub fn symbol(&self) -> TermSymbol {
        TermSymbol {
            multiplicity: self.multiplicity,
            l: self.l,
        }
    }

    pub fn j_values(&self) -> Vec<f64> {
        self.levels.iter().map(|level| level.j).collect()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels: Vec<String> = self.levels.iter().map(ToString::to_string).collect();
        write!(f, "{} ({})", self.symbol(), levels.join(", "))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTermSymbolError {
    #[error("Invalid term symbol '{0}'. Expected '<multiplicity><letter>' (e.g. '3P').")]
    InvalidFormat(String),
    #[error("Unknown term letter '{0}'")]
    UnknownLetter(char),
    #[error("Multiplicity must be at least 1")]
    ZeroMultiplicity,
}

/// A term label `^{2S+1}L` without J, e.g. `3P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TermSymbol {
    pub multiplicity: u32,
    pub l: u32,
}

impl TermSymbol {
    #[inline]
    pub fn two_s(&self) -> u32 {
        self.multiplicity - 1
    }
}

impl FromStr for TermSymbol {
    type Err = ParseTermSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParseTermSymbolError::InvalidFormat(s.to_string());

        let mut chars = trimmed.chars();
        let letter = chars.next_back().ok_or_else(invalid)?;
        let multiplicity = chars.as_str().parse::<u32>().map_err(|_| invalid())?;
        if multiplicity == 0 {
            return Err(ParseTermSymbolError::ZeroMultiplicity);
        }
        let l = letter_to_l(letter).ok_or(ParseTermSymbolError::UnknownLetter(letter))?;
        Ok(Self { multiplicity, l })
    }
}

impl fmt::Display for TermSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = term_letter(self.l).unwrap_or('?');
        write!(f, "{}{}", self.multiplicity, letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_skip_j() {
        assert_eq!(term_letter(0), Some('S'));
        assert_eq!(term_letter(3), Some('F'));
        assert_eq!(term_letter(6), Some('I'));
        assert_eq!(term_letter(7), Some('K'));
        assert_eq!(term_letter(MAX_L), Some('Z'));
        assert_eq!(term_letter(MAX_L + 1), None);
        assert_eq!(letter_to_l('k'), Some(7));
        assert_eq!(letter_to_l('J'), None);
    }

    #[test]
    fn doublet_p_has_two_levels() {
        let term = Term::new(1, 1, 1).unwrap();
        assert_eq!(term.multiplicity, 2);
        assert_eq!(term.letter, 'P');
        assert_eq!(term.j_values(), vec![0.5, 1.5]);
        assert_eq!(term.to_string(), "2P (2P1/2, 2P3/2)");
    }

    #[test]
    fn singlet_s_has_single_level_j_zero() {
        let term = Term::new(1, 0, 0).unwrap();
        assert_eq!(term.j_values(), vec![0.0]);
        assert_eq!(term.degeneracy(), 1);
    }

    #[test]
    fn triplet_p_ladder_runs_from_zero_to_two() {
        let term = Term::new(3, 1, 2).unwrap();
        assert_eq!(term.j_values(), vec![0.0, 1.0, 2.0]);
        assert_eq!(term.degeneracy(), 9);
    }

    #[test]
    fn ladder_starts_at_abs_l_minus_s_when_spin_dominates() {
        // 4S: L = 0, S = 3/2 -> J = 3/2 only.
        let term = Term::new(1, 0, 3).unwrap();
        assert_eq!(term.j_values(), vec![1.5]);
        // 6D: L = 2, S = 5/2 -> J = 1/2 .. 9/2.
        let term = Term::new(1, 2, 5).unwrap();
        assert_eq!(term.j_values(), vec![0.5, 1.5, 2.5, 3.5, 4.5]);
    }

    #[test]
    fn total_microstates_scales_with_count() {
        let mut term = Term::new(1, 2, 0).unwrap();
        term.count = 3;
        assert_eq!(term.total_microstates(), 15);
    }

    #[test]
    fn format_half_integer_handles_both_parities() {
        assert_eq!(format_half_integer(0), "0");
        assert_eq!(format_half_integer(4), "2");
        assert_eq!(format_half_integer(3), "3/2");
        assert_eq!(format_half_integer(-1), "-1/2");
    }

    #[test]
    fn term_symbol_parses_and_displays() {
        let symbol: TermSymbol = "3P".parse().unwrap();
        assert_eq!(symbol, TermSymbol { multiplicity: 3, l: 1 });
        assert_eq!(symbol.two_s(), 2);
        assert_eq!(symbol.to_string(), "3P");
        assert_eq!("10g".parse::<TermSymbol>().unwrap().l, 4);
    }

    #[test]
    fn term_symbol_rejects_bad_input() {
        assert!(matches!(
            "P".parse::<TermSymbol>(),
            Err(ParseTermSymbolError::InvalidFormat(_))
        ));
        assert_eq!(
            "0S".parse::<TermSymbol>(),
            Err(ParseTermSymbolError::ZeroMultiplicity)
        );
        assert_eq!(
            "2J".parse::<TermSymbol>(),
            Err(ParseTermSymbolError::UnknownLetter('J'))
        );
    }
}
