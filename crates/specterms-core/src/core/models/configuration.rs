use super::subshell::{Subshell, SubshellKind};
use crate::core::combinatorics::{binomial, checked_product};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseConfigurationError {
    #[error("Invalid subshell token '{0}'. Expected '[n]<s|p|d|f>[^]<count>' (e.g. '2p3').")]
    InvalidToken(String),
    #[error("Subshell '{0}' appears more than once")]
    DuplicateSubshell(SubshellKind),
    #[error("{electrons} electrons exceed the capacity {capacity} of the {kind} subshell")]
    ExceedsCapacity {
        kind: SubshellKind,
        electrons: u32,
        capacity: u32,
    },
}

/// Electron counts of the s, p, d and f subshells of one configuration.
///
/// Only one shell per subshell kind is modelled; every count is validated against
/// the fixed capacities {2, 6, 10, 14} at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ElectronConfiguration {
    counts: [u32; 4],
}

impl ElectronConfiguration {
    pub fn new(s: u32, p: u32, d: u32, f: u32) -> Result<Self, ParseConfigurationError> {
        Self::from_counts([s, p, d, f])
    }

    pub fn from_counts(counts: [u32; 4]) -> Result<Self, ParseConfigurationError> {
        for kind in SubshellKind::ALL {
            let electrons = counts[kind.index()];
            if electrons > kind.capacity() {
                return Err(ParseConfigurationError::ExceedsCapacity {
                    kind,
                    electrons,
                    capacity: kind.capacity(),
                });
            }
        }
        Ok(Self { counts })
    }

    #[inline]
    pub fn electrons(&self, kind: SubshellKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn counts(&self) -> [u32; 4] {
        self.counts
    }

    pub fn total_electrons(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn subshells(&self) -> impl Iterator<Item = Subshell> + '_ {
        SubshellKind::ALL.into_iter().map(|kind| Subshell {
            kind,
            electrons: self.electrons(kind),
        })
    }

    pub fn combinations(&self) -> Combinations {
        let mut per_subshell = [1u64; 4];
        for subshell in self.subshells() {
            // Counts are validated at construction, so the coefficient always exists.
            per_subshell[subshell.kind.index()] =
                binomial(subshell.electrons, subshell.capacity()).unwrap_or(0);
        }
        Combinations { per_subshell }
    }
}

impl FromStr for ElectronConfiguration {
    type Err = ParseConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut counts = [0u32; 4];
        let mut seen = [false; 4];

        let tokens = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
            .filter(|t| !t.is_empty());

        for token in tokens {
            let (kind, electrons) = parse_token(token)?;
            if seen[kind.index()] {
                return Err(ParseConfigurationError::DuplicateSubshell(kind));
            }
            seen[kind.index()] = true;
            counts[kind.index()] = electrons;
        }

        Self::from_counts(counts)
    }
}

fn parse_token(token: &str) -> Result<(SubshellKind, u32), ParseConfigurationError> {
    let invalid = || ParseConfigurationError::InvalidToken(token.to_string());

    let letter_pos = token
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(invalid)?;
    let (principal, rest) = token.split_at(letter_pos);
    if !principal.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let mut chars = rest.chars();
    let kind = chars
        .next()
        .and_then(SubshellKind::from_letter)
        .ok_or_else(invalid)?;
    let count = chars.as_str();
    let count = count.strip_prefix('^').unwrap_or(count);
    if count.is_empty() || !count.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let electrons = count.parse::<u32>().map_err(|_| invalid())?;
    Ok((kind, electrons))
}

impl fmt::Display for ElectronConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .subshells()
            .filter(|s| !s.is_empty())
            .map(|s| format!("{}{}", s.kind, s.electrons))
            .collect();
        if parts.is_empty() {
            write!(f, "(empty)")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

/// Number of microstates of each subshell, `C(electrons, capacity)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Combinations {
    per_subshell: [u64; 4],
}

impl Combinations {
    #[inline]
    pub fn of(&self, kind: SubshellKind) -> u64 {
        self.per_subshell[kind.index()]
    }

    pub fn as_array(&self) -> [u64; 4] {
        self.per_subshell
    }

    /// Number of rows of the complete configuration, `None` if it overflows `u64`.
    pub fn total(&self) -> Option<u64> {
        checked_product(self.per_subshell)
    }
}
