use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SubshellKind {
    S, // l = 0, capacity 2
    P, // l = 1, capacity 6
    D, // l = 2, capacity 10
    F, // l = 3, capacity 14
}

static SUBSHELL_LETTERS: Map<char, SubshellKind> = phf_map! {
    's' => SubshellKind::S, 'S' => SubshellKind::S,
    'p' => SubshellKind::P, 'P' => SubshellKind::P,
    'd' => SubshellKind::D, 'D' => SubshellKind::D,
    'f' => SubshellKind::F, 'F' => SubshellKind::F,
};

impl SubshellKind {
    /// All subshell kinds in occupation-word order (most significant first).
    pub const ALL: [SubshellKind; 4] = [
        SubshellKind::S,
        SubshellKind::P,
        SubshellKind::D,
        SubshellKind::F,
    ];

    /// Orbital angular momentum quantum number `l`.
    #[inline]
    pub const fn orbital_l(self) -> u32 {
        match self {
            SubshellKind::S => 0,
            SubshellKind::P => 1,
            SubshellKind::D => 2,
            SubshellKind::F => 3,
        }
    }

    /// Number of orbitals (`2l + 1`), i.e. two-bit slots in a microstate.
    #[inline]
    pub const fn slot_count(self) -> u32 {
        2 * self.orbital_l() + 1
    }

    /// Number of spin-orbitals, the maximum electron count.
    #[inline]
    pub const fn capacity(self) -> u32 {
        2 * self.slot_count()
    }

    /// Position of the subshell's least significant bit in a row occupation word.
    #[inline]
    pub const fn bit_offset(self) -> u32 {
        match self {
            SubshellKind::S => 30,
            SubshellKind::P => 24,
            SubshellKind::D => 14,
            SubshellKind::F => 0,
        }
    }

    /// Mask selecting the subshell's bits (before shifting by the offset).
    #[inline]
    pub const fn mask(self) -> u32 {
        (1u32 << self.capacity()) - 1
    }

    /// Magnetic quantum number of slot `k`, counted from the least significant pair.
    ///
    /// Slot 0 carries `+l`, the most significant slot carries `-l`.
    #[inline]
    pub const fn slot_ml(self, slot: u32) -> i32 {
        self.orbital_l() as i32 - slot as i32
    }

    pub const fn letter(self) -> char {
        match self {
            SubshellKind::S => 's',
            SubshellKind::P => 'p',
            SubshellKind::D => 'd',
            SubshellKind::F => 'f',
        }
    }

    /// Position in `ALL`, also the index into per-subshell arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            SubshellKind::S => 0,
            SubshellKind::P => 1,
            SubshellKind::D => 2,
            SubshellKind::F => 3,
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        SUBSHELL_LETTERS.get(&letter).copied()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid subshell letter '{0}'. Expected one of s, p, d, f.")]
pub struct ParseSubshellKindError(pub String);

impl FromStr for SubshellKind {
    type Err = ParseSubshellKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_letter(c).ok_or_else(|| ParseSubshellKindError(s.to_string()))
            }
            _ => Err(ParseSubshellKindError(s.to_string())),
        }
    }
}

impl fmt::Display for SubshellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Subshell {
    pub kind: SubshellKind,
    pub electrons: u32,
}

impl Subshell {
    /// Returns `None` when `electrons` exceeds the subshell capacity.
    pub fn new(kind: SubshellKind, electrons: u32) -> Option<Self> {
        (electrons <= kind.capacity()).then_some(Self { kind, electrons })
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.kind.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.electrons == 0
    }

    pub fn is_closed(&self) -> bool {
        self.electrons == self.capacity()
    }
}
