use super::subshell::SubshellKind;
use serde::Serialize;
use std::fmt;

/// Occupation of one orbital (a two-bit slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SlotOccupancy {
    Empty,    // 00
    SpinDown, // 01
    SpinUp,   // 10
    Paired,   // 11
}

impl SlotOccupancy {
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => SlotOccupancy::Empty,
            0b01 => SlotOccupancy::SpinDown,
            0b10 => SlotOccupancy::SpinUp,
            _ => SlotOccupancy::Paired,
        }
    }

    pub const fn electron_count(self) -> u32 {
        match self {
            SlotOccupancy::Empty => 0,
            SlotOccupancy::SpinDown | SlotOccupancy::SpinUp => 1,
            SlotOccupancy::Paired => 2,
        }
    }

    /// Twice the spin projection of the slot (`-1`, `0` or `+1`).
    pub const fn two_ms(self) -> i32 {
        match self {
            SlotOccupancy::SpinDown => -1,
            SlotOccupancy::SpinUp => 1,
            SlotOccupancy::Empty | SlotOccupancy::Paired => 0,
        }
    }
}

/// One arrangement of electrons within a single subshell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Microstate {
    pub kind: SubshellKind,
    bits: u16,
}

impl Microstate {
    /// Wraps a bit pattern, rejecting bits outside the subshell's capacity.
    pub fn new(kind: SubshellKind, bits: u16) -> Option<Self> {
        (u32::from(bits) & !kind.mask() == 0).then_some(Self { kind, bits })
    }

    #[inline]
    pub fn bits(&self) -> u16 {
        self.bits
    }

    pub fn electron_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Occupation of slot `k`, counted from the least significant bit pair.
    pub fn slot(&self, k: u32) -> SlotOccupancy {
        SlotOccupancy::from_bits(u32::from(self.bits) >> (2 * k))
    }

    /// Slots ordered from `ml = +l` down to `ml = -l`.
    pub fn slots(&self) -> impl Iterator<Item = (i32, SlotOccupancy)> + '_ {
        (0..self.kind.slot_count()).map(move |k| (self.kind.slot_ml(k), self.slot(k)))
    }

    /// Orbital angular momentum projection contributed by this subshell.
    pub fn ml(&self) -> i32 {
        self.slots()
            .map(|(ml, occ)| ml * occ.electron_count() as i32)
            .sum()
    }

    /// Twice the spin projection contributed by this subshell.
    pub fn two_ms(&self) -> i32 {
        self.slots().map(|(_, occ)| occ.two_ms()).sum()
    }

    pub fn ms(&self) -> f64 {
        f64::from(self.two_ms()) / 2.0
    }
}

impl fmt::Display for Microstate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0width$b}",
            self.bits,
            width = self.kind.capacity() as usize
        )
    }
}
