use crate::core::combinatorics::binomial;
use crate::core::models::configuration::ElectronConfiguration;
use crate::core::models::microstate::Microstate;
use crate::core::models::subshell::{Subshell, SubshellKind};
use crate::engine::error::EngineError;

/// Widest bit pattern a microstate can hold.
pub const MAX_LENGTH: u32 = 16;

/// Generates every `length`-bit pattern with exactly `ones` bits set.
///
/// Positions are visited from the most significant bit downwards; at each position
/// the "set" branch is explored before the "clear" branch, and the clear branch is
/// only taken while the remaining positions can still hold the remaining ones. The
/// first pattern therefore has its high bits set and every valid pattern appears
/// exactly once.
///
/// # Errors
///
/// Returns `EngineError::InvalidArgument` if `ones > length` or `length` exceeds
/// [`MAX_LENGTH`]. Both checks happen before anything is allocated.
pub fn generate(ones: u32, length: u32) -> Result<Vec<u16>, EngineError> {
    if length > MAX_LENGTH {
        return Err(EngineError::InvalidArgument(format!(
            "microstate length {} exceeds the maximum of {} bits",
            length, MAX_LENGTH
        )));
    }
    if ones > length {
        return Err(EngineError::InvalidArgument(format!(
            "cannot place {} electrons into {} spin-orbitals",
            ones, length
        )));
    }

    let expected = binomial(ones, length)? as usize;
    let mut result = Vec::with_capacity(expected);
    place(&mut result, 0, ones, length, 0);
    debug_assert_eq!(result.len(), expected);
    Ok(result)
}

fn place(out: &mut Vec<u16>, prefix: u32, ones: u32, length: u32, position: u32) {
    if ones == 0 {
        out.push((prefix << (length - position)) as u16);
        return;
    }
    if position == length {
        return;
    }
    place(out, (prefix << 1) | 1, ones - 1, length, position + 1);
    if length - position > ones {
        place(out, prefix << 1, ones, length, position + 1);
    }
}

/// Generates the microstates of one subshell.
pub fn generate_for(subshell: Subshell) -> Result<Vec<Microstate>, EngineError> {
    let patterns = generate(subshell.electrons, subshell.capacity())?;
    patterns
        .into_iter()
        .map(|bits| {
            Microstate::new(subshell.kind, bits).ok_or_else(|| {
                EngineError::InvalidArgument(format!(
                    "pattern {:#b} does not fit the {} subshell",
                    bits, subshell.kind
                ))
            })
        })
        .collect()
}

/// Microstate lists of all four subshells of one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubshellMicrostates {
    per_subshell: [Vec<Microstate>; 4],
}

impl SubshellMicrostates {
    pub fn generate(configuration: &ElectronConfiguration) -> Result<Self, EngineError> {
        let [s, p, d, f] = SubshellKind::ALL.map(|kind| Subshell {
            kind,
            electrons: configuration.electrons(kind),
        });
        Ok(Self {
            per_subshell: [
                generate_for(s)?,
                generate_for(p)?,
                generate_for(d)?,
                generate_for(f)?,
            ],
        })
    }

    #[inline]
    pub fn of(&self, kind: SubshellKind) -> &[Microstate] {
        &self.per_subshell[kind.index()]
    }

    /// Lengths in s, p, d, f order; these are the radices of the row index.
    pub fn lengths(&self) -> [usize; 4] {
        [
            self.per_subshell[0].len(),
            self.per_subshell[1].len(),
            self.per_subshell[2].len(),
            self.per_subshell[3].len(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_count_matches_binomial_for_every_subshell_filling() {
        for capacity in [2u32, 6, 10, 14] {
            for ones in 0..=capacity {
                let patterns = generate(ones, capacity).unwrap();
                assert_eq!(
                    patterns.len() as u64,
                    binomial(ones, capacity).unwrap(),
                    "C({ones}, {capacity})"
                );
            }
        }
    }

    #[test]
    fn every_pattern_has_the_requested_popcount_and_fits_the_length() {
        for ones in 0..=10 {
            for bits in generate(ones, 10).unwrap() {
                assert_eq!(bits.count_ones(), ones);
                assert!(u32::from(bits) < (1 << 10));
            }
        }
    }

    #[test]
    fn patterns_are_pairwise_distinct() {
        let patterns = generate(7, 14).unwrap();
        let unique: HashSet<_> = patterns.iter().collect();
        assert_eq!(unique.len(), patterns.len());
    }

    #[test]
    fn zero_ones_yields_only_the_empty_pattern() {
        assert_eq!(generate(0, 6).unwrap(), vec![0]);
        assert_eq!(generate(0, 0).unwrap(), vec![0]);
    }

    #[test]
    fn full_occupation_yields_only_the_all_ones_pattern() {
        assert_eq!(generate(6, 6).unwrap(), vec![0b111111]);
        assert_eq!(generate(14, 14).unwrap(), vec![0x3fff]);
    }

    #[test]
    fn order_explores_set_bits_first_from_the_top() {
        assert_eq!(
            generate(1, 6).unwrap(),
            vec![0b100000, 0b010000, 0b001000, 0b000100, 0b000010, 0b000001]
        );
        assert_eq!(
            generate(2, 4).unwrap(),
            vec![0b1100, 0b1010, 0b1001, 0b0110, 0b0101, 0b0011]
        );
    }

    #[test]
    fn too_many_ones_is_rejected() {
        assert!(matches!(
            generate(7, 6),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn too_long_patterns_are_rejected() {
        assert!(matches!(
            generate(1, 17),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn generate_for_tags_microstates_with_their_subshell() {
        let subshell = Subshell::new(SubshellKind::D, 1).unwrap();
        let states = generate_for(subshell).unwrap();
        assert_eq!(states.len(), 10);
        assert!(states.iter().all(|s| s.kind == SubshellKind::D));
        assert!(states.iter().all(|s| s.electron_count() == 1));
    }

    #[test]
    fn subshell_microstates_cover_all_four_subshells() {
        let config = ElectronConfiguration::new(1, 2, 0, 1).unwrap();
        let states = SubshellMicrostates::generate(&config).unwrap();
        assert_eq!(states.lengths(), [2, 15, 1, 14]);
        assert_eq!(states.of(SubshellKind::D), &[Microstate::new(SubshellKind::D, 0).unwrap()]);
    }
}
