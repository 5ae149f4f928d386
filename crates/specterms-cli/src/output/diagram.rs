use specterms::core::models::configuration::ElectronConfiguration;
use specterms::core::models::microstate::{Microstate, SlotOccupancy};
use specterms::engine::rows::Row;

pub fn slot_symbol(occupancy: SlotOccupancy) -> char {
    match occupancy {
        SlotOccupancy::Empty => ' ',
        SlotOccupancy::SpinUp => '↿',
        SlotOccupancy::SpinDown => '⇂',
        SlotOccupancy::Paired => '⥮',
    }
}

/// Boxes from `ml = +l` (left) to `ml = -l` (right), e.g. `[⥮][↿][ ]`.
pub fn render_microstate(state: &Microstate) -> String {
    state
        .slots()
        .map(|(_, occupancy)| format!("[{}]", slot_symbol(occupancy)))
        .collect()
}

/// Diagrams of the occupied subshells of `configuration` within `row`.
pub fn render_row(configuration: &ElectronConfiguration, row: &Row) -> String {
    configuration
        .subshells()
        .filter(|subshell| !subshell.is_empty())
        .map(|subshell| {
            let state = row.microstate(subshell.kind);
            format!("{} {}", subshell.kind, render_microstate(&state))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use specterms::core::models::subshell::SubshellKind;

    #[test]
    fn p_subshell_is_drawn_from_plus_l() {
        let state = Microstate::new(SubshellKind::P, 0b00_10_11).unwrap();
        assert_eq!(render_microstate(&state), "[⥮][↿][ ]");
    }

    #[test]
    fn spin_down_uses_down_harpoon() {
        let state = Microstate::new(SubshellKind::S, 0b01).unwrap();
        assert_eq!(render_microstate(&state), "[⇂]");
    }

    #[test]
    fn row_shows_only_occupied_subshells() {
        let configuration = ElectronConfiguration::new(1, 0, 0, 1).unwrap();
        let occupation = (0b10 << SubshellKind::S.bit_offset()) | 0b01;
        let row = Row::from_occupation(occupation);
        assert_eq!(
            render_row(&configuration, &row),
            "s [↿]  f [⇂][ ][ ][ ][ ][ ][ ]"
        );
    }
}
