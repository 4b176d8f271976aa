use crate::ship::ShipKind;

pub const BOARD_SIZE: i32 = 10;
pub const FLEET_SIZE: usize = 10;

/// Shots fired per console salvo.
pub const SALVO_SIZE: usize = 3;

/// Composition of a standard fleet, as `(kind, count)` pairs in placement
/// order. Largest ships first so random placement finds room for them.
pub const STANDARD_FLEET: [(ShipKind, usize); 5] = [
    (ShipKind::Galleon, 1),
    (ShipKind::Frigate, 1),
    (ShipKind::Carrack, 2),
    (ShipKind::Caravel, 3),
    (ShipKind::Barge, 4),
];

/// Total number of ships in [`STANDARD_FLEET`].
pub const STANDARD_FLEET_SHIPS: usize = fleet_ships(&STANDARD_FLEET);

const fn fleet_ships(fleet: &[(ShipKind, usize)]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].1;
        i += 1;
    }
    total
}

/// Convert a category tag to a ship kind. Accepts the Portuguese console tags
/// (`barca`, `caravela`, `nau`, `fragata`, `galeao`) and the English names, ignoring ASCII case. Returns `None` for anything else.
pub fn ship_kind_from_tag(tag: &str) -> Option<ShipKind> {
    for kind in ShipKind::ALL {
        if tag.eq_ignore_ascii_case(kind.tag()) || tag.eq_ignore_ascii_case(kind.name()) {
            return Some(kind);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fleet_count_matches_admission_bound() {
        let total: usize = STANDARD_FLEET.iter().map(|(_, n)| n).sum();
        assert_eq!(total, STANDARD_FLEET_SHIPS);
        assert_eq!(total, FLEET_SIZE + 1);
    }

    #[test]
    fn tags_in_both_languages() {
        assert_eq!(ship_kind_from_tag("nau"), Some(ShipKind::Carrack));
        assert_eq!(ship_kind_from_tag("Galleon"), Some(ShipKind::Galleon));
        assert_eq!(ship_kind_from_tag("GALEAO"), Some(ShipKind::Galleon));
        assert_eq!(ship_kind_from_tag("submarine"), None);
    }
}
