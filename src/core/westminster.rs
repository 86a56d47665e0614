use indexmap::IndexMap;
use tracing::debug;

use crate::core::block::block_positions;
use crate::core::types::{Party, PartyId, SeatPosition, Side};

/// Seats belonging to `side`.
#[must_use]
pub fn side_seat_total(parties: &[Party], side: Side) -> usize {
    parties
        .iter()
        .filter(|party| party.side == Some(side))
        .map(Party::seat_count)
        .sum()
}

/// Maps every party to a contiguous slice of its side's block grid.
///
/// Parties consume their side's positions in list order. The returned map
/// preserves input party order. Parties without a side receive no seats.
#[must_use]
pub fn westminster_positions(parties: &[Party]) -> IndexMap<PartyId, Vec<SeatPosition>> {
    let government_total = side_seat_total(parties, Side::Government);
    let opposition_total = side_seat_total(parties, Side::Opposition);
    debug!(government_total, opposition_total, "westminster side totals");

    let mut government = block_positions(government_total, Side::Government).into_iter();
    let mut opposition = block_positions(opposition_total, Side::Opposition).into_iter();

    let mut by_party = IndexMap::with_capacity(parties.len());
    for party in parties {
        let source = match party.side {
            Some(Side::Government) => &mut government,
            Some(Side::Opposition) => &mut opposition,
            None => {
                by_party.insert(party.id, Vec::new());
                continue;
            }
        };
        let seats: Vec<SeatPosition> = source.by_ref().take(party.seat_count()).collect();
        by_party.insert(party.id, seats);
    }
    by_party
}
