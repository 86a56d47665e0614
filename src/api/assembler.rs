use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::canvas::{MAJORITY_LINE_INNER_RADIUS, MAJORITY_LINE_OUTER_RADIUS};
use crate::core::{
    ArchPolar, ChartSpec, LayoutKind, Party, PartyId, SeatPosition, arch_positions,
    westminster_positions,
};

use super::ChartOptions;

/// One seat owned by one party.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub party: PartyId,
    pub position: SeatPosition,
}

/// Line segment marking the 50%+1 threshold on an arch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MajorityLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Bisecting angle in radians, measured like `ArchPolar::angle`.
    pub angle: f64,
}

/// Result of one assembly pass: every seat exactly once, in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledChart {
    pub layout: LayoutKind,
    pub total_seats: usize,
    pub seats: Vec<SeatAssignment>,
    #[serde(default)]
    pub majority_line: Option<MajorityLine>,
}

impl AssembledChart {
    /// Seats belonging to `party`, in assignment order.
    pub fn seats_of(&self, party: PartyId) -> impl Iterator<Item = SeatPosition> + '_ {
        self.seats
            .iter()
            .filter(move |seat| seat.party == party)
            .map(|seat| seat.position)
    }

    /// Pairs each seat with its party from `spec`.
    pub fn with_parties<'a>(
        &'a self,
        spec: &'a ChartSpec,
    ) -> impl Iterator<Item = (&'a Party, SeatPosition)> + 'a {
        self.seats
            .iter()
            .filter_map(move |seat| spec.party(seat.party).map(|party| (party, seat.position)))
    }
}

/// Lays out `spec` and assigns every position to a party seat.
///
/// Parties receive consecutive runs of the layout's seat order in list order.
#[must_use]
pub fn assemble(spec: &ChartSpec, options: &ChartOptions) -> AssembledChart {
    let total_seats = spec.total_seats();
    let (seats, majority_line) = match spec.layout {
        LayoutKind::Arch => {
            let positions = arch_positions(total_seats);
            let seats = assign_in_order(&spec.parties, &positions);
            let majority_line = if options.show_majority_line {
                majority_line(&positions)
            } else {
                None
            };
            (seats, majority_line)
        }
        LayoutKind::Westminster => {
            let by_party = westminster_positions(&spec.parties);
            let seats = by_party
                .into_iter()
                .flat_map(|(party, positions)| {
                    positions
                        .into_iter()
                        .map(move |position| SeatAssignment { party, position })
                })
                .collect();
            (seats, None)
        }
    };

    debug!(
        layout = spec.layout.as_str(),
        total_seats,
        majority_line = majority_line.is_some(),
        "assembled chart"
    );

    AssembledChart {
        layout: spec.layout,
        total_seats,
        seats,
        majority_line,
    }
}

fn assign_in_order(parties: &[Party], positions: &[SeatPosition]) -> Vec<SeatAssignment> {
    let mut remaining = positions.iter().copied();
    let mut seats = Vec::with_capacity(positions.len());
    for party in parties {
        seats.extend(
            remaining
                .by_ref()
                .take(party.seat_count())
                .map(|position| SeatAssignment {
                    party: party.id,
                    position,
                }),
        );
    }
    seats
}

/// Majority indicator for positions in canonical arch order.
///
/// Follows the seat at the midpoint index for an odd total, or bisects the
/// two seats straddling it for an even total. Needs at least two seats.
#[must_use]
pub fn majority_line(positions: &[SeatPosition]) -> Option<MajorityLine> {
    if positions.len() < 2 {
        return None;
    }

    let mid = positions.len() / 2;
    let straddling: SmallVec<[SeatPosition; 2]> = if positions.len() % 2 == 0 {
        SmallVec::from_slice(&positions[mid - 1..=mid])
    } else {
        SmallVec::from_slice(&positions[mid..=mid])
    };
    let angle = straddling
        .iter()
        .map(|&position| ArchPolar::of(position).angle)
        .sum::<f64>()
        / straddling.len() as f64;

    let outer = ArchPolar {
        angle,
        radius: MAJORITY_LINE_OUTER_RADIUS,
    }
    .to_position();
    let inner = ArchPolar {
        angle,
        radius: MAJORITY_LINE_INNER_RADIUS,
    }
    .to_position();

    Some(MajorityLine {
        x1: outer.x,
        y1: outer.y,
        x2: inner.x,
        y2: inner.y,
        angle,
    })
}
