//! Hover state owned by the presentation side.
//!
//! The layout core never reads this; renders take it as an explicit input.

use serde::{Deserialize, Serialize};

use crate::core::PartyId;

/// Single highlighted-party selector, overwritten on every hover event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    highlighted_party: Option<PartyId>,
}

impl InteractionState {
    #[must_use]
    pub fn highlighted_party(self) -> Option<PartyId> {
        self.highlighted_party
    }

    pub fn on_seat_enter(&mut self, party: PartyId) {
        self.highlighted_party = Some(party);
    }

    pub fn on_seat_leave(&mut self) {
        self.highlighted_party = None;
    }

    pub fn reset(&mut self) {
        self.highlighted_party = None;
    }

    /// Whether seats of `party` render dimmed under the current highlight.
    #[must_use]
    pub fn is_dimmed(self, party: PartyId) -> bool {
        self.highlighted_party.is_some_and(|active| active != party)
    }
}

/// Paint resolved for one seat during a style pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatStyle {
    pub fill: String,
    pub opacity: f64,
}

/// Seat paint for `party`: its own color unless another party is highlighted.
#[must_use]
pub fn resolve_seat_style(
    state: InteractionState,
    party: PartyId,
    party_color: &str,
    inactive_fill: &str,
    inactive_opacity: f64,
) -> SeatStyle {
    if state.is_dimmed(party) {
        SeatStyle {
            fill: inactive_fill.to_owned(),
            opacity: inactive_opacity,
        }
    } else {
        SeatStyle {
            fill: party_color.to_owned(),
            opacity: 1.0,
        }
    }
}
