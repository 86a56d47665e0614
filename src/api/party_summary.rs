use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{ChartSpec, LayoutKind, Party, PartyId, Side};

/// Display figures derived for one party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartySummary {
    pub id: PartyId,
    pub name: String,
    pub color: String,
    pub seats: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// `seats / total_seats * 100`, unrounded.
    pub share_percent: f64,
}

impl PartySummary {
    #[must_use]
    pub fn new(party: &Party, total_seats: usize) -> Self {
        let share_percent = if total_seats == 0 {
            0.0
        } else {
            f64::from(party.seats) / total_seats as f64 * 100.0
        };
        Self {
            id: party.id,
            name: party.name.clone(),
            color: party.color.clone(),
            seats: party.seats,
            side: party.side,
            share_percent,
        }
    }

    /// Share rounded to one decimal for display, e.g. `31.8`.
    #[must_use]
    pub fn share_label(&self) -> String {
        format_share(self.share_percent)
    }

    /// Tooltip lines: name, seat count, share of parliament.
    #[must_use]
    pub fn tooltip_lines(&self) -> [String; 3] {
        [
            self.name.clone(),
            format!("{} seats", self.seats),
            format!("{}% of parliament", self.share_label()),
        ]
    }

    #[must_use]
    pub fn tooltip_text(&self) -> String {
        self.tooltip_lines().join("\n")
    }

    /// Legend label; Westminster charts append the party's side.
    #[must_use]
    pub fn legend_label(&self, layout: LayoutKind) -> String {
        let side = match (layout, self.side) {
            (LayoutKind::Westminster, Some(side)) => format!(", {}", side.as_str()),
            _ => String::new(),
        };
        format!(
            "{}: {} ({}%{side})",
            self.name,
            self.seats,
            self.share_label()
        )
    }
}

/// One-decimal share label; exact midpoints such as `12.25` round up.
#[must_use]
pub fn format_share(share_percent: f64) -> String {
    match Decimal::from_f64_retain(share_percent) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.1}")
        }
        None => format!("{share_percent:.1}"),
    }
}

/// Summaries for every party of `spec`, in party order.
#[must_use]
pub fn summarize_parties(spec: &ChartSpec) -> Vec<PartySummary> {
    let total_seats = spec.total_seats();
    spec.parties
        .iter()
        .map(|party| PartySummary::new(party, total_seats))
        .collect()
}

/// One-line chart caption, e.g. `415 total seats (arch)`.
#[must_use]
pub fn chart_caption(spec: &ChartSpec) -> String {
    format!(
        "{} total seats ({})",
        spec.total_seats(),
        spec.layout.as_str()
    )
}
