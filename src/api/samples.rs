//! Built-in seed documents.

use serde_json::{Value, json};

use crate::error::{ChartError, ChartResult};

use super::{ValidatedChart, validate_chart_document};

pub const SAMPLE_NAMES: [&str; 4] = ["arch-500", "arch-100", "westminster-500", "westminster-100"];

/// Raw JSON of the named sample, or `None` for an unknown name.
#[must_use]
pub fn sample_document(name: &str) -> Option<Value> {
    let document = match name {
        "arch-500" => arch_sample([160, 38, 107, 65, 130]),
        "arch-100" => arch_sample([32, 8, 21, 13, 26]),
        "westminster-500" => westminster_sample([220, 40, 180, 45, 15]),
        "westminster-100" => westminster_sample([44, 8, 36, 9, 3]),
        _ => return None,
    };
    Some(document)
}

/// Validated chart for the named sample.
pub fn load_sample(name: &str) -> ChartResult<ValidatedChart> {
    let document = sample_document(name).ok_or_else(|| {
        ChartError::InvalidData(format!(
            "unknown sample `{name}` (expected one of: {})",
            SAMPLE_NAMES.join(", ")
        ))
    })?;
    validate_chart_document(&document)
}

fn arch_sample(seats: [u32; 5]) -> Value {
    json!({
        "type": "arch",
        "options": { "showLegend": true, "showMajorityLine": true },
        "parties": [
            { "name": "Left Alliance", "color": "#dc2626", "seats": seats[0] },
            { "name": "Greens", "color": "#16a34a", "seats": seats[1] },
            { "name": "Centre", "color": "#f59e0b", "seats": seats[2] },
            { "name": "Liberal", "color": "#0ea5e9", "seats": seats[3] },
            { "name": "Right Bloc", "color": "#1d4ed8", "seats": seats[4] }
        ]
    })
}

fn westminster_sample(seats: [u32; 5]) -> Value {
    json!({
        "type": "westminster",
        "options": { "showLegend": true, "showWestminsterHeaders": true },
        "parties": [
            { "name": "Gov Party A", "color": "#ef4444", "seats": seats[0], "side": "government" },
            { "name": "Gov Party B", "color": "#f97316", "seats": seats[1], "side": "government" },
            { "name": "Opp Party A", "color": "#2563eb", "seats": seats[2], "side": "opposition" },
            { "name": "Opp Party B", "color": "#06b6d4", "seats": seats[3], "side": "opposition" },
            { "name": "Opp Party C", "color": "#64748b", "seats": seats[4], "side": "opposition" }
        ]
    })
}
