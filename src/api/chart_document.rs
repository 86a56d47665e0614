use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{ChartSpec, LayoutKind, Party, PartyId, Side};
use crate::error::{ChartError, ChartResult};

use super::ChartOptions;

/// Upper bound on seats in one chart.
///
/// Not a rule of the document format: it keeps a mistyped seat count from
/// laying out and rendering millions of circles. Larger documents fail with
/// `ChartError::TooManySeats`.
pub const MAX_TOTAL_SEATS: usize = 10_000;

/// A chart document that passed validation and can be laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedChart {
    pub spec: ChartSpec,
    pub options: ChartOptions,
}

/// Parses and validates a chart document from JSON text.
pub fn parse_chart_document(input: &str) -> ChartResult<ValidatedChart> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| ChartError::MalformedDocument(format!("invalid json: {e}")))?;
    validate_chart_document(&value)
}

/// Validates an already-parsed chart document.
///
/// Unknown top-level and option keys are ignored. Party names and colors are
/// trimmed; party ids are assigned from list position.
pub fn validate_chart_document(value: &Value) -> ChartResult<ValidatedChart> {
    let document = value.as_object().ok_or_else(|| {
        ChartError::MalformedDocument("chart document must be a JSON object".to_owned())
    })?;

    let layout = document
        .get("type")
        .and_then(Value::as_str)
        .and_then(LayoutKind::parse)
        .ok_or(ChartError::InvalidLayoutType)?;

    let entries = match document.get("parties") {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => return Err(ChartError::MissingParties),
    };

    let options = match document.get("options") {
        None => ChartOptions::default(),
        Some(Value::Object(raw)) => validate_options(raw)?,
        Some(_) => return Err(ChartError::InvalidOptions),
    };

    let parties = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| validate_party(index, entry, layout))
        .collect::<ChartResult<Vec<_>>>()?;

    if layout == LayoutKind::Westminster {
        let has_side = |side| parties.iter().any(|party| party.side == Some(side));
        if !has_side(Side::Government) || !has_side(Side::Opposition) {
            return Err(ChartError::MissingSideRepresentation);
        }
    }

    let spec = ChartSpec::new(layout, parties);
    let total = spec.total_seats();
    if total > MAX_TOTAL_SEATS {
        return Err(ChartError::TooManySeats {
            total,
            max: MAX_TOTAL_SEATS,
        });
    }

    debug!(
        layout = layout.as_str(),
        parties = spec.parties.len(),
        total,
        "validated chart document"
    );
    Ok(ValidatedChart { spec, options })
}

fn validate_options(raw: &Map<String, Value>) -> ChartResult<ChartOptions> {
    let mut options = ChartOptions::default();
    for (name, slot) in [
        ("showLegend", &mut options.show_legend),
        ("showWestminsterHeaders", &mut options.show_westminster_headers),
        ("showMajorityLine", &mut options.show_majority_line),
    ] {
        match raw.get(name) {
            None => {}
            Some(Value::Bool(flag)) => *slot = *flag,
            Some(_) => return Err(ChartError::InvalidOption { name }),
        }
    }
    Ok(options)
}

fn validate_party(index: usize, entry: &Value, layout: LayoutKind) -> ChartResult<Party> {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ChartError::InvalidPartyName { index })?;

    let color = entry
        .get("color")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|color| !color.is_empty())
        .ok_or_else(|| ChartError::InvalidPartyColor {
            name: name.to_owned(),
        })?;

    let seats = entry
        .get("seats")
        .and_then(positive_integer)
        .ok_or_else(|| ChartError::InvalidPartySeats {
            name: name.to_owned(),
        })?;

    let side = match layout {
        LayoutKind::Arch => None,
        LayoutKind::Westminster => Some(
            entry
                .get("side")
                .and_then(Value::as_str)
                .and_then(Side::parse)
                .ok_or_else(|| ChartError::InvalidPartySide {
                    name: name.to_owned(),
                })?,
        ),
    };

    Ok(Party {
        id: PartyId(index),
        name: name.to_owned(),
        color: color.to_owned(),
        seats,
        side,
    })
}

/// Accepts any JSON number with no fractional part in `1..=u32::MAX`.
fn positive_integer(value: &Value) -> Option<u32> {
    if let Some(seats) = value.as_u64() {
        return u32::try_from(seats).ok().filter(|&seats| seats > 0);
    }
    let seats = value.as_f64()?;
    if seats.fract() == 0.0 && seats >= 1.0 && seats <= f64::from(u32::MAX) {
        Some(seats as u32)
    } else {
        None
    }
}
