mod assembler;
mod chart_document;
mod chart_options;
mod engine_config;
mod json_contract;
mod party_summary;
mod render_frame_builder;
pub mod samples;

pub use assembler::{AssembledChart, MajorityLine, SeatAssignment, assemble, majority_line};
pub use chart_document::{
    MAX_TOTAL_SEATS, ValidatedChart, parse_chart_document, validate_chart_document,
};
pub use chart_options::ChartOptions;
pub use engine_config::{ChartEngineConfig, MajorityLineBehavior};
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
};
pub use party_summary::{PartySummary, chart_caption, format_share, summarize_parties};
pub use render_frame_builder::{FrameInputs, build_chart_frame, frame_viewport, legend_row_count};

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{ChartSpec, LayoutKind, PartyId};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::render::{RenderFrame, Renderer};

/// Chart currently shown by an engine, replaced wholesale on every load.
#[derive(Debug, Clone, PartialEq)]
struct LoadedChart {
    spec: ChartSpec,
    options: ChartOptions,
    chart: AssembledChart,
    summaries: Vec<PartySummary>,
    caption: String,
}

/// Stateful shell around the pure layout core.
///
/// Owns the renderer, styling config, the last successfully loaded chart and
/// the hover state. A rejected load leaves the previous chart in place.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    loaded: Option<LoadedChart>,
    interaction: InteractionState,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            loaded: None,
            interaction: InteractionState::default(),
        })
    }

    /// Parses, validates and lays out a JSON chart document.
    pub fn load_json(&mut self, input: &str) -> ChartResult<&AssembledChart> {
        let validated = parse_chart_document(input).inspect_err(|err| {
            warn!(error = %err, "rejected chart document");
        })?;
        Ok(self.load(validated))
    }

    /// Validates and lays out an already-parsed chart document.
    pub fn load_value(&mut self, value: &Value) -> ChartResult<&AssembledChart> {
        let validated = validate_chart_document(value).inspect_err(|err| {
            warn!(error = %err, "rejected chart document");
        })?;
        Ok(self.load(validated))
    }

    /// Lays out a validated chart and makes it the current one.
    pub fn load(&mut self, validated: ValidatedChart) -> &AssembledChart {
        let ValidatedChart { spec, options } = validated;
        let chart = assemble(&spec, &options);
        let summaries = summarize_parties(&spec);
        let caption = chart_caption(&spec);
        debug!(
            layout = spec.layout.as_str(),
            total_seats = chart.total_seats,
            parties = spec.parties.len(),
            "loaded chart"
        );

        self.interaction.reset();
        let loaded = self.loaded.insert(LoadedChart {
            spec,
            options,
            chart,
            summaries,
            caption,
        });
        &loaded.chart
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn spec(&self) -> Option<&ChartSpec> {
        self.loaded.as_ref().map(|loaded| &loaded.spec)
    }

    #[must_use]
    pub fn options(&self) -> Option<ChartOptions> {
        self.loaded.as_ref().map(|loaded| loaded.options)
    }

    #[must_use]
    pub fn chart(&self) -> Option<&AssembledChart> {
        self.loaded.as_ref().map(|loaded| &loaded.chart)
    }

    #[must_use]
    pub fn summaries(&self) -> &[PartySummary] {
        self.loaded
            .as_ref()
            .map(|loaded| loaded.summaries.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.loaded.as_ref().map(|loaded| loaded.caption.as_str())
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<ChartSnapshot> {
        self.loaded.as_ref().map(|loaded| ChartSnapshot {
            caption: loaded.caption.clone(),
            parties: loaded.summaries.clone(),
            chart: loaded.chart.clone(),
        })
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn highlighted_party(&self) -> Option<PartyId> {
        self.interaction.highlighted_party()
    }

    /// Highlights `party` as if the pointer entered one of its seats.
    pub fn seat_pointer_enter(&mut self, party: PartyId) -> ChartResult<()> {
        if !self.summaries().iter().any(|summary| summary.id == party) {
            return Err(ChartError::UnknownParty(party.index()));
        }
        self.interaction.on_seat_enter(party);
        Ok(())
    }

    pub fn seat_pointer_leave(&mut self) {
        self.interaction.on_seat_leave();
    }

    /// Seat whose drawn circle contains the canvas point, if any.
    #[must_use]
    pub fn seat_at(&self, x: f64, y: f64) -> Option<SeatAssignment> {
        let loaded = self.loaded.as_ref()?;
        let radius = match loaded.chart.layout {
            LayoutKind::Arch => self.config.arch_seat_radius,
            LayoutKind::Westminster => self.config.westminster_seat_radius,
        };
        loaded
            .chart
            .seats
            .iter()
            .map(|seat| (seat, (seat.position.x - x).hypot(seat.position.y - y)))
            .filter(|&(_, distance)| distance <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(seat, _)| *seat)
    }

    /// Moves the pointer: highlights the party under it or clears the highlight.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<PartyId> {
        match self.seat_at(x, y) {
            Some(seat) => self.interaction.on_seat_enter(seat.party),
            None => self.interaction.on_seat_leave(),
        }
        self.interaction.highlighted_party()
    }

    /// Tooltip text for the seat under the canvas point.
    #[must_use]
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<String> {
        let seat = self.seat_at(x, y)?;
        self.summaries()
            .iter()
            .find(|summary| summary.id == seat.party)
            .map(PartySummary::tooltip_text)
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let loaded = self
            .loaded
            .as_ref()
            .ok_or_else(|| ChartError::InvalidData("no chart loaded".to_owned()))?;
        let frame = build_chart_frame(FrameInputs {
            chart: &loaded.chart,
            summaries: &loaded.summaries,
            caption: &loaded.caption,
            options: loaded.options,
            config: &self.config,
            interaction: self.interaction,
        });
        frame.validate()?;
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        debug!(
            circles = frame.circles.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "render frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
