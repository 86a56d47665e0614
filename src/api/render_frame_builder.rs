use crate::core::canvas::{AISLE_CENTER_X, CANVAS_HEIGHT, CANVAS_WIDTH, canvas_viewport};
use crate::core::{LayoutKind, Viewport};
use crate::interaction::{InteractionState, resolve_seat_style};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::{AssembledChart, ChartEngineConfig, ChartOptions, PartySummary};

const CAPTION_X: f64 = 16.0;
const CAPTION_Y: f64 = 24.0;
const CAPTION_FONT_PX: f64 = 14.0;

const AISLE_DIVIDER_WIDTH: f64 = 4.0;
const AISLE_DIVIDER_TOP: f64 = 70.0;
const AISLE_DIVIDER_HEIGHT: f64 = 440.0;

const HEADER_Y: f64 = 46.0;
const HEADER_FONT_PX: f64 = 24.0;
const GOVERNMENT_HEADER_X: f64 = 260.0;
const OPPOSITION_HEADER_X: f64 = 720.0;

const LEGEND_COLUMNS: usize = 3;
const LEGEND_LEFT: f64 = 20.0;
const LEGEND_COLUMN_WIDTH: f64 = 320.0;
const LEGEND_TOP_PADDING: f64 = 16.0;
const LEGEND_ROW_HEIGHT: f64 = 28.0;
const LEGEND_SWATCH_RADIUS: f64 = 6.0;
const LEGEND_FONT_PX: f64 = 14.0;

/// Everything one frame build reads; nothing here is mutated.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub chart: &'a AssembledChart,
    pub summaries: &'a [PartySummary],
    pub caption: &'a str,
    pub options: ChartOptions,
    pub config: &'a ChartEngineConfig,
    pub interaction: InteractionState,
}

/// Number of legend rows drawn beneath the canvas.
#[must_use]
pub fn legend_row_count(party_count: usize) -> usize {
    party_count.div_ceil(LEGEND_COLUMNS)
}

/// Viewport covering the canvas plus the legend band when shown.
#[must_use]
pub fn frame_viewport(party_count: usize, show_legend: bool) -> Viewport {
    if !show_legend || party_count == 0 {
        return canvas_viewport();
    }
    let band = LEGEND_TOP_PADDING + legend_row_count(party_count) as f64 * LEGEND_ROW_HEIGHT;
    Viewport::new(CANVAS_WIDTH, CANVAS_HEIGHT + band.ceil() as u32)
}

/// Materializes the draw commands for an assembled chart.
#[must_use]
pub fn build_chart_frame(inputs: FrameInputs<'_>) -> RenderFrame {
    let FrameInputs {
        chart,
        summaries,
        caption,
        options,
        config,
        interaction,
    } = inputs;

    let viewport = frame_viewport(summaries.len(), options.show_legend);
    let mut frame = RenderFrame::new(viewport)
        .with_rect(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            Color::token(config.background_fill.as_str()),
        ))
        .with_text(TextPrimitive::new(
            caption,
            CAPTION_X,
            CAPTION_Y,
            CAPTION_FONT_PX,
            Color::token(config.text_color.as_str()),
            TextHAlign::Left,
        ));

    if chart.layout == LayoutKind::Westminster {
        frame = frame.with_rect(RectPrimitive::new(
            AISLE_CENTER_X - AISLE_DIVIDER_WIDTH / 2.0,
            AISLE_DIVIDER_TOP,
            AISLE_DIVIDER_WIDTH,
            AISLE_DIVIDER_HEIGHT,
            Color::token(config.aisle_fill.as_str()),
        ));
        if options.show_westminster_headers {
            for (label, x) in [
                ("Government", GOVERNMENT_HEADER_X),
                ("Opposition", OPPOSITION_HEADER_X),
            ] {
                frame = frame.with_text(
                    TextPrimitive::new(
                        label,
                        x,
                        HEADER_Y,
                        HEADER_FONT_PX,
                        Color::token(config.header_color.as_str()),
                        TextHAlign::Center,
                    )
                    .bold(),
                );
            }
        }
    }

    let seat_radius = match chart.layout {
        LayoutKind::Arch => config.arch_seat_radius,
        LayoutKind::Westminster => config.westminster_seat_radius,
    };
    for seat in &chart.seats {
        let Some(summary) = summaries.iter().find(|summary| summary.id == seat.party) else {
            continue;
        };
        let style = resolve_seat_style(
            interaction,
            seat.party,
            &summary.color,
            &config.inactive_seat_fill,
            config.inactive_seat_opacity,
        );
        frame = frame.with_circle(
            CirclePrimitive::new(
                seat.position.x,
                seat.position.y,
                seat_radius,
                Color::token(style.fill),
            )
            .with_opacity(style.opacity)
            .with_group(seat.party)
            .with_title(summary.tooltip_text()),
        );
    }

    if let Some(line) = chart.majority_line {
        let behavior = &config.majority_line;
        frame = frame.with_line(
            LinePrimitive::new(
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                behavior.stroke_width,
                Color::token(behavior.color.as_str()),
            )
            .with_stroke_style(LineStrokeStyle::Dashed {
                dash: behavior.dash,
                gap: behavior.gap,
            })
            .with_opacity(behavior.opacity),
        );
    }

    if options.show_legend {
        frame = append_legend(frame, chart.layout, summaries, config);
    }

    frame
}

fn append_legend(
    mut frame: RenderFrame,
    layout: LayoutKind,
    summaries: &[PartySummary],
    config: &ChartEngineConfig,
) -> RenderFrame {
    let band_top = f64::from(CANVAS_HEIGHT) + LEGEND_TOP_PADDING;
    for (index, summary) in summaries.iter().enumerate() {
        let x = LEGEND_LEFT + (index % LEGEND_COLUMNS) as f64 * LEGEND_COLUMN_WIDTH;
        let y = band_top + (index / LEGEND_COLUMNS) as f64 * LEGEND_ROW_HEIGHT + LEGEND_SWATCH_RADIUS;
        frame = frame
            .with_circle(CirclePrimitive::new(
                x + LEGEND_SWATCH_RADIUS,
                y,
                LEGEND_SWATCH_RADIUS,
                Color::token(summary.color.as_str()),
            ))
            .with_text(TextPrimitive::new(
                summary.legend_label(layout),
                x + LEGEND_SWATCH_RADIUS * 3.0,
                y + LEGEND_FONT_PX / 3.0,
                LEGEND_FONT_PX,
                Color::token(config.text_color.as_str()),
                TextHAlign::Left,
            ));
    }
    frame
}
