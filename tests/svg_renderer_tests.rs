use parliament_chart::api::samples::load_sample;
use parliament_chart::api::{ChartEngine, ChartEngineConfig};
use parliament_chart::core::Viewport;
use parliament_chart::render::{Color, RenderFrame, Renderer, SvgRenderer};
use parliament_chart::ChartError;

fn render_sample(sample: &str) -> (String, parliament_chart::render::SvgRenderStats) {
    let mut engine =
        ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default()).expect("engine init");
    engine.load(load_sample(sample).expect("sample"));
    engine.render().expect("render");
    let stats = engine.renderer().last_stats();
    (engine.into_renderer().into_document(), stats)
}

#[test]
fn arch_document_has_grouped_seats_and_hover_rules() {
    let (svg, stats) = render_sample("arch-100");

    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 980 652" width="980" height="652""#
    ));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), 105);
    assert_eq!(svg.matches(r#"class="seat party-0" data-party-id="0""#).count(), 32);
    assert_eq!(svg.matches(r#"class="seat party-1" data-party-id="1""#).count(), 8);
    assert!(svg.contains(
        "svg:has(.party-4:hover) .seat:not(.party-4){fill:#cbd5e1;opacity:0.55}"
    ));
    assert!(svg.contains("<title>Left Alliance\n32 seats\n32.0% of parliament</title>"));
    assert!(svg.contains(r#"stroke-dasharray="8 6""#));
    assert!(svg.contains(">100 total seats (arch)</text>"));

    assert_eq!(stats.circles_drawn, 105);
    assert_eq!(stats.lines_drawn, 1);
}

#[test]
fn westminster_document_has_aisle_and_bold_headers() {
    let (svg, stats) = render_sample("westminster-100");
    assert!(svg.contains(r##"<rect x="488" y="70" width="4" height="440" fill="#e2e8f0"/>"##));
    assert!(svg.contains(r#"font-weight="700">Government</text>"#));
    assert!(svg.contains(r#"font-weight="700">Opposition</text>"#));
    assert!(!svg.contains("<line"));
    assert_eq!(stats.rects_drawn, 2);
}

#[test]
fn party_text_is_escaped() {
    let mut engine =
        ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default()).expect("engine init");
    engine
        .load_json(
            r##"{"type":"arch","parties":[{"name":"R&D <Bloc>","color":"#111111","seats":3}]}"##,
        )
        .expect("valid document");
    engine.render().expect("render");
    let svg = engine.renderer().document();
    assert!(svg.contains("R&amp;D &lt;Bloc&gt;: 3 (100.0%)"));
    assert!(!svg.contains("R&D"));
}

#[test]
fn custom_hover_style_is_used_in_rules() {
    let mut renderer = SvgRenderer::new();
    renderer
        .set_hover_style(Color::token("#eeeeee"), 0.3)
        .expect("valid style");
    assert!(renderer.set_hover_style(Color::token("#eeeeee"), 2.0).is_err());
    assert!(renderer.set_hover_style(Color::token(""), 0.3).is_err());

    let mut engine = ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine");
    engine.load(load_sample("arch-100").expect("sample"));
    engine.render().expect("render");
    assert!(engine.renderer().document().contains("{fill:#eeeeee;opacity:0.3}"));
}

#[test]
fn invalid_frames_are_rejected_and_keep_the_previous_document() {
    let mut renderer = SvgRenderer::new();
    renderer
        .render(&RenderFrame::new(Viewport::new(10, 10)))
        .expect("empty frame renders");
    let previous = renderer.document().to_owned();
    assert!(!previous.contains("<style>"));

    let err = renderer
        .render(&RenderFrame::new(Viewport::new(0, 10)))
        .expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 10 }));
    assert_eq!(renderer.document(), previous);
    assert_eq!(renderer.backend_name(), "svg");
}
