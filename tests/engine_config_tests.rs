use approx::assert_relative_eq;
use parliament_chart::api::ChartEngineConfig;
use parliament_chart::render::NullRenderer;
use parliament_chart::ChartEngine;

#[test]
fn defaults_match_the_reference_styling() {
    let config = ChartEngineConfig::default();
    assert_relative_eq!(config.arch_seat_radius, 8.4);
    assert_relative_eq!(config.westminster_seat_radius, 7.8);
    assert_eq!(config.inactive_seat_fill, "#cbd5e1");
    assert_relative_eq!(config.inactive_seat_opacity, 0.55);
    assert_eq!(config.majority_line.color, "#0f172a");
    assert_relative_eq!(config.majority_line.stroke_width, 3.0);
    assert_relative_eq!(config.majority_line.dash, 8.0);
    assert_relative_eq!(config.majority_line.gap, 6.0);
    assert_relative_eq!(config.majority_line.opacity, 0.7);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config =
        ChartEngineConfig::from_json_str(r##"{ "arch_seat_radius": 10, "aisle_fill": "#000" }"##)
            .expect("valid config");
    assert_relative_eq!(config.arch_seat_radius, 10.0);
    assert_eq!(config.aisle_fill, "#000");
    assert_relative_eq!(config.westminster_seat_radius, 7.8);
    assert_eq!(config.header_color, "#334155");
}

#[test]
fn json_round_trip_preserves_values() {
    let config = ChartEngineConfig::default()
        .with_seat_radii(9.0, 6.5)
        .with_inactive_seat_style("#999999", 0.25);
    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{ "arch_seat_radius": 0 }"#,
        r#"{ "westminster_seat_radius": -1 }"#,
        r#"{ "inactive_seat_opacity": 1.5 }"#,
        r#"{ "text_color": "  " }"#,
        r##"{ "majority_line": { "color": "#000", "stroke_width": 3, "dash": 8, "gap": -1, "opacity": 0.7 } }"##,
        r#"{ "arch_seat_radius": "big" }"#,
    ] {
        assert!(ChartEngineConfig::from_json_str(json).is_err(), "{json}");
    }
}

#[test]
fn engine_refuses_invalid_config() {
    let bad = ChartEngineConfig::default().with_seat_radii(f64::NAN, 7.8);
    assert!(ChartEngine::new(NullRenderer::default(), bad.clone()).is_err());

    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    assert!(engine.set_config(bad).is_err());
    assert_relative_eq!(engine.config().arch_seat_radius, 8.4);
}
