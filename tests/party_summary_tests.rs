use parliament_chart::api::{PartySummary, chart_caption, format_share, summarize_parties};
use parliament_chart::core::{ChartSpec, LayoutKind, Party, Side};

fn share_label(seats: u32, total: usize) -> String {
    PartySummary::new(&Party::new(0, "Centre", "#f59e0b", seats), total).share_label()
}

#[test]
fn share_midpoints_round_up() {
    assert_eq!(share_label(1, 400), "0.3");
    assert_eq!(share_label(49, 400), "12.3");
    assert_eq!(share_label(27, 80), "33.8");
}

#[test]
fn share_labels_keep_one_decimal() {
    assert_eq!(share_label(132, 415), "31.8");
    assert_eq!(share_label(50, 100), "50.0");
    assert_eq!(share_label(3, 3), "100.0");
    // 0.35 is stored just below the midpoint
    assert_eq!(format_share(0.35), "0.3");
    assert_eq!(format_share(0.0), "0.0");
}

#[test]
fn tooltip_and_legend_text() {
    let spec = ChartSpec::new(
        LayoutKind::Westminster,
        vec![
            Party::new(0, "Gov", "#ef4444", 1).with_side(Side::Government),
            Party::new(1, "Opp", "#2563eb", 399).with_side(Side::Opposition),
        ],
    );
    let summaries = summarize_parties(&spec);
    assert_eq!(
        summaries[0].tooltip_lines(),
        ["Gov".to_owned(), "1 seats".to_owned(), "0.3% of parliament".to_owned()]
    );
    assert_eq!(
        summaries[1].legend_label(LayoutKind::Westminster),
        "Opp: 399 (99.8%, opposition)"
    );
    assert_eq!(summaries[1].legend_label(LayoutKind::Arch), "Opp: 399 (99.8%)");
    assert_eq!(chart_caption(&spec), "400 total seats (westminster)");
}
