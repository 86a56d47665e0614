use parliament_chart::api::samples::{SAMPLE_NAMES, load_sample, sample_document};
use parliament_chart::core::{LayoutKind, Side};

#[test]
fn every_sample_validates() {
    for name in SAMPLE_NAMES {
        let chart = load_sample(name).expect(name);
        assert_eq!(chart.spec.parties.len(), 5, "{name}");
    }
}

#[test]
fn sample_totals_and_layouts() {
    let expected = [
        ("arch-500", LayoutKind::Arch, 500),
        ("arch-100", LayoutKind::Arch, 100),
        ("westminster-500", LayoutKind::Westminster, 500),
        ("westminster-100", LayoutKind::Westminster, 100),
    ];
    for (name, layout, total) in expected {
        let chart = load_sample(name).expect(name);
        assert_eq!(chart.spec.layout, layout, "{name}");
        assert_eq!(chart.spec.total_seats(), total, "{name}");
    }
}

#[test]
fn westminster_samples_cover_both_sides() {
    let chart = load_sample("westminster-500").expect("sample");
    let sides: Vec<_> = chart.spec.parties.iter().map(|party| party.side).collect();
    assert_eq!(
        sides,
        vec![
            Some(Side::Government),
            Some(Side::Government),
            Some(Side::Opposition),
            Some(Side::Opposition),
            Some(Side::Opposition),
        ]
    );
    assert!(chart.options.show_westminster_headers);
}

#[test]
fn unknown_sample_is_reported() {
    assert!(sample_document("senate").is_none());
    let err = load_sample("senate").expect_err("unknown");
    assert!(format!("{err}").contains("arch-500"));
}
