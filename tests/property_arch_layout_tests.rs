use parliament_chart::api::{ChartOptions, assemble};
use parliament_chart::core::{ChartSpec, LayoutKind, Party, arch_positions};
use proptest::prelude::*;

fn arch_spec(seats: &[u32]) -> ChartSpec {
    let parties = seats
        .iter()
        .enumerate()
        .map(|(index, &seats)| Party::new(index, format!("Party {index}"), "#334155", seats))
        .collect();
    ChartSpec::new(LayoutKind::Arch, parties)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arch_positions_are_exact_and_distinct(total in 1usize..=2000) {
        let positions = arch_positions(total);
        prop_assert_eq!(positions.len(), total);

        let mut keys: Vec<(u64, u64)> = positions
            .iter()
            .map(|position| (position.x.to_bits(), position.y.to_bits()))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }

    #[test]
    fn arch_slices_are_disjoint_and_exhaustive(
        seats in prop::collection::vec(1u32..120, 1..10)
    ) {
        let spec = arch_spec(&seats);
        let chart = assemble(&spec, &ChartOptions::default());
        let canonical = arch_positions(spec.total_seats());

        prop_assert_eq!(chart.seats.len(), spec.total_seats());
        let mut offset = 0usize;
        for party in &spec.parties {
            let slice = &chart.seats[offset..offset + party.seat_count()];
            prop_assert!(slice.iter().all(|seat| seat.party == party.id));
            for (seat, expected) in slice.iter().zip(&canonical[offset..]) {
                prop_assert_eq!(seat.position, *expected);
            }
            offset += party.seat_count();
        }
        prop_assert_eq!(offset, canonical.len());
    }

    #[test]
    fn assembling_twice_is_identical(seats in prop::collection::vec(1u32..80, 1..8)) {
        let spec = arch_spec(&seats);
        let options = ChartOptions::default().with_majority_line(true);
        prop_assert_eq!(assemble(&spec, &options), assemble(&spec, &options));
    }

    #[test]
    fn majority_line_iff_requested_and_two_seats(
        seats in prop::collection::vec(1u32..40, 1..6),
        requested in any::<bool>()
    ) {
        let spec = arch_spec(&seats);
        let options = ChartOptions::default().with_majority_line(requested);
        let chart = assemble(&spec, &options);
        prop_assert_eq!(
            chart.majority_line.is_some(),
            requested && spec.total_seats() >= 2
        );
    }
}
