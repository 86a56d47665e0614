use approx::assert_relative_eq;
use parliament_chart::core::arch::initial_row_count;
use parliament_chart::core::{
    ArchPolar, CanonicalSeatKey, SeatPosition, arch_positions, arch_row_plan, arch_row_positions,
};
use std::f64::consts::{FRAC_PI_2, PI};

fn distinct_count(positions: &[SeatPosition]) -> usize {
    let mut keys: Vec<(u64, u64)> = positions
        .iter()
        .map(|position| (position.x.to_bits(), position.y.to_bits()))
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys.len()
}

#[test]
fn initial_row_count_is_clamped() {
    assert_eq!(initial_row_count(1), 5);
    assert_eq!(initial_row_count(100), 5);
    assert_eq!(initial_row_count(415), 10);
    assert_eq!(initial_row_count(500), 11);
    assert_eq!(initial_row_count(5000), 11);
}

#[test]
fn sparse_inner_rows_are_dropped() {
    assert_eq!(arch_row_plan(50), vec![19, 15, 10, 6]);
    assert_eq!(arch_row_plan(100), vec![30, 25, 20, 15, 10]);
}

#[test]
fn row_shrinking_stops_at_four_rows() {
    assert_eq!(arch_row_plan(10), vec![4, 3, 2, 1]);
    assert_eq!(arch_row_plan(1).len(), 4);
}

#[test]
fn row_positions_lie_on_their_row_radius() {
    let positions = arch_row_positions(100);
    let plan = arch_row_plan(100);
    let outer = &positions[..plan[0]];
    let inner = &positions[positions.len() - plan[plan.len() - 1]..];

    for &position in outer {
        assert_relative_eq!(ArchPolar::of(position).radius, 450.0, epsilon = 1e-9);
    }
    for &position in inner {
        assert_relative_eq!(ArchPolar::of(position).radius, 150.0, epsilon = 1e-9);
    }
}

#[test]
fn seats_fan_upward_from_the_center() {
    for position in arch_positions(500) {
        let polar = ArchPolar::of(position);
        assert!(polar.angle > 0.0 && polar.angle < PI);
        assert!(position.y < 510.0);
    }
}

#[test]
fn canonical_order_sweeps_by_descending_angle() {
    let positions = arch_positions(415);
    assert_eq!(positions.len(), 415);

    for pair in positions.windows(2) {
        let a = ArchPolar::of(pair[0]);
        let b = ArchPolar::of(pair[1]);
        assert!(a.angle > b.angle - 1e-9);
    }
    // the sweep starts at the left end of the arch
    assert!(positions[0].x < 490.0);
    assert!(positions[414].x > 490.0);
}

#[test]
fn shared_angles_across_rows_fill_outer_row_first() {
    for total in [100, 200, 500, 1000, 2000] {
        let positions = arch_positions(total);
        let mut shared = 0usize;
        for pair in positions.windows(2) {
            let a = ArchPolar::of(pair[0]);
            let b = ArchPolar::of(pair[1]);
            if (a.angle - b.angle).abs() < 1e-9 {
                shared += 1;
                assert!(
                    a.radius > b.radius,
                    "total={total}: radius {} placed before {} at angle {}",
                    a.radius,
                    b.radius,
                    a.angle
                );
            }
        }
        assert!(shared > 0, "total={total} has no shared angles");
    }
}

#[test]
fn canonical_key_ignores_rounding_noise_in_angles() {
    let angle = PI / 10.0;
    let outer = CanonicalSeatKey::new(angle - f64::EPSILON, 375.0);
    let inner = CanonicalSeatKey::new(angle, 225.0);
    assert!(outer < inner);
}

#[test]
fn canonical_key_breaks_angle_ties_by_outer_radius() {
    let outer = CanonicalSeatKey::new(FRAC_PI_2, 450.0);
    let inner = CanonicalSeatKey::new(FRAC_PI_2, 150.0);
    let right = CanonicalSeatKey::new(0.2, 450.0);

    assert!(outer < inner);
    assert!(inner < right);

    let mut keys = vec![right, inner, outer];
    keys.sort();
    assert_eq!(keys, vec![outer, inner, right]);
}

#[test]
fn polar_round_trip() {
    let polar = ArchPolar {
        angle: 1.0,
        radius: 300.0,
    };
    let back = ArchPolar::of(polar.to_position());
    assert_relative_eq!(back.angle, 1.0, epsilon = 1e-12);
    assert_relative_eq!(back.radius, 300.0, epsilon = 1e-9);
}

#[test]
fn single_seat_arch_returns_one_position() {
    let positions = arch_positions(1);
    assert_eq!(positions.len(), 1);
    assert_relative_eq!(positions[0].x, 715.0, epsilon = 1e-9);
}

#[test]
fn small_and_large_totals_produce_distinct_positions() {
    for total in [1, 2, 3, 7, 10, 50, 100, 415, 650, 2000] {
        let positions = arch_positions(total);
        assert_eq!(positions.len(), total);
        assert_eq!(distinct_count(&positions), total, "total={total}");
    }
}

#[test]
fn arch_positions_are_deterministic() {
    assert_eq!(arch_positions(333), arch_positions(333));
}
