use parliament_chart::core::PartyId;
use parliament_chart::interaction::{InteractionState, SeatStyle, resolve_seat_style};

#[test]
fn highlight_follows_enter_and_leave() {
    let mut state = InteractionState::default();
    assert_eq!(state.highlighted_party(), None);
    assert!(!state.is_dimmed(PartyId(0)));

    state.on_seat_enter(PartyId(3));
    assert_eq!(state.highlighted_party(), Some(PartyId(3)));
    assert!(!state.is_dimmed(PartyId(3)));
    assert!(state.is_dimmed(PartyId(0)));

    state.on_seat_enter(PartyId(1));
    assert_eq!(state.highlighted_party(), Some(PartyId(1)));

    state.on_seat_leave();
    assert_eq!(state.highlighted_party(), None);

    state.on_seat_enter(PartyId(2));
    state.reset();
    assert_eq!(state, InteractionState::default());
}

#[test]
fn seat_style_dims_only_other_parties() {
    let mut state = InteractionState::default();
    let own = SeatStyle {
        fill: "#dc2626".to_owned(),
        opacity: 1.0,
    };
    assert_eq!(
        resolve_seat_style(state, PartyId(0), "#dc2626", "#cbd5e1", 0.55),
        own
    );

    state.on_seat_enter(PartyId(0));
    assert_eq!(
        resolve_seat_style(state, PartyId(0), "#dc2626", "#cbd5e1", 0.55),
        own
    );
    assert_eq!(
        resolve_seat_style(state, PartyId(1), "#16a34a", "#cbd5e1", 0.55),
        SeatStyle {
            fill: "#cbd5e1".to_owned(),
            opacity: 0.55,
        }
    );
}
