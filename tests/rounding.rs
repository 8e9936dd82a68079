mod common;

use common::approx_eq;
use social_pulse::round_to;

#[test]
fn exact_halves_go_to_the_even_neighbour() {
    assert!(approx_eq(round_to(6.25, 1), 6.2));
    assert!(approx_eq(round_to(6.75, 1), 6.8));
    assert!(approx_eq(round_to(0.125, 2), 0.12));
    assert!(approx_eq(round_to(2.5, 0), 2.0));
    assert!(approx_eq(round_to(3.5, 0), 4.0));
}

#[test]
fn non_halves_round_to_nearest() {
    assert!(approx_eq(round_to(74.2389, 1), 74.2));
    assert!(approx_eq(round_to(0.5375, 2), 0.54));
    assert!(approx_eq(round_to(0.846, 2), 0.85));
}
