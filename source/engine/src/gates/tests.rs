// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::amplitude::{AmplitudePair, EPSILON, StateId};
use crate::error::Error;
use crate::gates::{self, GateId, Unitary, rx, ry, rz};
use num_complex::Complex64;
use std::f64::consts::{FRAC_PI_3, PI, TAU};

fn apply_named(state: AmplitudePair, id: &str, angle: Option<f64>) -> AmplitudePair {
    let gate: GateId = id.parse().expect("gate should parse");
    let matrix = gates::resolve(gate, angle).expect("gate should resolve");
    gates::apply(state, &matrix).expect("application should succeed")
}

fn assert_unitary(m: &Unitary) {
    let product = m.adjoint() * m;
    let identity = Unitary::identity();
    for (a, b) in product.iter().zip(identity.iter()) {
        assert!((a - b).norm() <= EPSILON, "m†m should be the identity");
    }
}

#[test]
fn every_gate_id_round_trips_through_strings() {
    for id in ["i", "x", "y", "z", "h", "s", "t", "rx", "ry", "rz"] {
        let gate: GateId = id.parse().expect("id should parse");
        assert_eq!(gate.to_string(), id);
    }
}

#[test]
fn unknown_gate_is_rejected() {
    let err = "q".parse::<GateId>().expect_err("should be rejected");
    assert_eq!(err, Error::UnknownGate("q".into()));
}

#[test]
fn rotation_gate_without_angle_is_rejected() {
    for id in [GateId::Rx, GateId::Ry, GateId::Rz] {
        let err = gates::resolve(id, None).expect_err("angle should be required");
        assert_eq!(err, Error::MissingParameter(id));
    }
}

#[test]
fn fixed_gate_ignores_supplied_angle() {
    let with_angle = gates::resolve(GateId::H, Some(1.5)).expect("h should resolve");
    let without = gates::resolve(GateId::H, None).expect("h should resolve");
    assert_eq!(with_angle, without);
}

#[test]
fn catalog_matrices_are_unitary() {
    for id in [
        GateId::I,
        GateId::X,
        GateId::Y,
        GateId::Z,
        GateId::H,
        GateId::S,
        GateId::T,
    ] {
        let m = gates::resolve(id, None).expect("gate should resolve");
        assert_unitary(&m);
    }
    for angle in [-TAU, -1.0, 0.0, 0.3, PI, 7.5] {
        assert_unitary(&rx(angle));
        assert_unitary(&ry(angle));
        assert_unitary(&rz(angle));
    }
}

#[test]
fn hadamard_sends_zero_to_plus() {
    let result = apply_named(StateId::Zero.amplitudes(), "h", None);
    assert!(result.approx_eq(&StateId::Plus.amplitudes()));
}

#[test]
fn x_sends_one_to_zero() {
    let result = apply_named(StateId::One.amplitudes(), "x", None);
    assert!(result.approx_eq(&StateId::Zero.amplitudes()));
}

#[test]
fn z_sends_plus_to_minus() {
    let result = apply_named(StateId::Plus.amplitudes(), "z", None);
    assert!(result.approx_eq(&StateId::Minus.amplitudes()));
}

#[test]
fn s_sends_plus_to_i() {
    let result = apply_named(StateId::Plus.amplitudes(), "s", None);
    assert!(result.approx_eq(&StateId::I.amplitudes()));
}

#[test]
fn y_maps_the_y_basis_correctly() {
    // Y|i⟩ = |i⟩ and Y|-i⟩ = -|-i⟩ up to global phase; the discrete
    // visualizer table got these wrong.
    let i_state = StateId::I.amplitudes();
    let minus_i = StateId::MinusI.amplitudes();
    assert!(apply_named(i_state, "y", None).equiv_up_to_phase(&i_state));
    assert!(apply_named(minus_i, "y", None).equiv_up_to_phase(&minus_i));
}

#[test]
fn identity_leaves_every_canonical_state_fixed() {
    for id in StateId::ALL {
        let state = id.amplitudes();
        assert!(apply_named(state, "i", None).approx_eq(&state));
    }
}

#[test]
fn application_preserves_the_norm() {
    let mut state = StateId::Zero.amplitudes();
    for id in ["h", "t", "s", "y", "h", "z", "x", "t"] {
        state = apply_named(state, id, None);
        assert!(state.is_normalized());
    }
}

#[test]
fn adjoint_round_trip_restores_the_state() {
    let state = StateId::I.amplitudes();
    for m in [rx(0.7), ry(-2.4), rz(5.1), *super::H, *super::T] {
        let forward = gates::apply(state, &m).expect("application should succeed");
        let back = gates::apply(forward, &m.adjoint()).expect("application should succeed");
        assert!(back.approx_eq(&state));
    }
}

#[test]
fn rz_satisfies_the_group_law() {
    let state = StateId::Plus.amplitudes();
    let composed = gates::apply(
        gates::apply(state, &rz(FRAC_PI_3)).expect("application should succeed"),
        &rz(1.9),
    )
    .expect("application should succeed");
    let direct = gates::apply(state, &rz(FRAC_PI_3 + 1.9)).expect("application should succeed");
    assert!(composed.approx_eq(&direct));
}

#[test]
fn rotations_are_periodic_in_four_pi() {
    // Half-angle generators repeat only after 4π; accept the drift of one
    // extra full turn through the trig functions.
    for angle in [0.0, 1.0, -2.5] {
        let a = rx(angle);
        let b = rx(angle + 2.0 * TAU);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).norm() <= 1e-8);
        }
    }
}

#[test]
fn rx_pi_flips_the_poles() {
    let flipped = apply_named(StateId::Zero.amplitudes(), "rx", Some(PI));
    assert!(flipped.equiv_up_to_phase(&StateId::One.amplitudes()));
}

#[test]
fn non_unitary_matrix_degenerates() {
    let zero = Unitary::from_element(Complex64::ZERO);
    let err =
        gates::apply(StateId::Zero.amplitudes(), &zero).expect_err("zero matrix should fail");
    assert!(matches!(err, Error::DegenerateState { .. }));
}
