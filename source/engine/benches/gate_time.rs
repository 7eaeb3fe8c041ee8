// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use bloch_engine::{Session, StateId, apply, resolve, rz};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn fixed_gate_application(c: &mut Criterion) {
    let h = resolve("h".parse().expect("h should parse"), None).expect("h should resolve");
    let state = StateId::Zero.amplitudes();
    c.bench_function("apply hadamard", |b| {
        b.iter(|| apply(black_box(state), black_box(&h)).expect("application should succeed"));
    });
}

fn rotation_resolution(c: &mut Criterion) {
    let state = StateId::Plus.amplitudes();
    c.bench_function("resolve and apply rz", |b| {
        b.iter(|| {
            apply(black_box(state), &rz(black_box(0.37))).expect("application should succeed")
        });
    });
}

fn session_replay(c: &mut Criterion) {
    c.bench_function("session of 100 gates and a measurement", |b| {
        b.iter(|| {
            let mut session = Session::new(StateId::Zero);
            let mut rng = StdRng::seed_from_u64(7);
            for i in 0..100 {
                match i % 4 {
                    0 => session.apply_gate("h", None),
                    1 => session.apply_gate("rz", Some(0.21)),
                    2 => session.apply_gate("t", None),
                    _ => session.apply_gate("ry", Some(-1.3)),
                }
                .expect("gate should apply");
            }
            session.measure(&mut rng).expect("measurement should succeed")
        });
    });
}

criterion_group!(
    benches,
    fixed_gate_application,
    rotation_resolution,
    session_replay
);
criterion_main!(benches);
