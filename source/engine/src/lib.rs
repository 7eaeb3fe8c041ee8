// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Single-qubit state engine behind the Bloch sphere visualizer.
//!
//! Represents a pure qubit state exactly, applies unitary gate transforms,
//! derives the Bloch-sphere view used for display, and performs projective
//! measurement with collapse. Randomness is injected, never ambient, so
//! every run is reproducible given a fixed source.

mod amplitude;
mod bloch;
mod error;
mod gates;
mod measure;
mod session;

pub use amplitude::{AmplitudePair, EPSILON, StateId};
pub use bloch::{BlochVector, Projection, SphericalAngles, project};
pub use error::Error;
pub use gates::{GateId, Unitary, apply, resolve, rx, ry, rz};
pub use measure::{Outcome, measure, probabilities};
pub use session::{LogEntry, LogOp, Session, StateInfo};
