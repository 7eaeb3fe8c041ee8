// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::gates::GateId;
use thiserror::Error;

/// Errors surfaced by the engine.
///
/// `InvalidState` and `DegenerateState` indicate a contract violation by the
/// caller or an upstream bug, not a transient condition; hosts should report
/// them distinctly from user-input errors such as `UnknownGate`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("unknown gate `{0}`")]
    UnknownGate(String),

    #[error("unknown initial state `{0}`")]
    UnknownState(String),

    #[error("gate `{0}` requires an angle in radians")]
    MissingParameter(GateId),

    #[error("amplitude pair is not normalized: |α|² + |β|² = {norm_sq}")]
    InvalidState { norm_sq: f64 },

    #[error("state norm collapsed to {norm_sq}; the applied matrix is not unitary")]
    DegenerateState { norm_sq: f64 },

    #[error("operation log is empty")]
    NothingToUndo,
}
