// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::amplitude::{AmplitudePair, StateId};
use crate::bloch::{self, BlochVector, Projection};
use crate::error::Error;
use crate::gates::{self, GateId};
use crate::measure::{self, Outcome};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The operation recorded by a [`LogEntry`]. Measurements are tagged
/// distinctly from gate applications.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LogOp {
    Gate { id: GateId, angle: Option<f64> },
    Measurement { outcome: Outcome },
}

/// One committed operation: what ran, the state it produced, and its
/// position in the session's history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub index: usize,
    pub op: LogOp,
    pub state: AmplitudePair,
}

/// Display-oriented summary of the current state, matching the
/// visualizer's information panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateInfo {
    /// Dirac label when the state matches a canonical one up to global
    /// phase, e.g. `|+⟩`.
    pub label: Option<String>,
    pub prob_zero: f64,
    pub prob_one: f64,
    pub theta: f64,
    pub phi: f64,
    pub theta_degrees: f64,
    pub phi_degrees: f64,
}

/// One interactive session: the current state plus an append-only log of
/// applied operations.
///
/// A session is a single-writer resource. The engine performs no internal
/// locking; a multi-threaded host must serialize access to a given
/// session, while independent sessions share nothing and may run
/// concurrently.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    initial: AmplitudePair,
    current: AmplitudePair,
    log: Vec<LogEntry>,
}

impl Session {
    /// Creates a session starting in one of the six canonical states.
    #[must_use]
    pub fn new(initial: StateId) -> Self {
        Self::with_state(initial.amplitudes())
    }

    /// Creates a session starting in an arbitrary (already validated)
    /// state.
    #[must_use]
    pub fn with_state(initial: AmplitudePair) -> Self {
        Self {
            initial,
            current: initial,
            log: Vec::new(),
        }
    }

    /// Creates a session from a canonical state identifier string.
    pub fn from_state_id(id: &str) -> Result<Self, Error> {
        Ok(Self::new(id.parse()?))
    }

    #[must_use]
    pub fn current(&self) -> AmplitudePair {
        self.current
    }

    #[must_use]
    pub fn initial(&self) -> AmplitudePair {
        self.initial
    }

    /// The ordered log of committed operations. Restartable; the borrow
    /// keeps the snapshot stable while it is iterated.
    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Resolves and applies a gate, committing the new state and
    /// returning its Bloch vector.
    ///
    /// The session is left unchanged on any error; a transform either
    /// fully commits or does not happen.
    pub fn apply_gate(&mut self, id: &str, angle: Option<f64>) -> Result<BlochVector, Error> {
        let gate: GateId = id.parse()?;
        let matrix = gates::resolve(gate, angle)?;
        let next = gates::apply(self.current, &matrix)?;

        let angle = if gate.requires_angle() { angle } else { None };
        self.commit(LogOp::Gate { id: gate, angle }, next);
        debug!("applied gate {gate} -> {next}");
        Ok(bloch::project(&next).vector)
    }

    /// Measures the qubit in the computational basis, committing the
    /// collapsed state.
    pub fn measure(&mut self, rng: &mut impl Rng) -> Result<Outcome, Error> {
        let (outcome, post) = measure::measure(&self.current, rng)?;
        self.commit(LogOp::Measurement { outcome }, post);
        debug!("measured {outcome}, collapsed to {post}");
        Ok(outcome)
    }

    /// The geometric view of the current state. Read-only.
    #[must_use]
    pub fn project(&self) -> Projection {
        bloch::project(&self.current)
    }

    /// The display summary of the current state.
    #[must_use]
    pub fn state_info(&self) -> StateInfo {
        let angles = self.project().angles;
        let (prob_zero, prob_one) = measure::probabilities(&self.current);
        StateInfo {
            label: self
                .current
                .canonical_label()
                .map(|id| id.dirac_label().to_string()),
            prob_zero,
            prob_one,
            theta: angles.theta,
            phi: angles.phi,
            theta_degrees: angles.theta.to_degrees(),
            phi_degrees: angles.phi.to_degrees(),
        }
    }

    /// Restores the initial state and clears the log.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.log.clear();
    }

    /// Removes the last committed operation, restoring the state it
    /// replaced.
    pub fn undo(&mut self) -> Result<(), Error> {
        if self.log.pop().is_none() {
            return Err(Error::NothingToUndo);
        }
        self.current = self.log.last().map_or(self.initial, |entry| entry.state);
        Ok(())
    }

    fn commit(&mut self, op: LogOp, state: AmplitudePair) {
        self.log.push(LogEntry {
            index: self.log.len(),
            op,
            state,
        });
        self.current = state;
    }
}
