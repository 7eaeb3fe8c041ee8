// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Wasm bindings for the Bloch sphere engine.
//!
//! One [`BlochSession`] is created per visualizer page; the structured
//! views (`project`, `stateInfo`, `log`) cross the boundary as plain JS
//! objects via `serde-wasm-bindgen`.

use bloch_engine::{AmplitudePair, Session};
use log::debug;
use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct BlochSession {
    session: Session,
    rng: StdRng,
}

#[wasm_bindgen]
impl BlochSession {
    /// Creates a session from a canonical state identifier, e.g. the
    /// page's `state` query parameter (`0`, `1`, `plus`, `minus`, `i`,
    /// `minus-i`).
    #[wasm_bindgen(constructor)]
    pub fn new(initial_state: &str) -> Result<BlochSession, JsError> {
        let session = Session::from_state_id(initial_state)?;
        debug!("created session in state {initial_state}");
        Ok(Self {
            session,
            rng: StdRng::from_entropy(),
        })
    }

    /// Creates a session from arbitrary amplitudes, normalizing them.
    #[wasm_bindgen(js_name = "withAmplitudes")]
    pub fn with_amplitudes(
        alpha_re: f64,
        alpha_im: f64,
        beta_re: f64,
        beta_im: f64,
    ) -> Result<BlochSession, JsError> {
        let pair = AmplitudePair::from_unnormalized(
            Complex64::new(alpha_re, alpha_im),
            Complex64::new(beta_re, beta_im),
        )?;
        Ok(Self {
            session: Session::with_state(pair),
            rng: StdRng::from_entropy(),
        })
    }

    /// Creates a session whose measurement sequence replays exactly for a
    /// given seed.
    #[wasm_bindgen(js_name = "withSeed")]
    pub fn with_seed(initial_state: &str, seed: u64) -> Result<BlochSession, JsError> {
        Ok(Self {
            session: Session::from_state_id(initial_state)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Applies a gate by identifier, returning the new Bloch vector as
    /// `{ x, y, z }`.
    #[wasm_bindgen(js_name = "applyGate")]
    pub fn apply_gate(&mut self, id: &str, angle: Option<f64>) -> Result<JsValue, JsError> {
        let vector = self.session.apply_gate(id, angle)?;
        Ok(serde_wasm_bindgen::to_value(&vector)?)
    }

    /// Measures the qubit, returning the classical bit.
    pub fn measure(&mut self) -> Result<u8, JsError> {
        let outcome = self.session.measure(&mut self.rng)?;
        Ok(outcome.as_bit())
    }

    /// The geometric view `{ vector: { x, y, z }, angles: { theta, phi } }`.
    pub fn project(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.project())?)
    }

    /// The display summary backing the page's state-information panel.
    #[wasm_bindgen(js_name = "stateInfo")]
    pub fn state_info(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.state_info())?)
    }

    pub fn undo(&mut self) -> Result<(), JsError> {
        self.session.undo()?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// The ordered operation log as an array of entries.
    pub fn log(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.session.log())?)
    }
}
