// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::amplitude::{AmplitudePair, EPSILON};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A point on the unit sphere derived from an [`AmplitudePair`].
///
/// Always recomputed from the amplitudes, never stored as an independent
/// source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Spherical coordinates of a [`BlochVector`]: `theta` ∈ [0, π] is the
/// polar angle from the |0⟩ pole, `phi` ∈ [0, 2π) the azimuth. At the
/// poles `phi` is conventionally zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphericalAngles {
    pub theta: f64,
    pub phi: f64,
}

/// The full geometric view of a state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub vector: BlochVector,
    pub angles: SphericalAngles,
}

/// Projects a state onto the Bloch sphere.
///
/// Total and pure: every valid pair yields a vector of magnitude 1 within
/// [`EPSILON`], with x = 2 Re(ᾱβ), y = 2 Im(ᾱβ), z = |α|² − |β|².
#[must_use]
pub fn project(state: &AmplitudePair) -> Projection {
    let cross = state.alpha().conj() * state.beta();
    let vector = BlochVector {
        x: 2.0 * cross.re,
        y: 2.0 * cross.im,
        z: state.alpha().norm_sqr() - state.beta().norm_sqr(),
    };

    let theta = vector.z.clamp(-1.0, 1.0).acos();
    // atan2(0, 0) is 0, but make the pole convention explicit rather than
    // rely on signed-zero behavior near the axis.
    let phi = if vector.x.abs() <= EPSILON && vector.y.abs() <= EPSILON {
        0.0
    } else {
        let phi = vector.y.atan2(vector.x);
        if phi < 0.0 { phi + TAU } else { phi }
    };

    Projection {
        vector,
        angles: SphericalAngles { theta, phi },
    }
}
