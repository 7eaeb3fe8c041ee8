// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::amplitude::AmplitudePair;
use crate::error::Error;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The classical bit produced by a projective z-measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Zero,
    One,
}

impl Outcome {
    #[must_use]
    pub fn as_bit(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bit())
    }
}

/// The outcome probabilities (p₀, p₁) for a state.
///
/// p₁ is derived as 1 − p₀ so the two sum to one exactly even under
/// floating-point error.
#[must_use]
pub fn probabilities(state: &AmplitudePair) -> (f64, f64) {
    let p0 = state.prob_zero();
    (p0, 1.0 - p0)
}

/// Performs a projective measurement in the computational basis.
///
/// Draws one uniform real in [0, 1) from the supplied source; the outcome
/// is [`Outcome::Zero`] when it falls below p₀. The post-measurement state
/// collapses exactly to the matching basis state, with phase canonically
/// zero. Randomness is injected so measurement is reproducible given a
/// fixed source.
pub fn measure(
    state: &AmplitudePair,
    rng: &mut impl Rng,
) -> Result<(Outcome, AmplitudePair), Error> {
    if !state.is_normalized() {
        return Err(Error::InvalidState {
            norm_sq: state.norm_sq(),
        });
    }

    let (p0, _) = probabilities(state);
    let r: f64 = rng.r#gen();
    if r < p0 {
        Ok((Outcome::Zero, AmplitudePair::zero()))
    } else {
        Ok((Outcome::One, AmplitudePair::one()))
    }
}
