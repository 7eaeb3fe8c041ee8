// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::error::Error;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Tolerance used for all normalization and equality checks.
pub const EPSILON: f64 = 1e-9;

/// Below this squared norm a vector is considered degenerate rather than
/// merely drifted; renormalizing it would amplify noise, not remove it.
pub(crate) const NORM_FLOOR: f64 = 1e-12;

/// A normalized pure single-qubit state: the coefficients (α, β) of |0⟩ and
/// |1⟩ with |α|² + |β|² = 1 within [`EPSILON`].
///
/// Immutable by construction; every transform produces a new pair and the
/// owning [`Session`](crate::Session) is the only mutable holder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmplitudePair {
    alpha: Complex64,
    beta: Complex64,
}

impl AmplitudePair {
    /// Creates a pair from already-normalized amplitudes.
    pub fn new(alpha: Complex64, beta: Complex64) -> Result<Self, Error> {
        let pair = Self { alpha, beta };
        if pair.is_normalized() {
            Ok(pair)
        } else {
            Err(Error::InvalidState {
                norm_sq: pair.norm_sq(),
            })
        }
    }

    /// Creates a pair from arbitrary amplitudes, normalizing them.
    pub fn from_unnormalized(alpha: Complex64, beta: Complex64) -> Result<Self, Error> {
        Self { alpha, beta }.renormalized()
    }

    /// Adopts the result of a matrix transform, correcting floating-point
    /// drift. The norm is left untouched when it is already within
    /// [`EPSILON`] of one.
    pub(crate) fn from_transform(alpha: Complex64, beta: Complex64) -> Result<Self, Error> {
        let pair = Self { alpha, beta };
        if pair.is_normalized() {
            Ok(pair)
        } else {
            pair.renormalized()
        }
    }

    /// Builds a pair without the normalization check, to exercise the
    /// defensive paths that guard against exactly that.
    #[cfg(test)]
    pub(crate) fn raw(alpha: Complex64, beta: Complex64) -> Self {
        Self { alpha, beta }
    }

    fn renormalized(self) -> Result<Self, Error> {
        let norm_sq = self.norm_sq();
        if norm_sq < NORM_FLOOR {
            return Err(Error::DegenerateState { norm_sq });
        }
        let norm = norm_sq.sqrt();
        Ok(Self {
            alpha: self.alpha / norm,
            beta: self.beta / norm,
        })
    }

    /// The |0⟩ state (1, 0).
    #[must_use]
    pub fn zero() -> Self {
        Self {
            alpha: Complex64::ONE,
            beta: Complex64::ZERO,
        }
    }

    /// The |1⟩ state (0, 1).
    #[must_use]
    pub fn one() -> Self {
        Self {
            alpha: Complex64::ZERO,
            beta: Complex64::ONE,
        }
    }

    #[must_use]
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    #[must_use]
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// |α|² + |β|². One within [`EPSILON`] for any constructed pair.
    #[must_use]
    pub fn norm_sq(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// The probability of observing outcome 0, clamped into [0, 1].
    #[must_use]
    pub fn prob_zero(&self) -> f64 {
        self.alpha.norm_sqr().clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        (self.norm_sq() - 1.0).abs() <= EPSILON
    }

    /// Component-wise equality within [`EPSILON`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.alpha - other.alpha).norm() <= EPSILON && (self.beta - other.beta).norm() <= EPSILON
    }

    /// Equality up to a global phase: |⟨self|other⟩| = 1 within [`EPSILON`].
    #[must_use]
    pub fn equiv_up_to_phase(&self, other: &Self) -> bool {
        let overlap = self.alpha.conj() * other.alpha + self.beta.conj() * other.beta;
        (overlap.norm() - 1.0).abs() <= EPSILON
    }

    /// The canonical state this pair matches up to global phase, if any.
    #[must_use]
    pub fn canonical_label(&self) -> Option<StateId> {
        StateId::ALL
            .into_iter()
            .find(|id| self.equiv_up_to_phase(&id.amplitudes()))
    }
}

impl Display for AmplitudePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}{:+.4}i)|0⟩ + ({:.4}{:+.4}i)|1⟩",
            self.alpha.re, self.alpha.im, self.beta.re, self.beta.im
        )
    }
}

/// Identifier of one of the six canonical initial states, the axis
/// endpoints of the Bloch sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateId {
    Zero,
    One,
    Plus,
    Minus,
    I,
    MinusI,
}

impl StateId {
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Plus,
        Self::Minus,
        Self::I,
        Self::MinusI,
    ];

    /// The amplitude pair this identifier resolves to.
    #[must_use]
    pub fn amplitudes(self) -> AmplitudePair {
        let f = Complex64::new(FRAC_1_SQRT_2, 0.0);
        let (alpha, beta) = match self {
            Self::Zero => (Complex64::ONE, Complex64::ZERO),
            Self::One => (Complex64::ZERO, Complex64::ONE),
            Self::Plus => (f, f),
            Self::Minus => (f, -f),
            Self::I => (f, f * Complex64::I),
            Self::MinusI => (f, -f * Complex64::I),
        };
        AmplitudePair { alpha, beta }
    }

    /// The Dirac label shown by hosts, e.g. `|+⟩`.
    #[must_use]
    pub fn dirac_label(self) -> &'static str {
        match self {
            Self::Zero => "|0⟩",
            Self::One => "|1⟩",
            Self::Plus => "|+⟩",
            Self::Minus => "|-⟩",
            Self::I => "|i⟩",
            Self::MinusI => "|-i⟩",
        }
    }
}

impl FromStr for StateId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::Zero),
            "1" => Ok(Self::One),
            "plus" => Ok(Self::Plus),
            "minus" => Ok(Self::Minus),
            "i" => Ok(Self::I),
            // The visualizer labels the negative y-axis `-i`.
            "minus-i" | "-i" => Ok(Self::MinusI),
            _ => Err(Error::UnknownState(s.into())),
        }
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let id = match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::I => "i",
            Self::MinusI => "minus-i",
        };
        write!(f, "{id}")
    }
}
