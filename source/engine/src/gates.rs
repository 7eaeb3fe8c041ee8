// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::amplitude::AmplitudePair;
use crate::error::Error;
use nalgebra::{Matrix2, Vector2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

/// A 2×2 unitary acting on an [`AmplitudePair`].
pub type Unitary = Matrix2<Complex64>;

static X: LazyLock<Unitary> = LazyLock::new(|| {
    Unitary::new(
        Complex64::ZERO,
        Complex64::ONE,
        Complex64::ONE,
        Complex64::ZERO,
    )
});

static Y: LazyLock<Unitary> = LazyLock::new(|| {
    let i = Complex64::I;
    Unitary::new(Complex64::ZERO, -i, i, Complex64::ZERO)
});

static Z: LazyLock<Unitary> = LazyLock::new(|| {
    Unitary::new(
        Complex64::ONE,
        Complex64::ZERO,
        Complex64::ZERO,
        -Complex64::ONE,
    )
});

static H: LazyLock<Unitary> = LazyLock::new(|| {
    let f = Complex64::new(FRAC_1_SQRT_2, 0.0);
    Unitary::new(f, f, f, -f)
});

static S: LazyLock<Unitary> = LazyLock::new(|| {
    Unitary::new(
        Complex64::ONE,
        Complex64::ZERO,
        Complex64::ZERO,
        Complex64::I,
    )
});

static T: LazyLock<Unitary> = LazyLock::new(|| {
    Unitary::new(
        Complex64::ONE,
        Complex64::ZERO,
        Complex64::ZERO,
        (Complex64::I * FRAC_PI_4).exp(),
    )
});

static IDENTITY: LazyLock<Unitary> = LazyLock::new(Unitary::identity);

/// The rotation about the x-axis by `angle` radians.
#[must_use]
pub fn rx(angle: f64) -> Unitary {
    let sin = (angle / 2.0).sin();
    let cos = (angle / 2.0).cos();
    let i = Complex64::I;
    Unitary::new(cos.into(), -i * sin, -i * sin, cos.into())
}

/// The rotation about the y-axis by `angle` radians.
#[must_use]
pub fn ry(angle: f64) -> Unitary {
    let sin = (angle / 2.0).sin();
    let cos = (angle / 2.0).cos();
    Unitary::new(cos.into(), (-sin).into(), sin.into(), cos.into())
}

/// The rotation about the z-axis by `angle` radians.
#[must_use]
pub fn rz(angle: f64) -> Unitary {
    let i = Complex64::I;
    let a = (-i * (angle / 2.0)).exp();
    let b = (i * (angle / 2.0)).exp();
    Unitary::new(a, Complex64::ZERO, Complex64::ZERO, b)
}

/// Identifier of a catalog gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateId {
    I,
    X,
    Y,
    Z,
    H,
    S,
    T,
    Rx,
    Ry,
    Rz,
}

impl GateId {
    /// Whether this gate takes an angle parameter.
    #[must_use]
    pub fn requires_angle(self) -> bool {
        matches!(self, Self::Rx | Self::Ry | Self::Rz)
    }
}

impl FromStr for GateId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i" => Ok(Self::I),
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            "h" => Ok(Self::H),
            "s" => Ok(Self::S),
            "t" => Ok(Self::T),
            "rx" => Ok(Self::Rx),
            "ry" => Ok(Self::Ry),
            "rz" => Ok(Self::Rz),
            _ => Err(Error::UnknownGate(s.into())),
        }
    }
}

impl Display for GateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let id = match self {
            Self::I => "i",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::H => "h",
            Self::S => "s",
            Self::T => "t",
            Self::Rx => "rx",
            Self::Ry => "ry",
            Self::Rz => "rz",
        };
        write!(f, "{id}")
    }
}

/// Resolves a gate identifier to its matrix.
///
/// Fixed gates ignore a supplied angle; rotation gates fail with
/// [`Error::MissingParameter`] without one. The angle domain is
/// unrestricted.
pub fn resolve(id: GateId, angle: Option<f64>) -> Result<Unitary, Error> {
    match id {
        GateId::I => Ok(*IDENTITY),
        GateId::X => Ok(*X),
        GateId::Y => Ok(*Y),
        GateId::Z => Ok(*Z),
        GateId::H => Ok(*H),
        GateId::S => Ok(*S),
        GateId::T => Ok(*T),
        GateId::Rx => angle.map(rx).ok_or(Error::MissingParameter(id)),
        GateId::Ry => angle.map(ry).ok_or(Error::MissingParameter(id)),
        GateId::Rz => angle.map(rz).ok_or(Error::MissingParameter(id)),
    }
}

/// Applies a unitary to a state, renormalizing against floating-point
/// drift.
///
/// Fails with [`Error::DegenerateState`] when the result's norm falls below
/// the degeneracy floor; unreachable for unitary inputs, it signals a
/// non-unitary matrix constructed upstream.
pub fn apply(state: AmplitudePair, matrix: &Unitary) -> Result<AmplitudePair, Error> {
    let v = matrix * Vector2::new(state.alpha(), state.beta());
    AmplitudePair::from_transform(v.x, v.y)
}

#[cfg(test)]
mod tests;
