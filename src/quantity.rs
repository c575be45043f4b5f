pub mod cost;
pub mod hours;
pub mod rate;

use std::{
    iter::Sum,
    ops::{Div, Mul},
};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Scalar tagged with its dimensions: powers of time (hours) and of money (euros).
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Sub,
    derive_more::SubAssign,
)]
#[from(f64, OrderedFloat<f64>)]
#[serde(transparent)]
#[must_use]
pub struct Quantity<const TIME: isize, const COST: isize>(pub OrderedFloat<f64>);

impl<const TIME: isize, const COST: isize> Quantity<TIME, COST> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn into_inner(self) -> f64 {
        self.0.0
    }
}

impl<const TIME: isize, const COST: isize> Mul<f64> for Quantity<TIME, COST> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Folds from positive zero, so that an empty sum does not print as `-0`.
impl<const TIME: isize, const COST: isize> Sum for Quantity<TIME, COST> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |sum, item| sum + item)
    }
}

impl<const TIME: isize, const COST: isize> Div<Self> for Quantity<TIME, COST> {
    type Output = OrderedFloat<f64>;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
