use std::{
    fmt::{Debug, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, hours::Hours};

/// Euro per hour.
pub type HourlyRate = Quantity<-1, 1>;

impl Debug for HourlyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}EUR/h", self.0.0)
    }
}

impl Mul<Hours> for HourlyRate {
    type Output = Cost;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_mul_hours() {
        let cost = HourlyRate::from(8.0) * Hours::from(2.25);
        assert_abs_diff_eq!(cost.into_inner(), 18.0);
    }
}
