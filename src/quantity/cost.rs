use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Euros.
pub type Cost = Quantity<0, 1>;

impl Cost {
    /// Full-precision amount that parses back to the same value, for reports that must add up.
    pub fn to_exact_string(self) -> String {
        format!("{} EUR", self.0.0)
    }
}

/// Rounded to cents, for tables.
impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} EUR", self.0.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}EUR", self.0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(136.5).to_string(), "136.50 EUR");
        assert_eq!(Cost::ZERO.to_string(), "0.00 EUR");
    }

    #[test]
    fn test_exact_string() {
        assert_eq!(Cost::from(136.5).to_exact_string(), "136.5 EUR");
        assert_eq!(Cost::ZERO.to_exact_string(), "0 EUR");

        let third = Cost::from(20.0 / 60.0);
        let printed = third.to_exact_string();
        let parsed: f64 = printed.strip_suffix(" EUR").unwrap().parse().unwrap();
        assert_eq!(parsed, third.into_inner());
    }
}
