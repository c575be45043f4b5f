use crate::quantity::Quantity;

/// Fractional hours.
pub type Hours = Quantity<1, 0>;

impl Hours {
    pub fn from_minutes(minutes: u32) -> Self {
        Self::from(f64::from(minutes) / 60.0)
    }
}
