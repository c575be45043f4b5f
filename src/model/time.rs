use std::fmt::{Display, Formatter};

use crate::{error::InvalidInput, quantity::hours::Hours};

/// Whole hours and minutes. Minutes above 59 simply add up.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct Time {
    pub hours: u32,
    pub minutes: u32,
}

impl Time {
    pub const ZERO: Self = Self::new(0, 0);

    /// The caller is responsible for the total fitting into `u32` minutes,
    /// use [`Time::try_new`] for untrusted input.
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub fn try_new(hours: i64, minutes: i64) -> Result<Self, InvalidInput> {
        let out_of_range = || InvalidInput::TimeOutOfRange { hours, minutes };
        let time = Self::new(
            u32::try_from(hours).map_err(|_| out_of_range())?,
            u32::try_from(minutes).map_err(|_| out_of_range())?,
        );
        time.hours
            .checked_mul(60)
            .and_then(|minutes| minutes.checked_add(time.minutes))
            .ok_or_else(out_of_range)?;
        Ok(time)
    }

    pub const fn to_minutes(self) -> u32 {
        self.hours * 60 + self.minutes
    }

    pub fn to_hours(self) -> Hours {
        Hours::from_minutes(self.to_minutes())
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}min", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_minutes() {
        assert_eq!(Time::new(2, 0).to_minutes(), 120);
        assert_eq!(Time::new(1, 30).to_minutes(), 90);
        assert_eq!(Time::new(2, 15).to_minutes(), 135);
        assert_eq!(Time::new(0, 75).to_minutes(), 75);
        assert_eq!(Time::ZERO.to_minutes(), 0);
    }

    #[test]
    fn test_to_minutes_grid() {
        for hours in 0..30 {
            for minutes in [0, 1, 29, 59, 60, 61] {
                assert_eq!(Time::new(hours, minutes).to_minutes(), hours * 60 + minutes);
            }
        }
    }

    #[test]
    fn test_to_hours() {
        assert_abs_diff_eq!(Time::new(2, 15).to_hours().into_inner(), 2.25);
    }

    #[test]
    fn test_display() {
        assert_eq!(Time::new(2, 0).to_string(), "2h 0min");
        assert_eq!(Time::new(1, 30).to_string(), "1h 30min");
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Time::try_new(1, 15), Ok(Time::new(1, 15)));
        assert_eq!(
            Time::try_new(-1, 0),
            Err(InvalidInput::TimeOutOfRange { hours: -1, minutes: 0 })
        );
        assert_eq!(
            Time::try_new(0, -5),
            Err(InvalidInput::TimeOutOfRange { hours: 0, minutes: -5 })
        );
        assert!(Time::try_new(i64::from(u32::MAX), 0).is_err());
    }
}
