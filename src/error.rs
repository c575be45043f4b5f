/// Rejected input: raised while building the entity graph, never during aggregation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("{field} of `{owner}` must not be negative, got {value}")]
    Negative { owner: String, field: &'static str, value: f64 },

    #[error("{field} of `{owner}` must be finite")]
    NotFinite { owner: String, field: &'static str },

    #[error("battery level of `{owner}` must be within 0..=100 %, got {value}")]
    BatteryLevel { owner: String, value: f64 },

    #[error("quantity of `{owner}` must be within 0..={max}, got {value}", max = u32::MAX)]
    QuantityOutOfRange { owner: String, value: i64 },

    #[error("time {hours}h {minutes}min is out of range")]
    TimeOutOfRange { hours: i64, minutes: i64 },

    #[error("duplicate {entity} `{id}`")]
    DuplicateId { entity: &'static str, id: String },

    #[error("`{referrer}` references unknown {entity} `{id}`")]
    UnknownReference { entity: &'static str, id: String, referrer: String },
}

impl InvalidInput {
    /// Check that the value is finite and non-negative.
    pub fn check_non_negative(
        owner: &str,
        field: &'static str,
        value: f64,
    ) -> Result<f64, Self> {
        if !value.is_finite() {
            Err(Self::NotFinite { owner: owner.to_owned(), field })
        } else if value < 0.0 {
            Err(Self::Negative { owner: owner.to_owned(), field, value })
        } else {
            Ok(value)
        }
    }
}
