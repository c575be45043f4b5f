//! Costable resources.
//!
//! Time-based resources are charged `hours × hourly rate` for the duration they are used.
//! Materials are charged per unit and ignore the duration. Vehicles pay the time-based
//! charge plus a flat consumption surcharge per use.

use std::fmt::{Display, Formatter};

use bon::bon;

use crate::{
    error::InvalidInput,
    model::{Position, Time},
    quantity::{cost::Cost, rate::HourlyRate},
};

#[derive(Debug, clap::ValueEnum, derive_more::Display, enumset::EnumSetType)]
pub enum ResourceKind {
    /// Labour.
    Human,

    /// Consumables charged per unit.
    Material,

    /// Licensed software charged per hour.
    Software,

    /// Stationary equipment.
    Hardware,

    /// Automated guided vehicles.
    Vehicle,
}

#[derive(Clone, Debug, PartialEq, derive_more::From)]
pub enum Resource {
    Human(HumanResource),
    Material(MaterialResource),
    Software(SoftwareResource),
    Hardware(HardwareResource),
    Vehicle(VehicleResource),
}

impl Resource {
    /// Cost of using the resource for the given duration.
    pub fn cost(&self, duration: Time) -> Cost {
        match self {
            Self::Human(HumanResource { hourly_rate, .. })
            | Self::Software(SoftwareResource { hourly_rate, .. })
            | Self::Hardware(HardwareResource { hourly_rate, .. }) => {
                *hourly_rate * duration.to_hours()
            }
            Self::Material(resource) => resource.cost(),
            Self::Vehicle(resource) => {
                resource.hourly_rate * duration.to_hours() + resource.consumption
            }
        }
    }

    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Human(_) => ResourceKind::Human,
            Self::Material(_) => ResourceKind::Material,
            Self::Software(_) => ResourceKind::Software,
            Self::Hardware(_) => ResourceKind::Hardware,
            Self::Vehicle(_) => ResourceKind::Vehicle,
        }
    }

    /// Name that operations use to refer to the resource.
    pub fn name(&self) -> &str {
        match self {
            Self::Human(HumanResource { name, .. })
            | Self::Material(MaterialResource { name, .. })
            | Self::Software(SoftwareResource { name, .. })
            | Self::Hardware(HardwareResource { name, .. })
            | Self::Vehicle(VehicleResource { name, .. }) => name,
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human(resource) => {
                write!(f, "Human: {} ({})", resource.name, resource.skill_level)
            }
            Self::Material(resource) => {
                write!(f, "Material: {} (Qty: {})", resource.name, resource.quantity)
            }
            Self::Software(resource) => {
                write!(f, "Software: {} v{}", resource.name, resource.version)
            }
            Self::Hardware(resource) => write!(f, "Hardware: {}", resource.name),
            Self::Vehicle(resource) => write!(
                f,
                "AGV {} | Battery: {:?}% | Position: {}",
                resource.id, resource.battery_level, resource.position
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HumanResource {
    name: String,
    hourly_rate: HourlyRate,
    skill_level: String,
}

impl HumanResource {
    pub fn try_new(
        name: impl Into<String>,
        hourly_rate: f64,
        skill_level: impl Into<String>,
    ) -> Result<Self, InvalidInput> {
        let name = name.into();
        let hourly_rate = InvalidInput::check_non_negative(&name, "hourly rate", hourly_rate)?;
        Ok(Self { name, hourly_rate: hourly_rate.into(), skill_level: skill_level.into() })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialResource {
    name: String,
    unit_price: Cost,
    quantity: u32,
}

impl MaterialResource {
    pub fn try_new(
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Result<Self, InvalidInput> {
        let name = name.into();
        let unit_price = InvalidInput::check_non_negative(&name, "unit price", unit_price)?;
        Ok(Self { name, unit_price: unit_price.into(), quantity })
    }

    pub fn cost(&self) -> Cost {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SoftwareResource {
    name: String,
    hourly_rate: HourlyRate,
    version: String,
}

impl SoftwareResource {
    pub fn try_new(
        name: impl Into<String>,
        hourly_rate: f64,
        version: impl Into<String>,
    ) -> Result<Self, InvalidInput> {
        let name = name.into();
        let hourly_rate = InvalidInput::check_non_negative(&name, "hourly rate", hourly_rate)?;
        Ok(Self { name, hourly_rate: hourly_rate.into(), version: version.into() })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HardwareResource {
    name: String,
    hourly_rate: HourlyRate,
}

impl HardwareResource {
    pub fn try_new(name: impl Into<String>, hourly_rate: f64) -> Result<Self, InvalidInput> {
        let name = name.into();
        let hourly_rate = InvalidInput::check_non_negative(&name, "hourly rate", hourly_rate)?;
        Ok(Self { name, hourly_rate: hourly_rate.into() })
    }
}

/// Automated guided vehicle, registered under the name `AGV-<id>`.
///
/// Speeds are informational, `current_speed` is not checked against `max_speed`.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleResource {
    id: String,
    name: String,
    hourly_rate: HourlyRate,

    /// State of charge, percent.
    battery_level: f64,

    /// Flat surcharge added to every use.
    consumption: Cost,

    pub recharge_time: Time,
    pub position: Position,
    pub max_speed: f64,
    pub current_speed: f64,
}

#[bon]
impl VehicleResource {
    #[allow(clippy::too_many_arguments)]
    #[builder]
    pub fn new(
        #[builder(into)] id: String,
        hourly_rate: f64,
        battery_level: f64,
        consumption: f64,
        #[builder(default)] recharge_time: Time,
        #[builder(default)] position: Position,
        #[builder(default)] max_speed: f64,
        #[builder(default)] current_speed: f64,
    ) -> Result<Self, InvalidInput> {
        let name = format!("AGV-{id}");
        let hourly_rate = InvalidInput::check_non_negative(&name, "hourly rate", hourly_rate)?;
        let consumption = InvalidInput::check_non_negative(&name, "consumption", consumption)?;
        if !(0.0..=100.0).contains(&battery_level) {
            return Err(InvalidInput::BatteryLevel { owner: name, value: battery_level });
        }
        Ok(Self {
            id,
            name,
            hourly_rate: hourly_rate.into(),
            battery_level,
            consumption: consumption.into(),
            recharge_time,
            position,
            max_speed,
            current_speed,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn john() -> Resource {
        HumanResource::try_new("John", 20.0, "Skilled Worker").unwrap().into()
    }

    fn agv_a1() -> Resource {
        VehicleResource::builder()
            .id("A1")
            .hourly_rate(8.0)
            .battery_level(80.0)
            .consumption(5.5)
            .recharge_time(Time::new(1, 0))
            .position(Position::new(0.0, 0.0))
            .max_speed(2.0)
            .current_speed(1.5)
            .build()
            .unwrap()
            .into()
    }

    fn steel_beams() -> Resource {
        MaterialResource::try_new("Steel Beams", 15.0, 5).unwrap().into()
    }

    #[test]
    fn test_human_cost() {
        assert_abs_diff_eq!(john().cost(Time::new(2, 0)).into_inner(), 40.0);
        assert_abs_diff_eq!(john().cost(Time::new(0, 45)).into_inner(), 15.0);
    }

    #[test]
    fn test_time_based_cost_matches_formula() {
        let resources: [Resource; 3] = [
            john(),
            SoftwareResource::try_new("WarehouseApp", 10.0, "v1.2").unwrap().into(),
            HardwareResource::try_new("Forklift", 12.5).unwrap().into(),
        ];
        let rates = [20.0, 10.0, 12.5];
        for (resource, rate) in resources.iter().zip(rates) {
            for duration in [Time::new(0, 1), Time::new(1, 30), Time::new(7, 59)] {
                let expected = f64::from(duration.to_minutes()) / 60.0 * rate;
                assert_eq!(resource.cost(duration).into_inner(), expected, "{resource}");
            }
        }
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(john().cost(Time::ZERO), Cost::ZERO);
        assert_abs_diff_eq!(agv_a1().cost(Time::ZERO).into_inner(), 5.5);
        assert_abs_diff_eq!(steel_beams().cost(Time::ZERO).into_inner(), 75.0);
    }

    #[test]
    fn test_material_ignores_duration() {
        let material = steel_beams();
        for duration in [Time::ZERO, Time::new(2, 0), Time::new(100, 59)] {
            assert_abs_diff_eq!(material.cost(duration).into_inner(), 75.0);
        }
    }

    #[test]
    fn test_vehicle_cost() {
        assert_abs_diff_eq!(agv_a1().cost(Time::new(2, 0)).into_inner(), 21.5);
        assert_abs_diff_eq!(agv_a1().cost(Time::new(2, 15)).into_inner(), 2.25 * 8.0 + 5.5);
    }

    #[test]
    fn test_vehicle_name() {
        assert_eq!(agv_a1().name(), "AGV-A1");
        assert_eq!(agv_a1().kind(), ResourceKind::Vehicle);
    }

    #[test]
    fn test_vehicle_defaults() {
        let vehicle = VehicleResource::builder()
            .id("A3")
            .hourly_rate(1.0)
            .battery_level(100.0)
            .consumption(0.0)
            .build()
            .unwrap();
        assert_eq!(vehicle.recharge_time, Time::ZERO);
        assert_eq!(vehicle.position, Position::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(john().to_string(), "Human: John (Skilled Worker)");
        assert_eq!(steel_beams().to_string(), "Material: Steel Beams (Qty: 5)");
        assert_eq!(agv_a1().to_string(), "AGV A1 | Battery: 80.0% | Position: (0.0, 0.0)");
        assert_eq!(
            Resource::from(SoftwareResource::try_new("InventorySys", 12.0, "2.0").unwrap())
                .to_string(),
            "Software: InventorySys v2.0",
        );
    }

    #[test]
    fn test_rejects_negative_rate() {
        assert_eq!(
            HumanResource::try_new("Mary", -25.0, "Supervisor"),
            Err(InvalidInput::Negative {
                owner: "Mary".to_owned(),
                field: "hourly rate",
                value: -25.0
            }),
        );
        assert!(MaterialResource::try_new("Boxes", -1.0, 10).is_err());
        assert!(HardwareResource::try_new("Crane", f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_battery_level() {
        let result = VehicleResource::builder()
            .id("A9")
            .hourly_rate(9.0)
            .battery_level(120.0)
            .consumption(6.0)
            .build();
        assert_eq!(
            result,
            Err(InvalidInput::BatteryLevel { owner: "AGV-A9".to_owned(), value: 120.0 })
        );
    }
}
