//! Built-in sample site: one production and one storage warehouse sharing operation `OP2`.

use crate::{
    error::InvalidInput,
    model::{
        HumanResource,
        MaterialResource,
        Operation,
        OperationKind,
        Position,
        Process,
        ProcessKind,
        SoftwareResource,
        Time,
        VehicleResource,
        Warehouse,
        WarehouseKind,
    },
    site::Site,
};

pub fn site() -> Result<Site, InvalidInput> {
    let john = HumanResource::try_new("John", 20.0, "Skilled Worker")?;
    let steel_beams = MaterialResource::try_new("Steel Beams", 15.0, 5)?;
    let warehouse_app = SoftwareResource::try_new("WarehouseApp", 10.0, "1.2")?;
    let agv_a1 = VehicleResource::builder()
        .id("A1")
        .hourly_rate(8.0)
        .battery_level(80.0)
        .consumption(5.5)
        .recharge_time(Time::new(1, 0))
        .position(Position::new(0.0, 0.0))
        .max_speed(2.0)
        .current_speed(1.5)
        .build()?;

    let mary = HumanResource::try_new("Mary", 25.0, "Supervisor")?;
    let plastic_boxes = MaterialResource::try_new("Plastic Boxes", 5.0, 10)?;
    let inventory_sys = SoftwareResource::try_new("InventorySys", 12.0, "2.0")?;
    let agv_a2 = VehicleResource::builder()
        .id("A2")
        .hourly_rate(9.0)
        .battery_level(85.0)
        .consumption(6.0)
        .recharge_time(Time::new(1, 15))
        .position(Position::new(2.0, 1.0))
        .max_speed(2.5)
        .current_speed(2.0)
        .build()?;

    let op1 = Operation::builder()
        .id("OP1")
        .kind(OperationKind::Transport)
        .description("Move materials")
        .nominal_time(Time::new(2, 0))
        .resources(vec![john.into(), agv_a1.into(), steel_beams.into()])
        .build();
    let op2 = Operation::builder()
        .id("OP2")
        .kind(OperationKind::Human)
        .description("Update system and package goods")
        .nominal_time(Time::new(1, 30))
        .resources(vec![mary.into(), warehouse_app.into(), plastic_boxes.into()])
        .build();
    let op3 = Operation::builder()
        .id("OP3")
        .kind(OperationKind::Transport)
        .description("Deliver products")
        .nominal_time(Time::new(2, 15))
        .resources(vec![agv_a2.into(), inventory_sys.into()])
        .build();

    let industrial =
        Process::new("IndustrialProcess01", ProcessKind::Industrial, vec![op1, op2.clone()]);
    let management = Process::new("ManagementProcess01", ProcessKind::Management, vec![op2, op3]);

    Ok(Site {
        warehouses: vec![
            Warehouse::new("Production WH", WarehouseKind::Production, vec![industrial]),
            Warehouse::new("Storage WH", WarehouseKind::Storage, vec![management]),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations() {
        let site = site().unwrap();
        let industrial = &site.warehouses[0].processes[0];
        let management = &site.warehouses[1].processes[0];
        let summary: Vec<(&str, f64, u32)> = industrial
            .operations
            .iter()
            .chain(&management.operations)
            .map(|operation| {
                (operation.id.as_str(), operation.cost().into_inner(), operation.duration_minutes())
            })
            .collect();
        assert_eq!(
            summary,
            [("OP1", 136.5, 120), ("OP2", 102.5, 90), ("OP2", 102.5, 90), ("OP3", 53.25, 135)],
        );
    }

    #[test]
    fn test_processes() {
        let site = site().unwrap();
        let industrial = &site.warehouses[0].processes[0];
        let management = &site.warehouses[1].processes[0];
        assert_eq!(industrial.cost().into_inner(), 239.0);
        assert_eq!(industrial.duration_minutes(), 210);
        assert_eq!(management.cost().into_inner(), 155.75);
        assert_eq!(management.duration_minutes(), 225);
    }
}
