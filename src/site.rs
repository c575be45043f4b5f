//! TOML site description.
//!
//! ```toml
//! [[resources]]
//! kind = "human"
//! name = "John"
//! hourly_rate = 20.0
//! skill_level = "Skilled Worker"
//!
//! [[operations]]
//! id = "OP1"
//! kind = "transport"
//! description = "Move materials"
//! nominal_time = { hours = 2, minutes = 0 }
//! resources = ["John"]
//!
//! [[processes]]
//! id = "IndustrialProcess01"
//! kind = "industrial"
//! operations = ["OP1"]
//!
//! [[warehouses]]
//! id = "Production WH"
//! kind = "production"
//! processes = ["IndustrialProcess01"]
//! ```
//!
//! Operations refer to resources by name (vehicles as `AGV-<id>`), processes to operations
//! by id, and warehouses to processes by id. Entries must be declared before they are referenced.

use std::{
    collections::{HashMap, hash_map::Entry},
    path::Path,
};

use itertools::Itertools;
use serde::Deserialize;

use crate::{
    error::InvalidInput,
    model::{
        HardwareResource,
        HumanResource,
        MaterialResource,
        Operation,
        OperationKind,
        Position,
        Process,
        ProcessKind,
        Resource,
        SoftwareResource,
        Time,
        VehicleResource,
        Warehouse,
        WarehouseKind,
    },
    prelude::*,
};

/// Fully resolved and validated warehouses, in declaration order.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub warehouses: Vec<Warehouse>,
}

impl Site {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let site = Self::from_toml(&contents)
            .with_context(|| format!("failed to load `{}`", path.display()))?;
        info!(n_warehouses = site.warehouses.len(), "loaded the site");
        Ok(site)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: SiteFile = toml::from_str(contents).context("failed to parse the site file")?;
        Ok(Self::try_from(file)?)
    }
}

impl TryFrom<SiteFile> for Site {
    type Error = InvalidInput;

    fn try_from(file: SiteFile) -> Result<Self, Self::Error> {
        let mut resources = Registry::new("resource");
        for entry in file.resources {
            let resource = Resource::try_from(entry)?;
            resources.insert(resource.name().to_owned(), resource)?;
        }

        let mut operations = Registry::new("operation");
        for entry in file.operations {
            let nominal_time = Time::try_new(entry.nominal_time.hours, entry.nominal_time.minutes)?;
            let operation_resources = resources.resolve(&entry.resources, &entry.id)?;
            let operation = Operation::builder()
                .id(entry.id)
                .kind(entry.kind)
                .description(entry.description)
                .nominal_time(nominal_time)
                .resources(operation_resources)
                .build();
            operations.insert(operation.id.clone(), operation)?;
        }

        let mut processes = Registry::new("process");
        for entry in file.processes {
            let process =
                Process::new(&*entry.id, entry.kind, operations.resolve(&entry.operations, &entry.id)?);
            processes.insert(entry.id, process)?;
        }

        if let Some(id) = file.warehouses.iter().map(|entry| &entry.id).duplicates().next() {
            return Err(InvalidInput::DuplicateId { entity: "warehouse", id: id.clone() });
        }
        let warehouses = file
            .warehouses
            .into_iter()
            .map(|entry| {
                let processes = processes.resolve(&entry.processes, &entry.id)?;
                Ok(Warehouse::new(entry.id, entry.kind, processes))
            })
            .collect::<Result<_, InvalidInput>>()?;

        Ok(Self { warehouses })
    }
}

/// Named entities available for reference.
struct Registry<T> {
    entity: &'static str,
    items: HashMap<String, T>,
}

impl<T: Clone> Registry<T> {
    fn new(entity: &'static str) -> Self {
        Self { entity, items: HashMap::new() }
    }

    fn insert(&mut self, id: String, item: T) -> Result<(), InvalidInput> {
        match self.items.entry(id) {
            Entry::Occupied(entry) => {
                Err(InvalidInput::DuplicateId { entity: self.entity, id: entry.key().clone() })
            }
            Entry::Vacant(entry) => {
                entry.insert(item);
                Ok(())
            }
        }
    }

    /// Clone the referenced items, preserving the reference order.
    fn resolve(&self, ids: &[String], referrer: &str) -> Result<Vec<T>, InvalidInput> {
        ids.iter()
            .map(|id| {
                self.items.get(id).cloned().ok_or_else(|| InvalidInput::UnknownReference {
                    entity: self.entity,
                    id: id.clone(),
                    referrer: referrer.to_owned(),
                })
            })
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteFile {
    #[serde(default)]
    resources: Vec<ResourceEntry>,

    #[serde(default)]
    operations: Vec<OperationEntry>,

    #[serde(default)]
    processes: Vec<ProcessEntry>,

    #[serde(default)]
    warehouses: Vec<WarehouseEntry>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ResourceEntry {
    Human {
        name: String,
        hourly_rate: f64,
        skill_level: String,
    },
    Material {
        name: String,
        unit_price: f64,
        quantity: i64,
    },
    Software {
        name: String,
        hourly_rate: f64,
        version: String,
    },
    Hardware {
        name: String,
        hourly_rate: f64,
    },
    Vehicle {
        id: String,
        hourly_rate: f64,
        battery_level: f64,
        consumption: f64,

        #[serde(default)]
        recharge_time: TimeEntry,

        #[serde(default)]
        position: Position,

        #[serde(default)]
        max_speed: f64,

        #[serde(default)]
        current_speed: f64,
    },
}

impl TryFrom<ResourceEntry> for Resource {
    type Error = InvalidInput;

    fn try_from(entry: ResourceEntry) -> Result<Self, Self::Error> {
        let resource = match entry {
            ResourceEntry::Human { name, hourly_rate, skill_level } => {
                HumanResource::try_new(name, hourly_rate, skill_level)?.into()
            }
            ResourceEntry::Material { name, unit_price, quantity } => {
                let Ok(quantity) = u32::try_from(quantity) else {
                    return Err(InvalidInput::QuantityOutOfRange { owner: name, value: quantity });
                };
                MaterialResource::try_new(name, unit_price, quantity)?.into()
            }
            ResourceEntry::Software { name, hourly_rate, version } => {
                SoftwareResource::try_new(name, hourly_rate, version)?.into()
            }
            ResourceEntry::Hardware { name, hourly_rate } => {
                HardwareResource::try_new(name, hourly_rate)?.into()
            }
            ResourceEntry::Vehicle {
                id,
                hourly_rate,
                battery_level,
                consumption,
                recharge_time,
                position,
                max_speed,
                current_speed,
            } => VehicleResource::builder()
                .id(id)
                .hourly_rate(hourly_rate)
                .battery_level(battery_level)
                .consumption(consumption)
                .recharge_time(Time::try_new(recharge_time.hours, recharge_time.minutes)?)
                .position(position)
                .max_speed(max_speed)
                .current_speed(current_speed)
                .build()?
                .into(),
        };
        Ok(resource)
    }
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimeEntry {
    #[serde(default)]
    hours: i64,

    #[serde(default)]
    minutes: i64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OperationEntry {
    id: String,
    kind: OperationKind,
    description: String,
    nominal_time: TimeEntry,

    #[serde(default)]
    resources: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProcessEntry {
    id: String,
    kind: ProcessKind,

    #[serde(default)]
    operations: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WarehouseEntry {
    id: String,
    kind: WarehouseKind,

    #[serde(default)]
    processes: Vec<String>,
}
