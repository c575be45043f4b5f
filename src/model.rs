//! Entity graph and its cost/duration roll-ups, leaf to root:
//! [`Resource`] → [`Operation`] → [`Process`] → [`Warehouse`].
//!
//! Everything here is pure: the graph is validated when built, and aggregation never fails.

pub mod operation;
pub mod position;
pub mod process;
pub mod resource;
pub mod time;
pub mod warehouse;

pub use self::{
    operation::{Operation, OperationKind},
    position::Position,
    process::{Process, ProcessKind},
    resource::{
        HardwareResource,
        HumanResource,
        MaterialResource,
        Resource,
        ResourceKind,
        SoftwareResource,
        VehicleResource,
    },
    time::Time,
    warehouse::{Summary, Warehouse, WarehouseKind},
};
