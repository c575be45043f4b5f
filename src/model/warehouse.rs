use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::{
    model::{Process, ResourceKind},
    quantity::cost::Cost,
};

const DIVIDER: &str = "----------------------------------";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseKind {
    Production,
    Storage,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Warehouse {
    pub id: String,
    pub kind: WarehouseKind,
    pub processes: Vec<Process>,
}

impl Warehouse {
    pub fn new(id: impl Into<String>, kind: WarehouseKind, processes: Vec<Process>) -> Self {
        Self { id: id.into(), kind, processes }
    }

    pub fn total_cost(&self) -> Cost {
        self.processes.iter().map(Process::cost).sum()
    }

    pub fn total_duration_minutes(&self) -> u64 {
        self.processes.iter().map(Process::duration_minutes).sum()
    }

    /// Full human-readable breakdown: header, every process, and the warehouse totals.
    pub fn report(&self) -> String {
        let processes: String = self
            .processes
            .iter()
            .map(|process| format!("{}\n{DIVIDER}\n", process.describe()))
            .collect();
        format!(
            "{kind} Warehouse: {id}\n{processes}Total {kind} Time: {minutes} minutes\nTotal {kind} Cost: {cost}",
            kind = self.kind,
            id = self.id,
            minutes = self.total_duration_minutes(),
            cost = self.total_cost().to_exact_string(),
        )
    }

    pub fn summary(&self) -> Summary {
        Summary {
            id: self.id.clone(),
            kind: self.kind,
            n_processes: self.processes.len(),
            total_duration_minutes: self.total_duration_minutes(),
            total_cost: self.total_cost(),
        }
    }

    /// Total cost split by resource kind, in the kind declaration order.
    ///
    /// Kinds that are not used anywhere in the warehouse are omitted.
    pub fn cost_by_kind(&self) -> Vec<(ResourceKind, Cost)> {
        let charges: Vec<(ResourceKind, Cost)> = self
            .processes
            .iter()
            .flat_map(|process| &process.operations)
            .flat_map(|operation| {
                operation
                    .resources
                    .iter()
                    .map(move |resource| (resource.kind(), resource.cost(operation.nominal_time)))
            })
            .collect();
        let used_kinds: EnumSet<ResourceKind> = charges.iter().map(|(kind, _)| *kind).collect();
        used_kinds
            .iter()
            .map(|kind| {
                let cost: Cost = charges
                    .iter()
                    .filter(|(charge_kind, _)| *charge_kind == kind)
                    .map(|(_, cost)| *cost)
                    .sum();
                (kind, cost)
            })
            .collect()
    }
}

/// Warehouse roll-up without the per-process details.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Summary {
    pub id: String,
    pub kind: WarehouseKind,
    pub n_processes: usize,
    pub total_duration_minutes: u64,
    pub total_cost: Cost,
}
