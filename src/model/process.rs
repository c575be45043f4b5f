use serde::{Deserialize, Serialize};

use crate::{model::Operation, quantity::cost::Cost};

/// Reporting label, both kinds aggregate the same way.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ProcessKind {
    Industrial,
    Management,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Process {
    pub id: String,
    pub kind: ProcessKind,
    pub operations: Vec<Operation>,
}

impl Process {
    pub fn new(id: impl Into<String>, kind: ProcessKind, operations: Vec<Operation>) -> Self {
        Self { id: id.into(), kind, operations }
    }

    pub fn cost(&self) -> Cost {
        self.operations.iter().map(Operation::cost).sum()
    }

    /// Sum of the operation durations, so that it always agrees with [`Operation::duration_minutes`].
    ///
    /// Widened to `u64`: every operation fits into `u32` minutes, their sum may not.
    pub fn duration_minutes(&self) -> u64 {
        self.operations.iter().map(|operation| u64::from(operation.duration_minutes())).sum()
    }

    pub fn describe(&self) -> String {
        let operations: String =
            self.operations.iter().map(|operation| format!("{}\n\n", operation.describe())).collect();
        format!(
            "Process ID: {}\n{operations}Total Process Time: {} minutes\nTotal Process Cost: {}\n",
            self.id,
            self.duration_minutes(),
            self.cost().to_exact_string(),
        )
    }
}
