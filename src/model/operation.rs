use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    model::{Resource, Time},
    quantity::cost::Cost,
};

/// Affects the label only.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Transport,
    Human,
}

/// A unit of work: every listed resource is used for the whole nominal time.
#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct Operation {
    #[builder(into)]
    pub id: String,

    pub kind: OperationKind,

    #[builder(into)]
    pub description: String,

    pub nominal_time: Time,

    #[builder(default)]
    pub resources: Vec<Resource>,
}

impl Operation {
    /// Sum of the resource costs over the nominal time, in the listed order.
    pub fn cost(&self) -> Cost {
        self.resources.iter().map(|resource| resource.cost(self.nominal_time)).sum()
    }

    pub const fn duration_minutes(&self) -> u32 {
        self.nominal_time.to_minutes()
    }

    pub const fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn describe(&self) -> String {
        let resource_lines: String =
            self.resources.iter().map(|resource| format!("   - {resource}\n")).collect();
        format!(
            "Operation: {} ({})\nDuration: {}\nResources:\n{resource_lines}Operation Cost: {}",
            self.id,
            self.description,
            self.nominal_time,
            self.cost().to_exact_string(),
        )
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            OperationKind::Transport => write!(f, "Transport Operation: {}", self.id),
            OperationKind::Human => write!(f, "Human Operation: {}", self.id),
        }
    }
}
