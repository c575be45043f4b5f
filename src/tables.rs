use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;

use crate::{
    model::{ResourceKind, Summary},
    quantity::cost::Cost,
};

pub fn build_totals_table(summaries: &[Summary]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Warehouse", "Kind", "Processes", "Time", "Cost"]);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.id),
            Cell::new(summary.kind).add_attribute(Attribute::Dim),
            Cell::new(summary.n_processes).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} min", summary.total_duration_minutes))
                .set_alignment(CellAlignment::Right),
            Cell::new(summary.total_cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Per-kind costs of a single warehouse, restricted to the selected kinds.
///
/// The share is relative to the whole warehouse cost, not to the selected rows.
pub fn build_breakdown_table(
    breakdown: &[(ResourceKind, Cost)],
    total_cost: Cost,
    kinds: EnumSet<ResourceKind>,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Resource", "Cost", "Share"]);
    for (kind, cost) in breakdown.iter().filter(|(kind, _)| kinds.contains(*kind)) {
        let share = if total_cost == Cost::ZERO { 0.0 } else { (*cost / total_cost).0 };
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(cost).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", share * 100.0))
                .set_alignment(CellAlignment::Right)
                .fg(if share >= 0.5 { Color::Red } else { Color::Reset }),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_totals_table() {
        let summaries: Vec<Summary> =
            sample::site().unwrap().warehouses.iter().map(|warehouse| warehouse.summary()).collect();
        let rendered = build_totals_table(&summaries).to_string();
        assert!(rendered.contains("Production WH"));
        assert!(rendered.contains("239.00 EUR"));
        assert!(rendered.contains("225 min"));
    }

    #[test]
    fn test_breakdown_table() {
        let site = sample::site().unwrap();
        let warehouse = &site.warehouses[0];
        let rendered = build_breakdown_table(
            &warehouse.cost_by_kind(),
            warehouse.total_cost(),
            ResourceKind::Human | ResourceKind::Vehicle,
        )
        .to_string();
        assert!(rendered.contains("77.50 EUR"));
        assert!(rendered.contains("21.50 EUR"));
        assert!(!rendered.contains("Material"));
    }

    #[test]
    fn test_breakdown_table_zero_total() {
        let rendered =
            build_breakdown_table(&[(ResourceKind::Hardware, Cost::ZERO)], Cost::ZERO, EnumSet::all())
                .to_string();
        assert!(rendered.contains("0.0%"));
    }
}
