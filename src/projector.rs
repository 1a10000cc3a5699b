//! Column projection onto an allow-list

use crate::models::{Row, Table};

/// Positions of header columns present in the allow-list, in file order
pub fn retained_positions(header: &[String], allowed: &[String]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .filter(|(_, name)| allowed.contains(name))
        .map(|(idx, _)| idx)
        .collect()
}

fn pick(row: &[String], positions: &[usize]) -> Row {
    positions
        .iter()
        .filter_map(|&idx| row.get(idx).cloned())
        .collect()
}

/// Drops every column not named in `allowed` from the header and all rows.
///
/// Positions are resolved once against the original header, so the
/// retained columns keep file order regardless of allow-list order.
pub fn project(table: Table, allowed: &[String]) -> Table {
    let positions = retained_positions(&table.header, allowed);
    let header = pick(&table.header, &positions);
    let rows = table
        .rows
        .iter()
        .map(|row| pick(row, &positions))
        .collect();
    Table::new(header, rows)
}
