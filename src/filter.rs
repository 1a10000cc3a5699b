//! Risk-level row filter

use crate::models::Row;

/// Returns true when any cell equals any of the labels exactly
pub fn matches_risk(row: &[String], risk_levels: &[String]) -> bool {
    risk_levels
        .iter()
        .any(|level| row.iter().any(|cell| cell == level))
}

/// Keeps rows carrying at least one risk label, in their original order.
///
/// A row matching several labels is kept once.
pub fn filter_by_risk(rows: Vec<Row>, risk_levels: &[String]) -> Vec<Row> {
    rows.into_iter()
        .filter(|row| matches_risk(row, risk_levels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn labels() -> Vec<String> {
        vec!["HIGH".to_string(), "CRITICAL".to_string()]
    }

    #[test]
    fn test_keeps_matching_rows_in_order() {
        let rows = vec![
            row(&["a", "HIGH"]),
            row(&["b", "LOW"]),
            row(&["c", "CRITICAL"]),
        ];
        let kept = filter_by_risk(rows, &labels());
        assert_eq!(kept, vec![row(&["a", "HIGH"]), row(&["c", "CRITICAL"])]);
    }

    #[test]
    fn test_multiple_labels_kept_once() {
        let rows = vec![row(&["HIGH", "CRITICAL"])];
        assert_eq!(filter_by_risk(rows, &labels()).len(), 1);
    }

    #[test]
    fn test_exact_match_only() {
        let rows = vec![
            row(&["x", "high"]),
            row(&["x", "HIGH RISK"]),
            row(&["x", " HIGH"]),
        ];
        assert!(filter_by_risk(rows, &labels()).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rows = vec![
            row(&["a", "HIGH"]),
            row(&["b", "MEDIUM"]),
            row(&["c", "CRITICAL"]),
        ];
        let once = filter_by_risk(rows, &labels());
        let twice = filter_by_risk(once.clone(), &labels());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_label_in_any_column() {
        let rows = vec![row(&["HIGH", "note"])];
        assert_eq!(filter_by_risk(rows, &labels()).len(), 1);
    }
}
