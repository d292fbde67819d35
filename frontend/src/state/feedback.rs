//! Editable feedback grid.

use serde_json::Value;

use crate::types::{display_value, FeedbackRow};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackGrid {
    rows: Vec<FeedbackRow>,
}

impl FeedbackGrid {
    pub fn new(rows: Vec<FeedbackRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FeedbackRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header row: the keys of the first row.
    pub fn columns(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Text shown in one cell input.
    pub fn cell(&self, row: usize, column: &str) -> String {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(display_value)
            .unwrap_or_default()
    }

    /// Overwrite one cell with the typed text. Returns `false` for an unknown row.
    pub fn set_cell(&mut self, row: usize, column: &str, value: impl Into<String>) -> bool {
        match self.rows.get_mut(row) {
            Some(r) => {
                r.insert(column.to_string(), Value::String(value.into()));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> FeedbackGrid {
        let rows: Vec<FeedbackRow> = serde_json::from_str(
            r#"[
                {"test_case_id": 1, "Verdict": "Duplicate", "Comment": null},
                {"test_case_id": 2, "Verdict": "Unique", "Comment": "ok"}
            ]"#,
        )
        .unwrap();
        FeedbackGrid::new(rows)
    }

    #[test]
    fn test_columns_keep_server_order() {
        assert_eq!(grid().columns(), vec!["test_case_id", "Verdict", "Comment"]);
        assert!(FeedbackGrid::default().columns().is_empty());
    }

    #[test]
    fn test_set_cell_changes_only_that_cell() {
        let mut grid = grid();
        let before = grid.clone();

        assert!(grid.set_cell(0, "Verdict", "Unique"));

        assert_eq!(grid.cell(0, "Verdict"), "Unique");
        assert_eq!(grid.cell(0, "test_case_id"), "1");
        assert_eq!(grid.cell(0, "Comment"), "");
        assert_eq!(grid.rows()[1], before.rows()[1]);
        assert!(!grid.set_cell(9, "Verdict", "x"));
    }
}
