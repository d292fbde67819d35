//! Local editing of the transaction summary before it is saved back.

use crate::types::{Synonym, TransactionMappingEntry, TransactionSummaryResponse};

/// The two editable tables of the summary editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingGroup {
    Mapped,
    Unmapped,
}

impl MappingGroup {
    pub const ALL: [MappingGroup; 2] = [MappingGroup::Mapped, MappingGroup::Unmapped];

    pub fn label(&self) -> &'static str {
        match self {
            MappingGroup::Mapped => "Mapped",
            MappingGroup::Unmapped => "Unmapped",
        }
    }
}

/// Mapped and unmapped transactions with their locally chosen targets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryEditor {
    mapped: Vec<TransactionMappingEntry>,
    unmapped: Vec<TransactionMappingEntry>,
    baselined: Vec<String>,
}

impl From<TransactionSummaryResponse> for SummaryEditor {
    fn from(response: TransactionSummaryResponse) -> Self {
        Self {
            mapped: response.mapped,
            unmapped: response.unmapped,
            baselined: response.baselined,
        }
    }
}

impl SummaryEditor {
    pub fn entries(&self, group: MappingGroup) -> &[TransactionMappingEntry] {
        match group {
            MappingGroup::Mapped => &self.mapped,
            MappingGroup::Unmapped => &self.unmapped,
        }
    }

    /// Target names offered in every selection control.
    pub fn baselined(&self) -> &[String] {
        &self.baselined
    }

    /// Set the target of one row. Other rows are left alone.
    ///
    /// An empty target means "keep the transaction name". Returns `false`
    /// when `index` is out of range.
    pub fn select_target(&mut self, group: MappingGroup, index: usize, target: impl Into<String>) -> bool {
        let entries = match group {
            MappingGroup::Mapped => &mut self.mapped,
            MappingGroup::Unmapped => &mut self.unmapped,
        };
        match entries.get_mut(index) {
            Some(entry) => {
                entry.target = target.into();
                true
            }
            None => false,
        }
    }

    /// Synonym list for saving: mapped rows first, then unmapped.
    pub fn synonyms(&self) -> Vec<Synonym> {
        self.mapped
            .iter()
            .chain(self.unmapped.iter())
            .map(|entry| Synonym {
                source_transaction: entry.transaction.clone(),
                target_transaction: entry.effective_target().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(transaction: &str, target: &str) -> TransactionMappingEntry {
        TransactionMappingEntry {
            transaction: transaction.into(),
            count: 1,
            target: target.into(),
        }
    }

    fn editor() -> SummaryEditor {
        SummaryEditor::from(TransactionSummaryResponse {
            mapped: vec![entry("A", "B"), entry("D", "")],
            unmapped: vec![entry("C", "")],
            baselined: vec!["B".into(), "E".into()],
        })
    }

    #[test]
    fn test_select_target_touches_only_one_row() {
        let mut editor = editor();
        let before = editor.clone();

        assert!(editor.select_target(MappingGroup::Mapped, 1, "E"));

        assert_eq!(editor.entries(MappingGroup::Mapped)[1].target, "E");
        assert_eq!(editor.entries(MappingGroup::Mapped)[0], before.entries(MappingGroup::Mapped)[0]);
        assert_eq!(editor.entries(MappingGroup::Unmapped), before.entries(MappingGroup::Unmapped));
        assert_eq!(editor.entries(MappingGroup::Mapped)[1].transaction, "D");
        assert_eq!(editor.entries(MappingGroup::Mapped)[1].count, 1);
    }

    #[test]
    fn test_select_target_out_of_range() {
        let mut editor = editor();
        let before = editor.clone();
        assert!(!editor.select_target(MappingGroup::Unmapped, 5, "E"));
        assert_eq!(editor, before);
    }

    #[test]
    fn test_synonyms_fall_back_to_source() {
        let editor = SummaryEditor::from(TransactionSummaryResponse {
            mapped: vec![entry("A", "B")],
            unmapped: vec![entry("C", "")],
            baselined: Vec::new(),
        });

        let payload = serde_json::to_value(editor.synonyms()).unwrap();
        assert_eq!(
            payload,
            serde_json::json!([
                {"source_transaction": "A", "target_transaction": "B"},
                {"source_transaction": "C", "target_transaction": "C"}
            ])
        );
    }

    #[test]
    fn test_clearing_a_target_restores_fallback() {
        let mut editor = editor();
        editor.select_target(MappingGroup::Mapped, 0, "");
        assert_eq!(editor.synonyms()[0].target_transaction, "A");
    }
}
