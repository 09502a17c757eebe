//! Pre-approval document checklist.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One document the bank will ask for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub done: bool,
}

impl ChecklistItem {
    fn pending(label: &str) -> Self {
        Self {
            label: label.to_string(),
            done: false,
        }
    }
}

/// Documents to gather before applying for pre-approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChecklist {
    items: Vec<ChecklistItem>,
}

impl Default for DocumentChecklist {
    fn default() -> Self {
        Self {
            items: vec![
                ChecklistItem::pending("Identity and visa"),
                ChecklistItem::pending(
                    "Proof of income (last 3-6 months of payslips / tax returns)",
                ),
                ChecklistItem::pending("Proof of savings (with source of funds)"),
                ChecklistItem::pending("Credit card and loan statements"),
                ChecklistItem::pending("First home buyer and stamp duty concession eligibility"),
                ChecklistItem::pending("FIRB approval needed? (foreign buyers / temporary visas)"),
            ],
        }
    }
}

impl DocumentChecklist {
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a copy with item `index` flipped. An out-of-range index
    /// returns the checklist unchanged.
    pub fn toggle(
        &self,
        index: usize,
    ) -> Self {
        if index >= self.items.len() {
            warn!(index, len = self.items.len(), "Checklist index out of range");
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ChecklistItem {
                label: item.label.clone(),
                done: if i == index { !item.done } else { item.done },
            })
            .collect();
        Self { items }
    }

    pub fn completed(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Progress text such as `2 / 6 completed`.
    pub fn progress_label(&self) -> String {
        format!("{} / {} completed", self.completed(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_with_six_pending_documents() {
        let checklist = DocumentChecklist::default();

        assert_eq!(checklist.len(), 6);
        assert_eq!(checklist.completed(), 0);
        assert_eq!(checklist.progress_label(), "0 / 6 completed");
    }

    #[test]
    fn toggle_flips_only_the_chosen_item() {
        let original = DocumentChecklist::default();

        let toggled = original.toggle(1).toggle(3);

        assert_eq!(toggled.completed(), 2);
        assert!(toggled.items()[1].done);
        assert!(toggled.items()[3].done);
        assert_eq!(original.completed(), 0);
    }

    #[test]
    fn toggling_twice_restores_item() {
        let checklist = DocumentChecklist::default().toggle(0).toggle(0);

        assert_eq!(checklist, DocumentChecklist::default());
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let checklist = DocumentChecklist::default().toggle(42);

        assert_eq!(checklist.progress_label(), "0 / 6 completed");
    }
}
