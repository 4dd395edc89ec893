use crate::shared::components::multiple_tags::TagItem;
use contracts::domain::vm::VirtualMachine;
use contracts::shared::selection::{RowId, RowSelection};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct VmListState {
    pub items: Vec<VirtualMachine>,
    pub selection: RowSelection,
    /// Row highlighted by "locate"
    pub located: Option<RowId>,
    pub is_loaded: bool,
    pub error: Option<String>,
}

impl VmListState {
    pub fn find(&self, id: RowId) -> Option<&VirtualMachine> {
        self.items.iter().find(|vm| vm.id == id)
    }

    /// Selected VMs in selection order. Ids no longer in the list are skipped.
    pub fn selected_items(&self) -> Vec<VirtualMachine> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.find(*id).cloned())
            .collect()
    }

    pub fn tags(&self) -> Vec<TagItem> {
        self.selection
            .ids()
            .iter()
            .map(|id| TagItem {
                id: *id,
                label: self
                    .find(*id)
                    .map(|vm| vm.name.clone())
                    .unwrap_or_else(|| format!("#{}", id)),
            })
            .collect()
    }

    pub fn all_selected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|vm| self.selection.contains(vm.id))
    }

    pub fn partially_selected(&self) -> bool {
        !self.selection.is_empty() && !self.all_selected()
    }

    /// Replaces the rows; selected ids that disappeared are dropped.
    pub fn set_items(&mut self, items: Vec<VirtualMachine>) {
        let kept: Vec<RowId> = self
            .selection
            .ids()
            .iter()
            .copied()
            .filter(|id| items.iter().any(|vm| vm.id == *id))
            .collect();
        self.selection.set(kept);
        self.items = items;
        self.is_loaded = true;
        self.error = None;
    }
}

pub fn create_state() -> RwSignal<VmListState> {
    RwSignal::new(VmListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vm(id: u64, name: &str) -> VirtualMachine {
        serde_json::from_value(json!({ "ID": id.to_string(), "NAME": name })).unwrap()
    }

    #[test]
    fn test_tags_follow_selection_order() {
        let mut state = VmListState::default();
        state.set_items(vec![vm(3, "db"), vm(7, "web")]);
        state.selection.set([7, 3, 11]);

        let labels: Vec<String> = state.tags().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["web", "db", "#11"]);
        assert_eq!(state.selected_items().len(), 2);
    }

    #[test]
    fn test_reload_drops_missing_rows_from_selection() {
        let mut state = VmListState::default();
        state.set_items(vec![vm(3, "db"), vm(7, "web")]);
        state.selection.set([3, 7]);
        assert!(state.all_selected());

        state.set_items(vec![vm(3, "db"), vm(8, "cache")]);
        assert_eq!(state.selection.ids(), &[3]);
        assert!(state.partially_selected());
    }
}
