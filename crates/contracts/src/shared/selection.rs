//! Row selection of resource tables and the shared store it is published to.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type RowId = u64;

/// Ordered, de-duplicated ids of the selected rows of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSelection {
    ids: Vec<RowId>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Replaces the selection. Returns `true` if it changed.
    pub fn set(&mut self, ids: impl IntoIterator<Item = RowId>) -> bool {
        let mut next = Vec::new();
        for id in ids {
            if !next.contains(&id) {
                next.push(id);
            }
        }
        if next == self.ids {
            return false;
        }
        self.ids = next;
        true
    }

    pub fn toggle(&mut self, id: RowId) -> bool {
        if !self.remove(id) {
            self.ids.push(id);
        }
        true
    }

    pub fn remove(&mut self, id: RowId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|x| *x != id);
        before != self.ids.len()
    }

    pub fn clear(&mut self) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        self.ids.clear();
        true
    }
}

/// Selection per resource type, visible to sibling components.
///
/// Lives in an `RwSignal` provided through context; nothing global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStore {
    published: HashMap<&'static str, Vec<RowId>>,
    active: Option<&'static str>,
    publications: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `ids` for `resource`. Returns `true` only when the set
    /// differs from the last published one.
    pub fn publish(&mut self, resource: &'static str, ids: &[RowId]) -> bool {
        if self.active != Some(resource) {
            self.reset_for(resource);
        }
        let current = self.published.entry(resource).or_default();
        if current.as_slice() == ids {
            return false;
        }
        *current = ids.to_vec();
        self.publications += 1;
        true
    }

    pub fn selected(&self, resource: &str) -> &[RowId] {
        self.published
            .get(resource)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Clears everything when the active resource type changes.
    pub fn reset_for(&mut self, resource: &'static str) {
        if self.active == Some(resource) {
            return;
        }
        log::debug!("selection reset for {}", resource);
        self.published.clear();
        self.active = Some(resource);
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn publications(&self) -> u64 {
        self.publications
    }
}

/// What the side pane of a list shows for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPane {
    None,
    Single(RowId),
    Tags(Vec<RowId>),
}

impl DetailPane {
    pub fn from_selection(ids: &[RowId]) -> Self {
        match ids {
            [] => DetailPane::None,
            [id] => DetailPane::Single(*id),
            many => DetailPane::Tags(many.to_vec()),
        }
    }
}

/// Splits `items` into the first `limit` shown as tags and a "+N" count.
pub fn split_tags<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deselect_publishes_once_per_change() {
        let mut store = SelectionStore::new();
        let mut rows = RowSelection::new();

        assert!(rows.set([3, 7]));
        assert!(store.publish("vm", rows.ids()));
        assert!(!store.publish("vm", rows.ids()));

        assert!(rows.remove(7));
        assert!(store.publish("vm", rows.ids()));

        assert_eq!(store.selected("vm"), &[3]);
        assert_eq!(store.publications(), 2);
    }

    #[test]
    fn test_set_dedups_and_reports_change() {
        let mut rows = RowSelection::new();
        assert!(rows.set([5, 5, 1]));
        assert_eq!(rows.ids(), &[5, 1]);
        assert!(!rows.set([5, 1]));
        assert!(rows.toggle(5));
        assert_eq!(rows.ids(), &[1]);
        assert!(rows.clear());
        assert!(!rows.clear());
    }

    #[test]
    fn test_resource_change_resets_store() {
        let mut store = SelectionStore::new();
        store.publish("vm", &[1, 2]);
        store.publish("host", &[4]);
        assert_eq!(store.selected("vm"), &[] as &[RowId]);
        assert_eq!(store.selected("host"), &[4]);
        assert_eq!(store.active(), Some("host"));
    }

    #[test]
    fn test_detail_pane() {
        assert_eq!(DetailPane::from_selection(&[]), DetailPane::None);
        assert_eq!(DetailPane::from_selection(&[9]), DetailPane::Single(9));
        assert_eq!(DetailPane::from_selection(&[9, 2]), DetailPane::Tags(vec![9, 2]));
    }

    #[test]
    fn test_split_tags() {
        let ids: Vec<u64> = (1..=13).collect();
        let (shown, more) = split_tags(&ids, 10);
        assert_eq!(shown.len(), 10);
        assert_eq!(more, 3);
        assert_eq!(split_tags(&ids[..2], 10), (&ids[..2], 0));
    }
}
