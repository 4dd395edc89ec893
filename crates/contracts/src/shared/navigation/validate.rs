use std::collections::HashSet;

use super::endpoints::all_entries;
use super::path::{is_registered, RouteVariant};
use super::route::RouteEntry;
use crate::shared::error::NavigationError;

/// Checks the registry invariants. Called once at start-up; any error is a
/// configuration bug.
pub fn validate_registry() -> Result<(), NavigationError> {
    validate_entries(&all_entries())
}

pub fn validate_entries(entries: &[&RouteEntry]) -> Result<(), NavigationError> {
    let mut paths = HashSet::new();
    for entry in entries {
        let path = entry.path();
        if !is_registered(entry.group, entry.resource, entry.variant) {
            return Err(NavigationError::Unregistered(path));
        }
        if !paths.insert(path.clone()) {
            return Err(NavigationError::DuplicatePath(path));
        }
    }

    for entry in entries.iter().filter(|e| e.is_parameterized()) {
        let has_list = entries
            .iter()
            .any(|e| e.resource == entry.resource && e.variant == RouteVariant::List);
        if !has_list {
            return Err(NavigationError::MissingListSibling(entry.path()));
        }
    }

    log::debug!("route registry ok: {} entries", entries.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::navigation::endpoints::{CLUSTERS, HOST_DETAIL, VMS, VM_DETAIL};

    #[test]
    fn test_registry_is_valid() {
        assert_eq!(validate_registry(), Ok(()));
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let err = validate_entries(&[&VMS, &VM_DETAIL, &VMS]).unwrap_err();
        assert_eq!(err, NavigationError::DuplicatePath("/vm".to_string()));
    }

    #[test]
    fn test_detail_without_list_is_rejected() {
        let err = validate_entries(&[&CLUSTERS, &HOST_DETAIL]).unwrap_err();
        assert_eq!(err, NavigationError::MissingListSibling("/host/:id".to_string()));
    }
}
