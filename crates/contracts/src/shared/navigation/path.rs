//! Path table: which (group, resource, variant) triples exist and how their
//! templated paths are built.

use serde::{Deserialize, Serialize};

use super::resource::ResourceKey;
use crate::shared::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteGroupKey {
    Instance,
    Template,
    Storage,
    Network,
    Infrastructure,
    System,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteVariant {
    List,
    Detail,
    Create,
    Update,
    Instantiate,
    Edit,
}

impl RouteVariant {
    /// Template with `{resource}` standing for the resource name.
    pub const fn template(&self) -> &'static str {
        match self {
            Self::List => "/{resource}",
            Self::Detail => "/{resource}/:id",
            Self::Create => "/{resource}/create",
            Self::Update => "/{resource}/update",
            Self::Instantiate => "/{resource}/instantiate",
            Self::Edit => "/{resource}/edit/:id",
        }
    }

    pub const fn is_parameterized(&self) -> bool {
        matches!(self, Self::Detail | Self::Edit)
    }

    pub fn build(&self, resource: ResourceKey) -> String {
        self.template().replace("{resource}", resource.name())
    }
}

/// One row of the path table.
#[derive(Debug, Clone, Copy)]
pub struct PathSpec {
    pub group: RouteGroupKey,
    pub resource: ResourceKey,
    pub variants: &'static [RouteVariant],
}

use RouteVariant::*;

pub static PATHS: &[PathSpec] = &[
    // ── Instances ────────────────────────────────────────────────────────
    PathSpec { group: RouteGroupKey::Instance, resource: ResourceKey::Vm, variants: &[List, Detail] },
    PathSpec { group: RouteGroupKey::Instance, resource: ResourceKey::VirtualRouter, variants: &[List, Detail] },
    PathSpec { group: RouteGroupKey::Instance, resource: ResourceKey::Service, variants: &[List, Detail] },
    // ── Templates ────────────────────────────────────────────────────────
    PathSpec {
        group: RouteGroupKey::Template,
        resource: ResourceKey::VmTemplate,
        variants: &[List, Instantiate, Create, Update, Detail],
    },
    PathSpec {
        group: RouteGroupKey::Template,
        resource: ResourceKey::VmGroup,
        variants: &[List, Instantiate, Create, Detail],
    },
    PathSpec {
        group: RouteGroupKey::Template,
        resource: ResourceKey::VirtualRouterTemplate,
        variants: &[List, Detail, Instantiate, Create],
    },
    PathSpec {
        group: RouteGroupKey::Template,
        resource: ResourceKey::ServiceTemplate,
        variants: &[List, Detail, Instantiate, Create],
    },
    // ── Storage ──────────────────────────────────────────────────────────
    PathSpec { group: RouteGroupKey::Storage, resource: ResourceKey::Datastore, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::Storage, resource: ResourceKey::Image, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::Storage, resource: ResourceKey::File, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::Storage, resource: ResourceKey::Backup, variants: &[List, Detail] },
    PathSpec { group: RouteGroupKey::Storage, resource: ResourceKey::Marketplace, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::Storage, resource: ResourceKey::MarketplaceApp, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::Storage, resource: ResourceKey::BackupJob, variants: &[List, Detail, Create] },
    // ── Networks ─────────────────────────────────────────────────────────
    PathSpec {
        group: RouteGroupKey::Network,
        resource: ResourceKey::VirtualNetwork,
        variants: &[List, Detail, Create, Update],
    },
    PathSpec {
        group: RouteGroupKey::Network,
        resource: ResourceKey::NetworkTemplate,
        variants: &[List, Instantiate, Detail, Create, Update],
    },
    PathSpec { group: RouteGroupKey::Network, resource: ResourceKey::SecurityGroup, variants: &[List, Detail, Create] },
    // ── Infrastructure ───────────────────────────────────────────────────
    PathSpec { group: RouteGroupKey::Infrastructure, resource: ResourceKey::Provider, variants: &[List, Create, Edit] },
    PathSpec { group: RouteGroupKey::Infrastructure, resource: ResourceKey::Provision, variants: &[List, Create, Edit] },
    PathSpec { group: RouteGroupKey::Infrastructure, resource: ResourceKey::Cluster, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::Infrastructure, resource: ResourceKey::Host, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::Infrastructure, resource: ResourceKey::Zone, variants: &[List, Detail] },
    // ── System ───────────────────────────────────────────────────────────
    PathSpec { group: RouteGroupKey::System, resource: ResourceKey::User, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::System, resource: ResourceKey::Group, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::System, resource: ResourceKey::Vdc, variants: &[List, Detail, Create] },
    PathSpec { group: RouteGroupKey::System, resource: ResourceKey::Acl, variants: &[List, Create] },
    // ── Support ──────────────────────────────────────────────────────────
    PathSpec { group: RouteGroupKey::Support, resource: ResourceKey::Support, variants: &[List] },
];

/// Returns `true` when the triple is present in [`PATHS`].
pub fn is_registered(group: RouteGroupKey, resource: ResourceKey, variant: RouteVariant) -> bool {
    PATHS
        .iter()
        .any(|spec| spec.group == group && spec.resource == resource && spec.variants.contains(&variant))
}

/// Resolves the templated path of a resource route.
///
/// ```rust,ignore
/// let path = resolve_path(RouteGroupKey::Instance, ResourceKey::Vm, RouteVariant::Detail)?;
/// assert_eq!(path, "/vm/:id");
/// ```
pub fn resolve_path(
    group: RouteGroupKey,
    resource: ResourceKey,
    variant: RouteVariant,
) -> Result<String, NavigationError> {
    if !is_registered(group, resource, variant) {
        return Err(NavigationError::UnknownRoute {
            group,
            resource,
            variant,
        });
    }
    Ok(variant.build(resource))
}

/// Substitutes `:name` placeholders of a templated path.
/// Unknown placeholders are left untouched.
pub fn fill_path(template: &str, params: &[(&str, &str)]) -> String {
    template
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| segment.to_string()),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(
            resolve_path(RouteGroupKey::Instance, ResourceKey::Vm, RouteVariant::List).unwrap(),
            "/vm"
        );
        assert_eq!(
            resolve_path(RouteGroupKey::Template, ResourceKey::VmTemplate, RouteVariant::Instantiate).unwrap(),
            "/vm-template/instantiate"
        );
        assert_eq!(
            resolve_path(RouteGroupKey::Infrastructure, ResourceKey::Provider, RouteVariant::Edit).unwrap(),
            "/providers/edit/:id"
        );
        assert_eq!(
            resolve_path(RouteGroupKey::Support, ResourceKey::Support, RouteVariant::List).unwrap(),
            "/support"
        );
    }

    #[test]
    fn test_resolve_unknown_triple_fails() {
        let err = resolve_path(RouteGroupKey::Instance, ResourceKey::Vm, RouteVariant::Create).unwrap_err();
        assert_eq!(
            err,
            NavigationError::UnknownRoute {
                group: RouteGroupKey::Instance,
                resource: ResourceKey::Vm,
                variant: RouteVariant::Create,
            }
        );

        // The resource exists, but under another group.
        assert!(resolve_path(RouteGroupKey::System, ResourceKey::Vm, RouteVariant::List).is_err());
    }

    #[test]
    fn test_every_resource_has_a_list_path() {
        for spec in PATHS {
            assert!(
                spec.variants.contains(&RouteVariant::List),
                "{:?} has no list path",
                spec.resource
            );
        }
    }

    #[test]
    fn test_fill_path() {
        assert_eq!(fill_path("/vm/:id", &[("id", "42")]), "/vm/42");
        assert_eq!(fill_path("/providers/edit/:id", &[("id", "7")]), "/providers/edit/7");
        assert_eq!(fill_path("/vm/:id", &[]), "/vm/:id");
    }
}
