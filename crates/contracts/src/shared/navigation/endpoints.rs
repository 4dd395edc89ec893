//! Route registry - единственный источник правды для маршрутов консоли.
//!
//! Every screen is a `static` [`RouteEntry`]; groups reference entries by
//! address, so an entry reachable from two groups (the instantiate forms)
//! keeps one title and one icon.

use super::label::{entity_from_state, id_from_params, Label, NavigationState, RouteParams};
use super::path::{RouteGroupKey as G, RouteVariant as V};
use super::resource::{ResourceKey as R, ScreenKey as S};
use super::route::{RouteDefinition, RouteEntry, RouteGroup};

/// Declares a title function choosing between a create and an update heading.
macro_rules! create_or_update {
    ($name:ident, $create:literal, $update:literal) => {
        fn $name(_: &RouteParams, state: &NavigationState) -> Option<String> {
            Some(if state.is_update() { $update } else { $create }.to_string())
        }
    };
}

create_or_update!(vm_template_title, "Create VM Template", "Update VM Template");
create_or_update!(service_template_title, "Create Service Template", "Update Service Template");
create_or_update!(
    vrouter_template_title,
    "Create Virtual Router Template",
    "Update Virtual Router Template"
);
create_or_update!(vm_group_title, "Create VM Group", "Update VM Group");
create_or_update!(marketplace_title, "Create Marketplace", "Update Marketplace");
create_or_update!(vnet_title, "Create Virtual Network", "Update Virtual Network");
create_or_update!(
    network_template_title,
    "Create Network Template",
    "Update Network Template"
);
create_or_update!(vdc_title, "Create VDC", "Update VDC");

const BY_ID: Label = Label::Computed(id_from_params);
const BY_STATE: Label = Label::Computed(entity_from_state);

const fn detail(group: G, resource: R, title: &'static str, screen: S) -> RouteEntry {
    RouteEntry::new(group, resource, V::Detail, Label::Constant(title), screen).described(BY_ID)
}

const fn page(group: G, resource: R, variant: V, title: &'static str, screen: S) -> RouteEntry {
    RouteEntry::new(group, resource, variant, Label::Constant(title), screen)
}

const fn form(group: G, resource: R, variant: V, title: Label, screen: S) -> RouteEntry {
    RouteEntry::new(group, resource, variant, title, screen).described(BY_STATE)
}

// ═══════════════════════════════════════════════════════════════════════════
// Instances
// ═══════════════════════════════════════════════════════════════════════════

pub static VMS: RouteEntry = RouteEntry::list(G::Instance, R::Vm, S::VirtualMachines, "tv");
pub static VM_DETAIL: RouteEntry = detail(G::Instance, R::Vm, "VM", S::VirtualMachineDetail);
pub static VROUTERS: RouteEntry =
    RouteEntry::list(G::Instance, R::VirtualRouter, S::VirtualRouters, "shuffle");
pub static VROUTER_DETAIL: RouteEntry =
    detail(G::Instance, R::VirtualRouter, "Virtual Router", S::VirtualRouterDetail);
pub static SERVICES: RouteEntry = RouteEntry::list(G::Instance, R::Service, S::Services, "packages");
pub static SERVICE_DETAIL: RouteEntry = detail(G::Instance, R::Service, "Service", S::ServiceDetail);

// ═══════════════════════════════════════════════════════════════════════════
// Templates
// ═══════════════════════════════════════════════════════════════════════════

pub static VM_TEMPLATES: RouteEntry =
    RouteEntry::list(G::Template, R::VmTemplate, S::VmTemplates, "empty-page");
pub static INSTANTIATE_VM_TEMPLATE: RouteEntry = form(
    G::Template,
    R::VmTemplate,
    V::Instantiate,
    Label::Constant("Instantiate VM Template"),
    S::InstantiateVmTemplate,
);
pub static CREATE_VM_TEMPLATE: RouteEntry = form(
    G::Template,
    R::VmTemplate,
    V::Create,
    Label::Computed(vm_template_title),
    S::CreateVmTemplate,
);
pub static UPDATE_VM_TEMPLATE: RouteEntry = form(
    G::Template,
    R::VmTemplate,
    V::Update,
    Label::Computed(vm_template_title),
    S::CreateVmTemplate,
);
pub static VM_TEMPLATE_DETAIL: RouteEntry =
    detail(G::Template, R::VmTemplate, "VM Template", S::VmTemplateDetail);

pub static SERVICE_TEMPLATES: RouteEntry =
    RouteEntry::list(G::Template, R::ServiceTemplate, S::ServiceTemplates, "multiple-pages");
pub static INSTANTIATE_SERVICE_TEMPLATE: RouteEntry = form(
    G::Template,
    R::ServiceTemplate,
    V::Instantiate,
    Label::Constant("Instantiate Service Template"),
    S::InstantiateServiceTemplate,
);
pub static CREATE_SERVICE_TEMPLATE: RouteEntry = form(
    G::Template,
    R::ServiceTemplate,
    V::Create,
    Label::Computed(service_template_title),
    S::CreateServiceTemplate,
);
pub static SERVICE_TEMPLATE_DETAIL: RouteEntry =
    detail(G::Template, R::ServiceTemplate, "Service Template", S::ServiceTemplateDetail);

pub static VROUTER_TEMPLATES: RouteEntry = RouteEntry::list(
    G::Template,
    R::VirtualRouterTemplate,
    S::VirtualRouterTemplates,
    "shuffle",
);
pub static INSTANTIATE_VROUTER_TEMPLATE: RouteEntry = form(
    G::Template,
    R::VirtualRouterTemplate,
    V::Instantiate,
    Label::Constant("Instantiate Virtual Router Template"),
    S::InstantiateVirtualRouterTemplate,
);
pub static CREATE_VROUTER_TEMPLATE: RouteEntry = form(
    G::Template,
    R::VirtualRouterTemplate,
    V::Create,
    Label::Computed(vrouter_template_title),
    S::CreateVirtualRouterTemplate,
);
pub static VROUTER_TEMPLATE_DETAIL: RouteEntry = detail(
    G::Template,
    R::VirtualRouterTemplate,
    "Virtual Router Template",
    S::VirtualRouterTemplateDetail,
);

pub static VM_GROUPS: RouteEntry = RouteEntry::list(G::Template, R::VmGroup, S::VmGroups, "folder");
pub static CREATE_VM_GROUP: RouteEntry = form(
    G::Template,
    R::VmGroup,
    V::Create,
    Label::Computed(vm_group_title),
    S::CreateVmGroup,
);

// ═══════════════════════════════════════════════════════════════════════════
// Storage
// ═══════════════════════════════════════════════════════════════════════════

pub static DATASTORES: RouteEntry = RouteEntry::list(G::Storage, R::Datastore, S::Datastores, "db");
pub static CREATE_DATASTORE: RouteEntry =
    page(G::Storage, R::Datastore, V::Create, "Create Datastore", S::CreateDatastore);
pub static DATASTORE_DETAIL: RouteEntry = detail(G::Storage, R::Datastore, "Datastore", S::DatastoreDetail);
pub static IMAGES: RouteEntry = RouteEntry::list(G::Storage, R::Image, S::Images, "box-iso");
pub static CREATE_IMAGE: RouteEntry = page(G::Storage, R::Image, V::Create, "Create Image", S::CreateImage);
pub static FILES: RouteEntry = RouteEntry::list(G::Storage, R::File, S::Files, "archive");
pub static CREATE_FILE: RouteEntry = page(G::Storage, R::File, V::Create, "Create File", S::CreateFile);
pub static BACKUPS: RouteEntry = RouteEntry::list(G::Storage, R::Backup, S::Backups, "refresh-double");
pub static BACKUP_DETAIL: RouteEntry = detail(G::Storage, R::Backup, "Backup", S::BackupDetail);
pub static MARKETPLACES: RouteEntry =
    RouteEntry::list(G::Storage, R::Marketplace, S::Marketplaces, "simple-cart");
pub static CREATE_MARKETPLACE: RouteEntry = form(
    G::Storage,
    R::Marketplace,
    V::Create,
    Label::Computed(marketplace_title),
    S::CreateMarketplace,
);
pub static MARKETPLACE_APPS: RouteEntry =
    RouteEntry::list(G::Storage, R::MarketplaceApp, S::MarketplaceApps, "cloud-download");
pub static CREATE_MARKETPLACE_APP: RouteEntry = page(
    G::Storage,
    R::MarketplaceApp,
    V::Create,
    "Create Marketplace App",
    S::CreateMarketplaceApp,
);
pub static MARKETPLACE_APP_DETAIL: RouteEntry =
    detail(G::Storage, R::MarketplaceApp, "App", S::MarketplaceAppDetail);
pub static CREATE_BACKUP_JOB: RouteEntry =
    page(G::Storage, R::BackupJob, V::Create, "Create Backup Job", S::CreateBackupJob);
pub static BACKUP_JOBS: RouteEntry = RouteEntry::list(G::Storage, R::BackupJob, S::BackupJobs, "clock");
pub static BACKUP_JOB_DETAIL: RouteEntry = detail(G::Storage, R::BackupJob, "Backup Job", S::BackupJobDetail);

// ═══════════════════════════════════════════════════════════════════════════
// Networks
// ═══════════════════════════════════════════════════════════════════════════

pub static VNETS: RouteEntry =
    RouteEntry::list(G::Network, R::VirtualNetwork, S::VirtualNetworks, "network");
pub static INSTANTIATE_NETWORK_TEMPLATE: RouteEntry = form(
    G::Network,
    R::NetworkTemplate,
    V::Instantiate,
    Label::Constant("Instantiate Network Template"),
    S::InstantiateNetworkTemplate,
);
pub static CREATE_VNET: RouteEntry = form(
    G::Network,
    R::VirtualNetwork,
    V::Create,
    Label::Computed(vnet_title),
    S::CreateVirtualNetwork,
);
pub static UPDATE_VNET: RouteEntry = form(
    G::Network,
    R::VirtualNetwork,
    V::Update,
    Label::Constant("Update Virtual Network"),
    S::CreateVirtualNetwork,
);
pub static VNET_DETAIL: RouteEntry =
    detail(G::Network, R::VirtualNetwork, "Virtual Network", S::VirtualNetworkDetail);
pub static NETWORK_TEMPLATES: RouteEntry =
    RouteEntry::list(G::Network, R::NetworkTemplate, S::NetworkTemplates, "keyframes");
pub static CREATE_NETWORK_TEMPLATE: RouteEntry = form(
    G::Network,
    R::NetworkTemplate,
    V::Create,
    Label::Computed(network_template_title),
    S::CreateNetworkTemplate,
);
pub static SECURITY_GROUPS: RouteEntry =
    RouteEntry::list(G::Network, R::SecurityGroup, S::SecurityGroups, "shield");
pub static CREATE_SECURITY_GROUP: RouteEntry = page(
    G::Network,
    R::SecurityGroup,
    V::Create,
    "Create Security Group",
    S::CreateSecurityGroup,
);

// ═══════════════════════════════════════════════════════════════════════════
// Infrastructure
// ═══════════════════════════════════════════════════════════════════════════

pub static PROVIDERS: RouteEntry =
    RouteEntry::list(G::Infrastructure, R::Provider, S::Providers, "database-settings").forced();
pub static CREATE_PROVIDER: RouteEntry =
    page(G::Infrastructure, R::Provider, V::Create, "Create Provider", S::CreateProvider).forced();
pub static UPDATE_PROVIDER: RouteEntry = page(
    G::Infrastructure,
    R::Provider,
    V::Edit,
    "Update Provider",
    S::CreateProvider,
)
.described(BY_ID)
.forced();
pub static PROVISIONS: RouteEntry =
    RouteEntry::list(G::Infrastructure, R::Provision, S::Provisions, "settings-cloud").forced();
pub static CREATE_PROVISION: RouteEntry =
    page(G::Infrastructure, R::Provision, V::Create, "Create Provision", S::CreateProvision).forced();
pub static EDIT_PROVISION: RouteEntry = page(
    G::Infrastructure,
    R::Provision,
    V::Edit,
    "Edit Provision Template",
    S::CreateProvision,
)
.forced();
pub static CLUSTERS: RouteEntry = RouteEntry::list(G::Infrastructure, R::Cluster, S::Clusters, "server");
pub static CREATE_CLUSTER: RouteEntry =
    page(G::Infrastructure, R::Cluster, V::Create, "Create Cluster", S::CreateCluster);
pub static CLUSTER_DETAIL: RouteEntry = detail(G::Infrastructure, R::Cluster, "Cluster", S::ClusterDetail);
pub static HOSTS: RouteEntry = RouteEntry::list(G::Infrastructure, R::Host, S::Hosts, "hard-drive");
pub static CREATE_HOST: RouteEntry = page(G::Infrastructure, R::Host, V::Create, "Create Host", S::CreateHost);
pub static HOST_DETAIL: RouteEntry = detail(G::Infrastructure, R::Host, "Host", S::HostDetail);
pub static ZONES: RouteEntry = RouteEntry::list(G::Infrastructure, R::Zone, S::Zones, "pin");

// ═══════════════════════════════════════════════════════════════════════════
// System
// ═══════════════════════════════════════════════════════════════════════════

pub static CREATE_USER: RouteEntry = page(G::System, R::User, V::Create, "Create User", S::CreateUser);
pub static USERS: RouteEntry = RouteEntry::list(G::System, R::User, S::Users, "user");
pub static USER_DETAIL: RouteEntry = detail(G::System, R::User, "User", S::UserDetail);
pub static CREATE_GROUP: RouteEntry = page(G::System, R::Group, V::Create, "Create Group", S::CreateGroup);
pub static GROUPS: RouteEntry = RouteEntry::list(G::System, R::Group, S::Groups, "group");
pub static GROUP_DETAIL: RouteEntry = detail(G::System, R::Group, "Group", S::GroupDetail);
pub static CREATE_VDC: RouteEntry =
    RouteEntry::new(G::System, R::Vdc, V::Create, Label::Computed(vdc_title), S::CreateVdc);
pub static VDCS: RouteEntry = RouteEntry::list(G::System, R::Vdc, S::Vdcs, "list");
pub static VDC_DETAIL: RouteEntry = detail(G::System, R::Vdc, "VDC", S::VdcDetail);
pub static CREATE_ACL: RouteEntry = page(G::System, R::Acl, V::Create, "Create ACL", S::CreateAcl);
pub static ACLS: RouteEntry = RouteEntry::list(G::System, R::Acl, S::Acls, "key");

pub static SUPPORT: RouteEntry = RouteEntry::list(G::Support, R::Support, S::Support, "headset");

// ═══════════════════════════════════════════════════════════════════════════
// Menu
// ═══════════════════════════════════════════════════════════════════════════

pub static ENDPOINTS: &[RouteGroup] = &[
    RouteGroup {
        key: G::Instance,
        title: "Instances",
        icon: "cell-2x2",
        routes: &[
            &VMS,
            &VM_DETAIL,
            &VROUTERS,
            &INSTANTIATE_VROUTER_TEMPLATE,
            &VROUTER_DETAIL,
            &SERVICES,
            &INSTANTIATE_SERVICE_TEMPLATE,
            &SERVICE_DETAIL,
            &INSTANTIATE_VM_TEMPLATE,
        ],
    },
    RouteGroup {
        key: G::Template,
        title: "Templates",
        icon: "archive",
        routes: &[
            &VM_TEMPLATES,
            &INSTANTIATE_VM_TEMPLATE,
            &CREATE_VM_TEMPLATE,
            &UPDATE_VM_TEMPLATE,
            &VM_TEMPLATE_DETAIL,
            &INSTANTIATE_SERVICE_TEMPLATE,
            &SERVICE_TEMPLATES,
            &CREATE_SERVICE_TEMPLATE,
            &SERVICE_TEMPLATE_DETAIL,
            &INSTANTIATE_VROUTER_TEMPLATE,
            &VROUTER_TEMPLATES,
            &CREATE_VROUTER_TEMPLATE,
            &VROUTER_TEMPLATE_DETAIL,
            &CREATE_VM_GROUP,
            &VM_GROUPS,
        ],
    },
    RouteGroup {
        key: G::Storage,
        title: "Storage",
        icon: "box",
        routes: &[
            &DATASTORES,
            &CREATE_DATASTORE,
            &DATASTORE_DETAIL,
            &IMAGES,
            &CREATE_IMAGE,
            &FILES,
            &CREATE_FILE,
            &BACKUPS,
            &BACKUP_DETAIL,
            &MARKETPLACES,
            &CREATE_MARKETPLACE,
            &MARKETPLACE_APPS,
            &CREATE_MARKETPLACE_APP,
            &MARKETPLACE_APP_DETAIL,
            &CREATE_BACKUP_JOB,
            &BACKUP_JOBS,
            &BACKUP_JOB_DETAIL,
        ],
    },
    RouteGroup {
        key: G::Network,
        title: "Networks",
        icon: "server-connection",
        routes: &[
            &VNETS,
            &INSTANTIATE_NETWORK_TEMPLATE,
            &CREATE_VNET,
            &UPDATE_VNET,
            &VNET_DETAIL,
            &NETWORK_TEMPLATES,
            &CREATE_NETWORK_TEMPLATE,
            &SECURITY_GROUPS,
            &CREATE_SECURITY_GROUP,
        ],
    },
    RouteGroup {
        key: G::Infrastructure,
        title: "Infrastructure",
        icon: "cloud-sync",
        routes: &[
            &PROVIDERS,
            &CREATE_PROVIDER,
            &UPDATE_PROVIDER,
            &PROVISIONS,
            &CREATE_PROVISION,
            &EDIT_PROVISION,
            &CLUSTERS,
            &CREATE_CLUSTER,
            &CLUSTER_DETAIL,
            &HOSTS,
            &CREATE_HOST,
            &HOST_DETAIL,
            &ZONES,
        ],
    },
    RouteGroup {
        key: G::System,
        title: "System",
        icon: "home",
        routes: &[
            &CREATE_USER,
            &USERS,
            &USER_DETAIL,
            &CREATE_GROUP,
            &GROUPS,
            &GROUP_DETAIL,
            &CREATE_VDC,
            &VDCS,
            &VDC_DETAIL,
            &CREATE_ACL,
            &ACLS,
        ],
    },
    RouteGroup {
        key: G::Support,
        title: "Support",
        icon: "headset",
        routes: &[&SUPPORT],
    },
];

/// Menu groups in display order.
pub fn list_endpoints() -> &'static [RouteGroup] {
    ENDPOINTS
}

/// Every distinct entry in registration order. Entries shared between
/// groups appear once.
pub fn all_entries() -> Vec<&'static RouteEntry> {
    let mut entries: Vec<&'static RouteEntry> = Vec::new();
    for group in ENDPOINTS {
        for &entry in group.routes {
            if !entries.iter().any(|known| std::ptr::eq(*known, entry)) {
                entries.push(entry);
            }
        }
    }
    entries
}

/// Router-facing view of the registry.
pub fn route_definitions() -> Vec<RouteDefinition> {
    all_entries().into_iter().map(RouteEntry::definition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::navigation::path::is_registered;
    use std::collections::HashSet;

    #[test]
    fn test_menu_order_is_stable() {
        let titles: Vec<_> = list_endpoints().iter().map(|g| g.title).collect();
        assert_eq!(
            titles,
            ["Instances", "Templates", "Storage", "Networks", "Infrastructure", "System", "Support"]
        );
        assert!(std::ptr::eq(list_endpoints(), list_endpoints()));
    }

    #[test]
    fn test_paths_are_unique() {
        let mut seen = HashSet::new();
        for entry in all_entries() {
            assert!(seen.insert(entry.path()), "duplicate path {}", entry.path());
        }
    }

    #[test]
    fn test_parameterized_paths_have_list_sibling() {
        let entries = all_entries();
        for entry in entries.iter().filter(|e| e.is_parameterized()) {
            let sibling = format!("/{}", entry.resource.name());
            assert!(entry.path().starts_with(&sibling));
            assert!(
                entries.iter().any(|e| e.path() == sibling),
                "{} has no list sibling",
                entry.path()
            );
        }
    }

    #[test]
    fn test_every_entry_is_in_path_table() {
        for entry in all_entries() {
            assert!(is_registered(entry.group, entry.resource, entry.variant), "{}", entry.path());
        }
    }

    #[test]
    fn test_shared_instantiate_entries_are_one_object() {
        let instances = &list_endpoints()[0];
        let templates = &list_endpoints()[1];
        let in_instances = instances
            .routes
            .iter()
            .find(|e| e.screen == S::InstantiateServiceTemplate)
            .unwrap();
        let in_templates = templates
            .routes
            .iter()
            .find(|e| e.screen == S::InstantiateServiceTemplate)
            .unwrap();
        assert!(std::ptr::eq(*in_instances, *in_templates));

        let shared = all_entries()
            .into_iter()
            .filter(|e| e.screen == S::InstantiateServiceTemplate)
            .count();
        assert_eq!(shared, 1);
    }

    #[test]
    fn test_template_create_title_follows_state() {
        let params = RouteParams::new();
        let create = CREATE_VM_TEMPLATE.title(&params, &NavigationState::default());
        let update = CREATE_VM_TEMPLATE.title(&params, &NavigationState::for_entity("0", "alpine"));
        assert_eq!(create, "Create VM Template");
        assert_eq!(update, "Update VM Template");
        assert_eq!(
            CREATE_VM_TEMPLATE
                .description(&params, &NavigationState::for_entity("0", "alpine"))
                .as_deref(),
            Some("#0 alpine")
        );
    }

    #[test]
    fn test_support_renders_as_leaf() {
        let support = list_endpoints().last().unwrap();
        assert!(std::ptr::eq(support.as_leaf().unwrap(), &SUPPORT));
        assert!(list_endpoints()[0].as_leaf().is_none());
    }

    #[test]
    fn test_forced_routes_survive_hidden_group() {
        let infrastructure = &list_endpoints()[4];
        let visible: Vec<_> = infrastructure.visible_routes(false).iter().map(|e| e.path()).collect();
        assert_eq!(visible, ["/providers", "/provisions"]);
        assert_eq!(infrastructure.visible_routes(true).len(), 5);
    }

    #[test]
    fn test_route_definitions_cover_distinct_entries() {
        assert_eq!(route_definitions().len(), all_entries().len());
    }
}
