//! Resource names and screen keys.
//!
//! `ResourceKey::name` is the path segment every route of the resource is
//! built from; `ScreenKey` names the view the frontend loads for a route.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKey {
    Vm,
    VirtualRouter,
    Service,
    VmTemplate,
    VmGroup,
    VirtualRouterTemplate,
    ServiceTemplate,
    Datastore,
    Image,
    File,
    Backup,
    Marketplace,
    MarketplaceApp,
    BackupJob,
    VirtualNetwork,
    NetworkTemplate,
    SecurityGroup,
    Provider,
    Provision,
    Cluster,
    Host,
    Zone,
    User,
    Group,
    Vdc,
    Acl,
    Support,
}

impl ResourceKey {
    /// Path segment of the resource.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Vm => "vm",
            Self::VirtualRouter => "virtual-router",
            Self::Service => "service",
            Self::VmTemplate => "vm-template",
            Self::VmGroup => "vm-group",
            Self::VirtualRouterTemplate => "virtual-router-template",
            Self::ServiceTemplate => "service-template",
            Self::Datastore => "datastore",
            Self::Image => "image",
            Self::File => "file",
            Self::Backup => "backup",
            Self::Marketplace => "marketplace",
            Self::MarketplaceApp => "marketplace-app",
            Self::BackupJob => "backupjobs",
            Self::VirtualNetwork => "virtual-network",
            Self::NetworkTemplate => "network-template",
            Self::SecurityGroup => "security-group",
            Self::Provider => "providers",
            Self::Provision => "provisions",
            Self::Cluster => "cluster",
            Self::Host => "host",
            Self::Zone => "zone",
            Self::User => "user",
            Self::Group => "group",
            Self::Vdc => "virtual-data-center",
            Self::Acl => "acl",
            Self::Support => "support",
        }
    }

    /// Plural label used by list screens and as the last-resort title.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vm => "VMs",
            Self::VirtualRouter => "Virtual Routers",
            Self::Service => "Services",
            Self::VmTemplate => "VM Templates",
            Self::VmGroup => "VM Groups",
            Self::VirtualRouterTemplate => "Virtual Router Templates",
            Self::ServiceTemplate => "Service Templates",
            Self::Datastore => "Datastores",
            Self::Image => "Images",
            Self::File => "Files",
            Self::Backup => "Backups",
            Self::Marketplace => "Marketplaces",
            Self::MarketplaceApp => "Apps",
            Self::BackupJob => "Backup Jobs",
            Self::VirtualNetwork => "Virtual Networks",
            Self::NetworkTemplate => "Network Templates",
            Self::SecurityGroup => "Security Groups",
            Self::Provider => "Providers",
            Self::Provision => "Provisions",
            Self::Cluster => "Clusters",
            Self::Host => "Hosts",
            Self::Zone => "Zones",
            Self::User => "Users",
            Self::Group => "Groups",
            Self::Vdc => "VDCs",
            Self::Acl => "ACLs",
            Self::Support => "Support",
        }
    }
}

/// View loaded for a route. Several routes may share one screen
/// (create and update forms, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScreenKey {
    // Instances
    VirtualMachines,
    VirtualMachineDetail,
    VirtualRouters,
    VirtualRouterDetail,
    Services,
    ServiceDetail,
    // Templates
    VmTemplates,
    InstantiateVmTemplate,
    CreateVmTemplate,
    VmTemplateDetail,
    VmGroups,
    CreateVmGroup,
    ServiceTemplates,
    InstantiateServiceTemplate,
    CreateServiceTemplate,
    ServiceTemplateDetail,
    VirtualRouterTemplates,
    InstantiateVirtualRouterTemplate,
    CreateVirtualRouterTemplate,
    VirtualRouterTemplateDetail,
    // Storage
    Datastores,
    CreateDatastore,
    DatastoreDetail,
    Images,
    CreateImage,
    Files,
    CreateFile,
    Backups,
    BackupDetail,
    Marketplaces,
    CreateMarketplace,
    MarketplaceApps,
    CreateMarketplaceApp,
    MarketplaceAppDetail,
    BackupJobs,
    CreateBackupJob,
    BackupJobDetail,
    // Networks
    VirtualNetworks,
    CreateVirtualNetwork,
    VirtualNetworkDetail,
    NetworkTemplates,
    InstantiateNetworkTemplate,
    CreateNetworkTemplate,
    SecurityGroups,
    CreateSecurityGroup,
    // Infrastructure
    Providers,
    CreateProvider,
    Provisions,
    CreateProvision,
    Clusters,
    CreateCluster,
    ClusterDetail,
    Hosts,
    CreateHost,
    HostDetail,
    Zones,
    // System
    Users,
    CreateUser,
    UserDetail,
    Groups,
    CreateGroup,
    GroupDetail,
    Vdcs,
    CreateVdc,
    VdcDetail,
    Acls,
    CreateAcl,
    Support,
}
