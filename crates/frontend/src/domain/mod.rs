pub mod acl;
pub mod provider;
pub mod vm;
