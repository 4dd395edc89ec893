pub mod aggregate;
pub mod rule;

pub use aggregate::{Acl, AclPoolResponse};
pub use rule::{translate_acl, AclRule, AclSelector, Right, RuleResource};
