use serde::{Deserialize, Serialize};

use super::rule::translate_acl;
use crate::domain::wire::{number_from_string, one_or_many};

// ============================================================================
// Record
// ============================================================================

/// ACL rule as returned by `GET /api/acl/info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    #[serde(rename = "ID", deserialize_with = "number_from_string")]
    pub id: u64,

    /// Rule in the `<user> <resources>/<selector> <rights> [<zone>]` form
    #[serde(rename = "STRING")]
    pub string: String,
}

impl Acl {
    pub fn readable(&self) -> String {
        translate_acl(&self.string)
    }

    pub fn caption(&self) -> String {
        format!("#{}", self.id)
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AclPool {
    #[serde(rename = "ACL", default, deserialize_with = "one_or_many")]
    pub acl: Vec<Acl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AclPoolData {
    #[serde(rename = "ACL_POOL")]
    pub acl_pool: AclPool,
}

pub type AclPoolResponse = crate::domain::wire::Envelope<AclPoolData>;
