use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::wire::{number_from_string, one_or_many, optional_number_from_string, Envelope};
use crate::shared::documents::ErrorMarked;
use crate::shared::selection::RowId;

// ============================================================================
// Aggregate
// ============================================================================

/// Виртуальная машина
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachine {
    #[serde(rename = "ID", deserialize_with = "number_from_string")]
    pub id: RowId,

    #[serde(rename = "NAME")]
    pub name: String,

    #[serde(rename = "UNAME", default)]
    pub owner: String,

    #[serde(rename = "GNAME", default)]
    pub group: String,

    #[serde(rename = "STATE", default, deserialize_with = "optional_number_from_string")]
    pub state: Option<u64>,

    #[serde(rename = "LCM_STATE", default, deserialize_with = "optional_number_from_string")]
    pub lcm_state: Option<u64>,

    /// Start time, seconds since epoch
    #[serde(rename = "STIME", default, deserialize_with = "optional_number_from_string")]
    pub stime: Option<u64>,

    #[serde(rename = "USER_TEMPLATE", default)]
    pub user_template: Value,
}

impl VirtualMachine {
    /// Text of the error marker, if the VM carries a non-empty one.
    pub fn error_message(&self) -> Option<&str> {
        ["ERROR", "SCHED_MESSAGE"]
            .iter()
            .filter_map(|key| self.user_template.get(key).and_then(Value::as_str))
            .map(str::trim)
            .find(|msg| !msg.is_empty())
    }

    /// `#id | name` heading of the detail pane
    pub fn heading(&self) -> String {
        format!("#{} | {}", self.id, self.name)
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.stime
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    pub fn start_time_display(&self) -> String {
        self.start_time()
            .map(|t| t.format("%d.%m.%Y %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn state_label(&self) -> &'static str {
        match (self.state, self.lcm_state) {
            (Some(0), _) => "INIT",
            (Some(1), _) => "PENDING",
            (Some(2), _) => "HOLD",
            (Some(3), Some(1)) => "PROLOG",
            (Some(3), Some(2)) => "BOOT",
            (Some(3), Some(3)) => "RUNNING",
            (Some(3), Some(4)) => "MIGRATE",
            (Some(3), Some(36)) => "BOOT_FAILURE",
            (Some(3), _) => "ACTIVE",
            (Some(4), _) => "STOPPED",
            (Some(5), _) => "SUSPENDED",
            (Some(6), _) => "DONE",
            (Some(8), _) => "POWEROFF",
            (Some(9), _) => "UNDEPLOYED",
            (Some(10), _) => "CLONING",
            (Some(11), _) => "CLONING_FAILURE",
            _ => "UNKNOWN",
        }
    }
}

impl ErrorMarked for VirtualMachine {
    fn row_id(&self) -> RowId {
        self.id
    }

    fn has_error(&self) -> bool {
        self.error_message().is_some()
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmData {
    #[serde(rename = "VM")]
    pub vm: VirtualMachine,
}

/// `GET /api/vm/info/{id}`
pub type VmResponse = Envelope<VmData>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmPool {
    #[serde(rename = "VM", default, deserialize_with = "one_or_many")]
    pub vm: Vec<VirtualMachine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmPoolData {
    #[serde(rename = "VM_POOL")]
    pub vm_pool: VmPool,
}

/// `GET /api/vmpool/info`
pub type VmPoolResponse = Envelope<VmPoolData>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vm(template: Value) -> VirtualMachine {
        serde_json::from_value(json!({
            "ID": "9",
            "NAME": "web",
            "UNAME": "oneadmin",
            "GNAME": "oneadmin",
            "STATE": "3",
            "LCM_STATE": "3",
            "STIME": "1700000000",
            "USER_TEMPLATE": template
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_info_response() {
        let response: VmResponse = serde_json::from_value(json!({
            "data": { "VM": { "ID": "42", "NAME": "db" } }
        }))
        .unwrap();
        assert_eq!(response.data.vm.id, 42);
        assert_eq!(response.data.vm.heading(), "#42 | db");
        assert_eq!(response.data.vm.state_label(), "UNKNOWN");
    }

    #[test]
    fn test_error_marker() {
        assert_eq!(vm(json!({ "ERROR": "boot failed" })).error_message(), Some("boot failed"));
        assert_eq!(vm(json!({ "ERROR": "", "SCHED_MESSAGE": "no host" })).error_message(), Some("no host"));
        assert!(!vm(json!({ "ERROR": " " })).has_error());
        assert!(!vm(Value::Null).has_error());
    }

    #[test]
    fn test_state_and_start_time() {
        let vm = vm(json!({}));
        assert_eq!(vm.state_label(), "RUNNING");
        assert_eq!(vm.start_time_display(), "14.11.2023 22:13:20");
    }

    #[test]
    fn test_pool_with_single_vm() {
        let response: VmPoolResponse = serde_json::from_value(json!({
            "data": { "VM_POOL": { "VM": { "ID": "1", "NAME": "one" } } }
        }))
        .unwrap();
        assert_eq!(response.data.vm_pool.vm.len(), 1);
    }
}
