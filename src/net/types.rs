//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the lab-manager API payloads so serde decoding stays
//! schema-driven. Hardware fields the client never inspects individually
//! (disks, NICs) remain open-ended `serde_json::Value`s.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Bearer credential issued by `POST /api/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Opaque bearer token string.
    pub access_token: String,
    /// Token scheme, always `"bearer"`.
    pub token_type: String,
}

/// An account as returned by `/api/users/me` and `/api/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric account identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Whether the account has been deactivated.
    pub disabled: bool,
    /// Privilege flag granting user administration.
    pub is_admin: bool,
}

/// A virtual machine as returned by `GET /api/vms`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vm {
    /// Cluster-wide VM identifier.
    pub proxmox_id: i64,
    /// Display name, if the VM has one.
    pub name: Option<String>,
    /// Lifecycle status (e.g. `"running"`, `"stopped"`).
    pub status: String,
    /// Cluster node hosting the VM.
    pub node: String,
    /// Parsed hardware configuration.
    pub hardware_details: VmHardware,
}

/// Hardware subset the client renders and filters on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VmHardware {
    /// Free-form description; templates carry lab-group tags here.
    #[serde(default)]
    pub description: String,
    /// Nonzero when the VM is a clone template.
    #[serde(default)]
    pub template: i64,
    /// CPU topology.
    #[serde(default)]
    pub cpu: VmCpu,
    /// Configured memory in MiB; the hypervisor reports this as either a
    /// number or a numeric string.
    #[serde(default, deserialize_with = "deserialize_opt_i64_loose")]
    pub memory_mb: Option<i64>,
    /// Boot device order string, if configured.
    #[serde(default)]
    pub boot_order: Option<String>,
    /// Per-disk entries, not inspected by the client.
    #[serde(default)]
    pub disks: serde_json::Value,
    /// Per-NIC entries, not inspected by the client.
    #[serde(default)]
    pub network_interfaces: serde_json::Value,
}

/// CPU topology fields from the VM configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmCpu {
    /// Cores per socket.
    pub cores: Option<i64>,
    /// Socket count.
    pub sockets: Option<i64>,
    /// Emulated CPU type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Outcome of `POST /api/clone_templates`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneReport {
    /// Human-readable summary from the server.
    pub message: String,
    /// Clones created this run; absent when no templates were found.
    #[serde(default)]
    pub cloned_vms: Vec<ClonedVm>,
}

/// One clone produced by a clone-templates run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClonedVm {
    /// Source template name.
    pub template: Option<String>,
    /// VM identifier assigned to the clone.
    pub new_id: i64,
    /// Name assigned to the clone.
    pub new_name: String,
}

/// Generic `{"message": ...}` acknowledgement body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable summary from the server.
    pub message: String,
}

fn deserialize_opt_i64_loose<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        serde_json::Value::String(text) => text
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("non-numeric string: {text:?}"))),
        _ => Err(D::Error::custom("expected number, numeric string, or null")),
    }
}
