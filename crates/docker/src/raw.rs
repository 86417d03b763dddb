//! Deserialization targets matching the Docker Engine API's own JSON.
//!
//! Listing endpoints use PascalCase keys; the stats endpoint uses
//! snake_case. Only the fields the dashboard consumes are declared.

use std::collections::HashMap;

use serde::Deserialize;

/// One entry from `GET /containers/json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawContainer {
    pub id: String,
    /// Container names as reported by the daemon, each with a leading `/`.
    #[serde(default)]
    pub names: Vec<String>,
    pub image: String,
    /// Lifecycle state, e.g. `running`, `exited`.
    pub state: String,
    /// Human-readable status, e.g. `Up 2 hours`.
    pub status: String,
    /// Creation time as Unix seconds.
    pub created: i64,
    #[serde(default)]
    pub ports: Vec<RawPort>,
}

/// A published or exposed port on a container.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawPort {
    pub private_port: u16,
    pub public_port: Option<u16>,
    #[serde(rename = "Type")]
    pub kind: String,
}

/// Response of `GET /containers/{id}/stats?stream=false`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStats {
    pub cpu_stats: RawCpuStats,
    pub precpu_stats: RawCpuStats,
    #[serde(default)]
    pub memory_stats: RawMemoryStats,
    /// Per-interface network counters; absent for host-networked containers.
    pub networks: Option<HashMap<String, RawNetworkStats>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCpuStats {
    pub cpu_usage: RawCpuUsage,
    pub system_cpu_usage: Option<u64>,
    pub online_cpus: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCpuUsage {
    pub total_usage: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMemoryStats {
    pub usage: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNetworkStats {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Subset of `GET /info`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSystemInfo {
    pub containers: i64,
    pub images: i64,
}

/// Response of `GET /volumes`. The daemon reports `null` instead of an
/// empty array when no volumes exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawVolumeList {
    #[serde(default)]
    pub volumes: Option<Vec<serde_json::Value>>,
}
