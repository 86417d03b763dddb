//! Typed views of daemon data as the dashboard serves them.
//!
//! Serialized in camelCase to match the HTTP surface.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::raw::{RawContainer, RawPort};

/// A published or exposed port, dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    pub private_port: u16,
    pub public_port: Option<u16>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A container as listed on the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    pub state: String,
    pub ports: Vec<PortMapping>,
    pub created: DateTime<Utc>,
}

/// One-shot resource usage of a single container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStats {
    /// CPU usage as a percentage of total host capacity.
    pub cpu_usage: f64,
    pub memory_usage: u64,
    pub memory_limit: u64,
    #[serde(rename = "networkIO")]
    pub network_io: NetworkIo,
}

/// Cumulative network counters summed across interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkIo {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Daemon-wide object counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DockerSystemInfo {
    pub containers: i64,
    pub images: i64,
    pub volumes: usize,
    pub networks: usize,
}

impl From<RawPort> for PortMapping {
    fn from(raw: RawPort) -> Self {
        Self {
            private_port: raw.private_port,
            public_port: raw.public_port,
            kind: raw.kind,
        }
    }
}

impl From<RawContainer> for ContainerSummary {
    fn from(raw: RawContainer) -> Self {
        // The daemon prefixes every name with a slash.
        let name = raw
            .names
            .first()
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_else(|| raw.id.clone());

        Self {
            name,
            image: raw.image,
            status: raw.status,
            state: raw.state,
            ports: raw.ports.into_iter().map(PortMapping::from).collect(),
            created: DateTime::from_timestamp(raw.created, 0).unwrap_or_else(Utc::now),
            id: raw.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_FIXTURE: &str = r#"{
        "Id": "9f2d1c3b8a7e",
        "Names": ["/pihole"],
        "Image": "pihole/pihole:latest",
        "State": "running",
        "Status": "Up 3 days",
        "Created": 1700000000,
        "Ports": [
            { "IP": "0.0.0.0", "PrivatePort": 80, "PublicPort": 8080, "Type": "tcp" },
            { "PrivatePort": 53, "Type": "udp" }
        ]
    }"#;

    #[test]
    fn container_summary_from_daemon_json() {
        let raw: RawContainer = serde_json::from_str(LIST_FIXTURE).unwrap();
        let summary = ContainerSummary::from(raw);

        assert_eq!(summary.id, "9f2d1c3b8a7e");
        assert_eq!(summary.name, "pihole");
        assert_eq!(summary.image, "pihole/pihole:latest");
        assert_eq!(summary.state, "running");
        assert_eq!(summary.created.timestamp(), 1_700_000_000);
        assert_eq!(summary.ports.len(), 2);
        assert_eq!(summary.ports[0].public_port, Some(8080));
        assert_eq!(summary.ports[1].public_port, None);
        assert_eq!(summary.ports[1].kind, "udp");
    }

    #[test]
    fn summary_without_names_falls_back_to_id() {
        let raw: RawContainer = serde_json::from_str(
            r#"{
                "Id": "abc",
                "Names": [],
                "Image": "img",
                "State": "exited",
                "Status": "Exited (0)",
                "Created": 0,
                "Ports": []
            }"#,
        )
        .unwrap();
        assert_eq!(ContainerSummary::from(raw).name, "abc");
    }

    #[test]
    fn wire_serialization_is_camel_case() {
        let stats = ContainerStats {
            cpu_usage: 12.5,
            memory_usage: 1024,
            memory_limit: 2048,
            network_io: NetworkIo {
                rx_bytes: 10,
                tx_bytes: 20,
            },
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["cpuUsage"], 12.5);
        assert_eq!(json["memoryLimit"], 2048);
        assert_eq!(json["networkIO"]["rxBytes"], 10);
    }
}
