//! Stats arithmetic for one-shot container stat reads.
//!
//! Pure logic — no daemon access. The caller fetches a
//! `stream=false` stats snapshot and passes it in.

use crate::raw::RawStats;
use crate::types::{ContainerStats, NetworkIo};

/// CPU usage percent from the cpu/precpu counter deltas.
///
/// The daemon samples twice for a one-shot read; usage is the container's
/// share of the system delta scaled by the online CPU count, as `docker
/// stats` reports it. Returns 0.0 when either counter did not advance
/// (including the very first sample, where precpu is empty).
pub fn cpu_percent(stats: &RawStats) -> f64 {
    let cpu_delta = stats
        .cpu_stats
        .cpu_usage
        .total_usage
        .saturating_sub(stats.precpu_stats.cpu_usage.total_usage);

    let system_delta = match (
        stats.cpu_stats.system_cpu_usage,
        stats.precpu_stats.system_cpu_usage,
    ) {
        (Some(now), Some(pre)) => now.saturating_sub(pre),
        _ => 0,
    };

    if cpu_delta == 0 || system_delta == 0 {
        return 0.0;
    }

    let cpus = stats.cpu_stats.online_cpus.unwrap_or(1).max(1) as f64;
    let pct = (cpu_delta as f64 / system_delta as f64) * cpus * 100.0;
    (pct * 100.0).round() / 100.0
}

/// Sum network counters across all interfaces.
pub fn network_totals(stats: &RawStats) -> NetworkIo {
    let mut totals = NetworkIo {
        rx_bytes: 0,
        tx_bytes: 0,
    };
    if let Some(networks) = &stats.networks {
        for iface in networks.values() {
            totals.rx_bytes += iface.rx_bytes;
            totals.tx_bytes += iface.tx_bytes;
        }
    }
    totals
}

/// Reduce a raw stats snapshot to the dashboard's view.
pub fn summarize(stats: &RawStats) -> ContainerStats {
    ContainerStats {
        cpu_usage: cpu_percent(stats),
        memory_usage: stats.memory_stats.usage.unwrap_or(0),
        memory_limit: stats.memory_stats.limit.unwrap_or(0),
        network_io: network_totals(stats),
    }
}
