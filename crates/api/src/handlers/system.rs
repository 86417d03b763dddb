//! Handlers for host system statistics.
//!
//! `/proc` and sysfs contents are parsed by the pure functions in
//! `homedash_core::metrics`; memory, load, disk, and hostname come from
//! libc syscalls run under `spawn_blocking`. Stats responses are cached
//! for a few seconds so dashboard polling stays cheap.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use homedash_core::metrics::{self, CpuModel};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// CPU section of the stats payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuReport {
    /// Whole-percent CPU usage.
    pub usage: u8,
    pub cores: usize,
    /// 1-, 5-, and 15-minute load averages.
    pub load_average: [f64; 3],
}

/// RAM section, in GiB with two decimals.
#[derive(Debug, Clone, Serialize)]
pub struct RamReport {
    pub used: f64,
    pub total: f64,
    pub percentage: u8,
}

/// Disk section for the filesystem containing `DATA_DIR`, in whole GiB.
#[derive(Debug, Clone, Serialize)]
pub struct DiskReport {
    pub used: u64,
    pub total: u64,
    pub percentage: u8,
    pub available: u64,
}

/// CPU temperature; `value` is `null` when no thermal source is readable.
#[derive(Debug, Clone, Serialize)]
pub struct TempReport {
    pub value: Option<i32>,
    pub unit: &'static str,
}

/// Full payload of `GET /system/stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub cpu: CpuReport,
    pub ram: RamReport,
    pub disk: DiskReport,
    pub temp: TempReport,
    /// Host uptime in seconds.
    pub uptime: u64,
    pub hostname: String,
    pub platform: &'static str,
    pub arch: &'static str,
}

/// Payload of `GET /system/info`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: &'static str,
    pub arch: &'static str,
    pub server_version: &'static str,
    pub cpus: Vec<CpuModel>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Cache key for the stats endpoint.
const STATS_CACHE_KEY: &str = "system:stats";

/// GET /system/stats
///
/// Returns a host resource snapshot, served from the short-TTL cache
/// when one is still fresh.
pub async fn system_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    {
        let mut cache = state.stats_cache.lock().await;
        if let Some(stats) = cache.get(&STATS_CACHE_KEY) {
            return Ok(Json(stats.clone()));
        }
    }

    let stats = collect_system_stats().await?;

    let mut cache = state.stats_cache.lock().await;
    cache.insert(STATS_CACHE_KEY, stats.clone());

    Ok(Json(stats))
}

/// GET /system/info
///
/// Static host identification plus the CPU inventory.
pub async fn system_info() -> AppResult<impl IntoResponse> {
    let cpuinfo = tokio::fs::read_to_string("/proc/cpuinfo")
        .await
        .unwrap_or_default();
    let cpus = metrics::parse_cpuinfo(&cpuinfo);

    let hostname = tokio::task::spawn_blocking(read_hostname)
        .await
        .map_err(|e| AppError::InternalError(format!("Hostname task failed: {e}")))?;

    Ok(Json(SystemInfo {
        hostname,
        platform: std::env::consts::OS,
        arch: std::env::consts::ARCH,
        server_version: env!("CARGO_PKG_VERSION"),
        cpus,
    }))
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Raw numbers gathered from libc in one blocking pass.
struct HostSnapshot {
    ram_total_bytes: u64,
    ram_used_bytes: u64,
    uptime_secs: u64,
    load_average: [f64; 3],
    disk_total_bytes: u64,
    disk_available_bytes: u64,
    hostname: String,
}

/// Gather one full stats snapshot.
async fn collect_system_stats() -> Result<SystemStats, AppError> {
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "/".to_string());

    let snapshot = tokio::task::spawn_blocking(move || read_host_snapshot(&data_dir))
        .await
        .map_err(|e| AppError::InternalError(format!("Stats task failed: {e}")))?;

    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let usage = read_cpu_usage(cores, snapshot.load_average[0]).await;
    let temp_value = read_temperature().await;

    let disk_used = snapshot
        .disk_total_bytes
        .saturating_sub(snapshot.disk_available_bytes);

    Ok(SystemStats {
        cpu: CpuReport {
            usage,
            cores,
            load_average: snapshot.load_average,
        },
        ram: RamReport {
            used: metrics::to_gib(snapshot.ram_used_bytes),
            total: metrics::to_gib(snapshot.ram_total_bytes),
            percentage: metrics::percentage(snapshot.ram_used_bytes, snapshot.ram_total_bytes),
        },
        disk: DiskReport {
            used: metrics::to_whole_gib(disk_used),
            total: metrics::to_whole_gib(snapshot.disk_total_bytes),
            percentage: metrics::percentage(disk_used, snapshot.disk_total_bytes),
            available: metrics::to_whole_gib(snapshot.disk_available_bytes),
        },
        temp: TempReport {
            value: temp_value,
            unit: "C",
        },
        uptime: snapshot.uptime_secs,
        hostname: snapshot.hostname,
        platform: std::env::consts::OS,
        arch: std::env::consts::ARCH,
    })
}

/// CPU usage from `/proc/stat`, falling back to the normalized load
/// average when the proc file is unreadable or malformed.
async fn read_cpu_usage(cores: usize, load_one: f64) -> u8 {
    match tokio::fs::read_to_string("/proc/stat").await {
        Ok(stat) => metrics::parse_cpu_usage(&stat)
            .unwrap_or_else(|| metrics::usage_from_load(load_one, cores)),
        Err(_) => metrics::usage_from_load(load_one, cores),
    }
}

/// Thermal source paths probed in order.
const TEMP_PATHS: [&str; 2] = [
    "/sys/class/thermal/thermal_zone0/temp",
    "/sys/class/hwmon/hwmon0/temp1_input",
];

async fn read_temperature() -> Option<i32> {
    for path in TEMP_PATHS {
        if let Ok(raw) = tokio::fs::read_to_string(path).await {
            if let Some(degrees) = metrics::parse_millidegrees(&raw) {
                return Some(degrees);
            }
        }
    }
    None
}

fn read_host_snapshot(data_dir: &str) -> HostSnapshot {
    let (ram_total_bytes, ram_used_bytes, uptime_secs) = read_memory_and_uptime();
    let (disk_total_bytes, disk_available_bytes) = read_disk_stats(data_dir);

    HostSnapshot {
        ram_total_bytes,
        ram_used_bytes,
        uptime_secs,
        load_average: read_load_average(),
        disk_total_bytes,
        disk_available_bytes,
        hostname: read_hostname(),
    }
}

/// Total/used RAM and uptime via `libc::sysinfo`; zeroed on failure or
/// non-Linux hosts.
fn read_memory_and_uptime() -> (u64, u64, u64) {
    #[cfg(target_os = "linux")]
    {
        use std::mem::MaybeUninit;

        let mut info = MaybeUninit::<libc::sysinfo>::uninit();

        // Safety: sysinfo fills the struct for a valid pointer.
        let ret = unsafe { libc::sysinfo(info.as_mut_ptr()) };
        if ret == 0 {
            let info = unsafe { info.assume_init() };
            let unit = u64::from(info.mem_unit.max(1));
            let total = info.totalram as u64 * unit;
            let free = info.freeram as u64 * unit;
            return (
                total,
                total.saturating_sub(free),
                info.uptime.max(0) as u64,
            );
        }
    }

    (0, 0, 0)
}

/// 1/5/15-minute load averages; zeroed when unavailable.
fn read_load_average() -> [f64; 3] {
    #[cfg(unix)]
    {
        let mut loads = [0f64; 3];

        // Safety: getloadavg writes at most three doubles.
        let ret = unsafe { libc::getloadavg(loads.as_mut_ptr(), 3) };
        if ret == 3 {
            return loads;
        }
    }

    [0.0, 0.0, 0.0]
}

/// Total/available bytes for the filesystem containing `path` via
/// `statvfs`; zeroed on failure or non-Unix hosts.
fn read_disk_stats(path: &str) -> (u64, u64) {
    #[cfg(unix)]
    {
        use std::ffi::CString;
        use std::mem::MaybeUninit;

        let c_path = CString::new(path).unwrap_or_else(|_| CString::new("/").unwrap());
        let mut stat = MaybeUninit::<libc::statvfs>::uninit();

        // Safety: statvfs is well-defined for valid paths.
        let ret = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
        if ret == 0 {
            let stat = unsafe { stat.assume_init() };
            let block_size = stat.f_frsize as u64;
            let total = stat.f_blocks as u64 * block_size;
            let available = stat.f_bavail as u64 * block_size;
            return (total, available);
        }
    }

    (0, 0)
}

fn read_hostname() -> String {
    #[cfg(unix)]
    {
        let mut buf = [0u8; 256];

        // Safety: gethostname writes a NUL-terminated name within len bytes.
        let ret = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
        if ret == 0 {
            let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
            if let Ok(name) = std::str::from_utf8(&buf[..end]) {
                return name.to_string();
            }
        }
    }

    "unknown".to_string()
}
