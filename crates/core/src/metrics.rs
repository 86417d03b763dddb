//! Pure parsers and arithmetic for host metric sources.
//!
//! Pure logic — no file or syscall access. The caller reads `/proc` and
//! sysfs files (or invokes libc) and passes the raw contents in.

use serde::Serialize;

/// One gibibyte in bytes.
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// CPU usage percentage from the aggregate `cpu` line of `/proc/stat`.
///
/// Uses the cumulative counters since boot: the first seven fields are
/// user, nice, system, idle, iowait, irq, softirq; usage is
/// `round((total - idle) / total * 100)`. Returns `None` for malformed
/// input or all-zero counters.
pub fn parse_cpu_usage(stat: &str) -> Option<u8> {
    let line = stat.lines().next()?;
    let mut fields = line.split_whitespace();
    if fields.next()? != "cpu" {
        return None;
    }

    let values: Vec<u64> = fields
        .take(7)
        .map(|v| v.parse().ok())
        .collect::<Option<Vec<_>>>()?;
    if values.len() < 7 {
        return None;
    }

    let total: u64 = values.iter().sum();
    if total == 0 {
        return None;
    }
    let idle = values[3];
    let used = total - idle;

    Some(((used as f64 / total as f64) * 100.0).round() as u8)
}

/// Approximate CPU usage from the 1-minute load average, normalized by core
/// count and capped at 100. Fallback for hosts without a readable
/// `/proc/stat`.
pub fn usage_from_load(load_one: f64, cores: usize) -> u8 {
    if cores == 0 || load_one <= 0.0 {
        return 0;
    }
    let pct = (load_one / cores as f64) * 100.0;
    pct.round().min(100.0) as u8
}

/// A logical CPU as reported by `/proc/cpuinfo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuModel {
    /// Marketing name, e.g. `Intel(R) Core(TM) i5-8250U CPU @ 1.60GHz`.
    pub model: String,
    /// Clock speed in whole MHz.
    pub speed: u32,
}

/// Extract `(model name, cpu MHz)` pairs from `/proc/cpuinfo` contents.
///
/// Entries are matched positionally: the Nth `model name` line is paired
/// with the Nth `cpu MHz` line. A CPU whose block lacks either line is
/// skipped.
pub fn parse_cpuinfo(cpuinfo: &str) -> Vec<CpuModel> {
    let mut models = Vec::new();
    let mut speeds = Vec::new();

    for line in cpuinfo.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key.trim() {
            "model name" => models.push(value.trim().to_string()),
            "cpu MHz" => {
                if let Ok(mhz) = value.trim().parse::<f64>() {
                    speeds.push(mhz.round() as u32);
                }
            }
            _ => {}
        }
    }

    models
        .into_iter()
        .zip(speeds)
        .map(|(model, speed)| CpuModel { model, speed })
        .collect()
}

/// Convert a sysfs millidegree reading (e.g. `"45000\n"`) to whole °C.
pub fn parse_millidegrees(raw: &str) -> Option<i32> {
    let millis: i64 = raw.trim().parse().ok()?;
    Some((millis as f64 / 1000.0).round() as i32)
}

/// Bytes to GiB with two decimal places.
pub fn to_gib(bytes: u64) -> f64 {
    (bytes as f64 / GIB * 100.0).round() / 100.0
}

/// Bytes to whole GiB.
pub fn to_whole_gib(bytes: u64) -> u64 {
    (bytes as f64 / GIB).round() as u64
}

/// `used / total` as a rounded percentage; 0 when `total` is zero.
pub fn percentage(used: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((used as f64 / total as f64) * 100.0).round() as u8
}
