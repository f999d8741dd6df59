use serde::Serialize;
use serde_json::{Map, Value};
use sysinfo::{ProcessesToUpdate, System};

use debughelper_core::{NodeError, Result};

use crate::model::MEMORY_SIZE_VALUE;

const MIB: usize = 1024 * 1024;
const FILL_BYTE: u8 = 0xA5;

/// Memory figures captured while the garbage buffers are still alive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryReport {
    pub requested_mib: f64,
    pub allocated_bytes: u64,
    pub chunks: usize,
    /// Resident set size of this process.
    pub rss_bytes: u64,
    pub virtual_bytes: u64,
    pub system_total_bytes: u64,
    pub system_used_bytes: u64,
}

impl MemoryReport {
    pub fn to_json(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(NodeError::Generic(format!(
                "memory report serialized to {other} instead of an object"
            ))),
            Err(err) => Err(NodeError::Generic(err.to_string())),
        }
    }
}

/// Allocate roughly `size_mib` MiB in 1 MiB chunks, write every byte, and
/// report memory usage before releasing the buffers.
///
/// Reservation failures are returned as [`NodeError::Memory`] instead of
/// aborting the process.
pub fn generate_garbage_memory(size_mib: f64) -> Result<MemoryReport> {
    if !size_mib.is_finite() || size_mib < 0.0 {
        return Err(NodeError::invalid_parameter(
            MEMORY_SIZE_VALUE,
            format!("expected a non-negative size in MiB, got {size_mib}"),
        ));
    }

    let total = (size_mib * MIB as f64).ceil() as usize;
    let mut chunks: Vec<Vec<u8>> = Vec::new();
    chunks
        .try_reserve_exact(total.div_ceil(MIB))
        .map_err(|err| NodeError::Memory(err.to_string()))?;

    let mut remaining = total;
    while remaining > 0 {
        let len = remaining.min(MIB);
        let mut chunk = Vec::new();
        chunk.try_reserve_exact(len).map_err(|err| {
            NodeError::Memory(format!(
                "failed to reserve {len} bytes after {} bytes: {err}",
                total - remaining
            ))
        })?;
        chunk.resize(len, FILL_BYTE);
        chunks.push(chunk);
        remaining -= len;
    }

    std::hint::black_box(&chunks);
    let usage = ProcessUsage::current();
    tracing::debug!(
        event = "garbage_allocated",
        bytes = total,
        chunks = chunks.len(),
        rss_bytes = usage.rss_bytes
    );

    Ok(MemoryReport {
        requested_mib: size_mib,
        allocated_bytes: total as u64,
        chunks: chunks.len(),
        rss_bytes: usage.rss_bytes,
        virtual_bytes: usage.virtual_bytes,
        system_total_bytes: usage.system_total_bytes,
        system_used_bytes: usage.system_used_bytes,
    })
}

#[derive(Debug, Default, Clone, Copy)]
struct ProcessUsage {
    rss_bytes: u64,
    virtual_bytes: u64,
    system_total_bytes: u64,
    system_used_bytes: u64,
}

impl ProcessUsage {
    fn current() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        let mut usage = ProcessUsage {
            system_total_bytes: system.total_memory(),
            system_used_bytes: system.used_memory(),
            ..ProcessUsage::default()
        };

        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => pid,
            Err(err) => {
                tracing::warn!(event = "process_usage_unavailable", error = err);
                return usage;
            }
        };
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        if let Some(process) = system.process(pid) {
            usage.rss_bytes = process.memory();
            usage.virtual_bytes = process.virtual_memory();
        }
        usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_whole_and_partial_chunks() {
        let report = generate_garbage_memory(2.5).expect("small allocation succeeds");
        assert_eq!(report.allocated_bytes, (2 * MIB + MIB / 2) as u64);
        assert_eq!(report.chunks, 3);
    }

    #[test]
    fn zero_size_allocates_nothing() {
        let report = generate_garbage_memory(0.0).expect("empty allocation succeeds");
        assert_eq!(report.allocated_bytes, 0);
        assert_eq!(report.chunks, 0);
    }

    #[test]
    fn rejects_negative_and_non_finite_sizes() {
        for size in [-1.0, f64::NAN, f64::INFINITY] {
            let result = generate_garbage_memory(size);
            assert!(matches!(result, Err(NodeError::InvalidParameter { .. })), "{size}");
        }
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let report = generate_garbage_memory(1.0).expect("allocation succeeds");
        let json = report.to_json().expect("object");
        assert_eq!(json["allocatedBytes"], Value::from(MIB as u64));
        assert!(json.contains_key("rssBytes"));
        assert!(json.contains_key("systemTotalBytes"));
    }
}
