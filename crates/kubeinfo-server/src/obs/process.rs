//! Snapshot of the current process.
//!
//! Memory sizes come from `sysinfo`; CPU times and peak RSS come from
//! `getrusage(2)` because `sysinfo` only reports CPU as a percentage.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

use kubeinfo_core::payload::{CpuUsage, MemoryUsage};

/// Reported as the `version` of `/metrics`: the compiler that built this binary.
pub const RUNTIME_VERSION: &str = env!("KUBEINFO_RUSTC_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSnapshot {
    pub pid: u32,
    pub memory: MemoryUsage,
    pub cpu: CpuUsage,
}

impl ProcessSnapshot {
    /// Read the current process. Fields that cannot be read are reported as 0.
    pub fn capture() -> Self {
        let pid = std::process::id();
        let (rss, virtual_bytes) = resident_and_virtual(pid);
        let (cpu, max_rss) = rusage_self().unwrap_or_default();

        Self {
            pid,
            memory: MemoryUsage {
                rss,
                virtual_bytes,
                max_rss,
            },
            cpu,
        }
    }
}

/// OS hostname at call time, `"unknown"` when it cannot be read.
pub fn hostname() -> String {
    System::host_name().unwrap_or_else(|| "unknown".to_string())
}

fn resident_and_virtual(pid: u32) -> (u64, u64) {
    let sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    match sys.process(Pid::from_u32(pid)) {
        Some(p) => (p.memory(), p.virtual_memory()),
        None => {
            tracing::debug!(pid, "current process not visible to sysinfo");
            (0, 0)
        }
    }
}

#[cfg(unix)]
fn rusage_self() -> Option<(CpuUsage, u64)> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: the pointer is valid for writes of one `rusage`.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: getrusage returned 0, so the struct is initialized.
    let usage = unsafe { usage.assume_init() };

    let micros = |tv: libc::timeval| {
        let secs = u64::try_from(tv.tv_sec).unwrap_or(0);
        let usecs = u64::try_from(tv.tv_usec).unwrap_or(0);
        secs.saturating_mul(1_000_000).saturating_add(usecs)
    };

    // ru_maxrss is bytes on macOS, KiB elsewhere.
    let max_rss = u64::try_from(usage.ru_maxrss).unwrap_or(0);
    let max_rss = if cfg!(target_os = "macos") { max_rss } else { max_rss.saturating_mul(1024) };

    Some((
        CpuUsage {
            user: micros(usage.ru_utime),
            system: micros(usage.ru_stime),
        },
        max_rss,
    ))
}

#[cfg(not(unix))]
fn rusage_self() -> Option<(CpuUsage, u64)> {
    None
}
