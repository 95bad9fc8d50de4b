//! Process observation.
//!
//! Point-in-time reads of the host process (memory, CPU time, pid, hostname).
//! Nothing here accumulates across calls; each capture is independent.

pub mod process;

pub use process::{hostname, ProcessSnapshot, RUNTIME_VERSION};
