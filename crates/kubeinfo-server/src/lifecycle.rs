//! Server lifecycle: `Running -> Draining -> Stopped`.
//!
//! Only the shutdown path writes the phase. Request handlers read it (the
//! readiness probe reports draining).

use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    Running = 0,
    Draining = 1,
    Stopped = 2,
}

impl Phase {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => Phase::Running,
            1 => Phase::Draining,
            _ => Phase::Stopped,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::Draining => "draining",
            Phase::Stopped => "stopped",
        }
    }
}

#[derive(Debug)]
pub struct Lifecycle {
    phase: AtomicU8,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Running as u8),
        }
    }

    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Running -> Draining. Returns false if draining had already begun.
    pub fn begin_drain(&self) -> bool {
        self.phase
            .compare_exchange(
                Phase::Running as u8,
                Phase::Draining as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Terminal. Valid from either earlier phase (a serve error skips draining).
    pub fn mark_stopped(&self) {
        self.phase.store(Phase::Stopped as u8, Ordering::Release);
    }
}
