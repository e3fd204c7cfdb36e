//! Process start time
//!
//! Startup is taken from the OS process table, so it does not depend on when
//! the registry happens to be built.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use sysinfo::{Pid, ProcessesToUpdate, System};

/// Wall-clock process start paired with a monotonic anchor for uptime
#[derive(Debug, Clone, Copy)]
pub struct Startup {
    pub(crate) wall: DateTime<Utc>,
    pub(crate) mono: Instant,
}

impl Startup {
    /// When the current process began running, to whole-second precision
    ///
    /// Falls back to the current instant where the OS does not report it.
    pub fn process() -> Self {
        let now = Self::now();
        match process_start_secs().and_then(|secs| DateTime::from_timestamp(secs, 0)) {
            Some(start) if start <= now.wall => {
                let running = (now.wall - start).to_std().unwrap_or_default();
                Self {
                    wall: start,
                    mono: now.mono.checked_sub(running).unwrap_or(now.mono),
                }
            }
            _ => {
                tracing::debug!("Process start time unavailable, using current time");
                now
            }
        }
    }

    /// The current instant
    pub fn now() -> Self {
        Self {
            wall: Utc::now(),
            mono: Instant::now(),
        }
    }

    pub fn wall_time(&self) -> DateTime<Utc> {
        self.wall
    }

    /// Monotonic time since startup
    pub fn elapsed(&self) -> Duration {
        self.mono.elapsed()
    }
}

fn process_start_secs() -> Option<i64> {
    let pid = Pid::from_u32(std::process::id());
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]));

    sys.process(pid)
        .map(|p| p.start_time())
        .and_then(|secs| i64::try_from(secs).ok())
        .filter(|&secs| secs > 0)
}
