//! Human-readable build reports
//!
//! Renders the static build block, the module table and the time-dependent
//! basic report.

pub mod table;
pub mod time;

pub use table::TabTable;
pub use time::{format_elapsed, parse_epoch_seconds};

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::build_info::BuildConfig;
use crate::provenance::Module;

/// Unaligned rows for hash, version, toolchain and (if set) the build URL
pub fn static_block(config: &BuildConfig, toolchain_version: &str) -> String {
    let mut block = String::new();
    let _ = writeln!(block, "Build Hash:\t{}", config.build_hash);
    let _ = writeln!(block, "Release Version:\t{}", config.release_version);
    let _ = writeln!(block, "Rust Version:\t{}", toolchain_version);
    if !config.build_url.is_empty() {
        let _ = writeln!(block, "Build URL:\t{}", config.build_url);
    }
    block
}

/// `Modules:` followed by an aligned path/version table, empty without provenance
pub fn module_report(modules: Option<&[Module]>) -> String {
    let Some(modules) = modules else {
        return String::new();
    };

    let mut table = TabTable::new();
    for module in modules {
        let _ = writeln!(table, "{}\t{}", module.path, module.version);
    }
    format!("Modules:\n{}", table.render())
}

/// Inputs to the basic report at one point in time
pub struct BasicReport<'a> {
    /// None when the build time was not provided
    pub build_time: Option<DateTime<Utc>>,
    pub now: DateTime<Utc>,
    pub uptime_secs: u64,
    pub static_block: &'a str,
}

impl BasicReport<'_> {
    pub fn render(&self) -> String {
        let mut table = TabTable::new();
        if let Some(build_time) = self.build_time {
            let age = (self.now - build_time).num_seconds();
            let _ = writeln!(
                table,
                "Build Time:\t{} ({} ago)",
                build_time,
                format_elapsed(age)
            );
        }
        if self.uptime_secs != 0 {
            let uptime = i64::try_from(self.uptime_secs).unwrap_or(i64::MAX);
            let _ = writeln!(table, "Server Uptime:\t{}", format_elapsed(uptime));
        }
        table.push_str(self.static_block);
        table.render()
    }
}
