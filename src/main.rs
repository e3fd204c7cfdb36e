//! buildinfo CLI
//!
//! Prints the build metadata compiled into this binary.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use buildinfo::BuildConfig;

#[derive(Parser)]
#[command(name = "buildinfo")]
#[command(about = "Show build metadata compiled into this binary", long_about = None)]
#[command(version = buildinfo::build_info::RELEASE_VERSION)]
struct Cli {
    /// Which report to print
    #[arg(value_enum, default_value_t = Report::Full)]
    report: Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum Report {
    /// Basic info followed by the module table
    Full,
    /// Build time, uptime, hash, version and toolchain
    Basic,
    /// Compiled-in dependency versions
    Modules,
    /// Machine-readable snapshot
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr to keep reports on stdout clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("buildinfo=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let info = buildinfo::init(BuildConfig::compiled());
    let cli = Cli::parse();
    match cli.report {
        Report::Full => print!("{}", info.full_info()),
        Report::Basic => print!("{}", info.basic_info()),
        Report::Modules => print!("{}", info.module_info()),
        Report::Json => println!("{}", serde_json::to_string_pretty(&info.snapshot())?),
    }

    Ok(())
}
