mod collectors;
mod filter;
mod inventory;
mod memory;
mod mode;
mod report;

use clap::Parser;
use colored::Colorize;
use nvml_wrapper::Nvml;

use crate::inventory::{Gpu, Server};
use crate::mode::{FilterMode, OutputFormat};


fn main() {

    let cli = Cli::parse();

    // Initialize NVML for device discovery
    let nvml = match Nvml::init() {
        Ok(nvml) => Some(nvml),
        Err(e) => {
            eprintln!("Failed to initialize NVML: {}", e);
            eprintln!("{}", "Reporting an empty device list".yellow());
            None
        }
    };

    let servers = vec![collectors::take_local_inventory(nvml.as_ref())];

    let threshold = cli.free_threshold;
    let is_free = |gpu: &Gpu| {
        matches!(memory::parse_memory(&gpu.used_memory), Ok(used) if used <= threshold)
    };

    let servers = match cli.filter {
        FilterMode::All => servers,
        FilterMode::Free => filter::filter_free_gpus(&servers, is_free),
        FilterMode::Used => filter::filter_used_gpus(&servers, is_free),
    };

    if let Err(e) = print_inventory(&servers, cli.format) {
        eprintln!("Error printing inventory: {}", e);
        std::process::exit(1);
    }
}

fn print_inventory(
    servers: &[Server],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Table => println!("{}", report::build_report(servers)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(servers)?),
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "gpuview")]
#[command(about = "Report GPU availability on compute servers", long_about = None)]
struct Cli {
    /// Which devices to include in the report
    #[arg(short, long, value_enum, default_value_t = FilterMode::All)]
    filter: FilterMode,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// A device counts as free while its used memory stays at or below this
    /// many MiB
    #[arg(long, default_value_t = 0)]
    free_threshold: i64,
}
