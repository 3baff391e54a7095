pub mod gpu;

use crate::inventory::Server;
use nvml_wrapper::Nvml;
use sysinfo::System;


/// Builds the local machine's inventory: one server entry named after the
/// host, holding whatever devices NVML reports.
pub fn take_local_inventory(nvml: Option<&Nvml>) -> Server {
    let hostname = System::host_name().unwrap_or_else(|| "unknown".to_string());

    Server {
        name: hostname,
        devices: gpu::take_gpus(nvml),
    }
}
