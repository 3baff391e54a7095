use crate::inventory::{Gpu, GpuIndex};
use crate::memory::format_mib;
use nvml_wrapper::Nvml;


pub fn take_gpus(nvml: Option<&Nvml>) -> Vec<Gpu> {
    let nvml = match nvml {
        Some(n) => n,
        None => return Vec::new(),
    };

    let device_count = match nvml.device_count() {
        Ok(count) => count,
        Err(_) => 0,
    };

    (0..device_count)
        .filter_map(|index| _collect_gpu(nvml, index as GpuIndex))
        .collect()
}

fn _collect_gpu(nvml: &Nvml, index: GpuIndex) -> Option<Gpu> {
    let device = match nvml.device_by_index(index as u32) {
        Ok(dev) => dev,
        Err(_) => return None,
    };

    let name = match device.name() {
        Ok(n) => n,
        Err(_) => return None,
    };

    let memory_info = match device.memory_info() {
        Ok(mem) => mem,
        Err(_) => return None,
    };

    Some(Gpu {
        name,
        index,
        free_memory: format_mib(memory_info.free),
        used_memory: format_mib(memory_info.used),
        total_memory: format_mib(memory_info.total),
    })
}
