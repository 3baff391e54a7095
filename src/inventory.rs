use serde::Serialize;

pub type GpuIndex = u32;


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    pub name: String,
    pub devices: Vec<Gpu>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gpu {
    pub name: String,
    pub index: GpuIndex,

    // Pre-formatted display strings, e.g. "512MiB". Callers that need
    // numbers go through memory::parse_memory.
    pub free_memory: String,
    pub used_memory: String,
    pub total_memory: String,
}
